use largetty::session::{Frame, InputLevel};
use largetty::{FitResult, FontId};

const RESET: &str = "\x1B[0m";

fn level_color(level: InputLevel) -> u8 {
    match level {
        InputLevel::Normal => 63,
        InputLevel::Warning => 208,
        InputLevel::Danger => 9,
    }
}

/// Status line for a one-shot render, or `None` when nothing was degraded.
pub fn fit_notice(requested: &FontId, result: &FitResult) -> Option<String> {
    let mut notes = Vec::new();
    if result.font_used != *requested {
        notes.push(format!("font: {requested} → {} (auto-shrunk)", result.font_used));
    }
    if !result.complete {
        notes.push("text truncated".to_string());
    }
    (!notes.is_empty()).then(|| notes.join(", "))
}

/// Renders a session frame as an ANSI colored string.
pub fn frame_to_ansi(frame: &Frame, input: &str) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "\x1B[38;5;{}m> {input}{RESET}  ({} left)\n\n",
        level_color(frame.input_level),
        frame.remaining
    ));
    for line in frame.figlet.lines() {
        out.push_str(&format!("\x1B[38;5;168m{line}{RESET}\n"));
    }
    out.push_str(&format!("\n\x1B[3;38;5;241m{}{RESET}", frame.label));
    out
}
