//! Interactive session state as a pure `(state, event) -> state` machine.
//!
//! The front end feeds [`Event`]s into [`Session::update`] and renders the
//! [`Frame`] returned by [`Session::frame`]. Randomness is supplied by the
//! caller as an index so updates stay deterministic.
use crate::fit::{FitRequest, Fitter};
use crate::{FontCatalog, FontId};

/// Maximum number of characters accepted in the input line.
pub const CHAR_LIMIT: usize = 300;
/// Figlet rows available for the rendered text.
pub const MAX_FIG_ROWS: usize = 3;
/// Shown when the input line is empty.
pub const PLACEHOLDER: &str = "large-tty";
/// Columns reserved around the rendered text.
pub const SIDE_MARGIN: usize = 8;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    Resize { width: usize, height: usize },
    Input(char),
    Backspace,
    Clear,
    NextFont,
    PrevFont,
    /// Jump to the font at this index (taken modulo the font count)
    RandomFont(usize),
    TogglePlayRandom,
    /// Timer tick while random play is on; ignored otherwise
    RandomTick(usize),
    Quit,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub width: usize,
    pub height: usize,
    input: String,
    font_index: usize,
    font_count: usize,
    random_play: bool,
    quit: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum InputLevel {
    Normal,
    Warning,
    Danger,
}

/// Everything the front end needs to draw one screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    pub figlet: String,
    pub selected_font: FontId,
    pub used_font: FontId,
    pub complete: bool,
    pub label: String,
    pub remaining: usize,
    pub input_level: InputLevel,
}

impl Session {
    /// Starts an 80x24 session on the catalog's default font.
    pub fn new(catalog: &FontCatalog) -> Self {
        Self {
            width: 80,
            height: 24,
            input: String::new(),
            font_index: catalog.index_of(catalog.default_font()).unwrap_or(0),
            font_count: catalog.len().max(1),
            random_play: false,
            quit: false,
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn font_index(&self) -> usize {
        self.font_index
    }

    pub fn random_play(&self) -> bool {
        self.random_play
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn update(mut self, event: Event) -> Self {
        match event {
            Event::Resize { width, height } => {
                self.width = width;
                self.height = height;
            }
            Event::Input(ch) => {
                if !ch.is_control() && self.input.chars().count() < CHAR_LIMIT {
                    self.input.push(ch);
                }
            }
            Event::Backspace => {
                self.input.pop();
            }
            Event::Clear => self.input.clear(),
            Event::NextFont => self.font_index = (self.font_index + 1) % self.font_count,
            Event::PrevFont => {
                self.font_index = (self.font_index + self.font_count - 1) % self.font_count
            }
            Event::RandomFont(n) => self.font_index = n % self.font_count,
            Event::TogglePlayRandom => self.random_play = !self.random_play,
            Event::RandomTick(n) => {
                if self.random_play {
                    self.font_index = n % self.font_count;
                }
            }
            Event::Quit => self.quit = true,
        }
        self
    }

    pub fn frame(&self, catalog: &FontCatalog) -> Frame {
        let trimmed = self.input.trim();
        let text = if trimmed.is_empty() { PLACEHOLDER } else { trimmed };
        let selected = catalog
            .get(self.font_index)
            .cloned()
            .unwrap_or_else(|| catalog.default_font().clone());

        let request = FitRequest::new(
            text,
            selected.clone(),
            self.width.saturating_sub(SIDE_MARGIN),
            MAX_FIG_ROWS,
        );
        let result = Fitter::new(catalog, catalog.tiers()).fit(&request);

        let mut label = format!("font: {selected}");
        if result.font_used != selected {
            label.push_str(&format!(" → {} (auto-shrunk)", result.font_used));
        }
        label.push_str(&format!("  ({}/{})", self.font_index + 1, catalog.len()));

        let used = self.input.chars().count();
        let remaining = CHAR_LIMIT.saturating_sub(used);
        let input_level = match remaining {
            0 => InputLevel::Danger,
            1..=10 => InputLevel::Warning,
            _ => InputLevel::Normal,
        };

        Frame {
            figlet: result.block,
            selected_font: selected,
            used_font: result.font_used,
            complete: result.complete,
            label,
            remaining,
            input_level,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn term_only() -> FontCatalog {
        FontCatalog::from_fonts(Vec::new())
    }

    fn session() -> Session {
        Session::new(&term_only())
    }

    #[test]
    fn typing_and_editing() {
        let s = "hey!"
            .chars()
            .fold(session(), |s, c| s.update(Event::Input(c)))
            .update(Event::Backspace);
        assert_eq!(s.input(), "hey");
        assert_eq!(s.update(Event::Clear).input(), "");
    }

    #[test]
    fn control_characters_are_ignored() {
        let s = session().update(Event::Input('\u{1b}'));
        assert_eq!(s.input(), "");
    }

    #[test]
    fn input_is_limited() {
        let s = (0..CHAR_LIMIT + 5).fold(session(), |s, _| s.update(Event::Input('x')));
        assert_eq!(s.input().len(), CHAR_LIMIT);
    }

    #[test]
    fn random_tick_needs_random_play() {
        let s = session().update(Event::RandomTick(7));
        assert_eq!(s.font_index(), 0);
        let s = s.update(Event::TogglePlayRandom).update(Event::RandomTick(7));
        assert!(s.random_play());
        assert_eq!(s.font_index(), 0); // one font: 7 % 1
    }

    #[test]
    fn random_events_pick_modulo_font_count() {
        let catalog = FontCatalog::builtin();
        let s = Session::new(&catalog).update(Event::RandomFont(8));
        assert_eq!(catalog.get(s.font_index()).unwrap(), "mini");
        let s = s.update(Event::TogglePlayRandom).update(Event::RandomTick(7));
        assert_eq!(catalog.get(s.font_index()).unwrap(), "small");
        let s = s.update(Event::TogglePlayRandom).update(Event::RandomTick(0));
        assert!(!s.random_play());
        assert_eq!(catalog.get(s.font_index()).unwrap(), "small");
    }

    #[test]
    fn quit_sets_flag() {
        assert!(session().update(Event::Quit).should_quit());
    }

    #[test]
    fn empty_input_shows_placeholder() {
        let catalog = term_only();
        let frame = Session::new(&catalog).frame(&catalog);
        assert_eq!(frame.figlet, PLACEHOLDER);
        assert_eq!(frame.label, "font: term  (1/1)");
        assert_eq!(frame.input_level, InputLevel::Normal);
        assert!(frame.complete);
    }

    #[test]
    fn narrow_viewport_wraps() {
        let catalog = term_only();
        let s = "one two three"
            .chars()
            .fold(Session::new(&catalog), |s, c| s.update(Event::Input(c)))
            .update(Event::Resize { width: 16, height: 10 });
        let frame = s.frame(&catalog);
        assert_eq!(frame.figlet, "one two\nthree");
    }

    #[test]
    fn narrow_viewport_shrinks_bundled_font() {
        let catalog = FontCatalog::builtin();
        let s = Session::new(&catalog).update(Event::Resize { width: 20, height: 10 });
        let frame = s.frame(&catalog);
        assert_eq!(frame.selected_font, "standard");
        assert_ne!(frame.used_font, "standard");
        assert!(frame.label.starts_with("font: standard → "));
        assert!(frame.label.ends_with("(auto-shrunk)  (1/5)"));
        assert!(frame.figlet.lines().all(|l| l.chars().count() <= 12));
    }
}
