use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use largetty::{
    figlet::FigletFont,
    fit::{fit, FitRequest},
    session::{Event, Session, MAX_FIG_ROWS},
    FontCatalog, FontId,
};
use std::io::{self, BufRead};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};
use tracing_subscriber::EnvFilter;

use crate::console::{fit_notice, frame_to_ansi};
mod console;

#[derive(Parser)]
#[command(name = "large-tty", about = "Type big, in any terminal width")]
struct Cli {
    /// Log fitting decisions to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// Render text fitted to a width and row budget
    Render {
        #[arg(short, long)]
        text: String,
        /// Preferred font; the catalog default when omitted
        #[arg(short, long)]
        font: Option<String>,
        #[arg(short, long, default_value = "80")]
        width: usize,
        #[arg(short, long, default_value_t = MAX_FIG_ROWS)]
        rows: usize,
        /// Directory of .flf fonts; the bundled fonts without it
        #[arg(long)]
        font_dir: Option<PathBuf>,
    },
    /// List available fonts and the fallback order
    Fonts {
        #[arg(long)]
        font_dir: Option<PathBuf>,
    },
    /// Inspect FIGlet font metadata
    Inspect {
        #[arg(short, long)]
        font: PathBuf,
    },
    /// Line-mode session: each stdin line is typed in; /next, /prev, /random, /play, /clear
    /// and /quit are commands
    Session {
        #[arg(short, long, default_value = "80")]
        width: usize,
        #[arg(long)]
        font_dir: Option<PathBuf>,
    },
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn load_catalog(font_dir: Option<&Path>) -> Result<FontCatalog> {
    match font_dir {
        Some(dir) => FontCatalog::from_dir(dir)
            .with_context(|| format!("loading fonts from {}", dir.display())),
        None => Ok(FontCatalog::builtin()),
    }
}

/// Font pick for `/random` and random play ticks.
fn random_index() -> usize {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() as usize)
        .unwrap_or(0)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    match cli.command {
        Cmd::Render {
            text,
            font,
            width,
            rows,
            font_dir,
        } => {
            let catalog = load_catalog(font_dir.as_deref())?;
            let preferred = font
                .map(FontId::from)
                .unwrap_or_else(|| catalog.default_font().clone());
            if catalog.index_of(&preferred).is_none() {
                tracing::warn!(font = %preferred, "font not in catalog");
            }
            let request = FitRequest::new(text, preferred.clone(), width, rows);
            let result = fit(&catalog, catalog.tiers(), &request);
            println!("{}", result.block);
            if let Some(notice) = fit_notice(&preferred, &result) {
                eprintln!("{notice}");
            }
        }
        Cmd::Fonts { font_dir } => {
            let catalog = load_catalog(font_dir.as_deref())?;
            let default = catalog.default_font();
            for id in catalog.ids() {
                let mut line = id.to_string();
                if id == default {
                    line.push_str(" (default)");
                }
                if let Some(tier) = catalog.tiers().iter().position(|t| t == id) {
                    line.push_str(&format!(" [tier {}]", tier + 1));
                }
                println!("{line}");
            }
        }
        Cmd::Inspect { font } => {
            let f = FigletFont::load(&font)?;
            println!("FIGlet font: {}", f.name());
            println!("  Header: {}", f.header());
            println!("  Height: {}", f.height());
            println!("  Defined characters: {}", f.glyph_count());
            for comment in f.comments() {
                println!("  {comment}");
            }
        }
        Cmd::Session { width, font_dir } => {
            let catalog = load_catalog(font_dir.as_deref())?;
            let mut session = Session::new(&catalog).update(Event::Resize { width, height: 24 });
            for line in io::stdin().lock().lines() {
                let line = line?;
                session = match line.as_str() {
                    "/next" => session.update(Event::NextFont),
                    "/prev" => session.update(Event::PrevFont),
                    "/random" => session.update(Event::RandomFont(random_index())),
                    "/play" => session.update(Event::TogglePlayRandom),
                    "/clear" => session.update(Event::Clear),
                    "/quit" => session.update(Event::Quit),
                    text => text
                        .chars()
                        .fold(session, |s, c| s.update(Event::Input(c))),
                };
                if session.should_quit() {
                    break;
                }
                // Every line is one tick of the random play timer
                session = session.update(Event::RandomTick(random_index()));
                println!(
                    "{}\n",
                    frame_to_ansi(&session.frame(&catalog), session.input())
                );
            }
        }
    }
    Ok(())
}
