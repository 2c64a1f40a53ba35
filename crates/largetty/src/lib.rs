//! largetty: large block-letter text fitted to a terminal viewport.
//!
//! FIGlet fonts are parsed into glyphs and composed side by side; the [`fit`]
//! engine then packs text into a bounded number of rows, shrinking the font
//! when the preferred one cannot hold it.

mod bundled;
pub mod catalog;
mod error;
pub mod figlet;
pub mod fit;
mod font;
mod glyph;
pub mod render;
pub mod session;

pub use bundled::BundledFont;
pub use catalog::{FontCatalog, FontId};
pub use error::{FontError, Result};
pub use fit::{FitRequest, FitResult, Fitter};
pub use font::{Font, TERM_FONT};
pub use glyph::{Glyph, GlyphPart};
pub use render::GlyphRenderer;

// Test utilities
pub mod test_support;

/// Receiver of glyph cells, drawn left to right and top to bottom.
pub trait FontTarget {
    type Error;
    fn draw(&mut self, ch: char) -> std::result::Result<(), Self::Error>;
    fn next_line(&mut self) -> std::result::Result<(), Self::Error>;
}
