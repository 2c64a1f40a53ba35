//! Composing glyphs into a block of text lines.
use std::convert::Infallible;

use crate::{Font, FontId, FontTarget};

/// Anything able to turn a short ASCII string into block art with a named font.
///
/// Implementations must be pure: the same `(text, font)` always yields the same
/// block, and unsupported input degrades to empty or partial output instead of
/// failing. Longer input must never render narrower than a prefix of it.
pub trait GlyphRenderer {
    fn render(&self, text: &str, font: &FontId) -> String;
}

impl<R: GlyphRenderer + ?Sized> GlyphRenderer for &R {
    fn render(&self, text: &str, font: &FontId) -> String {
        (**self).render(text, font)
    }
}

/// Lays glyphs side by side, one glyph column range after the other.
pub struct BlockTarget {
    rows: Vec<Vec<char>>,
    row: usize,
    origin: usize,
}

impl BlockTarget {
    pub fn new(height: usize) -> Self {
        Self {
            rows: vec![Vec::new(); height.max(1)],
            row: 0,
            origin: 0,
        }
    }

    /// Moves the cursor to the top row, `width` columns past the previous glyph.
    pub fn advance(&mut self, width: usize) {
        self.origin += width;
        self.row = 0;
    }

    pub fn into_string(self) -> String {
        let lines: Vec<String> = self
            .rows
            .into_iter()
            .map(|row| row.into_iter().collect())
            .collect();
        lines.join("\n").trim_end_matches('\n').to_string()
    }
}

impl FontTarget for BlockTarget {
    type Error = Infallible;

    fn draw(&mut self, ch: char) -> Result<(), Self::Error> {
        while self.row >= self.rows.len() {
            self.rows.push(Vec::new());
        }
        let line = &mut self.rows[self.row];
        while line.len() < self.origin {
            line.push(' ');
        }
        line.push(ch);
        Ok(())
    }

    fn next_line(&mut self) -> Result<(), Self::Error> {
        self.row += 1;
        Ok(())
    }
}

/// Renders `text` with `font` in full-width layout (no kerning or smushing).
///
/// Characters the font has no glyph for are skipped.
pub fn render_text(font: &Font, text: &str) -> String {
    let mut target = BlockTarget::new(font.height());
    for ch in text.chars() {
        let Some(glyph) = font.resolve(ch) else {
            continue;
        };
        match glyph.render(&mut target) {
            Ok(()) => target.advance(glyph.width),
            Err(never) => match never {},
        }
    }
    target.into_string()
}
