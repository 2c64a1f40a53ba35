//! Test support utilities for largetty.
//!
//! Deterministic stand-ins for the real font pipeline, useful when testing the
//! fit engine or anything built on top of it.

use std::collections::HashMap;
use std::convert::Infallible;

use crate::{FontId, FontTarget, GlyphRenderer};

/// A memory buffer target that stacks everything drawn into plain lines.
pub struct BufferTarget {
    pub lines: Vec<String>,
    cur_line: usize,
}

impl BufferTarget {
    pub fn new() -> Self {
        Self {
            lines: vec![String::new()],
            cur_line: 0,
        }
    }
}

impl Default for BufferTarget {
    fn default() -> Self {
        Self::new()
    }
}

impl FontTarget for BufferTarget {
    type Error = Infallible;

    fn draw(&mut self, ch: char) -> Result<(), Self::Error> {
        self.lines[self.cur_line].push(ch);
        Ok(())
    }

    fn next_line(&mut self) -> Result<(), Self::Error> {
        self.cur_line += 1;
        if self.cur_line >= self.lines.len() {
            self.lines.push(String::new());
        }
        Ok(())
    }
}

/// Renderer whose fonts draw every character as a `width` x `height` block of
/// that same character, so rendered width is exactly `width * chars`.
///
/// Unknown fonts render as an empty string.
#[derive(Clone, Debug, Default)]
pub struct StubRenderer {
    fonts: HashMap<FontId, (usize, usize)>,
}

impl StubRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_font(mut self, name: &str, width: usize, height: usize) -> Self {
        self.fonts.insert(FontId::from(name), (width, height.max(1)));
        self
    }
}

impl GlyphRenderer for StubRenderer {
    fn render(&self, text: &str, font: &FontId) -> String {
        let Some(&(width, height)) = self.fonts.get(font) else {
            return String::new();
        };
        if text.is_empty() {
            return String::new();
        }
        let line: String = text
            .chars()
            .flat_map(|c| std::iter::repeat(c).take(width))
            .collect();
        vec![line; height].join("\n")
    }
}
