use std::io::Read;

use crate::{figlet::FigletFont, glyph::Glyph, FontError, FontTarget, Result};
use once_cell::sync::Lazy;

/// Name of the built-in single-line font.
pub const TERM_FONT: &str = "term";

// The `term` font draws every printable ASCII character as itself.
static TERM_GLYPHS: Lazy<Vec<Option<Glyph>>> = Lazy::new(|| {
    (0u8..128)
        .map(|b| {
            let ch = b as char;
            (b' '..=b'~')
                .contains(&b)
                .then(|| Glyph::from_rows(&[ch.to_string().as_str()], None))
        })
        .collect()
});

/// Unified font enum encapsulating all supported font kinds.
#[derive(Clone, Debug)]
pub enum Font {
    Figlet(FigletFont),
    Term,
}

impl Font {
    pub fn name(&self) -> &str {
        match self {
            Font::Figlet(f) => f.name(),
            Font::Term => TERM_FONT,
        }
    }

    pub fn height(&self) -> usize {
        match self {
            Font::Figlet(f) => f.height(),
            Font::Term => 1,
        }
    }

    pub fn has_char(&self, ch: char) -> bool {
        self.glyph(ch).is_some()
    }

    fn glyph(&self, ch: char) -> Option<&Glyph> {
        match self {
            Font::Figlet(f) => f.glyph(ch),
            Font::Term => TERM_GLYPHS.get(ch as usize).and_then(|g| g.as_ref()),
        }
    }

    /// Looks up `ch`, falling back to its opposite case for letters the font lacks.
    pub fn resolve(&self, ch: char) -> Option<&Glyph> {
        if let Some(glyph) = self.glyph(ch) {
            return Some(glyph);
        }
        if !ch.is_ascii_alphabetic() {
            return None;
        }
        let swapped = if ch.is_ascii_lowercase() {
            ch.to_ascii_uppercase()
        } else {
            ch.to_ascii_lowercase()
        };
        self.glyph(swapped)
    }

    /// Draws the glyph for `ch`. Returns `Ok(false)` when the font has no glyph for it.
    pub fn render_glyph<T: FontTarget>(
        &self,
        target: &mut T,
        ch: char,
    ) -> std::result::Result<bool, T::Error> {
        let Some(glyph) = self.resolve(ch) else {
            return Ok(false);
        };
        glyph.render(target)?;
        Ok(true)
    }

    /// Load a font from raw bytes: a FIGlet file, or a ZIP archive holding one.
    pub fn load(bytes: &[u8]) -> Result<Font> {
        let is_figlet = bytes.len() >= 5 && &bytes[0..5] == b"flf2a";
        let is_zip = bytes.len() >= 4 && &bytes[0..4] == b"PK\x03\x04";
        if is_figlet || is_zip {
            return Ok(Font::Figlet(FigletFont::from_bytes(bytes)?));
        }
        Err(FontError::UnrecognizedFormat)
    }

    pub fn read<R: Read>(reader: R) -> Result<Font> {
        let mut buf = Vec::new();
        let mut reader = reader;
        reader.read_to_end(&mut buf)?;
        Self::load(&buf)
    }
}
