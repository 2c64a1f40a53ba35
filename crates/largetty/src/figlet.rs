//! FIGlet (`flf2a`) font parsing.
use crate::{
    error::{FontError, Result},
    glyph::Glyph,
};
use std::io::{Cursor, Read};
use std::{fs, path::Path};
use zip::ZipArchive;

/// Latin-1 codes of the Deutsch glyphs that follow `~` in a `.flf` body:
/// Ä Ö Ü ä ö ü ß.
const DEUTSCH_CODES: [u8; 7] = [196, 214, 220, 228, 246, 252, 223];

#[derive(Clone, Debug)]
pub struct FigletFont {
    name: String,
    header: String,
    hardblank: Option<char>,
    height: usize,
    comments: Vec<String>,
    pub(crate) glyphs: Vec<Option<Glyph>>,
}

impl FigletFont {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            header: String::new(),
            hardblank: None,
            height: 0,
            comments: Vec::new(),
            glyphs: vec![None; 256],
        }
    }

    /// Loads a `.flf` file (plain or zipped); the font is named after the file stem.
    pub fn load(path: &Path) -> Result<Self> {
        let bytes =
            fs::read(path).map_err(|e| FontError::Parse(format!("figlet read error: {e}")))?;
        let mut font = Self::from_bytes(&bytes)?;
        if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
            font.name = stem.to_string();
        }
        Ok(font)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn header(&self) -> &str {
        &self.header
    }

    pub fn comments(&self) -> &[String] {
        &self.comments
    }

    pub fn hardblank(&self) -> Option<char> {
        self.hardblank
    }

    /// Height in lines of every glyph; the tallest added glyph when built by hand.
    pub fn height(&self) -> usize {
        self.height
    }

    pub fn glyph_count(&self) -> usize {
        self.glyphs.iter().filter(|g| g.is_some()).count()
    }

    pub fn has_char(&self, ch: char) -> bool {
        self.glyph(ch).is_some()
    }

    pub fn glyph(&self, ch: char) -> Option<&Glyph> {
        self.glyphs.get(ch as usize).and_then(|g| g.as_ref())
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() >= 2 && bytes[0] == 0x1F && bytes[1] == 0x8B {
            return Err(FontError::Parse(
                "gzip compressed .flf not supported; provide .flf or zipped archive".into(),
            ));
        }
        // If file looks like a ZIP (PK\x03\x04) attempt to locate a .flf inside.
        if bytes.len() >= 4 && &bytes[0..4] == b"PK\x03\x04" {
            let mut archive = ZipArchive::new(Cursor::new(bytes))
                .map_err(|e| FontError::Parse(format!("zip open error: {e}")))?;
            let mut found = None;
            for i in 0..archive.len() {
                let mut file = archive
                    .by_index(i)
                    .map_err(|e| FontError::Parse(format!("zip entry error: {e}")))?;
                if file.name().ends_with(".flf") {
                    let mut buf = String::new();
                    file.read_to_string(&mut buf)
                        .map_err(|e| FontError::Parse(format!("zip read flf error: {e}")))?;
                    found = Some(buf);
                    break;
                }
            }
            if let Some(content) = found {
                return FigletFont::parse_content(&content);
            }
            return Err(FontError::Parse("zip archive contained no .flf".into()));
        }
        let content =
            std::str::from_utf8(bytes).map_err(|e| FontError::Parse(format!("utf8 error: {e}")))?;
        FigletFont::parse_content(content)
    }

    fn parse_content(content: &str) -> Result<Self> {
        let mut lines = content.lines();
        let header_line = lines
            .next()
            .ok_or_else(|| FontError::Parse("missing header".into()))?;
        let Some(signature) = header_line.strip_prefix("flf2a") else {
            return Err(FontError::Parse("not a flf2a header".into()));
        };
        let hardblank = signature
            .chars()
            .next()
            .ok_or_else(|| FontError::Parse("missing hardblank".into()))?;
        let header_parts: Vec<&str> = header_line.split_whitespace().collect();
        if header_parts.len() < 6 {
            return Err(FontError::Parse("incomplete header".into()));
        }

        let height: usize = header_parts
            .get(1)
            .and_then(|s| s.parse().ok())
            .filter(|h| *h > 0)
            .ok_or_else(|| FontError::Parse("missing height".into()))?;
        let comment_count: usize = header_parts
            .get(5)
            .and_then(|s| s.parse().ok())
            .unwrap_or(0);

        let mut font = FigletFont::new("figlet");
        font.header = header_line.to_string();
        font.hardblank = Some(hardblank);
        font.height = height;

        for _ in 0..comment_count {
            if let Some(c) = lines.next() {
                font.comments.push(c.to_string());
            }
        }

        // Required characters: printable ASCII 32..=126
        for ch in 32u8..=126 {
            let char_lines = Self::read_character(&mut lines, height)?;
            font.add_raw_char(ch, &char_lines.iter().map(|s| s.as_str()).collect::<Vec<_>>());
        }

        // Older fonts stop after `~`; code-tagged characters past the Deutsch set are ignored
        for ch in DEUTSCH_CODES {
            let Ok(char_lines) = Self::read_character(&mut lines, height) else {
                break;
            };
            font.add_raw_char(ch, &char_lines.iter().map(|s| s.as_str()).collect::<Vec<_>>());
        }

        tracing::trace!(height, glyphs = font.glyph_count(), "parsed figlet font");
        Ok(font)
    }

    fn read_character<'a, I>(lines: &mut I, height: usize) -> Result<Vec<String>>
    where
        I: Iterator<Item = &'a str>,
    {
        let mut char_lines = Vec::with_capacity(height);

        for _ in 0..height {
            let line = lines
                .next()
                .ok_or_else(|| FontError::Parse("incomplete character".into()))?
                .trim_end_matches(['\r', ' ']);

            // The last character is the endmark; it is doubled on the final row
            let Some(endmark) = line.chars().last() else {
                return Err(FontError::Parse("character line missing end marker".into()));
            };
            char_lines.push(line.trim_end_matches(endmark).to_string());
        }

        Ok(char_lines)
    }

    /// Adds (or replaces) the glyph for `ch` from raw rows, as found in a `.flf` body.
    pub fn add_raw_char(&mut self, ch: u8, raw_lines: &[&str]) {
        if ch as usize >= self.glyphs.len() {
            return;
        }
        let glyph = Glyph::from_rows(raw_lines, self.hardblank);
        self.height = self.height.max(glyph.height);
        self.glyphs[ch as usize] = Some(glyph);
    }
}
