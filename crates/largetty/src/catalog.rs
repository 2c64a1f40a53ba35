//! The set of fonts a session can pick from, and the fallback order between them.
use std::fmt;
use std::fs;
use std::path::Path;

use crate::bundled::BundledFont;
use crate::figlet::FigletFont;
use crate::font::TERM_FONT;
use crate::render::{render_text, GlyphRenderer};
use crate::{Font, FontError, Result};

/// Opaque font identifier; only compared for equality.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct FontId(String);

impl FontId {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FontId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for FontId {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for FontId {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl PartialEq<str> for FontId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for FontId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Display order of the well-known FIGlet fonts; compact fallbacks come last.
pub const DISPLAY_ORDER: [&str; 16] = [
    "standard", "slant", "big", "larry3d", "colossal", "doom", "banner3", "block", "shadow",
    "starwars", "speed", "ogre", "small", "smslant", "mini", "term",
];

/// Fallback fonts from large to small.
pub const DEFAULT_TIERS: [&str; 5] = ["big", "standard", "small", "mini", "term"];

pub const DEFAULT_FONT: &str = "standard";

pub struct FontCatalog {
    fonts: Vec<Font>,
    ids: Vec<FontId>,
    tiers: Vec<FontId>,
}

impl FontCatalog {
    /// Catalog of the fonts compiled into the crate plus `term`.
    pub fn builtin() -> Self {
        let fonts = BundledFont::ALL
            .iter()
            .filter_map(|bundled| match FigletFont::from_bytes(bundled.as_bytes()) {
                Ok(font) => Some(Font::Figlet(font.with_name(bundled.name()))),
                Err(err) => {
                    tracing::error!(font = bundled.name(), %err, "bundled font failed to parse");
                    None
                }
            })
            .collect();
        Self::from_fonts(fonts)
    }

    /// Builds a catalog from loaded fonts. `term` is always added if missing and
    /// fonts are ordered by [`DISPLAY_ORDER`], unknown names after in lexical order.
    pub fn from_fonts(fonts: Vec<Font>) -> Self {
        let mut fonts = fonts;
        if !fonts.iter().any(|f| f.name() == TERM_FONT) {
            fonts.push(Font::Term);
        }
        fonts.sort_by(|a, b| display_rank(a.name()).cmp(&display_rank(b.name())));
        fonts.dedup_by(|a, b| a.name() == b.name());

        let ids: Vec<FontId> = fonts.iter().map(|f| FontId::from(f.name())).collect();
        let mut tiers: Vec<FontId> = DEFAULT_TIERS
            .iter()
            .filter(|t| **t != TERM_FONT && ids.iter().any(|id| id == *t))
            .map(|t| FontId::from(*t))
            .collect();
        tiers.push(FontId::from(TERM_FONT));

        Self { fonts, ids, tiers }
    }

    /// Loads every `.flf` (or zipped `.zip`) font found directly in `dir`.
    pub fn from_dir(dir: &Path) -> Result<Self> {
        let mut fonts = Vec::new();
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            let is_font = path
                .extension()
                .and_then(|e| e.to_str())
                .is_some_and(|e| e.eq_ignore_ascii_case("flf") || e.eq_ignore_ascii_case("zip"));
            if !is_font {
                continue;
            }
            let bytes = fs::read(&path)?;
            let font = match Font::load(&bytes) {
                Ok(Font::Figlet(f)) => {
                    let name = path
                        .file_stem()
                        .and_then(|s| s.to_str())
                        .ok_or_else(|| FontError::Parse(format!("bad font file name {path:?}")))?;
                    Font::Figlet(f.with_name(name))
                }
                Ok(other) => other,
                Err(err) => {
                    tracing::warn!(path = %path.display(), %err, "skipping unreadable font");
                    continue;
                }
            };
            tracing::debug!(font = font.name(), "loaded font");
            fonts.push(font);
        }
        Ok(Self::from_fonts(fonts))
    }

    pub fn ids(&self) -> &[FontId] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Fallback order, largest first; the last tier is always `term`.
    pub fn tiers(&self) -> &[FontId] {
        &self.tiers
    }

    /// `standard` when present, otherwise the first font.
    pub fn default_font(&self) -> &FontId {
        self.ids
            .iter()
            .find(|id| *id == DEFAULT_FONT)
            .unwrap_or(&self.ids[0])
    }

    pub fn index_of(&self, id: &FontId) -> Option<usize> {
        self.ids.iter().position(|i| i == id)
    }

    pub fn get(&self, index: usize) -> Option<&FontId> {
        self.ids.get(index)
    }

    pub fn font(&self, id: &FontId) -> Option<&Font> {
        self.index_of(id).map(|i| &self.fonts[i])
    }

    pub fn next(&self, index: usize) -> usize {
        (index + 1) % self.len()
    }

    pub fn prev(&self, index: usize) -> usize {
        (index + self.len() - 1) % self.len()
    }
}

impl GlyphRenderer for FontCatalog {
    fn render(&self, text: &str, font: &FontId) -> String {
        match self.font(font) {
            Some(f) => render_text(f, text),
            None => {
                tracing::trace!(%font, "render with unknown font");
                String::new()
            }
        }
    }
}

fn display_rank(name: &str) -> (usize, &str) {
    let rank = DISPLAY_ORDER
        .iter()
        .position(|n| *n == name)
        .unwrap_or(DISPLAY_ORDER.len());
    (rank, name)
}
