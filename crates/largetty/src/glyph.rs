use crate::FontTarget;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GlyphPart {
    /// Line break between two rows of the glyph
    NewLine,
    /// FIGlet hardblank; always drawn as a space
    HardBlank,
    /// Plain character cell
    Char(char),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Glyph {
    /// Maximum width of any rendered line in the glyph
    pub width: usize,
    /// Number of lines in the glyph
    pub height: usize,
    /// Ordered glyph parts making up the rendered output
    pub parts: Vec<GlyphPart>,
}

impl Glyph {
    /// Builds a glyph from its rows, mapping `hardblank` to [`GlyphPart::HardBlank`].
    pub fn from_rows(rows: &[&str], hardblank: Option<char>) -> Self {
        let mut parts = Vec::new();
        for (i, row) in rows.iter().enumerate() {
            if i > 0 {
                parts.push(GlyphPart::NewLine);
            }
            for ch in row.chars() {
                if Some(ch) == hardblank {
                    parts.push(GlyphPart::HardBlank);
                } else {
                    parts.push(GlyphPart::Char(ch));
                }
            }
        }
        Glyph {
            width: rows.iter().map(|r| r.chars().count()).max().unwrap_or(0),
            height: rows.len(),
            parts,
        }
    }

    /// Render this glyph onto a target, starting at the target's current cursor.
    pub fn render<T: FontTarget>(&self, target: &mut T) -> Result<(), T::Error> {
        for part in &self.parts {
            match part {
                GlyphPart::NewLine => target.next_line()?,
                GlyphPart::HardBlank => target.draw(' ')?,
                GlyphPart::Char(c) => target.draw(*c)?,
            }
        }
        Ok(())
    }
}
