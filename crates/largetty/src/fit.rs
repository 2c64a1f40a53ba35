//! Fitting block-art text into a fixed number of columns and rows.
//!
//! The engine packs whitespace-separated words greedily into figlet rows,
//! splitting single words by character when they are too wide on their own,
//! and walks down a ladder of fonts until one fits the whole input. Every
//! search here relies on the renderer being monotonic: rendering more text
//! never produces a narrower block.
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::{FontId, GlyphRenderer};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FitRequest {
    pub text: String,
    pub preferred_font: FontId,
    pub max_width: usize,
    pub max_rows: usize,
}

impl FitRequest {
    /// Widths and row budgets below one are raised to one.
    pub fn new(
        text: impl Into<String>,
        preferred_font: impl Into<FontId>,
        max_width: usize,
        max_rows: usize,
    ) -> Self {
        Self {
            text: text.into(),
            preferred_font: preferred_font.into(),
            max_width: max_width.max(1),
            max_rows: max_rows.max(1),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FitResult {
    /// Composed rows, joined by line breaks
    pub block: String,
    pub font_used: FontId,
    /// `false` when part of the input did not make it into `block`
    pub complete: bool,
}

/// Drops every character above U+007F.
pub fn sanitize(text: &str) -> String {
    text.chars().filter(char::is_ascii).collect()
}

/// Column width of the widest line in `block`; 0 for an empty block.
pub fn max_line_width(block: &str) -> usize {
    block.lines().map(UnicodeWidthStr::width).max().unwrap_or(0)
}

/// Cuts every line of `block` down to at most `max_width` columns. Lines are
/// split the same way [`max_line_width`] splits them.
pub fn truncate_columns(block: &str, max_width: usize) -> String {
    block
        .lines()
        .map(|line| {
            let mut used = 0;
            line.chars()
                .take_while(|c| {
                    used += c.width().unwrap_or(0);
                    used <= max_width
                })
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Fit engine over a renderer and a fallback ladder, largest font first.
pub struct Fitter<'a, R: ?Sized> {
    renderer: &'a R,
    tiers: &'a [FontId],
}

impl<'a, R: GlyphRenderer + ?Sized> Fitter<'a, R> {
    pub fn new(renderer: &'a R, tiers: &'a [FontId]) -> Self {
        Self { renderer, tiers }
    }

    /// Sanitized render with trailing line breaks removed.
    pub fn render(&self, text: &str, font: &FontId) -> String {
        let mut block = self.renderer.render(&sanitize(text), font);
        let trimmed = block.trim_end_matches(['\n', '\r']).len();
        block.truncate(trimmed);
        block
    }

    /// Renders `text` once and reports whether it fits in `max_width` columns.
    pub fn try_whole_fit(&self, text: &str, font: &FontId, max_width: usize) -> (String, bool) {
        let block = self.render(text, font);
        let fits = max_line_width(&block) <= max_width;
        (block, fits)
    }

    fn fits(&self, text: &str, font: &FontId, max_width: usize) -> bool {
        max_line_width(&self.render(text, font)) <= max_width
    }

    /// Packs `text` into at most `max_rows` rows of `font`, each at most
    /// `max_width` columns. Returns the composed rows and whether all of the
    /// input was consumed.
    pub fn pack(&self, text: &str, font: &FontId, max_width: usize, max_rows: usize) -> (String, bool) {
        let (whole, fits) = self.try_whole_fit(text, font, max_width);
        if fits {
            return (whole, true);
        }

        let text = sanitize(text);
        let words: Vec<&str> = text.split_whitespace().collect();
        if words.is_empty() {
            return (String::new(), true);
        }

        let mut rows: Vec<String> = Vec::new();
        let mut i = 0;
        while i < words.len() && rows.len() < max_rows {
            let best = self.max_word_fit(&words[i..], font, max_width);
            if best > 0 {
                let chunk = self.render(&words[i..i + best].join(" "), font);
                rows.push(truncate_columns(&chunk, max_width));
                i += best;
                continue;
            }

            // A single word wider than the row: split it by character.
            let chars: Vec<char> = words[i].chars().collect();
            if !self.fits(&chars[0].to_string(), font, max_width) {
                tracing::trace!(%font, word = words[i], "single character too wide");
                return (rows.join("\n"), false);
            }
            let mut ci = 0;
            while ci < chars.len() && rows.len() < max_rows {
                let n = self.max_char_fit(&chars[ci..], font, max_width).max(1);
                let chunk: String = chars[ci..ci + n].iter().collect();
                rows.push(truncate_columns(&self.render(&chunk, font), max_width));
                ci += n;
            }
            if ci < chars.len() {
                return (rows.join("\n"), false);
            }
            i += 1;
        }

        (rows.join("\n"), i >= words.len())
    }

    /// Largest count of leading `words` that, joined by spaces, fit. Returns 0
    /// when even the first word does not fit on its own.
    fn max_word_fit(&self, words: &[&str], font: &FontId, max_width: usize) -> usize {
        if !self.fits(words[0], font, max_width) {
            return 0;
        }
        if self.fits(&words.join(" "), font, max_width) {
            return words.len();
        }
        largest_fitting(words.len(), |n| self.fits(&words[..n].join(" "), font, max_width))
    }

    /// Largest count of leading `chars` that fit, never less than 1.
    fn max_char_fit(&self, chars: &[char], font: &FontId, max_width: usize) -> usize {
        let all: String = chars.iter().collect();
        if self.fits(&all, font, max_width) {
            return chars.len();
        }
        largest_fitting(chars.len(), |n| {
            self.fits(&chars[..n].iter().collect::<String>(), font, max_width)
        })
    }

    /// Fits the request, trying the preferred font first and then every tier
    /// from largest to smallest. Falls back to the smallest tier, possibly
    /// truncated, when nothing fits.
    pub fn fit(&self, request: &FitRequest) -> FitResult {
        let preferred = &request.preferred_font;
        let smallest = self.tiers.last().unwrap_or(preferred);
        let ladder =
            std::iter::once(preferred).chain(self.tiers.iter().filter(|f| *f != preferred));

        let mut smallest_attempt = None;
        for font in ladder {
            let (block, consumed) =
                self.pack(&request.text, font, request.max_width, request.max_rows);
            if consumed {
                if font != preferred {
                    tracing::debug!(%preferred, used = %font, "font substituted");
                }
                return FitResult {
                    block,
                    font_used: font.clone(),
                    complete: true,
                };
            }
            if font == smallest {
                smallest_attempt = Some(block);
            }
        }

        let block = match smallest_attempt {
            Some(block) => block,
            None => self.pack(&request.text, smallest, request.max_width, request.max_rows).0,
        };
        tracing::debug!(%preferred, used = %smallest, "input truncated");
        FitResult {
            block,
            font_used: smallest.clone(),
            complete: false,
        }
    }
}

/// Convenience wrapper around [`Fitter::fit`].
pub fn fit<R: GlyphRenderer + ?Sized>(
    renderer: &R,
    tiers: &[FontId],
    request: &FitRequest,
) -> FitResult {
    Fitter::new(renderer, tiers).fit(request)
}

/// Binary search for the largest `n` in `1..=len` with `fits(n)`, assuming
/// `fits` is monotonic. Returns 1 if no count fits.
fn largest_fitting(len: usize, mut fits: impl FnMut(usize) -> bool) -> usize {
    let (mut lo, mut hi) = (1, len);
    let mut best = 1;
    while lo <= hi {
        let mid = lo + (hi - lo) / 2;
        if fits(mid) {
            best = mid;
            lo = mid + 1;
        } else {
            hi = mid - 1;
        }
    }
    best
}
