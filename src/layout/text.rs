use std::sync::Arc;

use rusttype::{Font, GlyphId, Scale};

/// Fixed line-advance multiplier applied to the font size.
pub const LINE_SPACING: f32 = 1.5;

/// Measurement seam used by the wrap algorithm.
///
/// Production code measures through a [`ScaledFont`]; tests can substitute a
/// fixed-advance measurer to pin wrap points without a font file on disk.
pub trait TextMeasurer {
    /// Rendered width of `text` as a single line, in pixels.
    fn line_width(&self, text: &str) -> f32;
}

/// One wrapped line in reading order.
#[derive(Clone, Debug, PartialEq)]
pub struct LineLayout {
    /// Line text with single spaces between words.
    pub content: String,
    /// Measured width of `content` in pixels.
    pub width_px: f32,
}

/// A loaded font face paired with the point size it will be rendered at.
#[derive(Clone)]
pub struct ScaledFont {
    font: Arc<Font<'static>>,
    size_pt: f32,
}

impl ScaledFont {
    /// Pair a font face with a render size.
    pub fn new(font: Arc<Font<'static>>, size_pt: f32) -> Self {
        Self { font, size_pt }
    }

    /// Borrow the underlying face.
    pub fn font(&self) -> &Font<'static> {
        &self.font
    }

    /// Render size in points (treated as pixels, matching the reference
    /// renderer's 72 dpi convention).
    pub fn size_pt(&self) -> f32 {
        self.size_pt
    }

    fn scale(&self) -> Scale {
        Scale::uniform(self.size_pt)
    }
}

impl std::fmt::Debug for ScaledFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScaledFont")
            .field("font_ptr", &Arc::as_ptr(&self.font))
            .field("size_pt", &self.size_pt)
            .finish()
    }
}

impl TextMeasurer for ScaledFont {
    fn line_width(&self, text: &str) -> f32 {
        let scale = self.scale();
        let mut width = 0.0f32;
        let mut last: Option<GlyphId> = None;
        for ch in text.chars() {
            let glyph = self.font.glyph(ch).scaled(scale);
            if let Some(prev) = last {
                width += self.font.pair_kerning(scale, prev, glyph.id());
            }
            width += glyph.h_metrics().advance_width;
            last = Some(glyph.id());
        }
        width
    }
}

/// Greedy word wrap of `text` into lines measuring at most `max_width_px`.
///
/// Words are contiguous non-whitespace runs; whitespace sequences (including
/// embedded newlines) collapse to single separators. A single word wider than
/// `max_width_px` is placed alone on its own line, never split or dropped.
/// Empty input yields exactly one empty line so callers still reserve one
/// line of height.
pub fn wrap(text: &str, measurer: &dyn TextMeasurer, max_width_px: f32) -> Vec<LineLayout> {
    let mut words = text.split_whitespace();
    let Some(first) = words.next() else {
        return vec![LineLayout {
            content: String::new(),
            width_px: 0.0,
        }];
    };

    let mut lines = Vec::new();
    let mut current = first.to_string();
    for word in words {
        let candidate = format!("{current} {word}");
        if measurer.line_width(&candidate) <= max_width_px {
            current = candidate;
        } else {
            lines.push(line_of(current, measurer));
            current = word.to_string();
        }
    }
    lines.push(line_of(current, measurer));
    lines
}

fn line_of(content: String, measurer: &dyn TextMeasurer) -> LineLayout {
    let width_px = measurer.line_width(&content);
    LineLayout { content, width_px }
}

/// Height of a wrapped text block: `line_count * font_size_pt * 1.5`.
///
/// Padding constants are added by the compose layer, not here.
pub fn text_block_height(line_count: usize, font_size_pt: f32) -> f32 {
    line_count as f32 * font_size_pt * LINE_SPACING
}

#[cfg(test)]
#[path = "../../tests/unit/layout/text.rs"]
mod tests;
