use image::Rgba;
use rusttype::point;

use crate::layout::text::{LINE_SPACING, LineLayout, ScaledFont, text_block_height};
use crate::render::surface::Surface;

/// Draw wrapped lines centered as a block within the surface height, nudged
/// down by `padding_px`, with each line centered horizontally.
///
/// The baseline of each line sits at `line_top + font_size`; lines advance by
/// `font_size * 1.5`.
pub fn draw_text_centered(
    surface: &mut Surface,
    font: &ScaledFont,
    lines: &[LineLayout],
    padding_px: f32,
    color: Rgba<u8>,
) {
    let block = text_block_height(lines.len(), font.size_pt());
    let top = centered_block_top(surface.height() as f32, block, padding_px);
    draw_text_block(surface, font, lines, top, color);
}

/// Vertical start of a text block centered in `canvas_height`, nudged down by
/// `padding_px`.
pub(crate) fn centered_block_top(canvas_height: f32, block_height: f32, padding_px: f32) -> f32 {
    (canvas_height - block_height) / 2.0 + padding_px
}

/// Draw wrapped lines with the block anchored at `top_y`, each line centered
/// horizontally. Overlay composition uses this to inset the caption from the
/// template's top edge.
pub fn draw_text_block(
    surface: &mut Surface,
    font: &ScaledFont,
    lines: &[LineLayout],
    top_y: f32,
    color: Rgba<u8>,
) {
    let size = font.size_pt();
    let mut y = top_y;
    for line in lines {
        let x = (surface.width() as f32 - line.width_px) / 2.0;
        draw_line(surface, font, &line.content, x, y + size, color);
        y += size * LINE_SPACING;
    }
}

/// Rasterize one line of text with its baseline at `baseline_y`.
///
/// Glyph coverage blends over the destination pixel and forces the result
/// opaque; pixels outside the surface are skipped, so partially off-canvas
/// lines (a single over-wide word) render their visible part.
fn draw_line(
    surface: &mut Surface,
    font: &ScaledFont,
    text: &str,
    x: f32,
    baseline_y: f32,
    color: Rgba<u8>,
) {
    let scale = rusttype::Scale::uniform(font.size_pt());
    let glyphs: Vec<_> = font.font().layout(text, scale, point(x, baseline_y)).collect();
    let img = surface.pixels_mut();

    for glyph in glyphs {
        let Some(bb) = glyph.pixel_bounding_box() else {
            continue;
        };
        glyph.draw(|gx, gy, coverage| {
            let px = gx as i32 + bb.min.x;
            let py = gy as i32 + bb.min.y;
            if px < 0 || py < 0 {
                return;
            }
            let (px, py) = (px as u32, py as u32);
            if px >= img.width() || py >= img.height() {
                return;
            }
            if coverage <= 0.0 {
                return;
            }
            let a = coverage.min(1.0);
            let inv = 1.0 - a;
            let dst = img.get_pixel_mut(px, py);
            dst.0[0] = (color.0[0] as f32 * a + dst.0[0] as f32 * inv) as u8;
            dst.0[1] = (color.0[1] as f32 * a + dst.0[1] as f32 * inv) as u8;
            dst.0[2] = (color.0[2] as f32 * a + dst.0[2] as f32 * inv) as u8;
            dst.0[3] = 255;
        });
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/glyphs.rs"]
mod tests;
