use std::path::PathBuf;

use image::Rgba;

use crate::assets::font::FontCache;
use crate::assets::template::{TemplateStore, resize_to_width};
use crate::encode::png::encode_png;
use crate::foundation::error::{MemeforgeError, MemeforgeResult};
use crate::layout::text::{ScaledFont, text_block_height, wrap};
use crate::render::glyphs::{draw_text_block, draw_text_centered};
use crate::render::surface::Surface;

/// Width of the caption panel and the resized template in stacked mode.
pub const DEFAULT_PANEL_WIDTH: u32 = 512;
/// Padding applied around the caption panel text.
pub const DEFAULT_PANEL_PADDING: f32 = 8.0;
/// Inset from the template edges for overlay captions.
pub const DEFAULT_OVERLAY_INSET: f32 = 10.0;

/// Smallest accepted font size in points.
pub const MIN_FONT_SIZE_PT: f32 = 8.0;
/// Largest accepted font size in points.
pub const MAX_FONT_SIZE_PT: f32 = 75.0;

const PANEL_BACKGROUND: Rgba<u8> = Rgba([255, 255, 255, 255]);
const TEXT_COLOR: Rgba<u8> = Rgba([0, 0, 0, 255]);

#[derive(Clone, Copy, Debug, Default, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
/// Composition layout selecting where the caption is placed.
pub enum CaptionMode {
    /// Caption on its own white panel stacked above the template.
    #[default]
    Stacked,
    /// Caption drawn directly onto the template, no background panel.
    Overlay,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
/// One caption render request.
///
/// A request is a pure data model; the surrounding delivery layer typically
/// deserializes it from JSON. Rendering is performed by [`Engine::render`].
pub struct CaptionRequest {
    /// Template name resolved against the engine's templates root.
    pub template: String,
    /// Font size in points, accepted within `[8, 75]`.
    pub font_size_pt: f32,
    /// Caption text; embedded whitespace runs collapse during wrapping.
    pub text: String,
    /// Composition layout.
    #[serde(default)]
    pub mode: CaptionMode,
}

#[derive(Clone, Copy, Debug)]
/// Tunable layout constants for an [`Engine`].
pub struct EngineOpts {
    /// Stacked-mode canvas width in pixels.
    pub panel_width: u32,
    /// Caption panel padding in pixels.
    pub panel_padding: f32,
    /// Overlay-mode caption inset in pixels.
    pub overlay_inset: f32,
}

impl Default for EngineOpts {
    fn default() -> Self {
        Self {
            panel_width: DEFAULT_PANEL_WIDTH,
            panel_padding: DEFAULT_PANEL_PADDING,
            overlay_inset: DEFAULT_OVERLAY_INSET,
        }
    }
}

/// Caption compositing engine.
///
/// The engine owns the template store and the process-wide font cache; one
/// instance can be shared behind an `Arc` across worker threads, since every
/// render is an independent, synchronous pipeline over request-scoped
/// surfaces.
#[derive(Debug)]
pub struct Engine {
    fonts: FontCache,
    templates: TemplateStore,
    font_path: PathBuf,
    opts: EngineOpts,
}

impl Engine {
    /// Create an engine with default layout constants.
    pub fn new(templates_root: impl Into<PathBuf>, font_path: impl Into<PathBuf>) -> Self {
        Self::with_opts(templates_root, font_path, EngineOpts::default())
    }

    /// Create an engine with explicit layout constants.
    pub fn with_opts(
        templates_root: impl Into<PathBuf>,
        font_path: impl Into<PathBuf>,
        opts: EngineOpts,
    ) -> Self {
        Self {
            fonts: FontCache::new(),
            templates: TemplateStore::new(templates_root),
            font_path: font_path.into(),
            opts,
        }
    }

    /// Render a caption request to an encoded PNG buffer.
    #[tracing::instrument(skip(self, request))]
    pub fn render(&self, request: &CaptionRequest) -> MemeforgeResult<Vec<u8>> {
        let surface = self.compose(request)?;
        encode_png(&surface)
    }

    /// Compose a caption request into a surface without encoding it.
    ///
    /// Exposed separately so callers can run golden-image comparisons on raw
    /// pixels.
    pub fn compose(&self, request: &CaptionRequest) -> MemeforgeResult<Surface> {
        validate_font_size(request.font_size_pt)?;
        let face = self.fonts.load(&self.font_path)?;
        let font = ScaledFont::new(face, request.font_size_pt);

        match request.mode {
            CaptionMode::Stacked => self.compose_stacked(&font, request),
            CaptionMode::Overlay => self.compose_overlay(&font, request),
        }
    }

    fn compose_stacked(
        &self,
        font: &ScaledFont,
        request: &CaptionRequest,
    ) -> MemeforgeResult<Surface> {
        let padding = self.opts.panel_padding;
        let max_text_width = self.opts.panel_width as f32 - 2.0 * padding;
        let lines = wrap(&request.text, font, max_text_width);
        tracing::debug!(line_count = lines.len(), "wrapped stacked caption");

        let panel_height =
            (text_block_height(lines.len(), font.size_pt()) + 3.0 * padding) as u32;
        let mut panel = Surface::filled(self.opts.panel_width, panel_height, PANEL_BACKGROUND)?;
        draw_text_centered(&mut panel, font, &lines, padding, TEXT_COLOR);

        let template = self.templates.resolve(&request.template)?;
        let template = resize_to_width(&template, self.opts.panel_width)?;

        stack_panel_over_template(&panel, &template)
    }

    fn compose_overlay(
        &self,
        font: &ScaledFont,
        request: &CaptionRequest,
    ) -> MemeforgeResult<Surface> {
        let mut canvas = self.templates.resolve(&request.template)?;
        let inset = self.opts.overlay_inset;
        let max_text_width = canvas.width() as f32 - 2.0 * inset;
        let lines = wrap(&request.text, font, max_text_width);
        tracing::debug!(line_count = lines.len(), "wrapped overlay caption");

        draw_text_block(&mut canvas, font, &lines, inset, TEXT_COLOR);
        Ok(canvas)
    }
}

/// Stack a caption panel directly above a template into one taller surface.
///
/// Both surfaces must share a width; the result is exactly
/// `panel.height() + template.height()` tall, with the template's first row
/// at row `panel.height()`.
pub fn stack_panel_over_template(
    panel: &Surface,
    template: &Surface,
) -> MemeforgeResult<Surface> {
    if panel.width() != template.width() {
        return Err(MemeforgeError::invalid_parameter(format!(
            "stacked surfaces must share a width, got {} and {}",
            panel.width(),
            template.width()
        )));
    }
    let mut out = Surface::filled(
        panel.width(),
        panel.height() + template.height(),
        PANEL_BACKGROUND,
    )?;
    out.blit(panel, 0, 0)?;
    out.blit(template, 0, panel.height())?;
    Ok(out)
}

/// Check a requested font size against the accepted `[8, 75]` range.
pub fn validate_font_size(font_size_pt: f32) -> MemeforgeResult<()> {
    if !font_size_pt.is_finite()
        || !(MIN_FONT_SIZE_PT..=MAX_FONT_SIZE_PT).contains(&font_size_pt)
    {
        return Err(MemeforgeError::invalid_parameter(format!(
            "font size must be within [{MIN_FONT_SIZE_PT}, {MAX_FONT_SIZE_PT}], got {font_size_pt}"
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/compose/pipeline.rs"]
mod tests;
