//! Memeforge is a caption compositing engine for meme images.
//!
//! Given a caption string, a font size, and a named background template, the
//! engine produces a single PNG: a word-wrapped, centered caption rendered
//! onto a dynamically-sized canvas, stacked above the template or drawn
//! directly over it.
//!
//! # Pipeline overview
//!
//! 1. **Validate**: font size range and template identifier sanitization
//! 2. **Layout**: greedy word wrap against measured line widths
//!    ([`wrap`] / [`LineLayout`])
//! 3. **Compose**: panel allocation, centered text drawing, template
//!    resize and blit ([`Surface`], [`Engine::compose`])
//! 4. **Encode**: deterministic RGBA8 PNG bytes ([`encode_png`])
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic-by-default**: identical requests against identical
//!   assets produce byte-identical PNG output.
//! - **Request-scoped buffers**: every surface and line layout lives for one
//!   request; the only cross-request state is the read-through [`FontCache`].
//! - **Typed failures**: each stage returns [`MemeforgeResult`] and the
//!   pipeline short-circuits on the first error; no partial images.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod assets;
mod compose;
mod encode;
mod foundation;
mod layout;
mod render;

pub use assets::font::FontCache;
pub use assets::template::{TemplateStore, normalize_template_name, resize_to_width};
pub use compose::pipeline::{
    CaptionMode, CaptionRequest, DEFAULT_OVERLAY_INSET, DEFAULT_PANEL_PADDING,
    DEFAULT_PANEL_WIDTH, Engine, EngineOpts, MAX_FONT_SIZE_PT, MIN_FONT_SIZE_PT,
    stack_panel_over_template, validate_font_size,
};
pub use encode::png::encode_png;
pub use foundation::error::{MemeforgeError, MemeforgeResult};
pub use layout::text::{
    LINE_SPACING, LineLayout, ScaledFont, TextMeasurer, text_block_height, wrap,
};
pub use render::glyphs::{draw_text_block, draw_text_centered};
pub use render::surface::Surface;
