use std::path::PathBuf;

use crate::foundation::error::{MemeforgeError, MemeforgeResult};
use crate::render::surface::Surface;

/// Validate a user-supplied template identifier before any path is formed.
///
/// Identifiers are plain file stems: path separators, parent traversal, and
/// hidden/relative prefixes are rejected, and the character set is limited to
/// ASCII alphanumerics plus `-`, `_`, and `.`.
pub fn normalize_template_name(name: &str) -> MemeforgeResult<&str> {
    if name.is_empty() {
        return Err(MemeforgeError::invalid_parameter(
            "template name must be non-empty",
        ));
    }
    if name.contains(['/', '\\']) {
        return Err(MemeforgeError::invalid_parameter(format!(
            "template name '{name}' must not contain path separators"
        )));
    }
    if name.starts_with('.') || name.contains("..") {
        return Err(MemeforgeError::invalid_parameter(format!(
            "template name '{name}' must not contain relative path segments"
        )));
    }
    if !name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
    {
        return Err(MemeforgeError::invalid_parameter(format!(
            "template name '{name}' contains unsupported characters"
        )));
    }
    Ok(name)
}

/// Resolves named background templates against a directory of PNG assets.
///
/// Templates live at `{root}/{name}.png`. The store performs IO up front and
/// hands fully decoded surfaces to the compositor, which stays IO-free.
#[derive(Clone, Debug)]
pub struct TemplateStore {
    root: PathBuf,
}

impl TemplateStore {
    /// Create a store rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Templates root directory.
    pub fn root(&self) -> &std::path::Path {
        &self.root
    }

    /// Resolve `name` to a decoded surface.
    ///
    /// A missing asset is [`MemeforgeError::TemplateNotFound`] so callers can
    /// present a friendly message; an asset that exists but fails to decode is
    /// [`MemeforgeError::TemplateDecode`]. Other IO failures propagate with
    /// context.
    pub fn resolve(&self, name: &str) -> MemeforgeResult<Surface> {
        let name = normalize_template_name(name)?;
        let path = self.root.join(format!("{name}.png"));

        let bytes = match std::fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(MemeforgeError::template_not_found(name));
            }
            Err(e) => {
                return Err(anyhow::Error::new(e)
                    .context(format!("reading template '{}'", path.display()))
                    .into());
            }
        };

        let decoded = image::load_from_memory(&bytes).map_err(|e| {
            MemeforgeError::template_decode(format!("'{name}' is not a valid image: {e}"))
        })?;
        Ok(Surface::from_rgba(decoded.to_rgba8()))
    }
}

/// Resize a surface to `target_width_px`, preserving aspect ratio.
///
/// The new height is `round(height * target_width / width)`, clamped to at
/// least one pixel. Lanczos3 resampling avoids visible aliasing on both
/// downscale and upscale.
pub fn resize_to_width(surface: &Surface, target_width_px: u32) -> MemeforgeResult<Surface> {
    if target_width_px == 0 {
        return Err(MemeforgeError::invalid_parameter(
            "target width must be non-zero",
        ));
    }
    let (w, h) = (surface.width(), surface.height());
    let target_height = ((f64::from(h) * f64::from(target_width_px)) / f64::from(w))
        .round()
        .max(1.0) as u32;
    let resized = image::imageops::resize(
        surface.pixels(),
        target_width_px,
        target_height,
        image::imageops::FilterType::Lanczos3,
    );
    Ok(Surface::from_rgba(resized))
}

#[cfg(test)]
#[path = "../../tests/unit/assets/template.rs"]
mod tests;
