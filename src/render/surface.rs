use image::{GenericImage, Rgba, RgbaImage};

use crate::foundation::error::{MemeforgeError, MemeforgeResult};

/// Owned RGBA8 pixel buffer produced and consumed by the compositor.
///
/// A surface is created once per request, fully populated, then either
/// blitted into a larger surface or encoded; it is moved through the
/// pipeline and never shared between stages.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Surface {
    pixels: RgbaImage,
}

impl Surface {
    /// Allocate a surface filled with a solid color.
    pub fn filled(width: u32, height: u32, color: Rgba<u8>) -> MemeforgeResult<Self> {
        if width == 0 || height == 0 {
            return Err(MemeforgeError::invalid_parameter(format!(
                "surface dimensions must be non-zero, got {width}x{height}"
            )));
        }
        Ok(Self {
            pixels: RgbaImage::from_pixel(width, height, color),
        })
    }

    /// Wrap an already-decoded RGBA image.
    pub fn from_rgba(pixels: RgbaImage) -> Self {
        Self { pixels }
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// Borrow the backing image.
    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }

    /// Mutably borrow the backing image.
    pub(crate) fn pixels_mut(&mut self) -> &mut RgbaImage {
        &mut self.pixels
    }

    /// Raw row-major RGBA8 bytes.
    pub fn data(&self) -> &[u8] {
        self.pixels.as_raw()
    }

    /// Copy `src` into `self` with its top-left corner at `(x, y)`.
    ///
    /// Direct pixel copy: source replaces destination, no alpha blending.
    /// Both composition layouts place exact-fit rectangles, so a source that
    /// does not fit inside the destination is a validation error rather than
    /// a silent clip.
    pub fn blit(&mut self, src: &Surface, x: u32, y: u32) -> MemeforgeResult<()> {
        let fits = x.checked_add(src.width()).is_some_and(|right| right <= self.width())
            && y.checked_add(src.height()).is_some_and(|bottom| bottom <= self.height());
        if !fits {
            return Err(MemeforgeError::invalid_parameter(format!(
                "blit of {}x{} at ({x}, {y}) exceeds {}x{} destination",
                src.width(),
                src.height(),
                self.width(),
                self.height()
            )));
        }
        self.pixels
            .copy_from(&src.pixels, x, y)
            .map_err(|e| MemeforgeError::invalid_parameter(format!("blit failed: {e}")))?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/surface.rs"]
mod tests;
