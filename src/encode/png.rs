use image::{ImageEncoder, codecs::png::PngEncoder};

use crate::foundation::error::{MemeforgeError, MemeforgeResult};
use crate::render::surface::Surface;

/// Serialize a surface to an RGBA8 PNG byte buffer.
///
/// The encoder writes no timestamps or ancillary metadata, so identical
/// surfaces produce identical buffers and golden-image comparisons stay
/// byte-stable.
pub fn encode_png(surface: &Surface) -> MemeforgeResult<Vec<u8>> {
    let mut buf = Vec::new();
    let encoder = PngEncoder::new(&mut buf);
    encoder
        .write_image(
            surface.data(),
            surface.width(),
            surface.height(),
            image::ExtendedColorType::Rgba8,
        )
        .map_err(|e| MemeforgeError::encode(format!("png encode failed: {e}")))?;
    Ok(buf)
}

#[cfg(test)]
#[path = "../../tests/unit/encode/png.rs"]
mod tests;
