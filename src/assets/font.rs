use std::{
    collections::HashMap,
    path::{Path, PathBuf},
    sync::Arc,
};

use parking_lot::Mutex;
use rusttype::Font;

use crate::foundation::error::{MemeforgeError, MemeforgeResult};

/// Read-through cache of parsed font faces keyed by path.
///
/// Faces are size-independent; the render scale is applied at measure/draw
/// time, so one cached face serves every requested font size. The map lock is
/// held across the filesystem read, which makes population single-flight:
/// concurrent first requests for the same path load the face exactly once.
#[derive(Default)]
pub struct FontCache {
    faces: Mutex<HashMap<PathBuf, Arc<Font<'static>>>>,
}

impl std::fmt::Debug for FontCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontCache")
            .field("cached_paths", &self.faces.lock().len())
            .finish()
    }
}

impl FontCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the face at `path`, reading and parsing it on first use.
    ///
    /// Missing or unparsable font data is [`MemeforgeError::FontLoad`] and is
    /// fatal for the request; the failed path is not cached, so a repaired
    /// asset is picked up by the next request.
    pub fn load(&self, path: &Path) -> MemeforgeResult<Arc<Font<'static>>> {
        let mut faces = self.faces.lock();
        if let Some(face) = faces.get(path) {
            return Ok(Arc::clone(face));
        }

        let bytes = std::fs::read(path).map_err(|e| {
            MemeforgeError::font_load(format!("failed to read font '{}': {e}", path.display()))
        })?;
        let face = Font::try_from_vec(bytes).ok_or_else(|| {
            MemeforgeError::font_load(format!("failed to parse font '{}'", path.display()))
        })?;

        let face = Arc::new(face);
        faces.insert(path.to_path_buf(), Arc::clone(&face));
        Ok(face)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/font.rs"]
mod tests;
