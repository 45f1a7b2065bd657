//! Filesystem image source
//!
//! Implements [`ImageSource`] by reading image files from disk. Inside a
//! directory, a slot's image is the first file named after the slot
//! (`front_top.jpg`, `back-top.png`, ...).

use std::fs;
use std::path::{Path, PathBuf};

use glob::Pattern;

use crate::core::models::{CaptureSlot, ImagePayload};
use crate::core::ports::{ImageSource, SourceError};

/// Reads images from the local filesystem
#[derive(Debug, Clone, Copy, Default)]
pub struct FileImageSource;

impl FileImageSource {
    /// Create a filesystem image source
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

/// MIME type for an image path, from its extension
#[must_use]
pub fn mime_type_for(path: &Path) -> &'static str {
    let ext = path.extension().and_then(|e| e.to_str()).map(str::to_lowercase);
    match ext.as_deref() {
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("bmp") => "image/bmp",
        Some("heic") => "image/heic",
        _ => "application/octet-stream",
    }
}

impl ImageSource for FileImageSource {
    fn load(&self, path: &Path) -> Result<ImagePayload, SourceError> {
        if !path.is_file() {
            return Err(SourceError::NotFound(path.to_path_buf()));
        }

        let bytes = fs::read(path)?;
        log::debug!("read {} ({} bytes)", path.display(), bytes.len());

        ImagePayload::new(bytes, mime_type_for(path))
            .map(|p| p.with_origin(path.display().to_string()))
            .map_err(|_| SourceError::Empty(path.to_path_buf()))
    }

    fn discover(&self, dir: &Path) -> Result<Vec<(CaptureSlot, PathBuf)>, SourceError> {
        if !dir.is_dir() {
            return Err(SourceError::NotFound(dir.to_path_buf()));
        }

        let base = Pattern::escape(&dir.to_string_lossy());
        let mut found = Vec::new();

        for slot in CaptureSlot::ALL {
            let underscored = slot.id();
            let hyphenated = underscored.replace('_', "-");

            let mut candidates = Vec::new();
            for stem in [underscored, hyphenated.as_str()] {
                let pattern = format!("{base}/{stem}.*");
                candidates.extend(glob::glob(&pattern)?.filter_map(Result::ok));
            }
            candidates.retain(|p| p.is_file());
            candidates.sort();

            if let Some(path) = candidates.into_iter().next() {
                log::debug!("discovered {slot}: {}", path.display());
                found.push((slot, path));
            }
        }

        Ok(found)
    }
}
