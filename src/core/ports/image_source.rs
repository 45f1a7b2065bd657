//! Image source port
//!
//! Defines how a raw image reference (a path, a camera handle...) becomes an
//! in-memory [`ImagePayload`] before it reaches the capture session.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::core::models::{CaptureSlot, ImagePayload};

/// Errors raised while loading images
#[derive(Debug, Error)]
pub enum SourceError {
    /// The referenced image does not exist
    #[error("image not found: {0}")]
    NotFound(PathBuf),

    /// The referenced image has no content
    #[error("image is empty: {0}")]
    Empty(PathBuf),

    /// A directory scan pattern was invalid
    #[error("invalid search pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    /// IO error while reading
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Loads images for the capture workflow
pub trait ImageSource {
    /// Read one image into memory
    fn load(&self, path: &Path) -> Result<ImagePayload, SourceError>;

    /// Find the image for each slot inside a directory
    ///
    /// Slots without a matching image are absent from the result.
    fn discover(&self, dir: &Path) -> Result<Vec<(CaptureSlot, PathBuf)>, SourceError>;

    /// Load every discovered image in a directory
    fn load_dir(&self, dir: &Path) -> Result<Vec<(CaptureSlot, ImagePayload)>, SourceError> {
        self.discover(dir)?
            .into_iter()
            .map(|(slot, path)| self.load(&path).map(|payload| (slot, payload)))
            .collect()
    }
}
