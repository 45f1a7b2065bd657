//! Image payloads and the slot → image mapping

use std::collections::BTreeMap;

use super::{CaptureError, CaptureSlot};

/// An in-memory image, already read from wherever it came from
///
/// The bytes are opaque: nothing in the crate decodes them.
#[derive(Clone, PartialEq, Eq)]
pub struct ImagePayload {
    bytes: Vec<u8>,
    mime_type: String,
    origin: Option<String>,
}

impl ImagePayload {
    /// Create a payload, rejecting empty buffers
    pub fn new(bytes: Vec<u8>, mime_type: impl Into<String>) -> Result<Self, CaptureError> {
        if bytes.is_empty() {
            return Err(CaptureError::EmptyPayload);
        }
        Ok(Self {
            bytes,
            mime_type: mime_type.into(),
            origin: None,
        })
    }

    /// Attach a description of where the image came from (usually a file path)
    #[must_use]
    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    /// Raw image bytes
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Number of bytes in the image
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the payload holds no bytes
    ///
    /// [`ImagePayload::new`] refuses empty buffers, so this is false for
    /// every payload built through it.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// MIME type, e.g. `image/jpeg`
    #[must_use]
    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    /// Where the image was read from, if known
    #[must_use]
    pub fn origin(&self) -> Option<&str> {
        self.origin.as_deref()
    }
}

impl std::fmt::Debug for ImagePayload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImagePayload")
            .field("len", &self.bytes.len())
            .field("mime_type", &self.mime_type)
            .field("origin", &self.origin)
            .finish()
    }
}

/// A stored capture
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedImage {
    /// The image itself
    pub payload: ImagePayload,
    /// When it was captured (RFC3339)
    pub captured_at: String,
}

/// Mapping from capture slot to image
///
/// Inserting into an occupied slot replaces the previous image. Entries
/// are only ever removed all at once by [`CapturedImages::clear`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CapturedImages {
    entries: BTreeMap<CaptureSlot, CapturedImage>,
}

impl CapturedImages {
    /// Create an empty mapping
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store an image, returning the one it replaced
    pub fn insert(&mut self, slot: CaptureSlot, payload: ImagePayload) -> Option<ImagePayload> {
        let entry = CapturedImage {
            payload,
            captured_at: chrono::Utc::now().to_rfc3339(),
        };
        self.entries.insert(slot, entry).map(|old| old.payload)
    }

    /// Image stored for a slot
    #[must_use]
    pub fn get(&self, slot: CaptureSlot) -> Option<&ImagePayload> {
        self.entries.get(&slot).map(|e| &e.payload)
    }

    /// Stored capture (image plus timestamp) for a slot
    #[must_use]
    pub fn entry(&self, slot: CaptureSlot) -> Option<&CapturedImage> {
        self.entries.get(&slot)
    }

    /// Whether a slot has been captured
    #[must_use]
    pub fn contains(&self, slot: CaptureSlot) -> bool {
        self.entries.contains_key(&slot)
    }

    /// Slots not yet captured, in capture order
    #[must_use]
    pub fn missing(&self) -> Vec<CaptureSlot> {
        CaptureSlot::ALL.into_iter().filter(|s| !self.contains(*s)).collect()
    }

    /// Whether all three slots are filled
    #[must_use]
    pub fn is_complete(&self) -> bool {
        CaptureSlot::ALL.iter().all(|s| self.contains(*s))
    }

    /// Number of filled slots
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no slot is filled
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Remove every capture
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
