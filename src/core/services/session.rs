//! Capture session - the four-step wizard
//!
//! Tracks the active step and the growing set of captures, and hands a
//! snapshot to the grader on request. Holds no I/O: payloads arrive
//! already read.

use crate::core::models::{
    CaptureError, CaptureSlot, CapturedImages, GradingResult, ImagePayload, WizardStep,
};
use crate::core::services::grader;

/// State of one capture wizard
#[derive(Debug, Clone, Default)]
pub struct CaptureSession {
    step: WizardStep,
    images: CapturedImages,
    last_result: Option<GradingResult>,
}

impl CaptureSession {
    /// Start a fresh session on the first step
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The active step
    #[must_use]
    pub const fn current_step(&self) -> WizardStep {
        self.step
    }

    /// Captures so far
    #[must_use]
    pub const fn images(&self) -> &CapturedImages {
        &self.images
    }

    /// The most recent grade, if one was requested since the last reset
    #[must_use]
    pub const fn last_result(&self) -> Option<&GradingResult> {
        self.last_result.as_ref()
    }

    /// Store an image for a slot
    ///
    /// Replaces any earlier image in that slot. When the active step is the
    /// one bound to `slot`, the wizard advances; capturing any other slot
    /// leaves the step alone. Returns the step after the capture.
    pub fn capture_image(
        &mut self,
        slot: CaptureSlot,
        payload: ImagePayload,
    ) -> Result<WizardStep, CaptureError> {
        // Non-empty by construction; an empty capture is never recorded.
        if payload.is_empty() {
            return Err(CaptureError::EmptyPayload);
        }

        log::debug!("captured {slot} ({} bytes, {})", payload.len(), payload.mime_type());
        if self.images.insert(slot, payload).is_some() {
            log::debug!("replaced earlier {slot} capture");
        }

        if self.step.slot() == Some(slot) {
            self.advance();
        }
        Ok(self.step)
    }

    /// Store an image for a slot named by its identifier
    pub fn capture_named(
        &mut self,
        slot: &str,
        payload: ImagePayload,
    ) -> Result<WizardStep, CaptureError> {
        let slot: CaptureSlot = slot.parse()?;
        self.capture_image(slot, payload)
    }

    /// Move to the next step; no-op on review
    fn advance(&mut self) {
        if let Some(next) = self.step.next() {
            log::debug!("step {} -> {next}", self.step);
            self.step = next;
        }
    }

    /// Select any step directly, regardless of what has been captured
    pub fn jump(&mut self, step: WizardStep) {
        log::debug!("jump {} -> {step}", self.step);
        self.step = step;
    }

    /// Go back one step; no-op on the first step
    pub fn back(&mut self) -> WizardStep {
        if let Some(previous) = self.step.previous() {
            self.jump(previous);
        }
        self.step
    }

    /// Grade the current captures
    ///
    /// Leaves step and captures untouched; the result is kept as the
    /// displayed result until the next grade or reset.
    pub fn request_grade(&mut self) -> GradingResult {
        let result = grader::estimate(&self.images);
        self.last_result = Some(result.clone());
        result
    }

    /// Drop every capture and any result, and return to the first step
    pub fn reset(&mut self) {
        log::debug!("session reset");
        self.images.clear();
        self.last_result = None;
        self.step = WizardStep::FrontTop;
    }

    /// Whether a step lies before the active one
    #[must_use]
    pub fn is_completed(&self, step: WizardStep) -> bool {
        step.index() < self.step.index()
    }

    /// Fraction of the wizard reached, `(index + 1) / 4`
    #[must_use]
    // Step counts are tiny; the casts are exact.
    #[allow(clippy::cast_precision_loss)]
    pub fn progress(&self) -> f64 {
        (self.step.index() + 1) as f64 / WizardStep::ALL.len() as f64
    }

    /// Whether all three captures are present
    #[must_use]
    pub fn is_ready_for_grade(&self) -> bool {
        self.images.is_complete()
    }
}
