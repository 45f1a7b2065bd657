//! Capture errors
//!
//! Validation failures raised synchronously by the capture workflow.
//! An incomplete capture is *not* an error: the grader reports it as a result.

use thiserror::Error;

/// Errors that can occur when feeding the capture workflow
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CaptureError {
    /// Slot identifier was empty
    #[error("empty capture slot")]
    EmptySlot,

    /// Slot identifier did not name one of the three capture slots
    #[error("unknown capture slot: {0}. Use: front_top, back_top, front_angle")]
    UnknownSlot(String),

    /// Step identifier did not name a wizard step
    #[error("unknown step: {0}. Use: front_top, back_top, front_angle, review")]
    UnknownStep(String),

    /// Image payload contained no bytes
    #[error("image payload is empty")]
    EmptyPayload,
}
