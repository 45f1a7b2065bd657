//! Domain models for vcv
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`CaptureSlot`] - one of the three required photographs
//! - [`WizardStep`] - a step of the four-step capture wizard
//! - [`CapturedImages`] - which slots have been filled, and with what
//! - [`GradingResult`] - a placeholder grade estimate
//! - [`Platform`] - a sub-service linked from the portal

mod error;
mod grade;
mod images;
mod platform;
mod slot;
mod step;

pub use error::CaptureError;
pub use grade::{GradeBand, GradingResult, INCOMPLETE_LABEL, SubScores};
pub use images::{CapturedImage, CapturedImages, ImagePayload};
pub use platform::{LinkStatus, Platform};
pub use slot::CaptureSlot;
pub use step::WizardStep;
