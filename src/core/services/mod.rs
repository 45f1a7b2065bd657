//! Business logic services
//!
//! Pure functions and state machines that operate on domain models.

pub mod grader;
mod navigator;
mod session;

pub use grader::{estimate, grade_scores, jitter, round_to_half};
pub use navigator::{NavigationError, Navigator, PlaceholderPolicy};
pub use session::CaptureSession;
