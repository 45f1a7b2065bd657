//! Port traits (interfaces) for external dependencies
//!
//! The core never reads files itself. Images reach the capture session
//! through [`ImageSource`]; implementations live in the `adapters` module.

mod image_source;

pub use image_source::{ImageSource, SourceError};
