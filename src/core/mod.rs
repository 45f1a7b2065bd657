//! Core domain logic for vcv
//!
//! This module contains pure business logic with no I/O dependencies.
//! All external interactions are abstracted through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (`CaptureSlot`, `WizardStep`, `GradingResult`, `Platform`)
//! - `services/` - Capture session, grade estimator, portal navigator
//! - `ports/` - Trait definitions for external dependencies

pub mod models;
pub mod ports;
pub mod services;
