//! Adapter implementations for port traits
//!
//! Concrete implementations that handle I/O:
//!
//! - `file/` - images read from the local filesystem

pub mod file;
