//! Centralized path definitions for vcv
//!
//! Single source of truth for the filesystem locations vcv reads its
//! configuration from.
//!
//! ## Lookup Order
//!
//! ```text
//! --config <PATH> / $VCV_CONFIG      # explicit, must exist
//! ./vcv.toml                         # project-local
//! <config dir>/vcv/config.toml       # user-level (XDG on Linux)
//! built-in defaults
//! ```

use std::path::{Path, PathBuf};

// =============================================================================
// Project-level paths
// =============================================================================

/// Project configuration filename
pub const VCV_TOML: &str = "vcv.toml";

/// Get path to `vcv.toml` in a directory.
#[must_use]
pub fn project_config(dir: &Path) -> PathBuf {
    dir.join(VCV_TOML)
}

/// Get path to `vcv.toml` in the current directory.
#[must_use]
pub fn local_config() -> PathBuf {
    project_config(Path::new("."))
}

// =============================================================================
// Global paths (user-level)
// =============================================================================

/// Global config directory name
const GLOBAL_DIR: &str = "vcv";

/// Global config filename
const GLOBAL_CONFIG_FILE: &str = "config.toml";

/// Get the global vcv directory.
///
/// Returns `<config dir>/vcv/`, falling back to `~/.vcv/` when the platform
/// has no config directory.
#[must_use]
pub fn global_config_dir() -> PathBuf {
    dirs::config_dir().map_or_else(
        || dirs::home_dir().unwrap_or_else(|| PathBuf::from("~")).join(".vcv"),
        |dir| dir.join(GLOBAL_DIR),
    )
}

/// Get the global config file path.
#[must_use]
pub fn global_config() -> PathBuf {
    global_config_dir().join(GLOBAL_CONFIG_FILE)
}

/// Candidate config files, most specific first
#[must_use]
pub fn config_candidates() -> Vec<PathBuf> {
    vec![local_config(), global_config()]
}
