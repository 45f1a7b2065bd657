//! Portal configuration
//!
//! The portal's platform list and placeholder policy, loaded once from
//! `vcv.toml` and passed explicitly to whatever needs it.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::models::Platform;
use crate::core::services::{Navigator, PlaceholderPolicy};
use crate::paths;

/// Errors that can occur while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An explicitly requested config file does not exist
    #[error("config file not found: {0}")]
    NotFound(PathBuf),

    /// IO error reading or writing the file
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// File is not valid TOML for this schema
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    /// Config could not be serialized
    #[error("cannot serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// A placeholder pattern is not a valid regex
    #[error("invalid placeholder pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    /// Two platforms share an id
    #[error("duplicate platform id: {0}")]
    DuplicatePlatform(u32),
}

/// Whole-file configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortalConfig {
    /// Portal-wide settings
    #[serde(default)]
    pub portal: PortalSettings,
    /// Linked platforms, in display order
    #[serde(default = "default_platforms")]
    pub platforms: Vec<Platform>,
}

/// Portal-wide settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortalSettings {
    /// Portal heading
    #[serde(default = "default_title")]
    pub title: String,
    /// Portal sub-heading
    #[serde(default = "default_subtitle")]
    pub subtitle: String,
    /// Regexes marking template URLs that must not be navigated to
    #[serde(default = "default_placeholder_patterns")]
    pub placeholder_patterns: Vec<String>,
}

fn default_title() -> String {
    "Virtual Commerce Ventures".to_string()
}

fn default_subtitle() -> String {
    "Choose your destination".to_string()
}

fn default_placeholder_patterns() -> Vec<String> {
    vec![r"example\.com".to_string()]
}

const ORDINALS: [&str; 9] =
    ["first", "second", "third", "fourth", "fifth", "sixth", "seventh", "eighth", "ninth"];

fn default_platforms() -> Vec<Platform> {
    (1..)
        .zip(ORDINALS)
        .map(|(id, ordinal)| Platform {
            id,
            title: format!("Platform {id}"),
            description: format!("Access the {ordinal} service"),
            url: Some(format!("https://subdomain{id}.example.com")),
        })
        .collect()
}

impl Default for PortalSettings {
    fn default() -> Self {
        Self {
            title: default_title(),
            subtitle: default_subtitle(),
            placeholder_patterns: default_placeholder_patterns(),
        }
    }
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            portal: PortalSettings::default(),
            platforms: default_platforms(),
        }
    }
}

impl PortalConfig {
    /// Parse and validate a config from TOML text
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a config file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Load configuration following the standard lookup order
    ///
    /// An explicit path must exist. Otherwise the first existing candidate
    /// from [`paths::config_candidates`] wins, and defaults apply when none
    /// exists. Returns the file actually used, if any.
    pub fn load(explicit: Option<&Path>) -> Result<(Self, Option<PathBuf>), ConfigError> {
        if let Some(path) = explicit {
            log::debug!("loading config from {}", path.display());
            return Ok((Self::from_file(path)?, Some(path.to_path_buf())));
        }

        for candidate in paths::config_candidates() {
            if candidate.is_file() {
                log::debug!("loading config from {}", candidate.display());
                return Ok((Self::from_file(&candidate)?, Some(candidate)));
            }
        }

        log::debug!("no config file found, using defaults");
        Ok((Self::default(), None))
    }

    /// Save config to disk
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)?;
        }
        fs::write(path, self.to_toml()?)?;
        Ok(())
    }

    /// Render as TOML
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Check invariants not expressible in the schema
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();
        for platform in &self.platforms {
            if !seen.insert(platform.id) {
                return Err(ConfigError::DuplicatePlatform(platform.id));
            }
        }
        PlaceholderPolicy::new(&self.portal.placeholder_patterns)?;
        Ok(())
    }

    /// Build a navigator over this configuration
    pub fn navigator(&self) -> Result<Navigator, ConfigError> {
        let policy = PlaceholderPolicy::new(&self.portal.placeholder_patterns)?;
        Ok(Navigator::new(self.platforms.clone(), policy))
    }
}
