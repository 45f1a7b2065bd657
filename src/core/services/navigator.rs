//! Portal navigator - resolves platform ids to destinations
//!
//! A URL that is missing, blank or matches a placeholder pattern is
//! "not configured": it is reported to the user and never handed out as a
//! destination.

use regex::Regex;
use thiserror::Error;

use crate::core::models::{LinkStatus, Platform};

/// Errors returned when a platform cannot be navigated to
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    /// No platform with this id
    #[error("unknown platform: {0}")]
    UnknownPlatform(u32),

    /// Platform exists but has no usable URL
    #[error("URL for {title} (platform {id}) is not configured")]
    NotConfigured {
        /// Platform id
        id: u32,
        /// Platform title
        title: String,
    },
}

/// Set of patterns marking template URLs
#[derive(Debug, Clone, Default)]
pub struct PlaceholderPolicy {
    patterns: Vec<Regex>,
}

impl PlaceholderPolicy {
    /// Compile a policy from regex sources
    pub fn new<S: AsRef<str>>(patterns: &[S]) -> Result<Self, regex::Error> {
        let patterns = patterns.iter().map(|p| Regex::new(p.as_ref())).collect::<Result<_, _>>()?;
        Ok(Self { patterns })
    }

    /// Whether a URL is still a template placeholder
    #[must_use]
    pub fn is_placeholder(&self, url: &str) -> bool {
        self.patterns.iter().any(|re| re.is_match(url))
    }
}

/// Resolves platform links against an explicit configuration
#[derive(Debug, Clone)]
pub struct Navigator {
    platforms: Vec<Platform>,
    policy: PlaceholderPolicy,
}

impl Navigator {
    /// Create a navigator over a platform list
    #[must_use]
    pub const fn new(platforms: Vec<Platform>, policy: PlaceholderPolicy) -> Self {
        Self { platforms, policy }
    }

    /// Platforms in display order
    #[must_use]
    pub fn platforms(&self) -> &[Platform] {
        &self.platforms
    }

    /// Look up a platform by id
    #[must_use]
    pub fn platform(&self, id: u32) -> Option<&Platform> {
        self.platforms.iter().find(|p| p.id == id)
    }

    /// Link status of a platform
    #[must_use]
    pub fn status(&self, platform: &Platform) -> LinkStatus {
        match platform.url.as_deref().map(str::trim) {
            None | Some("") => LinkStatus::NotConfigured {
                reason: "no URL set".to_string(),
            },
            Some(url) if self.policy.is_placeholder(url) => LinkStatus::NotConfigured {
                reason: format!("placeholder URL {url}"),
            },
            Some(url) => LinkStatus::Ready {
                url: url.to_string(),
            },
        }
    }

    /// Resolve a platform id to its destination URL
    pub fn resolve(&self, id: u32) -> Result<String, NavigationError> {
        let platform = self.platform(id).ok_or(NavigationError::UnknownPlatform(id))?;
        match self.status(platform) {
            LinkStatus::Ready { url } => {
                log::info!("navigating to {}: {url}", platform.title);
                Ok(url)
            },
            LinkStatus::NotConfigured { reason } => {
                log::warn!("{} is not configured ({reason})", platform.title);
                Err(NavigationError::NotConfigured {
                    id,
                    title: platform.title.clone(),
                })
            },
        }
    }
}
