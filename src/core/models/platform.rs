//! Portal platforms

use serde::{Deserialize, Serialize};

/// A sub-service linked from the portal grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Platform {
    /// Numeric platform id
    pub id: u32,
    /// Card title
    pub title: String,
    /// Card description
    #[serde(default)]
    pub description: String,
    /// Destination URL; `None` means not configured
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Whether a platform can be navigated to
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum LinkStatus {
    /// A real URL is configured
    Ready {
        /// Destination URL
        url: String,
    },
    /// No URL, or a URL still pointing at a template host
    NotConfigured {
        /// Why the link is unusable
        reason: String,
    },
}

impl LinkStatus {
    /// Whether navigation may proceed
    #[must_use]
    pub const fn is_ready(&self) -> bool {
        matches!(self, Self::Ready { .. })
    }
}
