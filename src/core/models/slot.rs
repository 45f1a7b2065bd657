//! Capture slots
//!
//! The three photographs a grade estimate needs. The set is fixed.

use serde::{Deserialize, Serialize};

use super::CaptureError;

/// One of the three required card photographs
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaptureSlot {
    /// Card front, phone parallel to the card
    FrontTop,
    /// Card back, same framing as the front
    BackTop,
    /// Card front, tilted 20-30 degrees to catch the surface
    FrontAngle,
}

impl CaptureSlot {
    /// All slots in capture order
    pub const ALL: [Self; 3] = [Self::FrontTop, Self::BackTop, Self::FrontAngle];

    /// Stable identifier (`front_top`, `back_top`, `front_angle`)
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::FrontTop => "front_top",
            Self::BackTop => "back_top",
            Self::FrontAngle => "front_angle",
        }
    }

    /// Human-readable name used in notes and listings
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::FrontTop => "Front (top-down)",
            Self::BackTop => "Back (top-down)",
            Self::FrontAngle => "Front (angled)",
        }
    }
}

impl std::fmt::Display for CaptureSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

impl std::str::FromStr for CaptureSlot {
    type Err = CaptureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('-', "_");
        match normalized.as_str() {
            "" => Err(CaptureError::EmptySlot),
            "front_top" => Ok(Self::FrontTop),
            "back_top" => Ok(Self::BackTop),
            "front_angle" | "front_angled" => Ok(Self::FrontAngle),
            _ => Err(CaptureError::UnknownSlot(s.trim().to_string())),
        }
    }
}
