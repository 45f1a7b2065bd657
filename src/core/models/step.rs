//! Wizard steps
//!
//! Four strictly ordered steps: three captures followed by a review.

use serde::{Deserialize, Serialize};

use super::{CaptureError, CaptureSlot};

/// A step of the capture wizard
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    /// Capture the front, top-down
    #[default]
    FrontTop,
    /// Capture the back, top-down
    BackTop,
    /// Capture the front at an angle
    FrontAngle,
    /// Review captures and run the estimate
    Review,
}

impl WizardStep {
    /// All steps in wizard order
    pub const ALL: [Self; 4] = [Self::FrontTop, Self::BackTop, Self::FrontAngle, Self::Review];

    /// Zero-based position in the wizard
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::FrontTop => 0,
            Self::BackTop => 1,
            Self::FrontAngle => 2,
            Self::Review => 3,
        }
    }

    /// The step after this one; `None` from review
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::FrontTop => Some(Self::BackTop),
            Self::BackTop => Some(Self::FrontAngle),
            Self::FrontAngle => Some(Self::Review),
            Self::Review => None,
        }
    }

    /// The step before this one; `None` from the first step
    #[must_use]
    pub const fn previous(self) -> Option<Self> {
        match self {
            Self::FrontTop => None,
            Self::BackTop => Some(Self::FrontTop),
            Self::FrontAngle => Some(Self::BackTop),
            Self::Review => Some(Self::FrontAngle),
        }
    }

    /// The slot this step captures, if any
    #[must_use]
    pub const fn slot(self) -> Option<CaptureSlot> {
        match self {
            Self::FrontTop => Some(CaptureSlot::FrontTop),
            Self::BackTop => Some(CaptureSlot::BackTop),
            Self::FrontAngle => Some(CaptureSlot::FrontAngle),
            Self::Review => None,
        }
    }

    /// Stable identifier
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::FrontTop => "front_top",
            Self::BackTop => "back_top",
            Self::FrontAngle => "front_angle",
            Self::Review => "review",
        }
    }

    /// Stepper label ("Step 1" .. "Step 4")
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::FrontTop => "Step 1",
            Self::BackTop => "Step 2",
            Self::FrontAngle => "Step 3",
            Self::Review => "Step 4",
        }
    }

    /// Short stepper caption
    #[must_use]
    pub const fn short_name(self) -> &'static str {
        match self {
            Self::FrontTop => "Front (Top)",
            Self::BackTop => "Back (Top)",
            Self::FrontAngle => "Front (Angled)",
            Self::Review => "Review",
        }
    }

    /// One-line heading shown while the step is active
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::FrontTop => "Front - top-down (phone parallel to the card).",
            Self::BackTop => "Back - top-down (same framing & angle).",
            Self::FrontAngle => "Front - angled (~20-30\u{b0} tilt for surface).",
            Self::Review => "Review captures & run PSA-style grade estimate.",
        }
    }

    /// Photographing guidance for the step
    #[must_use]
    pub const fn instructions(self) -> &'static str {
        match self {
            Self::FrontTop => {
                "Place the card on a flat, non-glossy surface. Hold your phone parallel to the \
                 card in a top-down position, ensuring the entire card is visible and in focus."
            },
            Self::BackTop => {
                "Flip the card over to show the back. Keep the same top-down angle and framing \
                 as the front photo. Ensure the card is flat and the entire back is visible."
            },
            Self::FrontAngle => {
                "Tilt your phone to a 20-30\u{b0} angle to capture the card's surface details \
                 and depth. Focus on corners and edges to show any wear or imperfections."
            },
            Self::Review => {
                "Check your captures, then run the grade estimate. For best results, the card \
                 should fill most of the frame and be in sharp focus."
            },
        }
    }
}

impl std::fmt::Display for WizardStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

impl std::str::FromStr for WizardStep {
    type Err = CaptureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('-', "_");
        match normalized.as_str() {
            "review" | "4" => Ok(Self::Review),
            "1" => Ok(Self::FrontTop),
            "2" => Ok(Self::BackTop),
            "3" => Ok(Self::FrontAngle),
            _ => normalized
                .parse::<CaptureSlot>()
                .map(Self::from)
                .map_err(|_| CaptureError::UnknownStep(s.trim().to_string())),
        }
    }
}

impl From<CaptureSlot> for WizardStep {
    fn from(slot: CaptureSlot) -> Self {
        match slot {
            CaptureSlot::FrontTop => Self::FrontTop,
            CaptureSlot::BackTop => Self::BackTop,
            CaptureSlot::FrontAngle => Self::FrontAngle,
        }
    }
}
