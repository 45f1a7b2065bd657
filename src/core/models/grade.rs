//! Grading result model

use serde::{Deserialize, Serialize};

use super::CaptureSlot;

/// Label used when one or more captures are missing
pub const INCOMPLETE_LABEL: &str = "Incomplete capture";

/// The four PSA-style sub-scores, each in `[0, 10]`
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SubScores {
    /// Border centering
    pub centering: f64,
    /// Corner sharpness
    pub corners: f64,
    /// Edge condition
    pub edges: f64,
    /// Surface condition
    pub surface: f64,
}

impl SubScores {
    /// All four scores zero
    #[must_use]
    pub const fn zero() -> Self {
        Self {
            centering: 0.0,
            corners: 0.0,
            edges: 0.0,
            surface: 0.0,
        }
    }

    /// Scores paired with their category names, in category order
    #[must_use]
    pub const fn categories(&self) -> [(&'static str, f64); 4] {
        [
            ("centering", self.centering),
            ("corners", self.corners),
            ("edges", self.edges),
            ("surface", self.surface),
        ]
    }
}

/// A grade estimate. Built once, never modified.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradingResult {
    /// Human-readable predicted grade, e.g. "Likely PSA 9 (model estimate ~9.0)"
    pub predicted_grade: String,
    /// Per-category scores
    pub sub_scores: SubScores,
    /// Advisory notes, never empty
    pub notes: Vec<String>,
    /// Slots that were missing when the estimate ran
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub missing: Vec<CaptureSlot>,
}

impl GradingResult {
    /// Whether this result is the incomplete-capture outcome
    #[must_use]
    pub fn is_incomplete(&self) -> bool {
        !self.missing.is_empty()
    }
}

/// Discrete grade tier, ordered from worst to best
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum GradeBand {
    /// Below 6
    Psa5OrLower,
    /// `[6, 7)`
    Psa6,
    /// `[7, 8)`
    Psa7,
    /// `[8, 9)`
    Psa8,
    /// `[9, 9.5)`
    Psa9,
    /// 9.5 and above
    Psa10,
}

impl GradeBand {
    /// Band for a (rounded) composite score
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score >= 9.5 {
            Self::Psa10
        } else if score >= 9.0 {
            Self::Psa9
        } else if score >= 8.0 {
            Self::Psa8
        } else if score >= 7.0 {
            Self::Psa7
        } else if score >= 6.0 {
            Self::Psa6
        } else {
            Self::Psa5OrLower
        }
    }

    /// Band text
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Psa10 => "Likely PSA 10",
            Self::Psa9 => "Likely PSA 9",
            Self::Psa8 => "Likely PSA 8",
            Self::Psa7 => "Likely PSA 7",
            Self::Psa6 => "Likely PSA 6",
            Self::Psa5OrLower => "Likely PSA 5 or lower",
        }
    }
}

impl std::fmt::Display for GradeBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
