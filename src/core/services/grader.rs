//! Grade estimator - placeholder PSA-style scoring
//!
//! No image analysis happens here. Sub-scores are manufactured from a fixed
//! base perturbed by [`jitter`], so a complete capture always produces the
//! same estimate. The bonuses and thresholds below carry no grading
//! methodology; they are kept as-is for behavioural compatibility.

use crate::core::models::{CapturedImages, GradeBand, GradingResult, INCOMPLETE_LABEL, SubScores};

/// Score every category starts from before jitter
pub const BASE_SCORE: f64 = 8.5;

/// Lowest score a complete capture can receive in any category
pub const MIN_SCORE: f64 = 7.0;

/// Highest score in any category
pub const MAX_SCORE: f64 = 10.0;

/// Half-width of the [`jitter`] range
pub const JITTER_SPREAD: f64 = 0.3;

/// Seeds fed to [`jitter`] for centering, corners, edges, surface
pub const SEEDS: [u32; 4] = [1, 2, 3, 4];

const CENTERING_BONUS: f64 = 0.3;
const EDGES_BONUS: f64 = 0.2;

const CENTERING_NOTE_BELOW: f64 = 8.5;
const CATEGORY_NOTE_BELOW: f64 = 9.0;

const INCOMPLETE_NOTE: &str = "Please capture all required images before grading.";
const CENTERING_NOTE: &str = "Centering may limit top grades (check left/right borders).";
const CORNERS_NOTE: &str = "Minor corner wear detected (zoom in on corners).";
const EDGES_NOTE: &str = "Edge chipping or whitening could be present.";
const SURFACE_NOTE: &str = "Surface might have light scratches/print lines.";
const STRONG_NOTE: &str =
    "Capture looks strong across all categories. Potential PSA 9\u{2013}10 candidate.";

/// Deterministic pseudo-noise in `[-0.3, 0.3)` for a seed
///
/// Takes the fractional part of `sin(seed) * 10000` and rescales it.
#[must_use]
pub fn jitter(seed: u32) -> f64 {
    let x = f64::from(seed).sin() * 10_000.0;
    (x - x.floor()).mul_add(2.0 * JITTER_SPREAD, -JITTER_SPREAD)
}

/// Round to the nearest multiple of 0.5 (halves round up)
#[must_use]
pub fn round_to_half(value: f64) -> f64 {
    (value * 2.0).round() / 2.0
}

/// Composite score before rounding
///
/// Centering and edges get a small bonus before the minimum is taken.
#[must_use]
pub fn composite(scores: &SubScores) -> f64 {
    (scores.centering + CENTERING_BONUS)
        .min(scores.corners)
        .min(scores.edges + EDGES_BONUS)
        .min(scores.surface)
}

/// The synthetic sub-scores every complete capture receives
#[must_use]
pub fn synthetic_scores() -> SubScores {
    let [centering, corners, edges, surface] =
        SEEDS.map(|seed| (BASE_SCORE + jitter(seed)).clamp(MIN_SCORE, MAX_SCORE));
    SubScores {
        centering,
        corners,
        edges,
        surface,
    }
}

/// Grade a fixed set of sub-scores
#[must_use]
pub fn grade_scores(scores: SubScores) -> GradingResult {
    let rounded = round_to_half(composite(&scores));
    let band = GradeBand::from_score(rounded);

    let mut notes = Vec::new();
    if scores.centering < CENTERING_NOTE_BELOW {
        notes.push(CENTERING_NOTE.to_string());
    }
    if scores.corners < CATEGORY_NOTE_BELOW {
        notes.push(CORNERS_NOTE.to_string());
    }
    if scores.edges < CATEGORY_NOTE_BELOW {
        notes.push(EDGES_NOTE.to_string());
    }
    if scores.surface < CATEGORY_NOTE_BELOW {
        notes.push(SURFACE_NOTE.to_string());
    }
    if notes.is_empty() {
        notes.push(STRONG_NOTE.to_string());
    }

    GradingResult {
        predicted_grade: format!("{band} (model estimate ~{rounded:.1})"),
        sub_scores: scores,
        notes,
        missing: Vec::new(),
    }
}

/// Estimate a grade for a set of captures
///
/// Missing captures short-circuit to the incomplete-capture result.
#[must_use]
pub fn estimate(images: &CapturedImages) -> GradingResult {
    let missing = images.missing();
    if !missing.is_empty() {
        let names: Vec<&str> = missing.iter().map(|s| s.display_name()).collect();
        log::debug!("estimate skipped, missing: {}", names.join(", "));
        return GradingResult {
            predicted_grade: INCOMPLETE_LABEL.to_string(),
            sub_scores: SubScores::zero(),
            notes: vec![INCOMPLETE_NOTE.to_string(), format!("Missing: {}", names.join(", "))],
            missing,
        };
    }

    let result = grade_scores(synthetic_scores());
    log::debug!("estimate: {}", result.predicted_grade);
    result
}
