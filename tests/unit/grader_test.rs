//! Tests for the grade estimator

use test_case::test_case;
use vcv::core::models::{CaptureSlot, GradeBand, INCOMPLETE_LABEL, SubScores};
use vcv::core::services::grader::{MAX_SCORE, MIN_SCORE, composite};
use vcv::core::services::{estimate, grade_scores, round_to_half};

use crate::common::{complete_images, images_with};

// =============================================================================
// INCOMPLETE CAPTURES
// =============================================================================

#[test]
fn empty_capture_names_every_slot() {
    let result = estimate(&images_with(&[]));

    assert!(result.predicted_grade.starts_with(INCOMPLETE_LABEL));
    assert_eq!(result.sub_scores, SubScores::zero());
    let notes = result.notes.join("\n");
    assert!(notes.contains("Front (top-down)"));
    assert!(notes.contains("Back (top-down)"));
    assert!(notes.contains("Front (angled)"));
    assert_eq!(result.missing, CaptureSlot::ALL.to_vec());
}

#[test]
fn single_missing_slot_named_alone() {
    let result = estimate(&images_with(&[CaptureSlot::FrontTop, CaptureSlot::FrontAngle]));

    assert_eq!(result.predicted_grade, INCOMPLETE_LABEL);
    assert_eq!(result.notes.len(), 2);
    assert_eq!(result.notes[0], "Please capture all required images before grading.");
    assert_eq!(result.notes[1], "Missing: Back (top-down)");
}

// =============================================================================
// COMPLETE CAPTURES
// =============================================================================

#[test]
fn complete_capture_scores_in_range() {
    let result = estimate(&complete_images());
    for (name, score) in result.sub_scores.categories() {
        assert!((MIN_SCORE..=MAX_SCORE).contains(&score), "{name} = {score}");
    }
    assert!(result.missing.is_empty());
    assert!(!result.notes.is_empty());
}

#[test]
fn documented_example_scores() {
    let scores = SubScores {
        centering: 8.7,
        corners: 9.2,
        edges: 9.4,
        surface: 8.9,
    };
    assert!((composite(&scores) - 8.9).abs() < 1e-9);

    let result = grade_scores(scores);
    assert_eq!(result.predicted_grade, "Likely PSA 9 (model estimate ~9.0)");
    assert_eq!(result.notes.len(), 1);
    assert!(result.notes[0].starts_with("Surface"));
}

#[test]
fn notes_follow_category_order() {
    let result = grade_scores(SubScores {
        centering: 8.0,
        corners: 8.0,
        edges: 8.0,
        surface: 8.0,
    });
    assert_eq!(result.notes.len(), 4);
    assert!(result.notes[0].starts_with("Centering"));
    assert!(result.notes[1].contains("corner"));
    assert!(result.notes[2].starts_with("Edge"));
    assert!(result.notes[3].starts_with("Surface"));
}

#[test]
fn centering_bonus_applies_before_minimum() {
    // 8.2 + 0.3 = 8.5 is the minimum; the raw centering score is not
    let scores = SubScores {
        centering: 8.2,
        corners: 9.5,
        edges: 9.5,
        surface: 9.5,
    };
    assert!((composite(&scores) - 8.5).abs() < 1e-9);
    assert_eq!(grade_scores(scores).predicted_grade, "Likely PSA 8 (model estimate ~8.5)");
}

// =============================================================================
// BANDS
// =============================================================================

#[test_case(10.0, GradeBand::Psa10 ; "ten")]
#[test_case(9.5, GradeBand::Psa10 ; "nine and a half")]
#[test_case(9.0, GradeBand::Psa9 ; "nine")]
#[test_case(8.5, GradeBand::Psa8 ; "eight and a half")]
#[test_case(7.0, GradeBand::Psa7 ; "seven")]
#[test_case(6.0, GradeBand::Psa6 ; "six")]
#[test_case(5.5, GradeBand::Psa5OrLower ; "five and a half")]
#[test_case(0.0, GradeBand::Psa5OrLower ; "zero")]
fn band_thresholds(score: f64, expected: GradeBand) {
    assert_eq!(GradeBand::from_score(score), expected);
}

#[test_case(8.9, 9.0 ; "rounds up")]
#[test_case(8.7, 8.5 ; "rounds down")]
#[test_case(8.25, 8.5 ; "quarter rounds up")]
#[test_case(9.5, 9.5 ; "already aligned")]
fn half_point_rounding(value: f64, expected: f64) {
    assert!((round_to_half(value) - expected).abs() < f64::EPSILON);
}
