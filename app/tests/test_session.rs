//! FILENAME: tests/test_session.rs
//! Integration tests for calculation commands and session state.

mod common;

use app_lib::{calculate_json, current_summary};
use common::{sample_inputs, single_term_inputs, TestHarness};
use engine::{SubjectInput, TermInput};

// ============================================================================
// CALCULATION TESTS
// ============================================================================

#[test]
fn test_calculate_sample() {
    let harness = TestHarness::new();
    let summary = harness.calculate(sample_inputs()).unwrap();

    let averages: Vec<f64> = summary.terms.iter().map(|t| t.average).collect();
    assert_eq!(averages, vec![86.0, 90.0]);
    assert_eq!(summary.overall_average, Some(87.78));
}

#[test]
fn test_display_lines() {
    let harness = TestHarness::new();
    let summary = harness.calculate(sample_inputs()).unwrap();

    assert_eq!(
        summary.display_lines(),
        vec![
            "Semester 1 GPA: 86.00".to_string(),
            "Semester 2 GPA: 90.00".to_string(),
            "Overall CGPA: 87.78".to_string(),
        ]
    );
}

#[test]
fn test_chart_starts_at_origin() {
    let harness = TestHarness::new();
    let summary = harness.calculate(sample_inputs()).unwrap();

    let xs: Vec<u32> = summary.chart.points.iter().map(|p| p.x).collect();
    assert_eq!(xs, vec![0, 1, 2]);
    assert_eq!(summary.chart.points[0].y, 0.0);
    assert_eq!(summary.chart.y_max, 91.0);
}

#[test]
fn test_empty_input_has_no_overall() {
    let harness = TestHarness::new();
    let summary = harness.calculate(Vec::new()).unwrap();

    assert!(summary.terms.is_empty());
    assert_eq!(summary.overall_average, None);
    assert!(summary.display_lines().is_empty());
    assert!(harness.has_calculation());
}

// ============================================================================
// SESSION STATE TESTS
// ============================================================================

#[test]
fn test_no_summary_before_calculation() {
    let harness = TestHarness::new();
    assert!(current_summary(&harness.state).unwrap().is_none());
}

#[test]
fn test_new_calculation_replaces_previous() {
    let harness = TestHarness::with_sample_calculation();
    harness.calculate(single_term_inputs(75.0)).unwrap();

    let summary = current_summary(&harness.state).unwrap().unwrap();
    assert_eq!(summary.terms.len(), 1);
    assert_eq!(summary.overall_average, Some(75.0));
}

#[test]
fn test_failed_calculation_keeps_previous() {
    let harness = TestHarness::with_sample_calculation();

    let bad = vec![TermInput {
        term: Some(1),
        subjects: Some(vec![SubjectInput {
            name: Some("Physics".to_string()),
            score: None,
            weight: Some(3.0),
        }]),
    }];
    let err = harness.calculate(bad).unwrap_err();
    assert!(err.contains("score"));
    assert!(err.contains("term #1, subject #1"));

    let summary = current_summary(&harness.state).unwrap().unwrap();
    assert_eq!(summary.overall_average, Some(87.78));
}

#[test]
fn test_zero_term_index_rejected() {
    let harness = TestHarness::new();
    let err = harness
        .calculate(vec![TermInput::new(0, vec![SubjectInput::new("Art", 80.0, 1.0)])])
        .unwrap_err();
    assert!(err.contains("term #1"));
    assert!(!harness.has_calculation());
}

// ============================================================================
// JSON INPUT TESTS
// ============================================================================

#[test]
fn test_calculate_json() {
    let harness = TestHarness::new();
    let json = r#"[
        {"term": 1, "subjects": [
            {"name": "Mathematics", "score": 90, "weight": 3},
            {"name": "Physics", "score": 80, "weight": 2}
        ]}
    ]"#;

    let summary = calculate_json(&harness.state, json).unwrap();
    assert_eq!(summary.terms[0].average, 86.0);
    assert_eq!(summary.overall_average, Some(86.0));
}

#[test]
fn test_calculate_json_missing_field() {
    let harness = TestHarness::new();
    let json = r#"[{"term": 1, "subjects": [{"name": "Physics", "score": 80}]}]"#;

    let err = calculate_json(&harness.state, json).unwrap_err();
    assert!(err.contains("weight"));
    assert!(!harness.has_calculation());
}

#[test]
fn test_calculate_json_malformed() {
    let harness = TestHarness::new();
    let err = calculate_json(&harness.state, "[{").unwrap_err();
    assert!(err.starts_with("Invalid input"));
}

#[test]
fn test_summary_serializes_camel_case() {
    let harness = TestHarness::with_sample_calculation();
    let summary = current_summary(&harness.state).unwrap().unwrap();

    let json = serde_json::to_value(&summary).unwrap();
    assert_eq!(json["overallAverage"], serde_json::json!(87.78));
    assert_eq!(json["terms"][1]["average"], serde_json::json!(90.0));
}
