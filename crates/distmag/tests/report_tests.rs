//! Tests for the spot-check runner and report.
//!
//! These tests verify:
//! - The canonical case list and its fixed order
//! - Faithful pass/fail classification against the expected literals
//! - Report aggregation and Display rendering
//! - That the runner records mismatches and continues

use approx::assert_relative_eq;

use distmag::prelude::*;

// ============================================================================
// Canonical Run Tests
// ============================================================================

/// Test that the canonical run produces one outcome per case, in order.
#[test]
fn test_canonical_run_shape() {
    let report = run_examples();
    assert_eq!(report.len(), 6);
    assert!(!report.is_empty());

    for (outcome, case) in report.outcomes.iter().zip(CANONICAL_CASES.iter()) {
        assert_eq!(outcome.case, *case, "outcomes must preserve case order");
    }
}

/// Test the canonical pass/fail classification.
///
/// The expected values are hand-picked literals; two of them (the
/// high-distortion case and the single-axis case) disagree with the
/// function itself, so the canonical run reports 4 passes and 2 failures.
#[test]
fn test_canonical_classification() {
    let report = run_examples();

    let passed: Vec<bool> = report.outcomes.iter().map(|o| o.passed).collect();
    assert_eq!(passed, [true, true, false, true, false, true]);

    assert_eq!(report.passed_count(), 4);
    assert!(!report.all_passed());
}

/// Test the computed values recorded in the canonical outcomes.
#[test]
fn test_canonical_computed_values() {
    let report = run_examples();

    // Case 1: Euclidean reduction
    assert_relative_eq!(report.outcomes[0].computed, 5.0, epsilon = 1e-12);

    // Case 3: 10 * exp(0.25), far from the 16.48 literal
    assert_relative_eq!(
        report.outcomes[2].computed,
        10.0 * (0.25f64).exp(),
        epsilon = 1e-12
    );

    // Case 5: 7 * exp(0.1), outside the 0.01 window around 7.78
    assert_relative_eq!(
        report.outcomes[4].computed,
        7.0 * (0.1f64).exp(),
        epsilon = 1e-12
    );
}

/// Test that a mismatch never halts the run.
#[test]
fn test_runner_continues_past_mismatch() {
    // The canonical list fails at index 2; later cases are still evaluated.
    let report = run_examples();
    assert!(!report.outcomes[2].passed);
    assert!(report.outcomes[3].passed);
    assert!(report.outcomes[5].passed);
}

// ============================================================================
// Custom Case Tests
// ============================================================================

/// Test an all-passing custom case list.
#[test]
fn test_all_passing_cases() {
    let cases = [
        ExampleCase {
            a: 3.0,
            b: 4.0,
            k: 0.0,
            expected: 5.0,
        },
        ExampleCase {
            a: 0.0,
            b: 0.0,
            k: 3.0,
            expected: 0.0,
        },
    ];

    let report = run_cases(&cases);
    assert!(report.all_passed());
    assert_eq!(report.passed_count(), 2);
}

/// Test an empty case list.
#[test]
fn test_empty_cases() {
    let report = run_cases::<f64>(&[]);
    assert!(report.is_empty());
    assert_eq!(report.passed_count(), 0);
    assert!(report.all_passed(), "vacuously true for an empty run");
}

// ============================================================================
// Display Tests
// ============================================================================

/// Test the rendered canonical report.
#[test]
fn test_canonical_display() {
    let rendered = run_examples().to_string();

    assert!(rendered.contains("Spot Check:"));
    assert!(rendered.contains("Computed"));
    assert!(rendered.contains("Expected"));
    assert!(rendered.contains("PASS"));
    assert!(rendered.contains("FAIL"));
    assert!(rendered.contains("2 of 6 spot checks failed."));
}

/// Test the rendered report for an all-passing run.
#[test]
fn test_all_passed_display() {
    let cases = [ExampleCase {
        a: 3.0,
        b: 4.0,
        k: 0.0,
        expected: 5.0,
    }];

    let rendered = run_cases(&cases).to_string();
    assert!(rendered.contains("All 1 spot checks passed."));
    assert!(!rendered.contains("FAIL"));
}
