//! Tests for the fluent builder and configured evaluator.
//!
//! These tests verify the user-facing API:
//! - Default construction and scale override
//! - Build-time validation of the distortion scale
//! - Duplicate-parameter rejection
//! - Agreement between the evaluator and the free functions
//! - The checked evaluation path

use distmag::prelude::*;

// ============================================================================
// Builder Construction Tests
// ============================================================================

/// Test that the default build uses the canonical scale.
#[test]
fn test_default_build() {
    let model = Magnitude::<f64>::new().build().expect("default build should succeed");
    assert_eq!(model.scale(), DEFAULT_SCALE);

    // Default trait mirrors new()
    let model2 = Magnitude::<f64>::default().build().expect("default build");
    assert_eq!(model2.scale(), DEFAULT_SCALE);
}

/// Test that the evaluator with the default scale reproduces the free
/// function exactly.
#[test]
fn test_default_matches_free_function() {
    let model = Magnitude::<f64>::new().build().unwrap();
    for (a, b, k) in [(3.0, 4.0, 0.0), (5.0, 12.0, 1.0), (7.0, 0.0, -2.0)] {
        assert_eq!(model.eval(a, b, k), distorted_magnitude(a, b, k));
    }
}

/// Test the scale override.
#[test]
fn test_scale_override() {
    let model = Magnitude::<f64>::new().scale(8.0).build().unwrap();
    assert_eq!(model.scale(), 8.0);
    assert_eq!(
        model.eval(3.0, 4.0, 2.0),
        distorted_magnitude_scaled(3.0, 4.0, 2.0, 8.0)
    );
}

// ============================================================================
// Build Validation Tests
// ============================================================================

/// Test rejection of non-positive scales.
#[test]
fn test_invalid_scale_rejected() {
    assert_eq!(
        Magnitude::<f64>::new().scale(0.0).build().unwrap_err(),
        MagnitudeError::InvalidScale(0.0)
    );
    assert_eq!(
        Magnitude::<f64>::new().scale(-1.0).build().unwrap_err(),
        MagnitudeError::InvalidScale(-1.0)
    );
}

/// Test rejection of non-finite scales.
#[test]
fn test_non_finite_scale_rejected() {
    assert!(matches!(
        Magnitude::<f64>::new().scale(f64::NAN).build(),
        Err(MagnitudeError::InvalidScale(_))
    ));
    assert_eq!(
        Magnitude::<f64>::new().scale(f64::INFINITY).build().unwrap_err(),
        MagnitudeError::InvalidScale(f64::INFINITY)
    );
}

/// Test that duplicate setter calls are rejected at build time.
#[test]
fn test_duplicate_scale_rejected() {
    let err = Magnitude::<f64>::new().scale(8.0).scale(9.0).build().unwrap_err();
    assert_eq!(
        err,
        MagnitudeError::DuplicateParameter { parameter: "scale" }
    );
}

// ============================================================================
// Checked Evaluation Tests
// ============================================================================

/// Test that try_eval agrees with eval on finite inputs.
#[test]
fn test_try_eval_agrees_on_finite() {
    let model = Magnitude::<f64>::new().build().unwrap();
    for (a, b, k) in [(3.0, 4.0, 0.0), (0.0, 0.0, 10.0), (-3.0, 4.0, -1.0)] {
        assert_eq!(model.try_eval(a, b, k).unwrap(), model.eval(a, b, k));
    }
}

/// Test that try_eval rejects each non-finite parameter with its name.
#[test]
fn test_try_eval_rejects_non_finite() {
    let model = Magnitude::<f64>::new().build().unwrap();

    let err = model.try_eval(f64::NAN, 4.0, 0.0).unwrap_err();
    assert!(matches!(
        err,
        MagnitudeError::NonFiniteInput { name: "a", .. }
    ));

    let err = model.try_eval(3.0, f64::INFINITY, 0.0).unwrap_err();
    assert_eq!(
        err,
        MagnitudeError::NonFiniteInput {
            name: "b",
            value: f64::INFINITY,
        }
    );

    let err = model.try_eval(3.0, 4.0, f64::NEG_INFINITY).unwrap_err();
    assert!(matches!(
        err,
        MagnitudeError::NonFiniteInput { name: "k", .. }
    ));
}

/// Test that negative distortion is sanitized, never rejected.
#[test]
fn test_negative_distortion_not_an_error() {
    let model = Magnitude::<f64>::new().build().unwrap();
    let value = model
        .try_eval(3.0, 4.0, -1.0)
        .expect("negative k is sanitized, not rejected");
    assert_eq!(value, model.eval(3.0, 4.0, 1.0));
}

// ============================================================================
// Error Display Tests
// ============================================================================

/// Test error message rendering.
#[test]
fn test_error_display() {
    let msg = MagnitudeError::InvalidScale(-1.0).to_string();
    assert!(msg.contains("Invalid scale"));
    assert!(msg.contains("-1"));

    let msg = MagnitudeError::NonFiniteInput {
        name: "b",
        value: f64::NAN,
    }
    .to_string();
    assert!(msg.contains("Non-finite input"));
    assert!(msg.contains("b="));

    let msg = MagnitudeError::DuplicateParameter { parameter: "scale" }.to_string();
    assert!(msg.contains("'scale'"));
    assert!(msg.contains("set multiple times"));
}
