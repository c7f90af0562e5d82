//! Approximate floating-point equality.
//!
//! ## Purpose
//!
//! This module provides the combined relative/absolute closeness predicate
//! used by the spot-check runner to classify computed values against
//! expected literals.
//!
//! ## Design notes
//!
//! * **Semantics**: Two values are close when their difference is within
//!   the relative tolerance of the larger magnitude, or within the absolute
//!   tolerance. The absolute tolerance dominates near zero, the relative
//!   tolerance for large magnitudes.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Invariants
//!
//! * Symmetric: `is_close(a, b, ..) == is_close(b, a, ..)`.
//! * Exact equality always passes, including signed zeros.
//! * NaN is never close to anything; infinities are close only to equal
//!   infinities.
//!
//! ## Non-goals
//!
//! * This module does not choose tolerances for callers beyond the
//!   spot-check constants.

// External dependencies
use num_traits::Float;

// ============================================================================
// Spot-Check Tolerances
// ============================================================================

/// Absolute tolerance used by the spot-check runner.
pub const SPOT_CHECK_ABS_TOL: f64 = 0.01;

/// Relative tolerance used by the spot-check runner.
pub const SPOT_CHECK_REL_TOL: f64 = 1e-9;

// ============================================================================
// Closeness Predicate
// ============================================================================

/// Check whether two values are approximately equal.
///
/// Returns `true` when `|a - b| <= max(rel_tol * max(|a|, |b|), abs_tol)`.
#[inline]
pub fn is_close<T: Float>(a: T, b: T, rel_tol: T, abs_tol: T) -> bool {
    // Exact equality short-circuit; also handles equal infinities.
    if a == b {
        return true;
    }

    // NaN or mismatched infinities: the difference below would be NaN or
    // infinite and the comparison correctly fails, but bail out early.
    if !a.is_finite() || !b.is_finite() {
        return false;
    }

    let diff = (a - b).abs();
    diff <= rel_tol * a.abs().max(b.abs()) || diff <= abs_tol
}
