//! Reference example cases and the spot-check runner.
//!
//! ## Purpose
//!
//! This module carries the fixed, ordered list of reference cases and the
//! runner that evaluates them against the distorted-magnitude contract.
//!
//! ## Design notes
//!
//! * **Literal expectations**: Expected values are the hand-picked literals
//!   of the reference suite, not recomputed truths. Two of them (cases 3
//!   and 5) disagree with the function itself and are reported as failures;
//!   the runner records mismatches and continues, it never halts.
//! * **Tolerances**: Classification uses the combined closeness predicate
//!   with absolute tolerance 0.01 and relative tolerance 1e-9.
//! * **Statelessness**: Cases are independent; no ordering dependency.
//!
//! ## Invariants
//!
//! * Outcomes preserve case order.
//! * The runner produces one outcome per case, mismatch or not.
//!
//! ## Non-goals
//!
//! * This module does not render output (see the output module).
//! * This module does not exit the process or signal failure upward.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::magnitude::distorted_magnitude;
use crate::math::tolerance::{is_close, SPOT_CHECK_ABS_TOL, SPOT_CHECK_REL_TOL};
use crate::report::output::{CaseOutcome, ExampleReport};

// ============================================================================
// Example Case
// ============================================================================

/// One reference case: inputs plus the expected magnitude literal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExampleCase<T> {
    /// First primary dimension.
    pub a: T,

    /// Second primary dimension.
    pub b: T,

    /// Distortion factor.
    pub k: T,

    /// Expected magnitude (hand-picked literal).
    pub expected: T,
}

/// The canonical reference cases, in their fixed order.
///
/// Covers the Euclidean reduction at zero distortion, moderate and high
/// distortion, the zero origin, a single-axis input, and negative-distortion
/// sanitization.
pub const CANONICAL_CASES: [ExampleCase<f64>; 6] = [
    ExampleCase {
        a: 3.0,
        b: 4.0,
        k: 0.0,
        expected: 5.0,
    },
    ExampleCase {
        a: 5.0,
        b: 12.0,
        k: 1.0,
        expected: 13.67,
    },
    ExampleCase {
        a: 6.0,
        b: 8.0,
        k: 5.0,
        expected: 16.48,
    },
    ExampleCase {
        a: 0.0,
        b: 0.0,
        k: 10.0,
        expected: 0.0,
    },
    ExampleCase {
        a: 7.0,
        b: 0.0,
        k: 2.0,
        expected: 7.78,
    },
    ExampleCase {
        a: 3.0,
        b: 4.0,
        k: -1.0,
        expected: 5.25,
    },
];

// ============================================================================
// Runner
// ============================================================================

/// Run an arbitrary slice of cases through the canonical-scale contract.
pub fn run_cases<T: Float>(cases: &[ExampleCase<T>]) -> ExampleReport<T> {
    let rel_tol = T::from(SPOT_CHECK_REL_TOL).unwrap();
    let abs_tol = T::from(SPOT_CHECK_ABS_TOL).unwrap();

    let mut outcomes = Vec::with_capacity(cases.len());
    for &case in cases {
        let computed = distorted_magnitude(case.a, case.b, case.k);
        let passed = is_close(computed, case.expected, rel_tol, abs_tol);
        outcomes.push(CaseOutcome {
            case,
            computed,
            passed,
        });
    }

    ExampleReport { outcomes }
}

/// Run the canonical reference cases.
pub fn run_examples() -> ExampleReport<f64> {
    run_cases(&CANONICAL_CASES)
}
