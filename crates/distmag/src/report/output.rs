//! Outcome and report types for spot-check runs.
//!
//! ## Purpose
//!
//! This module defines the `CaseOutcome` and `ExampleReport` structs that
//! encapsulate the results of a spot-check run, along with a human-readable
//! `Display` rendering.
//!
//! ## Design notes
//!
//! * **Generics**: Results are generic over `Float` types.
//! * **Ergonomics**: Implements `Display` for human-readable output.
//! * **Data-only**: The report stores outcomes; evaluation happens in the
//!   cases module.
//!
//! ## Invariants
//!
//! * Outcomes appear in case order.
//! * `all_passed()` is true exactly when every outcome passed.
//!
//! ## Non-goals
//!
//! * This module does not perform calculations; it only stores results.
//! * This module does not decide a process exit status.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::{Display, Formatter, Result};
use num_traits::Float;

// Internal dependencies
use crate::report::cases::ExampleCase;

// ============================================================================
// Outcome Structure
// ============================================================================

/// Outcome of a single spot-check case.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CaseOutcome<T> {
    /// The case that was evaluated.
    pub case: ExampleCase<T>,

    /// The computed magnitude.
    pub computed: T,

    /// Whether computed and expected agreed within tolerance.
    pub passed: bool,
}

// ============================================================================
// Report Structure
// ============================================================================

/// Ordered outcomes of a spot-check run.
#[derive(Debug, Clone, PartialEq)]
pub struct ExampleReport<T> {
    /// Per-case outcomes, in case order.
    pub outcomes: Vec<CaseOutcome<T>>,
}

impl<T: Float> ExampleReport<T> {
    /// Number of cases in the report.
    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    /// Check if the report contains no cases.
    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    /// Number of cases that passed.
    pub fn passed_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.passed).count()
    }

    /// Check if every case passed.
    pub fn all_passed(&self) -> bool {
        self.outcomes.iter().all(|o| o.passed)
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Float + Display> Display for ExampleReport<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Spot Check:")?;
        writeln!(
            f,
            "{:>6} {:>8} {:>8} {:>8} {:>12} {:>12} {:>8}",
            "Case", "A", "B", "K", "Computed", "Expected", "Status"
        )?;
        writeln!(f, "{:-<width$}", "", width = 68)?;

        for (i, outcome) in self.outcomes.iter().enumerate() {
            let case = &outcome.case;
            writeln!(
                f,
                "{:>6} {:>8.2} {:>8.2} {:>8.2} {:>12.5} {:>12.5} {:>8}",
                i + 1,
                case.a,
                case.b,
                case.k,
                outcome.computed,
                case.expected,
                if outcome.passed { "PASS" } else { "FAIL" }
            )?;
        }

        writeln!(f)?;
        if self.all_passed() {
            writeln!(f, "All {} spot checks passed.", self.len())
        } else {
            writeln!(
                f,
                "{} of {} spot checks failed.",
                self.len() - self.passed_count(),
                self.len()
            )
        }
    }
}
