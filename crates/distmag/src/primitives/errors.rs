//! Error types for distorted-magnitude operations.
//!
//! ## Purpose
//!
//! This module defines error conditions that can occur on the checked
//! surfaces of the crate: builder configuration and validated evaluation.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors include relevant values (e.g., the offending
//!   scale or the name of the non-finite parameter).
//! * **Deferred**: Builder misconfiguration is caught and stored during
//!   configuration and surfaced at `build()`.
//! * **No-std**: Variants carry only `Copy` payloads; no allocation needed.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error`
//!   (when `std` is enabled).
//!
//! ## Key concepts
//!
//! 1. **Input validation**: Non-finite values on the checked evaluation path.
//! 2. **Parameter validation**: The distortion scale must be finite and
//!    strictly positive.
//! 3. **Builder constraints**: Each parameter may be configured once.
//!
//! ## Invariants
//!
//! * All variants provide sufficient context for diagnosis.
//! * Error messages are consistent in tone and formatting.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not cover the total evaluation path, which never fails.

// Feature-gated imports
#[cfg(feature = "std")]
use std::error::Error;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for distorted-magnitude operations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MagnitudeError {
    /// A checked evaluation received a NaN or infinite input.
    NonFiniteInput {
        /// Name of the offending parameter ("a", "b", or "k").
        name: &'static str,
        /// The offending value, widened to f64.
        value: f64,
    },

    /// The distortion scale must be finite and strictly positive.
    InvalidScale(f64),

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for MagnitudeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::NonFiniteInput { name, value } => {
                write!(f, "Non-finite input: {name}={value}")
            }
            Self::InvalidScale(scale) => {
                write!(f, "Invalid scale: {scale} (must be finite and > 0)")
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for MagnitudeError {}
