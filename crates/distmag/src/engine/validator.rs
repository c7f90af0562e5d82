//! Input validation for checked magnitude evaluation.
//!
//! ## Purpose
//!
//! This module provides validation functions for the configurable
//! distortion scale and for the inputs of the checked evaluation path.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Opt-In**: The total evaluation path performs no validation at all;
//!   only `build()` and `try_eval()` call into this module.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Finite Checks**: The checked path rejects NaN/Inf inputs.
//! * **Parameter Bounds**: The distortion scale must be finite and > 0.
//!
//! ## Invariants
//!
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not sanitize values; the absolute-value clamp on the
//!   distortion factor lives in the math layer.
//! * This module does not compute magnitudes.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::MagnitudeError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for magnitude parameters and inputs.
///
/// Provides static methods returning `Result<(), MagnitudeError>` that fail
/// fast upon identifying the first violation.
pub struct Validator;

impl Validator {
    /// Validate a single numeric value for finiteness.
    pub fn validate_scalar<T: Float>(val: T, name: &'static str) -> Result<(), MagnitudeError> {
        if !val.is_finite() {
            return Err(MagnitudeError::NonFiniteInput {
                name,
                value: val.to_f64().unwrap_or(f64::NAN),
            });
        }
        Ok(())
    }

    /// Validate the distortion scale parameter.
    pub fn validate_scale<T: Float>(scale: T) -> Result<(), MagnitudeError> {
        if !scale.is_finite() || scale <= T::zero() {
            return Err(MagnitudeError::InvalidScale(
                scale.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), MagnitudeError> {
        if let Some(parameter) = duplicate_param {
            return Err(MagnitudeError::DuplicateParameter { parameter });
        }
        Ok(())
    }
}
