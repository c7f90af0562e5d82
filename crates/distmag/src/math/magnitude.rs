//! Distorted magnitude computation.
//!
//! ## Purpose
//!
//! This module provides the core contract of the crate: a generalized
//! two-dimensional magnitude scaled by the exponential distortion gain.
//!
//! ## Design notes
//!
//! * **Total**: The functions never fail over finite inputs; the only
//!   defensive measure is the absolute-value clamp on `k` inside the gain.
//! * **Generics**: Generic over `Float` types for f32/f64 flexibility.
//! * **Precision**: Uses the standard `exp` and `sqrt` for the element
//!   type; no custom rounding.
//!
//! ## Key concepts
//!
//! * **Base**: the squared Euclidean magnitude `a^2 + b^2`.
//! * **Gain**: `exp(|k| / scale)` from the distortion module.
//! * **Result**: `sqrt(base * gain)`.
//!
//! ## Invariants
//!
//! * The result is non-negative for all finite inputs.
//! * `k = 0` reduces exactly to the Euclidean magnitude.
//! * Even in `k`; strictly increasing in `|k|` when `a^2 + b^2 > 0`.
//! * `a = b = 0` yields exactly 0 regardless of `k`.
//!
//! ## Non-goals
//!
//! * This module does not validate inputs (see the engine layer).
//! * This module does not report or compare results (see the report layer).

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::distortion::{distortion_gain, DEFAULT_SCALE};

// ============================================================================
// Distorted Magnitude
// ============================================================================

/// Compute the distorted magnitude with the canonical scale of 10.0.
///
/// Equivalent to `sqrt((a^2 + b^2) * exp(|k| / 10))`.
#[inline]
pub fn distorted_magnitude<T: Float>(a: T, b: T, k: T) -> T {
    distorted_magnitude_scaled(a, b, k, T::from(DEFAULT_SCALE).unwrap())
}

/// Compute the distorted magnitude with an explicit distortion scale.
///
/// Callers must supply a finite, strictly positive `scale`; the configured
/// evaluator in the API layer enforces this at build time.
#[inline]
pub fn distorted_magnitude_scaled<T: Float>(a: T, b: T, k: T, scale: T) -> T {
    let base = a * a + b * b;
    (base * distortion_gain(k, scale)).sqrt()
}
