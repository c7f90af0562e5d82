//! Exponential distortion gain.
//!
//! ## Purpose
//!
//! This module provides the multiplicative gain applied to the squared
//! Euclidean base before the square root. It controls how strongly the
//! distortion factor inflates the magnitude.
//!
//! ## Design notes
//!
//! * **Sanitization**: The distortion factor is clamped to its absolute
//!   value, so the gain is even in `k`.
//! * **Generics**: Generic over `Float` types; `exp` resolves to the
//!   standard library on `std` builds and `libm` otherwise.
//!
//! ## Key concepts
//!
//! * **Gain**: `exp(|k| / scale)`, with the canonical scale 10.0.
//!
//! ## Invariants
//!
//! * For finite `k` and positive finite `scale`, the gain is >= 1 and
//!   strictly increasing in `|k|`.
//! * `gain(0, scale) == 1` exactly.
//!
//! ## Non-goals
//!
//! * This module does not validate its inputs; callers own that.

// External dependencies
use num_traits::Float;

// ============================================================================
// Constants
// ============================================================================

/// Canonical distortion scale.
///
/// The divisor applied to `|k|` inside the exponential. Chosen so that
/// single-digit distortion factors produce moderate inflation (k = 10
/// multiplies the squared base by e).
pub const DEFAULT_SCALE: f64 = 10.0;

// ============================================================================
// Distortion Gain
// ============================================================================

/// Compute the distortion gain `exp(|k| / scale)`.
///
/// Negative distortion factors are equivalent to their magnitude: the
/// factor is clamped to `|k|` before use, never rejected.
#[inline]
pub fn distortion_gain<T: Float>(k: T, scale: T) -> T {
    (k.abs() / scale).exp()
}
