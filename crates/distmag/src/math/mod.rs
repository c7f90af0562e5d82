//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides the pure mathematical functions of the crate:
//! - The exponential distortion gain
//! - The distorted magnitude itself
//! - Approximate floating-point equality
//!
//! These are reusable building blocks with no configuration or reporting
//! logic.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Report
//!   ↓
//! Layer 3: Engine
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Exponential distortion gain.
pub mod distortion;

/// Distorted magnitude computation.
pub mod magnitude;

/// Approximate floating-point equality.
pub mod tolerance;
