//! # distmag — Exponentially Distorted Two-Dimensional Magnitudes
//!
//! A small numeric crate computing a generalized two-dimensional magnitude
//! scaled by an exponential distortion term, for **Rust** on `std` and
//! `no_std` targets.
//!
//! ## What is a distorted magnitude?
//!
//! The distorted magnitude generalizes the Euclidean magnitude of a pair
//! `(a, b)` with a scalar distortion factor `k`:
//!
//! ```text
//! distorted_magnitude(a, b, k) = sqrt((a^2 + b^2) * exp(|k| / 10))
//! ```
//!
//! The distortion factor is sanitized to its absolute value, so the function
//! is total over all finite inputs and even in `k`. At `k = 0` it reduces
//! exactly to the Euclidean magnitude `sqrt(a^2 + b^2)`.
//!
//! ## Quick Start
//!
//! ### Typical Use
//!
//! ```rust
//! use distmag::prelude::*;
//!
//! // Euclidean at zero distortion
//! let m: f64 = distorted_magnitude(3.0, 4.0, 0.0);
//! assert!((m - 5.0).abs() < 1e-12);
//!
//! // Distortion inflates the magnitude
//! assert!(distorted_magnitude(3.0, 4.0, 5.0) > m);
//!
//! // Negative distortion is equivalent to its magnitude
//! assert_eq!(
//!     distorted_magnitude(3.0, 4.0, -1.0),
//!     distorted_magnitude(3.0, 4.0, 1.0),
//! );
//! ```
//!
//! ### Configured Evaluator
//!
//! The fluent builder configures the distortion scale (the divisor applied
//! to `|k|` inside the exponential, `10.0` by default):
//!
//! ```rust
//! use distmag::prelude::*;
//!
//! let model = Magnitude::new()
//!     .scale(8.0)     // Steeper distortion than the default 10.0
//!     .build()?;
//!
//! let value = model.eval(3.0, 4.0, 2.0);
//! assert!(value > 5.0);
//! # Result::<(), MagnitudeError>::Ok(())
//! ```
//!
//! ### Result and Error Handling
//!
//! `build` and `try_eval` return `Result<_, MagnitudeError>`; the `?`
//! operator is idiomatic:
//!
//! ```rust
//! use distmag::prelude::*;
//!
//! let model = Magnitude::new().build()?;
//!
//! match model.try_eval(3.0, f64::NAN, 0.0) {
//!     Ok(value) => println!("magnitude: {}", value),
//!     Err(e) => eprintln!("evaluation rejected: {}", e),
//! }
//! # Result::<(), MagnitudeError>::Ok(())
//! ```
//!
//! Plain `eval` and the free functions never fail: the algorithm is total
//! over finite inputs, and the only defensive measure is the absolute-value
//! clamp on `k`.
//!
//! ### Spot Checks
//!
//! The crate carries its reference example cases and a report type; the
//! `distmag` binary prints the same report to stdout:
//!
//! ```rust
//! use distmag::prelude::*;
//!
//! let report = run_examples();
//! println!("{}", report);
//! println!("{} of {} cases passed", report.passed_count(), report.len());
//! ```
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! Disable default features to remove the standard library dependency;
//! elementary functions come from `libm` through `num-traits`:
//!
//! ```toml
//! [dependencies]
//! distmag = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Layer 1: Primitives - shared error types.
mod primitives;

// Layer 2: Math - pure mathematical functions.
mod math;

// Layer 3: Engine - input validation.
mod engine;

// Layer 4: Report - example cases and spot-check reporting.
mod report;

// High-level fluent API for distorted magnitudes.
mod api;

// Standard distmag prelude.
pub mod prelude {
    pub use crate::api::{
        distorted_magnitude, distorted_magnitude_scaled, distortion_gain, is_close, run_cases,
        run_examples, CaseOutcome, DistortedMagnitude, ExampleCase, ExampleReport,
        MagnitudeBuilder as Magnitude, MagnitudeError, CANONICAL_CASES, DEFAULT_SCALE,
        SPOT_CHECK_ABS_TOL, SPOT_CHECK_REL_TOL,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing
// purposes. It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod report {
        pub use crate::report::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
