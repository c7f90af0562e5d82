//! Layer 4: Report
//!
//! # Purpose
//!
//! This layer provides the spot-check machinery: the fixed reference
//! example cases, per-case outcomes, and a human-readable report.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Report ← You are here
//!   ↓
//! Layer 3: Engine
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Reference example cases and the runner.
pub mod cases;

/// Outcome and report types.
pub mod output;
