//! Layer 3: Engine
//!
//! # Purpose
//!
//! This layer provides input and parameter validation for the checked
//! surfaces of the crate.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Report
//!   ↓
//! Layer 3: Engine ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Scalar and parameter validation.
pub mod validator;
