//! Utility functions and supporting infrastructure.
//!
//! Provides error types, the process-wide debug switch and small integer
//! helpers shared by the byte and palette operations.

pub mod debug;
pub mod errors;
pub mod math;
