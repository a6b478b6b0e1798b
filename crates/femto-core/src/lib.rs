//! Shared foundation for the femto-stats crates
//!
//! This crate provides the unified error type and the handful of numeric
//! helpers the rest of the workspace builds on. Everything domain-specific
//! (axes, histograms, corrections) lives in the dedicated crates.

pub mod error;
pub mod math;

// Re-export core types
pub use error::{Error, Result};
pub use math::{gcd, lcm, quadrature_sum};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
