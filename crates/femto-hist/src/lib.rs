//! Binned axes and dense histograms for femtoscopic analysis
//!
//! This crate holds the core binned-data machinery: [`Axis`] translates
//! between real values and bin indices, and [`Histogram`] wraps a dense
//! 1-3D content array with per-bin errors, offering division with error
//! propagation, scaling, domain-bounded projection, and rebinning.
//!
//! # Conventions
//!
//! - Bin `i` covers `[edge[i], edge[i+1])`; indices are 0-based.
//! - Value ranges translate to half-open index ranges: the bin containing
//!   the upper bound is excluded, and callers wanting it included ask for
//!   one extra bin. There is deliberately no inclusive variant.
//! - Projections return raw sums (integrals); density scaling is the
//!   caller's explicit step.
//! - Every operation returns a new histogram. Nothing here mutates in
//!   place.
//!
//! # Example
//!
//! ```rust
//! use femto_hist::{Axis, Histogram};
//!
//! let axis = Axis::uniform(10, 0.0, 1.0)?;
//! let num = Histogram::from_contents(vec![axis.clone()], vec![5.0; 10])?;
//! let den = Histogram::from_contents(vec![axis], vec![10.0; 10])?;
//!
//! let cf = num.divide(&den)?;
//! assert_eq!(cf.data()[0], 0.5);
//! # Ok::<(), femto_core::Error>(())
//! ```

pub mod axis;
pub mod histogram;
pub mod ops;

// Re-export main types
pub use axis::{Axis, BinLocation};
pub use histogram::Histogram;

pub use femto_core::{Error, Result};
