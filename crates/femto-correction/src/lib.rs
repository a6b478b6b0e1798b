//! Momentum-smearing corrections for correlation functions
//!
//! Detector resolution smears the reconstructed relative momentum of a
//! pair; a correction dataset provides either a full smearing matrix
//! (true x reconstructed 2D histogram) or a per-bin weight vector. This
//! crate normalizes those operators and applies them to 1D correlation
//! histograms with proper error propagation.
//!
//! The [`Correction`] type is a tagged variant (`Vector` | `Matrix`) so
//! call sites pattern-match instead of sniffing array dimensionality.
//!
//! When the data histogram is finer-binned than the correction by an
//! integer factor, [`Correction::apply`] rebins the data first and logs a
//! diagnostic; anything without an integer factor is an
//! [`femto_core::Error::IncompatibleShape`] the caller can recover from
//! (typically by skipping that analysis group).

pub mod apply;
pub mod matrix;

pub use apply::reconcile_shape;
pub use matrix::{normalize, Correction, NormalizeAlong};

pub use femto_core::{Error, Result};
