//! Error types for femtoscopic analysis
//!
//! Provides a unified error type for all femto-stats crates.
//!
//! Missing source histograms are deliberately *not* represented here: a
//! lookup that finds nothing returns `Option::None`, which callers branch
//! on as ordinary control flow.

use thiserror::Error;

/// Core error type for binned-data operations
#[derive(Error, Debug)]
pub enum Error {
    /// Operand histograms or axes disagree in bin count or edges
    #[error("Shape mismatch in {context}: expected {expected}, got {actual}")]
    ShapeMismatch {
        expected: String,
        actual: String,
        context: String,
    },

    /// A correction row or column sums to zero, so no normalization exists
    /// for that bin
    #[error("Degenerate normalization: row/column {index} sums to zero")]
    DegenerateNormalization { index: usize },

    /// No integer rebin factor reconciles the requested shapes
    #[error("Incompatible shapes: no integer factor maps {data_bins} data bins onto {correction_bins} bins")]
    IncompatibleShape {
        data_bins: usize,
        correction_bins: usize,
    },

    /// A zero or non-finite scale factor was requested; treated as a
    /// programmer error and reported loudly
    #[error("Invalid scale factor: {0}")]
    InvalidScale(f64),

    /// Malformed axis description (non-increasing edges, no bins, bad index)
    #[error("Invalid axis: {0}")]
    InvalidAxis(String),

    /// Invalid input data
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Other errors
    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Shape mismatch between two bin-count tuples
    pub fn shape_mismatch(expected: &[usize], actual: &[usize], context: &str) -> Self {
        Self::ShapeMismatch {
            expected: format!("{expected:?}"),
            actual: format!("{actual:?}"),
            context: context.to_string(),
        }
    }

    /// Shape mismatch between two scalar lengths
    pub fn length_mismatch(expected: usize, actual: usize, context: &str) -> Self {
        Self::ShapeMismatch {
            expected: expected.to_string(),
            actual: actual.to_string(),
            context: context.to_string(),
        }
    }

    /// Axis edges are not strictly increasing
    pub fn non_increasing_edges(position: usize) -> Self {
        Self::InvalidAxis(format!("edges not strictly increasing at position {position}"))
    }
}
