//! Construction and normalization of smearing operators
//!
//! Matrix layout convention: rows index the reconstructed (output) momentum
//! bins, columns index the true (input) bins, so application is `v' = M v`.

use femto_core::{Error, Result};
use femto_hist::Histogram;
use nalgebra::{DMatrix, DVector};

/// Which axis of the smearing matrix the normalization sums over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NormalizeAlong {
    /// Divide each row by its sum over the true axis, making the matrix
    /// row-stochastic. This is the standard policy for a smearing operator.
    #[default]
    True,
    /// Divide each column by its sum over the reconstructed axis.
    Reconstructed,
}

/// A momentum correction operator: either a per-bin weight vector or a
/// full smearing matrix.
///
/// The tagged variant replaces dimensionality sniffing at call sites:
/// `apply` pattern-matches instead of inspecting shapes.
#[derive(Debug, Clone, PartialEq)]
pub enum Correction {
    /// Per-bin multiplicative weights
    Vector(DVector<f64>),
    /// Linear smearing operator, rows = reconstructed, columns = true
    Matrix(DMatrix<f64>),
}

impl Correction {
    /// Bin count this correction expects its input vector to have.
    pub fn dim(&self) -> usize {
        match self {
            Correction::Vector(v) => v.len(),
            Correction::Matrix(m) => m.ncols(),
        }
    }

    /// Build a matrix correction from a square 2D histogram, normalizing it
    /// per `along`. Axis 0 of the histogram maps to rows (reconstructed),
    /// axis 1 to columns (true).
    pub fn from_matrix_histogram(hist: &Histogram, along: NormalizeAlong) -> Result<Self> {
        if hist.ndim() != 2 {
            return Err(Error::InvalidInput(format!(
                "matrix correction needs a 2D histogram, got {}D",
                hist.ndim()
            )));
        }
        let (rows, cols) = (hist.axis(0).bin_count(), hist.axis(1).bin_count());
        if rows != cols {
            return Err(Error::shape_mismatch(
                &[rows, rows],
                &[rows, cols],
                "correction matrix",
            ));
        }
        let raw = DMatrix::from_row_slice(rows, cols, hist.data());
        Ok(Correction::Matrix(normalize(&raw, along)?))
    }

    /// Build a per-bin weight correction from a 1D histogram.
    pub fn from_vector_histogram(hist: &Histogram) -> Result<Self> {
        if hist.ndim() != 1 {
            return Err(Error::InvalidInput(format!(
                "vector correction needs a 1D histogram, got {}D",
                hist.ndim()
            )));
        }
        Ok(Correction::Vector(DVector::from_column_slice(hist.data())))
    }

    /// Build a per-bin correction vector as the double ratio
    /// `(true CF) / (reconstructed CF)` from four 1D histograms, the way a
    /// Monte Carlo correction dataset defines it.
    pub fn double_ratio(
        true_num: &Histogram,
        true_den: &Histogram,
        rec_num: &Histogram,
        rec_den: &Histogram,
    ) -> Result<Self> {
        let true_cf = true_num.divide(true_den)?;
        let rec_cf = rec_num.divide(rec_den)?;
        let ratio = true_cf.divide(&rec_cf)?;
        Ok(Correction::Vector(DVector::from_column_slice(ratio.data())))
    }
}

/// Divide each row (or column, per `along`) of a matrix by its sum.
///
/// Fails with `DegenerateNormalization` when any divisor sums to exactly
/// zero; the correction is undefined for that bin and the caller decides
/// the fallback. Applying `normalize` to an already-normalized matrix is a
/// no-op within floating tolerance.
pub fn normalize(matrix: &DMatrix<f64>, along: NormalizeAlong) -> Result<DMatrix<f64>> {
    let mut out = matrix.clone();
    match along {
        NormalizeAlong::True => {
            for r in 0..out.nrows() {
                let sum: f64 = out.row(r).iter().sum();
                if sum == 0.0 {
                    return Err(Error::DegenerateNormalization { index: r });
                }
                for c in 0..out.ncols() {
                    out[(r, c)] /= sum;
                }
            }
        }
        NormalizeAlong::Reconstructed => {
            for c in 0..out.ncols() {
                let sum: f64 = out.column(c).iter().sum();
                if sum == 0.0 {
                    return Err(Error::DegenerateNormalization { index: c });
                }
                for r in 0..out.nrows() {
                    out[(r, c)] /= sum;
                }
            }
        }
    }
    Ok(out)
}
