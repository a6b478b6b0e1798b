//! Applying corrections to binned data

use crate::matrix::Correction;
use femto_core::{gcd, Error, Result};
use femto_hist::Histogram;
use nalgebra::DVector;
use tracing::{debug, warn};

/// Find the integer rebin factor that maps `data_bins` onto
/// `correction_bins`.
///
/// Returns 1 when the shapes already agree. When the data is finer than the
/// correction by an integer multiple, the data is coarsened by that factor
/// (a diagnostic is emitted). Anything else, including a correction finer
/// than the data, is `IncompatibleShape`.
pub fn reconcile_shape(data_bins: usize, correction_bins: usize) -> Result<usize> {
    if data_bins == correction_bins {
        return Ok(1);
    }
    let g = gcd(data_bins, correction_bins);
    if g == correction_bins {
        let factor = data_bins / correction_bins;
        warn!(
            data_bins,
            correction_bins, factor, "correction shape mismatch, rebinning data"
        );
        return Ok(factor);
    }
    Err(Error::IncompatibleShape {
        data_bins,
        correction_bins,
    })
}

impl Correction {
    /// Apply this correction to a 1D histogram, returning a *new* corrected
    /// histogram.
    ///
    /// When the data is finer-binned than the correction by an integer
    /// factor it is rebinned first (see [`reconcile_shape`]); the returned
    /// histogram then carries the coarsened axis.
    ///
    /// Error propagation:
    /// - matrix: `e'_i = sqrt(sum_j (M_ij * e_j)^2)` (linear combination)
    /// - vector: `e'_i = e_i * c_i`
    pub fn apply(&self, hist: &Histogram) -> Result<Histogram> {
        let prepared = self.reconciled(hist)?;
        let (data, errors) = self.corrected_arrays(&prepared);
        Histogram::new(prepared.axes().to_vec(), data, errors)
    }

    /// Apply this correction in place, overwriting the histogram's contents
    /// and errors.
    ///
    /// This is the single mutation-in-place operation in an otherwise
    /// functional design, intended for the "smear a dataset" mode where the
    /// caller owns the histogram and wants it rewritten. It refuses to
    /// change shape: a histogram needing a rebin fails with
    /// `IncompatibleShape`, and the caller should use [`Correction::apply`]
    /// instead.
    pub fn apply_in_place(&self, hist: &mut Histogram) -> Result<()> {
        if hist.ndim() != 1 {
            return Err(Error::InvalidInput(format!(
                "corrections apply to 1D histograms, got {}D",
                hist.ndim()
            )));
        }
        let n = hist.axis(0).bin_count();
        if n != self.dim() {
            return Err(Error::IncompatibleShape {
                data_bins: n,
                correction_bins: self.dim(),
            });
        }
        let (data, errors) = self.corrected_arrays(hist);
        hist.overwrite(data, errors)
    }

    // Rebin the data onto the correction's binning when needed.
    fn reconciled(&self, hist: &Histogram) -> Result<Histogram> {
        if hist.ndim() != 1 {
            return Err(Error::InvalidInput(format!(
                "corrections apply to 1D histograms, got {}D",
                hist.ndim()
            )));
        }
        let factor = reconcile_shape(hist.axis(0).bin_count(), self.dim())?;
        if factor == 1 {
            debug!(bins = self.dim(), "correction shape matches data");
            return Ok(hist.clone());
        }
        hist.rebin(factor)
    }

    // Shapes must already agree here.
    fn corrected_arrays(&self, hist: &Histogram) -> (Vec<f64>, Vec<f64>) {
        match self {
            Correction::Vector(c) => {
                let data = hist
                    .data()
                    .iter()
                    .zip(c.iter())
                    .map(|(x, w)| x * w)
                    .collect();
                let errors = hist
                    .errors()
                    .iter()
                    .zip(c.iter())
                    .map(|(e, w)| e * w.abs())
                    .collect();
                (data, errors)
            }
            Correction::Matrix(m) => {
                let v = DVector::from_column_slice(hist.data());
                let data = (m * &v).iter().copied().collect();
                let errors = (0..m.nrows())
                    .map(|i| {
                        femto_core::quadrature_sum(
                            hist.errors()
                                .iter()
                                .enumerate()
                                .map(|(j, e)| m[(i, j)] * e),
                        )
                    })
                    .collect();
                (data, errors)
            }
        }
    }
}
