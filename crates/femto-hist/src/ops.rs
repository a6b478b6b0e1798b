//! Derivation operations on histograms
//!
//! All operations here are functional: they return new histograms or plain
//! arrays and never modify their operands.

use crate::axis::Axis;
use crate::histogram::Histogram;
use femto_core::{Error, Result};
use std::ops::Range;

impl Histogram {
    /// Element-wise ratio `self / other` with quotient error propagation.
    ///
    /// Bins with an empty denominator carry no information and map to
    /// content 0 and error 0 (never NaN or infinity); in particular
    /// `0/0 -> 0` by policy. Fails with `ShapeMismatch` when the axes
    /// differ in bin count or edges.
    pub fn divide(&self, other: &Histogram) -> Result<Histogram> {
        if !self.same_binning(other) {
            return Err(Error::shape_mismatch(
                &other.shape(),
                &self.shape(),
                "divide",
            ));
        }
        let n = self.data().len();
        let mut data = vec![0.0; n];
        let mut errors = vec![0.0; n];
        for i in 0..n {
            let (a, ea) = (self.data()[i], self.errors()[i]);
            let (b, eb) = (other.data()[i], other.errors()[i]);
            if b == 0.0 {
                continue;
            }
            data[i] = a / b;
            // standard quotient propagation: sqrt((ea/b)^2 + (a eb / b^2)^2)
            let t1 = ea / b;
            let t2 = a * eb / (b * b);
            errors[i] = (t1 * t1 + t2 * t2).sqrt();
        }
        Histogram::new(self.axes().to_vec(), data, errors)
    }

    /// Multiply contents and errors by a factor, returning a new histogram.
    ///
    /// A zero factor would turn every error into an exact 0 and mask real
    /// statistical uncertainty, so it is rejected as `InvalidScale` along
    /// with non-finite factors.
    pub fn scale(&self, factor: f64) -> Result<Histogram> {
        if factor == 0.0 || !factor.is_finite() {
            return Err(Error::InvalidScale(factor));
        }
        let data = self.data().iter().map(|x| x * factor).collect();
        let errors = self.errors().iter().map(|e| e * factor.abs()).collect();
        Histogram::new(self.axes().to_vec(), data, errors)
    }

    /// Sum contents onto the kept axis, restricting every *other* axis to
    /// the half-open bin range implied by its `bounds` entry (`None` means
    /// the full axis).
    ///
    /// The kept axis is never bounded: the result always has
    /// `axes[keep].bin_count()` entries, and `bounds[keep]` must be `None`.
    /// The result is an integral (raw sum), not a density.
    pub fn project(&self, keep: usize, bounds: &[Option<(f64, f64)>]) -> Result<Vec<f64>> {
        let ranges = self.resolve_bounds(keep, bounds)?;
        Ok(self.fold_onto(keep, &ranges, false))
    }

    /// Propagated error of [`Histogram::project`]: per output bin, the
    /// quadrature sum `sqrt(sum(e^2))` over the bins summed. Plain error
    /// sums are wrong and are never produced.
    pub fn project_error(&self, keep: usize, bounds: &[Option<(f64, f64)>]) -> Result<Vec<f64>> {
        let ranges = self.resolve_bounds(keep, bounds)?;
        Ok(self.fold_onto(keep, &ranges, true))
    }

    /// 2D projection of a 3D histogram: keep axes `keep_x` and `keep_y`,
    /// summing the remaining axis over `third_bounds` (`None` = full).
    ///
    /// Returns row-major contents with shape
    /// `(axes[keep_x].bin_count(), axes[keep_y].bin_count())`.
    pub fn project_pair(
        &self,
        keep_x: usize,
        keep_y: usize,
        third_bounds: Option<(f64, f64)>,
    ) -> Result<(Vec<f64>, (usize, usize))> {
        if self.ndim() != 3 {
            return Err(Error::InvalidInput(format!(
                "2D projection needs a 3D histogram, got {}D",
                self.ndim()
            )));
        }
        if keep_x == keep_y || keep_x > 2 || keep_y > 2 {
            return Err(Error::InvalidAxis(format!(
                "invalid projection axes ({keep_x}, {keep_y})"
            )));
        }
        let third = 3 - keep_x - keep_y;
        let mut bounds = [None, None, None];
        bounds[third] = third_bounds;
        let ranges = self.resolve_bounds_unkept(&bounds)?;

        let (nx, ny) = (self.axis(keep_x).bin_count(), self.axis(keep_y).bin_count());
        let mut out = vec![0.0; nx * ny];
        self.for_each_index(&ranges, |idx, flat| {
            out[idx[keep_x] * ny + idx[keep_y]] += self.data()[flat];
        });
        Ok((out, (nx, ny)))
    }

    /// Merge `k` adjacent bins into one (1D only), summing contents and
    /// combining errors in quadrature. Pure transform: returns a new,
    /// reduced histogram.
    ///
    /// A factor that does not divide the bin count fails with
    /// `IncompatibleShape`, the recoverable skip-this-group signal; only a
    /// zero factor is treated as malformed input.
    pub fn rebin(&self, k: usize) -> Result<Histogram> {
        if self.ndim() != 1 {
            return Err(Error::InvalidInput(format!(
                "rebin supports 1D histograms, got {}D",
                self.ndim()
            )));
        }
        if k == 0 {
            return Err(Error::InvalidInput("rebin factor must be positive".into()));
        }
        let n = self.axis(0).bin_count();
        if n % k != 0 {
            // a factor that does not divide the bin count has no integer
            // mapping; recoverable, like any other shape reconciliation
            return Err(Error::IncompatibleShape {
                data_bins: n,
                correction_bins: k,
            });
        }
        let edges: Vec<f64> = self.axis(0).edges().iter().copied().step_by(k).collect();
        let axis = Axis::from_edges(edges)?;

        let mut data = Vec::with_capacity(n / k);
        let mut errors = Vec::with_capacity(n / k);
        for group in 0..n / k {
            let span = group * k..(group + 1) * k;
            data.push(self.data()[span.clone()].iter().sum());
            errors.push(femto_core::quadrature_sum(
                self.errors()[span].iter().copied(),
            ));
        }
        Histogram::new(vec![axis], data, errors)
    }

    /// Cartesian product of bin centers restricted by per-axis bounds, in
    /// row-major order. Each entry has one coordinate per axis; this is the
    /// input domain handed to fit functions.
    pub fn bounded_domain(&self, bounds: &[Option<(f64, f64)>]) -> Result<Vec<Vec<f64>>> {
        let ranges = self.resolve_bounds_unkept(bounds)?;
        let mut out = Vec::new();
        self.for_each_index(&ranges, |idx, _| {
            out.push(
                idx.iter()
                    .take(self.ndim())
                    .enumerate()
                    .map(|(ax, &i)| self.axis(ax).center(i))
                    .collect(),
            );
        });
        Ok(out)
    }

    /// Flatten a 1D histogram into the `(x, y, y_err)` triple consumed by
    /// an external fitter, optionally restricted to a value range.
    pub fn to_arrays(&self, bounds: Option<(f64, f64)>) -> Result<(Vec<f64>, Vec<f64>, Vec<f64>)> {
        if self.ndim() != 1 {
            return Err(Error::InvalidInput(format!(
                "to_arrays supports 1D histograms, got {}D",
                self.ndim()
            )));
        }
        let range = match bounds {
            Some((lo, hi)) => self.axis(0).bin_range(lo, hi),
            None => 0..self.axis(0).bin_count(),
        };
        let x = self.axis(0).centers()[range.clone()].to_vec();
        let y = self.data()[range.clone()].to_vec();
        let e = self.errors()[range].to_vec();
        Ok((x, y, e))
    }

    // Translate per-axis bounds into index ranges; the kept axis must be
    // unbounded and spans its full range.
    fn resolve_bounds(
        &self,
        keep: usize,
        bounds: &[Option<(f64, f64)>],
    ) -> Result<Vec<Range<usize>>> {
        if keep >= self.ndim() {
            return Err(Error::InvalidAxis(format!(
                "projection axis {keep} out of range for {}D histogram",
                self.ndim()
            )));
        }
        if bounds.get(keep).copied().flatten().is_some() {
            return Err(Error::InvalidInput(
                "the kept projection axis must not be bounded".into(),
            ));
        }
        self.resolve_bounds_unkept(bounds)
    }

    fn resolve_bounds_unkept(&self, bounds: &[Option<(f64, f64)>]) -> Result<Vec<Range<usize>>> {
        if bounds.len() != self.ndim() {
            return Err(Error::length_mismatch(self.ndim(), bounds.len(), "bounds"));
        }
        Ok(self
            .axes()
            .iter()
            .zip(bounds)
            .map(|(axis, b)| match b {
                Some((lo, hi)) => axis.bin_range(*lo, *hi),
                None => 0..axis.bin_count(),
            })
            .collect())
    }

    // Visit every multi-index inside `ranges`, passing the (zero-padded)
    // index triple and the flat storage offset.
    fn for_each_index<F>(&self, ranges: &[Range<usize>], mut visit: F)
    where
        F: FnMut([usize; 3], usize),
    {
        let shape = self.shape();
        let full = |d: usize| -> Range<usize> {
            ranges.get(d).cloned().unwrap_or(0..1)
        };
        for i in full(0) {
            for j in full(1) {
                for k in full(2) {
                    let idx = [i, j, k];
                    let mut flat = 0;
                    for (d, n) in shape.iter().enumerate() {
                        flat = flat * n + idx[d];
                    }
                    visit(idx, flat);
                }
            }
        }
    }

    fn fold_onto(&self, keep: usize, ranges: &[Range<usize>], quadrature: bool) -> Vec<f64> {
        let mut out = vec![0.0; self.axis(keep).bin_count()];
        self.for_each_index(ranges, |idx, flat| {
            if quadrature {
                let e = self.errors()[flat];
                out[idx[keep]] += e * e;
            } else {
                out[idx[keep]] += self.data()[flat];
            }
        });
        if quadrature {
            for v in &mut out {
                *v = v.sqrt();
            }
        }
        out
    }
}
