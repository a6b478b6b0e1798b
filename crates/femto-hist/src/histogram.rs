//! Dense N-dimensional histogram type
//!
//! A [`Histogram`] binds 1-3 [`Axis`] objects to a row-major `f64` content
//! array plus a matching array of per-bin standard errors. It is a pure
//! value type: every operation derives a new histogram, nothing mutates in
//! place (the single exception, correction smearing, lives in the
//! `femto-correction` crate and is documented there).

use crate::axis::{Axis, BinLocation};
use femto_core::{Error, Result};
use std::fmt;

/// An N-dimensional (1-3D) dense histogram with per-bin errors.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    axes: Vec<Axis>,
    data: Vec<f64>,
    errors: Vec<f64>,
}

impl Histogram {
    /// Create a histogram from axes, contents, and per-bin standard errors.
    ///
    /// Fails with `ShapeMismatch` when the array lengths do not match the
    /// product of the axis bin counts, and with `InvalidInput` for more
    /// than 3 axes or negative errors.
    pub fn new(axes: Vec<Axis>, data: Vec<f64>, errors: Vec<f64>) -> Result<Self> {
        if axes.is_empty() || axes.len() > 3 {
            return Err(Error::InvalidInput(format!(
                "histogram needs 1-3 axes, got {}",
                axes.len()
            )));
        }
        let expected: usize = axes.iter().map(Axis::bin_count).product();
        if data.len() != expected {
            return Err(Error::length_mismatch(expected, data.len(), "histogram contents"));
        }
        if errors.len() != expected {
            return Err(Error::length_mismatch(expected, errors.len(), "histogram errors"));
        }
        if errors.iter().any(|e| *e < 0.0 || !e.is_finite()) {
            return Err(Error::InvalidInput(
                "bin errors must be finite and non-negative".into(),
            ));
        }
        Ok(Self { axes, data, errors })
    }

    /// Create a histogram assuming Poisson statistics: each bin's error is
    /// the square root of its content.
    pub fn from_contents(axes: Vec<Axis>, data: Vec<f64>) -> Result<Self> {
        let errors = data.iter().map(|x| x.max(0.0).sqrt()).collect();
        Self::new(axes, data, errors)
    }

    /// Number of dimensions (1-3).
    pub fn ndim(&self) -> usize {
        self.axes.len()
    }

    /// Bin counts per axis.
    pub fn shape(&self) -> Vec<usize> {
        self.axes.iter().map(Axis::bin_count).collect()
    }

    /// The axes, in storage order.
    pub fn axes(&self) -> &[Axis] {
        &self.axes
    }

    /// Axis `i`. Panics when out of range.
    pub fn axis(&self, i: usize) -> &Axis {
        &self.axes[i]
    }

    /// The dense row-major bin contents.
    pub fn data(&self) -> &[f64] {
        &self.data
    }

    /// The per-bin standard errors, same layout as `data`.
    pub fn errors(&self) -> &[f64] {
        &self.errors
    }

    /// Replace contents and errors in place, keeping the axes.
    ///
    /// Only used by correction smearing; the replacement must match the
    /// existing shape.
    pub fn overwrite(&mut self, data: Vec<f64>, errors: Vec<f64>) -> Result<()> {
        if data.len() != self.data.len() {
            return Err(Error::length_mismatch(self.data.len(), data.len(), "overwrite"));
        }
        if errors.len() != self.errors.len() {
            return Err(Error::length_mismatch(self.errors.len(), errors.len(), "overwrite"));
        }
        self.data = data;
        self.errors = errors;
        Ok(())
    }

    /// Row-major flat index for a multi-index. Panics when `idx` length or
    /// entries are out of range (programmer error, like slice indexing).
    pub fn flat_index(&self, idx: &[usize]) -> usize {
        assert_eq!(idx.len(), self.ndim(), "index rank mismatch");
        let mut flat = 0;
        for (k, &i) in idx.iter().enumerate() {
            let n = self.axes[k].bin_count();
            assert!(i < n, "index {i} out of range for axis {k} ({n} bins)");
            flat = flat * n + i;
        }
        flat
    }

    /// Content of the bin at a multi-index.
    pub fn get(&self, idx: &[usize]) -> f64 {
        self.data[self.flat_index(idx)]
    }

    /// Error of the bin at a multi-index.
    pub fn get_error(&self, idx: &[usize]) -> f64 {
        self.errors[self.flat_index(idx)]
    }

    /// Content of the bin containing a point, or `None` when any coordinate
    /// is under/overflow.
    pub fn value_at(&self, coords: &[f64]) -> Option<f64> {
        if coords.len() != self.ndim() {
            return None;
        }
        let mut idx = Vec::with_capacity(self.ndim());
        for (axis, &c) in self.axes.iter().zip(coords) {
            match axis.locate(c) {
                BinLocation::Bin(i) => idx.push(i),
                _ => return None,
            }
        }
        Some(self.get(&idx))
    }

    /// Sum of all bin contents.
    pub fn total(&self) -> f64 {
        self.data.iter().sum()
    }

    /// Whether `other` has the same binning on every axis.
    pub fn same_binning(&self, other: &Histogram) -> bool {
        self.ndim() == other.ndim()
            && self
                .axes
                .iter()
                .zip(&other.axes)
                .all(|(a, b)| a.compatible_with(b))
    }
}

impl fmt::Display for Histogram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Histogram({}D, shape={:?}, total={:.6})",
            self.ndim(),
            self.shape(),
            self.total()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn axis(n: usize) -> Axis {
        Axis::uniform(n, 0.0, n as f64).unwrap()
    }

    #[test]
    fn test_construction_checks_shape() {
        let h = Histogram::new(vec![axis(2), axis(3)], vec![0.0; 6], vec![0.0; 6]);
        assert!(h.is_ok());

        assert!(Histogram::new(vec![axis(2), axis(3)], vec![0.0; 5], vec![0.0; 5]).is_err());
        assert!(Histogram::new(vec![axis(2)], vec![0.0; 2], vec![0.0; 3]).is_err());
        assert!(Histogram::new(vec![], vec![], vec![]).is_err());
        assert!(Histogram::new(
            vec![axis(1), axis(1), axis(1), axis(1)],
            vec![0.0],
            vec![0.0]
        )
        .is_err());
        assert!(Histogram::new(vec![axis(2)], vec![1.0, 2.0], vec![-1.0, 0.0]).is_err());
    }

    #[test]
    fn test_poisson_errors() {
        let h = Histogram::from_contents(vec![axis(3)], vec![4.0, 9.0, 0.0]).unwrap();
        assert_eq!(h.errors(), &[2.0, 3.0, 0.0]);
    }

    #[test]
    fn test_indexing() {
        let data: Vec<f64> = (0..24).map(|i| i as f64).collect();
        let h = Histogram::from_contents(vec![axis(2), axis(3), axis(4)], data).unwrap();
        assert_eq!(h.shape(), vec![2, 3, 4]);
        // row-major: idx = (i * 3 + j) * 4 + k
        assert_relative_eq!(h.get(&[0, 0, 0]), 0.0);
        assert_relative_eq!(h.get(&[0, 2, 3]), 11.0);
        assert_relative_eq!(h.get(&[1, 1, 2]), 18.0);
    }

    #[test]
    fn test_value_at() {
        let h = Histogram::from_contents(vec![axis(2), axis(2)], vec![1.0, 2.0, 3.0, 4.0])
            .unwrap();
        assert_eq!(h.value_at(&[0.5, 1.5]), Some(2.0));
        assert_eq!(h.value_at(&[1.5, 0.5]), Some(3.0));
        // out of range -> None, not an error
        assert_eq!(h.value_at(&[-1.0, 0.5]), None);
        assert_eq!(h.value_at(&[0.5]), None);
    }

    #[test]
    fn test_total_and_same_binning() {
        let h = Histogram::from_contents(vec![axis(3)], vec![1.0, 2.0, 3.0]).unwrap();
        assert_relative_eq!(h.total(), 6.0);

        let g = Histogram::from_contents(vec![axis(3)], vec![0.0; 3]).unwrap();
        assert!(h.same_binning(&g));

        let k = Histogram::from_contents(vec![axis(4)], vec![0.0; 4]).unwrap();
        assert!(!h.same_binning(&k));
    }
}
