//! Binned coordinate axes
//!
//! An [`Axis`] maps real values to bin indices and back. Bin `i` covers the
//! half-open interval `[edge[i], edge[i+1])`; values outside the edges map
//! to the [`BinLocation::Underflow`] / [`BinLocation::Overflow`] sentinels
//! rather than an error.

use femto_core::{Error, Result};
use std::ops::Range;

/// Where a value lands on an axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinLocation {
    /// Below the first edge
    Underflow,
    /// Inside bin `i` (0-based)
    Bin(usize),
    /// At or above the last edge
    Overflow,
}

impl BinLocation {
    /// Clamp to a usable array index: underflow becomes 0, overflow becomes
    /// `n_bins`. Used when translating value ranges into index ranges.
    pub fn clamped(self, n_bins: usize) -> usize {
        match self {
            BinLocation::Underflow => 0,
            BinLocation::Bin(i) => i,
            BinLocation::Overflow => n_bins,
        }
    }
}

/// A 1D binned coordinate axis with strictly increasing edges.
///
/// Constructed once when a histogram is loaded and immutable afterwards.
/// Supports both uniform and variable-width binning; bin centers are
/// computed at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Axis {
    edges: Vec<f64>,
    centers: Vec<f64>,
}

impl Axis {
    /// Create an axis with `n_bins` equal-width bins spanning `[lo, hi)`.
    pub fn uniform(n_bins: usize, lo: f64, hi: f64) -> Result<Self> {
        if n_bins == 0 {
            return Err(Error::InvalidAxis("axis needs at least one bin".into()));
        }
        if !lo.is_finite() || !hi.is_finite() || lo >= hi {
            return Err(Error::InvalidAxis(format!(
                "invalid uniform range [{lo}, {hi})"
            )));
        }
        let width = (hi - lo) / n_bins as f64;
        let edges = (0..=n_bins)
            .map(|i| {
                if i == n_bins {
                    hi // avoid accumulating rounding into the last edge
                } else {
                    lo + i as f64 * width
                }
            })
            .collect();
        Self::from_edges(edges)
    }

    /// Create an axis from explicit bin edges (variable-width bins).
    pub fn from_edges(edges: Vec<f64>) -> Result<Self> {
        if edges.len() < 2 {
            return Err(Error::InvalidAxis(format!(
                "need at least 2 edges, got {}",
                edges.len()
            )));
        }
        for (i, pair) in edges.windows(2).enumerate() {
            if !pair[0].is_finite() || !(pair[0] < pair[1]) {
                return Err(Error::non_increasing_edges(i + 1));
            }
        }
        if !edges[edges.len() - 1].is_finite() {
            return Err(Error::non_increasing_edges(edges.len() - 1));
        }
        let centers = edges.windows(2).map(|p| 0.5 * (p[0] + p[1])).collect();
        Ok(Self { edges, centers })
    }

    /// Number of bins (one less than the number of edges).
    pub fn bin_count(&self) -> usize {
        self.edges.len() - 1
    }

    /// The bin edges, length `bin_count() + 1`.
    pub fn edges(&self) -> &[f64] {
        &self.edges
    }

    /// Per-bin midpoints.
    pub fn centers(&self) -> &[f64] {
        &self.centers
    }

    /// Midpoint of bin `i`.
    pub fn center(&self, i: usize) -> f64 {
        self.centers[i]
    }

    /// Lower edge of bin `i`.
    pub fn low_edge(&self, i: usize) -> f64 {
        self.edges[i]
    }

    /// Width of bin `i`.
    pub fn width(&self, i: usize) -> f64 {
        self.edges[i + 1] - self.edges[i]
    }

    /// All bin widths, length `bin_count()`.
    pub fn widths(&self) -> Vec<f64> {
        self.edges.windows(2).map(|p| p[1] - p[0]).collect()
    }

    /// Find the bin containing `value`.
    ///
    /// Values below the first edge return `Underflow`; values at or above
    /// the last edge return `Overflow` (the last bin's upper edge is
    /// exclusive like every other bin's).
    pub fn locate(&self, value: f64) -> BinLocation {
        if value < self.edges[0] {
            return BinLocation::Underflow;
        }
        if value >= self.edges[self.edges.len() - 1] {
            return BinLocation::Overflow;
        }
        // partition_point gives the first edge strictly greater than value
        let idx = self.edges.partition_point(|e| *e <= value);
        BinLocation::Bin(idx - 1)
    }

    /// Translate a value range into a half-open index range.
    ///
    /// The result is `[locate(lo), locate(hi))` with out-of-range values
    /// clamped to the axis ends. The bin containing `hi` is *excluded*:
    /// a caller wanting the upper-bound bin included must extend the
    /// request by one bin width. This single convention is used everywhere;
    /// there is no inclusive variant.
    pub fn bin_range(&self, lo: f64, hi: f64) -> Range<usize> {
        let n = self.bin_count();
        let start = self.locate(lo).clamped(n);
        let stop = self.locate(hi).clamped(n);
        start..stop.max(start)
    }

    /// Bin-center subarray within `[lo, hi)` plus the corresponding index
    /// range.
    pub fn domain_slice(&self, lo: f64, hi: f64) -> (&[f64], Range<usize>) {
        let range = self.bin_range(lo, hi);
        (&self.centers[range.clone()], range)
    }

    /// Whether two axes describe the same binning, within a relative
    /// tolerance on the edges. Used to gate ratio operations.
    pub fn compatible_with(&self, other: &Axis) -> bool {
        if self.bin_count() != other.bin_count() {
            return false;
        }
        self.edges.iter().zip(&other.edges).all(|(a, b)| {
            let scale = a.abs().max(b.abs()).max(1e-12);
            (a - b).abs() <= 1e-9 * scale
        })
    }
}
