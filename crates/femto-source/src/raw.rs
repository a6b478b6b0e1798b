//! Raw histogram handles from an external binned-data source
//!
//! The external format delivers dense content arrays that may carry one
//! under/overflow bin of padding at each end of every axis. The padding
//! convention is normalized here, once: [`RawHistogram::into_histogram`]
//! always produces a flow-free [`Histogram`], so downstream code never
//! branches on it again.

use femto_core::{Error, Result};
use femto_hist::{Axis, Histogram};

/// Whether the content array carries under/overflow padding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Flow {
    /// Contents cover exactly the in-range bins
    #[default]
    None,
    /// Each axis carries one extra bin at each end
    Padded,
}

/// Axis descriptor of a raw histogram: explicit bin edges.
#[derive(Debug, Clone, PartialEq)]
pub struct RawAxis {
    pub edges: Vec<f64>,
}

impl RawAxis {
    /// Uniform-axis convenience used by sources that store (nbins, lo, hi).
    pub fn uniform(n_bins: usize, lo: f64, hi: f64) -> Self {
        let width = (hi - lo) / n_bins as f64;
        let edges = (0..=n_bins)
            .map(|i| if i == n_bins { hi } else { lo + i as f64 * width })
            .collect();
        Self { edges }
    }

    fn bin_count(&self) -> usize {
        self.edges.len().saturating_sub(1)
    }
}

/// A histogram as handed over by the external source, before normalization
/// into the core model.
#[derive(Debug, Clone, PartialEq)]
pub struct RawHistogram {
    pub axes: Vec<RawAxis>,
    /// Dense row-major contents, padded per `flow`
    pub contents: Vec<f64>,
    /// Sum of squared weights per bin (same layout as `contents`), when the
    /// source tracked it
    pub sumw2: Option<Vec<f64>>,
    pub flow: Flow,
}

impl RawHistogram {
    /// Convert into the core [`Histogram`] model: strip flow padding when
    /// present and derive standard errors from `sumw2` (or Poisson
    /// statistics when the source did not track weights).
    pub fn into_histogram(self) -> Result<Histogram> {
        let axes = self
            .axes
            .iter()
            .map(|a| Axis::from_edges(a.edges.clone()))
            .collect::<Result<Vec<_>>>()?;
        let inner: Vec<usize> = self.axes.iter().map(RawAxis::bin_count).collect();

        let pad = match self.flow {
            Flow::None => 0,
            Flow::Padded => 1,
        };
        let padded: Vec<usize> = inner.iter().map(|n| n + 2 * pad).collect();
        let expected: usize = padded.iter().product();
        if self.contents.len() != expected {
            return Err(Error::length_mismatch(
                expected,
                self.contents.len(),
                "raw histogram contents",
            ));
        }
        if let Some(s) = &self.sumw2 {
            if s.len() != expected {
                return Err(Error::length_mismatch(expected, s.len(), "raw sumw2"));
            }
        }

        let data = strip_flow(&self.contents, &padded, pad);
        let errors = match &self.sumw2 {
            Some(s) => strip_flow(s, &padded, pad)
                .iter()
                .map(|w| w.max(0.0).sqrt())
                .collect(),
            None => data.iter().map(|x| x.max(0.0).sqrt()).collect(),
        };
        Histogram::new(axes, data, errors)
    }
}

// Copy the inner (in-range) region out of a padded row-major array.
fn strip_flow(padded_data: &[f64], padded_shape: &[usize], pad: usize) -> Vec<f64> {
    if pad == 0 {
        return padded_data.to_vec();
    }
    let inner: Vec<usize> = padded_shape.iter().map(|n| n - 2 * pad).collect();
    let mut out = Vec::with_capacity(inner.iter().product());
    let dims = padded_shape.len();

    let mut idx = vec![0usize; dims];
    'outer: loop {
        let mut flat = 0;
        for d in 0..dims {
            flat = flat * padded_shape[d] + idx[d] + pad;
        }
        out.push(padded_data[flat]);

        // advance the inner multi-index, last axis fastest
        for d in (0..dims).rev() {
            idx[d] += 1;
            if idx[d] < inner[d] {
                continue 'outer;
            }
            idx[d] = 0;
        }
        break;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_unpadded_conversion() {
        let raw = RawHistogram {
            axes: vec![RawAxis::uniform(3, 0.0, 1.0)],
            contents: vec![4.0, 9.0, 16.0],
            sumw2: None,
            flow: Flow::None,
        };
        let hist = raw.into_histogram().unwrap();
        assert_eq!(hist.shape(), vec![3]);
        assert_eq!(hist.data(), &[4.0, 9.0, 16.0]);
        assert_eq!(hist.errors(), &[2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_padded_1d_strips_flow_bins() {
        let raw = RawHistogram {
            axes: vec![RawAxis::uniform(3, 0.0, 1.0)],
            // underflow, b0, b1, b2, overflow
            contents: vec![99.0, 1.0, 2.0, 3.0, 77.0],
            sumw2: None,
            flow: Flow::Padded,
        };
        let hist = raw.into_histogram().unwrap();
        assert_eq!(hist.data(), &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_padded_2d_strips_flow_bins() {
        // 2x2 inner region inside a 4x4 padded array
        let mut contents = vec![0.0; 16];
        contents[4 * 1 + 1] = 10.0;
        contents[4 * 1 + 2] = 20.0;
        contents[4 * 2 + 1] = 30.0;
        contents[4 * 2 + 2] = 40.0;
        contents[0] = 500.0; // flow corners must vanish
        contents[15] = 600.0;
        let raw = RawHistogram {
            axes: vec![RawAxis::uniform(2, 0.0, 1.0), RawAxis::uniform(2, 0.0, 1.0)],
            contents,
            sumw2: None,
            flow: Flow::Padded,
        };
        let hist = raw.into_histogram().unwrap();
        assert_eq!(hist.data(), &[10.0, 20.0, 30.0, 40.0]);
    }

    #[test]
    fn test_sumw2_errors() {
        let raw = RawHistogram {
            axes: vec![RawAxis::uniform(2, 0.0, 1.0)],
            contents: vec![10.0, 20.0],
            sumw2: Some(vec![25.0, 4.0]),
            flow: Flow::None,
        };
        let hist = raw.into_histogram().unwrap();
        assert_relative_eq!(hist.errors()[0], 5.0);
        assert_relative_eq!(hist.errors()[1], 2.0);
    }

    #[test]
    fn test_length_mismatch_is_rejected() {
        let raw = RawHistogram {
            axes: vec![RawAxis::uniform(3, 0.0, 1.0)],
            contents: vec![1.0, 2.0, 3.0],
            sumw2: None,
            flow: Flow::Padded, // padded 1D of 3 bins needs 5 entries
        };
        assert!(raw.into_histogram().is_err());
    }
}
