//! Fit-ready views of a correlation function

use femto_core::{Error, Result};
use femto_hist::Histogram;

/// A 1D correlation function flattened into the parallel arrays a
/// minimizer consumes: bin centers, ratio values, and standard errors.
#[derive(Debug, Clone, PartialEq)]
pub struct FitData {
    pub q: Vec<f64>,
    pub cf: Vec<f64>,
    pub err: Vec<f64>,
}

impl FitData {
    /// Extract fit arrays from a 1D ratio histogram, restricted to
    /// `range` when given. An empty extraction is `InvalidInput` since a
    /// fit over zero points is meaningless.
    pub fn from_histogram(hist: &Histogram, range: Option<(f64, f64)>) -> Result<Self> {
        let (q, cf, err) = hist.to_arrays(range)?;
        if q.is_empty() {
            return Err(Error::InvalidInput(
                "fit range selects no histogram bins".into(),
            ));
        }
        Ok(Self { q, cf, err })
    }

    /// Divide a numerator/denominator pair and extract the fit arrays
    /// from the resulting ratio.
    pub fn from_pair(num: &Histogram, den: &Histogram, range: Option<(f64, f64)>) -> Result<Self> {
        let ratio = num.divide(den)?;
        Self::from_histogram(&ratio, range)
    }

    pub fn len(&self) -> usize {
        self.q.len()
    }

    pub fn is_empty(&self) -> bool {
        self.q.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use femto_hist::Axis;

    fn ratio_hist() -> Histogram {
        let axis = Axis::uniform(4, 0.0, 0.4).unwrap();
        let num = Histogram::from_contents(vec![axis.clone()], vec![20.0, 15.0, 12.0, 10.0]).unwrap();
        let den = Histogram::from_contents(vec![axis], vec![10.0, 10.0, 10.0, 10.0]).unwrap();
        num.divide(&den).unwrap()
    }

    #[test]
    fn test_from_histogram_full_range() {
        let data = FitData::from_histogram(&ratio_hist(), None).unwrap();
        assert_eq!(data.len(), 4);
        assert_relative_eq!(data.q[0], 0.05);
        assert_relative_eq!(data.cf[0], 2.0);
        assert_relative_eq!(data.cf[3], 1.0);
    }

    #[test]
    fn test_from_histogram_restricted_range() {
        // bounds sit inside bins 1 and 3 so edge rounding cannot flip them
        let data = FitData::from_histogram(&ratio_hist(), Some((0.12, 0.32))).unwrap();
        assert_eq!(data.len(), 2);
        assert_relative_eq!(data.q[0], 0.15, epsilon = 1e-12);
        assert_relative_eq!(data.q[1], 0.25, epsilon = 1e-12);
        assert_eq!(data.cf, vec![1.5, 1.2]);
    }

    #[test]
    fn test_empty_range_is_rejected() {
        let err = FitData::from_histogram(&ratio_hist(), Some((5.0, 6.0))).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[test]
    fn test_from_pair_divides_first() {
        let axis = Axis::uniform(2, 0.0, 0.2).unwrap();
        let num = Histogram::from_contents(vec![axis.clone()], vec![8.0, 2.0]).unwrap();
        let den = Histogram::from_contents(vec![axis], vec![4.0, 2.0]).unwrap();
        let data = FitData::from_pair(&num, &den, None).unwrap();
        assert_eq!(data.cf, vec![2.0, 1.0]);
    }
}
