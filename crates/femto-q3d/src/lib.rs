//! Q_out / Q_side / Q_long correlation functions
//!
//! A [`Q3D`] pairs the numerator (same-event) and denominator (mixed-event)
//! 3D pair histograms of a correlation analysis, forms their ratio with
//! quotient error propagation, and exposes 1D and 2D projections along the
//! out/side/long axes.
//!
//! Projections are *integrals*: raw sums over the restricted axes. Callers
//! wanting a density divide by [`Q3D::density_scale`] explicitly; nothing
//! here rescales silently.

use femto_core::{Error, Result};
use femto_hist::Histogram;

/// Out axis index.
pub const OUT: usize = 0;
/// Side axis index.
pub const SIDE: usize = 1;
/// Long axis index.
pub const LONG: usize = 2;

/// A correlation function in out/side/long relative-momentum space.
#[derive(Debug, Clone)]
pub struct Q3D {
    num: Histogram,
    den: Histogram,
    ratio: Histogram,
}

impl Q3D {
    /// Pair a numerator and denominator histogram and compute their ratio.
    ///
    /// Both must be 3D with identical shapes. Bin-center equality is
    /// spot-checked at representative indices on every axis (near zero,
    /// mid-range, near the end) as a cheap sanity gate against misaligned
    /// axes; a full edge walk is not performed here.
    pub fn new(num: Histogram, den: Histogram) -> Result<Self> {
        if num.ndim() != 3 || den.ndim() != 3 {
            return Err(Error::InvalidInput(format!(
                "Q3D needs 3D histograms, got {}D and {}D",
                num.ndim(),
                den.ndim()
            )));
        }
        if num.shape() != den.shape() {
            return Err(Error::shape_mismatch(&num.shape(), &den.shape(), "Q3D"));
        }
        for ax in 0..3 {
            let (a, b) = (num.axis(ax), den.axis(ax));
            let n = a.bin_count();
            for i in [1.min(n - 1), n / 2, n.saturating_sub(2)] {
                if (a.center(i) - b.center(i)).abs() > 1e-9 {
                    return Err(Error::ShapeMismatch {
                        expected: format!("center {} at bin {i}", a.center(i)),
                        actual: format!("center {} at bin {i}", b.center(i)),
                        context: format!("Q3D axis {ax}"),
                    });
                }
            }
        }
        let ratio = num.divide(&den)?;
        Ok(Self { num, den, ratio })
    }

    /// The numerator histogram.
    pub fn num(&self) -> &Histogram {
        &self.num
    }

    /// The denominator histogram.
    pub fn den(&self) -> &Histogram {
        &self.den
    }

    /// The derived ratio histogram (owned, not a view of the inputs).
    pub fn ratio(&self) -> &Histogram {
        &self.ratio
    }

    /// Integral projection of the ratio onto the out axis, with the side
    /// and long axes restricted to the given value ranges (`None` = full).
    pub fn integral_projection_out(
        &self,
        side_bounds: Option<(f64, f64)>,
        long_bounds: Option<(f64, f64)>,
    ) -> Result<Vec<f64>> {
        self.ratio.project(OUT, &[None, side_bounds, long_bounds])
    }

    /// Integral projection onto the side axis.
    pub fn integral_projection_side(
        &self,
        out_bounds: Option<(f64, f64)>,
        long_bounds: Option<(f64, f64)>,
    ) -> Result<Vec<f64>> {
        self.ratio.project(SIDE, &[out_bounds, None, long_bounds])
    }

    /// Integral projection onto the long axis.
    pub fn integral_projection_long(
        &self,
        out_bounds: Option<(f64, f64)>,
        side_bounds: Option<(f64, f64)>,
    ) -> Result<Vec<f64>> {
        self.ratio.project(LONG, &[out_bounds, side_bounds, None])
    }

    /// Quadrature-propagated error of [`Q3D::integral_projection_out`].
    pub fn integral_projection_out_error(
        &self,
        side_bounds: Option<(f64, f64)>,
        long_bounds: Option<(f64, f64)>,
    ) -> Result<Vec<f64>> {
        self.ratio
            .project_error(OUT, &[None, side_bounds, long_bounds])
    }

    /// Quadrature-propagated error of [`Q3D::integral_projection_side`].
    pub fn integral_projection_side_error(
        &self,
        out_bounds: Option<(f64, f64)>,
        long_bounds: Option<(f64, f64)>,
    ) -> Result<Vec<f64>> {
        self.ratio
            .project_error(SIDE, &[out_bounds, None, long_bounds])
    }

    /// Quadrature-propagated error of [`Q3D::integral_projection_long`].
    pub fn integral_projection_long_error(
        &self,
        out_bounds: Option<(f64, f64)>,
        side_bounds: Option<(f64, f64)>,
    ) -> Result<Vec<f64>> {
        self.ratio
            .project_error(LONG, &[out_bounds, side_bounds, None])
    }

    /// Number of bins summed over by a projection with these bounds on the
    /// two restricted axes. Dividing an integral projection by this turns
    /// it into a per-bin density; the caller does that division explicitly.
    ///
    /// Axis indices beyond [`LONG`] are `InvalidAxis`, and bounds that
    /// select no bins are `InvalidInput`: a zero scale would turn the
    /// caller's division into infinities.
    pub fn density_scale(
        &self,
        axis_a: usize,
        bounds_a: Option<(f64, f64)>,
        axis_b: usize,
        bounds_b: Option<(f64, f64)>,
    ) -> Result<f64> {
        let count = |axis: usize, bounds: Option<(f64, f64)>| -> Result<usize> {
            if axis > LONG {
                return Err(Error::InvalidAxis(format!(
                    "axis {axis} out of range for a 3D correlation"
                )));
            }
            Ok(match bounds {
                Some((lo, hi)) => self.ratio.axis(axis).bin_range(lo, hi).len(),
                None => self.ratio.axis(axis).bin_count(),
            })
        };
        let bins = count(axis_a, bounds_a)? * count(axis_b, bounds_b)?;
        if bins == 0 {
            return Err(Error::InvalidInput(
                "density scale over an empty bin selection".into(),
            ));
        }
        Ok(bins as f64)
    }

    /// 2D out-side projection of the ratio, long axis restricted.
    pub fn projection_out_side(
        &self,
        long_bounds: Option<(f64, f64)>,
    ) -> Result<(Vec<f64>, (usize, usize))> {
        self.ratio.project_pair(OUT, SIDE, long_bounds)
    }

    /// 2D out-long projection of the ratio, side axis restricted.
    pub fn projection_out_long(
        &self,
        side_bounds: Option<(f64, f64)>,
    ) -> Result<(Vec<f64>, (usize, usize))> {
        self.ratio.project_pair(OUT, LONG, side_bounds)
    }

    /// 2D side-long projection of the ratio, out axis restricted.
    pub fn projection_side_long(
        &self,
        out_bounds: Option<(f64, f64)>,
    ) -> Result<(Vec<f64>, (usize, usize))> {
        self.ratio.project_pair(SIDE, LONG, out_bounds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use femto_hist::Axis;

    fn hist_3d(n: usize, fill: impl Fn(usize, usize, usize) -> f64) -> Histogram {
        let axes = vec![
            Axis::uniform(n, -0.5, 0.5).unwrap(),
            Axis::uniform(n, -0.5, 0.5).unwrap(),
            Axis::uniform(n, -0.5, 0.5).unwrap(),
        ];
        let mut data = Vec::with_capacity(n * n * n);
        for i in 0..n {
            for j in 0..n {
                for k in 0..n {
                    data.push(fill(i, j, k));
                }
            }
        }
        Histogram::from_contents(axes, data).unwrap()
    }

    #[test]
    fn test_ratio_zero_policy() {
        let num = hist_3d(4, |i, _, _| if i == 0 { 0.0 } else { 6.0 });
        let den = hist_3d(4, |i, _, _| if i == 0 { 0.0 } else { 3.0 });
        let q = Q3D::new(num, den).unwrap();
        assert_eq!(q.ratio().get(&[0, 0, 0]), 0.0);
        assert_relative_eq!(q.ratio().get(&[1, 2, 3]), 2.0);
    }

    #[test]
    fn test_rejects_mismatched_inputs() {
        let num = hist_3d(4, |_, _, _| 1.0);
        let den = hist_3d(5, |_, _, _| 1.0);
        assert!(Q3D::new(num, den).is_err());

        // same bin counts, shifted axis: caught by the center spot-check
        let num = hist_3d(4, |_, _, _| 1.0);
        let axes = vec![
            Axis::uniform(4, -0.4, 0.6).unwrap(),
            Axis::uniform(4, -0.5, 0.5).unwrap(),
            Axis::uniform(4, -0.5, 0.5).unwrap(),
        ];
        let den = Histogram::from_contents(axes, vec![1.0; 64]).unwrap();
        assert!(Q3D::new(num, den).is_err());
    }

    #[test]
    fn test_projections_are_integrals() {
        let num = hist_3d(4, |_, _, _| 2.0);
        let den = hist_3d(4, |_, _, _| 1.0);
        let q = Q3D::new(num, den).unwrap();

        // unrestricted: each out bin sums 4*4 ratio bins of value 2
        let p = q.integral_projection_out(None, None).unwrap();
        assert_eq!(p.len(), 4);
        assert_relative_eq!(p[0], 32.0);

        // density is the caller's explicit division
        let scale = q.density_scale(SIDE, None, LONG, None).unwrap();
        assert_relative_eq!(p[0] / scale, 2.0);
    }

    #[test]
    fn test_density_scale_rejects_degenerate_requests() {
        let num = hist_3d(4, |_, _, _| 1.0);
        let den = hist_3d(4, |_, _, _| 1.0);
        let q = Q3D::new(num, den).unwrap();
        assert_relative_eq!(q.density_scale(SIDE, None, LONG, None).unwrap(), 16.0);

        // bounds selecting no bins would otherwise yield a zero divisor
        assert!(matches!(
            q.density_scale(SIDE, Some((2.0, 3.0)), LONG, None),
            Err(Error::InvalidInput(_))
        ));
        assert!(matches!(
            q.density_scale(3, None, LONG, None),
            Err(Error::InvalidAxis(_))
        ));
    }

    #[test]
    fn test_restricted_projection_matches_manual() {
        let num = hist_3d(4, |i, j, k| (i + j + k) as f64);
        let den = hist_3d(4, |_, _, _| 1.0);
        let q = Q3D::new(num.clone(), den).unwrap();

        // bin width 0.25 on [-0.5, 0.5); (-0.25, 0.25) selects bins 1..3
        let bounds = Some((-0.25, 0.25));
        let p = q.integral_projection_side(bounds, bounds).unwrap();
        for (j, v) in p.iter().enumerate() {
            let mut expected = 0.0;
            for i in 1..3 {
                for k in 1..3 {
                    expected += num.get(&[i, j, k]);
                }
            }
            assert_relative_eq!(*v, expected, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_projection_error_quadrature() {
        let num = hist_3d(3, |_, _, _| 9.0);
        let den = hist_3d(3, |_, _, _| 9.0);
        let q = Q3D::new(num, den).unwrap();
        let pe = q.integral_projection_long_error(None, None).unwrap();
        let per_bin = q.ratio().get_error(&[0, 0, 0]);
        assert_relative_eq!(pe[0], per_bin * 3.0, epsilon = 1e-12); // sqrt(9) bins
    }

    #[test]
    fn test_2d_projections() {
        let num = hist_3d(3, |i, j, k| (i * 9 + j * 3 + k) as f64);
        let den = hist_3d(3, |_, _, _| 1.0);
        let q = Q3D::new(num.clone(), den).unwrap();
        let (out, (nx, ny)) = q.projection_out_side(None).unwrap();
        assert_eq!((nx, ny), (3, 3));
        let expected: f64 = (0..3).map(|k| num.get(&[1, 2, k])).sum();
        assert_relative_eq!(out[1 * 3 + 2], expected, epsilon = 1e-12);
    }
}
