//! Residual vectors for external minimizers
//!
//! The minimizer itself lives outside this crate; these functions turn a
//! model closure and observed data into the per-bin vectors any
//! least-squares or maximum-likelihood driver can square-and-sum.

use crate::data::FitData;

// Clamp range for model values inside the likelihood logarithms.
const MODEL_FLOOR: f64 = 1e-12;
const MODEL_CEIL: f64 = 1e12;

/// Per-bin normalized residuals `(model(q) - cf) / err`.
///
/// Bins with zero error carry no information and contribute 0, keeping
/// the vector the same length as the data.
pub fn chi2_residuals(model: impl Fn(f64) -> f64, data: &FitData) -> Vec<f64> {
    data.q
        .iter()
        .zip(&data.cf)
        .zip(&data.err)
        .map(|((&q, &cf), &err)| {
            if err > 0.0 {
                (model(q) - cf) / err
            } else {
                0.0
            }
        })
        .collect()
}

/// Per-bin log-likelihood terms for raw numerator/denominator counts.
///
/// With `A` the numerator count, `B` the denominator count and
/// `C = model(q)`, each bin contributes
///
/// ```text
/// -2 [ A ln(C(A+B) / (A(C+1))) + B ln((A+B) / (B(C+1))) ]
/// ```
///
/// which vanishes when `C` equals the observed ratio `A/B`. Terms with a
/// zero count drop their logarithm, matching the `x ln(x)` limit.
///
/// A minimizer freely explores parameter regions where the model dips to
/// zero or below; the model value is clamped into `(0, 1e12]` so such
/// bins contribute a large finite penalty instead of a NaN that would
/// poison the whole objective.
pub fn loglike_residuals(
    model: impl Fn(f64) -> f64,
    q: &[f64],
    num: &[f64],
    den: &[f64],
) -> Vec<f64> {
    q.iter()
        .zip(num)
        .zip(den)
        .map(|((&q, &a), &b)| {
            let c = model(q);
            let c = if c.is_nan() {
                MODEL_FLOOR
            } else {
                c.clamp(MODEL_FLOOR, MODEL_CEIL)
            };
            let mut term = 0.0;
            if a > 0.0 {
                term += a * (c * (a + b) / (a * (c + 1.0))).ln();
            }
            if b > 0.0 {
                term += b * ((a + b) / (b * (c + 1.0))).ln();
            }
            -2.0 * term
        })
        .collect()
}
