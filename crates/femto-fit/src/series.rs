//! Fit results accumulated across kT bins

/// Fitted radius and lambda versus mean transverse momentum, collected
/// one row per kT bin and exposed as parallel slices for plotting or
/// tabular output.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KtSeries {
    kt: Vec<f64>,
    radius: Vec<f64>,
    radius_err: Vec<f64>,
    lam: Vec<f64>,
    lam_err: Vec<f64>,
}

impl KtSeries {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one fitted bin: `(value, error)` pairs for the radius and
    /// lambda.
    pub fn push(&mut self, kt: f64, radius: (f64, f64), lam: (f64, f64)) {
        self.kt.push(kt);
        self.radius.push(radius.0);
        self.radius_err.push(radius.1);
        self.lam.push(lam.0);
        self.lam_err.push(lam.1);
    }

    pub fn len(&self) -> usize {
        self.kt.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kt.is_empty()
    }

    pub fn kt(&self) -> &[f64] {
        &self.kt
    }

    pub fn radius(&self) -> &[f64] {
        &self.radius
    }

    pub fn radius_err(&self) -> &[f64] {
        &self.radius_err
    }

    pub fn lam(&self) -> &[f64] {
        &self.lam
    }

    pub fn lam_err(&self) -> &[f64] {
        &self.lam_err
    }
}
