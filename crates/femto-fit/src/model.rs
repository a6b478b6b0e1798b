//! Gaussian source models for the correlation function
//!
//! Radii are in femtometers and relative momenta in GeV/c, with `HBAR_C`
//! bridging the two. Each parameter struct carries a `guess()`
//! constructor with the conventional starting point for a minimizer.

/// ħc in GeV·fm.
pub const HBAR_C: f64 = 0.1973269788;

/// Bohr radius of the pion pair in fm, entering the Coulomb factor.
const PION_BOHR_RADIUS: f64 = 387.5;

/// Parameters of the plain Gaussian source model
/// `C(q) = N (1 + λ exp(-(q R / ħc)²))`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gaussian {
    pub norm: f64,
    pub lam: f64,
    /// Source radius in fm
    pub radius: f64,
}

impl Gaussian {
    /// Conventional starting point for a fit.
    pub fn guess() -> Self {
        Self {
            norm: 1.0,
            lam: 0.5,
            radius: 5.0,
        }
    }

    pub fn evaluate(&self, q: f64) -> f64 {
        let e = (q * self.radius / HBAR_C).powi(2);
        self.norm * (1.0 + self.lam * (-e).exp())
    }
}

/// Gamow penetration factor `K(q) = 2πη / (e^{2πη} - 1)` with
/// `η = ħc / (q a)`, for same-charge pion pairs.
///
/// Tends to 1 at large `q` and to 0 as `q` approaches zero (full Coulomb
/// suppression); non-positive `q` maps to 0.
pub fn gamow(q: f64) -> f64 {
    if q <= 0.0 {
        return 0.0;
    }
    let x = 2.0 * std::f64::consts::PI * HBAR_C / (q * PION_BOHR_RADIUS);
    x / (x.exp() - 1.0)
}

/// Gaussian source with the Gamow Coulomb factor folded in:
/// `C(q) = N ((1-λ) + λ K(q) exp(-(q R / ħc)²))`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaussianCoulomb {
    pub norm: f64,
    pub lam: f64,
    pub radius: f64,
}

impl GaussianCoulomb {
    pub fn guess() -> Self {
        Self {
            norm: 1.0,
            lam: 0.5,
            radius: 5.0,
        }
    }

    pub fn evaluate(&self, q: f64) -> f64 {
        let e = (q * self.radius / HBAR_C).powi(2);
        self.norm * ((1.0 - self.lam) + self.lam * gamow(q) * (-e).exp())
    }
}

/// Three-dimensional Gaussian source over out-side-long components:
/// `C(q⃗) = N (1 + λ exp(-((q_o R_o)² + (q_s R_s)² + (q_l R_l)²) / ħc²))`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gaussian3d {
    pub norm: f64,
    pub lam: f64,
    pub r_out: f64,
    pub r_side: f64,
    pub r_long: f64,
}

impl Gaussian3d {
    pub fn guess() -> Self {
        Self {
            norm: 1.0,
            lam: 0.5,
            r_out: 5.0,
            r_side: 5.0,
            r_long: 5.0,
        }
    }

    pub fn evaluate(&self, q_out: f64, q_side: f64, q_long: f64) -> f64 {
        let e = ((q_out * self.r_out).powi(2)
            + (q_side * self.r_side).powi(2)
            + (q_long * self.r_long).powi(2))
            / HBAR_C.powi(2);
        self.norm * (1.0 + self.lam * (-e).exp())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn test_gaussian_limits() {
        let p = Gaussian {
            norm: 1.0,
            lam: 0.5,
            radius: 5.0,
        };
        assert_relative_eq!(p.evaluate(0.0), 1.5);
        // correlation dies off well inside a GeV for a 5 fm source
        assert_relative_eq!(p.evaluate(1.0), 1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_gaussian_scales_with_norm() {
        let p = Gaussian {
            norm: 0.95,
            lam: 0.5,
            radius: 5.0,
        };
        assert_relative_eq!(p.evaluate(0.0), 0.95 * 1.5);
    }

    #[test]
    fn test_gamow_limits() {
        assert_eq!(gamow(0.0), 0.0);
        assert_eq!(gamow(-0.1), 0.0);
        // deep suppression near threshold
        assert!(gamow(1e-4) < 0.01);
        // approaches unity from below at large q
        let high = gamow(2.0);
        assert!(high < 1.0);
        assert_abs_diff_eq!(high, 1.0, epsilon = 1e-3);
        // monotonically rising
        assert!(gamow(0.01) < gamow(0.05));
        assert!(gamow(0.05) < gamow(0.5));
    }

    #[test]
    fn test_coulomb_model_limits() {
        let p = GaussianCoulomb::guess();
        // Gamow kills the correlated term at q -> 0
        assert_relative_eq!(p.evaluate(1e-9), 1.0 - p.lam, epsilon = 1e-6);
        // at large q both the Gaussian and the suppression are gone
        assert_relative_eq!(p.evaluate(2.0), 1.0 - p.lam, epsilon = 1e-9);
    }

    #[test]
    fn test_gaussian3d_reduces_to_1d_on_axis() {
        let p3 = Gaussian3d {
            norm: 1.0,
            lam: 0.5,
            r_out: 5.0,
            r_side: 7.0,
            r_long: 3.0,
        };
        let p1 = Gaussian {
            norm: 1.0,
            lam: 0.5,
            radius: 5.0,
        };
        assert_relative_eq!(p3.evaluate(0.05, 0.0, 0.0), p1.evaluate(0.05));
    }

    #[test]
    fn test_guesses() {
        assert_relative_eq!(Gaussian::guess().radius, 5.0);
        assert_relative_eq!(GaussianCoulomb::guess().lam, 0.5);
        assert_relative_eq!(Gaussian3d::guess().r_long, 5.0);
    }
}
