//! Fit-driver boundary for femtoscopic correlation functions
//!
//! Bridges binned correlation functions to an external minimizer: flatten
//! a ratio histogram into [`FitData`], evaluate a Gaussian source model
//! ([`Gaussian`], [`GaussianCoulomb`], [`Gaussian3d`]), and build the
//! per-bin residual vectors ([`chi2_residuals`], [`loglike_residuals`])
//! the minimizer squares and sums. Fitted parameters across transverse-
//! momentum bins collect into a [`KtSeries`].
//!
//! ```
//! use femto_fit::{chi2_residuals, FitData, Gaussian};
//!
//! let data = FitData {
//!     q: vec![0.05, 0.15],
//!     cf: vec![1.45, 1.02],
//!     err: vec![0.05, 0.02],
//! };
//! let model = Gaussian::guess();
//! let residuals = chi2_residuals(|q| model.evaluate(q), &data);
//! assert_eq!(residuals.len(), 2);
//! ```

pub mod data;
pub mod model;
pub mod residual;
pub mod series;

pub use data::FitData;
pub use model::{gamow, Gaussian, Gaussian3d, GaussianCoulomb, HBAR_C};
pub use residual::{chi2_residuals, loglike_residuals};
pub use series::KtSeries;

pub use femto_core::{Error, Result};
