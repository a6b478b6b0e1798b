//! Femtoscopic correlation-function analysis toolkit
//!
//! A facade over the workspace crates, re-exported under one roof:
//!
//! - [`hist`] — binned axes, dense 1-3D histograms, ratios, projections
//! - [`q3d`] — out-side-long correlation functions and their projections
//! - [`correction`] — momentum-smearing matrix/vector corrections
//! - [`source`] — the binned-data source boundary and analysis containers
//! - [`fit`] — fit-input extraction, Gaussian source models, residuals
//!
//! ```
//! use femto_stats::hist::{Axis, Histogram};
//!
//! let axis = Axis::uniform(4, 0.0, 0.4)?;
//! let num = Histogram::from_contents(vec![axis.clone()], vec![20.0, 15.0, 12.0, 10.0])?;
//! let den = Histogram::from_contents(vec![axis], vec![10.0; 4])?;
//! let cf = num.divide(&den)?;
//! assert_eq!(cf.data()[0], 2.0);
//! # Ok::<(), femto_stats::Error>(())
//! ```

pub use femto_correction as correction;
pub use femto_fit as fit;
pub use femto_hist as hist;
pub use femto_q3d as q3d;
pub use femto_source as source;

pub use femto_core::{Error, Result};
