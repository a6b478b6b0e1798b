//! Binned-data source boundary
//!
//! Everything upstream of the histogram math lives here: the
//! [`BinnedSource`] trait a file-format reader implements, the
//! [`RawHistogram`] handle it hands over (with under/overflow padding
//! normalized away), and the [`AnalysisSet`] / [`Analysis`] containers
//! that resolve the well-known histogram names of a femtoscopic results
//! file.
//!
//! ```
//! use femto_source::{AnalysisSet, Flow, MemorySource, RawAxis, RawHistogram};
//!
//! let mut src = MemorySource::new();
//! src.insert(
//!     "femtolist/pip_00_05/Num_qinv_pip",
//!     RawHistogram {
//!         axes: vec![RawAxis::uniform(4, 0.0, 1.0)],
//!         contents: vec![1.0, 4.0, 9.0, 16.0],
//!         sumw2: None,
//!         flow: Flow::None,
//!     },
//! );
//!
//! let set = AnalysisSet::open(&src)?;
//! let analysis = set.get("pip_00_05").unwrap();
//! let num = analysis.lookup("Num_qinv_pip").unwrap();
//! assert_eq!(num.data()[3], 16.0);
//! # Ok::<(), femto_core::Error>(())
//! ```

pub mod analysis;
pub mod raw;
pub mod source;

pub use analysis::{
    Analysis, AnalysisSet, KtBin, KT_BINNED_PATH, Q3D_DEN_PATHS, Q3D_NUM_PATHS, QINV_DEN_PATHS,
    QINV_NUM_PATHS, RESULTS_PATHS,
};
pub use raw::{Flow, RawAxis, RawHistogram};
pub use source::{BinnedSource, MemorySource};

pub use femto_core::{Error, Result};
