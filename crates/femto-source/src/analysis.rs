//! Analysis containers and kT-binned sub-groups
//!
//! A results file groups histograms under a top-level list, one group per
//! analysis (a pair-type / centrality combination). [`AnalysisSet`]
//! locates that list, [`Analysis`] resolves the well-known histogram
//! names inside a group, and [`KtBin`] descends into the transverse-
//! momentum-binned sub-container when one exists.
//!
//! Name drift across production cycles is handled by alternative-path
//! lists: each lookup walks its candidates and returns the first hit, so
//! old and new productions read through the same code.

use crate::source::BinnedSource;
use femto_core::{Error, Result};
use femto_hist::Histogram;
use tracing::{debug, info, warn};

/// Candidate names for the top-level analysis list.
pub const RESULTS_PATHS: &[&str] = &["femtolist", "PWG2FEMTO/femtolist"];

/// Candidate names for the q_inv numerator, newest convention first.
pub const QINV_NUM_PATHS: &[&str] = &[
    "Num_qinv_pip",
    "Num_qinv_pim",
    "Numc_qinv_pip",
    "Numc_qinv_pim",
];

/// Candidate names for the q_inv denominator.
pub const QINV_DEN_PATHS: &[&str] = &[
    "Den_qinv_pip",
    "Den_qinv_pim",
    "Denc_qinv_pip",
    "Denc_qinv_pim",
];

/// Candidate names for the 3D (out-side-long) numerator.
pub const Q3D_NUM_PATHS: &[&str] = &["Num_q3D_pip", "Num_q3D_pim"];

/// Candidate names for the 3D (out-side-long) denominator.
pub const Q3D_DEN_PATHS: &[&str] = &["Den_q3D_pip", "Den_q3D_pim"];

/// Sub-container holding the kT-binned copies of the q_inv histograms.
pub const KT_BINNED_PATH: &str = "KT_Qinv";

/// The top-level collection of analysis groups in a results source.
pub struct AnalysisSet<'a, S: BinnedSource> {
    source: &'a S,
    list_path: &'static str,
    names: Vec<String>,
}

impl<'a, S: BinnedSource> AnalysisSet<'a, S> {
    /// Locate the analysis list in `source` and enumerate its groups.
    ///
    /// Walks [`RESULTS_PATHS`] and settles on the first candidate with at
    /// least one sub-group. A source without any recognizable list is an
    /// `InvalidInput` error, since nothing downstream can run.
    pub fn open(source: &'a S) -> Result<Self> {
        for &list_path in RESULTS_PATHS {
            let names = source.subgroups(list_path);
            if !names.is_empty() {
                info!(list_path, analyses = names.len(), "found analysis list");
                return Ok(Self {
                    source,
                    list_path,
                    names,
                });
            }
            debug!(list_path, "no analysis list at path");
        }
        Err(Error::InvalidInput(
            "no analysis list found in source".into(),
        ))
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// The analysis group called `name`, or `None` when absent.
    pub fn get(&self, name: &str) -> Option<Analysis<'a, S>> {
        if !self.names.iter().any(|n| n == name) {
            return None;
        }
        Some(Analysis {
            source: self.source,
            name: name.to_string(),
            path: format!("{}/{}", self.list_path, name),
        })
    }

    /// Iterate over every analysis group in source order.
    pub fn iter(&self) -> impl Iterator<Item = Analysis<'a, S>> + '_ {
        self.names.iter().map(|name| Analysis {
            source: self.source,
            name: name.clone(),
            path: format!("{}/{}", self.list_path, name),
        })
    }
}

/// One analysis group: a named sub-container of histograms.
pub struct Analysis<'a, S: BinnedSource> {
    source: &'a S,
    name: String,
    path: String,
}

impl<'a, S: BinnedSource> Analysis<'a, S> {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// The analysis settings string attached to this group, if any.
    pub fn metadata(&self) -> Option<String> {
        self.source.metadata(&self.path)
    }

    /// Fetch and convert a histogram by its in-group name.
    ///
    /// A missing name is `None`. A histogram that exists but fails
    /// conversion (malformed contents) is also `None`, with a diagnostic,
    /// so one broken object never aborts a whole-file scan.
    pub fn lookup(&self, name: &str) -> Option<Histogram> {
        let path = format!("{}/{}", self.path, name);
        let raw = self.source.get(&path)?;
        match raw.into_histogram() {
            Ok(hist) => Some(hist),
            Err(err) => {
                warn!(path, %err, "skipping malformed histogram");
                None
            }
        }
    }

    /// Fetch the first of several alternative in-group names that exists.
    pub fn lookup_any(&self, names: &[&str]) -> Option<Histogram> {
        names.iter().find_map(|name| self.lookup(name))
    }

    /// The q_inv numerator/denominator pair, or `None` when either side
    /// is missing under every known name.
    pub fn qinv_pair(&self) -> Option<(Histogram, Histogram)> {
        let num = self.lookup_any(QINV_NUM_PATHS)?;
        let den = self.lookup_any(QINV_DEN_PATHS)?;
        Some((num, den))
    }

    /// The 3D out-side-long numerator/denominator pair.
    pub fn q3d_pair(&self) -> Option<(Histogram, Histogram)> {
        let num = self.lookup_any(Q3D_NUM_PATHS)?;
        let den = self.lookup_any(Q3D_DEN_PATHS)?;
        Some((num, den))
    }

    /// Whether this analysis carries a kT-binned sub-container.
    pub fn has_kt_bins(&self) -> bool {
        !self
            .source
            .subgroups(&format!("{}/{}", self.path, KT_BINNED_PATH))
            .is_empty()
    }

    /// The kT-binned sub-analyses, in source order. Empty when the group
    /// has no kT container.
    pub fn kt_bins(&self) -> Vec<KtBin<'a, S>> {
        let container = format!("{}/{}", self.path, KT_BINNED_PATH);
        self.source
            .subgroups(&container)
            .into_iter()
            .map(|bin_name| {
                let kt = parse_kt_center(&bin_name);
                if kt.is_none() {
                    warn!(bin = %bin_name, "unparseable kT bin name");
                }
                KtBin {
                    kt,
                    name: bin_name.clone(),
                    analysis: Analysis {
                        source: self.source,
                        name: bin_name.clone(),
                        path: format!("{container}/{bin_name}"),
                    },
                }
            })
            .collect()
    }
}

/// One transverse-momentum bin of an analysis, named `"lo_hi"` in GeV/c.
pub struct KtBin<'a, S: BinnedSource> {
    /// Midpoint of the bin range, when the name parsed
    pub kt: Option<f64>,
    /// The raw bin name, e.g. `"0.2_0.3"`
    pub name: String,
    /// The bin's own histogram group, same layout as a full analysis
    pub analysis: Analysis<'a, S>,
}

// "0.2_0.3" -> 0.25; names with any non-numeric piece yield None.
fn parse_kt_center(name: &str) -> Option<f64> {
    let mut sum = 0.0;
    let mut count = 0usize;
    for piece in name.split('_') {
        sum += piece.parse::<f64>().ok()?;
        count += 1;
    }
    (count > 0).then(|| sum / count as f64)
}
