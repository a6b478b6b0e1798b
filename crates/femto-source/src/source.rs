//! The binned-data source contract
//!
//! A source resolves slash-separated paths (`"femtolist/analysis/Num_qinv_pip"`) to
//! raw histograms. A missing path is an ordinary outcome: lookups return
//! `Option`, and callers branch on `None` instead of handling errors. Real
//! file-format readers implement [`BinnedSource`] elsewhere; this crate
//! ships the in-memory implementation used by tests and tools.

use crate::raw::RawHistogram;
use std::collections::BTreeMap;
use tracing::debug;

/// External collaborator boundary: named access into a hierarchical
/// results container.
pub trait BinnedSource {
    /// Resolve a slash-separated path to a raw histogram, or `None` when nothing
    /// lives there.
    fn get(&self, path: &str) -> Option<RawHistogram>;

    /// Names of the direct sub-groups under a slash-separated path (empty string for
    /// the top level).
    fn subgroups(&self, path: &str) -> Vec<String>;

    /// Free-form per-group metadata (analysis settings strings), when the
    /// source carries any.
    fn metadata(&self, _path: &str) -> Option<String> {
        None
    }

    /// Resolve the first of several alternative paths that exists.
    fn get_any(&self, paths: &[&str]) -> Option<RawHistogram> {
        for path in paths {
            if let Some(hist) = self.get(path) {
                return Some(hist);
            }
            debug!(path, "no histogram at path");
        }
        None
    }
}

/// HashMap-backed source: histograms keyed by slash-separated path, groups implied
/// by the path segments.
#[derive(Debug, Default, Clone)]
pub struct MemorySource {
    histograms: BTreeMap<String, RawHistogram>,
    metadata: BTreeMap<String, String>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a histogram at a slash-separated path.
    pub fn insert(&mut self, path: impl Into<String>, hist: RawHistogram) {
        self.histograms.insert(path.into(), hist);
    }

    /// Attach a metadata string to a group path.
    pub fn insert_metadata(&mut self, path: impl Into<String>, value: impl Into<String>) {
        self.metadata.insert(path.into(), value.into());
    }
}

impl BinnedSource for MemorySource {
    fn get(&self, path: &str) -> Option<RawHistogram> {
        self.histograms.get(path).cloned()
    }

    fn subgroups(&self, path: &str) -> Vec<String> {
        let prefix = if path.is_empty() {
            String::new()
        } else {
            format!("{path}/")
        };
        let mut names: Vec<String> = Vec::new();
        for key in self.histograms.keys() {
            let Some(rest) = key.strip_prefix(&prefix) else {
                continue;
            };
            // a subgroup is an intermediate segment, not a leaf histogram
            let Some((head, _)) = rest.split_once('/') else {
                continue;
            };
            if names.last().map(String::as_str) != Some(head) {
                names.push(head.to_string());
            }
        }
        names.dedup();
        names
    }

    fn metadata(&self, path: &str) -> Option<String> {
        self.metadata.get(path).cloned()
    }
}
