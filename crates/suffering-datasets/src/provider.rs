//! The dataset-provider seam.
//!
//! The scoring crates never read files themselves; they ask a
//! [`DatasetProvider`] for typed records at a dataset path. Unknown paths
//! yield empty sequences, never errors: the absence of data is an expected
//! condition the scorers diagnose themselves.

use std::collections::BTreeMap;

use suffering_model::{ImportBreakdown, LabourRiskRecord};

pub trait DatasetProvider {
    /// Labour-risk records stored at `path`, empty if the path is unknown.
    fn labour_risk_records(&self, path: &str) -> Vec<LabourRiskRecord>;

    /// Import breakdowns stored at `path`, empty if the path is unknown.
    fn import_breakdowns(&self, path: &str) -> Vec<ImportBreakdown>;

    /// All dataset paths starting with `prefix`, in sorted order.
    fn paths_with_prefix(&self, prefix: &str) -> Vec<String>;
}

/// Provider over tables handed in by the host. The primary entry point for
/// embedding, and the test double for everything downstream.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProvider {
    labour_risk: BTreeMap<String, Vec<LabourRiskRecord>>,
    imports: BTreeMap<String, Vec<ImportBreakdown>>,
}

impl InMemoryProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_labour_risk(
        &mut self,
        path: impl Into<String>,
        records: Vec<LabourRiskRecord>,
    ) -> &mut Self {
        self.labour_risk.insert(path.into(), records);
        self
    }

    pub fn insert_import_breakdowns(
        &mut self,
        path: impl Into<String>,
        breakdowns: Vec<ImportBreakdown>,
    ) -> &mut Self {
        self.imports.insert(path.into(), breakdowns);
        self
    }
}

impl DatasetProvider for InMemoryProvider {
    fn labour_risk_records(&self, path: &str) -> Vec<LabourRiskRecord> {
        self.labour_risk.get(path).cloned().unwrap_or_default()
    }

    fn import_breakdowns(&self, path: &str) -> Vec<ImportBreakdown> {
        self.imports.get(path).cloned().unwrap_or_default()
    }

    fn paths_with_prefix(&self, prefix: &str) -> Vec<String> {
        let mut paths: Vec<String> = self
            .labour_risk
            .keys()
            .chain(self.imports.keys())
            .filter(|path| path.starts_with(prefix))
            .cloned()
            .collect();
        paths.sort();
        paths.dedup();
        paths
    }
}
