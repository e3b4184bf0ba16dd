// Mon Oct 19 2026 - Alex

use crate::scan::path::PropertyPath;
use serde::Serialize;

/// One faulting property. Only built when at least one of `error`,
/// `missing_references` or `note` carries something.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiagnosticRecord {
    pub composition: String,
    pub layer_index: usize,
    pub layer_name: String,
    pub property_path: PropertyPath,
    pub match_name: String,
    pub error: Option<String>,
    pub missing_references: Vec<String>,
    pub note: Option<String>,
    pub snippet: String,
}

impl DiagnosticRecord {
    pub fn has_findings(&self) -> bool {
        self.error.is_some() || !self.missing_references.is_empty() || self.note.is_some()
    }

    pub fn sorted_missing_references(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.missing_references.iter().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ScanStatistics {
    pub compositions: usize,
    pub layers: usize,
    pub expressions: usize,
    pub errors: usize,
    pub missing_references: usize,
    pub notes: usize,
    pub records: usize,
}

impl ScanStatistics {
    pub fn record(&mut self, record: &DiagnosticRecord) {
        self.records += 1;
        if record.error.is_some() {
            self.errors += 1;
        }
        if !record.missing_references.is_empty() {
            self.missing_references += 1;
        }
        if record.note.is_some() {
            self.notes += 1;
        }
    }
}
