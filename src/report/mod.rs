// Mon Oct 19 2026 - Alex

pub mod error;
pub mod json;
pub mod render;
pub mod writer;

pub use error::{ReportError, ReportResult};
pub use render::ReportRenderer;
pub use writer::ReportWriter;

use crate::document::ScanScope;
use crate::scan::{DiagnosticRecord, ScanStatistics};
use chrono::{DateTime, Local};
use serde::Serialize;

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d_%H-%M-%S";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScanMetadata {
    pub tool_name: String,
    pub host_version: String,
    pub timestamp: String,
    pub scope: ScanScope,
}

impl ScanMetadata {
    pub fn now(tool_name: &str, host_version: &str, scope: ScanScope) -> Self {
        Self::at(tool_name, host_version, scope, Local::now())
    }

    pub fn at(tool_name: &str, host_version: &str, scope: ScanScope, time: DateTime<Local>) -> Self {
        Self {
            tool_name: tool_name.to_string(),
            host_version: host_version.to_string(),
            timestamp: time.format(TIMESTAMP_FORMAT).to_string(),
            scope,
        }
    }
}

/// Finished result of one scan. Records are in traversal order.
#[derive(Debug, Clone, Serialize)]
pub struct ScanReport {
    metadata: ScanMetadata,
    records: Vec<DiagnosticRecord>,
    statistics: ScanStatistics,
}

impl ScanReport {
    pub fn new(metadata: ScanMetadata, records: Vec<DiagnosticRecord>, statistics: ScanStatistics) -> Self {
        Self { metadata, records, statistics }
    }

    pub fn metadata(&self) -> &ScanMetadata {
        &self.metadata
    }

    pub fn records(&self) -> &[DiagnosticRecord] {
        &self.records
    }

    pub fn statistics(&self) -> &ScanStatistics {
        &self.statistics
    }

    pub fn is_clean(&self) -> bool {
        self.records.is_empty()
    }

    pub fn render(&self) -> String {
        ReportRenderer::new().render(&self.records, &self.metadata)
    }
}
