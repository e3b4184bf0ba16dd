// Mon Oct 19 2026 - Alex

use crate::report::ScanMetadata;
use crate::scan::snippet::escape_control;
use crate::scan::DiagnosticRecord;

pub const RULE: &str = "----------------------------------------";

pub const NO_ISSUES: &str = "No expression issues found.";

pub const REFERENCE_DELIMITER: &str = ", ";

/// Line-oriented plain text report. Rendering is pure; two scans of the
/// same document differ only in the timestamp line.
pub struct ReportRenderer;

impl ReportRenderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, records: &[DiagnosticRecord], metadata: &ScanMetadata) -> String {
        let mut lines = self.header(metadata);

        if records.is_empty() {
            lines.push(NO_ISSUES.to_string());
        } else {
            for (i, record) in records.iter().enumerate() {
                lines.extend(self.record(i + 1, record));
                lines.push(RULE.to_string());
            }
        }

        lines.join("\n")
    }

    fn header(&self, metadata: &ScanMetadata) -> Vec<String> {
        vec![
            escape_control(&metadata.tool_name),
            format!("Host Version: {}", escape_control(&metadata.host_version)),
            format!("Timestamp: {}", metadata.timestamp),
            format!("Scope: {}", metadata.scope.label()),
            RULE.to_string(),
        ]
    }

    fn record(&self, number: usize, record: &DiagnosticRecord) -> Vec<String> {
        let mut lines = vec![
            format!("#{}", number),
            format!("Comp:      {}", escape_control(&record.composition)),
            format!("Layer [{}]: {}", record.layer_index, escape_control(&record.layer_name)),
            format!(
                "Property:  {}  ({})",
                escape_control(&record.property_path.to_string()),
                escape_control(&record.match_name)
            ),
        ];

        if let Some(error) = &record.error {
            lines.push(format!("Error:     {}", escape_control(error)));
        }
        if !record.missing_references.is_empty() {
            let names = record.sorted_missing_references().join(REFERENCE_DELIMITER);
            lines.push(format!("Missing thisComp.layer refs: {}", escape_control(&names)));
        }
        if let Some(note) = &record.note {
            lines.push(format!("Note:      {}", escape_control(note)));
        }
        if !record.snippet.is_empty() {
            lines.push(format!("Expr Snip: {}", record.snippet));
        }
        lines
    }
}

impl Default for ReportRenderer {
    fn default() -> Self {
        Self::new()
    }
}
