// Mon Oct 19 2026 - Alex

use crate::report::error::ReportResult;
use crate::report::writer::write_text;
use crate::report::ScanReport;
use std::path::Path;

pub fn to_json(report: &ScanReport) -> ReportResult<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

pub fn write_json<P: AsRef<Path>>(report: &ScanReport, path: P) -> ReportResult<()> {
    let json = to_json(report)?;
    write_text(path.as_ref(), &json)?;
    log::info!("JSON report saved to {}", path.as_ref().display());
    Ok(())
}
