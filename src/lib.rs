// Mon Oct 19 2026 - Alex

pub mod config;
pub mod document;
pub mod report;
pub mod scan;
pub mod utils;

pub use config::ScanConfig;
pub use document::{load_project, Project, ScanScope, SimulatedRuntime};
pub use report::{ReportRenderer, ReportWriter, ScanReport};
pub use scan::{DiagnosticRecord, ExpressionScanner, ScanError};
