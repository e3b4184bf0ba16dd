// Mon Oct 19 2026 - Alex

pub mod error;
pub mod evaluate;
pub mod heuristics;
pub mod path;
pub mod record;
pub mod references;
pub mod scanner;
pub mod snippet;
pub mod walker;

#[cfg(test)]
pub(crate) mod fixtures;

pub use error::{ScanError, ScanResult};
pub use evaluate::{representative_time, EvaluationForcer};
pub use heuristics::HeuristicClassifier;
pub use path::{PathTracker, PropertyPath};
pub use record::{DiagnosticRecord, ScanStatistics};
pub use references::ReferenceExtractor;
pub use scanner::{ExpressionScanner, ScanOutput};
pub use walker::TreeWalker;
