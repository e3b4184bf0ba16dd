// Mon Oct 19 2026 - Alex

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid composition '{name}': {reason}")]
    InvalidComposition { name: String, reason: String },
}

pub type DocumentResult<T> = Result<T, DocumentError>;
