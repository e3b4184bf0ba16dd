// Mon Oct 19 2026 - Alex

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("No composition to scan. Open or select a composition and try again.")]
    EmptyScope,
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type ScanResult<T> = Result<T, ScanError>;
