// Mon Oct 19 2026 - Alex

use crate::document::ScanScope;
use crate::scan::snippet::DEFAULT_SNIPPET_LINES;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid value: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    pub scope: ScanScope,
    pub snippet_lines: usize,
    pub tool_name: String,
    pub host_version: Option<String>,
    pub output_dir: PathBuf,
    pub file_prefix: String,
    pub save_report: bool,
    pub json_output: Option<PathBuf>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            scope: ScanScope::ActiveComposition,
            snippet_lines: DEFAULT_SNIPPET_LINES,
            tool_name: "Expression Diagnostics".to_string(),
            host_version: None,
            output_dir: PathBuf::from("."),
            file_prefix: "Expression_Diagnostics_".to_string(),
            save_report: true,
            json_output: None,
        }
    }
}

impl ScanConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        let config: ScanConfig = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_scope(mut self, scope: ScanScope) -> Self {
        self.scope = scope;
        self
    }

    pub fn with_snippet_lines(mut self, lines: usize) -> Self {
        self.snippet_lines = lines;
        self
    }

    pub fn with_host_version(mut self, version: &str) -> Self {
        self.host_version = Some(version.to_string());
        self
    }

    pub fn with_output_dir(mut self, dir: PathBuf) -> Self {
        self.output_dir = dir;
        self
    }

    pub fn with_save_report(mut self, save: bool) -> Self {
        self.save_report = save;
        self
    }

    pub fn with_json_output(mut self, path: PathBuf) -> Self {
        self.json_output = Some(path);
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.snippet_lines == 0 {
            return Err(ConfigError::Invalid("snippet_lines must be greater than 0".to_string()));
        }
        if self.tool_name.trim().is_empty() {
            return Err(ConfigError::Invalid("tool_name must not be empty".to_string()));
        }
        if self.file_prefix.contains(['/', '\\']) {
            return Err(ConfigError::Invalid(format!(
                "file_prefix must not contain path separators: {}",
                self.file_prefix
            )));
        }
        Ok(())
    }
}
