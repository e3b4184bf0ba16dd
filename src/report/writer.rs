// Mon Oct 19 2026 - Alex

use crate::report::error::{ReportError, ReportResult};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Saves rendered reports as `<dir>/<prefix><timestamp>.txt`.
pub struct ReportWriter {
    dir: PathBuf,
    prefix: String,
}

impl ReportWriter {
    pub fn new<P: AsRef<Path>>(dir: P, prefix: &str) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
            prefix: prefix.to_string(),
        }
    }

    pub fn path_for(&self, timestamp: &str) -> PathBuf {
        self.dir.join(format!("{}{}.txt", self.prefix, timestamp))
    }

    pub fn write(&self, report: &str, timestamp: &str) -> ReportResult<PathBuf> {
        let path = self.path_for(timestamp);
        write_text(&path, report)?;
        log::info!("Report saved to {}", path.display());
        Ok(path)
    }
}

pub(crate) fn write_text(path: &Path, text: &str) -> ReportResult<()> {
    let io_err = |source| ReportError::Io { path: path.to_path_buf(), source };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(io_err)?;
    }

    let file = File::create(path).map_err(io_err)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(text.as_bytes()).map_err(io_err)?;
    writer.flush().map_err(io_err)?;
    Ok(())
}
