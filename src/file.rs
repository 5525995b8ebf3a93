// src/file.rs

use std::{
    fs,
    path::{Path, PathBuf},
};

use tracing::{debug, info};

use crate::check::ResultLog;
use crate::config::options::ExportOptions;
use crate::csv::export_csv;
use crate::error::ExportError;

/// Write the CSV export to `export.out_path()`, creating the directory if
/// needed. Returns the path written, or `None` for an empty log (no file).
pub fn write_export(log: &ResultLog, export: &ExportOptions) -> Result<Option<PathBuf>, ExportError> {
    let Some(bytes) = export_csv(log) else {
        debug!("Export: Log is empty, nothing written");
        return Ok(None);
    };

    let path = export.out_path();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    fs::write(&path, &bytes)?;
    info!(
        rows = log.len(),
        bytes = bytes.len(),
        mime = export.mime(),
        "Export: Wrote {}", path.display()
    );
    Ok(Some(path))
}

pub fn ensure_directory(dir: &Path) -> Result<(), ExportError> {
    if dir.exists() && !dir.is_dir() {
        return Err(ExportError::NotADirectory(dir.to_path_buf()));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}
