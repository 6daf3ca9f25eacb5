//! Flat UTF-8 text export.

use crate::error::FoldermapError;
use std::fs;
use std::path::Path;
use tracing::info;

/// Write rendered text to `output`, creating parent directories as needed.
pub fn write_export(output: &Path, text: &str) -> Result<(), FoldermapError> {
    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| {
                FoldermapError::ExportError(format!(
                    "Failed to create export directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }
    fs::write(output, text).map_err(|e| {
        FoldermapError::ExportError(format!("Failed to write {}: {}", output.display(), e))
    })?;
    info!(path = %output.display(), bytes = text.len(), "export written");
    Ok(())
}
