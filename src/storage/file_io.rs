//! File I/O utilities with atomic writes
//!
//! Provides safe file operations that won't corrupt data on failure.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::BudgetError;

/// Read a whole file, returning `None` if it doesn't exist
pub fn read_if_exists<P: AsRef<Path>>(path: P) -> Result<Option<String>, BudgetError> {
    let path = path.as_ref();

    if !path.exists() {
        return Ok(None);
    }

    fs::read_to_string(path).map(Some).map_err(|e| {
        BudgetError::Persistence(format!("Failed to read {}: {}", path.display(), e))
    })
}

/// Write text to a file atomically (write to temp, then rename)
///
/// The file is either completely written or not modified at all.
pub fn write_atomic<P: AsRef<Path>>(path: P, contents: &str) -> Result<(), BudgetError> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            BudgetError::Persistence(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Temp file must live in the same directory for the rename to be atomic
    let temp_path = path.with_extension("json.tmp");

    let file = File::create(&temp_path)
        .map_err(|e| BudgetError::Persistence(format!("Failed to create temp file: {}", e)))?;

    let mut writer = BufWriter::new(file);
    writer
        .write_all(contents.as_bytes())
        .map_err(|e| BudgetError::Persistence(format!("Failed to write data: {}", e)))?;

    writer
        .flush()
        .map_err(|e| BudgetError::Persistence(format!("Failed to flush data: {}", e)))?;

    writer
        .get_ref()
        .sync_all()
        .map_err(|e| BudgetError::Persistence(format!("Failed to sync data: {}", e)))?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        BudgetError::Persistence(format!("Failed to rename temp file: {}", e))
    })?;

    Ok(())
}
