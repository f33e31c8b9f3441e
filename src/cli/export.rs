//! CLI command for data export

use clap::ValueEnum;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use crate::error::{BudgetError, BudgetResult};
use crate::export::{export_full_json, export_full_yaml, export_transactions_csv};
use crate::storage::Storage;

/// Export format options
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ExportFormat {
    /// Transactions as CSV
    Csv,
    /// Everything as JSON
    Json,
    /// Everything as YAML
    Yaml,
}

/// Write an export to `output`, or to stdout when no file is given
pub fn handle_export_command(
    storage: &Storage,
    format: ExportFormat,
    output: Option<PathBuf>,
) -> BudgetResult<()> {
    match &output {
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                BudgetError::Export(format!("Failed to create {}: {}", path.display(), e))
            })?;
            let mut writer = BufWriter::new(file);
            write_export(storage, format, &mut writer)?;
            writer
                .flush()
                .map_err(|e| BudgetError::Export(e.to_string()))?;
            println!("Exported {:?} to {}", format, path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            write_export(storage, format, &mut writer)?;
            writeln!(writer).map_err(|e| BudgetError::Export(e.to_string()))?;
        }
    }

    Ok(())
}

fn write_export<W: Write>(storage: &Storage, format: ExportFormat, writer: &mut W) -> BudgetResult<()> {
    match format {
        ExportFormat::Csv => export_transactions_csv(storage, writer),
        ExportFormat::Json => export_full_json(storage, writer, true),
        ExportFormat::Yaml => export_full_yaml(storage, writer),
    }
}
