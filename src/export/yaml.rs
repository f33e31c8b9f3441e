//! YAML Export functionality
//!
//! Same document as the JSON export, in a form that is easier to read.

use std::io::Write;

use crate::error::{BudgetError, BudgetResult};
use crate::export::json::FullExport;
use crate::storage::Storage;

/// Export everything to YAML, preceded by a comment header
pub fn export_full_yaml<W: Write>(storage: &Storage, writer: &mut W) -> BudgetResult<()> {
    let export = FullExport::from_storage(storage)?;

    write!(
        writer,
        "# Family budget export\n# Generated: {}\n# App version: {}\n\n",
        export.exported_at, export.app_version
    )
    .map_err(|e| BudgetError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &export).map_err(|e| BudgetError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::seed_sample_data;

    #[test]
    fn test_yaml_export() {
        let storage = Storage::in_memory();
        seed_sample_data(&storage).unwrap();

        let mut buffer = Vec::new();
        export_full_yaml(&storage, &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();

        assert!(text.starts_with("# Family budget export"));
        assert!(text.contains("schema_version"));
        assert!(text.contains("Новый ноутбук"));

        let parsed: FullExport = serde_yaml::from_str(&text).unwrap();
        assert_eq!(parsed.transactions.len(), 6);
    }
}
