//! JSON Export functionality
//!
//! Exports the ledger, goals and theme as one versioned document.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::error::{BudgetError, BudgetResult};
use crate::models::{FinancialGoal, Theme, Transaction};
use crate::storage::Storage;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full database export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FullExport {
    pub schema_version: String,

    pub exported_at: DateTime<Utc>,

    /// Version of the application that wrote the export
    pub app_version: String,

    pub theme: Theme,

    pub transactions: Vec<Transaction>,

    pub goals: Vec<FinancialGoal>,

    pub metadata: ExportMetadata,
}

/// Counts and date range, for a quick look without reading every record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    pub transaction_count: usize,
    pub goal_count: usize,
    pub earliest_transaction: Option<String>,
    pub latest_transaction: Option<String>,
}

impl FullExport {
    /// Snapshot everything currently held by `storage`
    pub fn from_storage(storage: &Storage) -> BudgetResult<Self> {
        let transactions = storage.transactions.get_all()?;
        let goals = storage.goals.get_all()?;
        let theme = storage.load_theme()?;

        let earliest_transaction = transactions
            .iter()
            .map(|t| t.date)
            .min()
            .map(|d| d.to_string());
        let latest_transaction = transactions
            .iter()
            .map(|t| t.date)
            .max()
            .map(|d| d.to_string());

        let metadata = ExportMetadata {
            transaction_count: transactions.len(),
            goal_count: goals.len(),
            earliest_transaction,
            latest_transaction,
        };

        Ok(Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            theme,
            transactions,
            goals,
            metadata,
        })
    }
}

/// Export everything to JSON
pub fn export_full_json<W: Write>(
    storage: &Storage,
    writer: &mut W,
    pretty: bool,
) -> BudgetResult<()> {
    let export = FullExport::from_storage(storage)?;

    if pretty {
        serde_json::to_writer_pretty(writer, &export)
    } else {
        serde_json::to_writer(writer, &export)
    }
    .map_err(|e| BudgetError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::seed_sample_data;

    #[test]
    fn test_full_export() {
        let storage = Storage::in_memory();
        seed_sample_data(&storage).unwrap();

        let export = FullExport::from_storage(&storage).unwrap();

        assert_eq!(export.schema_version, EXPORT_SCHEMA_VERSION);
        assert_eq!(export.metadata.transaction_count, 6);
        assert_eq!(export.metadata.goal_count, 2);
        assert_eq!(export.metadata.earliest_transaction.as_deref(), Some("2025-10-01"));
        assert_eq!(export.metadata.latest_transaction.as_deref(), Some("2025-10-20"));
        assert_eq!(export.theme, Theme::Light);
    }

    #[test]
    fn test_json_export_round_trips() {
        let storage = Storage::in_memory();
        seed_sample_data(&storage).unwrap();

        let mut buffer = Vec::new();
        export_full_json(&storage, &mut buffer, true).unwrap();

        let parsed: FullExport = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(parsed.transactions, storage.transactions.get_all().unwrap());
        assert_eq!(parsed.goals, storage.goals.get_all().unwrap());
    }

    #[test]
    fn test_empty_export() {
        let storage = Storage::in_memory();
        let export = FullExport::from_storage(&storage).unwrap();

        assert!(export.transactions.is_empty());
        assert!(export.metadata.earliest_transaction.is_none());
    }
}
