//! Storage layer
//!
//! Each collection lives under one key of a [`KeyValueStore`]: the ledger
//! under `transactions`, goals under `goals` and the theme under `theme`.
//! On disk every key is a JSON file written atomically.

pub mod backend;
pub mod file_io;
pub mod goals;
pub mod init;
pub mod record;
pub mod transactions;

pub use backend::{FileStore, KeyValueStore, MemoryStore};
pub use goals::{GoalRecord, GoalRepository};
pub use init::{initialize_storage, needs_initialization};
pub use transactions::{LedgerRecord, TransactionRepository};

use std::sync::Arc;

use serde::Serialize;

use crate::audit::{generate_diff, AuditEntry, AuditLogger, EntityType};
use crate::config::paths::BudgetPaths;
use crate::error::BudgetResult;
use crate::models::Theme;

use record::{load_record, save_record, THEME_KEY};

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    backend: Arc<dyn KeyValueStore>,
    audit: Option<AuditLogger>,
    pub transactions: TransactionRepository,
    pub goals: GoalRepository,
}

impl Storage {
    /// Open file-backed storage under `paths`, with audit logging
    pub fn open(paths: &BudgetPaths) -> BudgetResult<Self> {
        paths.ensure_directories()?;

        let backend: Arc<dyn KeyValueStore> = Arc::new(FileStore::new(paths.data_dir()));
        let mut storage = Self::with_backend(backend);
        storage.audit = Some(AuditLogger::new(paths.audit_log()));

        Ok(storage)
    }

    /// Storage over an arbitrary backend, without audit logging
    pub fn with_backend(backend: Arc<dyn KeyValueStore>) -> Self {
        Self {
            transactions: TransactionRepository::new(backend.clone()),
            goals: GoalRepository::new(backend.clone()),
            backend,
            audit: None,
        }
    }

    /// Process-local storage, mostly for tests
    pub fn in_memory() -> Self {
        Self::with_backend(Arc::new(MemoryStore::new()))
    }

    /// Attach an audit log
    pub fn with_audit(mut self, logger: AuditLogger) -> Self {
        self.audit = Some(logger);
        self
    }

    pub fn audit(&self) -> Option<&AuditLogger> {
        self.audit.as_ref()
    }

    /// Load every collection from the backend
    pub fn load_all(&self) -> BudgetResult<()> {
        self.transactions.load()?;
        self.goals.load()?;
        tracing::debug!(
            transactions = self.transactions.count()?,
            goals = self.goals.count()?,
            "storage loaded"
        );
        Ok(())
    }

    /// Whether every collection matches what was last written
    pub fn is_synced(&self) -> BudgetResult<bool> {
        Ok(self.transactions.is_synced()? && self.goals.is_synced()?)
    }

    /// Re-write every collection, e.g. after an earlier write failed
    pub fn sync_all(&self) -> BudgetResult<()> {
        self.transactions.save()?;
        self.goals.save()?;
        Ok(())
    }

    /// Stored theme; defaults to light when none was saved
    pub fn load_theme(&self) -> BudgetResult<Theme> {
        load_record(self.backend.as_ref(), THEME_KEY)
    }

    pub fn save_theme(&self, theme: Theme) -> BudgetResult<()> {
        let before = self.load_theme().unwrap_or_default();
        save_record(self.backend.as_ref(), THEME_KEY, &theme)?;

        if before != theme {
            self.log_update(EntityType::Theme, THEME_KEY, None, &before, &theme);
        }
        Ok(())
    }

    /// Record a creation in the audit log
    ///
    /// Audit failures are logged and never fail the operation that caused them.
    pub fn log_create<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) {
        self.write_audit(AuditEntry::create(entity_type, entity_id, entity_name, entity));
    }

    /// Record an update, with a field diff between the two states
    pub fn log_update<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        before: &T,
        after: &T,
    ) {
        let diff = match (serde_json::to_value(before), serde_json::to_value(after)) {
            (Ok(b), Ok(a)) => generate_diff(&b, &a),
            _ => None,
        };
        self.write_audit(AuditEntry::update(
            entity_type,
            entity_id,
            entity_name,
            before,
            after,
            diff,
        ));
    }

    pub fn log_delete<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) {
        self.write_audit(AuditEntry::delete(entity_type, entity_id, entity_name, entity));
    }

    fn write_audit(&self, entry: AuditEntry) {
        let Some(logger) = &self.audit else {
            return;
        };
        if let Err(e) = logger.log(&entry) {
            tracing::warn!(
                error = %e,
                entity = %entry.entity_id,
                operation = %entry.operation,
                "failed to write audit entry"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::Operation;
    use crate::models::{Money, Transaction, TransactionKind};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    #[test]
    fn test_open_creates_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::open(&paths).unwrap();

        assert!(temp_dir.path().join("data").exists());
        assert!(storage.audit().is_some());
    }

    #[test]
    fn test_theme_defaults_to_light() {
        let storage = Storage::in_memory();
        assert_eq!(storage.load_theme().unwrap(), Theme::Light);
    }

    #[test]
    fn test_theme_persists() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetPaths::with_base_dir(temp_dir.path().to_path_buf());

        Storage::open(&paths).unwrap().save_theme(Theme::Dark).unwrap();

        let reopened = Storage::open(&paths).unwrap();
        assert_eq!(reopened.load_theme().unwrap(), Theme::Dark);

        let raw = std::fs::read_to_string(paths.data_dir().join("theme.json")).unwrap();
        assert_eq!(raw, "\"dark\"");
    }

    #[test]
    fn test_theme_change_is_audited() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::open(&paths).unwrap();

        storage.save_theme(Theme::Dark).unwrap();
        storage.save_theme(Theme::Dark).unwrap();

        let entries = storage.audit().unwrap().read_all().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].entity_type, EntityType::Theme);
        assert_eq!(
            entries[0].diff_summary.as_deref(),
            Some("\"light\" -> \"dark\"")
        );
    }

    #[test]
    fn test_load_all_reads_both_collections() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetPaths::with_base_dir(temp_dir.path().to_path_buf());

        let storage = Storage::open(&paths).unwrap();
        storage
            .transactions
            .insert_with(|id| {
                Transaction::new(
                    id,
                    TransactionKind::Income,
                    "Зарплата",
                    Money::from_major(85000),
                    NaiveDate::from_ymd_opt(2025, 10, 1).unwrap(),
                )
            })
            .unwrap();
        storage.sync_all().unwrap();

        let reopened = Storage::open(&paths).unwrap();
        reopened.load_all().unwrap();
        assert_eq!(reopened.transactions.count().unwrap(), 1);
        assert_eq!(reopened.goals.count().unwrap(), 0);
        assert!(reopened.is_synced().unwrap());
    }

    #[test]
    fn test_audit_helpers_write_entries() {
        let temp_dir = TempDir::new().unwrap();
        let logger = AuditLogger::new(temp_dir.path().join("audit.log"));
        let storage = Storage::in_memory().with_audit(logger);

        storage.log_create(EntityType::Goal, "goal-1", None, &serde_json::json!({"a": 1}));
        storage.log_delete(EntityType::Goal, "goal-1", None, &serde_json::json!({"a": 1}));

        let ops: Vec<_> = storage
            .audit()
            .unwrap()
            .read_all()
            .unwrap()
            .iter()
            .map(|e| e.operation)
            .collect();
        assert_eq!(ops, vec![Operation::Create, Operation::Delete]);
    }

    #[test]
    fn test_unwritable_audit_log_does_not_fail() {
        let temp_dir = TempDir::new().unwrap();
        // A directory where the log file should be makes every append fail
        let log_path = temp_dir.path().join("audit.log");
        std::fs::create_dir_all(&log_path).unwrap();

        let storage = Storage::in_memory().with_audit(AuditLogger::new(log_path));
        storage.log_create(EntityType::Goal, "goal-1", None, &serde_json::json!({}));
    }
}
