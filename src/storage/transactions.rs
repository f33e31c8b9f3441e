//! Transaction repository
//!
//! Owns the in-memory ledger and writes it back under the `transactions`
//! key. The collection keeps insertion order; the id high-water mark is
//! stored with it so deleted ids are never handed out again.

use std::sync::{Arc, RwLock};

use serde::{Deserialize, Serialize};

use crate::error::{BudgetError, BudgetResult};
use crate::models::{ids, Transaction, TransactionId};

use super::backend::KeyValueStore;
use super::record::{load_record, save_record, TRANSACTIONS_KEY};

/// Persisted shape of the ledger
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LedgerRecord {
    /// Highest id ever issued
    #[serde(default)]
    pub last_id: u64,

    #[serde(default)]
    pub transactions: Vec<Transaction>,
}

#[derive(Debug)]
struct LedgerState {
    record: LedgerRecord,
    synced: bool,
}

/// Repository for transaction persistence
pub struct TransactionRepository {
    backend: Arc<dyn KeyValueStore>,
    state: RwLock<LedgerState>,
}

impl TransactionRepository {
    /// Create an empty repository over `backend`; call [`load`](Self::load) to read it
    pub fn new(backend: Arc<dyn KeyValueStore>) -> Self {
        Self {
            backend,
            state: RwLock::new(LedgerState {
                record: LedgerRecord::default(),
                synced: true,
            }),
        }
    }

    /// Replace the in-memory ledger with the stored one
    pub fn load(&self) -> BudgetResult<()> {
        let mut record: LedgerRecord = load_record(self.backend.as_ref(), TRANSACTIONS_KEY)?;

        // Older records may lack the high-water mark
        let max_id = record
            .transactions
            .iter()
            .map(|t| t.id.value())
            .max()
            .unwrap_or(0);
        record.last_id = record.last_id.max(max_id);

        let mut state = self.state.write().map_err(|e| {
            BudgetError::Persistence(format!("Failed to acquire write lock: {}", e))
        })?;
        state.record = record;
        state.synced = true;

        Ok(())
    }

    /// Write the ledger to the backend
    ///
    /// On failure the in-memory ledger is kept and marked out of sync.
    pub fn save(&self) -> BudgetResult<()> {
        let mut state = self.state.write().map_err(|e| {
            BudgetError::Persistence(format!("Failed to acquire write lock: {}", e))
        })?;

        match save_record(self.backend.as_ref(), TRANSACTIONS_KEY, &state.record) {
            Ok(()) => {
                state.synced = true;
                Ok(())
            }
            Err(e) => {
                state.synced = false;
                tracing::warn!(error = %e, "ledger is out of sync with storage");
                Err(e)
            }
        }
    }

    /// Whether the last write succeeded
    pub fn is_synced(&self) -> BudgetResult<bool> {
        let state = self.state.read().map_err(|e| {
            BudgetError::Persistence(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(state.synced)
    }

    /// Build and append a transaction under a freshly issued id
    pub fn insert_with<F>(&self, build: F) -> BudgetResult<Transaction>
    where
        F: FnOnce(TransactionId) -> Transaction,
    {
        let mut state = self.state.write().map_err(|e| {
            BudgetError::Persistence(format!("Failed to acquire write lock: {}", e))
        })?;

        let id = ids::next_id(state.record.last_id);
        let txn = build(TransactionId::from_raw(id));
        state.record.last_id = id;
        state.record.transactions.push(txn.clone());
        state.synced = false;

        Ok(txn)
    }

    /// Remove a transaction, returning it if it was present
    pub fn delete(&self, id: TransactionId) -> BudgetResult<Option<Transaction>> {
        let mut state = self.state.write().map_err(|e| {
            BudgetError::Persistence(format!("Failed to acquire write lock: {}", e))
        })?;

        let position = state.record.transactions.iter().position(|t| t.id == id);
        match position {
            Some(index) => {
                state.synced = false;
                Ok(Some(state.record.transactions.remove(index)))
            }
            None => Ok(None),
        }
    }

    /// Get a transaction by ID
    pub fn get(&self, id: TransactionId) -> BudgetResult<Option<Transaction>> {
        let state = self.state.read().map_err(|e| {
            BudgetError::Persistence(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(state.record.transactions.iter().find(|t| t.id == id).cloned())
    }

    /// All transactions in insertion order
    pub fn get_all(&self) -> BudgetResult<Vec<Transaction>> {
        let state = self.state.read().map_err(|e| {
            BudgetError::Persistence(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(state.record.transactions.clone())
    }

    /// Copy of the persisted shape, including the id high-water mark
    pub fn snapshot(&self) -> BudgetResult<LedgerRecord> {
        let state = self.state.read().map_err(|e| {
            BudgetError::Persistence(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(state.record.clone())
    }

    pub fn count(&self) -> BudgetResult<usize> {
        let state = self.state.read().map_err(|e| {
            BudgetError::Persistence(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(state.record.transactions.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, TransactionKind};
    use crate::storage::backend::{FileStore, MemoryStore};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn create_test_repo() -> (Arc<MemoryStore>, TransactionRepository) {
        let store = Arc::new(MemoryStore::new());
        let repo = TransactionRepository::new(store.clone());
        (store, repo)
    }

    fn expense(id: TransactionId, category: &str, major: i64) -> Transaction {
        Transaction::new(
            id,
            TransactionKind::Expense,
            category,
            Money::from_major(major),
            NaiveDate::from_ymd_opt(2025, 10, 5).unwrap(),
        )
    }

    #[test]
    fn test_empty_load() {
        let (_store, repo) = create_test_repo();
        repo.load().unwrap();
        assert_eq!(repo.count().unwrap(), 0);
        assert!(repo.is_synced().unwrap());
    }

    #[test]
    fn test_insert_with_issues_increasing_ids() {
        let (_store, repo) = create_test_repo();

        let a = repo.insert_with(|id| expense(id, "Продукты", 100)).unwrap();
        let b = repo.insert_with(|id| expense(id, "Связь", 200)).unwrap();

        assert!(b.id > a.id);
        let all = repo.get_all().unwrap();
        assert_eq!(all[0].id, a.id);
        assert_eq!(all[1].id, b.id);
        assert!(!repo.is_synced().unwrap());
    }

    #[test]
    fn test_deleted_id_is_not_reused() {
        let (_store, repo) = create_test_repo();

        let a = repo.insert_with(|id| expense(id, "Продукты", 100)).unwrap();
        repo.delete(a.id).unwrap();
        let b = repo.insert_with(|id| expense(id, "Продукты", 100)).unwrap();

        assert!(b.id > a.id);
    }

    #[test]
    fn test_delete_missing_returns_none() {
        let (_store, repo) = create_test_repo();
        assert!(repo.delete(TransactionId::from_raw(7)).unwrap().is_none());
    }

    #[test]
    fn test_save_and_reload() {
        let temp_dir = TempDir::new().unwrap();
        let backend: Arc<dyn KeyValueStore> = Arc::new(FileStore::new(temp_dir.path().to_path_buf()));
        let repo = TransactionRepository::new(backend.clone());

        let txn = repo
            .insert_with(|id| expense(id, "Транспорт", 3200).with_description("Проездной"))
            .unwrap();
        repo.save().unwrap();
        assert!(repo.is_synced().unwrap());

        let repo2 = TransactionRepository::new(backend);
        repo2.load().unwrap();

        assert_eq!(repo2.get_all().unwrap(), vec![txn.clone()]);
        assert_eq!(repo2.snapshot().unwrap(), repo.snapshot().unwrap());
    }

    #[test]
    fn test_high_water_mark_survives_reload() {
        let (store, repo) = create_test_repo();

        let a = repo.insert_with(|id| expense(id, "Продукты", 100)).unwrap();
        repo.delete(a.id).unwrap();
        repo.save().unwrap();

        let repo2 = TransactionRepository::new(store);
        repo2.load().unwrap();
        assert_eq!(repo2.snapshot().unwrap().last_id, a.id.value());

        let b = repo2.insert_with(|id| expense(id, "Продукты", 100)).unwrap();
        assert!(b.id > a.id);
    }

    #[test]
    fn test_load_derives_missing_high_water_mark() {
        let (store, repo) = create_test_repo();
        store
            .put(
                TRANSACTIONS_KEY,
                r#"{"transactions":[{"id":6,"type":"expense","category":"Дом и ЖКХ","amount":890000,"date":"2025-10-20","description":""}]}"#,
            )
            .unwrap();

        repo.load().unwrap();
        assert_eq!(repo.snapshot().unwrap().last_id, 6);
    }

    #[test]
    fn test_failed_save_keeps_mutation_and_reports_unsynced() {
        let (store, repo) = create_test_repo();
        store.set_reject_writes(true);

        repo.insert_with(|id| expense(id, "Продукты", 100)).unwrap();
        let err = repo.save().unwrap_err();

        assert!(err.is_persistence());
        assert_eq!(repo.count().unwrap(), 1);
        assert!(!repo.is_synced().unwrap());

        store.set_reject_writes(false);
        repo.save().unwrap();
        assert!(repo.is_synced().unwrap());
    }
}
