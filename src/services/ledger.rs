//! Ledger service
//!
//! Validates drafts, mutates the transaction collection and persists it.
//! A failed write leaves the mutation in place; the returned
//! [`BudgetError::Persistence`] tells the caller the ledger is out of sync.

use crate::audit::EntityType;
use crate::error::{BudgetError, BudgetResult};
use crate::models::{
    is_known_category, DraftError, Money, Transaction, TransactionDraft, TransactionId,
};
use crate::storage::Storage;

/// Service for the transaction ledger
pub struct LedgerService<'a> {
    storage: &'a Storage,
    enforce_taxonomy: bool,
}

impl<'a> LedgerService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self {
            storage,
            enforce_taxonomy: false,
        }
    }

    /// Reject categories outside the allowed set for the transaction type
    pub fn with_taxonomy_enforced(mut self, enforce: bool) -> Self {
        self.enforce_taxonomy = enforce;
        self
    }

    /// Validate a draft and append it to the ledger
    ///
    /// Every invalid field is reported at once; nothing is written then.
    pub fn add_transaction(&self, draft: &TransactionDraft) -> BudgetResult<Transaction> {
        let (amount, date) = self.validate(draft)?;

        let txn = self.storage.transactions.insert_with(|id| {
            Transaction::new(id, draft.kind, draft.category.trim(), amount, date)
                .with_description(draft.description.trim())
        })?;

        tracing::debug!(
            id = %txn.id,
            kind = %txn.kind,
            category = %txn.category,
            amount = %txn.amount,
            "transaction added"
        );
        let saved = self.storage.transactions.save();
        self.storage.log_create(
            EntityType::Transaction,
            txn.id.to_string(),
            Some(txn.category.clone()),
            &txn,
        );

        saved.map(|()| txn)
    }

    /// Remove a transaction by id
    ///
    /// Deleting an id that is not in the ledger is not an error. The ledger is
    /// written either way. Returns the removed transaction, if any.
    pub fn delete_transaction(&self, id: TransactionId) -> BudgetResult<Option<Transaction>> {
        let removed = self.storage.transactions.delete(id)?;

        let saved = self.storage.transactions.save();
        match &removed {
            Some(txn) => {
                tracing::debug!(id = %id, "transaction deleted");
                self.storage.log_delete(
                    EntityType::Transaction,
                    id.to_string(),
                    Some(txn.category.clone()),
                    txn,
                );
            }
            None => tracing::debug!(id = %id, "delete of unknown transaction ignored"),
        }

        saved.map(|()| removed)
    }

    /// All transactions in insertion order
    pub fn list_transactions(&self) -> BudgetResult<Vec<Transaction>> {
        self.storage.transactions.get_all()
    }

    pub fn get_transaction(&self, id: TransactionId) -> BudgetResult<Option<Transaction>> {
        self.storage.transactions.get(id)
    }

    pub fn count(&self) -> BudgetResult<usize> {
        self.storage.transactions.count()
    }

    pub fn is_synced(&self) -> BudgetResult<bool> {
        self.storage.transactions.is_synced()
    }

    /// Retry writing the ledger after an earlier failure
    pub fn sync(&self) -> BudgetResult<()> {
        self.storage.transactions.save()
    }

    fn validate(&self, draft: &TransactionDraft) -> BudgetResult<(Money, chrono::NaiveDate)> {
        let mut errors = Vec::new();
        let parsed = draft.validate().map_err(|e| errors.extend(e));

        let category = draft.category.trim();
        let unknown = !category.is_empty() && !is_known_category(draft.kind, category);
        if unknown && self.enforce_taxonomy {
            errors.push(DraftError::UnknownCategory {
                field: "category",
                input: category.to_string(),
            });
        }

        match parsed {
            Ok(values) if errors.is_empty() => {
                if unknown {
                    tracing::warn!(
                        kind = %draft.kind,
                        category,
                        "category is outside the usual set for this type"
                    );
                }
                Ok(values)
            }
            _ => Err(BudgetError::from(errors)),
        }
    }
}
