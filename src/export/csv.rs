//! CSV Export functionality
//!
//! One row per transaction in ledger order. Amounts are plain decimals so
//! spreadsheets read them as numbers.

use serde::Serialize;
use std::io::Write;

use crate::error::{BudgetError, BudgetResult};
use crate::storage::Storage;

#[derive(Serialize)]
struct TransactionRecord<'a> {
    id: u64,
    date: String,
    #[serde(rename = "type")]
    kind: String,
    category: &'a str,
    amount: String,
    description: &'a str,
}

/// Export all transactions to CSV
pub fn export_transactions_csv<W: Write>(storage: &Storage, writer: W) -> BudgetResult<()> {
    let transactions = storage.transactions.get_all()?;
    let mut csv_writer = csv::Writer::from_writer(writer);

    for txn in &transactions {
        csv_writer
            .serialize(TransactionRecord {
                id: txn.id.value(),
                date: txn.date.format("%Y-%m-%d").to_string(),
                kind: txn.kind.to_string(),
                category: &txn.category,
                amount: txn.amount.to_string(),
                description: &txn.description,
            })
            .map_err(|e| BudgetError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| BudgetError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{TransactionDraft, TransactionKind};
    use crate::services::LedgerService;

    #[test]
    fn test_export_transactions_csv() {
        let storage = Storage::in_memory();
        LedgerService::new(&storage)
            .add_transaction(
                &TransactionDraft::new(TransactionKind::Expense)
                    .category("Развлечения")
                    .amount("5600")
                    .date("2025-10-10")
                    .description("Кино, кафе"),
            )
            .unwrap();

        let mut buffer = Vec::new();
        export_transactions_csv(&storage, &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(lines[0], "id,date,type,category,amount,description");
        assert!(lines[1].ends_with(",2025-10-10,expense,Развлечения,5600.00,\"Кино, кафе\""));
    }

    #[test]
    fn test_empty_ledger_writes_nothing() {
        let storage = Storage::in_memory();

        let mut buffer = Vec::new();
        export_transactions_csv(&storage, &mut buffer).unwrap();
        assert!(buffer.is_empty());
    }
}
