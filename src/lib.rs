//! Family budget - a personal finance tracker
//!
//! Records income and expense transactions and savings goals, keeps them in a
//! local key-value store and derives the dashboard numbers (balance, category
//! breakdown, financial health) from the current ledger.
//!
//! # Architecture
//!
//! - `config`: path resolution and user settings
//! - `error`: the [`BudgetError`] type
//! - `models`: transactions, goals, money, ids and the category taxonomy
//! - `storage`: key-value backends and the per-collection repositories
//! - `services`: validation and mutation of the ledger and goals
//! - `analytics`: pure functions over a transaction snapshot
//! - `reports`: the dashboard built from the analytics
//! - `audit`: append-only log of every mutation
//! - `display`, `export`, `cli`: terminal output, file export and commands
//!
//! # Example
//!
//! ```rust
//! use family_budget::analytics::{balance, financial_health, FinancialHealth};
//! use family_budget::models::{TransactionDraft, TransactionKind};
//! use family_budget::services::LedgerService;
//! use family_budget::storage::Storage;
//!
//! let storage = Storage::in_memory();
//! let ledger = LedgerService::new(&storage);
//!
//! ledger.add_transaction(
//!     &TransactionDraft::new(TransactionKind::Income)
//!         .category("Зарплата")
//!         .amount("85000")
//!         .date("2025-10-01"),
//! )?;
//!
//! let transactions = ledger.list_transactions()?;
//! assert_eq!(financial_health(&transactions), FinancialHealth::Excellent);
//! assert_eq!(balance(&transactions).major(), 85000);
//! # Ok::<(), family_budget::BudgetError>(())
//! ```

pub mod analytics;
pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{BudgetError, BudgetResult};
