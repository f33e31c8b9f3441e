//! Core data models
//!
//! The budgeting domain: transactions, savings goals, money amounts, the
//! category taxonomy and the theme preference.

pub mod category;
pub mod draft;
pub mod goal;
pub mod ids;
pub mod money;
pub mod theme;
pub mod transaction;

pub use category::{categories_for, is_known_category, EXPENSE_CATEGORIES, INCOME_CATEGORIES};
pub use draft::DraftError;
pub use goal::{FinancialGoal, GoalDraft};
pub use ids::{GoalId, TransactionId};
pub use money::Money;
pub use theme::Theme;
pub use transaction::{Transaction, TransactionDraft, TransactionKind};
