//! Analytics over a transaction snapshot
//!
//! Every function here is pure: it takes a slice of transactions, derives a
//! value from it and touches neither storage nor the input.

pub mod categories;
pub mod health;
pub mod timeline;
pub mod totals;

pub use categories::{expenses_by_category, top_categories, top_category, CategoryTotal};
pub use health::{financial_health, FinancialHealth};
pub use timeline::{monthly_totals, sorted_by_date, MonthlyTotals};
pub use totals::{balance, daily_average_expense, expense_ratio_percent, total_by_kind};
