//! Display formatting for terminal output
//!
//! Tables for transactions, goals and category breakdowns, plus the small
//! helpers (bars, percentages, headers) the dashboard shares with them.

pub mod category;
pub mod goal;
pub mod report;
pub mod transaction;

pub use category::{format_category_table, format_monthly_table};
pub use goal::{format_goal_table, format_progress};
pub use transaction::{format_signed_amount, format_transaction_details, format_transaction_table};
