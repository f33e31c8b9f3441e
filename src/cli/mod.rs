//! CLI command handlers
//!
//! Bridges the clap argument parsing with the service layer.

pub mod audit;
pub mod export;
pub mod goal;
pub mod report;
pub mod transaction;

pub use audit::handle_audit_command;
pub use export::{handle_export_command, ExportFormat};
pub use goal::{handle_goal_command, GoalCommands};
pub use report::{handle_categories_command, handle_monthly_command, handle_summary_command};
pub use transaction::{handle_transaction_command, TransactionCommands};
