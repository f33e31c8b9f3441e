//! Reports
//!
//! Composite views built from the analytics functions.

pub mod dashboard;

pub use dashboard::{DashboardReport, GoalProgress};
