//! Qualitative rating of the expense-to-income ratio

use serde::Serialize;
use std::fmt;

use crate::models::{Transaction, TransactionKind};

use super::totals::total_by_kind;

/// Financial health band
///
/// Bands are half-open on the ratio `expense / income`: a ratio exactly on a
/// boundary falls into the worse band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FinancialHealth {
    /// ratio < 0.5
    Excellent,
    /// 0.5 <= ratio < 0.8
    Good,
    /// 0.8 <= ratio < 1.0
    Stable,
    /// ratio >= 1.0
    AtRisk,
    /// No income recorded
    NoData,
}

impl FinancialHealth {
    /// Band for an expense-to-income ratio
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio < 0.5 {
            Self::Excellent
        } else if ratio < 0.8 {
            Self::Good
        } else if ratio < 1.0 {
            Self::Stable
        } else {
            Self::AtRisk
        }
    }

    /// Label shown on the dashboard
    pub fn label(&self) -> &'static str {
        match self {
            Self::Excellent => "Отлично",
            Self::Good => "Хорошо",
            Self::Stable => "Стабильно",
            Self::AtRisk => "Внимание",
            Self::NoData => "Нет данных",
        }
    }
}

impl fmt::Display for FinancialHealth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Rate the ledger by how much of the income its expenses consume
pub fn financial_health(transactions: &[Transaction]) -> FinancialHealth {
    let income = total_by_kind(transactions, TransactionKind::Income);
    let expense = total_by_kind(transactions, TransactionKind::Expense);

    match expense.ratio_to(income) {
        Some(ratio) => FinancialHealth::from_ratio(ratio),
        None => FinancialHealth::NoData,
    }
}
