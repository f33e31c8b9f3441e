//! Expense breakdown by category

use serde::Serialize;

use crate::models::{Money, Transaction};

/// Summed expenses of one category
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryTotal {
    pub category: String,
    pub total: Money,
    /// Number of expense transactions in the category
    pub count: usize,
    /// Share of all expenses, 0-100
    pub share_percent: f64,
}

/// Expense totals per category, largest first
///
/// Only categories with at least one expense appear. Equal totals keep the
/// order in which their category first shows up in the ledger.
pub fn expenses_by_category(transactions: &[Transaction]) -> Vec<CategoryTotal> {
    let mut totals: Vec<CategoryTotal> = Vec::new();

    for txn in transactions.iter().filter(|t| t.is_expense()) {
        match totals.iter_mut().find(|c| c.category == txn.category) {
            Some(entry) => {
                entry.total += txn.amount;
                entry.count += 1;
            }
            None => totals.push(CategoryTotal {
                category: txn.category.clone(),
                total: txn.amount,
                count: 1,
                share_percent: 0.0,
            }),
        }
    }

    let all: Money = totals.iter().map(|c| c.total).sum();
    for entry in &mut totals {
        entry.share_percent = entry
            .total
            .ratio_to(all)
            .map(|r| r * 100.0)
            .unwrap_or(0.0);
    }

    // Stable sort keeps first-seen order among ties
    totals.sort_by(|a, b| b.total.cmp(&a.total));
    totals
}

/// The `n` largest expense categories
pub fn top_categories(transactions: &[Transaction], n: usize) -> Vec<CategoryTotal> {
    let mut totals = expenses_by_category(transactions);
    totals.truncate(n);
    totals
}

/// Name of the largest expense category
pub fn top_category(transactions: &[Transaction]) -> Option<String> {
    expenses_by_category(transactions)
        .into_iter()
        .next()
        .map(|c| c.category)
}
