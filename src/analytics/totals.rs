//! Sums over a transaction snapshot

use crate::error::{BudgetError, BudgetResult};
use crate::models::{Money, Transaction, TransactionKind};

/// Sum of the amounts of one kind; zero for an empty ledger
pub fn total_by_kind(transactions: &[Transaction], kind: TransactionKind) -> Money {
    transactions
        .iter()
        .filter(|t| t.kind == kind)
        .map(|t| t.amount)
        .sum()
}

/// Income total minus expense total
pub fn balance(transactions: &[Transaction]) -> Money {
    transactions.iter().map(Transaction::signed_amount).sum()
}

/// Expenses as a whole percentage of income, 0 when there is no income
pub fn expense_ratio_percent(transactions: &[Transaction]) -> i64 {
    let income = total_by_kind(transactions, TransactionKind::Income);
    let expense = total_by_kind(transactions, TransactionKind::Expense);

    expense
        .ratio_to(income)
        .map(|ratio| (ratio * 100.0).round() as i64)
        .unwrap_or(0)
}

/// Expense total spread evenly over `period_days`
pub fn daily_average_expense(transactions: &[Transaction], period_days: u32) -> BudgetResult<Money> {
    if period_days == 0 {
        return Err(BudgetError::invalid_field(
            "period_days",
            "period_days must be greater than zero",
        ));
    }

    Ok(total_by_kind(transactions, TransactionKind::Expense).div_rounded(period_days))
}
