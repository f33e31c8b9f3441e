//! Date ordering and per-month totals

use serde::Serialize;
use std::collections::BTreeMap;

use crate::models::{Money, Transaction, TransactionKind};

/// Transactions newest first; same-date transactions keep their input order
pub fn sorted_by_date(transactions: &[Transaction]) -> Vec<Transaction> {
    let mut sorted = transactions.to_vec();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));
    sorted
}

/// Income and expense of one calendar month
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyTotals {
    /// `YYYY-MM`
    pub month: String,
    pub income: Money,
    pub expense: Money,
}

impl MonthlyTotals {
    pub fn net(&self) -> Money {
        self.income - self.expense
    }
}

/// Totals per month, oldest month first; months without transactions are skipped
pub fn monthly_totals(transactions: &[Transaction]) -> Vec<MonthlyTotals> {
    let mut months: BTreeMap<String, (Money, Money)> = BTreeMap::new();

    for txn in transactions {
        let entry = months
            .entry(txn.date.format("%Y-%m").to_string())
            .or_default();
        match txn.kind {
            TransactionKind::Income => entry.0 += txn.amount,
            TransactionKind::Expense => entry.1 += txn.amount,
        }
    }

    months
        .into_iter()
        .map(|(month, (income, expense))| MonthlyTotals {
            month,
            income,
            expense,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::test_support::{expense, income, sample_ledger};
    use chrono::NaiveDate;

    #[test]
    fn test_sorted_by_date_newest_first() {
        let sorted = sorted_by_date(&sample_ledger());
        let categories: Vec<_> = sorted.iter().map(|t| t.category.as_str()).collect();

        assert_eq!(
            categories,
            vec![
                "Дом и ЖКХ",
                "Фриланс",
                "Развлечения",
                "Транспорт",
                "Продукты",
                "Зарплата"
            ]
        );
    }

    #[test]
    fn test_sorted_by_date_is_stable() {
        let ledger = vec![
            expense("first", 1, 5),
            expense("second", 2, 5),
            expense("older", 3, 1),
            expense("third", 4, 5),
        ];

        let sorted = sorted_by_date(&ledger);
        let names: Vec<_> = sorted.iter().map(|t| t.category.as_str()).collect();
        assert_eq!(names, vec!["first", "second", "third", "older"]);
    }

    #[test]
    fn test_sorted_by_date_leaves_input_untouched() {
        let ledger = sample_ledger();
        let before = ledger.clone();
        sorted_by_date(&ledger);
        assert_eq!(ledger, before);
    }

    #[test]
    fn test_monthly_totals() {
        let mut ledger = sample_ledger();
        let mut november = expense("Связь", 700, 1);
        november.date = NaiveDate::from_ymd_opt(2025, 11, 3).unwrap();
        ledger.insert(0, november);

        let months = monthly_totals(&ledger);
        assert_eq!(months.len(), 2);
        assert_eq!(months[0].month, "2025-10");
        assert_eq!(months[0].income, Money::from_major(110000));
        assert_eq!(months[0].net(), Money::from_major(79800));
        assert_eq!(months[1].month, "2025-11");
        assert_eq!(months[1].expense, Money::from_major(700));
        assert!(months[1].income.is_zero());
    }

    #[test]
    fn test_monthly_totals_empty() {
        assert!(monthly_totals(&[]).is_empty());
        assert_eq!(monthly_totals(&[income("Зарплата", 1, 1)]).len(), 1);
    }
}
