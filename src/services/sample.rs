//! Sample data for a fresh budget
//!
//! A month of household transactions and two savings goals, written through
//! the services so the usual validation, ids and audit entries apply.

use crate::error::BudgetResult;
use crate::models::{GoalDraft, Money, TransactionDraft, TransactionKind};
use crate::storage::Storage;

use super::goal::GoalService;
use super::ledger::LedgerService;

const SAMPLE_TRANSACTIONS: &[(TransactionKind, &str, &str, &str, &str)] = &[
    (TransactionKind::Income, "Зарплата", "85000", "2025-10-01", "Зарплата за октябрь"),
    (TransactionKind::Expense, "Продукты", "12500", "2025-10-05", "Покупки в супермаркете"),
    (TransactionKind::Expense, "Транспорт", "3200", "2025-10-07", "Проездной"),
    (TransactionKind::Expense, "Развлечения", "5600", "2025-10-10", "Кино и кафе"),
    (TransactionKind::Income, "Фриланс", "25000", "2025-10-15", "Проект на фрилансе"),
    (TransactionKind::Expense, "Дом и ЖКХ", "8900", "2025-10-20", "Коммунальные услуги"),
];

/// (name, target, already saved)
const SAMPLE_GOALS: &[(&str, &str, i64)] = &[
    ("Новый ноутбук", "80000", 35000),
    ("Отпуск", "120000", 48000),
];

/// How many records seeding added
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub transactions: usize,
    pub goals: usize,
}

/// Fill empty collections with sample data
///
/// A collection that already holds anything is left alone.
pub fn seed_sample_data(storage: &Storage) -> BudgetResult<SeedSummary> {
    let mut summary = SeedSummary::default();

    let ledger = LedgerService::new(storage);
    if ledger.count()? == 0 {
        for (kind, category, amount, date, description) in SAMPLE_TRANSACTIONS {
            let draft = TransactionDraft::new(*kind)
                .category(*category)
                .amount(*amount)
                .date(*date)
                .description(*description);
            ledger.add_transaction(&draft)?;
            summary.transactions += 1;
        }
    }

    let goals = GoalService::new(storage);
    if goals.list_goals()?.is_empty() {
        for (name, target, saved) in SAMPLE_GOALS {
            let goal = goals.add_goal(&GoalDraft::new(*name, *target))?;
            goals.contribute(goal.id, Money::from_major(*saved))?;
            summary.goals += 1;
        }
    }

    tracing::debug!(
        transactions = summary.transactions,
        goals = summary.goals,
        "sample data seeded"
    );
    Ok(summary)
}
