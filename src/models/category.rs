//! Category taxonomy
//!
//! The allowed income and expense categories offered by the entry form.
//! The ledger treats them as advisory unless the user turns enforcement on.

use super::transaction::TransactionKind;

/// Categories offered for expenses
pub const EXPENSE_CATEGORIES: &[&str] = &[
    "Продукты",
    "Транспорт",
    "Развлечения",
    "Здоровье",
    "Образование",
    "Дом и ЖКХ",
    "Одежда",
    "Связь",
    "Другое",
];

/// Categories offered for income
pub const INCOME_CATEGORIES: &[&str] = &["Зарплата", "Фриланс", "Инвестиции", "Подарки", "Другое"];

/// The allowed category list for a transaction kind
pub fn categories_for(kind: TransactionKind) -> &'static [&'static str] {
    match kind {
        TransactionKind::Income => INCOME_CATEGORIES,
        TransactionKind::Expense => EXPENSE_CATEGORIES,
    }
}

/// Check whether `category` belongs to the allowed set for `kind`
pub fn is_known_category(kind: TransactionKind, category: &str) -> bool {
    let category = category.trim();
    categories_for(kind).iter().any(|c| *c == category)
}
