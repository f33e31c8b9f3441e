//! Category breakdown and monthly table formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::analytics::{CategoryTotal, MonthlyTotals};

use super::report::{format_bar, format_percentage};

#[derive(Tabled)]
struct CategoryRow {
    #[tabled(rename = "#")]
    rank: usize,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Spent")]
    total: String,
    #[tabled(rename = "Count")]
    count: usize,
    #[tabled(rename = "Share")]
    share: String,
}

#[derive(Tabled)]
struct MonthRow {
    #[tabled(rename = "Month")]
    month: String,
    #[tabled(rename = "Income")]
    income: String,
    #[tabled(rename = "Expense")]
    expense: String,
    #[tabled(rename = "Net")]
    net: String,
}

/// Ranked expense categories with their share of all spending
pub fn format_category_table(totals: &[CategoryTotal], currency_symbol: &str) -> String {
    if totals.is_empty() {
        return "No expenses recorded.\n".to_string();
    }

    let rows = totals.iter().enumerate().map(|(i, c)| CategoryRow {
        rank: i + 1,
        category: c.category.clone(),
        total: c.total.format_with_symbol(currency_symbol),
        count: c.count,
        share: format!(
            "{} {}",
            format_bar(c.share_percent, 10),
            format_percentage(c.share_percent)
        ),
    });

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    format!("{}\n", table)
}

/// Income, expense and net per month
pub fn format_monthly_table(months: &[MonthlyTotals], currency_symbol: &str) -> String {
    if months.is_empty() {
        return "No transactions recorded.\n".to_string();
    }

    let rows = months.iter().map(|m| MonthRow {
        month: m.month.clone(),
        income: m.income.format_with_symbol(currency_symbol),
        expense: m.expense.format_with_symbol(currency_symbol),
        net: m.net().format_with_symbol(currency_symbol),
    });

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    format!("{}\n", table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;

    #[test]
    fn test_category_table() {
        let totals = vec![CategoryTotal {
            category: "Продукты".into(),
            total: Money::from_major(12500),
            count: 1,
            share_percent: 41.39,
        }];

        let table = format_category_table(&totals, "₽");
        assert!(table.contains("Продукты"));
        assert!(table.contains("12 500 ₽"));
        assert!(table.contains("41%"));
    }

    #[test]
    fn test_monthly_table_shows_negative_net() {
        let months = vec![MonthlyTotals {
            month: "2025-11".into(),
            income: Money::zero(),
            expense: Money::from_major(700),
        }];

        let table = format_monthly_table(&months, "₽");
        assert!(table.contains("2025-11"));
        assert!(table.contains("-700 ₽"));
    }

    #[test]
    fn test_empty_tables() {
        assert!(format_category_table(&[], "₽").contains("No expenses"));
        assert!(format_monthly_table(&[], "₽").contains("No transactions"));
    }
}
