//! Dashboard Report
//!
//! Everything the summary screen shows, derived in one pass from a snapshot
//! of the ledger and the goals.

use serde::Serialize;

use crate::analytics::{
    balance, daily_average_expense, expense_ratio_percent, financial_health, top_categories,
    total_by_kind, CategoryTotal, FinancialHealth,
};
use crate::config::settings::Settings;
use crate::display::format_progress;
use crate::display::report::{format_header, format_percentage, separator};
use crate::error::BudgetResult;
use crate::models::{FinancialGoal, Money, Transaction, TransactionKind};

/// Saved amount and progress of one goal
#[derive(Debug, Clone, Serialize)]
pub struct GoalProgress {
    pub goal: FinancialGoal,
    pub progress_percent: f64,
    pub remaining: Money,
}

/// Summary of the whole budget
#[derive(Debug, Clone, Serialize)]
pub struct DashboardReport {
    pub balance: Money,
    pub total_income: Money,
    pub total_expense: Money,
    pub health: FinancialHealth,
    /// Expenses as a whole percentage of income
    pub expense_ratio_percent: i64,
    pub top_categories: Vec<CategoryTotal>,
    pub daily_average_expense: Money,
    /// Days the daily average is spread over
    pub period_days: u32,
    pub goals: Vec<GoalProgress>,
    pub transaction_count: usize,
}

impl DashboardReport {
    /// Build the report; top-N and the averaging period come from `settings`
    pub fn generate(
        transactions: &[Transaction],
        goals: &[FinancialGoal],
        settings: &Settings,
    ) -> BudgetResult<Self> {
        let period_days = settings.daily_average_period_days;

        Ok(Self {
            balance: balance(transactions),
            total_income: total_by_kind(transactions, TransactionKind::Income),
            total_expense: total_by_kind(transactions, TransactionKind::Expense),
            health: financial_health(transactions),
            expense_ratio_percent: expense_ratio_percent(transactions),
            top_categories: top_categories(transactions, settings.top_categories_count),
            daily_average_expense: daily_average_expense(transactions, period_days)?,
            period_days,
            goals: goals
                .iter()
                .map(|goal| GoalProgress {
                    progress_percent: goal.progress_percent(),
                    remaining: goal.remaining(),
                    goal: goal.clone(),
                })
                .collect(),
            transaction_count: transactions.len(),
        })
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, currency_symbol: &str) -> String {
        let money = |m: Money| m.format_with_symbol(currency_symbol);
        let mut output = String::new();

        output.push_str(&format_header("Family Budget"));
        output.push_str(&format!("{:<22} {:>16}\n", "Balance:", money(self.balance)));
        output.push_str(&format!("{:<22} {:>16}\n", "Income:", money(self.total_income)));
        output.push_str(&format!("{:<22} {:>16}\n", "Expenses:", money(self.total_expense)));
        output.push_str(&format!(
            "{:<22} {:>16}\n",
            format!("Daily avg ({} days):", self.period_days),
            money(self.daily_average_expense)
        ));
        output.push_str(&format!("Transactions: {}\n\n", self.transaction_count));

        output.push_str(&format!(
            "Financial health: {} ({}% of income spent)\n\n",
            self.health, self.expense_ratio_percent
        ));

        output.push_str("Top expense categories\n");
        output.push_str(&separator(40));
        output.push('\n');
        if self.top_categories.is_empty() {
            output.push_str("  (no expenses)\n");
        }
        for (i, category) in self.top_categories.iter().enumerate() {
            output.push_str(&format!(
                "{:>2}. {:<18} {:>14} {:>5}\n",
                i + 1,
                category.category,
                money(category.total),
                format_percentage(category.share_percent)
            ));
        }

        if !self.goals.is_empty() {
            output.push_str("\nGoals\n");
            output.push_str(&separator(40));
            output.push('\n');
            for entry in &self.goals {
                output.push_str(&format!(
                    "  {:<18} {} / {}  {}\n",
                    entry.goal.name,
                    money(entry.goal.current_amount),
                    money(entry.goal.target_amount),
                    format_progress(&entry.goal)
                ));
            }
        }

        output
    }
}
