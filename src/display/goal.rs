//! Goal list formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::FinancialGoal;

use super::report::{format_bar, format_percentage};

#[derive(Tabled)]
struct GoalRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Goal")]
    name: String,
    #[tabled(rename = "Saved")]
    saved: String,
    #[tabled(rename = "Target")]
    target: String,
    #[tabled(rename = "Progress")]
    progress: String,
    #[tabled(rename = "Deadline")]
    deadline: String,
}

/// Render goals as a table with a progress bar per goal
pub fn format_goal_table(goals: &[FinancialGoal], currency_symbol: &str, date_format: &str) -> String {
    if goals.is_empty() {
        return "No goals yet. Add one with 'budget goal add'.\n".to_string();
    }

    let rows = goals.iter().map(|goal| GoalRow {
        id: goal.id.to_string(),
        name: goal.name.clone(),
        saved: goal.current_amount.format_with_symbol(currency_symbol),
        target: goal.target_amount.format_with_symbol(currency_symbol),
        progress: format_progress(goal),
        deadline: goal
            .deadline
            .map(|d| d.format(date_format).to_string())
            .unwrap_or_else(|| "-".to_string()),
    });

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    format!("{}\n", table)
}

/// `████░░░░░░ 44%`, with a check mark once the goal is reached
pub fn format_progress(goal: &FinancialGoal) -> String {
    let pct = goal.progress_percent();
    let mark = if goal.is_complete() { " ✓" } else { "" };
    format!("{} {}{}", format_bar(pct, 10), format_percentage(pct), mark)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{GoalId, Money};
    use chrono::NaiveDate;

    fn vacation() -> FinancialGoal {
        let mut goal = FinancialGoal::new(
            GoalId::from_raw(7),
            "Отпуск",
            Money::from_major(120000),
            NaiveDate::from_ymd_opt(2026, 7, 1),
        );
        goal.contribute(Money::from_major(48000));
        goal
    }

    #[test]
    fn test_progress() {
        assert_eq!(format_progress(&vacation()), "████░░░░░░ 40%");

        let mut done = vacation();
        done.contribute(Money::from_major(100000));
        assert_eq!(format_progress(&done), "██████████ 100% ✓");
    }

    #[test]
    fn test_table_contains_fields() {
        let table = format_goal_table(&[vacation()], "₽", "%d.%m.%Y");

        assert!(table.contains("goal-7"));
        assert!(table.contains("48 000 ₽"));
        assert!(table.contains("120 000 ₽"));
        assert!(table.contains("01.07.2026"));
    }

    #[test]
    fn test_empty_table() {
        assert!(format_goal_table(&[], "₽", "%d.%m.%Y").contains("No goals"));
    }
}
