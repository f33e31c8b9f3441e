//! Report CLI commands: summary, category breakdown and monthly totals

use crate::analytics::{expenses_by_category, monthly_totals, top_categories};
use crate::config::settings::Settings;
use crate::display::{format_category_table, format_monthly_table};
use crate::error::BudgetResult;
use crate::reports::DashboardReport;
use crate::storage::Storage;

/// Print the dashboard
pub fn handle_summary_command(storage: &Storage, settings: &Settings) -> BudgetResult<()> {
    let transactions = storage.transactions.get_all()?;
    let goals = storage.goals.get_all()?;

    let report = DashboardReport::generate(&transactions, &goals, settings)?;
    print!("{}", report.format_terminal(&settings.currency_symbol));
    Ok(())
}

/// Print expense categories, all of them or the largest `top`
pub fn handle_categories_command(
    storage: &Storage,
    settings: &Settings,
    top: Option<usize>,
) -> BudgetResult<()> {
    let transactions = storage.transactions.get_all()?;
    let totals = match top {
        Some(n) => top_categories(&transactions, n),
        None => expenses_by_category(&transactions),
    };

    print!("{}", format_category_table(&totals, &settings.currency_symbol));
    Ok(())
}

/// Print income and expense per month
pub fn handle_monthly_command(storage: &Storage, settings: &Settings) -> BudgetResult<()> {
    let transactions = storage.transactions.get_all()?;
    print!(
        "{}",
        format_monthly_table(&monthly_totals(&transactions), &settings.currency_symbol)
    );
    Ok(())
}
