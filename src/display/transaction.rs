//! Transaction list formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::Transaction;

#[derive(Tabled)]
struct TransactionRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Description")]
    description: String,
}

/// Signed amount: `+85 000 ₽` for income, `-12 500 ₽` for expenses
pub fn format_signed_amount(txn: &Transaction, currency_symbol: &str) -> String {
    let sign = if txn.is_income() { "+" } else { "-" };
    format!("{}{}", sign, txn.amount.format_with_symbol(currency_symbol))
}

/// Render transactions as a table, in the order given
pub fn format_transaction_table(
    transactions: &[Transaction],
    currency_symbol: &str,
    date_format: &str,
) -> String {
    if transactions.is_empty() {
        return "No transactions yet. Add one with 'budget tx add'.\n".to_string();
    }

    let rows = transactions.iter().map(|txn| TransactionRow {
        id: txn.id.to_string(),
        date: txn.date.format(date_format).to_string(),
        category: txn.category.clone(),
        amount: format_signed_amount(txn, currency_symbol),
        description: txn.description.clone(),
    });

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    format!("{}\n", table)
}

/// Multi-line detail view of one transaction
pub fn format_transaction_details(txn: &Transaction, currency_symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Transaction: {}\n", txn.id));
    output.push_str(&format!("Type:        {}\n", txn.kind));
    output.push_str(&format!("Date:        {}\n", txn.date.format("%Y-%m-%d")));
    output.push_str(&format!("Category:    {}\n", txn.category));
    output.push_str(&format!(
        "Amount:      {}\n",
        format_signed_amount(txn, currency_symbol)
    ));

    if !txn.description.is_empty() {
        output.push_str(&format!("Description: {}\n", txn.description));
    }

    output
}
