//! Transaction CLI commands

use clap::Subcommand;

use crate::analytics::sorted_by_date;
use crate::config::settings::Settings;
use crate::display::{format_transaction_details, format_transaction_table};
use crate::error::{BudgetError, BudgetResult};
use crate::models::{TransactionDraft, TransactionId, TransactionKind};
use crate::services::LedgerService;
use crate::storage::Storage;

/// Transaction subcommands
#[derive(Subcommand)]
pub enum TransactionCommands {
    /// Record income or an expense
    Add {
        /// income or expense
        kind: TransactionKind,
        /// Category, e.g. "Продукты"
        category: String,
        /// Amount, e.g. "12500" or "12 500,50"
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
        /// Free-text note
        #[arg(short = 'm', long)]
        description: Option<String>,
    },
    /// List transactions, newest first
    List {
        /// Number of transactions to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },
    /// Show one transaction
    Show {
        /// Transaction ID (e.g. txn-1728000000123)
        id: String,
    },
    /// Delete a transaction
    Delete {
        /// Transaction ID
        id: String,
    },
}

/// Handle a transaction command
pub fn handle_transaction_command(
    storage: &Storage,
    settings: &Settings,
    cmd: TransactionCommands,
) -> BudgetResult<()> {
    let service =
        LedgerService::new(storage).with_taxonomy_enforced(settings.enforce_category_taxonomy);
    let symbol = &settings.currency_symbol;

    match cmd {
        TransactionCommands::Add {
            kind,
            category,
            amount,
            date,
            description,
        } => {
            let mut draft = TransactionDraft::new(kind).category(category).amount(amount);
            if let Some(date) = date {
                draft = draft.date(date);
            }
            if let Some(description) = description {
                draft = draft.description(description);
            }

            let txn = service.add_transaction(&draft)?;
            println!("Created transaction:");
            print!("{}", format_transaction_details(&txn, symbol));
        }

        TransactionCommands::List { limit } => {
            let transactions = service.list_transactions()?;
            let total = transactions.len();
            let shown: Vec<_> = sorted_by_date(&transactions).into_iter().take(limit).collect();

            print!(
                "{}",
                format_transaction_table(&shown, symbol, &settings.date_format)
            );
            if shown.len() < total {
                println!("Showing {} of {} transactions.", shown.len(), total);
            }
        }

        TransactionCommands::Show { id } => {
            let id = parse_transaction_id(&id)?;
            let txn = service
                .get_transaction(id)?
                .ok_or_else(|| BudgetError::transaction_not_found(id.to_string()))?;
            print!("{}", format_transaction_details(&txn, symbol));
        }

        TransactionCommands::Delete { id } => {
            let id = parse_transaction_id(&id)?;
            match service.delete_transaction(id)? {
                Some(txn) => println!("Deleted transaction {} ({})", txn.id, txn.category),
                None => println!("No transaction {}; nothing to delete.", id),
            }
        }
    }

    Ok(())
}

fn parse_transaction_id(input: &str) -> BudgetResult<TransactionId> {
    TransactionId::parse(input)
        .map_err(|_| BudgetError::invalid_field("id", format!("'{}' is not a transaction id", input)))
}
