//! Goal CLI commands

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::{format_goal_table, format_progress};
use crate::error::{BudgetError, BudgetResult};
use crate::models::draft::parse_positive_amount;
use crate::models::{GoalDraft, GoalId};
use crate::services::GoalService;
use crate::storage::Storage;

/// Goal subcommands
#[derive(Subcommand)]
pub enum GoalCommands {
    /// Create a savings goal
    Add {
        /// Goal name
        name: String,
        /// Target amount
        #[arg(allow_hyphen_values = true)]
        target: String,
        /// Date to reach the goal by (YYYY-MM-DD)
        #[arg(short, long)]
        deadline: Option<String>,
    },
    /// List goals with progress
    List,
    /// Put money towards a goal
    Contribute {
        /// Goal ID (e.g. goal-1728000000123)
        id: String,
        /// Amount to add
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },
}

/// Handle a goal command
pub fn handle_goal_command(
    storage: &Storage,
    settings: &Settings,
    cmd: GoalCommands,
) -> BudgetResult<()> {
    let service = GoalService::new(storage);
    let symbol = &settings.currency_symbol;

    match cmd {
        GoalCommands::Add {
            name,
            target,
            deadline,
        } => {
            let draft = GoalDraft::new(name, target).deadline(deadline.unwrap_or_default());
            let goal = service.add_goal(&draft)?;

            println!("Created goal:");
            println!("  ID:     {}", goal.id);
            println!("  Name:   {}", goal.name);
            println!("  Target: {}", goal.target_amount.format_with_symbol(symbol));
            if let Some(deadline) = goal.deadline {
                println!("  By:     {}", deadline.format(&settings.date_format));
            }
        }

        GoalCommands::List => {
            let goals = service.list_goals()?;
            print!("{}", format_goal_table(&goals, symbol, &settings.date_format));
        }

        GoalCommands::Contribute { id, amount } => {
            let id = GoalId::parse(&id).map_err(|_| {
                BudgetError::invalid_field("id", format!("'{}' is not a goal id", id))
            })?;
            let amount = parse_positive_amount("amount", &amount)
                .map_err(|e| BudgetError::from(vec![e]))?;

            let goal = service.contribute(id, amount)?;
            println!(
                "{}: {} / {}  {}",
                goal.name,
                goal.current_amount.format_with_symbol(symbol),
                goal.target_amount.format_with_symbol(symbol),
                format_progress(&goal)
            );
            if goal.is_complete() {
                println!("Goal reached!");
            }
        }
    }

    Ok(())
}
