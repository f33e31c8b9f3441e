use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use family_budget::cli::{
    handle_audit_command, handle_categories_command, handle_export_command, handle_goal_command,
    handle_monthly_command, handle_summary_command, handle_transaction_command, ExportFormat,
    GoalCommands, TransactionCommands,
};
use family_budget::config::{paths::BudgetPaths, settings::Settings};
use family_budget::models::Theme;
use family_budget::services::seed_sample_data;
use family_budget::storage::{initialize_storage, Storage};

/// Environment variable holding the log filter
const LOG_ENV: &str = "BUDGET_LOG";

#[derive(Parser)]
#[command(
    name = "budget",
    version,
    about = "Family budget: income, expenses, savings goals and spending analytics"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a new budget
    Init {
        /// Fill the empty budget with a month of sample data
        #[arg(long)]
        sample: bool,
    },

    /// Transaction commands
    #[command(subcommand, alias = "transaction")]
    Tx(TransactionCommands),

    /// Savings goal commands
    #[command(subcommand)]
    Goal(GoalCommands),

    /// Balance, totals, financial health, top categories and goals
    Summary,

    /// Expenses by category, largest first
    Categories {
        /// Show only the N largest categories
        #[arg(short, long)]
        top: Option<usize>,
    },

    /// Income and expense per month
    Monthly,

    /// Show or set the color theme
    Theme {
        /// dark or light
        theme: Option<Theme>,
        /// Switch to the other theme
        #[arg(long, conflicts_with = "theme")]
        toggle: bool,
    },

    /// Export data
    Export {
        /// Output format
        #[arg(value_enum)]
        format: ExportFormat,
        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show recent audit log entries
    Audit {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let paths = BudgetPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let storage = Storage::open(&paths)?;
    storage.load_all()?;

    match cli.command {
        Some(Commands::Init { sample }) => {
            println!("Initializing budget at: {}", paths.base_dir().display());
            initialize_storage(&paths)?;
            if sample {
                let seeded = seed_sample_data(&storage)?;
                println!(
                    "Added {} sample transactions and {} sample goals.",
                    seeded.transactions, seeded.goals
                );
            }
            println!("Initialization complete!");
            println!();
            println!("Run 'budget tx add expense Продукты 1500' to record an expense.");
            println!("Run 'budget summary' to see the dashboard.");
        }
        Some(Commands::Tx(cmd)) => handle_transaction_command(&storage, &settings, cmd)?,
        Some(Commands::Goal(cmd)) => handle_goal_command(&storage, &settings, cmd)?,
        Some(Commands::Summary) => handle_summary_command(&storage, &settings)?,
        Some(Commands::Categories { top }) => handle_categories_command(&storage, &settings, top)?,
        Some(Commands::Monthly) => handle_monthly_command(&storage, &settings)?,
        Some(Commands::Theme { theme, toggle }) => {
            let current = storage.load_theme()?;
            let next = match (theme, toggle) {
                (Some(theme), _) => Some(theme),
                (None, true) => Some(current.toggled()),
                (None, false) => None,
            };
            match next {
                Some(theme) => {
                    storage.save_theme(theme)?;
                    println!("Theme set to {}", theme);
                }
                None => println!("Theme: {}", current),
            }
        }
        Some(Commands::Export { format, output }) => {
            handle_export_command(&storage, format, output)?
        }
        Some(Commands::Audit { limit }) => handle_audit_command(&storage, limit)?,
        Some(Commands::Config) => {
            println!("Budget Configuration");
            println!("====================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Data directory:   {}", paths.data_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Audit log:        {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol:       {}", settings.currency_symbol);
            println!("  Date format:           {}", settings.date_format);
            println!("  Daily average period:  {} days", settings.daily_average_period_days);
            println!("  Top categories:        {}", settings.top_categories_count);
            println!("  Enforce categories:    {}", settings.enforce_category_taxonomy);
        }
        None => {
            println!("Family budget - income, expenses and savings goals");
            println!();
            println!("Run 'budget --help' for usage information.");
            println!("Run 'budget init --sample' to start with sample data.");
        }
    }

    Ok(())
}
