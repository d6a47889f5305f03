use anyhow::Result;
use clap::{Parser, Subcommand};

use budget_distributor::cli::{
    handle_add_funds, handle_calculate, handle_category_command, handle_show, handle_withdraw,
};
use budget_distributor::config::{paths::BudgetPaths, settings::Settings};
use budget_distributor::storage::Storage;

#[derive(Parser)]
#[command(
    name = "budget",
    version,
    about = "Percentage-based budget distributor",
    long_about = "Budget Distributor splits a total across percentage-weighted \
                  categories, tracks per-category balances through additions and \
                  withdrawals, and keeps everything in a local JSON file."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Category management commands
    #[command(subcommand)]
    Category(budget_distributor::cli::CategoryCommands),

    /// Distribute an amount across all categories (percentages must total 100)
    #[command(alias = "calc")]
    Calculate {
        /// Amount to distribute (e.g., "1000" or "1000.00")
        amount: String,
    },

    /// Add funds to the budget
    #[command(name = "add-funds")]
    AddFunds {
        /// Amount to add
        amount: String,
    },

    /// Withdraw an amount from one category
    Withdraw {
        /// Category index (see 'budget category list')
        index: usize,
        /// Amount to withdraw
        amount: String,
    },

    /// Show the current budget overview
    Show,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = BudgetPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    let storage = Storage::new(paths)?;

    match cli.command {
        Commands::Category(cmd) => {
            handle_category_command(&storage, &settings, cmd)?;
        }
        Commands::Calculate { amount } => {
            handle_calculate(&storage, &settings, &amount)?;
        }
        Commands::AddFunds { amount } => {
            handle_add_funds(&storage, &settings, &amount)?;
        }
        Commands::Withdraw { index, amount } => {
            handle_withdraw(&storage, &settings, index, &amount)?;
        }
        Commands::Show => {
            handle_show(&storage, &settings)?;
        }
        Commands::Config => {
            println!("Base directory: {}", storage.paths().base_dir().display());
            println!("Budget file:    {}", storage.paths().budget_file().display());
            println!(
                "Settings file:  {}",
                storage.paths().settings_file().display()
            );
            println!("Currency:       {}", settings.currency_symbol);
        }
    }

    Ok(())
}
