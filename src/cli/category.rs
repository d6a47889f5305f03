//! Category CLI commands
//!
//! Implements CLI commands for category management.

use clap::Subcommand;

use crate::config::Settings;
use crate::display::budget::format_category_list;
use crate::error::BudgetResult;
use crate::services::AllocationEngine;
use crate::storage::Storage;

/// Category subcommands
#[derive(Subcommand)]
pub enum CategoryCommands {
    /// Add a new category
    Add {
        /// Category name
        name: String,
        /// Percentage share of the total budget (e.g., 50 or 12.5)
        percentage: f64,
    },

    /// Edit the category at an index (replaces name and percentage in place)
    Edit {
        /// Category index (see 'budget category list')
        index: usize,
        /// New name
        name: String,
        /// New percentage share
        percentage: f64,
    },

    /// Delete the category at an index
    Delete {
        /// Category index (see 'budget category list')
        index: usize,
    },

    /// List all categories with their percentage shares
    List,
}

/// Handle a category command
pub fn handle_category_command(
    storage: &Storage,
    settings: &Settings,
    cmd: CategoryCommands,
) -> BudgetResult<()> {
    let mut engine = AllocationEngine::load(&storage.budget);

    match cmd {
        CategoryCommands::Add { name, percentage } => {
            engine.upsert_category(&name, percentage, None)?;
            println!("Added category: {} ({}%)", name.trim(), percentage);
            report_distribution_status(&engine, settings);
        }

        CategoryCommands::Edit {
            index,
            name,
            percentage,
        } => {
            engine.upsert_category(&name, percentage, Some(index))?;
            println!("Updated category {}: {} ({}%)", index, name.trim(), percentage);
            report_distribution_status(&engine, settings);
        }

        CategoryCommands::Delete { index } => {
            let name = engine
                .state()
                .categories
                .get(index)
                .map(|c| c.name.clone())
                .unwrap_or_default();
            engine.delete_category(index)?;
            println!("Deleted category: {}", name);
        }

        CategoryCommands::List => {
            print!("{}", format_category_list(&engine.state().categories));
        }
    }

    Ok(())
}

fn report_distribution_status(engine: &AllocationEngine<'_>, settings: &Settings) {
    if engine.state().is_distributed() {
        println!(
            "Percentages complete to 100%; budget redistributed over {}.",
            engine
                .state()
                .total_amount
                .format_with_symbol(&settings.currency_symbol)
        );
    }
}
