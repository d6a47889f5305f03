//! Budget CLI commands
//!
//! Implements the money-moving commands: calculate (full distribution),
//! add-funds, withdraw, and the budget overview.

use crate::config::Settings;
use crate::display::budget::{
    format_add_funds, format_budget_overview, format_withdraw_receipt,
};
use crate::error::{BudgetError, BudgetResult};
use crate::models::Money;
use crate::services::AllocationEngine;
use crate::storage::Storage;

/// Distribute an amount across all categories by their percentages
pub fn handle_calculate(storage: &Storage, settings: &Settings, amount: &str) -> BudgetResult<()> {
    let amount = parse_amount(amount)?;

    let mut engine = AllocationEngine::load(&storage.budget);
    engine.distribute(amount)?;

    println!(
        "Distributed {} across {} categories.",
        amount.format_with_symbol(&settings.currency_symbol),
        engine.state().categories.len()
    );
    print!(
        "{}",
        format_budget_overview(engine.state(), &settings.currency_symbol)
    );
    Ok(())
}

/// Add funds to the budget
pub fn handle_add_funds(storage: &Storage, settings: &Settings, amount: &str) -> BudgetResult<()> {
    let delta = parse_amount(amount)?;

    let mut engine = AllocationEngine::load(&storage.budget);
    let outcome = engine.add_funds(delta)?;

    println!(
        "{}",
        format_add_funds(
            outcome,
            delta,
            engine.state().total_amount,
            &settings.currency_symbol
        )
    );
    Ok(())
}

/// Withdraw an amount from one category
pub fn handle_withdraw(
    storage: &Storage,
    settings: &Settings,
    index: usize,
    amount: &str,
) -> BudgetResult<()> {
    let amount = parse_amount(amount)?;

    let mut engine = AllocationEngine::load(&storage.budget);
    let receipt = engine.withdraw(index, amount)?;

    println!(
        "{}",
        format_withdraw_receipt(&receipt, &settings.currency_symbol)
    );
    Ok(())
}

/// Show the current budget overview
pub fn handle_show(storage: &Storage, settings: &Settings) -> BudgetResult<()> {
    let engine = AllocationEngine::load(&storage.budget);
    print!(
        "{}",
        format_budget_overview(engine.state(), &settings.currency_symbol)
    );
    Ok(())
}

/// Parse a user-supplied amount string into Money
fn parse_amount(s: &str) -> BudgetResult<Money> {
    Money::parse(s).map_err(|e| BudgetError::Validation(e.to_string()))
}
