//! Budget display formatting
//!
//! Formats the category list, the distribution table, and operation
//! receipts for terminal output.

use crate::models::{BudgetState, Category, Money};
use crate::services::{AddFundsOutcome, WithdrawReceipt};

/// Format the category list with indexes and the running percentage total
pub fn format_category_list(categories: &[Category]) -> String {
    if categories.is_empty() {
        return "No categories yet. Add one with 'budget category add <name> <percentage>'."
            .to_string();
    }

    let name_width = categories
        .iter()
        .map(|c| c.name.len())
        .max()
        .unwrap_or(4)
        .max(4);

    let mut output = String::new();
    output.push_str(&format!("  #  {:<name_width$}  {:>7}\n", "Name", "Share"));

    for (i, cat) in categories.iter().enumerate() {
        output.push_str(&format!(
            "{:>3}  {:<name_width$}  {:>6}%\n",
            i, cat.name, cat.percentage
        ));
    }

    let total: f64 = categories.iter().map(|c| c.percentage).sum();
    output.push_str(&format!(
        "\nTotal: {}% {}\n",
        total,
        if (total - 100.0).abs() < 1e-9 {
            "(ready to calculate)"
        } else {
            "(must reach 100% before calculating)"
        }
    ));

    output
}

/// Format the full budget overview: total, distribution table, per-category
/// available amounts
pub fn format_budget_overview(state: &BudgetState, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "Total budget: {}\n",
        state.total_amount.format_with_symbol(symbol)
    ));

    if state.categories.is_empty() {
        output.push_str("\nNo categories yet.\n");
        return output;
    }

    let name_width = state
        .categories
        .iter()
        .map(|c| c.name.len())
        .max()
        .unwrap_or(4)
        .max(4);

    output.push_str(&format!(
        "\n  #  {:<name_width$}  {:>7}  {:>12}\n",
        "Name", "Share", "Available"
    ));

    for (i, cat) in state.categories.iter().enumerate() {
        let amount = state.amount_for(&cat.name, cat.percentage);
        output.push_str(&format!(
            "{:>3}  {:<name_width$}  {:>6}%  {:>12}\n",
            i,
            cat.name,
            cat.percentage,
            amount.format_with_symbol(symbol)
        ));
    }

    if state.is_distributed() {
        let distributed: Money = state.distributed_total();
        output.push_str(&format!(
            "\nDistributed: {}\n",
            distributed.format_with_symbol(symbol)
        ));
    } else {
        output.push_str("\nNot yet distributed. Run 'budget calculate <amount>'.\n");
    }

    output
}

/// Format a withdrawal receipt, mirroring the classic alert text
pub fn format_withdraw_receipt(receipt: &WithdrawReceipt, symbol: &str) -> String {
    format!(
        "{} withdrawn from {}. New amount: {}",
        receipt.withdrawn.format_with_symbol(symbol),
        receipt.category,
        receipt.remaining.format_with_symbol(symbol)
    )
}

/// Format the add-funds confirmation
pub fn format_add_funds(
    outcome: AddFundsOutcome,
    delta: Money,
    new_total: Money,
    symbol: &str,
) -> String {
    match outcome {
        AddFundsOutcome::Distributed => format!(
            "{} added to your budget. New total budget: {}",
            delta.format_with_symbol(symbol),
            new_total.format_with_symbol(symbol)
        ),
        AddFundsOutcome::TotalOnly => format!(
            "{} added to your budget. New total budget: {}. \
             Run 'budget calculate' to distribute funds when ready.",
            delta.format_with_symbol(symbol),
            new_total.format_with_symbol(symbol)
        ),
    }
}
