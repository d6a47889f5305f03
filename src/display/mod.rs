//! Display formatting for terminal output

pub mod budget;

pub use budget::{
    format_add_funds, format_budget_overview, format_category_list, format_withdraw_receipt,
};
