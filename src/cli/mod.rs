//! CLI command handlers

pub mod budget;
pub mod category;

pub use budget::{handle_add_funds, handle_calculate, handle_show, handle_withdraw};
pub use category::{handle_category_command, CategoryCommands};
