//! Core data models for the budget distributor
//!
//! This module contains the data structures that represent the budgeting
//! domain: categories, money amounts, and the persisted budget aggregate.

pub mod budget;
pub mod category;
pub mod money;

pub use budget::{BudgetState, DistributionEntry};
pub use category::{percentages_complete, total_percentage, Category, PERCENT_EPSILON};
pub use money::Money;
