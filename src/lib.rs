//! Budget Distributor - percentage-based budget allocation for the terminal
//!
//! This library splits a budget total across percentage-weighted categories,
//! supports incremental fund additions and per-category withdrawals, and
//! persists the full budget aggregate to a single local JSON blob.
//!
//! # Architecture
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (categories, money, the budget aggregate)
//! - `storage`: JSON file storage layer
//! - `services`: The allocation engine (the invariant-bearing core)
//! - `cli`: Command handlers
//! - `display`: Terminal output formatting
//!
//! # Example
//!
//! ```rust,no_run
//! use budget_distributor::models::Money;
//! use budget_distributor::services::AllocationEngine;
//! use budget_distributor::storage::BudgetRepository;
//!
//! let repo = BudgetRepository::new("budget.json".into());
//! let mut engine = AllocationEngine::load(&repo);
//! engine.upsert_category("Rent", 50.0, None)?;
//! engine.upsert_category("Everything else", 50.0, None)?;
//! engine.distribute(Money::from_cents(100_000))?;
//! # Ok::<(), budget_distributor::error::BudgetError>(())
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;

pub use error::BudgetError;
