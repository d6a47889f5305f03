//! Storage layer for the budget distributor
//!
//! Provides JSON file storage with atomic writes and automatic directory
//! creation. The budget aggregate is a single blob under a fixed key
//! (budget.json); every save rewrites the whole blob.

pub mod budget;
pub mod file_io;

pub use budget::BudgetRepository;
pub use file_io::{read_json, write_json_atomic};

use crate::config::paths::BudgetPaths;
use crate::error::BudgetError;

/// Main storage coordinator
pub struct Storage {
    paths: BudgetPaths,
    pub budget: BudgetRepository,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: BudgetPaths) -> Result<Self, BudgetError> {
        paths.ensure_directories()?;

        Ok(Self {
            budget: BudgetRepository::new(paths.budget_file()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &BudgetPaths {
        &self.paths
    }
}
