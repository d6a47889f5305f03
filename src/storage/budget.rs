//! Budget aggregate repository for JSON storage
//!
//! The whole budget aggregate lives under a single blob (budget.json);
//! every save overwrites it with the full current in-memory state.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::BudgetError;
use crate::models::BudgetState;

use super::file_io::{read_json, write_json_atomic};

/// On-disk shape of budget.json: the aggregate plus a save timestamp
#[derive(Debug, Clone, Serialize, Deserialize)]
struct BudgetFile {
    #[serde(default = "Utc::now")]
    updated_at: DateTime<Utc>,

    #[serde(flatten)]
    state: BudgetState,
}

impl Default for BudgetFile {
    fn default() -> Self {
        Self {
            updated_at: Utc::now(),
            state: BudgetState::default(),
        }
    }
}

/// Repository for budget aggregate persistence
pub struct BudgetRepository {
    path: PathBuf,
}

impl BudgetRepository {
    /// Create a new budget repository
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Path of the underlying blob file
    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Load the aggregate from disk
    ///
    /// A missing file yields the empty default aggregate; an unreadable or
    /// unparseable file is an error.
    pub fn load(&self) -> Result<BudgetState, BudgetError> {
        let file_data: BudgetFile = read_json(&self.path)?;
        Ok(file_data.state)
    }

    /// Load the aggregate, falling back to the empty default on any failure
    ///
    /// Startup must never abort on a corrupt data file; the failure is
    /// reported on stderr and the user starts from an empty budget.
    pub fn load_or_default(&self) -> BudgetState {
        match self.load() {
            Ok(state) => state,
            Err(e) => {
                eprintln!("Warning: failed to load budget data, starting empty: {}", e);
                BudgetState::default()
            }
        }
    }

    /// Save the full aggregate to disk, stamping the save time
    pub fn save(&self, state: &BudgetState) -> Result<(), BudgetError> {
        let file_data = BudgetFile {
            updated_at: Utc::now(),
            state: state.clone(),
        };

        write_json_atomic(&self.path, &file_data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Money};
    use tempfile::TempDir;

    #[test]
    fn test_load_missing_file_returns_default() {
        let temp_dir = TempDir::new().unwrap();
        let repo = BudgetRepository::new(temp_dir.path().join("budget.json"));

        let state = repo.load().unwrap();
        assert_eq!(state, BudgetState::default());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let repo = BudgetRepository::new(temp_dir.path().join("budget.json"));

        let mut state = BudgetState::default();
        state.categories.push(Category::new("Rent", 50.0));
        state.total_amount = Money::from_cents(100_000);
        state
            .category_amounts
            .insert("Rent".to_string(), Money::from_cents(50_000));

        repo.save(&state).unwrap();

        let loaded = repo.load().unwrap();
        assert_eq!(loaded, state);
    }

    #[test]
    fn test_load_or_default_on_corrupt_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("budget.json");
        std::fs::write(&path, "{ this is not json").unwrap();

        let repo = BudgetRepository::new(path);
        assert!(repo.load().is_err());
        assert_eq!(repo.load_or_default(), BudgetState::default());
    }

    #[test]
    fn test_save_overwrites_previous_blob() {
        let temp_dir = TempDir::new().unwrap();
        let repo = BudgetRepository::new(temp_dir.path().join("budget.json"));

        let mut state = BudgetState::default();
        state.categories.push(Category::new("Rent", 50.0));
        repo.save(&state).unwrap();

        state.categories.push(Category::new("Food", 30.0));
        repo.save(&state).unwrap();

        let loaded = repo.load().unwrap();
        assert_eq!(loaded.categories.len(), 2);
    }
}
