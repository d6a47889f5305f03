//! Category model
//!
//! A category is a named budget bucket carrying a percentage share of the
//! total. The percentages of all categories together may never exceed 100;
//! distribution is only permitted once they sum to exactly 100.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Tolerance for comparing f64 percentage sums against whole numbers.
///
/// User-entered percentages like 33.3 pick up binary-fraction noise when
/// summed (33.3 x 3 != 99.9 exactly), so completeness checks use this
/// tolerance instead of exact equality.
pub const PERCENT_EPSILON: f64 = 1e-9;

/// A budget category with a percentage share of the total
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    /// Category name (unique among categories, used as the ledger key)
    pub name: String,

    /// Percentage share of the total budget (0 < percentage <= 100)
    pub percentage: f64,
}

impl Category {
    /// Create a new category
    pub fn new(name: impl Into<String>, percentage: f64) -> Self {
        Self {
            name: name.into(),
            percentage,
        }
    }

    /// Validate the category in isolation (name and percentage range)
    pub fn validate(&self) -> Result<(), CategoryValidationError> {
        if self.name.trim().is_empty() {
            return Err(CategoryValidationError::EmptyName);
        }

        if !self.percentage.is_finite() || self.percentage <= 0.0 {
            return Err(CategoryValidationError::InvalidPercentage(self.percentage));
        }

        if self.percentage > 100.0 {
            return Err(CategoryValidationError::InvalidPercentage(self.percentage));
        }

        Ok(())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}%)", self.name, self.percentage)
    }
}

/// Sum the percentages of a category slice
pub fn total_percentage(categories: &[Category]) -> f64 {
    categories.iter().map(|c| c.percentage).sum()
}

/// Check whether a category slice's percentages complete to exactly 100
pub fn percentages_complete(categories: &[Category]) -> bool {
    (total_percentage(categories) - 100.0).abs() < PERCENT_EPSILON
}

/// Validation errors for categories
#[derive(Debug, Clone, PartialEq)]
pub enum CategoryValidationError {
    EmptyName,
    InvalidPercentage(f64),
}

impl fmt::Display for CategoryValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryValidationError::EmptyName => write!(f, "Please enter a category name"),
            CategoryValidationError::InvalidPercentage(_) => {
                write!(f, "Please enter a valid percentage")
            }
        }
    }
}

impl std::error::Error for CategoryValidationError {}
