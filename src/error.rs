//! Custom error types for the budget distributor
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for budget distributor operations
#[derive(Error, Debug)]
pub enum BudgetError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for user input (empty name, bad percentage, bad amount)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Duplicate category names
    #[error("Category already exists: {0}")]
    Duplicate(String),

    /// Withdrawal exceeding a category's available balance
    #[error("Cannot withdraw more than {available} from {category}")]
    InsufficientFunds {
        category: String,
        needed: crate::models::Money,
        available: crate::models::Money,
    },

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl BudgetError {
    /// Create a validation error for a missing or out-of-range category index
    pub fn no_such_category(index: usize) -> Self {
        Self::Validation(format!("No category at index {}", index))
    }

    /// Check if this error stems from rejected user input
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::Validation(_) | Self::Duplicate(_) | Self::InsufficientFunds { .. }
        )
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for BudgetError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for BudgetError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for budget distributor operations
pub type BudgetResult<T> = Result<T, BudgetError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;

    #[test]
    fn test_error_display() {
        let err = BudgetError::Validation("Total percentage cannot exceed 100%".into());
        assert_eq!(
            err.to_string(),
            "Validation error: Total percentage cannot exceed 100%"
        );
    }

    #[test]
    fn test_insufficient_funds_error() {
        let err = BudgetError::InsufficientFunds {
            category: "Groceries".into(),
            needed: Money::from_cents(5000),
            available: Money::from_cents(3000),
        };
        assert_eq!(
            err.to_string(),
            "Cannot withdraw more than $30.00 from Groceries"
        );
        assert!(err.is_validation());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let budget_err: BudgetError = io_err.into();
        assert!(matches!(budget_err, BudgetError::Io(_)));
        assert!(!budget_err.is_validation());
    }
}
