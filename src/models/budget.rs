//! BudgetState aggregate and distribution snapshots
//!
//! `BudgetState` is the single persisted aggregate: the ordered category
//! list, the running total, the per-category ledger, and the most recent
//! distribution snapshot. The ledger is populated lazily; a category with no
//! ledger entry holds its percentage-derived share of the total until a
//! mutating operation pins a concrete balance for it.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::category::{percentages_complete, total_percentage, Category};
use super::money::Money;

/// One row of the computed distribution: a category's name, share, and amount
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistributionEntry {
    pub name: String,
    pub percentage: f64,
    pub amount: Money,
}

/// The persisted budget aggregate
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BudgetState {
    /// Ordered category list (insertion/edit order, which is display order)
    #[serde(default)]
    pub categories: Vec<Category>,

    /// The budget's current total
    #[serde(default)]
    pub total_amount: Money,

    /// Snapshot of the last computed distribution, one entry per category
    #[serde(default)]
    pub distribution: Vec<DistributionEntry>,

    /// Per-category ledger: current available amount keyed by category name
    #[serde(default)]
    pub category_amounts: BTreeMap<String, Money>,
}

impl BudgetState {
    /// Sum of all category percentages
    pub fn total_percentage(&self) -> f64 {
        total_percentage(&self.categories)
    }

    /// Whether the category percentages complete to exactly 100
    pub fn percentages_complete(&self) -> bool {
        percentages_complete(&self.categories)
    }

    /// Whether the aggregate is in distributed mode: percentages complete
    /// to 100 and a distribution has been computed, making ledger values
    /// authoritative rather than derived.
    pub fn is_distributed(&self) -> bool {
        self.percentages_complete() && !self.distribution.is_empty()
    }

    /// Current amount held by a category
    ///
    /// Returns the ledger entry if present, otherwise the percentage-derived
    /// share of the current total, otherwise zero when no total is set.
    pub fn amount_for(&self, name: &str, percentage: f64) -> Money {
        if let Some(amount) = self.category_amounts.get(name) {
            return *amount;
        }

        if self.total_amount.is_positive() {
            self.total_amount.share(percentage)
        } else {
            Money::zero()
        }
    }

    /// Rebuild the distribution snapshot from the current ledger, falling
    /// back to percentage-derived shares for categories with no ledger entry.
    pub fn distribution_from_ledger(&self) -> Vec<DistributionEntry> {
        self.categories
            .iter()
            .map(|cat| DistributionEntry {
                name: cat.name.clone(),
                percentage: cat.percentage,
                amount: self.amount_for(&cat.name, cat.percentage),
            })
            .collect()
    }

    /// Sum of all distribution entry amounts
    pub fn distributed_total(&self) -> Money {
        self.distribution.iter().map(|e| e.amount).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_state() -> BudgetState {
        BudgetState {
            categories: vec![
                Category::new("Rent", 50.0),
                Category::new("Food", 30.0),
                Category::new("Fun", 20.0),
            ],
            total_amount: Money::from_cents(100_000),
            distribution: Vec::new(),
            category_amounts: BTreeMap::new(),
        }
    }

    #[test]
    fn test_default_is_empty() {
        let state = BudgetState::default();
        assert!(state.categories.is_empty());
        assert!(state.total_amount.is_zero());
        assert!(state.distribution.is_empty());
        assert!(state.category_amounts.is_empty());
        assert!(!state.is_distributed());
    }

    #[test]
    fn test_amount_for_prefers_ledger() {
        let mut state = sample_state();
        state
            .category_amounts
            .insert("Rent".to_string(), Money::from_cents(42_000));

        assert_eq!(state.amount_for("Rent", 50.0), Money::from_cents(42_000));
        // No ledger entry: derived from the total
        assert_eq!(state.amount_for("Food", 30.0), Money::from_cents(30_000));
    }

    #[test]
    fn test_amount_for_without_total() {
        let state = BudgetState::default();
        assert_eq!(state.amount_for("Rent", 50.0), Money::zero());
    }

    #[test]
    fn test_distribution_from_ledger_mixes_sources() {
        let mut state = sample_state();
        state
            .category_amounts
            .insert("Fun".to_string(), Money::from_cents(12_345));

        let dist = state.distribution_from_ledger();
        assert_eq!(dist.len(), 3);
        assert_eq!(dist[0].amount, Money::from_cents(50_000));
        assert_eq!(dist[2].amount, Money::from_cents(12_345));
    }

    #[test]
    fn test_serde_round_trip() {
        let mut state = sample_state();
        state.distribution = state.distribution_from_ledger();
        state
            .category_amounts
            .insert("Rent".to_string(), Money::from_cents(50_000));

        let json = serde_json::to_string(&state).unwrap();
        let loaded: BudgetState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, loaded);
    }

    #[test]
    fn test_missing_fields_deserialize_to_defaults() {
        let loaded: BudgetState = serde_json::from_str("{}").unwrap();
        assert_eq!(loaded, BudgetState::default());
    }
}
