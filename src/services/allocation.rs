//! Allocation engine
//!
//! The engine owns the budget aggregate and is the only invariant-bearing
//! unit in the application: it keeps the category list, the running total,
//! the per-category ledger, and the distribution snapshot consistent across
//! the four mutating operations (upsert/delete category, distribute,
//! add funds, withdraw).
//!
//! Every mutation applies to the in-memory aggregate first and then persists
//! the full aggregate. Validation failures leave the aggregate untouched; a
//! failed persist does not roll back the in-memory change (the aggregate and
//! the blob may diverge until the next successful save).

use crate::error::{BudgetError, BudgetResult};
use crate::models::{BudgetState, Category, Money, PERCENT_EPSILON};
use crate::storage::BudgetRepository;

/// Outcome of an add-funds operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddFundsOutcome {
    /// Percentages complete to 100: funds were spread across the ledger
    Distributed,
    /// No categories, or percentages don't complete: only the total moved
    TotalOnly,
}

/// Receipt returned by a successful withdrawal
#[derive(Debug, Clone, PartialEq)]
pub struct WithdrawReceipt {
    pub category: String,
    pub withdrawn: Money,
    pub remaining: Money,
}

/// The budget allocation engine
pub struct AllocationEngine<'a> {
    repo: &'a BudgetRepository,
    state: BudgetState,
}

impl<'a> AllocationEngine<'a> {
    /// Create an engine around an already-loaded aggregate
    pub fn new(repo: &'a BudgetRepository, state: BudgetState) -> Self {
        Self { repo, state }
    }

    /// Create an engine by loading the aggregate from the repository,
    /// falling back to the empty default on load failure
    pub fn load(repo: &'a BudgetRepository) -> Self {
        let state = repo.load_or_default();
        Self { repo, state }
    }

    /// The current aggregate
    pub fn state(&self) -> &BudgetState {
        &self.state
    }

    /// Consume the engine, returning the aggregate
    pub fn into_state(self) -> BudgetState {
        self.state
    }

    /// Current amount held by a category (ledger entry, else the
    /// percentage-derived share of the total, else zero)
    pub fn amount_for(&self, name: &str, percentage: f64) -> Money {
        self.state.amount_for(name, percentage)
    }

    /// Add a new category or edit the one at `edit_index` in place
    ///
    /// Rejects empty names, non-positive percentages, duplicate names, and
    /// any percentage that would push the total over 100. If the resulting
    /// percentages complete to exactly 100 and a total is already present,
    /// a full redistribution runs immediately.
    pub fn upsert_category(
        &mut self,
        name: &str,
        percentage: f64,
        edit_index: Option<usize>,
    ) -> BudgetResult<()> {
        let candidate = Category::new(name.trim(), percentage);
        candidate
            .validate()
            .map_err(|e| BudgetError::Validation(e.to_string()))?;

        if let Some(index) = edit_index {
            if index >= self.state.categories.len() {
                return Err(BudgetError::no_such_category(index));
            }
        }

        let duplicate = self
            .state
            .categories
            .iter()
            .enumerate()
            .any(|(i, cat)| Some(i) != edit_index && cat.name == candidate.name);
        if duplicate {
            return Err(BudgetError::Duplicate(candidate.name));
        }

        let prior_sum = match edit_index {
            Some(index) => self.state.total_percentage() - self.state.categories[index].percentage,
            None => self.state.total_percentage(),
        };
        if prior_sum + candidate.percentage > 100.0 + PERCENT_EPSILON {
            return Err(BudgetError::Validation(
                "Total percentage cannot exceed 100%".into(),
            ));
        }

        match edit_index {
            Some(index) => {
                // Renaming migrates the ledger entry so no orphan balance
                // survives under the old name
                let old_name = self.state.categories[index].name.clone();
                if old_name != candidate.name {
                    if let Some(amount) = self.state.category_amounts.remove(&old_name) {
                        self.state
                            .category_amounts
                            .insert(candidate.name.clone(), amount);
                    }
                }
                self.state.categories[index] = candidate;
            }
            None => self.state.categories.push(candidate),
        }

        if self.state.percentages_complete() && self.state.total_amount.is_positive() {
            self.apply_distribution(self.state.total_amount);
        }

        self.persist()
    }

    /// Delete the category at `index`
    ///
    /// Removes the category and its ledger entry, then rebuilds the
    /// distribution over the survivors from their existing ledger amounts
    /// (no rescaling to absorb the freed share). If the survivors' total
    /// percentage is exactly 100 and a total is present, a full
    /// redistribution runs afterward.
    pub fn delete_category(&mut self, index: usize) -> BudgetResult<()> {
        if index >= self.state.categories.len() {
            return Err(BudgetError::no_such_category(index));
        }

        let removed = self.state.categories.remove(index);
        self.state.category_amounts.remove(&removed.name);

        if self.state.total_amount.is_positive() {
            self.state.distribution = self.state.distribution_from_ledger();
        } else {
            self.state.distribution.clear();
        }

        if self.state.percentages_complete() && self.state.total_amount.is_positive() {
            self.apply_distribution(self.state.total_amount);
        }

        self.persist()
    }

    /// Distribute `amount` across all categories by their percentages
    ///
    /// A full reset: every ledger entry is overwritten with its share of
    /// `amount`, the distribution snapshot is rebuilt from scratch, and the
    /// total becomes `amount`.
    pub fn distribute(&mut self, amount: Money) -> BudgetResult<()> {
        if !amount.is_positive() {
            return Err(BudgetError::Validation("Please enter a valid amount".into()));
        }

        if self.state.categories.is_empty() {
            return Err(BudgetError::Validation(
                "Please add at least one category".into(),
            ));
        }

        if !self.state.percentages_complete() {
            return Err(BudgetError::Validation(
                "Total percentage must equal 100%".into(),
            ));
        }

        self.apply_distribution(amount);
        self.persist()
    }

    /// Add `delta` to the budget
    ///
    /// In distributed mode (percentages complete to 100), each category's
    /// ledger amount grows by its share of `delta` on top of its current
    /// balance; amounts already withdrawn are not disturbed. Otherwise only
    /// the total moves and the funds wait for the next distribute.
    pub fn add_funds(&mut self, delta: Money) -> BudgetResult<AddFundsOutcome> {
        if !delta.is_positive() {
            return Err(BudgetError::Validation("Please enter a valid amount".into()));
        }

        if self.state.categories.is_empty() || !self.state.percentages_complete() {
            self.state.total_amount += delta;
            self.persist()?;
            return Ok(AddFundsOutcome::TotalOnly);
        }

        let old_total = self.state.total_amount;
        for cat in self.state.categories.clone() {
            let baseline = self
                .state
                .category_amounts
                .get(&cat.name)
                .copied()
                .unwrap_or_else(|| old_total.share(cat.percentage));
            self.state
                .category_amounts
                .insert(cat.name, baseline + delta.share(cat.percentage));
        }

        self.state.distribution = self.state.distribution_from_ledger();
        self.state.total_amount = old_total + delta;

        self.persist()?;
        Ok(AddFundsOutcome::Distributed)
    }

    /// Withdraw `amount` from the category at `index`
    ///
    /// Only that category's ledger entry and distribution row change; the
    /// total drops by `amount`. Withdrawing more than the current balance is
    /// rejected without touching any state.
    pub fn withdraw(&mut self, index: usize, amount: Money) -> BudgetResult<WithdrawReceipt> {
        let category = self
            .state
            .categories
            .get(index)
            .cloned()
            .ok_or_else(|| BudgetError::no_such_category(index))?;

        if !amount.is_positive() {
            return Err(BudgetError::Validation("Please enter a valid amount".into()));
        }

        let current = self.state.amount_for(&category.name, category.percentage);
        if amount > current {
            return Err(BudgetError::InsufficientFunds {
                category: category.name,
                needed: amount,
                available: current,
            });
        }

        let remaining = current - amount;
        self.state
            .category_amounts
            .insert(category.name.clone(), remaining);

        for entry in &mut self.state.distribution {
            if entry.name == category.name {
                entry.amount = remaining;
            }
        }

        self.state.total_amount -= amount;

        self.persist()?;
        Ok(WithdrawReceipt {
            category: category.name,
            withdrawn: amount,
            remaining,
        })
    }

    /// Overwrite every ledger entry with its share of `amount` and rebuild
    /// the distribution snapshot (in-memory only)
    fn apply_distribution(&mut self, amount: Money) {
        for cat in self.state.categories.clone() {
            let share = amount.share(cat.percentage);
            self.state.category_amounts.insert(cat.name, share);
        }

        self.state.distribution = self.state.distribution_from_ledger();
        self.state.total_amount = amount;
    }

    /// Persist the full aggregate
    fn persist(&self) -> BudgetResult<()> {
        self.repo.save(&self.state)
    }
}
