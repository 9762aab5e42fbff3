//! Budget service
//!
//! Business logic for loading, editing, and persisting the current user's
//! budget, and for applying scenario optimization results to it.

use crate::error::{QbudgetError, QbudgetResult};
use crate::models::{Budget, Money};
use crate::services::optimizer::OptimizationResult;
use crate::storage::Storage;

/// Service for budget management
pub struct BudgetService<'a> {
    storage: &'a Storage,
}

impl<'a> BudgetService<'a> {
    /// Create a new budget service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Load a user's budget, seeding the starter budget on first access
    pub fn load(&self, email: &str) -> QbudgetResult<Budget> {
        let budget = self.storage.budgets.get_or_seed(email)?;
        self.storage.budgets.save()?;
        Ok(budget)
    }

    /// Set a user's monthly income
    pub fn set_income(&self, email: &str, income: Money) -> QbudgetResult<Budget> {
        let mut budget = self.storage.budgets.get_or_seed(email)?;
        budget.income = income;
        self.persist(email, budget)
    }

    /// Set (or add) an expense line
    pub fn set_expense(&self, email: &str, category: &str, amount: Money) -> QbudgetResult<Budget> {
        if category.trim().is_empty() {
            return Err(QbudgetError::Validation(
                "Category name must not be empty".into(),
            ));
        }

        let mut budget = self.storage.budgets.get_or_seed(email)?;
        budget.upsert_expense(category, amount);
        self.persist(email, budget)
    }

    /// Remove an expense line by exact category name
    pub fn remove_expense(&self, email: &str, category: &str) -> QbudgetResult<Budget> {
        let mut budget = self.storage.budgets.get_or_seed(email)?;
        if budget.remove_expense(category).is_none() {
            return Err(QbudgetError::category_not_found(category));
        }
        self.persist(email, budget)
    }

    /// Replace a user's expense list with an optimization result
    pub fn apply_optimization(
        &self,
        email: &str,
        result: &OptimizationResult,
    ) -> QbudgetResult<Budget> {
        let mut budget = self.storage.budgets.get_or_seed(email)?;
        budget.expenses = result.optimized_expenses.clone();
        self.persist(email, budget)
    }

    fn persist(&self, email: &str, budget: Budget) -> QbudgetResult<Budget> {
        self.storage.budgets.upsert(email, budget.clone())?;
        self.storage.budgets.save()?;
        Ok(budget)
    }
}
