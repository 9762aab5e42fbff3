//! Budget model
//!
//! A budget is a monthly income figure plus an ordered list of named expense
//! lines. Categories are plain strings matched by exact, case-sensitive
//! equality; no normalization is performed anywhere.

use serde::{Deserialize, Serialize};

use super::money::Money;

/// One monthly expense line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetItem {
    pub category: String,
    pub amount: Money,
}

impl BudgetItem {
    /// Create a new expense line
    pub fn new(category: impl Into<String>, amount: Money) -> Self {
        Self {
            category: category.into(),
            amount,
        }
    }
}

/// A user's monthly budget: income plus an ordered expense list
///
/// Expense order is significant: the scenario optimizer iterates expenses in
/// their stored order, so serialization preserves it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Budget {
    pub income: Money,
    pub expenses: Vec<BudgetItem>,
}

impl Budget {
    /// Create a budget with the given income and no expenses
    pub fn new(income: Money) -> Self {
        Self {
            income,
            expenses: Vec::new(),
        }
    }

    /// The starter budget seeded for new users
    pub fn starter() -> Self {
        Self {
            income: Money::from_rupees(100_000),
            expenses: vec![
                BudgetItem::new("Housing", Money::from_rupees(25_000)),
                BudgetItem::new("Transportation", Money::from_rupees(5_000)),
                BudgetItem::new("Food", Money::from_rupees(10_000)),
                BudgetItem::new("Utilities", Money::from_rupees(5_000)),
                BudgetItem::new("Entertainment", Money::from_rupees(5_000)),
                BudgetItem::new("Healthcare", Money::from_rupees(4_000)),
                BudgetItem::new("Personal Care", Money::from_rupees(3_000)),
                BudgetItem::new("Debt Payments", Money::from_rupees(10_000)),
            ],
        }
    }

    /// Sum of all expense amounts
    pub fn total_expenses(&self) -> Money {
        self.expenses.iter().map(|item| item.amount).sum()
    }

    /// Income minus total expenses; may be negative
    pub fn surplus(&self) -> Money {
        self.income - self.total_expenses()
    }

    /// Find an expense line by exact category name
    pub fn find_expense(&self, category: &str) -> Option<&BudgetItem> {
        self.expenses.iter().find(|item| item.category == category)
    }

    /// Set the amount for a category, appending a new line if absent
    pub fn upsert_expense(&mut self, category: &str, amount: Money) {
        match self.expenses.iter_mut().find(|item| item.category == category) {
            Some(item) => item.amount = amount,
            None => self.expenses.push(BudgetItem::new(category, amount)),
        }
    }

    /// Remove an expense line by exact category name
    ///
    /// Returns the removed item, or None if no line matched.
    pub fn remove_expense(&mut self, category: &str) -> Option<BudgetItem> {
        let index = self
            .expenses
            .iter()
            .position(|item| item.category == category)?;
        Some(self.expenses.remove(index))
    }
}
