//! Core data models for quantum-budget-cli
//!
//! This module contains the data structures for the budgeting domain:
//! monetary amounts, budgets, scenarios, and users.

pub mod budget;
pub mod money;
pub mod scenario;
pub mod user;

pub use budget::{Budget, BudgetItem};
pub use money::Money;
pub use scenario::Scenario;
pub use user::{SpendingSuggestion, User};
