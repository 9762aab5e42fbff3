//! quantum-budget-cli - Terminal-based personal budgeting with scenario simulation
//!
//! This library provides the core functionality for the Quantum Budget
//! application: a per-user monthly budget, a deterministic what-if scenario
//! reallocator, and AI spending suggestions for surplus funds.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (money, budgets, scenarios, users)
//! - `storage`: JSON file storage layer
//! - `services`: Business logic layer, including the scenario optimizer
//! - `display`: Terminal output formatting
//! - `cli`: Command handlers
//! - `export`: Budget export (json/csv/yaml)
//! - `tui`: Dashboard interface
//!
//! # Example
//!
//! ```rust
//! use qbudget::models::{Budget, Money, Scenario};
//! use qbudget::services::ScenarioOptimizer;
//!
//! let budget = Budget::starter();
//! let optimizer = ScenarioOptimizer::default();
//! let result = optimizer.optimize(&budget, &Scenario::RentIncrease { percent: 10.0 });
//! assert!(!result.insights.is_empty());
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod services;
pub mod storage;
pub mod tui;

pub use error::{QbudgetError, QbudgetResult};
