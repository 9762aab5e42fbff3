//! Business logic layer
//!
//! Services bridge the CLI/TUI with the storage layer. The scenario optimizer
//! is the exception: it is a pure computation with no storage access.

pub mod auth;
pub mod budget;
pub mod optimizer;
pub mod suggestions;

pub use auth::AuthService;
pub use budget::BudgetService;
pub use optimizer::{OptimizationResult, ScenarioOptimizer};
pub use suggestions::SuggestionService;
