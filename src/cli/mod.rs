//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod auth;
pub mod budget;
pub mod export;
pub mod scenario;
pub mod suggest;

pub use auth::{handle_login, handle_logout, handle_register, handle_whoami};
pub use budget::{handle_budget_command, BudgetCommands};
pub use export::handle_export_command;
pub use scenario::handle_scenario_command;
pub use suggest::handle_suggest_command;
