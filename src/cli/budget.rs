//! Budget CLI commands
//!
//! Implements viewing and editing the logged-in user's budget.

use clap::Subcommand;

use crate::display::format_budget;
use crate::error::{QbudgetError, QbudgetResult};
use crate::models::Money;
use crate::services::{AuthService, BudgetService};
use crate::storage::Storage;

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Show the current budget
    Show,

    /// Set monthly income
    SetIncome {
        /// Amount (e.g., "100000" or "100000.00")
        amount: String,
    },

    /// Set (or add) an expense line
    Set {
        /// Category name (exact, case-sensitive)
        category: String,
        /// Amount (e.g., "5000" or "5000.00")
        amount: String,
    },

    /// Remove an expense line
    Remove {
        /// Category name (exact, case-sensitive)
        category: String,
    },
}

/// Handle a budget command
pub fn handle_budget_command(storage: &Storage, cmd: BudgetCommands) -> QbudgetResult<()> {
    let user = AuthService::new(storage).current_user()?;
    let service = BudgetService::new(storage);

    match cmd {
        BudgetCommands::Show => {
            let budget = service.load(&user.email)?;
            println!("Budget for {}", user.email);
            println!();
            print!("{}", format_budget(&budget));
        }
        BudgetCommands::SetIncome { amount } => {
            let income = parse_amount(&amount)?;
            let budget = service.set_income(&user.email, income)?;
            println!("Income set to {}.", budget.income);
        }
        BudgetCommands::Set { category, amount } => {
            let amount = parse_amount(&amount)?;
            service.set_expense(&user.email, &category, amount)?;
            println!("Set {} to {}.", category, amount);
        }
        BudgetCommands::Remove { category } => {
            service.remove_expense(&user.email, &category)?;
            println!("Removed {}.", category);
        }
    }

    Ok(())
}

/// Parse a rupee amount from CLI input
pub fn parse_amount(s: &str) -> QbudgetResult<Money> {
    Money::parse(s).map_err(|e| QbudgetError::Validation(e.to_string()))
}
