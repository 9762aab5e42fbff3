//! Scenario CLI command
//!
//! Runs a what-if scenario against the logged-in user's budget, prints the
//! before/after comparison and insights, and optionally applies the result.

use crate::config::Settings;
use crate::display::format_optimization;
use crate::error::QbudgetResult;
use crate::models::Scenario;
use crate::services::{AuthService, BudgetService, ScenarioOptimizer};
use crate::storage::Storage;

/// Handle `qbudget scenario <goal> <amount> [--apply]`
pub fn handle_scenario_command(
    storage: &Storage,
    settings: &Settings,
    goal: &str,
    amount: &str,
    apply: bool,
) -> QbudgetResult<()> {
    let user = AuthService::new(storage).current_user()?;
    let scenario = Scenario::parse(goal, amount)?;

    let budget_service = BudgetService::new(storage);
    let budget = budget_service.load(&user.email)?;

    let optimizer = ScenarioOptimizer::new(settings.flexible_categories.clone());
    let result = optimizer.optimize(&budget, &scenario);

    println!("Scenario: {}", scenario.describe());
    println!();
    print!("{}", format_optimization(&budget, &result));

    if apply {
        budget_service.apply_optimization(&user.email, &result)?;
        println!();
        println!("Optimized budget applied.");
    } else {
        println!();
        println!("This was a simulation. Re-run with --apply to keep the optimized budget.");
    }

    Ok(())
}
