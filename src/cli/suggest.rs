//! Suggestion CLI command
//!
//! Fetches AI spending suggestions for the logged-in user's surplus.

use crate::config::Settings;
use crate::display::format_suggestions;
use crate::error::QbudgetResult;
use crate::services::{AuthService, BudgetService, SuggestionService};
use crate::storage::Storage;

/// Handle `qbudget suggest [--interests "..."]`
pub fn handle_suggest_command(
    storage: &Storage,
    settings: &Settings,
    interests: &str,
) -> QbudgetResult<()> {
    let user = AuthService::new(storage).current_user()?;
    let budget = BudgetService::new(storage).load(&user.email)?;
    let surplus = budget.surplus();

    let service = SuggestionService::from_env(settings.gemini_model.clone())?;
    let suggestions = service.fetch(surplus, interests)?;

    print!("{}", format_suggestions(surplus, &suggestions));
    Ok(())
}
