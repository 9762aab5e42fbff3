//! Export CLI command

use std::path::PathBuf;

use crate::error::{QbudgetError, QbudgetResult};
use crate::export::{export_budget, ExportFormat};
use crate::services::{AuthService, BudgetService};
use crate::storage::Storage;

/// Handle `qbudget export [--format json] [--output file]`
pub fn handle_export_command(
    storage: &Storage,
    format: &str,
    output: Option<PathBuf>,
) -> QbudgetResult<()> {
    let user = AuthService::new(storage).current_user()?;
    let budget = BudgetService::new(storage).load(&user.email)?;

    let format: ExportFormat = format.parse()?;
    let rendered = export_budget(&budget, format)?;

    match output {
        Some(path) => {
            std::fs::write(&path, rendered)
                .map_err(|e| QbudgetError::Export(format!("Failed to write {}: {}", path.display(), e)))?;
            println!("Exported budget to {}.", path.display());
        }
        None => print!("{}", rendered),
    }

    Ok(())
}
