//! CSV export

use crate::error::{QbudgetError, QbudgetResult};
use crate::models::Budget;

/// Render the expense list as CSV with amounts in rupees
///
/// The income appears as a leading `Income` row so the file is
/// self-contained.
pub fn to_csv(budget: &Budget) -> QbudgetResult<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer
        .write_record(["type", "category", "amount"])
        .map_err(|e| QbudgetError::Export(format!("CSV write failed: {}", e)))?;

    writer
        .write_record(["income", "", &rupee_string(budget.income)])
        .map_err(|e| QbudgetError::Export(format!("CSV write failed: {}", e)))?;

    for item in &budget.expenses {
        writer
            .write_record(["expense", &item.category, &rupee_string(item.amount)])
            .map_err(|e| QbudgetError::Export(format!("CSV write failed: {}", e)))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| QbudgetError::Export(format!("CSV flush failed: {}", e)))?;

    String::from_utf8(bytes).map_err(|e| QbudgetError::Export(format!("CSV encoding: {}", e)))
}

fn rupee_string(amount: crate::models::Money) -> String {
    amount.format_with_symbol("")
}
