//! YAML export

use crate::error::{QbudgetError, QbudgetResult};
use crate::models::Budget;

/// Serialize the full budget as YAML
pub fn to_yaml(budget: &Budget) -> QbudgetResult<String> {
    serde_yaml::to_string(budget)
        .map_err(|e| QbudgetError::Export(format!("YAML serialization failed: {}", e)))
}
