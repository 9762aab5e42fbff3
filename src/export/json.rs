//! JSON export

use crate::error::{QbudgetError, QbudgetResult};
use crate::models::Budget;

/// Serialize the full budget as pretty-printed JSON
pub fn to_json(budget: &Budget) -> QbudgetResult<String> {
    serde_json::to_string_pretty(budget)
        .map_err(|e| QbudgetError::Export(format!("JSON serialization failed: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_round_trip() {
        let budget = Budget::starter();
        let json = to_json(&budget).unwrap();
        let loaded: Budget = serde_json::from_str(&json).unwrap();
        assert_eq!(budget, loaded);
    }
}
