//! Budget export
//!
//! Serializes a budget to JSON, CSV, or YAML. JSON and YAML carry the full
//! budget (amounts in paise, the storage representation); CSV is a flat
//! category/amount listing in rupees.

pub mod csv;
pub mod json;
pub mod yaml;

use std::str::FromStr;

use crate::error::{QbudgetError, QbudgetResult};
use crate::models::Budget;

/// Supported export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Csv,
    Yaml,
}

impl FromStr for ExportFormat {
    type Err = QbudgetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            "yaml" | "yml" => Ok(Self::Yaml),
            other => Err(QbudgetError::Export(format!(
                "Unknown export format '{}' (expected json, csv, or yaml)",
                other
            ))),
        }
    }
}

/// Render a budget in the requested format
pub fn export_budget(budget: &Budget, format: ExportFormat) -> QbudgetResult<String> {
    match format {
        ExportFormat::Json => json::to_json(budget),
        ExportFormat::Csv => csv::to_csv(budget),
        ExportFormat::Yaml => yaml::to_yaml(budget),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_parsing() {
        assert_eq!("json".parse::<ExportFormat>().unwrap(), ExportFormat::Json);
        assert_eq!("CSV".parse::<ExportFormat>().unwrap(), ExportFormat::Csv);
        assert_eq!("yml".parse::<ExportFormat>().unwrap(), ExportFormat::Yaml);
        assert!("xml".parse::<ExportFormat>().is_err());
    }

    #[test]
    fn test_export_budget_all_formats() {
        let budget = Budget::starter();
        for format in [ExportFormat::Json, ExportFormat::Csv, ExportFormat::Yaml] {
            let output = export_budget(&budget, format).unwrap();
            assert!(output.contains("Housing"));
        }
    }
}
