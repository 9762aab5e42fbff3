//! User settings for quantum-budget-cli
//!
//! Manages user preferences: the set of flexible expense categories the
//! scenario optimizer may trim, and the Gemini model used for spending
//! suggestions.

use serde::{Deserialize, Serialize};

use super::paths::QbudgetPaths;
use crate::error::QbudgetError;
use crate::services::optimizer::DEFAULT_FLEXIBLE_CATEGORIES;

/// User settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Expense categories the optimizer may reduce automatically
    #[serde(default = "default_flexible_categories")]
    pub flexible_categories: Vec<String>,

    /// Gemini model used for spending suggestions
    #[serde(default = "default_gemini_model")]
    pub gemini_model: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_flexible_categories() -> Vec<String> {
    DEFAULT_FLEXIBLE_CATEGORIES
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_gemini_model() -> String {
    "gemini-2.5-flash".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            flexible_categories: default_flexible_categories(),
            gemini_model: default_gemini_model(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &QbudgetPaths) -> Result<Self, QbudgetError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| QbudgetError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                QbudgetError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &QbudgetPaths) -> Result<(), QbudgetError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| QbudgetError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| QbudgetError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(
            settings.flexible_categories,
            vec!["Entertainment", "Food", "Personal Care", "Transportation"]
        );
        assert_eq!(settings.gemini_model, "gemini-2.5-flash");
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = QbudgetPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.flexible_categories = vec!["Subscriptions".to_string()];
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.flexible_categories, vec!["Subscriptions"]);
    }

    #[test]
    fn test_load_tolerates_retired_fields() {
        // Settings files written by older builds carried a currency_symbol
        // field; it must be ignored, not a parse error
        let temp_dir = TempDir::new().unwrap();
        let paths = QbudgetPaths::with_base_dir(temp_dir.path().to_path_buf());
        paths.ensure_directories().unwrap();

        std::fs::write(
            paths.settings_file(),
            r#"{"schema_version":1,"currency_symbol":"₹","flexible_categories":["Food"],"gemini_model":"gemini-2.5-flash"}"#,
        )
        .unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.flexible_categories, vec!["Food"]);
    }

    #[test]
    fn test_load_missing_file_returns_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = QbudgetPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings::load_or_create(&paths).unwrap();
        assert_eq!(settings.schema_version, 1);
    }
}
