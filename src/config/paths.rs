//! Path management for quantum-budget-cli
//!
//! Resolves the configuration and data directories used by the application.
//!
//! ## Path Resolution Order
//!
//! 1. `QUANTUM_BUDGET_DATA_DIR` environment variable (if set)
//! 2. Platform config directory via `directories` (e.g.
//!    `~/.config/quantum-budget` on Linux)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::QbudgetError;

/// Manages all paths used by quantum-budget-cli
#[derive(Debug, Clone)]
pub struct QbudgetPaths {
    /// Base directory for all application data
    base_dir: PathBuf,
}

impl QbudgetPaths {
    /// Create a new QbudgetPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, QbudgetError> {
        let base_dir = if let Ok(custom) = std::env::var("QUANTUM_BUDGET_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            let dirs = ProjectDirs::from("", "", "quantum-budget").ok_or_else(|| {
                QbudgetError::Config("Could not determine a home directory".into())
            })?;
            dirs.config_dir().to_path_buf()
        };

        Ok(Self { base_dir })
    }

    /// Create QbudgetPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (base/data/)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to users.json
    pub fn users_file(&self) -> PathBuf {
        self.data_dir().join("users.json")
    }

    /// Get the path to budgets.json (one budget per user email)
    pub fn budgets_file(&self) -> PathBuf {
        self.data_dir().join("budgets.json")
    }

    /// Get the path to session.json (current login state)
    pub fn session_file(&self) -> PathBuf {
        self.data_dir().join("session.json")
    }

    /// Ensure all required directories exist
    pub fn ensure_directories(&self) -> Result<(), QbudgetError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| QbudgetError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| QbudgetError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }
}
