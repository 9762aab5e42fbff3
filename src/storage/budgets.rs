//! Budget repository for JSON storage
//!
//! Persists one budget per user email to budgets.json. A user who has never
//! saved a budget gets the starter budget seeded on first access.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::QbudgetError;
use crate::models::Budget;

use super::file_io::{read_json, write_json_atomic};

/// Serializable budget data structure (email -> budget)
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct BudgetData {
    budgets: HashMap<String, Budget>,
}

/// Repository for per-user budget persistence
pub struct BudgetRepository {
    path: PathBuf,
    data: RwLock<HashMap<String, Budget>>,
}

impl BudgetRepository {
    /// Create a new budget repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
        }
    }

    /// Load budgets from disk
    pub fn load(&self) -> Result<(), QbudgetError> {
        let file_data: BudgetData = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| QbudgetError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        *data = file_data.budgets;
        Ok(())
    }

    /// Save budgets to disk
    pub fn save(&self) -> Result<(), QbudgetError> {
        let data = self
            .data
            .read()
            .map_err(|e| QbudgetError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let file_data = BudgetData {
            budgets: data.clone(),
        };

        write_json_atomic(&self.path, &file_data)
    }

    /// Get the budget for a user, if one has been saved
    pub fn get(&self, email: &str) -> Result<Option<Budget>, QbudgetError> {
        let data = self
            .data
            .read()
            .map_err(|e| QbudgetError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.get(email).cloned())
    }

    /// Get the budget for a user, seeding the starter budget if absent
    pub fn get_or_seed(&self, email: &str) -> Result<Budget, QbudgetError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| QbudgetError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        Ok(data
            .entry(email.to_string())
            .or_insert_with(Budget::starter)
            .clone())
    }

    /// Insert or replace a user's budget
    pub fn upsert(&self, email: &str, budget: Budget) -> Result<(), QbudgetError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| QbudgetError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.insert(email.to_string(), budget);
        Ok(())
    }
}
