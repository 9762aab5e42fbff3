//! User repository for JSON storage
//!
//! Manages loading and saving registered users to users.json, keyed by email.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::QbudgetError;
use crate::models::User;

use super::file_io::{read_json, write_json_atomic};

/// Serializable user data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct UserData {
    users: Vec<User>,
}

/// Repository for user persistence
pub struct UserRepository {
    path: PathBuf,
    data: RwLock<HashMap<String, User>>,
}

impl UserRepository {
    /// Create a new user repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
        }
    }

    /// Load users from disk
    pub fn load(&self) -> Result<(), QbudgetError> {
        let file_data: UserData = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| QbudgetError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.clear();
        for user in file_data.users {
            data.insert(user.email.clone(), user);
        }

        Ok(())
    }

    /// Save users to disk
    pub fn save(&self) -> Result<(), QbudgetError> {
        let data = self
            .data
            .read()
            .map_err(|e| QbudgetError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut users: Vec<_> = data.values().cloned().collect();
        users.sort_by(|a, b| a.email.cmp(&b.email));

        write_json_atomic(&self.path, &UserData { users })
    }

    /// Get a user by email
    pub fn get(&self, email: &str) -> Result<Option<User>, QbudgetError> {
        let data = self
            .data
            .read()
            .map_err(|e| QbudgetError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.get(email).cloned())
    }

    /// Check whether a user with this email exists
    pub fn exists(&self, email: &str) -> Result<bool, QbudgetError> {
        Ok(self.get(email)?.is_some())
    }

    /// Insert or update a user
    pub fn upsert(&self, user: User) -> Result<(), QbudgetError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| QbudgetError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.insert(user.email.clone(), user);
        Ok(())
    }

    /// Number of registered users
    pub fn count(&self) -> Result<usize, QbudgetError> {
        let data = self
            .data
            .read()
            .map_err(|e| QbudgetError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.len())
    }
}
