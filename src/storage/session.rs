//! Session storage
//!
//! Remembers which user is currently logged in across CLI invocations by
//! persisting the email to session.json.

use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::QbudgetError;

use super::file_io::{read_json, write_json_atomic};

/// Serializable session state
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct SessionData {
    current_user: Option<String>,
}

/// Store for the current login session
pub struct SessionStore {
    path: PathBuf,
    data: RwLock<SessionData>,
}

impl SessionStore {
    /// Create a new session store
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(SessionData::default()),
        }
    }

    /// Load session state from disk
    pub fn load(&self) -> Result<(), QbudgetError> {
        let file_data: SessionData = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| QbudgetError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        *data = file_data;
        Ok(())
    }

    /// Save session state to disk
    pub fn save(&self) -> Result<(), QbudgetError> {
        let data = self
            .data
            .read()
            .map_err(|e| QbudgetError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        write_json_atomic(&self.path, &*data)
    }

    /// Email of the currently logged-in user, if any
    pub fn current_user(&self) -> Result<Option<String>, QbudgetError> {
        let data = self
            .data
            .read()
            .map_err(|e| QbudgetError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.current_user.clone())
    }

    /// Mark a user as logged in
    pub fn login(&self, email: &str) -> Result<(), QbudgetError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| QbudgetError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.current_user = Some(email.to_string());
        Ok(())
    }

    /// Clear the current session
    pub fn logout(&self) -> Result<(), QbudgetError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| QbudgetError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.current_user = None;
        Ok(())
    }
}
