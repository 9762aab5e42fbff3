//! Storage layer for quantum-budget-cli
//!
//! Provides JSON file storage with atomic writes and automatic directory
//! creation.

pub mod budgets;
pub mod file_io;
pub mod session;
pub mod users;

pub use budgets::BudgetRepository;
pub use file_io::{read_json, write_json_atomic};
pub use session::SessionStore;
pub use users::UserRepository;

use crate::config::paths::QbudgetPaths;
use crate::error::QbudgetError;

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: QbudgetPaths,
    pub users: UserRepository,
    pub budgets: BudgetRepository,
    pub session: SessionStore,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: QbudgetPaths) -> Result<Self, QbudgetError> {
        paths.ensure_directories()?;

        Ok(Self {
            users: UserRepository::new(paths.users_file()),
            budgets: BudgetRepository::new(paths.budgets_file()),
            session: SessionStore::new(paths.session_file()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &QbudgetPaths {
        &self.paths
    }

    /// Load all data from disk
    pub fn load_all(&mut self) -> Result<(), QbudgetError> {
        self.users.load()?;
        self.budgets.load()?;
        self.session.load()?;
        Ok(())
    }

    /// Save all data to disk
    pub fn save_all(&self) -> Result<(), QbudgetError> {
        self.users.save()?;
        self.budgets.save()?;
        self.session.save()?;
        Ok(())
    }
}
