//! Auth CLI commands
//!
//! Implements register, login, logout, and whoami. Passwords are read with a
//! hidden prompt, never from argv.

use crate::error::{QbudgetError, QbudgetResult};
use crate::services::AuthService;
use crate::storage::Storage;

/// Handle `qbudget register <email>`
pub fn handle_register(storage: &Storage, email: &str) -> QbudgetResult<()> {
    let password = rpassword::prompt_password("Password: ")
        .map_err(|e| QbudgetError::Io(format!("Failed to read password: {}", e)))?;
    let confirm = rpassword::prompt_password("Confirm password: ")
        .map_err(|e| QbudgetError::Io(format!("Failed to read password: {}", e)))?;

    if password != confirm {
        return Err(QbudgetError::Validation("Passwords do not match".into()));
    }

    let service = AuthService::new(storage);
    let user = service.register(email, &password)?;

    println!("Registered {}.", user.email);
    println!("Run 'qbudget login {}' to log in.", user.email);
    Ok(())
}

/// Handle `qbudget login <email>`
pub fn handle_login(storage: &Storage, email: &str) -> QbudgetResult<()> {
    let password = rpassword::prompt_password("Password: ")
        .map_err(|e| QbudgetError::Io(format!("Failed to read password: {}", e)))?;

    let service = AuthService::new(storage);
    let user = service.login(email, &password)?;

    println!("Logged in as {}.", user.email);
    Ok(())
}

/// Handle `qbudget logout`
pub fn handle_logout(storage: &Storage) -> QbudgetResult<()> {
    let service = AuthService::new(storage);
    service.logout()?;
    println!("Logged out.");
    Ok(())
}

/// Handle `qbudget whoami`
pub fn handle_whoami(storage: &Storage) -> QbudgetResult<()> {
    let service = AuthService::new(storage);
    let user = service.current_user()?;
    println!("{}", user.email);
    Ok(())
}
