//! Authentication service
//!
//! Handles registration, credential checks, and the login session. Passwords
//! are hashed with Argon2id; only the PHC hash string is stored.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::error::{QbudgetError, QbudgetResult};
use crate::models::User;
use crate::storage::Storage;

/// Service for user registration and login
pub struct AuthService<'a> {
    storage: &'a Storage,
}

impl<'a> AuthService<'a> {
    /// Create a new auth service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Register a new user
    ///
    /// Rejects duplicate emails and empty credentials.
    pub fn register(&self, email: &str, password: &str) -> QbudgetResult<User> {
        let email = email.trim();
        if email.is_empty() || !email.contains('@') {
            return Err(QbudgetError::Validation(format!(
                "Invalid email address: '{}'",
                email
            )));
        }
        if password.is_empty() {
            return Err(QbudgetError::Validation("Password must not be empty".into()));
        }
        if self.storage.users.exists(email)? {
            return Err(QbudgetError::user_exists(email));
        }

        let user = User::new(email, hash_password(password)?);
        self.storage.users.upsert(user.clone())?;
        self.storage.users.save()?;

        Ok(user)
    }

    /// Check credentials, returning the user on success
    ///
    /// An unknown email and a wrong password produce the same error, so the
    /// CLI does not leak which addresses are registered.
    pub fn authenticate(&self, email: &str, password: &str) -> QbudgetResult<User> {
        let invalid = || QbudgetError::Auth("Invalid email or password".into());

        let user = self
            .storage
            .users
            .get(email.trim())?
            .ok_or_else(invalid)?;

        let parsed = PasswordHash::new(&user.password_hash)
            .map_err(|e| QbudgetError::Auth(format!("Corrupt password hash: {}", e)))?;

        Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .map_err(|_| invalid())?;

        Ok(user)
    }

    /// Authenticate and persist the session
    pub fn login(&self, email: &str, password: &str) -> QbudgetResult<User> {
        let user = self.authenticate(email, password)?;
        self.storage.session.login(&user.email)?;
        self.storage.session.save()?;
        Ok(user)
    }

    /// Clear the persisted session
    pub fn logout(&self) -> QbudgetResult<()> {
        self.storage.session.logout()?;
        self.storage.session.save()
    }

    /// The currently logged-in user
    pub fn current_user(&self) -> QbudgetResult<User> {
        let email = self
            .storage
            .session
            .current_user()?
            .ok_or_else(|| QbudgetError::Auth("Not logged in. Run 'qbudget login' first.".into()))?;

        self.storage
            .users
            .get(&email)?
            .ok_or_else(|| QbudgetError::user_not_found(email))
    }
}

/// Hash a password into an Argon2id PHC string
fn hash_password(password: &str) -> QbudgetResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| QbudgetError::Auth(format!("Failed to hash password: {}", e)))?;
    Ok(hash.to_string())
}
