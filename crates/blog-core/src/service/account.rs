//! User accounts: registration and profile edits

use crate::error::{BlogError, Result};
use crate::storage::BlogStorage;
use crate::user::User;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

/// Partial update of a profile; `None` keeps the current value
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileChanges {
    pub full_name: Option<String>,
    pub email: Option<String>,
}

impl ProfileChanges {
    /// Check if nothing would change
    pub fn is_empty(&self) -> bool {
        self.full_name.is_none() && self.email.is_none()
    }
}

/// Backend for user accounts
pub struct AccountService {
    storage: Arc<dyn BlogStorage>,
}

impl AccountService {
    pub fn new(storage: Arc<dyn BlogStorage>) -> Self {
        Self { storage }
    }

    fn validate(full_name: &str, email: &str) -> Result<()> {
        if full_name.trim().is_empty() {
            return Err(BlogError::Validation("Full name cannot be empty".to_string()));
        }
        let email = email.trim();
        match email.split_once('@') {
            Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(()),
            _ => Err(BlogError::Validation(format!(
                "'{}' is not a valid email address",
                email
            ))),
        }
    }

    /// Register a new user; existing usernames are rejected
    pub fn register(&self, user: User) -> Result<User> {
        Self::validate(&user.full_name, &user.email)?;
        match self.storage.load_user(&user.username) {
            Ok(_) => {
                return Err(BlogError::Validation(format!(
                    "User '{}' already exists",
                    user.username
                )))
            }
            Err(BlogError::UserNotFound(_)) => {}
            Err(e) => return Err(e),
        }

        self.storage.save_user(&user)?;
        info!(user = %user.username, "User registered");
        Ok(user)
    }

    /// Edit the actor's own profile, keeping username and roles
    pub fn update_profile(&self, actor: &User, changes: ProfileChanges) -> Result<User> {
        let mut user = self.storage.load_user(&actor.username)?;

        let full_name = changes.full_name.unwrap_or_else(|| user.full_name.clone());
        let email = changes.email.unwrap_or_else(|| user.email.clone());
        Self::validate(&full_name, &email)?;

        user.full_name = full_name.trim().to_string();
        user.email = email.trim().to_string();

        self.storage.save_user(&user)?;
        info!(user = %user.username, "Profile updated");
        Ok(user)
    }
}
