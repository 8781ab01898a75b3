//! Blog users and roles

use crate::types::Username;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Access level of a user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Can read and comment
    User,
    /// Can also manage posts
    Admin,
}

impl Role {
    /// Parse from a string such as "admin"
    pub fn from_str_name(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "user" => Some(Role::User),
            "admin" => Some(Role::Admin),
            _ => None,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::User => write!(f, "user"),
            Role::Admin => write!(f, "admin"),
        }
    }
}

/// A registered user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub username: Username,
    pub full_name: String,
    pub email: String,
    #[serde(default)]
    pub roles: Vec<Role>,
}

impl User {
    /// Create a user with the `User` role
    pub fn new(username: Username, full_name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            username,
            full_name: full_name.into(),
            email: email.into(),
            roles: vec![Role::User],
        }
    }

    /// Grant an extra role
    pub fn with_role(mut self, role: Role) -> Self {
        if !self.roles.contains(&role) {
            self.roles.push(role);
        }
        self
    }

    /// Check for the admin role
    pub fn is_admin(&self) -> bool {
        self.roles.contains(&Role::Admin)
    }
}
