//! User entity representing a registered account.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Privilege level granted at registration time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Privileges {
    /// Regular account
    Regular,
    /// Staff + superuser account
    Superuser,
}

/// User entity representing a registered user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user
    pub id: Uuid,

    /// Normalized e-mail address, used as the login name
    pub email: String,

    /// Optional display name
    pub username: Option<String>,

    /// bcrypt hash of the password
    #[serde(skip_serializing)]
    pub password_hash: String,

    /// Inactive users cannot log in
    pub is_active: bool,

    /// Whether the user can access administrative tooling
    pub is_staff: bool,

    /// Whether the user holds every permission
    pub is_superuser: bool,

    /// Accounts created through demo login
    pub is_demo: bool,

    /// Timestamp when the user was created
    pub date_joined: DateTime<Utc>,

    /// Timestamp of the user's last login
    pub last_login: Option<DateTime<Utc>>,
}

impl User {
    /// Creates a new active, unprivileged user
    pub fn new(email: String, username: Option<String>, password_hash: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            email,
            username,
            password_hash,
            is_active: true,
            is_staff: false,
            is_superuser: false,
            is_demo: false,
            date_joined: Utc::now(),
            last_login: None,
        }
    }

    /// Applies registration privileges
    pub fn with_privileges(mut self, privileges: Privileges) -> Self {
        let elevated = privileges == Privileges::Superuser;
        self.is_staff = elevated;
        self.is_superuser = elevated;
        self
    }

    /// Marks the account as a demo account
    pub fn as_demo(mut self) -> Self {
        self.is_demo = true;
        self
    }

    /// Updates the last login timestamp
    pub fn update_last_login(&mut self) {
        self.last_login = Some(Utc::now());
    }

    /// Deactivates the account
    pub fn deactivate(&mut self) {
        self.is_active = false;
    }
}
