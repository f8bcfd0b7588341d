//! Account Entity
//!
//! A registered user identity with credentials.

use chrono::{DateTime, Utc};
use kernel::id::AccountId;

use crate::domain::value_object::{
    account_password::AccountPassword, email::Email, username::Username,
};

/// Account entity
///
/// The password hash lives on the entity but is wrapped in a type that
/// never exposes the plaintext and redacts itself in Debug output.
#[derive(Debug, Clone)]
pub struct Account {
    /// Internal UUID identifier
    pub account_id: AccountId,
    /// Username (unique, for login and display)
    pub username: Username,
    /// Email address (unique)
    pub email: Email,
    /// Argon2id password hash (PHC string format)
    pub password_hash: AccountPassword,
    /// Last successful login time
    pub last_login_at: Option<DateTime<Utc>>,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

impl Account {
    /// Create a new account
    pub fn new(username: Username, email: Email, password_hash: AccountPassword) -> Self {
        let now = Utc::now();

        Self {
            account_id: AccountId::new(),
            username,
            email,
            password_hash,
            last_login_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Record successful login
    pub fn record_login(&mut self) {
        let now = Utc::now();
        self.last_login_at = Some(now);
        self.updated_at = now;
    }
}
