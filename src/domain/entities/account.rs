//! Operator account entity and repository trait.
//!
//! Accounts are the logins that operate on customer records; they are not
//! customers themselves. Maps to the `accounts` table.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::error::AppError;

/// Authorization role carried in the JWT `role` claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Client,
}

impl Role {
    /// Parse from the database/claim string representation.
    ///
    /// Unknown values are rejected rather than defaulted; a token with an
    /// unrecognized role must not pass authorization.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "admin" => Some(Self::Admin),
            "client" => Some(Self::Client),
            _ => None,
        }
    }

    /// Convert to the database/claim string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Client => "client",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An operator login account.
///
/// Maps to the `accounts` table:
/// - id: UUID PRIMARY KEY
/// - username: VARCHAR(64) NOT NULL UNIQUE
/// - password_hash: VARCHAR(255) NOT NULL
/// - role: VARCHAR(20) NOT NULL
/// - created_at / updated_at: TIMESTAMPTZ NOT NULL DEFAULT NOW()
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    /// Account identifier (primary key)
    pub id: uuid::Uuid,

    /// Login name (unique)
    pub username: String,

    /// Argon2 password hash
    #[serde(skip_serializing)]
    pub password_hash: String,

    /// Authorization role
    pub role: Role,

    /// Account creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

/// Repository trait for account data access operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Find an account by username.
    async fn find_by_username(&self, username: &str) -> Result<Option<Account>, AppError>;

    /// Create a new account.
    async fn create(&self, account: &Account) -> Result<Account, AppError>;

    /// Check if a username is taken.
    async fn username_exists(&self, username: &str) -> Result<bool, AppError>;
}
