//! Customer entity and repository trait.
//!
//! Maps to the `customers` table in the database schema.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::address::Address;
use crate::shared::error::AppError;

/// Represents a customer record.
///
/// Maps to the `customers` table:
/// - id: VARCHAR PRIMARY KEY
/// - index: INTEGER NULL
/// - age: INTEGER NULL
/// - eye_color: VARCHAR(20) NULL
/// - name: VARCHAR(100) NULL
/// - gender: VARCHAR(20) NULL
/// - company: VARCHAR(100) NULL
/// - email: VARCHAR(255) NULL
/// - phone: VARCHAR(30) NULL
/// - about: TEXT NULL
/// - registered: VARCHAR(50) NULL
/// - latitude: DOUBLE PRECISION NULL
/// - longitude: DOUBLE PRECISION NULL
/// - tags: TEXT[] NOT NULL DEFAULT '{}'
/// - address_id: VARCHAR NOT NULL REFERENCES addresses(id)
/// - created_at / updated_at: TIMESTAMPTZ NOT NULL DEFAULT NOW()
///
/// All demographic fields are nullable; presence is the only invariant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    /// Customer identifier (primary key)
    pub id: String,

    /// Ordinal index carried over from the source dataset
    pub index: Option<i32>,

    /// Age in years
    pub age: Option<i32>,

    /// Eye color
    pub eye_color: Option<String>,

    /// Full name
    pub name: Option<String>,

    /// Gender
    pub gender: Option<String>,

    /// Employer name
    pub company: Option<String>,

    /// Email address
    pub email: Option<String>,

    /// Phone number
    pub phone: Option<String>,

    /// Free-text bio
    pub about: Option<String>,

    /// Registration date string from the source dataset
    pub registered: Option<String>,

    /// Latitude in decimal degrees
    pub latitude: Option<f64>,

    /// Longitude in decimal degrees
    pub longitude: Option<f64>,

    /// Free-form tags
    #[serde(default)]
    pub tags: Vec<String>,

    /// Referenced address row
    pub address_id: String,

    /// Record creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl Customer {
    /// Whether both coordinates are present on the record.
    pub fn has_coordinates(&self) -> bool {
        self.latitude.is_some() && self.longitude.is_some()
    }
}

/// A customer joined with its address row.
#[derive(Debug, Clone, Serialize)]
pub struct CustomerProfile {
    pub customer: Customer,
    pub address: Address,
}

/// Repository trait for customer data access operations.
///
/// Implementations of this trait handle the actual database interactions.
/// The trait is defined in the domain layer to maintain dependency inversion.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// Find a customer by its id.
    async fn find_by_id(&self, id: &str) -> Result<Option<Customer>, AppError>;

    /// Find a customer joined with its address.
    async fn find_profile(&self, id: &str) -> Result<Option<CustomerProfile>, AppError>;

    /// Persist an updated customer record.
    async fn update(&self, customer: &Customer) -> Result<Customer, AppError>;

    /// Case-insensitive substring search over name, email, company, phone,
    /// address city and zip code.
    async fn search(&self, term: &str) -> Result<Vec<CustomerProfile>, AppError>;

    /// List every customer joined with its address.
    async fn list_all(&self) -> Result<Vec<CustomerProfile>, AppError>;
}
