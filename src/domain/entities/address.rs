//! Address entity.
//!
//! Maps to the `addresses` table. Customers reference an address row
//! through `Customer::address_id`.

use serde::{Deserialize, Serialize};

/// A postal address attached to a customer record.
///
/// Maps to the `addresses` table:
/// - id: VARCHAR PRIMARY KEY
/// - street: TEXT NULL
/// - city: VARCHAR(100) NULL
/// - state: VARCHAR(100) NULL
/// - zip_code: VARCHAR(20) NOT NULL
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    /// Address identifier (primary key)
    pub id: String,

    /// Street line
    pub street: Option<String>,

    /// City name
    pub city: Option<String>,

    /// State or province
    pub state: Option<String>,

    /// Postal code; customers are grouped by this value
    pub zip_code: String,
}
