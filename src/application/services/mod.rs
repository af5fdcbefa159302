//! Application Services
//!
//! Business logic services that coordinate domain operations.
//!
//! ## Available Services
//!
//! - **AuthService**: Credential verification and JWT issuance
//! - **CustomerService**: Customer record operations (edit, search, distance, listing)

pub mod auth_service;
pub mod customer_service;

// Re-export auth service types
pub use auth_service::{hash_password, AuthError, AuthService, AuthServiceImpl, AuthToken, Claims};

// Re-export customer service types
pub use customer_service::{
    AddressDto, CustomerDto, CustomerError, CustomerService, CustomerServiceImpl,
    UpdateCustomerDto, ZipGroupDto,
};
