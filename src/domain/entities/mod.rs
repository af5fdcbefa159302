//! Domain entities and repository traits.

pub mod account;
pub mod address;
pub mod customer;

pub use account::{Account, AccountRepository, Role};
pub use address::Address;
pub use customer::{Customer, CustomerProfile, CustomerRepository};
