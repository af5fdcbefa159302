//! Repository Implementations
//!
//! PostgreSQL implementations of the domain repository traits.

pub mod account_repository;
pub mod customer_repository;

pub use account_repository::PgAccountRepository;
pub use customer_repository::PgCustomerRepository;
