//! REST API endpoint tests.

mod auth_tests;
mod customer_tests;
mod health_tests;
