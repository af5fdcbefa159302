//! Presentation Layer
//!
//! HTTP routes, request handlers, and middleware.

pub mod http;
pub mod middleware;
