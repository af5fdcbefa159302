//! Infrastructure Layer
//!
//! Contains implementations for external services including:
//! - Database repositories (PostgreSQL)
//! - Metrics collection (Prometheus)

pub mod database;
pub mod metrics;
pub mod repositories;
