//! service-core: shared infrastructure for the mentor service.
pub mod config;
pub mod error;
pub mod observability;
