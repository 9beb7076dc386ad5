//! HTTP handlers for the mentor service.

pub mod execute;
pub mod health;
pub mod index;

pub use execute::execute;
pub use health::{health_check, readiness_check};
pub use index::index;
