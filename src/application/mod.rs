//! Application layer with content use cases.

/// Use-case services.
pub mod services;

pub use services::{ContentService, HomePage};
