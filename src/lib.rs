//! Assosite - content and media core for a small association website.
//!
//! This crate provides the listing logic (category and month filters,
//! excerpts) and the media URL pipeline (drive-link normalization, CDN
//! transform rewriting, uploads) behind the site's public pages.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Application layer containing content use cases.
pub mod application;
/// Domain layer containing entities, errors, services, and port definitions.
pub mod domain;
/// Infrastructure layer containing adapters for external services.
pub mod infrastructure;

/// Current version of the application.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name.
pub const NAME: &str = "assosite";
