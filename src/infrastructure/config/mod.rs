//! Application configuration.

pub mod args;
pub mod site_config;

pub use args::{CliArgs, Command};
pub use site_config::{ConfigError, LogLevel, MediaConfig, SiteConfig, StoreConfig};
