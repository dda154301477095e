//! Infrastructure layer with external service adapters.

/// Application configuration.
pub mod config;
/// Media URL pipeline and upload client.
pub mod media;
/// Content store adapters.
pub mod store;

pub use config::{CliArgs, Command, ConfigError, LogLevel, SiteConfig};
pub use media::{
    CloudinaryClient, TransformPreset, detail_image_url, drive_share_to_direct,
    event_card_image_url, news_card_image_url, rewrite, upload_thumbnail_url,
};
pub use store::SupabaseContentStore;
