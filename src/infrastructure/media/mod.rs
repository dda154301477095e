//! Media URL pipeline: share-link normalization, CDN transform rewriting,
//! and the upload client.

mod cloudinary;
mod drive_link;
mod transform;

pub use cloudinary::CloudinaryClient;
pub use drive_link::drive_share_to_direct;
pub use transform::{
    FitMode, TransformPreset, detail_image_url, event_card_image_url, news_card_image_url,
    rewrite, upload_thumbnail_url,
};
