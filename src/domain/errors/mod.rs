//! Domain error types.

mod media_error;
mod store_error;

pub use media_error::MediaError;
pub use store_error::StoreError;
