mod content_store_port;
mod media_host_port;

pub use content_store_port::ContentStorePort;
#[cfg(test)]
pub use content_store_port::MockContentStorePort;
pub use media_host_port::{MediaHostPort, UploadedMedia};
