//! Port definition for the media host.

use async_trait::async_trait;

use crate::domain::errors::MediaError;

/// An upload accepted by the media host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedMedia {
    secure_url: String,
    public_id: String,
    format: Option<String>,
}

#[allow(missing_docs)]
impl UploadedMedia {
    #[must_use]
    pub fn new(secure_url: impl Into<String>, public_id: impl Into<String>) -> Self {
        Self {
            secure_url: secure_url.into(),
            public_id: public_id.into(),
            format: None,
        }
    }

    #[must_use]
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    #[must_use]
    pub fn secure_url(&self) -> &str {
        &self.secure_url
    }

    #[must_use]
    pub fn public_id(&self) -> &str {
        &self.public_id
    }

    #[must_use]
    pub fn format(&self) -> Option<&str> {
        self.format.as_deref()
    }

    /// Whether the host classified the upload as a PDF.
    #[must_use]
    pub fn is_pdf(&self) -> bool {
        self.format.as_deref() == Some("pdf")
    }
}

/// Upload access to the media-transformation host.
#[async_trait]
pub trait MediaHostPort: Send + Sync {
    /// Uploads a file into `folder` and returns the hosted media.
    async fn upload(
        &self,
        bytes: Vec<u8>,
        filename: &str,
        folder: &str,
    ) -> Result<UploadedMedia, MediaError>;
}
