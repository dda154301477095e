//! Cloudinary upload client.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::domain::errors::MediaError;
use crate::domain::ports::{MediaHostPort, UploadedMedia};

const CLOUDINARY_API_BASE: &str = "https://api.cloudinary.com/v1_1";

#[derive(Debug, Deserialize)]
struct UploadResponse {
    secure_url: String,
    public_id: String,
    format: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: ErrorMessage,
}

#[derive(Debug, Deserialize)]
struct ErrorMessage {
    message: String,
}

/// Unsigned-upload client for the Cloudinary image API.
///
/// PDFs are uploaded as images so the host can derive a first-page
/// thumbnail transformation from them.
pub struct CloudinaryClient {
    client: Client,
    base_url: String,
    cloud_name: String,
    upload_preset: String,
}

impl CloudinaryClient {
    /// Creates a new client for the given cloud and unsigned upload preset.
    ///
    /// # Errors
    /// Returns an error if HTTP client creation fails.
    pub fn new(
        cloud_name: impl Into<String>,
        upload_preset: impl Into<String>,
    ) -> Result<Self, MediaError> {
        Self::with_base_url(CLOUDINARY_API_BASE, cloud_name, upload_preset)
    }

    /// Creates a client with a custom API base URL.
    ///
    /// # Errors
    /// Returns an error if HTTP client creation fails.
    pub fn with_base_url(
        base_url: impl Into<String>,
        cloud_name: impl Into<String>,
        upload_preset: impl Into<String>,
    ) -> Result<Self, MediaError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(60))
            .build()
            .map_err(|e| MediaError::unexpected(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            cloud_name: cloud_name.into(),
            upload_preset: upload_preset.into(),
        })
    }

    /// Uploads a file and returns the hosted media together with the
    /// thumbnail URL to store alongside it (first page for PDFs).
    ///
    /// # Errors
    /// Returns an error when the upload fails.
    pub async fn upload_with_thumbnail(
        &self,
        bytes: Vec<u8>,
        filename: &str,
        folder: &str,
    ) -> Result<(UploadedMedia, String), MediaError> {
        let media = self.upload(bytes, filename, folder).await?;
        let thumbnail = super::transform::upload_thumbnail_url(media.secure_url(), media.is_pdf());
        Ok((media, thumbnail))
    }

    async fn handle_error_response(
        &self,
        status: StatusCode,
        response: reqwest::Response,
    ) -> MediaError {
        let message = match response.json::<ErrorBody>().await {
            Ok(body) => body.error.message,
            Err(_) => format!("HTTP {status}"),
        };

        match status {
            StatusCode::BAD_REQUEST | StatusCode::UNAUTHORIZED => MediaError::rejected(message),
            StatusCode::PAYLOAD_TOO_LARGE => MediaError::rejected("file too large"),
            StatusCode::SERVICE_UNAVAILABLE | StatusCode::GATEWAY_TIMEOUT => {
                MediaError::network("media host is temporarily unavailable")
            }
            _ => MediaError::unexpected(format!("unexpected response: {status} - {message}")),
        }
    }
}

#[async_trait]
impl MediaHostPort for CloudinaryClient {
    async fn upload(
        &self,
        bytes: Vec<u8>,
        filename: &str,
        folder: &str,
    ) -> Result<UploadedMedia, MediaError> {
        let url = format!("{}/{}/image/upload", self.base_url, self.cloud_name);

        debug!(filename, folder, "Uploading file to Cloudinary");

        let part = reqwest::multipart::Part::bytes(bytes).file_name(filename.to_string());
        let form = reqwest::multipart::Form::new()
            .part("file", part)
            .text("upload_preset", self.upload_preset.clone())
            .text("folder", folder.to_string());

        let response = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "Failed to reach Cloudinary");
                if e.is_timeout() {
                    MediaError::network("upload timed out")
                } else if e.is_connect() {
                    MediaError::network("failed to connect to the media host")
                } else {
                    MediaError::network(e.to_string())
                }
            })?;

        let status = response.status();

        if !status.is_success() {
            return Err(self.handle_error_response(status, response).await);
        }

        let upload: UploadResponse = response.json().await.map_err(|e| {
            warn!(error = %e, "Failed to parse upload response");
            MediaError::decode(format!("failed to parse response: {e}"))
        })?;

        debug!(public_id = %upload.public_id, "Upload accepted");

        let mut media = UploadedMedia::new(upload.secure_url, upload.public_id);
        if let Some(format) = upload.format {
            media = media.with_format(format);
        }

        Ok(media)
    }
}
