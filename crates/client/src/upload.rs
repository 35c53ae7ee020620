//! Storing asset files before their record is saved.

use async_trait::async_trait;
use brandkit_core::error::CoreError;
use brandkit_core::validation::{self, AssetKind};
use serde::Deserialize;

use crate::error::ClientError;

/// A file picked by the user, held in memory until it is uploaded.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadFile {
    pub file_name: String,
    /// MIME type reported for the file (`image/png`, ...).
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl UploadFile {
    pub fn new(
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        bytes: impl Into<Vec<u8>>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            bytes: bytes.into(),
        }
    }

    /// `Some` for PNG, JPEG and SVG files.
    pub fn kind(&self) -> Option<AssetKind> {
        AssetKind::from_content_type(&self.content_type)
    }

    /// Reject anything that is not an accepted image type.
    pub fn ensure_supported(&self) -> Result<AssetKind, CoreError> {
        self.kind()
            .ok_or_else(|| CoreError::Validation(validation::UNSUPPORTED_FILE_MESSAGE.to_string()))
    }

    /// Default asset name for this file.
    pub fn stem(&self) -> &str {
        validation::file_stem(&self.file_name)
    }
}

/// Turns a picked file into a URL an asset record can point at.
#[async_trait]
pub trait Uploader: Send + Sync {
    async fn upload(&self, file: &UploadFile) -> Result<String, ClientError>;
}

#[derive(Debug, Deserialize)]
struct UploadResponse {
    url: String,
}

/// Posts files as multipart field `file` to `{base_url}/uploads`.
pub struct HttpUploader {
    client: reqwest::Client,
    base_url: String,
}

impl HttpUploader {
    pub fn new(base_url: &str) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl Uploader for HttpUploader {
    async fn upload(&self, file: &UploadFile) -> Result<String, ClientError> {
        file.ensure_supported()?;

        let part = reqwest::multipart::Part::bytes(file.bytes.clone())
            .file_name(file.file_name.clone())
            .mime_str(&file.content_type)?;
        let form = reqwest::multipart::Form::new().part("file", part);

        let response = self
            .client
            .post(format!("{}/uploads", self.base_url))
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ClientError::Api {
                status: status.as_u16(),
                code: "UPLOAD_FAILED".to_string(),
                message,
            });
        }

        let body: UploadResponse = response.json().await?;
        tracing::debug!(file = %file.file_name, url = %body.url, "Asset file uploaded");
        Ok(body.url)
    }
}
