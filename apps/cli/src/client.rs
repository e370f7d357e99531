//! AnkiConnect client.

use langgen_core::{AddNoteRequest, AnkiError, AnkiResponse, VersionRequest};
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::Path;

/// AnkiConnect client errors.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("AnkiConnect error: {status} - {message}")]
    Backend { status: u16, message: String },

    #[error("Parse error: {0}")]
    Parse(String),

    #[error(transparent)]
    Anki(#[from] AnkiError),

    #[error("Invalid image URL {url}: {reason}")]
    InvalidImageUrl { url: String, reason: String },

    #[error("Not an image (content type: {content_type})")]
    NotAnImage { content_type: String },

    #[error("Failed to write {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Talks to a running Anki through the AnkiConnect add-on.
#[derive(Debug, Clone)]
pub struct AnkiClient {
    client: Client,
    url: String,
}

impl AnkiClient {
    pub fn new(url: &str) -> Self {
        Self {
            client: Client::new(),
            url: url.trim_end_matches('/').to_string(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// API version reported by AnkiConnect.
    pub async fn version(&self) -> Result<u8, ClientError> {
        self.send(&VersionRequest::default()).await
    }

    /// Add a note, returning its id.
    pub async fn add_note(&self, request: &AddNoteRequest) -> Result<i64, ClientError> {
        self.send(request).await
    }

    async fn send<B, T>(&self, body: &B) -> Result<T, ClientError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let resp = self
            .client
            .post(&self.url)
            .json(body)
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let message = resp.text().await.unwrap_or_else(|e| e.to_string());
            return Err(ClientError::Backend { status, message });
        }

        let reply: AnkiResponse<T> = resp
            .json()
            .await
            .map_err(|e| ClientError::Parse(e.to_string()))?;

        Ok(reply.into_result()?)
    }
}

/// Downloads card images into the Anki media folder.
#[derive(Debug, Clone, Default)]
pub struct ImageDownloader {
    client: Client,
}

impl ImageDownloader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch `url` into `media_dir`, returning the saved file name.
    pub async fn download(&self, url: &str, media_dir: &Path) -> Result<String, ClientError> {
        let name = image_file_name(url)?;
        let resp = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let message = resp.text().await.unwrap_or_else(|e| e.to_string());
            return Err(ClientError::Backend { status, message });
        }

        let content_type = resp
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        let bytes = resp
            .bytes()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        save_image(media_dir, &name, content_type.as_deref(), &bytes).await?;
        Ok(name)
    }
}

/// File name an image is saved under: the last segment of the URL path.
pub fn image_file_name(url: &str) -> Result<String, ClientError> {
    let invalid = |reason: &str| ClientError::InvalidImageUrl {
        url: url.to_string(),
        reason: reason.to_string(),
    };
    let parsed = Url::parse(url).map_err(|e| invalid(&e.to_string()))?;
    parsed
        .path_segments()
        .and_then(|segments| segments.last())
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .ok_or_else(|| invalid("no file name in path"))
}

fn is_image(content_type: Option<&str>) -> bool {
    content_type.is_some_and(|ct| ct.trim().to_ascii_lowercase().starts_with("image/"))
}

async fn save_image(
    media_dir: &Path,
    name: &str,
    content_type: Option<&str>,
    bytes: &[u8],
) -> Result<(), ClientError> {
    if !is_image(content_type) {
        return Err(ClientError::NotAnImage {
            content_type: content_type.unwrap_or("none").to_string(),
        });
    }

    let path = media_dir.join(name);
    tokio::fs::write(&path, bytes)
        .await
        .map_err(|source| ClientError::Io {
            path: path.display().to_string(),
            source,
        })?;
    tracing::info!(path = %path.display(), bytes = bytes.len(), "image saved");
    Ok(())
}
