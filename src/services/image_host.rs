//! Client for the third-party image hosting API (ImgBB).

use serde::Deserialize;
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ImageHostError {
    #[error("request to image host failed: {0}")]
    Transport(String),

    #[error("malformed image host response: {0}")]
    MalformedResponse(String),
}

/// Body returned by the image host, success or not.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct HostResponseBody {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub data: Option<HostImage>,
    #[serde(default)]
    pub error: Option<HostErrorBody>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct HostImage {
    pub url: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct HostErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

/// HTTP status and parsed body of one upload call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HostReply {
    pub status: u16,
    pub body: HostResponseBody,
}

impl HostReply {
    pub fn is_success_status(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Outbound seam used by the upload service.
#[allow(async_fn_in_trait)]
pub trait ImageHost {
    /// Issues one upload of an already base64-encoded image. No retries.
    async fn upload(&self, api_key: &str, image_base64: String) -> Result<HostReply, ImageHostError>;
}

/// `reqwest` backed implementation posting `key` and `image` as a form.
#[derive(Clone, Debug)]
pub struct ImgbbClient {
    client: reqwest::Client,
    api_url: String,
}

impl ImgbbClient {
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url: api_url.into(),
        }
    }
}

impl ImageHost for ImgbbClient {
    async fn upload(&self, api_key: &str, image_base64: String) -> Result<HostReply, ImageHostError> {
        let response = self
            .client
            .post(&self.api_url)
            .form(&[("key", api_key), ("image", image_base64.as_str())])
            .send()
            .await
            .map_err(|e| ImageHostError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| ImageHostError::Transport(e.to_string()))?;
        let body = serde_json::from_slice::<HostResponseBody>(&bytes)
            .map_err(|e| ImageHostError::MalformedResponse(e.to_string()))?;

        Ok(HostReply { status, body })
    }
}
