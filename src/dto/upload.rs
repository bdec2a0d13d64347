//! JSON bodies of the `/api/upload` endpoint.

use serde::Serialize;

/// Successful upload: the hosted URL exactly as returned by the image host.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct UploadedImage {
    pub url: String,
}

/// Error body shared by the JSON endpoints.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
