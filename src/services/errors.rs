use thiserror::Error;

/// Failures reported by the service layer to the routes.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ServiceError {
    /// The caller sent a missing or unusable payload.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A required server setting is absent.
    #[error("Service misconfigured: {0}")]
    Misconfigured(String),

    /// The image host declined the upload.
    #[error("Upload rejected with status {status}: {message}")]
    UploadRejected { status: u16, message: String },

    /// Transport or parse failure while calling the image host.
    #[error("Upload failed: {0}")]
    UploadFailed(String),

    #[error("Profile not found")]
    ProfileNotFound,

    #[error("Form error: {0}")]
    Form(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
