//! Form definitions backing the lead routes.

use thiserror::Error;
use validator::ValidationErrors;

pub mod lead;
pub mod upload;

#[derive(Debug, Error)]
/// Errors that can occur when processing form data.
pub enum FormError {
    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("invalid photo url")]
    InvalidPhotoUrl,

    #[error("failed to read uploaded file: {0}")]
    UnreadableFile(String),
}
