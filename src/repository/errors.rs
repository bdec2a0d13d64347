use thiserror::Error;

use crate::domain::types::TypeConstraintError;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProfileDirectoryError {
    #[error("Invalid profile {slug:?}: {source}")]
    InvalidProfile {
        slug: String,
        source: TypeConstraintError,
    },

    #[error("Duplicate profile slug: {0}")]
    DuplicateSlug(String),
}

pub type ProfileDirectoryResult<T> = Result<T, ProfileDirectoryError>;
