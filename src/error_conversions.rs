//! Error conversion glue between the layers.
//!
//! The domain layer must not depend on service error types, so the
//! conversions into [`ServiceError`] are collected here.

use crate::domain::types::TypeConstraintError;
use crate::forms::FormError;
use crate::services::ServiceError;
use crate::services::image_host::ImageHostError;

impl From<TypeConstraintError> for ServiceError {
    fn from(val: TypeConstraintError) -> Self {
        ServiceError::Form(val.to_string())
    }
}

impl From<FormError> for ServiceError {
    fn from(val: FormError) -> Self {
        match val {
            FormError::UnreadableFile(message) => ServiceError::UploadFailed(message),
            other => ServiceError::Form(other.to_string()),
        }
    }
}

impl From<ImageHostError> for ServiceError {
    fn from(val: ImageHostError) -> Self {
        ServiceError::UploadFailed(val.to_string())
    }
}
