use std::io::Read;

use actix_multipart::form::{MultipartForm, tempfile::TempFile};

use crate::forms::FormError;
use crate::services::upload::ImagePayload;

#[derive(MultipartForm)]
/// Multipart body of `POST /api/upload`.
pub struct UploadImageForm {
    pub image: Option<TempFile>,
}

impl UploadImageForm {
    /// Reads the spooled file into memory, if one was sent.
    pub fn into_payload(self) -> Result<Option<ImagePayload>, FormError> {
        let Some(mut image) = self.image else {
            return Ok(None);
        };

        let mut bytes = Vec::with_capacity(image.size);
        image
            .file
            .read_to_end(&mut bytes)
            .map_err(|e| FormError::UnreadableFile(e.to_string()))?;

        Ok(Some(ImagePayload {
            content_type: image.content_type.map(|mime| mime.essence_str().to_string()),
            bytes,
        }))
    }
}
