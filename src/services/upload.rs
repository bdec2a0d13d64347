use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::dto::upload::UploadedImage;
use crate::services::image_host::ImageHost;
use crate::services::{ServiceError, ServiceResult};

pub const REJECTED_FALLBACK_MESSAGE: &str = "Upload ImgBB fallito";

/// Binary image payload received from the form.
#[derive(Debug, Clone)]
pub struct ImagePayload {
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl ImagePayload {
    fn is_image(&self) -> bool {
        self.content_type
            .as_deref()
            .is_some_and(|content_type| content_type.starts_with("image/"))
    }
}

/// Relays one image to the host and returns its public URL.
///
/// The API key is checked before the payload, and no outbound call is made
/// unless both are usable.
pub async fn upload_image<H>(
    host: &H,
    api_key: Option<&str>,
    image: Option<ImagePayload>,
) -> ServiceResult<UploadedImage>
where
    H: ImageHost + ?Sized,
{
    let Some(api_key) = api_key else {
        return Err(ServiceError::Misconfigured(
            "image host API key is not set".to_string(),
        ));
    };

    let image = match image {
        Some(image) if image.is_image() => image,
        Some(image) => {
            return Err(ServiceError::InvalidInput(format!(
                "unsupported media type {:?}",
                image.content_type
            )));
        }
        None => {
            return Err(ServiceError::InvalidInput(
                "image field is missing".to_string(),
            ));
        }
    };

    let encoded = STANDARD.encode(&image.bytes);
    let reply = host.upload(api_key, encoded).await.map_err(|err| {
        log::error!("Image host call failed: {err}");
        ServiceError::from(err)
    })?;

    if !reply.is_success_status() || !reply.body.success {
        let message = reply
            .body
            .error
            .and_then(|error| error.message)
            .filter(|message| !message.is_empty())
            .unwrap_or_else(|| REJECTED_FALLBACK_MESSAGE.to_string());
        log::warn!("Image host rejected upload ({}): {message}", reply.status);
        return Err(ServiceError::UploadRejected {
            status: reply.status,
            message,
        });
    }

    match reply.body.data {
        Some(data) => Ok(UploadedImage { url: data.url }),
        None => Err(ServiceError::UploadFailed(
            "image host reported success without data".to_string(),
        )),
    }
}
