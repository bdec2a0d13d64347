//! JSON upload proxy in front of the image host.

use actix_multipart::form::{MultipartForm, MultipartFormConfig};
use actix_web::error::InternalError;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, Responder, post, web};

use crate::dto::upload::ErrorResponse;
use crate::forms::upload::UploadImageForm;
use crate::models::config::ServerConfig;
use crate::services::image_host::ImgbbClient;
use crate::services::{ServiceError, upload as upload_service};

pub const MISCONFIGURED_MESSAGE: &str = "IMGBB_API_KEY non configurata. Aggiungi la chiave in .env";
pub const INVALID_INPUT_MESSAGE: &str = "File immagine richiesto";
pub const UPLOAD_FAILED_MESSAGE: &str = "Errore durante l'upload";

/// Multipart limits for the upload form; malformed or oversized bodies get the
/// same JSON error shape as a missing image.
pub fn upload_form_config(max_upload_bytes: usize) -> MultipartFormConfig {
    MultipartFormConfig::default()
        .total_limit(max_upload_bytes)
        .memory_limit(max_upload_bytes)
        .error_handler(|err, _req| {
            log::warn!("Rejected upload body: {err}");
            let response =
                HttpResponse::BadRequest().json(ErrorResponse::new(INVALID_INPUT_MESSAGE));
            InternalError::from_response(err, response).into()
        })
}

#[post("/upload")]
pub async fn upload_image(
    image_host: web::Data<ImgbbClient>,
    server_config: web::Data<ServerConfig>,
    MultipartForm(form): MultipartForm<UploadImageForm>,
) -> impl Responder {
    let result = match form.into_payload() {
        Ok(payload) => {
            upload_service::upload_image(
                image_host.get_ref(),
                server_config.image_host.api_key(),
                payload,
            )
            .await
        }
        Err(err) => Err(ServiceError::from(err)),
    };

    match result {
        Ok(uploaded) => HttpResponse::Ok().json(uploaded),
        Err(ServiceError::Misconfigured(reason)) => {
            log::error!("Upload refused: {reason}");
            HttpResponse::InternalServerError().json(ErrorResponse::new(MISCONFIGURED_MESSAGE))
        }
        Err(ServiceError::InvalidInput(reason)) => {
            log::warn!("Upload refused: {reason}");
            HttpResponse::BadRequest().json(ErrorResponse::new(INVALID_INPUT_MESSAGE))
        }
        Err(ServiceError::UploadRejected { status, message }) => {
            let status = StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY);
            HttpResponse::build(status).json(ErrorResponse::new(message))
        }
        Err(err) => {
            log::error!("Upload failed: {err}");
            HttpResponse::InternalServerError().json(ErrorResponse::new(UPLOAD_FAILED_MESSAGE))
        }
    }
}
