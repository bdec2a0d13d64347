//! Lead form page and its submit endpoint.

use actix_web::error::InternalError;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, Responder, ResponseError, get, post, web};
use tera::{Context, Tera};

use crate::dto::upload::ErrorResponse;
use crate::forms::lead::{SEND_FORM_LIMIT_BYTES, SendLeadForm};
use crate::models::config::ServerConfig;
use crate::repository::StaticProfileDirectory;
use crate::routes::{render_template, render_template_with_status};
use crate::services::{ServiceError, lead as lead_service};

pub const INVALID_FORM_MESSAGE: &str = "Richiesta non valida";

/// Urlencoded limits for the send form. Undecodable or oversized bodies are
/// answered with the JSON error shape the page script expects.
pub fn send_form_config() -> web::FormConfig {
    web::FormConfig::default()
        .limit(SEND_FORM_LIMIT_BYTES)
        .error_handler(|err, _req| {
            log::warn!("Rejected lead form: {err}");
            let response =
                HttpResponse::build(err.status_code()).json(ErrorResponse::new(INVALID_FORM_MESSAGE));
            InternalError::from_response(err, response).into()
        })
}

#[get("/{slug}")]
pub async fn show_lead(
    slug: web::Path<String>,
    repo: web::Data<StaticProfileDirectory>,
    tera: web::Data<Tera>,
) -> impl Responder {
    match lead_service::load_lead_page(repo.get_ref(), &slug) {
        Ok(data) => {
            let mut context = Context::new();
            context.insert("profile", &data.profile);
            context.insert("initials", &data.initials);
            context.insert("theme_hex", data.theme_hex);

            render_template(&tera, "lead/index.html", &context)
        }
        Err(ServiceError::ProfileNotFound) => render_template_with_status(
            &tera,
            "errors/not_found.html",
            &Context::new(),
            StatusCode::NOT_FOUND,
        ),
        Err(err) => {
            log::error!("Failed to load lead page: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// Answers with what the page should do next: wait, ask, go back or open the link.
#[post("/{slug}/send")]
pub async fn send_lead(
    slug: web::Path<String>,
    repo: web::Data<StaticProfileDirectory>,
    server_config: web::Data<ServerConfig>,
    web::Form(form): web::Form<SendLeadForm>,
) -> impl Responder {
    match lead_service::send_lead(
        repo.get_ref(),
        &slug,
        &server_config.whatsapp_base_url,
        form,
    ) {
        Ok(action) => HttpResponse::Ok().json(action),
        Err(ServiceError::ProfileNotFound) => {
            HttpResponse::NotFound().json(ErrorResponse::new("Profilo non trovato"))
        }
        Err(ServiceError::Form(message)) => HttpResponse::BadRequest().json(ErrorResponse::new(message)),
        Err(err) => {
            log::error!("Failed to prepare lead: {err}");
            HttpResponse::InternalServerError().json(ErrorResponse::new("Errore interno"))
        }
    }
}
