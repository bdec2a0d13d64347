//! HTTP handlers and the helpers they share.

use actix_cors::Cors;
use actix_files::Files;
use actix_web::http::{StatusCode, header};
use actix_web::{HttpResponse, web};
use tera::{Context, Tera};

use crate::routes::api::upload_image;
use crate::routes::lead::{send_lead, show_lead};
use crate::routes::main::{not_found, show_index};

pub mod api;
pub mod lead;
pub mod main;

/// Registers every route of the service.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(Files::new("/assets", "./assets"))
        .service(
            web::scope("/api")
                .wrap(Cors::permissive())
                .service(upload_image),
        )
        .service(show_index)
        .service(show_lead)
        .service(send_lead)
        .default_service(web::to(not_found));
}

/// Renders a template into a `200 OK` HTML response.
pub fn render_template(tera: &Tera, template: &str, context: &Context) -> HttpResponse {
    render_template_with_status(tera, template, context, StatusCode::OK)
}

pub fn render_template_with_status(
    tera: &Tera,
    template: &str,
    context: &Context,
    status: StatusCode,
) -> HttpResponse {
    match tera.render(template, context) {
        Ok(body) => HttpResponse::build(status)
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(err) => {
            log::error!("Failed to render template '{template}': {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

pub fn redirect(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}
