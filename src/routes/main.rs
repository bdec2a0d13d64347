use actix_web::http::StatusCode;
use actix_web::{Responder, get, web};
use tera::{Context, Tera};

use crate::repository::StaticProfileDirectory;
use crate::routes::{redirect, render_template, render_template_with_status};
use crate::services::lead as lead_service;

/// Send visitors to the first configured profile, or show the empty state.
#[get("/")]
pub async fn show_index(
    repo: web::Data<StaticProfileDirectory>,
    tera: web::Data<Tera>,
) -> impl Responder {
    match lead_service::entry_redirect(repo.get_ref()) {
        Some(path) => redirect(&path),
        None => render_template(&tera, "main/empty.html", &Context::new()),
    }
}

/// Fallback page for unknown slugs and unmatched paths.
pub async fn not_found(tera: web::Data<Tera>) -> impl Responder {
    render_template_with_status(
        &tera,
        "errors/not_found.html",
        &Context::new(),
        StatusCode::NOT_FOUND,
    )
}
