#[cfg(feature = "server")]
use actix_web::{App, HttpServer, middleware, web};
#[cfg(feature = "server")]
use tera::Tera;

#[cfg(feature = "server")]
use crate::models::config::ServerConfig;
#[cfg(feature = "server")]
use crate::repository::{ProfileReader, StaticProfileDirectory};
#[cfg(feature = "server")]
use crate::routes::api::upload_form_config;
#[cfg(feature = "server")]
use crate::routes::configure_routes;
#[cfg(feature = "server")]
use crate::routes::lead::send_form_config;
#[cfg(feature = "server")]
use crate::services::image_host::ImgbbClient;

#[cfg(feature = "data")]
pub mod domain;
#[cfg(feature = "data")]
pub mod dto;
#[cfg(feature = "server")]
pub mod error_conversions;
#[cfg(feature = "server")]
pub mod forms;
#[cfg(feature = "data")]
pub mod models;
#[cfg(feature = "data")]
pub mod repository;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "server")]
pub mod services;

/// Builds and runs the Actix-Web HTTP server using the provided configuration.
#[cfg(feature = "server")]
pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
    // Profiles are validated once; the directory is immutable afterwards.
    let directory = StaticProfileDirectory::from_config(&server_config.profiles).map_err(|e| {
        std::io::Error::other(format!("Invalid profile configuration: {e}"))
    })?;

    if directory.is_empty() {
        log::warn!("No business profiles configured, the root page shows the empty state");
    }
    for profile in directory.list_profiles() {
        log::info!("Serving /{} for {}", profile.slug, profile.display_name);
    }
    if server_config.image_host.api_key().is_none() {
        log::warn!("Image host API key is not set, photo uploads will be refused");
    }

    let image_host = ImgbbClient::new(&server_config.image_host.api_url);

    let tera = Tera::new(&server_config.templates_dir)
        .map_err(|e| std::io::Error::other(format!("Template parsing error(s): {e}")))?;

    let bind_address = (server_config.address.clone(), server_config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .app_data(upload_form_config(server_config.max_upload_bytes))
            .app_data(send_form_config())
            .app_data(web::Data::new(tera.clone()))
            .app_data(web::Data::new(directory.clone()))
            .app_data(web::Data::new(image_host.clone()))
            .app_data(web::Data::new(server_config.clone()))
            .configure(configure_routes)
    })
    .bind(bind_address)?
    .run()
    .await
}
