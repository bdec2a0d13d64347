//! Helpers shared by the integration tests.

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::thread::{self, JoinHandle};

use actix_web::{App, web};
use tera::Tera;

use pushkind_leads::models::config::{ImageHostConfig, ProfileConfig, ServerConfig};
use pushkind_leads::repository::StaticProfileDirectory;
use pushkind_leads::routes::api::upload_form_config;
use pushkind_leads::routes::configure_routes;
use pushkind_leads::routes::lead::send_form_config;
use pushkind_leads::services::image_host::ImgbbClient;

pub fn profile_config(slug: &str, display_name: &str) -> ProfileConfig {
    ProfileConfig {
        slug: slug.to_string(),
        display_name: display_name.to_string(),
        whatsapp_phone: "393780111216".to_string(),
        theme_color: "blue-600".to_string(),
        logo_url: None,
    }
}

/// Config pointing the image host at an unroutable address so no test can
/// reach the network.
pub fn server_config(profiles: Vec<ProfileConfig>, api_key: Option<&str>) -> ServerConfig {
    ServerConfig {
        address: "127.0.0.1".to_string(),
        port: 0,
        templates_dir: "templates/**/*".to_string(),
        whatsapp_base_url: "https://api.whatsapp.com/send".to_string(),
        max_upload_bytes: 1024 * 1024,
        image_host: ImageHostConfig {
            api_url: "http://127.0.0.1:9/upload".to_string(),
            api_key: api_key.map(str::to_string),
        },
        profiles,
    }
}

/// Builds the same application `run` serves, without binding a socket.
pub fn app(
    server_config: ServerConfig,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let directory = StaticProfileDirectory::from_config(&server_config.profiles).unwrap();
    let tera = Tera::new(&server_config.templates_dir).unwrap();
    let image_host = ImgbbClient::new(&server_config.image_host.api_url);

    App::new()
        .app_data(upload_form_config(server_config.max_upload_bytes))
        .app_data(send_form_config())
        .app_data(web::Data::new(tera))
        .app_data(web::Data::new(directory))
        .app_data(web::Data::new(image_host))
        .app_data(web::Data::new(server_config))
        .configure(configure_routes)
}

/// One-shot HTTP server standing in for the image host.
///
/// Returns the upload URL to configure and a handle yielding the raw request
/// it received.
pub fn stub_image_host(
    status: &'static str,
    content_type: &'static str,
    body: &'static str,
) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let url = format!("http://{}/1/upload", listener.local_addr().unwrap());

    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let request = read_request(&mut stream);
        let response = format!(
            "HTTP/1.1 {status}\r\nContent-Type: {content_type}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        stream.write_all(response.as_bytes()).unwrap();
        request
    });

    (url, handle)
}

fn read_request(stream: &mut TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];
    loop {
        let n = stream.read(&mut chunk).unwrap();
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);

        if let Some(end) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            let head = String::from_utf8_lossy(&buf[..end]).to_lowercase();
            let content_length = head
                .lines()
                .find_map(|line| line.strip_prefix("content-length:"))
                .and_then(|value| value.trim().parse::<usize>().ok())
                .unwrap_or(0);
            if buf.len() >= end + 4 + content_length {
                break;
            }
        }
    }
    String::from_utf8_lossy(&buf).into_owned()
}
