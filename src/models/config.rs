//! Configuration model loaded from external sources.

use serde::Deserialize;

fn default_whatsapp_base_url() -> String {
    "https://api.whatsapp.com/send".to_string()
}

fn default_image_host_url() -> String {
    "https://api.imgbb.com/1/upload".to_string()
}

fn default_max_upload_bytes() -> usize {
    32 * 1024 * 1024
}

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across handlers.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    pub templates_dir: String,
    #[serde(default = "default_whatsapp_base_url")]
    pub whatsapp_base_url: String,
    /// Largest multipart body accepted by the upload endpoint.
    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: usize,
    pub image_host: ImageHostConfig,
    #[serde(default)]
    pub profiles: Vec<ProfileConfig>,
}

#[derive(Clone, Debug, Deserialize)]
/// Third-party image host settings.
pub struct ImageHostConfig {
    #[serde(default = "default_image_host_url")]
    pub api_url: String,
    /// Missing or blank keys are reported when an upload is attempted.
    #[serde(default)]
    pub api_key: Option<String>,
}

impl ImageHostConfig {
    /// The API key when it is set to a non-blank value.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }
}

#[derive(Clone, Debug, Deserialize)]
/// Raw business profile entry, validated when the directory is built.
pub struct ProfileConfig {
    pub slug: String,
    pub display_name: String,
    pub whatsapp_phone: String,
    pub theme_color: String,
    #[serde(default)]
    pub logo_url: Option<String>,
}
