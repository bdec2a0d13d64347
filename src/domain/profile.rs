use serde::Serialize;

use crate::domain::types::{DisplayName, LogoUrl, ProfileSlug, ThemeColor, WhatsAppPhone};

/// Business identity addressed by a slug.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct BusinessProfile {
    pub slug: ProfileSlug,
    pub display_name: DisplayName,
    pub whatsapp_phone: WhatsAppPhone,
    pub theme_color: ThemeColor,
    pub logo_url: Option<LogoUrl>,
}

impl BusinessProfile {
    #[must_use]
    pub fn new(
        slug: ProfileSlug,
        display_name: DisplayName,
        whatsapp_phone: WhatsAppPhone,
        theme_color: ThemeColor,
        logo_url: Option<LogoUrl>,
    ) -> Self {
        Self {
            slug,
            display_name,
            whatsapp_phone,
            theme_color,
            logo_url,
        }
    }

    /// Path of the lead form page for this profile.
    pub fn page_path(&self) -> String {
        format!("/{}", self.slug)
    }
}
