//! WhatsApp message text and deep link composition.

use crate::domain::types::normalize_phone_digits;

pub const DESCRIPTION_FALLBACK: &str = "Non specificato";
pub const LOCATION_FALLBACK: &str = "Non specificata";
pub const URGENT_LINE: &str = "🔴 URGENTE: Sì";
pub const STANDARD_LINE: &str = "🟢 URGENTE: No (Standard)";

/// Inputs of a lead message. The text is a pure function of these fields.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LeadMessage<'a> {
    pub business_name: &'a str,
    pub description: &'a str,
    pub urgent: bool,
    pub location: &'a str,
    pub photo_url: Option<&'a str>,
}

impl LeadMessage<'_> {
    /// Renders the fixed message template.
    ///
    /// Empty description or location fall back to "not specified" wording; the
    /// photo line is appended last and only when a non-blank URL is present.
    pub fn text(&self) -> String {
        let description = if self.description.is_empty() {
            DESCRIPTION_FALLBACK
        } else {
            self.description
        };
        let location = if self.location.is_empty() {
            LOCATION_FALLBACK
        } else {
            self.location
        };
        let urgency = if self.urgent { URGENT_LINE } else { STANDARD_LINE };

        let mut text = format!(
            "Ciao {},\nHo bisogno di un preventivo.\n\n🛠 PROBLEMA:\n{description}\n\n{urgency}\n\n📍 ZONA:\n{location}",
            self.business_name
        );
        if let Some(url) = self.photo_url.map(str::trim).filter(|url| !url.is_empty()) {
            text.push_str("\n\n📷 FOTO: ");
            text.push_str(url);
        }
        text
    }
}

/// Builds `<base>?phone=<digits>&text=<percent-encoded text>`.
pub fn deep_link(base_url: &str, phone: &str, text: &str) -> String {
    format!(
        "{base_url}?phone={}&text={}",
        normalize_phone_digits(phone),
        urlencoding::encode(text)
    )
}
