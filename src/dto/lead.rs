//! DTOs shaped for the lead form template and the send endpoint.

use serde::Serialize;

use crate::domain::profile::BusinessProfile;

/// Data required to render the lead form page.
#[derive(Debug, Serialize)]
pub struct LeadPageData {
    pub profile: BusinessProfile,
    pub initials: String,
    pub theme_hex: &'static str,
}

impl From<BusinessProfile> for LeadPageData {
    fn from(profile: BusinessProfile) -> Self {
        Self {
            initials: profile.display_name.initials(),
            theme_hex: profile.theme_color.hex(),
            profile,
        }
    }
}

/// Instruction returned to the browser after a submit attempt.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum SendAction {
    /// Upload still running; nothing happens.
    Wait,
    /// Show the "send without a photo?" dialog.
    ConfirmWithoutPhoto,
    /// Scroll back to the photo section.
    GoBack,
    /// Open the deep link in a new tab.
    Open { url: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn send_action_is_tagged() {
        let open = serde_json::to_value(SendAction::Open {
            url: "https://api.whatsapp.com/send?phone=1".to_string(),
        })
        .unwrap();
        assert_eq!(
            open,
            serde_json::json!({"action": "open", "url": "https://api.whatsapp.com/send?phone=1"})
        );

        let confirm = serde_json::to_value(SendAction::ConfirmWithoutPhoto).unwrap();
        assert_eq!(confirm, serde_json::json!({"action": "confirm_without_photo"}));
    }
}
