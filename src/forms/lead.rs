use serde::Deserialize;
use validator::Validate;

use crate::domain::lead::{LeadDraft, NoPhotoChoice};
use crate::domain::photo::{PhotoAttachment, PhotoSnapshot, PreviewTracker};
use crate::domain::types::PhotoUrl;
use crate::forms::FormError;

pub const PROBLEM_MAX_CHARS: u64 = 4000;
pub const LOCATION_MAX_CHARS: u64 = 500;

/// Urlencoded body limit that still fits both text fields at their maximum
/// length: four UTF-8 bytes per char, three encoded bytes per UTF-8 byte,
/// plus room for the remaining fields.
pub const SEND_FORM_LIMIT_BYTES: usize =
    ((PROBLEM_MAX_CHARS + LOCATION_MAX_CHARS) as usize) * 4 * 3 + 8 * 1024;

#[derive(Debug, Default, Deserialize, Validate)]
/// Form data posted to `/{slug}/send` by the lead page.
pub struct SendLeadForm {
    /// Problem description typed by the visitor.
    #[serde(default)]
    #[validate(length(max = PROBLEM_MAX_CHARS))]
    pub problem: String,
    #[serde(default)]
    pub urgent: bool,
    /// Zone or street address.
    #[serde(default)]
    #[validate(length(max = LOCATION_MAX_CHARS))]
    pub location: String,
    /// Hosted photo URL returned by the upload endpoint.
    #[serde(default)]
    pub photo_url: Option<String>,
    /// Whether the browser still shows a local preview.
    #[serde(default)]
    pub photo_preview: bool,
    #[serde(default)]
    pub photo_uploading: bool,
    /// Answer to the no-photo prompt, when the dialog was shown.
    #[serde(default)]
    pub choice: Option<NoPhotoChoice>,
}

impl SendLeadForm {
    /// Rebuilds the draft the browser is holding.
    pub fn into_draft(self, tracker: PreviewTracker) -> Result<LeadDraft, FormError> {
        self.validate()?;

        let remote_url = self
            .photo_url
            .filter(|url| !url.trim().is_empty())
            .map(PhotoUrl::new)
            .transpose()
            .map_err(|_| FormError::InvalidPhotoUrl)?;

        let photo = PhotoAttachment::restore(
            tracker,
            PhotoSnapshot {
                has_preview: self.photo_preview,
                uploading: self.photo_uploading,
                remote_url,
            },
        );

        Ok(LeadDraft {
            description: self.problem,
            urgent: self.urgent,
            location: self.location,
            photo,
        })
    }
}
