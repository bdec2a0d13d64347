use serde::Deserialize;

use crate::domain::message::LeadMessage;
use crate::domain::photo::PhotoAttachment;
use crate::domain::profile::BusinessProfile;

/// Answer to the "send without a photo?" prompt.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum NoPhotoChoice {
    /// Return to the photo section without sending.
    GoBack,
    /// Send the message without a photo line.
    SendAnyway,
}

/// What a submit attempt results in.
#[derive(Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// An upload is still running; submission is a no-op.
    Blocked,
    /// No photo attached; ask before sending.
    ConfirmWithoutPhoto,
    /// The user chose to attach a photo first.
    ReturnToPhoto,
    /// Message text ready to be sent.
    Send(String),
}

/// In-memory state of one visit to the lead form.
#[derive(Debug, Default)]
pub struct LeadDraft {
    pub description: String,
    pub urgent: bool,
    pub location: String,
    pub photo: PhotoAttachment,
}

impl LeadDraft {
    /// Drives the attention cue on the submit control only.
    pub fn has_content(&self) -> bool {
        !self.description.trim().is_empty() || !self.location.trim().is_empty()
    }

    pub fn message<'a>(&'a self, profile: &'a BusinessProfile) -> LeadMessage<'a> {
        LeadMessage {
            business_name: profile.display_name.as_str(),
            description: &self.description,
            urgent: self.urgent,
            location: &self.location,
            photo_url: self.photo.remote_url().map(|url| url.as_str()),
        }
    }

    /// Decides what a submit does given the answer to the no-photo prompt, if any.
    pub fn submit(&self, profile: &BusinessProfile, choice: Option<NoPhotoChoice>) -> SubmitOutcome {
        if self.photo.is_uploading() {
            return SubmitOutcome::Blocked;
        }
        if self.photo.has_photo() {
            return SubmitOutcome::Send(self.message(profile).text());
        }
        match choice {
            None => SubmitOutcome::ConfirmWithoutPhoto,
            Some(NoPhotoChoice::GoBack) => SubmitOutcome::ReturnToPhoto,
            Some(NoPhotoChoice::SendAnyway) => {
                let message = LeadMessage {
                    photo_url: None,
                    ..self.message(profile)
                };
                SubmitOutcome::Send(message.text())
            }
        }
    }
}
