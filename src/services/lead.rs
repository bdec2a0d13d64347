use crate::domain::lead::SubmitOutcome;
use crate::domain::message::deep_link;
use crate::domain::photo::PreviewTracker;
use crate::dto::lead::{LeadPageData, SendAction};
use crate::forms::lead::SendLeadForm;
use crate::repository::ProfileReader;
use crate::services::{ServiceError, ServiceResult};

/// Resolves the profile shown on the lead form page.
pub fn load_lead_page<R>(repo: &R, slug: &str) -> ServiceResult<LeadPageData>
where
    R: ProfileReader + ?Sized,
{
    repo.get_profile_by_slug(slug)
        .map(LeadPageData::from)
        .ok_or(ServiceError::ProfileNotFound)
}

/// Path of the page the site root should redirect to, if any profile exists.
pub fn entry_redirect<R>(repo: &R) -> Option<String>
where
    R: ProfileReader + ?Sized,
{
    repo.first_profile().map(|profile| profile.page_path())
}

/// Decides the outcome of a submit and, when sending, builds the deep link.
pub fn send_lead<R>(
    repo: &R,
    slug: &str,
    whatsapp_base_url: &str,
    form: SendLeadForm,
) -> ServiceResult<SendAction>
where
    R: ProfileReader + ?Sized,
{
    let profile = repo
        .get_profile_by_slug(slug)
        .ok_or(ServiceError::ProfileNotFound)?;

    let choice = form.choice;
    let draft = form.into_draft(PreviewTracker::default()).map_err(|err| {
        log::error!("Failed to parse lead form: {err}");
        ServiceError::from(err)
    })?;

    let action = match draft.submit(&profile, choice) {
        SubmitOutcome::Blocked => SendAction::Wait,
        SubmitOutcome::ConfirmWithoutPhoto => SendAction::ConfirmWithoutPhoto,
        SubmitOutcome::ReturnToPhoto => SendAction::GoBack,
        SubmitOutcome::Send(text) => {
            log::info!(
                "Lead for {} ready (urgent: {}, photo: {})",
                profile.slug,
                draft.urgent,
                draft.photo.upload_succeeded()
            );
            SendAction::Open {
                url: deep_link(whatsapp_base_url, profile.whatsapp_phone.as_str(), &text),
            }
        }
    };

    Ok(action)
}
