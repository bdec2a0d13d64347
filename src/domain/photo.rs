//! Photo attachment state machine of a lead draft.
//!
//! A draft holds at most one photo. Picking a file allocates a local preview
//! handle right away and hands out an [`UploadTicket`] for the upload that
//! follows. Results are matched against the current ticket, so a late result
//! for a removed or superseded photo is ignored. There is no cancellation of
//! the in-flight upload itself.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::types::PhotoUrl;

/// Hands out local preview handles and counts how many are alive.
#[derive(Clone, Debug, Default)]
pub struct PreviewTracker {
    live: Arc<AtomicUsize>,
    next_id: Arc<AtomicU64>,
}

impl PreviewTracker {
    /// Allocates a new preview handle.
    pub fn allocate(&self) -> PreviewHandle {
        self.live.fetch_add(1, Ordering::SeqCst);
        PreviewHandle {
            id: self.next_id.fetch_add(1, Ordering::SeqCst) + 1,
            live: Arc::clone(&self.live),
        }
    }

    /// Number of handles that have not been released yet.
    pub fn live(&self) -> usize {
        self.live.load(Ordering::SeqCst)
    }
}

/// Local, transient display reference for a picked image.
///
/// Released when dropped.
#[derive(Debug)]
pub struct PreviewHandle {
    id: u64,
    live: Arc<AtomicUsize>,
}

impl PreviewHandle {
    pub fn id(&self) -> u64 {
        self.id
    }
}

impl Drop for PreviewHandle {
    fn drop(&mut self) {
        self.live.fetch_sub(1, Ordering::SeqCst);
    }
}

/// Identifies one upload started by [`PhotoAttachment::pick`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UploadTicket(u64);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PhotoError {
    #[error("selected file is not an image")]
    NotAnImage,
    #[error("an upload is already in progress")]
    UploadInProgress,
}

/// Named states of the attachment.
#[derive(Debug, Default)]
pub enum PhotoState {
    #[default]
    Idle,
    PreviewPending {
        preview: PreviewHandle,
        ticket: UploadTicket,
    },
    Uploaded {
        preview: Option<PreviewHandle>,
        remote_url: PhotoUrl,
    },
}

/// Which source the page should display for the attached photo.
#[derive(Debug, PartialEq, Eq)]
pub enum DisplayedPhoto<'a> {
    Preview(u64),
    Remote(&'a PhotoUrl),
}

/// Flattened view of the attachment as posted back by the browser.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PhotoSnapshot {
    pub has_preview: bool,
    pub uploading: bool,
    pub remote_url: Option<PhotoUrl>,
}

#[derive(Debug, Default)]
pub struct PhotoAttachment {
    state: PhotoState,
    tracker: PreviewTracker,
    last_ticket: u64,
}

impl PhotoAttachment {
    pub fn new(tracker: PreviewTracker) -> Self {
        Self {
            state: PhotoState::Idle,
            tracker,
            last_ticket: 0,
        }
    }

    /// Rebuilds the attachment from what the browser reports.
    ///
    /// A preview with neither a running upload nor a remote URL is not a
    /// reachable state and restores as `Idle`.
    pub fn restore(tracker: PreviewTracker, snapshot: PhotoSnapshot) -> Self {
        let mut last_ticket = 0;
        let state = match snapshot {
            PhotoSnapshot {
                uploading: true, ..
            } => {
                last_ticket += 1;
                PhotoState::PreviewPending {
                    preview: tracker.allocate(),
                    ticket: UploadTicket(last_ticket),
                }
            }
            PhotoSnapshot {
                has_preview,
                remote_url: Some(remote_url),
                ..
            } => PhotoState::Uploaded {
                preview: has_preview.then(|| tracker.allocate()),
                remote_url,
            },
            _ => PhotoState::Idle,
        };
        Self {
            state,
            tracker,
            last_ticket,
        }
    }

    pub fn state(&self) -> &PhotoState {
        &self.state
    }

    /// Starts a new attachment for a picked file of the given media type.
    ///
    /// Any previous preview is released before the new one is allocated.
    pub fn pick(&mut self, content_type: &str) -> Result<UploadTicket, PhotoError> {
        if !content_type.starts_with("image/") {
            return Err(PhotoError::NotAnImage);
        }
        if self.is_uploading() {
            return Err(PhotoError::UploadInProgress);
        }
        self.state = PhotoState::Idle;

        self.last_ticket += 1;
        let ticket = UploadTicket(self.last_ticket);
        self.state = PhotoState::PreviewPending {
            preview: self.tracker.allocate(),
            ticket,
        };
        Ok(ticket)
    }

    /// Applies the outcome of the upload identified by `ticket`.
    ///
    /// Returns `false` when the ticket no longer matches the pending upload and
    /// the result was ignored.
    pub fn complete<E>(&mut self, ticket: UploadTicket, result: Result<PhotoUrl, E>) -> bool {
        let pending = matches!(
            &self.state,
            PhotoState::PreviewPending { ticket: current, .. } if *current == ticket
        );
        if !pending {
            return false;
        }

        let previous = std::mem::take(&mut self.state);
        self.state = match (previous, result) {
            (PhotoState::PreviewPending { preview, .. }, Ok(remote_url)) => PhotoState::Uploaded {
                preview: Some(preview),
                remote_url,
            },
            _ => PhotoState::Idle,
        };
        true
    }

    /// Drops the attachment; a pending upload keeps running but its result
    /// will be ignored.
    pub fn remove(&mut self) {
        self.state = PhotoState::Idle;
    }

    pub fn is_uploading(&self) -> bool {
        matches!(self.state, PhotoState::PreviewPending { .. })
    }

    pub fn upload_succeeded(&self) -> bool {
        matches!(self.state, PhotoState::Uploaded { .. })
    }

    /// True when either a preview or a remote URL is present.
    pub fn has_photo(&self) -> bool {
        !matches!(self.state, PhotoState::Idle)
    }

    pub fn remote_url(&self) -> Option<&PhotoUrl> {
        match &self.state {
            PhotoState::Uploaded { remote_url, .. } => Some(remote_url),
            _ => None,
        }
    }

    /// The local preview wins over the remote URL when both exist.
    pub fn displayed(&self) -> Option<DisplayedPhoto<'_>> {
        match &self.state {
            PhotoState::Idle => None,
            PhotoState::PreviewPending { preview, .. } => {
                Some(DisplayedPhoto::Preview(preview.id()))
            }
            PhotoState::Uploaded {
                preview: Some(preview),
                ..
            } => Some(DisplayedPhoto::Preview(preview.id())),
            PhotoState::Uploaded {
                preview: None,
                remote_url,
            } => Some(DisplayedPhoto::Remote(remote_url)),
        }
    }

    pub fn snapshot(&self) -> PhotoSnapshot {
        PhotoSnapshot {
            has_preview: matches!(self.displayed(), Some(DisplayedPhoto::Preview(_))),
            uploading: self.is_uploading(),
            remote_url: self.remote_url().cloned(),
        }
    }
}
