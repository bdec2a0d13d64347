//! Read-only access to the configured business profiles.

use crate::domain::profile::BusinessProfile;

pub mod errors;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;
pub mod profile;

pub use profile::StaticProfileDirectory;

pub trait ProfileReader {
    /// Exact, case-sensitive slug match.
    fn get_profile_by_slug(&self, slug: &str) -> Option<BusinessProfile>;
    /// First configured entry, if any.
    fn first_profile(&self) -> Option<BusinessProfile>;
    fn list_profiles(&self) -> Vec<BusinessProfile>;
}
