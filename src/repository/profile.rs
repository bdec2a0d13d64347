use std::collections::HashSet;
use std::sync::Arc;

use crate::domain::profile::BusinessProfile;
use crate::domain::types::{
    DisplayName, LogoUrl, ProfileSlug, ThemeColor, TypeConstraintError, WhatsAppPhone,
};
use crate::models::config::ProfileConfig;
use crate::repository::ProfileReader;
use crate::repository::errors::{ProfileDirectoryError, ProfileDirectoryResult};

/// Immutable profile list resolved once at startup and shared between workers.
#[derive(Clone, Debug, Default)]
pub struct StaticProfileDirectory {
    profiles: Arc<[BusinessProfile]>,
}

impl StaticProfileDirectory {
    /// Wraps already validated profiles, rejecting duplicate slugs.
    pub fn new(profiles: Vec<BusinessProfile>) -> ProfileDirectoryResult<Self> {
        let mut seen = HashSet::new();
        for profile in &profiles {
            if !seen.insert(profile.slug.as_str()) {
                return Err(ProfileDirectoryError::DuplicateSlug(
                    profile.slug.to_string(),
                ));
            }
        }

        Ok(Self {
            profiles: profiles.into(),
        })
    }

    /// Validates the configured entries in order.
    pub fn from_config(entries: &[ProfileConfig]) -> ProfileDirectoryResult<Self> {
        let profiles = entries
            .iter()
            .map(|entry| {
                BusinessProfile::try_from(entry).map_err(|source| {
                    ProfileDirectoryError::InvalidProfile {
                        slug: entry.slug.clone(),
                        source,
                    }
                })
            })
            .collect::<ProfileDirectoryResult<Vec<_>>>()?;

        Self::new(profiles)
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

impl TryFrom<&ProfileConfig> for BusinessProfile {
    type Error = TypeConstraintError;

    fn try_from(entry: &ProfileConfig) -> Result<Self, Self::Error> {
        let logo_url = entry
            .logo_url
            .as_deref()
            .filter(|url| !url.trim().is_empty())
            .map(LogoUrl::new)
            .transpose()?;

        Ok(BusinessProfile::new(
            ProfileSlug::new(entry.slug.as_str())?,
            DisplayName::new(entry.display_name.as_str())?,
            WhatsAppPhone::new(entry.whatsapp_phone.as_str())?,
            ThemeColor::new(entry.theme_color.as_str())?,
            logo_url,
        ))
    }
}

impl ProfileReader for StaticProfileDirectory {
    fn get_profile_by_slug(&self, slug: &str) -> Option<BusinessProfile> {
        self.profiles
            .iter()
            .find(|profile| profile.slug.as_str() == slug)
            .cloned()
    }

    fn first_profile(&self) -> Option<BusinessProfile> {
        self.profiles.first().cloned()
    }

    fn list_profiles(&self) -> Vec<BusinessProfile> {
        self.profiles.to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(slug: &str, theme: &str) -> ProfileConfig {
        ProfileConfig {
            slug: slug.to_string(),
            display_name: "Nome Professionista".to_string(),
            whatsapp_phone: "+39 378 011 1216".to_string(),
            theme_color: theme.to_string(),
            logo_url: None,
        }
    }

    fn directory() -> StaticProfileDirectory {
        StaticProfileDirectory::from_config(&[
            entry("mario-idraulico", "blue-600"),
            entry("idraulici-roma", "emerald-600"),
        ])
        .unwrap()
    }

    #[test]
    fn lookup_is_exact_and_case_sensitive() {
        let directory = directory();

        let found = directory.get_profile_by_slug("idraulici-roma").unwrap();
        assert_eq!(found.theme_color.as_str(), "emerald-600");
        assert_eq!(found.whatsapp_phone.as_str(), "393780111216");

        assert!(directory.get_profile_by_slug("Idraulici-Roma").is_none());
        assert!(directory.get_profile_by_slug("idraulici").is_none());
        assert!(directory.get_profile_by_slug("").is_none());
    }

    #[test]
    fn first_profile_is_positional() {
        assert_eq!(
            directory().first_profile().unwrap().slug.as_str(),
            "mario-idraulico"
        );
        assert!(StaticProfileDirectory::default().first_profile().is_none());
    }

    #[test]
    fn duplicate_slugs_are_rejected() {
        let result = StaticProfileDirectory::from_config(&[
            entry("mario-idraulico", "blue-600"),
            entry("mario-idraulico", "amber-600"),
        ]);

        assert_eq!(
            result.unwrap_err(),
            ProfileDirectoryError::DuplicateSlug("mario-idraulico".to_string())
        );
    }

    #[test]
    fn invalid_entries_name_the_slug() {
        let mut bad = entry("mario-idraulico", "blue-600");
        bad.logo_url = Some("not a url".to_string());

        let err = StaticProfileDirectory::from_config(&[bad]).unwrap_err();

        assert_eq!(
            err,
            ProfileDirectoryError::InvalidProfile {
                slug: "mario-idraulico".to_string(),
                source: TypeConstraintError::InvalidUrl,
            }
        );
    }
}
