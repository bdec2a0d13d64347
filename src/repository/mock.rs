//! Mock directory implementation for isolating services in tests.

use mockall::mock;

use crate::domain::profile::BusinessProfile;
use crate::repository::ProfileReader;

mock! {
    pub ProfileDirectory {}

    impl ProfileReader for ProfileDirectory {
        fn get_profile_by_slug(&self, slug: &str) -> Option<BusinessProfile>;
        fn first_profile(&self) -> Option<BusinessProfile>;
        fn list_profiles(&self) -> Vec<BusinessProfile>;
    }
}
