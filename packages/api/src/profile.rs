//! User profiles.

use std::fmt::Display;

use store::SessionStore;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{Activity, Paginated, ProfileResponse, ProfileUpdate, UserDetails};

impl<S: SessionStore> ApiClient<S> {
    pub async fn profile(&self, user_id: impl Display) -> Result<ProfileResponse, ApiError> {
        self.get(&format!("profile/user/{user_id}/")).await
    }

    pub async fn profile_activities(
        &self,
        user_id: impl Display,
    ) -> Result<Paginated<Activity>, ApiError> {
        self.get(&format!("profile/user/{user_id}/activities/"))
            .await
    }

    pub async fn update_profile(
        &self,
        user_id: i64,
        update: &ProfileUpdate,
    ) -> Result<UserDetails, ApiError> {
        self.patch(&format!("profile/user/{user_id}/"), update).await
    }
}
