use serde::{Deserialize, Serialize};

use crate::profile::ProfileInput;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ProfileData {
    pub headline: String,
    pub bio: String,
}

/// Body of `POST /check-profile`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ProfileRequest {
    pub user_id: String,
    pub profile_data: ProfileData,
}

impl From<ProfileRequest> for ProfileInput {
    fn from(request: ProfileRequest) -> Self {
        ProfileInput {
            user_id: request.user_id,
            headline: request.profile_data.headline,
            bio: request.profile_data.bio,
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct HealthResponse {
    pub status: &'static str,
}
