use serde::{Deserialize, Serialize};
use store::models::deserialize_id;
use store::{Profile, Role};

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

/// Body of `GET /informations/profile`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProfileResponse {
    pub email: String,
    pub role: Role,
    #[serde(deserialize_with = "deserialize_id")]
    pub user_id: String,
    #[serde(default)]
    pub view: Option<String>,
}

impl ProfileResponse {
    pub fn into_profile(self) -> Profile {
        Profile::new(self.email, self.role, self.user_id, self.view)
    }
}
