use serde::Serialize;
use store::Role;

/// Body of `POST /informations/users`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewUserAccount {
    pub email: String,
    pub user_code: String,
    pub role: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view: Option<String>,
}

/// Body of `PUT /informations/users/:id`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserUpdate {
    pub role: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view: Option<String>,
}
