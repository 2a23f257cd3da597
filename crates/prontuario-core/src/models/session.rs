use serde::{Deserialize, Serialize};

use super::role::Role;

/// Authenticated session as seen by the client.
///
/// All three fields are set together on login and cleared together on
/// logout.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub role: Option<Role>,
    pub token: Option<String>,
    pub user_email: Option<String>,
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        self.role.is_some() && self.token.is_some()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Body returned by `POST /auth/{role}`.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}
