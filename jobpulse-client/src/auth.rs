use serde::{Deserialize, Serialize};

/// Bearer token issued by the sign-in endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthToken {
    pub token: String,
}

impl AuthToken {
    pub fn new(token: impl Into<String>) -> Self {
        AuthToken {
            token: token.into(),
        }
    }

    pub fn header_value(&self) -> String {
        format!("Bearer {}", self.token)
    }
}

/// The signed-in user as reported by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SessionUser {
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub email_verified: bool,
}

/// POST /auth/signin response.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SigninResponse {
    pub token: String,
    pub user: SessionUser,
    #[serde(default)]
    pub pending_verification: bool,
    #[serde(default)]
    pub message: String,
}
