use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthUser {
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum AuthEventKind {
    SignedIn,
    SignedOut,
    InitialSession,
}

/// Session lifecycle event emitted by the identity provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthEvent {
    pub kind: AuthEventKind,
    pub token: Option<String>,
    pub user: Option<AuthUser>,
}

impl AuthEvent {
    pub fn signed_in(token: impl Into<String>, user: AuthUser) -> Self {
        Self {
            kind: AuthEventKind::SignedIn,
            token: Some(token.into()),
            user: Some(user),
        }
    }

    pub fn signed_out() -> Self {
        Self {
            kind: AuthEventKind::SignedOut,
            token: None,
            user: None,
        }
    }
}

/// Body returned by `/auth/login` and `/auth/register`.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
    pub user: AuthUser,
}
