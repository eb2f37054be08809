use std::sync::Arc;

use tracing::{info, warn};

use crate::api::{ApiClient, ApiError};
use crate::errors::CoreError;
use crate::models::{AuthEvent, AuthEventKind, AuthUser, TokenResponse};
use crate::persona::PersonaSessionStore;
use crate::storage::{KeyValueStore, AUTH_TOKEN_KEY, USER_DATA_KEY};

/// Tracks the signed-in user and keeps the stored token in step with
/// identity-provider events. Storage failures are logged, never fatal.
pub struct AuthSession {
    storage: Arc<dyn KeyValueStore>,
    user: Option<AuthUser>,
}

impl AuthSession {
    pub fn new(storage: Arc<dyn KeyValueStore>) -> Self {
        Self {
            storage,
            user: None,
        }
    }

    pub fn user(&self) -> Option<&AuthUser> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    async fn read(&self, key: &str) -> Option<String> {
        match self.storage.get_item(key).await {
            Ok(value) => value,
            Err(e) => {
                warn!("Storage read for '{key}' failed: {e}");
                None
            }
        }
    }

    async fn persist(&self, token: &str, user: Option<&AuthUser>) {
        if let Err(e) = self.storage.set_item(AUTH_TOKEN_KEY, token).await {
            warn!("Failed to persist auth token: {e}");
        }
        let Some(user) = user else { return };
        match serde_json::to_string(user) {
            Ok(json) => {
                if let Err(e) = self.storage.set_item(USER_DATA_KEY, &json).await {
                    warn!("Failed to persist user data: {e}");
                }
            }
            Err(e) => warn!("Failed to serialize user data: {e}"),
        }
    }

    async fn clear(&mut self) {
        self.user = None;
        for key in [AUTH_TOKEN_KEY, USER_DATA_KEY] {
            if let Err(e) = self.storage.remove_item(key).await {
                warn!("Failed to remove '{key}': {e}");
            }
        }
    }

    /// Restores a previous session from storage. Both the token and a parseable
    /// user record must be present.
    pub async fn restore(&mut self) -> Option<&AuthUser> {
        let token = self.read(AUTH_TOKEN_KEY).await.filter(|t| !t.is_empty());
        let user_data = self.read(USER_DATA_KEY).await;

        self.user = match (token, user_data) {
            (Some(_), Some(json)) => match serde_json::from_str::<AuthUser>(&json) {
                Ok(user) => Some(user),
                Err(e) => {
                    warn!("Stored user data is unreadable, ignoring: {e}");
                    None
                }
            },
            _ => None,
        };
        if let Some(user) = &self.user {
            info!(user_id = %user.id, "Restored auth session");
        }
        self.user.as_ref()
    }

    /// Confirms a restored session against `GET /auth/me`. A rejected token
    /// signs the user out (the client has already dropped the stored
    /// credentials); an unreachable backend keeps the restored user.
    pub async fn verify(&mut self, api: &ApiClient) -> Option<&AuthUser> {
        self.user.as_ref()?;
        match api.current_user().await {
            Ok(user) => {
                if let Ok(json) = serde_json::to_string(&user) {
                    if let Err(e) = self.storage.set_item(USER_DATA_KEY, &json).await {
                        warn!("Failed to persist user data: {e}");
                    }
                }
                self.user = Some(user);
            }
            Err(ApiError::Unauthorized) => {
                info!("Stored session rejected by backend");
                self.user = None;
            }
            Err(e) => warn!("Could not verify session, keeping restored user: {e}"),
        }
        self.user.as_ref()
    }

    /// Applies an identity-provider event. Sign-out clears stored credentials
    /// and resets the persona session.
    pub async fn handle_event(&mut self, event: &AuthEvent, personas: &mut PersonaSessionStore) {
        match event.kind {
            AuthEventKind::SignedIn | AuthEventKind::InitialSession => {
                let Some(token) = event.token.as_deref() else {
                    warn!(kind = ?event.kind, "Auth event without token ignored");
                    return;
                };
                self.persist(token, event.user.as_ref()).await;
                if let Some(user) = &event.user {
                    info!(user_id = %user.id, kind = ?event.kind, "Signed in");
                    self.user = Some(user.clone());
                }
            }
            AuthEventKind::SignedOut => {
                info!("Signed out");
                self.clear().await;
            }
        }
        personas.on_external_auth_change(event);
    }

    async fn accept(&mut self, response: TokenResponse) -> AuthUser {
        self.persist(&response.access_token, Some(&response.user))
            .await;
        self.user = Some(response.user.clone());
        info!(user_id = %response.user.id, "Authenticated");
        response.user
    }

    pub async fn login(
        &mut self,
        api: &ApiClient,
        email: &str,
        password: &str,
    ) -> Result<AuthUser, CoreError> {
        let response = api.login(email, password).await?;
        Ok(self.accept(response).await)
    }

    pub async fn register(
        &mut self,
        api: &ApiClient,
        email: &str,
        password: &str,
        name: Option<&str>,
    ) -> Result<AuthUser, CoreError> {
        let response = api.register(email, password, name).await?;
        Ok(self.accept(response).await)
    }

    /// Best-effort server logout; local credentials and personas are always cleared.
    pub async fn logout(&mut self, api: &ApiClient, personas: &mut PersonaSessionStore) {
        if let Err(e) = api.logout().await {
            warn!("Backend logout failed, clearing local session anyway: {e}");
        }
        self.handle_event(&AuthEvent::signed_out(), personas).await;
    }
}
