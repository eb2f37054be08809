use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{multipart, Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::json;
use tracing::{debug, warn};

use super::{extract_error_message, ApiError, CvUpload, NewPersona, PersonaBackend};
use crate::models::{AuthUser, TokenResponse};
use crate::persona::normalize::{parse_records, RawPersonaRecord};
use crate::storage::{KeyValueStore, AUTH_TOKEN_KEY, USER_DATA_KEY};

/// HTTP client for the Astra backend.
/// Attaches the stored bearer token to every request and drops stored
/// credentials when the backend answers 401.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    storage: Arc<dyn KeyValueStore>,
}

impl ApiClient {
    pub fn new(
        base_url: impl Into<String>,
        timeout: Duration,
        storage: Arc<dyn KeyValueStore>,
    ) -> Result<Self, ApiError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            storage,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn bearer_token(&self) -> Option<String> {
        match self.storage.get_item(AUTH_TOKEN_KEY).await {
            Ok(token) => token.filter(|t| !t.is_empty()),
            Err(e) => {
                warn!("Could not read auth token, sending request unauthenticated: {e}");
                None
            }
        }
    }

    async fn clear_credentials(&self) {
        for key in [AUTH_TOKEN_KEY, USER_DATA_KEY] {
            if let Err(e) = self.storage.remove_item(key).await {
                warn!("Failed to remove '{key}' after 401: {e}");
            }
        }
    }

    /// Sends a request, mapping non-2xx responses to [`ApiError`].
    async fn send(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        let request = match self.bearer_token().await {
            Some(token) => request.bearer_auth(token),
            None => request,
        };

        let response = request.send().await?;
        let status = response.status();

        if status == StatusCode::UNAUTHORIZED {
            warn!("Backend returned 401, clearing stored credentials");
            self.clear_credentials().await;
            return Err(ApiError::Unauthorized);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = extract_error_message(&body);
            warn!("Backend returned {}: {}", status, message);
            return Err(ApiError::Status {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response)
    }

    async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(ApiError::Parse)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        debug!("GET {path}");
        let response = self.send(self.client.get(self.url(path))).await?;
        Self::read_json(response).await
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<TokenResponse, ApiError> {
        debug!("POST /auth/login");
        let response = self
            .send(
                self.client
                    .post(self.url("/auth/login"))
                    .json(&json!({ "email": email, "password": password })),
            )
            .await?;
        Self::read_json(response).await
    }

    pub async fn register(
        &self,
        email: &str,
        password: &str,
        name: Option<&str>,
    ) -> Result<TokenResponse, ApiError> {
        debug!("POST /auth/register");
        let response = self
            .send(self.client.post(self.url("/auth/register")).json(&json!({
                "email": email,
                "password": password,
                "name": name,
            })))
            .await?;
        Self::read_json(response).await
    }

    /// Tells the backend to end the session. Local credentials are cleared by the caller.
    pub async fn logout(&self) -> Result<(), ApiError> {
        debug!("POST /auth/logout");
        self.send(self.client.post(self.url("/auth/logout"))).await?;
        Ok(())
    }

    pub async fn current_user(&self) -> Result<AuthUser, ApiError> {
        self.get_json("/auth/me").await
    }
}

#[async_trait]
impl PersonaBackend for ApiClient {
    async fn list_personas(&self) -> Result<Vec<RawPersonaRecord>, ApiError> {
        let values: Vec<serde_json::Value> = self.get_json("/personas").await?;
        Ok(parse_records(values))
    }

    async fn get_persona(&self, id: &str) -> Result<RawPersonaRecord, ApiError> {
        self.get_json(&format!("/personas/{id}")).await
    }

    async fn create_persona(&self, persona: &NewPersona) -> Result<RawPersonaRecord, ApiError> {
        debug!("POST /personas ({})", persona.name);
        let response = self
            .send(self.client.post(self.url("/personas")).json(persona))
            .await?;
        Self::read_json(response).await
    }

    async fn activate_persona(&self, id: &str) -> Result<RawPersonaRecord, ApiError> {
        debug!("PATCH /personas/{id}/activate");
        let response = self
            .send(self.client.patch(self.url(&format!("/personas/{id}/activate"))))
            .await?;
        Self::read_json(response).await
    }

    async fn upload_cv(&self, upload: &CvUpload) -> Result<RawPersonaRecord, ApiError> {
        debug!(
            "POST /personas/parse-cv ({}, {} bytes)",
            upload.file_name,
            upload.bytes.len()
        );
        let part = multipart::Part::bytes(upload.bytes.to_vec())
            .file_name(upload.file_name.clone())
            .mime_str(&upload.content_type)?;
        let form = multipart::Form::new().part("file", part);

        let response = self
            .send(self.client.post(self.url("/personas/parse-cv")).multipart(form))
            .await?;
        Self::read_json(response).await
    }
}
