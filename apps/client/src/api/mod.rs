//! Backend API: the single point of entry for every HTTP call the client makes.
//!
//! The session store and onboarding flow depend on [`PersonaBackend`], not on
//! [`ApiClient`] directly, so tests can substitute an in-process backend.
use async_trait::async_trait;
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::persona::normalize::RawPersonaRecord;

mod client;

pub use client::ApiClient;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Status { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Unauthorized")]
    Unauthorized,
}

/// Body for `POST /personas`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewPersona {
    pub name: String,
    pub title: String,
    pub location: Option<String>,
    pub avatar_url: Option<String>,
    pub experience_level: Option<String>,
    pub skills: Vec<String>,
    pub salary_min: Option<i64>,
    pub salary_max: Option<i64>,
    pub cv_file_name: Option<String>,
    pub cv_file_url: Option<String>,
}

/// A CV file selected by the user, ready for multipart upload.
#[derive(Debug, Clone)]
pub struct CvUpload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Bytes,
}

impl CvUpload {
    pub fn new(file_name: impl Into<String>, content_type: Option<&str>, bytes: Bytes) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.unwrap_or("application/pdf").to_string(),
            bytes,
        }
    }
}

/// Persona endpoints consumed by the session store and the CV onboarding flow.
#[async_trait]
pub trait PersonaBackend: Send + Sync {
    /// `GET /personas`
    async fn list_personas(&self) -> Result<Vec<RawPersonaRecord>, ApiError>;

    /// `GET /personas/{id}`
    async fn get_persona(&self, id: &str) -> Result<RawPersonaRecord, ApiError>;

    /// `POST /personas`
    async fn create_persona(&self, persona: &NewPersona) -> Result<RawPersonaRecord, ApiError>;

    /// `PATCH /personas/{id}/activate`. Server-side marker only; the session
    /// store's active pointer does not wait on it.
    async fn activate_persona(&self, id: &str) -> Result<RawPersonaRecord, ApiError>;

    /// `POST /personas/parse-cv`: upload, parse and create in one call.
    async fn upload_cv(&self, upload: &CvUpload) -> Result<RawPersonaRecord, ApiError>;
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: Option<serde_json::Value>,
    message: Option<String>,
}

/// Reduces an error body to a human-readable message: `detail`, then
/// `message`, then the raw body.
pub(crate) fn extract_error_message(body: &str) -> String {
    let parsed = serde_json::from_str::<ErrorBody>(body).ok();
    let from_json = parsed.and_then(|b| {
        let detail = b.detail.and_then(|d| match d {
            serde_json::Value::String(s) => Some(s),
            serde_json::Value::Null => None,
            other => Some(other.to_string()),
        });
        detail.or(b.message)
    });

    match from_json {
        Some(message) if !message.is_empty() => message,
        _ if body.trim().is_empty() => "An error occurred".to_string(),
        _ => body.trim().to_string(),
    }
}
