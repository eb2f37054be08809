use thiserror::Error;

use crate::api::ApiError;

/// Crate-level error type.
/// Backend failures (`FetchFailed`, `UploadFailed`) are recovered by the callers
/// that own a fallback path; `Desync` always propagates.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("No further candidates")]
    Exhausted,

    #[error("Upload failed: {0}")]
    UploadFailed(String),

    #[error("Fetch failed: {0}")]
    FetchFailed(String),

    #[error("Decision desync: current candidate is {expected:?}, decision targets '{actual}'")]
    Desync {
        expected: Option<String>,
        actual: String,
    },

    #[error("API error: {0}")]
    Api(#[from] ApiError),
}

impl CoreError {
    /// Short machine-readable code, used as a structured logging field.
    pub fn code(&self) -> &'static str {
        match self {
            CoreError::NotFound(_) => "NOT_FOUND",
            CoreError::Exhausted => "EXHAUSTED",
            CoreError::UploadFailed(_) => "UPLOAD_FAILED",
            CoreError::FetchFailed(_) => "FETCH_FAILED",
            CoreError::Desync { .. } => "DESYNC",
            CoreError::Api(_) => "API_ERROR",
        }
    }
}
