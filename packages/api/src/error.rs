//! Error types surfaced to views.

use serde::Deserialize;
use thiserror::Error;

/// Message used when the server gives no usable `{error}` field.
pub const FALLBACK_MESSAGE: &str = "Something went wrong";

/// Failure of a single API call.
///
/// Transport errors and non-2xx responses are deliberately the same kind:
/// callers decide what to tell the user, and nothing is retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("{message}")]
    RequestFailed {
        /// HTTP status, when a response arrived at all.
        status: Option<u16>,
        message: String,
    },
}

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

impl ApiError {
    /// Build from a non-2xx response body shaped `{"error": "..."}`.
    pub fn from_error_body(status: Option<u16>, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.error)
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| FALLBACK_MESSAGE.to_string());
        ApiError::RequestFailed { status, message }
    }

    pub(crate) fn transport(err: reqwest::Error) -> Self {
        ApiError::RequestFailed {
            status: err.status().map(|s| s.as_u16()),
            message: err.to_string(),
        }
    }

    pub(crate) fn decode(status: u16, err: serde_json::Error) -> Self {
        ApiError::RequestFailed {
            status: Some(status),
            message: format!("Unexpected response from server: {err}"),
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::RequestFailed { status, .. } => *status,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            ApiError::RequestFailed { message, .. } => message,
        }
    }

    /// The stored token was rejected; the session should be dropped.
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }
}

/// Failure of the note create/edit workflow.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// Client-side check failed; nothing was sent.
    #[error("{0}")]
    ValidationFailed(String),

    /// The staged image could not be uploaded; no note request was issued.
    #[error("Image upload failed: {0}")]
    UploadFailed(#[source] ApiError),

    /// The create or update call itself failed.
    #[error(transparent)]
    RequestFailed(#[from] ApiError),
}

impl SubmitError {
    pub fn is_unauthorized(&self) -> bool {
        match self {
            SubmitError::ValidationFailed(_) => false,
            SubmitError::UploadFailed(e) | SubmitError::RequestFailed(e) => e.is_unauthorized(),
        }
    }
}
