use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The only two failure kinds a page ever shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// Collection reset to empty or single record reset to absent.
    Fetch,
    /// Draft kept so the user can retry.
    Submit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ActionFailure {
    pub kind: FailureKind,
    pub message: String,
}

impl ActionFailure {
    pub fn fetch(message: impl Into<String>) -> Self {
        Self {
            kind: FailureKind::Fetch,
            message: message.into(),
        }
    }

    pub fn submit(message: impl Into<String>) -> Self {
        Self {
            kind: FailureKind::Submit,
            message: message.into(),
        }
    }
}

/// Error body shapes the backend is known to send. Only used for diagnostics.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ApiErrorBody {
    /// Best-effort detail from a raw response body; falls back to the raw text.
    pub fn detail_from(raw: &str) -> String {
        match serde_json::from_str::<ApiErrorBody>(raw) {
            Ok(ApiErrorBody {
                message: Some(message),
                ..
            }) => message,
            Ok(ApiErrorBody {
                error: Some(error), ..
            }) => error,
            _ => raw.trim().to_string(),
        }
    }
}
