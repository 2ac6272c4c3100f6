use async_trait::async_trait;
use reqwest::Response;
use shared::error::ApiErrorBody;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("transport error: {0}")]
    Transport(String),
    #[error("unexpected status {status_code}: {message}")]
    Status { status_code: u16, message: String },
    #[error("unable to decode response from {endpoint}: {message}")]
    Decode { endpoint: String, message: String },
    #[error("invalid endpoint url: {0}")]
    Url(String),
}

impl ClientError {
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Status { status_code, .. } => Some(*status_code),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.to_string())
    }
}

#[async_trait]
pub trait ResponseExt {
    /// Passes 2xx responses through and turns everything else into [`ClientError::Status`].
    async fn map_client_error(self) -> Result<Response, ClientError>;
}

#[async_trait]
impl ResponseExt for Response {
    async fn map_client_error(self) -> Result<Response, ClientError> {
        let status = self.status();
        if status.is_success() {
            return Ok(self);
        }
        let raw = self.text().await.unwrap_or_default();
        Err(ClientError::Status {
            status_code: status.as_u16(),
            message: ApiErrorBody::detail_from(&raw),
        })
    }
}

#[async_trait]
impl ResponseExt for Result<Response, reqwest::Error> {
    async fn map_client_error(self) -> Result<Response, ClientError> {
        match self {
            Ok(response) => response.map_client_error().await,
            Err(err) => Err(err.into()),
        }
    }
}
