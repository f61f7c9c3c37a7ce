//! Shared error types for the services crate.

use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;

use quiz_core::ModelError;
use storage::repository::StorageError;
use storage::sqlite::SqliteInitError;

/// Message used when a failed response carries no usable `message` field.
pub const FALLBACK_REQUEST_MESSAGE: &str = "Request failed";

/// A non-success HTTP response from the backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct RequestError {
    pub status: StatusCode,
    pub message: String,
}

impl RequestError {
    /// Build from a failed response, preferring the body's `message` field.
    ///
    /// Strings are used as sent; non-zero numbers and `true` are rendered as
    /// text. Empty strings, `0`, `false` and structured values fall back.
    #[must_use]
    pub fn from_body(status: StatusCode, body: &[u8]) -> Self {
        let message = serde_json::from_slice::<Value>(body)
            .ok()
            .as_ref()
            .and_then(|value| value.get("message"))
            .and_then(message_text)
            .unwrap_or_else(|| FALLBACK_REQUEST_MESSAGE.to_string());
        Self { status, message }
    }
}

fn message_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) if !text.is_empty() => Some(text.clone()),
        Value::Number(number) if number.as_f64() != Some(0.0) => Some(number.to_string()),
        Value::Bool(true) => Some("true".to_string()),
        _ => None,
    }
}

/// Errors emitted by the API client.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ApiError {
    #[error(transparent)]
    Request(#[from] RequestError),
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("unexpected response shape: {0}")]
    Decode(#[source] serde_json::Error),
    #[error("cannot build endpoint url from {0}")]
    InvalidUrl(String),
}

/// Errors emitted while building `ClientConfig`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("invalid url in {var}: {raw}")]
    InvalidUrl {
        var: &'static str,
        raw: String,
        #[source]
        source: url::ParseError,
    },
    #[error("url cannot be used as a base: {0}")]
    CannotBeBase(String),
}

/// Errors emitted by `SessionService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SessionError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("cannot encode answers: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Errors emitted by `AuthService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AuthError {
    #[error("login and password are required")]
    MissingCredentials,
    #[error("authorization code missing from callback url")]
    MissingCode,
    #[error("login response did not include a token")]
    IncompleteLogin,
    #[error(transparent)]
    Model(#[from] ModelError),
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    Session(#[from] SessionError),
}

/// Errors emitted by `QuizService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuizError {
    #[error("not signed in")]
    MissingToken,
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    Session(#[from] SessionError),
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Sqlite(#[from] SqliteInitError),
}
