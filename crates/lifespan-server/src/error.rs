//! Server error types.

use std::io;

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use lifespan_model::{Field, ValidationError};
use serde_json::json;
use thiserror::Error;

/// Failure to start or run the HTTP service.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Failed to bind {addr}")]
    Bind {
        addr: String,
        #[source]
        source: io::Error,
    },

    #[error("Server terminated unexpectedly")]
    Serve(#[source] io::Error),
}

pub type Result<T> = std::result::Result<T, ServerError>;

/// A rejected request, rendered as `{"detail": ..., "field": ...}`.
#[derive(Debug)]
pub enum ApiError {
    /// The body decoded but failed validation.
    Validation(ValidationError),
    /// The body could not be decoded into a request.
    Decode {
        status: StatusCode,
        detail: String,
        /// Offending field, when the decoder could name one.
        field: Option<String>,
    },
}

impl ApiError {
    /// Birth date problems are bad requests. Range violations are
    /// unprocessable entities. Decode failures keep the extractor's status,
    /// except that a missing or mistyped `birth_date` is a bad request too.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(error) if error.is_birth_date() => StatusCode::BAD_REQUEST,
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Decode { field, .. } if field.as_deref() == Some(Field::BirthDate.as_str()) => {
                StatusCode::BAD_REQUEST
            }
            Self::Decode { status, .. } => *status,
        }
    }

    /// Name of the offending field, if known.
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::Validation(error) => Some(error.field().as_str()),
            Self::Decode { field, .. } => field.as_deref(),
        }
    }

    fn detail(&self) -> String {
        match self {
            Self::Validation(error) => error.to_string(),
            Self::Decode { detail, .. } => detail.clone(),
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(error: ValidationError) -> Self {
        Self::Validation(error)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        let text = rejection.body_text();
        let (detail, field) = match &rejection {
            JsonRejection::JsonDataError(_) => {
                let message = decoder_message(&text);
                (message.to_string(), decode_field(message))
            }
            JsonRejection::JsonSyntaxError(_) => (decoder_message(&text).to_string(), None),
            _ => (text.clone(), None),
        };
        Self::Decode {
            status: rejection.status(),
            detail,
            field,
        }
    }
}

/// Strip the extractor's "<summary>: " prefix from a rejection text.
fn decoder_message(text: &str) -> &str {
    text.split_once(": ").map_or(text, |(_, message)| message)
}

/// Pull a field name out of a decoder message.
///
/// Handles serde's missing-field message and the `name: invalid type ...`
/// form the JSON extractor produces for a value at a known path.
pub fn decode_field(message: &str) -> Option<String> {
    if let Some(rest) = message.strip_prefix("missing field `") {
        return rest.split('`').next().map(str::to_string);
    }
    let (path, _) = message.split_once(": ")?;
    let is_path = !path.is_empty()
        && path
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '[' | ']'));
    is_path.then(|| path.to_string())
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = json!({
            "detail": self.detail(),
            "field": self.field(),
        });
        (self.status(), Json(body)).into_response()
    }
}
