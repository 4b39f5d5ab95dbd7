//! Transport-contract failures and their HTTP mapping.
//!
//! Purpose: keep the two failure classes that legitimately abort a call —
//! undecodable requests and unencodable responses — distinct from business
//! failures, which never leave the envelope. Actix renders these through the
//! [`ResponseError`] impl so clients get a consistent JSON error body.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde::Serialize;

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, TransportError>;

/// Failures of the wire contract itself.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    /// The request payload was missing, truncated, or malformed; the call
    /// never reached business logic.
    #[error("failed to decode request: {message}")]
    Decode {
        /// Parser diagnostic.
        message: String,
    },
    /// A response value could not be serialised. A programmer error: the
    /// orchestration layer only produces well-formed envelopes.
    #[error("failed to encode response: {message}")]
    Encode {
        /// Serialiser diagnostic.
        message: String,
    },
}

impl TransportError {
    /// Create a decode failure.
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Create an encode failure.
    pub fn encode(message: impl Into<String>) -> Self {
        Self::Encode {
            message: message.into(),
        }
    }
}

#[derive(Serialize)]
struct TransportErrorBody<'a> {
    code: &'a str,
    message: String,
}

fn code_for(error: &TransportError) -> &'static str {
    match error {
        TransportError::Decode { .. } => "decode_error",
        TransportError::Encode { .. } => "encode_error",
    }
}

impl ResponseError for TransportError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Decode { .. } => StatusCode::BAD_REQUEST,
            Self::Encode { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(TransportErrorBody {
            code: code_for(self),
            message: self.to_string(),
        })
    }
}
