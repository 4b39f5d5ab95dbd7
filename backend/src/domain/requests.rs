//! Typed request values consumed by the orchestration layer.
//!
//! Each operation takes the exact request shape it expects, so a shape
//! mismatch cannot survive past the codec: decoding either produces the
//! right type or fails the call at the transport boundary. Every value is
//! constructed once per call and consumed by that call.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request for operations that take no input (the user listing).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmptyRequest;

/// Request addressing a record by its store-assigned identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct IdRequest {
    /// Store-assigned user id.
    #[schema(example = 1)]
    pub id: i32,
}

/// Request addressing a record by login name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UsernameRequest {
    /// Login name to look up.
    #[schema(example = "alice")]
    pub username: String,
}

/// Credential lookup request; the password arrives as plaintext and is
/// hashed before it reaches the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UsernamePasswordRequest {
    /// Login name.
    #[schema(example = "alice")]
    pub username: String,
    /// Plaintext password as received on the wire.
    pub password: String,
}

/// Insert request; the password arrives as plaintext and is hashed before it
/// reaches the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UsernamePasswordEmailRequest {
    /// Login name for the new record.
    #[schema(example = "alice")]
    pub username: String,
    /// Plaintext password as received on the wire.
    pub password: String,
    /// Contact address for the new record.
    #[schema(example = "a@x.com")]
    pub email: String,
}
