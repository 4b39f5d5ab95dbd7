//! HTTP inbound adapter exposing the user CRUD endpoints.
//!
//! Handlers are thin: decode the payload through [`codec`], hand the typed
//! request to the orchestration layer, encode the envelope back. The only
//! failures that surface as HTTP errors are the transport-contract ones
//! ([`error::TransportError`]); everything downstream rides inside the
//! envelope.

pub mod codec;
pub mod error;
pub mod state;
pub mod users;

pub use error::{ApiResult, TransportError};
