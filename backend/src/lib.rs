//! User-record storage service.
//!
//! A small HTTP service exposing CRUD operations on a single `users` table,
//! structured as a three-stage pipeline: the HTTP codec decodes byte payloads
//! into typed requests, the orchestration layer translates store outcomes
//! into response envelopes, and the persistence adapter executes
//! parameterized SQL against PostgreSQL.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod outbound;
pub mod server;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
