//! Ports connecting the domain to its adapters.
//!
//! The store port is the only seam through which user records are read or
//! written; the HTTP adapter depends on the orchestration layer, which
//! depends on the port, never on a concrete store.

pub mod user_store;

pub use self::user_store::{FixtureUserStore, UserStore, UserStoreError};
