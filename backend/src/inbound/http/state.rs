//! Shared HTTP adapter state.
//!
//! Handlers receive this via `actix_web::web::Data`, so they depend only on
//! the orchestration layer and stay testable against any store
//! implementation.

use std::sync::Arc;

use crate::domain::UserOperations;
use crate::domain::ports::UserStore;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Orchestrator backing the user endpoints.
    pub users: UserOperations,
}

impl HttpState {
    /// Build handler state over the given store.
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self {
            users: UserOperations::new(store),
        }
    }
}
