//! Per-operation orchestration over the store port.
//!
//! One method per endpoint. Each takes the exact typed request the codec
//! produced, derives credential digests where the request carries a
//! password, invokes exactly one store operation, and folds the outcome into
//! a response envelope. Store failures land in the envelope's `err` field —
//! callers of these methods can no longer observe a transport-level error.

use std::sync::Arc;

use tracing::warn;

use crate::domain::credentials::password_digest;
use crate::domain::ports::UserStore;
use crate::domain::{
    AckEnvelope, IdEnvelope, IdRequest, RowsEnvelope, UserEnvelope, UsersEnvelope,
    UsernamePasswordEmailRequest, UsernamePasswordRequest, UsernameRequest,
};

/// Orchestrates the six user operations against a [`UserStore`].
#[derive(Clone)]
pub struct UserOperations {
    store: Arc<dyn UserStore>,
}

impl UserOperations {
    /// Create an orchestrator over the given store.
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self { store }
    }

    /// List every user record.
    pub async fn list_users(&self) -> UsersEnvelope {
        match self.store.list_users().await {
            Ok(users) => UsersEnvelope::success(users),
            Err(err) => {
                warn!(error = %err, operation = err.operation(), "store operation failed");
                UsersEnvelope::failure(&err)
            }
        }
    }

    /// Look up a record by id; a zero-valued `user` means "not found".
    pub async fn get_user_by_id(&self, request: IdRequest) -> UserEnvelope {
        match self.store.get_user_by_id(request.id).await {
            Ok(user) => UserEnvelope::success(user),
            Err(err) => {
                warn!(error = %err, operation = err.operation(), "store operation failed");
                UserEnvelope::failure(&err)
            }
        }
    }

    /// Look up a record by login name and password.
    ///
    /// The plaintext password is reduced to its digest here; the store only
    /// ever compares digests, so a wrong password is indistinguishable from
    /// a missing user (zero-valued `user`, empty `err`).
    pub async fn get_user_by_credentials(&self, request: UsernamePasswordRequest) -> UserEnvelope {
        let digest = password_digest(&request.password);
        match self
            .store
            .get_user_by_credentials(&request.username, &digest)
            .await
        {
            Ok(user) => UserEnvelope::success(user),
            Err(err) => {
                warn!(error = %err, operation = err.operation(), "store operation failed");
                UserEnvelope::failure(&err)
            }
        }
    }

    /// Look up the id for a login name; id `0` means "not found".
    pub async fn get_id_by_username(&self, request: UsernameRequest) -> IdEnvelope {
        match self.store.get_id_by_username(&request.username).await {
            Ok(id) => IdEnvelope::success(id),
            Err(err) => {
                warn!(error = %err, operation = err.operation(), "store operation failed");
                IdEnvelope::failure(&err)
            }
        }
    }

    /// Insert a new record, hashing the password first.
    pub async fn insert_user(&self, request: UsernamePasswordEmailRequest) -> AckEnvelope {
        let digest = password_digest(&request.password);
        match self
            .store
            .insert_user(&request.username, &digest, &request.email)
            .await
        {
            Ok(()) => AckEnvelope::success(),
            Err(err) => {
                warn!(error = %err, operation = err.operation(), "store operation failed");
                AckEnvelope::failure(&err)
            }
        }
    }

    /// Delete a record by id, reporting how many rows matched.
    pub async fn delete_user(&self, request: IdRequest) -> RowsEnvelope {
        match self.store.delete_user(request.id).await {
            Ok(rows_affected) => RowsEnvelope::success(rows_affected),
            Err(err) => {
                warn!(error = %err, operation = err.operation(), "store operation failed");
                RowsEnvelope::failure(&err)
            }
        }
    }
}
