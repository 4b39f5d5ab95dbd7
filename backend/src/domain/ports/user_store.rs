//! Driven port for user persistence and its error type.
//!
//! Adapters implementing [`UserStore`] are the only components allowed to
//! touch the relational store. Every operation is independently callable and
//! safe for concurrent use; serialisation of access is the store driver's
//! job, not the caller's.

use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;

use crate::domain::User;

/// Failures raised by store adapters.
///
/// Each variant carries the operation name so the failure site is
/// identifiable from the rendered text without a stack trace, and keeps the
/// kind structured so callers can branch on it before the text is built.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserStoreError {
    /// The store could not be reached or the connection was lost.
    #[error("{operation}: store connection failed: {message}")]
    Connection {
        /// Operation that observed the failure.
        operation: &'static str,
        /// Underlying driver message.
        message: String,
    },
    /// The query or statement failed during execution or row decoding.
    #[error("{operation}: store query failed: {message}")]
    Query {
        /// Operation that observed the failure.
        operation: &'static str,
        /// Underlying driver message.
        message: String,
    },
}

impl UserStoreError {
    /// Create a connection error observed by `operation`.
    pub fn connection(operation: &'static str, message: impl Into<String>) -> Self {
        Self::Connection {
            operation,
            message: message.into(),
        }
    }

    /// Create a query error observed by `operation`.
    pub fn query(operation: &'static str, message: impl Into<String>) -> Self {
        Self::Query {
            operation,
            message: message.into(),
        }
    }

    /// Name of the operation that observed the failure.
    pub fn operation(&self) -> &'static str {
        match self {
            Self::Connection { operation, .. } | Self::Query { operation, .. } => operation,
        }
    }
}

/// Data-access port for the `users` table.
///
/// Zero-rows policy: lookups that match nothing return the zero value
/// (`User::default()` or `0`) with an `Ok` result; only genuine store
/// failures produce an error. Credential operations receive an
/// already-derived digest and never hash.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Read all user records in store scan order (no explicit ordering).
    ///
    /// A row-decode failure aborts the whole read; partial results are
    /// discarded.
    async fn list_users(&self) -> Result<Vec<User>, UserStoreError>;

    /// Fetch one record by id; zero rows yields the zero-valued record.
    async fn get_user_by_id(&self, id: i32) -> Result<User, UserStoreError>;

    /// Fetch one record matching both login name and password digest; zero
    /// rows yields the zero-valued record.
    async fn get_user_by_credentials(
        &self,
        username: &str,
        password_digest: &str,
    ) -> Result<User, UserStoreError>;

    /// Fetch the id for a login name; zero rows yields `0`.
    async fn get_id_by_username(&self, username: &str) -> Result<i32, UserStoreError>;

    /// Insert a record; the store assigns the id. No existence pre-check:
    /// uniqueness violations surface as a store error.
    async fn insert_user(
        &self,
        username: &str,
        password_digest: &str,
        email: &str,
    ) -> Result<(), UserStoreError>;

    /// Delete by id, reporting how many rows matched; `0` is not an error.
    async fn delete_user(&self, id: i32) -> Result<u64, UserStoreError>;
}

/// In-memory [`UserStore`] with the same zero-rows semantics as the SQL
/// adapter. Backs tests and database-free wiring.
#[derive(Debug, Default)]
pub struct FixtureUserStore {
    state: Mutex<FixtureState>,
}

#[derive(Debug, Default)]
struct FixtureState {
    next_id: i32,
    rows: Vec<User>,
}

impl FixtureUserStore {
    /// Create an empty store; the first inserted record receives id `1`.
    pub fn new() -> Self {
        Self::default()
    }

    fn with_state<T>(&self, f: impl FnOnce(&mut FixtureState) -> T) -> T {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut state)
    }
}

#[async_trait]
impl UserStore for FixtureUserStore {
    async fn list_users(&self) -> Result<Vec<User>, UserStoreError> {
        Ok(self.with_state(|state| state.rows.clone()))
    }

    async fn get_user_by_id(&self, id: i32) -> Result<User, UserStoreError> {
        Ok(self.with_state(|state| {
            state
                .rows
                .iter()
                .find(|user| user.id == id)
                .cloned()
                .unwrap_or_default()
        }))
    }

    async fn get_user_by_credentials(
        &self,
        username: &str,
        password_digest: &str,
    ) -> Result<User, UserStoreError> {
        Ok(self.with_state(|state| {
            state
                .rows
                .iter()
                .find(|user| user.username == username && user.password == password_digest)
                .cloned()
                .unwrap_or_default()
        }))
    }

    async fn get_id_by_username(&self, username: &str) -> Result<i32, UserStoreError> {
        Ok(self.with_state(|state| {
            state
                .rows
                .iter()
                .find(|user| user.username == username)
                .map_or(0, |user| user.id)
        }))
    }

    async fn insert_user(
        &self,
        username: &str,
        password_digest: &str,
        email: &str,
    ) -> Result<(), UserStoreError> {
        self.with_state(|state| {
            state.next_id += 1;
            state.rows.push(User {
                id: state.next_id,
                username: username.to_owned(),
                password: password_digest.to_owned(),
                email: email.to_owned(),
            });
        });
        Ok(())
    }

    async fn delete_user(&self, id: i32) -> Result<u64, UserStoreError> {
        Ok(self.with_state(|state| {
            let before = state.rows.len();
            state.rows.retain(|user| user.id != id);
            (before - state.rows.len()) as u64
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_text_names_the_failure_site() {
        let err = UserStoreError::query("delete user", "syntax error");
        assert_eq!(err.to_string(), "delete user: store query failed: syntax error");
        assert_eq!(err.operation(), "delete user");

        let err = UserStoreError::connection("list users", "refused");
        assert_eq!(err.to_string(), "list users: store connection failed: refused");
    }

    #[tokio::test]
    async fn fixture_assigns_sequential_ids() {
        let store = FixtureUserStore::new();
        store.insert_user("alice", "d1", "a@x.com").await.expect("insert");
        store.insert_user("bob", "d2", "b@x.com").await.expect("insert");

        assert_eq!(store.get_id_by_username("alice").await.expect("lookup"), 1);
        assert_eq!(store.get_id_by_username("bob").await.expect("lookup"), 2);
        assert_eq!(store.list_users().await.expect("list").len(), 2);
    }

    #[tokio::test]
    async fn missing_rows_yield_zero_values() {
        let store = FixtureUserStore::new();

        assert_eq!(store.get_user_by_id(42).await.expect("lookup"), User::default());
        assert_eq!(store.get_id_by_username("nobody").await.expect("lookup"), 0);
        assert_eq!(store.delete_user(42).await.expect("delete"), 0);
    }

    #[tokio::test]
    async fn credential_lookup_requires_digest_match() {
        let store = FixtureUserStore::new();
        store.insert_user("alice", "digest-1", "a@x.com").await.expect("insert");

        let hit = store
            .get_user_by_credentials("alice", "digest-1")
            .await
            .expect("lookup");
        assert_eq!(hit.id, 1);

        let miss = store
            .get_user_by_credentials("alice", "digest-2")
            .await
            .expect("lookup");
        assert_eq!(miss, User::default());
    }

    #[tokio::test]
    async fn delete_reports_matched_rows() {
        let store = FixtureUserStore::new();
        store.insert_user("alice", "d1", "a@x.com").await.expect("insert");

        assert_eq!(store.delete_user(1).await.expect("delete"), 1);
        assert_eq!(store.delete_user(1).await.expect("delete"), 0);
        assert!(store.list_users().await.expect("list").is_empty());
    }
}
