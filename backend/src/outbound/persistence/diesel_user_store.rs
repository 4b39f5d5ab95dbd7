//! Diesel-backed [`UserStore`] adapter for PostgreSQL.
//!
//! Each operation checks out one pooled connection, runs one parameterised
//! query or statement, and maps the outcome to the port's contract: zero
//! matching rows become zero values, store failures become
//! [`UserStoreError`] values carrying the operation name.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::debug;

use crate::domain::User;
use crate::domain::ports::{UserStore, UserStoreError};

use super::models::{NewUserRow, UserRow};
use super::pool::{DbPool, PoolError};
use super::schema::users;

/// PostgreSQL implementation of the user store port.
#[derive(Clone)]
pub struct DieselUserStore {
    pool: DbPool,
}

impl DieselUserStore {
    /// Create a store over the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(operation: &'static str, error: PoolError) -> UserStoreError {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => {
            UserStoreError::connection(operation, message)
        }
    }
}

fn map_diesel_error(operation: &'static str, error: diesel::result::Error) -> UserStoreError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), operation, "store operation failed");
        }
        _ => debug!(error = %error, operation, "store operation failed"),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, info) => {
            UserStoreError::connection(operation, info.message().to_owned())
        }
        DieselError::DeserializationError(err) => {
            UserStoreError::query(operation, format!("row decode failed: {err}"))
        }
        other => UserStoreError::query(operation, other.to_string()),
    }
}

#[async_trait]
impl UserStore for DieselUserStore {
    async fn list_users(&self) -> Result<Vec<User>, UserStoreError> {
        const OP: &str = "list users";

        let mut conn = self.pool.get().await.map_err(|err| map_pool_error(OP, err))?;

        // No explicit ORDER BY: callers must not assume ordering. A decode
        // failure on any row fails the whole load.
        let rows: Vec<UserRow> = users::table
            .select(UserRow::as_select())
            .load(&mut conn)
            .await
            .map_err(|err| map_diesel_error(OP, err))?;

        Ok(rows.into_iter().map(User::from).collect())
    }

    async fn get_user_by_id(&self, id: i32) -> Result<User, UserStoreError> {
        const OP: &str = "get user by id";

        let mut conn = self.pool.get().await.map_err(|err| map_pool_error(OP, err))?;

        let row = users::table
            .find(id)
            .select(UserRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(|err| map_diesel_error(OP, err))?;

        Ok(row.map(User::from).unwrap_or_default())
    }

    async fn get_user_by_credentials(
        &self,
        username: &str,
        password_digest: &str,
    ) -> Result<User, UserStoreError> {
        const OP: &str = "get user by credentials";

        let mut conn = self.pool.get().await.map_err(|err| map_pool_error(OP, err))?;

        let row = users::table
            .filter(users::username.eq(username))
            .filter(users::password.eq(password_digest))
            .select(UserRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(|err| map_diesel_error(OP, err))?;

        Ok(row.map(User::from).unwrap_or_default())
    }

    async fn get_id_by_username(&self, username: &str) -> Result<i32, UserStoreError> {
        const OP: &str = "get id by username";

        let mut conn = self.pool.get().await.map_err(|err| map_pool_error(OP, err))?;

        let id = users::table
            .filter(users::username.eq(username))
            .select(users::id)
            .first::<i32>(&mut conn)
            .await
            .optional()
            .map_err(|err| map_diesel_error(OP, err))?;

        Ok(id.unwrap_or(0))
    }

    async fn insert_user(
        &self,
        username: &str,
        password_digest: &str,
        email: &str,
    ) -> Result<(), UserStoreError> {
        const OP: &str = "insert user";

        let mut conn = self.pool.get().await.map_err(|err| map_pool_error(OP, err))?;

        let new_row = NewUserRow {
            username,
            password: password_digest,
            email,
        };

        diesel::insert_into(users::table)
            .values(&new_row)
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(|err| map_diesel_error(OP, err))
    }

    async fn delete_user(&self, id: i32) -> Result<u64, UserStoreError> {
        const OP: &str = "delete user";

        let mut conn = self.pool.get().await.map_err(|err| map_pool_error(OP, err))?;

        let affected = diesel::delete(users::table.find(id))
            .execute(&mut conn)
            .await
            .map_err(|err| map_diesel_error(OP, err))?;

        Ok(affected as u64)
    }
}

#[cfg(test)]
mod tests {
    //! Error-mapping coverage; query semantics against a live store are
    //! exercised through the port-level suites.

    use diesel::result::{DatabaseErrorKind, Error as DieselError};
    use rstest::rstest;

    use super::*;

    #[test]
    fn pool_failures_map_to_connection_errors() {
        let err = map_pool_error("list users", PoolError::checkout("timed out"));
        assert_eq!(
            err,
            UserStoreError::connection("list users", "timed out")
        );
    }

    #[test]
    fn closed_connections_map_to_connection_errors() {
        let diesel_err = DieselError::DatabaseError(
            DatabaseErrorKind::ClosedConnection,
            Box::new("connection closed".to_owned()),
        );

        let err = map_diesel_error("get user by id", diesel_err);

        assert_eq!(
            err,
            UserStoreError::connection("get user by id", "connection closed")
        );
    }

    #[test]
    fn row_decode_failures_carry_the_reason() {
        let diesel_err = DieselError::DeserializationError("bad column".into());

        let err = map_diesel_error("list users", diesel_err);

        match err {
            UserStoreError::Query { operation, message } => {
                assert_eq!(operation, "list users");
                assert!(message.contains("row decode failed"));
                assert!(message.contains("bad column"));
            }
            other => panic!("expected query error, got {other:?}"),
        }
    }

    #[rstest]
    #[case(DieselError::NotFound)]
    #[case(DieselError::DatabaseError(
        DatabaseErrorKind::UniqueViolation,
        Box::new("duplicate key".to_owned()),
    ))]
    fn other_failures_map_to_query_errors(#[case] diesel_err: DieselError) {
        let err = map_diesel_error("insert user", diesel_err);
        assert!(matches!(err, UserStoreError::Query { operation, .. } if operation == "insert user"));
    }
}
