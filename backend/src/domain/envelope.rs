//! Response envelopes returned by every operation.
//!
//! An envelope pairs an operation result with an `err` text field so that
//! store failures never become transport-level faults: the client always
//! receives a well-formed body and inspects `err` to detect failure.
//!
//! Invariants:
//! - exactly one of "result" or "non-empty `err`" is meaningful; the
//!   `failure` constructors leave every result field zero-valued.
//! - `err` is omitted from the serialised form when empty, and defaults to
//!   empty when absent on decode.
//!
//! The store error stays structured until an envelope is built; only here is
//! it rendered to text, so intermediate layers can branch on its kind.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::User;
use crate::domain::ports::UserStoreError;

/// Envelope for the user listing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UsersEnvelope {
    /// All user records, in store scan order.
    pub users: Vec<User>,
    /// Failure text; empty means success.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub err: String,
}

impl UsersEnvelope {
    /// Build a success envelope carrying the listed records.
    pub fn success(users: Vec<User>) -> Self {
        Self {
            users,
            err: String::new(),
        }
    }

    /// Build a failure envelope with an empty listing.
    pub fn failure(err: &UserStoreError) -> Self {
        Self {
            users: Vec::new(),
            err: err.to_string(),
        }
    }
}

/// Envelope for single-record lookups.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserEnvelope {
    /// The matched record, or the zero-valued record when absent or failed.
    pub user: User,
    /// Failure text; empty means success.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub err: String,
}

impl UserEnvelope {
    /// Build a success envelope; a zero-valued `user` means "not found".
    pub fn success(user: User) -> Self {
        Self {
            user,
            err: String::new(),
        }
    }

    /// Build a failure envelope with a zero-valued record.
    pub fn failure(err: &UserStoreError) -> Self {
        Self {
            user: User::default(),
            err: err.to_string(),
        }
    }
}

/// Envelope for identifier lookups.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct IdEnvelope {
    /// The matched id, or `0` when absent or failed.
    pub id: i32,
    /// Failure text; empty means success.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub err: String,
}

impl IdEnvelope {
    /// Build a success envelope; id `0` means "not found".
    pub fn success(id: i32) -> Self {
        Self {
            id,
            err: String::new(),
        }
    }

    /// Build a failure envelope with a zero id.
    pub fn failure(err: &UserStoreError) -> Self {
        Self {
            id: 0,
            err: err.to_string(),
        }
    }
}

/// Envelope for deletions, reporting how many rows matched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RowsEnvelope {
    /// Number of rows removed; `0` when nothing matched or on failure.
    #[serde(rename = "rowsAffected")]
    pub rows_affected: u64,
    /// Failure text; empty means success.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub err: String,
}

impl RowsEnvelope {
    /// Build a success envelope carrying the affected-row count.
    pub fn success(rows_affected: u64) -> Self {
        Self {
            rows_affected,
            err: String::new(),
        }
    }

    /// Build a failure envelope with a zero count.
    pub fn failure(err: &UserStoreError) -> Self {
        Self {
            rows_affected: 0,
            err: err.to_string(),
        }
    }
}

/// Envelope for pure side-effecting operations (the insert).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AckEnvelope {
    /// Failure text; empty means success.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub err: String,
}

impl AckEnvelope {
    /// Build a success envelope.
    pub fn success() -> Self {
        Self { err: String::new() }
    }

    /// Build a failure envelope.
    pub fn failure(err: &UserStoreError) -> Self {
        Self {
            err: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::{Value, json};

    fn store_error() -> UserStoreError {
        UserStoreError::query("list users", "database error")
    }

    #[test]
    fn err_is_omitted_when_empty() {
        let value = serde_json::to_value(AckEnvelope::success()).expect("envelope JSON");
        assert_eq!(value, json!({}));

        let value = serde_json::to_value(IdEnvelope::success(3)).expect("envelope JSON");
        assert_eq!(value, json!({ "id": 3 }));
    }

    #[test]
    fn err_is_serialised_when_non_empty() {
        let value = serde_json::to_value(AckEnvelope::failure(&store_error())).expect("JSON");
        assert_eq!(
            value.get("err").and_then(Value::as_str),
            Some("list users: store query failed: database error")
        );
    }

    #[test]
    fn rows_envelope_uses_wire_key() {
        let value = serde_json::to_value(RowsEnvelope::success(1)).expect("envelope JSON");
        assert_eq!(value, json!({ "rowsAffected": 1 }));
        assert!(value.get("rows_affected").is_none());
    }

    #[test]
    fn failure_envelopes_carry_zero_valued_results() {
        let err = store_error();
        assert!(UsersEnvelope::failure(&err).users.is_empty());
        assert_eq!(UserEnvelope::failure(&err).user, User::default());
        assert_eq!(IdEnvelope::failure(&err).id, 0);
        assert_eq!(RowsEnvelope::failure(&err).rows_affected, 0);
    }

    #[rstest]
    #[case::success(UserEnvelope::success(User {
        id: 4,
        username: "alice".into(),
        password: "digest".into(),
        email: "a@x.com".into(),
    }))]
    #[case::failure(UserEnvelope::failure(&store_error()))]
    fn user_envelope_round_trips(#[case] envelope: UserEnvelope) {
        let encoded = serde_json::to_vec(&envelope).expect("encode");
        let decoded: UserEnvelope = serde_json::from_slice(&encoded).expect("decode");
        assert_eq!(decoded, envelope);
    }

    #[test]
    fn absent_err_decodes_as_empty() {
        let decoded: UsersEnvelope = serde_json::from_str(r#"{"users":[]}"#).expect("decode");
        assert!(decoded.err.is_empty());
    }
}
