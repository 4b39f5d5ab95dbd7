//! User entity model.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Persisted user record.
///
/// The `password` field always holds the hex digest of the user's password,
/// never the plaintext; hashing happens in the orchestration layer before a
/// value reaches the store.
///
/// `User::default()` is the zero-valued record used as the placeholder for
/// not-found lookups and failed operations. Callers distinguish "found" from
/// "not found" by inspecting `id`: the store never assigns id `0`.
///
/// Wire contract: lower-case keys `id`, `username`, `password`, `email`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    /// Store-assigned identifier, immutable after creation.
    #[schema(example = 1)]
    pub id: i32,
    /// Login name; intended unique, enforced only by the store.
    #[schema(example = "alice")]
    pub username: String,
    /// Hex digest of the password.
    pub password: String,
    /// Contact address.
    #[schema(example = "a@x.com")]
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_user_is_zero_valued() {
        let user = User::default();
        assert_eq!(user.id, 0);
        assert!(user.username.is_empty());
        assert!(user.password.is_empty());
        assert!(user.email.is_empty());
    }

    #[test]
    fn serialises_with_lower_case_keys() {
        let user = User {
            id: 7,
            username: "alice".into(),
            password: "digest".into(),
            email: "a@x.com".into(),
        };
        let value = serde_json::to_value(&user).expect("user JSON");
        assert_eq!(value["id"], 7);
        assert_eq!(value["username"], "alice");
        assert_eq!(value["password"], "digest");
        assert_eq!(value["email"], "a@x.com");
    }
}
