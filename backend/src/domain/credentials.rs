//! Credential digest derivation.
//!
//! Passwords are stored and compared as digests only. The orchestration
//! layer derives the digest before a credential crosses into the store port,
//! so plaintext never reaches persistence.

use sha2::{Digest, Sha256};

/// Derive the storable digest of a plaintext password.
///
/// SHA-256 over the UTF-8 bytes, rendered as lower-case hex (64 characters).
/// Deterministic: equal inputs always produce equal digests, which is what
/// makes digest-equality comparison in SQL possible.
pub fn password_digest(password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn digest_is_deterministic() {
        assert_eq!(password_digest("pw1"), password_digest("pw1"));
    }

    #[test]
    fn digest_matches_known_vector() {
        assert_eq!(
            password_digest("pw1"),
            "c592df4a86933b92addc9842402ddf198c638ea9be58916ee6e3734e1e3152f8"
        );
    }

    #[rstest]
    #[case("")]
    #[case("pw1")]
    #[case("correct horse battery staple")]
    fn digest_is_fixed_length_hex(#[case] input: &str) {
        let digest = password_digest(input);
        assert_eq!(digest.len(), 64);
        assert!(digest.chars().all(|c| c.is_ascii_hexdigit()));
        assert_eq!(digest, digest.to_lowercase());
    }

    #[test]
    fn distinct_inputs_produce_distinct_digests() {
        assert_ne!(password_digest("pw1"), password_digest("pw2"));
    }
}
