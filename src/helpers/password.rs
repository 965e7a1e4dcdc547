use pbkdf2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use pbkdf2::{Params, Pbkdf2};
use crate::config::constants::{PASSWORD_HASH_ITERATIONS, PASSWORD_HASH_LENGTH};
use crate::errors::{ReviewerError, ReviewerResult};

/// Hashes `password` with PBKDF2-HMAC-SHA256 and a fresh random salt.
///
/// Stored form is a PHC string: `$pbkdf2-sha256$i=<rounds>,l=32$<salt>$<hash>`.
/// CPU-bound; async callers run it on the blocking pool.
pub fn hash_password(password: &str) -> ReviewerResult<String> {
    hash_with_rounds(password, PASSWORD_HASH_ITERATIONS)
}

fn hash_with_rounds(password: &str, rounds: u32) -> ReviewerResult<String> {
    let salt = SaltString::encode_b64(uuid::Uuid::new_v4().as_bytes())
        .map_err(|e| ReviewerError::system_error("password hashing", &e.to_string()))?;
    let params = Params { rounds, output_length: PASSWORD_HASH_LENGTH };

    Pbkdf2
        .hash_password_customized(password.as_bytes(), None, None, params, &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| ReviewerError::system_error("password hashing", &e.to_string()))
}

/// Constant-time check of `password` against a stored PHC hash.
/// Malformed stored hashes never verify.
pub fn verify_password(password: &str, stored: &str) -> bool {
    PasswordHash::new(stored)
        .and_then(|hash| Pbkdf2.verify_password(password.as_bytes(), &hash))
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_ROUNDS: u32 = 1_000;

    #[test]
    fn correct_password_verifies() {
        let stored = hash_with_rounds("hunter2", TEST_ROUNDS).unwrap();
        assert!(verify_password("hunter2", &stored));
    }

    #[test]
    fn wrong_password_fails() {
        let stored = hash_with_rounds("hunter2", TEST_ROUNDS).unwrap();
        assert!(!verify_password("hunter3", &stored));
    }

    #[test]
    fn same_password_gets_different_salts() {
        assert_ne!(
            hash_with_rounds("pw", TEST_ROUNDS).unwrap(),
            hash_with_rounds("pw", TEST_ROUNDS).unwrap()
        );
    }

    #[test]
    fn stored_form_is_a_pbkdf2_phc_string() {
        let stored = hash_password("pw").unwrap();
        assert!(stored.starts_with("$pbkdf2-sha256$"), "{}", stored);
        assert!(stored.contains(&format!("i={}", PASSWORD_HASH_ITERATIONS)), "{}", stored);
        assert!(verify_password("pw", &stored));
    }

    #[test]
    fn rounds_are_read_back_from_the_stored_hash() {
        let stored = hash_with_rounds("pw", 2_000).unwrap();
        assert!(stored.contains("i=2000"));
        assert!(verify_password("pw", &stored));
    }

    #[test]
    fn malformed_hashes_never_verify() {
        for stored in ["", "plain", "$md5$salt$abcd", "hmac-sha256$10000$salt$abcd", "$pbkdf2-sha256$i=x$salt$abcd"] {
            assert!(!verify_password("pw", stored), "{}", stored);
        }
    }
}
