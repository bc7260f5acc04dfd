//! Password hashing with Argon2id.

use argon2::{
    Argon2,
    password_hash::{
        Error as HashError, PasswordHash, PasswordHasher, PasswordVerifier, SaltString,
        rand_core::OsRng,
    },
};
use thiserror::Error;

/// Errors from hashing or parsing stored password hashes.
#[derive(Debug, Error)]
pub enum PasswordError {
    #[error("password hashing failed")]
    Hash(#[source] HashError),

    #[error("stored password hash is malformed")]
    MalformedHash(#[source] HashError),
}

/// Hash a password for storage using Argon2id with default params.
///
/// # Errors
///
/// Returns an error if the hasher rejects its input.
pub fn hash_password(password: &str) -> Result<String, PasswordError> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(PasswordError::Hash)
}

/// Verify a candidate password against a stored hash.
///
/// Returns `Ok(false)` for a well-formed hash that does not match.
///
/// # Errors
///
/// Returns an error only when the stored hash cannot be parsed.
pub fn verify_password(password: &str, stored_hash: &str) -> Result<bool, PasswordError> {
    let parsed = PasswordHash::new(stored_hash).map_err(PasswordError::MalformedHash)?;

    match Argon2::default().verify_password(password.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(HashError::Password) => Ok(false),
        Err(error) => Err(PasswordError::MalformedHash(error)),
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn hash_and_verify_round_trip() -> TestResult {
        let hash = hash_password("hunter2hunter2")?;

        assert!(hash.starts_with("$argon2id$"), "expected argon2id hash");
        assert!(verify_password("hunter2hunter2", &hash)?);
        assert!(!verify_password("wrong-password", &hash)?);

        Ok(())
    }

    #[test]
    fn hashes_are_salted() -> TestResult {
        let first = hash_password("same-password")?;
        let second = hash_password("same-password")?;

        assert_ne!(first, second, "salts must differ between hashes");

        Ok(())
    }

    #[test]
    fn malformed_stored_hash_errors() {
        let result = verify_password("anything", "not-a-phc-string");

        assert!(matches!(result, Err(PasswordError::MalformedHash(_))));
    }
}
