//! Password hashing with Argon2id.

use argon2::{
    Argon2, PasswordHash,
    password_hash::{PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use thiserror::Error;

/// Minimum accepted password length.
pub const MIN_PASSWORD_LEN: usize = 8;

/// Errors that can occur during password operations.
#[derive(Debug, Error)]
pub enum PasswordError {
    /// Password does not meet the length requirement.
    #[error("password must be at least {MIN_PASSWORD_LEN} characters")]
    TooShort,

    /// Failed to hash password.
    #[error("failed to hash password: {0}")]
    HashError(String),

    /// Failed to verify password.
    #[error("failed to verify password: {0}")]
    VerifyError(String),

    /// Invalid password hash format.
    #[error("invalid password hash format")]
    InvalidHash,
}

/// Checks a candidate password against the length policy.
///
/// # Errors
///
/// Returns `PasswordError::TooShort` if the password is under
/// [`MIN_PASSWORD_LEN`] characters.
pub fn validate_password(password: &str) -> Result<(), PasswordError> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(PasswordError::TooShort);
    }
    Ok(())
}

/// Hashes a password using Argon2id, returning a PHC-format string.
///
/// # Errors
///
/// Returns `PasswordError::HashError` if hashing fails.
pub fn hash_password(password: &str) -> Result<String, PasswordError> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| PasswordError::HashError(e.to_string()))
}

/// Verifies a password against a stored PHC-format hash.
///
/// Returns `Ok(false)` on a mismatch; errors are reserved for malformed
/// hashes and unexpected verifier failures.
///
/// # Errors
///
/// Returns `PasswordError::InvalidHash` if the stored hash cannot be parsed.
/// Returns `PasswordError::VerifyError` if verification fails unexpectedly.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, PasswordError> {
    let parsed_hash = PasswordHash::new(hash).map_err(|_| PasswordError::InvalidHash)?;

    match Argon2::default().verify_password(password.as_bytes(), &parsed_hash) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(PasswordError::VerifyError(e.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_is_phc_format() {
        let hash = hash_password("correct horse battery staple").unwrap();
        assert!(hash.starts_with("$argon2id$"));
    }

    #[test]
    fn test_verify_round_trip() {
        let hash = hash_password("hunter2hunter2").unwrap();
        assert!(verify_password("hunter2hunter2", &hash).unwrap());
        assert!(!verify_password("hunter3hunter3", &hash).unwrap());
    }

    #[test]
    fn test_salted_hashes_differ() {
        let a = hash_password("same password").unwrap();
        let b = hash_password("same password").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_invalid_hash_format() {
        assert!(matches!(
            verify_password("anything", "not-a-phc-string"),
            Err(PasswordError::InvalidHash)
        ));
    }

    #[test]
    fn test_validate_password_length() {
        assert!(validate_password("12345678").is_ok());
        assert!(matches!(
            validate_password("1234567"),
            Err(PasswordError::TooShort)
        ));
        assert!(matches!(validate_password(""), Err(PasswordError::TooShort)));
    }
}
