//! Password hashing and verification utilities
//!
//! Uses Argon2id for password hashing. Plaintext passwords are never stored
//! or compared directly.

use std::sync::OnceLock;

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::error::AppError;

/// Hash a password using Argon2id
///
/// # Errors
/// Returns an error if hashing fails
pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Password hashing failed: {e}")))
}

/// Verify a password against a hash
///
/// # Errors
/// Returns an error if the hash is not a valid PHC string
pub fn verify_password(password: &str, hash: &str) -> Result<bool, AppError> {
    let parsed_hash = PasswordHash::new(hash)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Invalid password hash format: {e}")))?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}

/// Verify a password when there may be no stored hash at all
///
/// With `None` the password is checked against a fixed throwaway hash so an
/// unknown account costs the same Argon2 work as a wrong password. Always
/// returns `false` in that case.
pub fn verify_password_timing_safe(password: &str, hash: Option<&str>) -> bool {
    static DUMMY_HASH: OnceLock<Option<String>> = OnceLock::new();

    match hash {
        Some(hash) => verify_password(password, hash).unwrap_or(false),
        None => {
            let dummy = DUMMY_HASH.get_or_init(|| hash_password("warbler-unknown-account").ok());
            if let Some(dummy) = dummy {
                let _ = verify_password(password, dummy);
            }
            false
        }
    }
}

/// Password service for dependency injection
#[derive(Debug, Clone, Default)]
pub struct PasswordService;

impl PasswordService {
    /// Create a new password service
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Hash a password
    ///
    /// # Errors
    /// Returns an error if hashing fails
    pub fn hash(&self, password: &str) -> Result<String, AppError> {
        hash_password(password)
    }

    /// Verify a password against an optional stored hash
    pub fn verify(&self, password: &str, hash: Option<&str>) -> bool {
        verify_password_timing_safe(password, hash)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_password() {
        let password = "HASHED_PASSWORD";
        let hash = hash_password(password).unwrap();

        assert!(hash.starts_with("$argon2"));
        assert_ne!(hash, password);
        // Different salt every time
        let hash2 = hash_password(password).unwrap();
        assert_ne!(hash, hash2);
    }

    #[test]
    fn test_verify_password() {
        let hash = hash_password("testuser").unwrap();

        assert!(verify_password("testuser", &hash).unwrap());
        assert!(!verify_password("testuser2", &hash).unwrap());
    }

    #[test]
    fn test_verify_rejects_malformed_hash() {
        assert!(verify_password("testuser", "testuser").is_err());
    }

    #[test]
    fn test_timing_safe_verification() {
        let hash = hash_password("secret1").unwrap();

        assert!(verify_password_timing_safe("secret1", Some(&hash)));
        assert!(!verify_password_timing_safe("secret2", Some(&hash)));
        assert!(!verify_password_timing_safe("secret1", None));
        assert!(!verify_password_timing_safe("secret1", Some("not-a-hash")));
    }

    #[test]
    fn test_password_service() {
        let service = PasswordService::new();
        let hash = service.hash("hunter22").unwrap();

        assert!(service.verify("hunter22", Some(&hash)));
        assert!(!service.verify("wrong", Some(&hash)));
        assert!(!service.verify("hunter22", None));
    }
}
