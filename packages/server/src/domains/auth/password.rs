//! Password hashing and verification.

use anyhow::anyhow;
use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use rand::rngs::OsRng;

/// Hash a plaintext password with Argon2id and a fresh random salt.
///
/// Callers reject empty input before invoking; for usable input this
/// does not fail.
pub fn hash_password(password: &str) -> anyhow::Result<String> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| anyhow!("password hashing failed: {}", e))
}

/// Verify a plaintext password against a stored digest.
///
/// Returns `false` on any mismatch, including a malformed digest.
pub fn verify_password(password: &str, digest: &str) -> bool {
    match PasswordHash::new(digest) {
        Ok(parsed) => Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok(),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let password = "my_secure_password_123";
        let digest = hash_password(password).unwrap();

        assert_ne!(digest, password);
        assert!(verify_password(password, &digest));
        assert!(!verify_password("wrong_password", &digest));
    }

    #[test]
    fn test_same_password_hashes_differently() {
        let password = "repeat_after_me";
        let first = hash_password(password).unwrap();
        let second = hash_password(password).unwrap();

        // Salted per call, so the digests differ but both verify.
        assert_ne!(first, second);
        assert!(verify_password(password, &first));
        assert!(verify_password(password, &second));
    }

    #[test]
    fn test_malformed_digest_verifies_false() {
        assert!(!verify_password("anything", "not-a-digest"));
        assert!(!verify_password("anything", ""));
    }
}
