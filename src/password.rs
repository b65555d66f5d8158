use argon2::password_hash::SaltString;
use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier};
use rand::rngs::OsRng;

/// Placeholder password applied when an account is created without one.
/// Also the password of every seeded account.
pub const DEFAULT_PASSWORD: &str = "12345678";

/// Hash a password using `Argon2id`.
///
/// # Errors
///
/// Returns an error if hashing fails.
pub fn hash_password(password: &str) -> anyhow::Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    let hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| anyhow::anyhow!("Failed to hash password: {e}"))?;
    Ok(hash.to_string())
}

/// Verify a password against an `Argon2id` hash.
///
/// Returns `true` if the password matches, `false` otherwise.
///
/// # Errors
///
/// Returns an error if the hash format is invalid.
pub fn verify_password(password: &str, hash: &str) -> anyhow::Result<bool> {
    let parsed_hash =
        PasswordHash::new(hash).map_err(|e| anyhow::anyhow!("Invalid password hash: {e}"))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}

/// Validate username format: 1-50 characters, no leading/trailing whitespace.
///
/// Lookup is exact and case-sensitive, so `user` and `User` are different
/// accounts.
///
/// # Errors
///
/// Returns a descriptive error message if validation fails.
pub fn validate_username(username: &str) -> Result<(), String> {
    if username.is_empty() {
        return Err("Username is required.".to_string());
    }
    if username.len() > 50 {
        return Err("Username must be at most 50 characters.".to_string());
    }
    if username.trim() != username {
        return Err("Username must not start or end with whitespace.".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() -> anyhow::Result<()> {
        let hash = hash_password("praia-secret")?;
        assert_ne!(hash, "praia-secret");
        assert!(verify_password("praia-secret", &hash)?);
        assert!(!verify_password("wrong", &hash)?);
        Ok(())
    }

    #[test]
    fn test_hashes_are_salted() -> anyhow::Result<()> {
        let first = hash_password(DEFAULT_PASSWORD)?;
        let second = hash_password(DEFAULT_PASSWORD)?;
        assert_ne!(first, second);
        Ok(())
    }

    #[test]
    fn test_verify_rejects_bad_hash() {
        assert!(verify_password("anything", "not-a-hash").is_err());
    }

    #[test]
    fn test_validate_username() {
        assert!(validate_username("Giacomelli").is_ok());
        assert!(validate_username("").is_err());
        assert!(validate_username(" padded ").is_err());
        assert!(validate_username(&"x".repeat(51)).is_err());
    }
}
