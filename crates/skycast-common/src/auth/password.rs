//! Password hashing and verification utilities
//!
//! Uses Argon2id for secure password hashing (OWASP recommended).

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::error::AppError;

/// Characters accepted as special symbols in passwords
const SPECIAL_CHARS: &str = "!@#$%^&*";

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

/// Validate password strength
///
/// Returns `Ok(())` if the password meets requirements:
/// - 6 to 128 characters
/// - Contains at least one digit
/// - Contains at least one special symbol (`!@#$%^&*`)
/// - Uses only word characters and the accepted special symbols
///
/// # Errors
/// Returns a validation error if the password doesn't meet requirements
pub fn validate_password_strength(password: &str) -> Result<(), AppError> {
    if password.len() < 6 || password.len() > 128 {
        return Err(AppError::Validation(
            "Password must be 6-128 characters long".to_string(),
        ));
    }

    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Err(AppError::Validation(
            "Password must contain at least one digit".to_string(),
        ));
    }

    if !password.chars().any(|c| SPECIAL_CHARS.contains(c)) {
        return Err(AppError::Validation(format!(
            "Password must contain at least one special symbol ({SPECIAL_CHARS})"
        )));
    }

    if !password
        .chars()
        .all(|c| c.is_alphanumeric() || c == '_' || SPECIAL_CHARS.contains(c))
    {
        return Err(AppError::Validation(
            "Password contains characters that are not allowed".to_string(),
        ));
    }

    Ok(())
}
