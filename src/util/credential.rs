use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::error::AppError;

/// Hashes a password with Argon2id and a fresh OS-sourced salt.
///
/// The default Argon2id parameter set is the application's fixed work
/// factor; the output is a self-describing PHC string, so the parameters
/// travel with the hash.
///
/// # Arguments
/// - `password` - The plaintext password to hash
///
/// # Returns
/// - `Ok(String)` - PHC-encoded hash suitable for storage
/// - `Err(AppError::InternalError)` - Hashing failed
pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|err| AppError::InternalError(format!("Failed to hash password: {}", err)))
}

/// Verifies a plaintext password against a stored PHC hash string.
///
/// An unparseable stored hash verifies as false rather than erroring, so
/// callers cannot distinguish a corrupt record from a wrong password.
///
/// # Arguments
/// - `password` - The plaintext password supplied by the client
/// - `hash` - The stored PHC hash string
///
/// # Returns
/// - `bool` - Whether the password matches the hash
pub fn verify_password(password: &str, hash: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(hash) else {
        return false;
    };

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}
