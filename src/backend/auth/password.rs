/**
 * Password Hashing
 *
 * bcrypt with a random per-password salt. The salt and cost are embedded in
 * the hash string, so verification needs nothing but the stored hash.
 */

use thiserror::Error;

/// bcrypt ignores everything past this many bytes
pub const MAX_PASSWORD_BYTES: usize = 72;

/// Errors produced while hashing a password
#[derive(Debug, Error)]
pub enum PasswordError {
    #[error("Password must be at most 72 bytes")]
    TooLong,

    #[error(transparent)]
    Bcrypt(#[from] bcrypt::BcryptError),
}

/// One-way password hasher
#[derive(Debug, Clone, Copy)]
pub struct PasswordHasher {
    cost: u32,
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new(bcrypt::DEFAULT_COST)
    }
}

impl PasswordHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    /// Hash a plaintext password
    ///
    /// Hashing the same plaintext twice yields different strings.
    pub fn hash(&self, plaintext: &str) -> Result<String, PasswordError> {
        if plaintext.len() > MAX_PASSWORD_BYTES {
            return Err(PasswordError::TooLong);
        }
        Ok(bcrypt::hash(plaintext, self.cost)?)
    }

    /// Check a plaintext password against a stored hash
    ///
    /// A malformed hash never matches.
    pub fn verify(&self, plaintext: &str, hash: &str) -> bool {
        if plaintext.len() > MAX_PASSWORD_BYTES {
            return false;
        }
        match bcrypt::verify(plaintext, hash) {
            Ok(valid) => valid,
            Err(e) => {
                tracing::warn!("Password verification error: {:?}", e);
                false
            }
        }
    }
}
