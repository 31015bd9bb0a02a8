//! Credential hashing strategy.
//!
//! The handler never hashes directly: it is constructed with a
//! [`CredentialHasher`] and keeps it for its whole lifetime. Production
//! wiring passes an [`Argon2Hasher`]; tests pass a deterministic closure.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::{Algorithm, Argon2, Params, Version};
use thiserror::Error;

use crate::config::HashingConfig;

/// Failure while hashing a credential.
///
/// Always an internal fault: by the time hashing runs the plaintext has
/// already been accepted.
#[derive(Debug, Error)]
#[error("credential hashing failed: {reason}")]
pub struct HashError {
    reason: String,
}

impl HashError {
    /// Creates a hash error with the given reason.
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    /// Returns the reason reported by the hashing backend.
    pub fn reason(&self) -> &str {
        &self.reason
    }
}

/// One-way function from a plaintext credential to its stored form.
///
/// Any `Fn(&[u8]) -> Result<String, HashError>` is a strategy:
///
/// ```
/// use account_core::{CredentialHasher, HashError};
///
/// let fixed = |_: &[u8]| -> Result<String, HashError> { Ok("$static$".to_string()) };
/// assert_eq!(fixed.hash(b"password").unwrap(), "$static$");
/// ```
pub trait CredentialHasher: Send + Sync {
    /// Hashes `password`, returning an opaque encoded hash.
    fn hash(&self, password: &[u8]) -> Result<String, HashError>;
}

impl<F> CredentialHasher for F
where
    F: Fn(&[u8]) -> Result<String, HashError> + Send + Sync,
{
    fn hash(&self, password: &[u8]) -> Result<String, HashError> {
        self(password)
    }
}

/// Argon2id hasher with a fixed work factor.
///
/// Each call draws a fresh random salt, so hashing the same password twice
/// gives different PHC strings that both verify.
#[derive(Debug, Clone)]
pub struct Argon2Hasher {
    params: Params,
}

impl Argon2Hasher {
    /// Builds a hasher from configured cost parameters.
    ///
    /// # Errors
    ///
    /// Returns `HashError` if the parameters are outside Argon2's limits.
    pub fn new(config: &HashingConfig) -> Result<Self, HashError> {
        let params = Params::new(
            config.memory_cost,
            config.time_cost,
            config.parallelism,
            None,
        )
        .map_err(|e| HashError::new(format!("invalid argon2 params: {e}")))?;

        Ok(Self { params })
    }

    fn argon2(&self) -> Argon2<'static> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone())
    }

    /// Checks `password` against an encoded hash produced by this hasher.
    ///
    /// Returns `false` for malformed hashes as well as mismatches.
    pub fn verify(&self, password: &[u8], encoded: &str) -> bool {
        match PasswordHash::new(encoded) {
            Ok(parsed) => self.argon2().verify_password(password, &parsed).is_ok(),
            Err(_) => false,
        }
    }
}

impl Default for Argon2Hasher {
    fn default() -> Self {
        Self {
            params: Params::default(),
        }
    }
}

impl CredentialHasher for Argon2Hasher {
    fn hash(&self, password: &[u8]) -> Result<String, HashError> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = self
            .argon2()
            .hash_password(password, &salt)
            .map_err(|e| HashError::new(e.to_string()))?;
        Ok(hash.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Smallest cost Argon2 accepts, to keep debug-mode tests fast.
    fn cheap_config() -> HashingConfig {
        HashingConfig {
            memory_cost: 8,
            time_cost: 1,
            parallelism: 1,
        }
    }

    #[test]
    fn argon2_hash_differs_from_plaintext_and_verifies() {
        let hasher = Argon2Hasher::new(&cheap_config()).unwrap();
        let hash = hasher.hash(b"password").unwrap();

        assert_ne!(hash, "password");
        assert!(hash.starts_with("$argon2id$"));
        assert!(hasher.verify(b"password", &hash));
        assert!(!hasher.verify(b"wrong", &hash));
    }

    #[test]
    fn argon2_salts_every_hash() {
        let hasher = Argon2Hasher::new(&cheap_config()).unwrap();

        let first = hasher.hash(b"password").unwrap();
        let second = hasher.hash(b"password").unwrap();

        assert_ne!(first, second);
        assert!(hasher.verify(b"password", &second));
    }

    #[test]
    fn argon2_rejects_invalid_params() {
        let config = HashingConfig {
            memory_cost: 1,
            time_cost: 0,
            parallelism: 1,
        };

        assert!(Argon2Hasher::new(&config).is_err());
    }

    #[test]
    fn verify_rejects_malformed_hash() {
        let hasher = Argon2Hasher::new(&cheap_config()).unwrap();
        assert!(!hasher.verify(b"password", "not-a-phc-string"));
    }

    #[test]
    fn closures_are_strategies() {
        let failing = |_: &[u8]| -> Result<String, HashError> { Err(HashError::new("hash too short")) };
        let error = failing.hash(b"password").unwrap_err();

        assert_eq!(error.reason(), "hash too short");
        assert_eq!(error.to_string(), "credential hashing failed: hash too short");
    }

    #[test]
    fn strategies_work_behind_trait_objects() {
        let hasher: Box<dyn CredentialHasher> =
            Box::new(|pw: &[u8]| -> Result<String, HashError> { Ok(format!("h:{}", pw.len())) });

        assert_eq!(hasher.hash(b"abc").unwrap(), "h:3");
    }
}
