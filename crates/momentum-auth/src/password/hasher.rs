//! Argon2id password hashing with configurable cost parameters.

use argon2::{
    Algorithm, Argon2, Params, Version,
    password_hash::{
        PasswordHash, PasswordHasher as ArgonHasher, PasswordVerifier, SaltString, rand_core::OsRng,
    },
};

use momentum_core::config::AuthConfig;
use momentum_core::error::AppError;

/// Hashes and verifies passwords with Argon2id.
///
/// Cost parameters come from [`AuthConfig`], so the hash work factor can
/// be raised in configuration without a code change. Verification reads
/// the parameters embedded in each stored hash, so older hashes keep
/// verifying after the configured costs change.
#[derive(Clone)]
pub struct PasswordHasher {
    argon2: Argon2<'static>,
}

impl std::fmt::Debug for PasswordHasher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PasswordHasher")
            .field("params", self.argon2.params())
            .finish()
    }
}

impl PasswordHasher {
    /// Creates a hasher from the configured Argon2 cost parameters.
    pub fn new(config: &AuthConfig) -> Result<Self, AppError> {
        let params = Params::new(
            config.argon2.memory_kib,
            config.argon2.iterations,
            config.argon2.parallelism,
            None,
        )
        .map_err(|e| AppError::internal(format!("Invalid Argon2 parameters: {e}")))?;

        Ok(Self {
            argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, params),
        })
    }

    /// Hashes a plaintext password with a freshly generated salt.
    pub fn hash_password(&self, password: &str) -> Result<String, AppError> {
        let salt = SaltString::generate(&mut OsRng);

        let hash = self
            .argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AppError::internal(format!("Password hashing failed: {e}")))?;

        Ok(hash.to_string())
    }

    /// Verifies a plaintext password against a stored hash.
    ///
    /// Returns `Ok(true)` if the password matches, `Ok(false)` if not.
    pub fn verify_password(&self, password: &str, hash: &str) -> Result<bool, AppError> {
        let parsed_hash = PasswordHash::new(hash)
            .map_err(|e| AppError::internal(format!("Invalid password hash format: {e}")))?;

        match self.argon2.verify_password(password.as_bytes(), &parsed_hash) {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(e) => Err(AppError::internal(format!(
                "Password verification failed: {e}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use momentum_core::config::Argon2Config;

    fn test_hasher() -> PasswordHasher {
        PasswordHasher::new(&AuthConfig {
            jwt_secret: "test-secret-key-that-is-long-enough!".to_string(),
            jwt_ttl_minutes: 60,
            password_min_length: 8,
            argon2: Argon2Config {
                memory_kib: 1024,
                iterations: 1,
                parallelism: 1,
            },
        })
        .unwrap()
    }

    #[test]
    fn test_hash_and_verify() {
        let hasher = test_hasher();
        let hash = hasher.hash_password("correct horse battery").unwrap();

        assert!(hash.starts_with("$argon2id$"));
        assert!(hasher.verify_password("correct horse battery", &hash).unwrap());
        assert!(!hasher.verify_password("wrong password", &hash).unwrap());
    }

    #[test]
    fn test_configured_costs_are_embedded_in_the_hash() {
        let hasher = test_hasher();
        let hash = hasher.hash_password("correct horse battery").unwrap();
        assert!(hash.contains("m=1024,t=1,p=1"));
    }

    #[test]
    fn test_invalid_parameters_rejected() {
        let result = PasswordHasher::new(&AuthConfig {
            jwt_secret: "test-secret-key-that-is-long-enough!".to_string(),
            jwt_ttl_minutes: 60,
            password_min_length: 8,
            argon2: Argon2Config {
                memory_kib: 1,
                iterations: 0,
                parallelism: 0,
            },
        });
        assert!(result.is_err());
    }

    #[test]
    fn test_malformed_hash_is_error() {
        let hasher = test_hasher();
        assert!(hasher.verify_password("anything", "not-a-hash").is_err());
    }
}
