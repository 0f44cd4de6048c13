//! Authentication configuration.

use serde::{Deserialize, Serialize};

/// Minimum acceptable JWT signing secret length in bytes.
pub const MIN_JWT_SECRET_BYTES: usize = 32;

/// Authentication and credential configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret key for JWT signing (HMAC-SHA256, at least 32 bytes).
    pub jwt_secret: String,
    /// Access token TTL in minutes.
    #[serde(default = "default_token_ttl")]
    pub jwt_ttl_minutes: u64,
    /// Minimum password length.
    #[serde(default = "default_password_min")]
    pub password_min_length: usize,
    /// Argon2id hashing cost parameters.
    #[serde(default)]
    pub argon2: Argon2Config,
}

/// Argon2id cost parameters for password hashing.
///
/// Defaults follow the current OWASP recommendation (19 MiB, 2 passes,
/// single lane). Tests may lower them to keep hashing fast.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Argon2Config {
    /// Memory cost in KiB.
    #[serde(default = "default_argon2_memory")]
    pub memory_kib: u32,
    /// Number of passes over memory.
    #[serde(default = "default_argon2_iterations")]
    pub iterations: u32,
    /// Degree of parallelism (lanes).
    #[serde(default = "default_argon2_parallelism")]
    pub parallelism: u32,
}

impl Default for Argon2Config {
    fn default() -> Self {
        Self {
            memory_kib: default_argon2_memory(),
            iterations: default_argon2_iterations(),
            parallelism: default_argon2_parallelism(),
        }
    }
}

fn default_token_ttl() -> u64 {
    60
}

fn default_password_min() -> usize {
    8
}

fn default_argon2_memory() -> u32 {
    19456
}

fn default_argon2_iterations() -> u32 {
    2
}

fn default_argon2_parallelism() -> u32 {
    1
}
