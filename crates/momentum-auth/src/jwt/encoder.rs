//! JWT token creation with configurable signing and TTL.

use chrono::Utc;
use jsonwebtoken::{EncodingKey, Header, encode};

use momentum_core::config::auth::MIN_JWT_SECRET_BYTES;
use momentum_core::config::AuthConfig;
use momentum_core::error::AppError;
use momentum_entity::user::User;

use super::claims::Claims;

/// Creates signed JWT access tokens.
#[derive(Clone)]
pub struct JwtEncoder {
    /// HMAC secret key for signing.
    encoding_key: EncodingKey,
    /// Access token TTL in minutes.
    ttl_minutes: i64,
}

impl std::fmt::Debug for JwtEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtEncoder")
            .field("ttl_minutes", &self.ttl_minutes)
            .finish()
    }
}

impl JwtEncoder {
    /// Creates a new encoder from auth configuration.
    ///
    /// Rejects secrets shorter than 32 bytes since HS256 security
    /// degrades with short keys.
    pub fn new(config: &AuthConfig) -> Result<Self, AppError> {
        if config.jwt_secret.len() < MIN_JWT_SECRET_BYTES {
            return Err(AppError::internal(format!(
                "JWT secret must be at least {MIN_JWT_SECRET_BYTES} bytes"
            )));
        }

        Ok(Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            ttl_minutes: config.jwt_ttl_minutes as i64,
        })
    }

    /// Generates a signed access token for the given user.
    ///
    /// The subject is the user's email and the authority list carries
    /// the role prefixed with `ROLE_`.
    pub fn generate_token(&self, user: &User) -> Result<String, AppError> {
        let now = Utc::now();
        let exp = now + chrono::Duration::minutes(self.ttl_minutes);

        let claims = Claims {
            sub: user.email.clone(),
            authorities: user.authorities(),
            iat: now.timestamp(),
            exp: exp.timestamp(),
        };

        self.encode_claims(&claims)
    }

    /// Signs an already-built claims payload.
    pub fn encode_claims(&self, claims: &Claims) -> Result<String, AppError> {
        encode(&Header::default(), claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to encode access token: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use momentum_entity::user::UserRole;

    fn test_config() -> AuthConfig {
        AuthConfig {
            jwt_secret: "test-secret-key-that-is-long-enough!".to_string(),
            jwt_ttl_minutes: 60,
            password_min_length: 8,
            argon2: Default::default(),
        }
    }

    fn test_user() -> User {
        User {
            id: 1,
            email: "alice@example.com".to_string(),
            password_hash: "hash".to_string(),
            name: "Alice".to_string(),
            role: UserRole::User,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_short_secret_rejected() {
        let config = AuthConfig {
            jwt_secret: "too-short".to_string(),
            jwt_ttl_minutes: 60,
            password_min_length: 8,
            argon2: Default::default(),
        };
        assert!(JwtEncoder::new(&config).is_err());
    }

    #[test]
    fn test_generate_token_produces_three_segments() {
        let encoder = JwtEncoder::new(&test_config()).unwrap();
        let token = encoder.generate_token(&test_user()).unwrap();
        assert_eq!(token.split('.').count(), 3);
    }
}
