//! JWT token validation.

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

use momentum_core::config::AuthConfig;
use momentum_core::error::{AppError, ErrorCode};

use super::claims::Claims;

/// Validates JWT access tokens.
#[derive(Clone)]
pub struct JwtDecoder {
    /// HMAC secret key for verification.
    decoding_key: DecodingKey,
    /// Validation configuration.
    validation: Validation,
}

impl std::fmt::Debug for JwtDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtDecoder")
            .field("validation", &self.validation)
            .finish()
    }
}

impl JwtDecoder {
    /// Creates a new decoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        // Expiry is exact: a token past its exp is rejected immediately.
        validation.leeway = 0;

        Self {
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
        }
    }

    /// Decodes and validates an access token string.
    ///
    /// An expired token maps to [`ErrorCode::ExpiredToken`]; every other
    /// failure (bad signature, malformed token, missing claims) maps to
    /// [`ErrorCode::InvalidToken`].
    pub fn decode(&self, token: &str) -> Result<Claims, AppError> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                        AppError::new(ErrorCode::ExpiredToken)
                    }
                    _ => {
                        tracing::debug!(error = %e, "token validation failed");
                        AppError::new(ErrorCode::InvalidToken)
                    }
                }
            })?;

        Ok(token_data.claims)
    }

    /// Returns whether the token passes signature and expiry checks.
    pub fn is_valid(&self, token: &str) -> bool {
        self.decode(token).is_ok()
    }

    /// Extracts the subject email from a valid token.
    pub fn extract_subject(&self, token: &str) -> Result<String, AppError> {
        Ok(self.decode(token)?.sub)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jwt::encoder::JwtEncoder;
    use chrono::Utc;
    use momentum_entity::user::{User, UserRole};

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
            id: 7,
            email: "bob@example.com".to_string(),
            password_hash: "hash".to_string(),
            name: "Bob".to_string(),
            role: UserRole::User,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_round_trip() {
        let config = test_config();
        let encoder = JwtEncoder::new(&config).unwrap();
        let decoder = JwtDecoder::new(&config);

        let token = encoder.generate_token(&test_user()).unwrap();
        let claims = decoder.decode(&token).unwrap();

        assert_eq!(claims.sub, "bob@example.com");
        assert_eq!(claims.authorities, vec!["ROLE_USER".to_string()]);
        assert!(claims.exp > Utc::now().timestamp());
    }

    #[test]
    fn test_expired_token_maps_to_expired_code() {
        let config = test_config();
        let encoder = JwtEncoder::new(&config).unwrap();
        let decoder = JwtDecoder::new(&config);

        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: "bob@example.com".to_string(),
            authorities: vec!["ROLE_USER".to_string()],
            iat: now - 3600,
            exp: now - 600,
        };
        let token = encoder.encode_claims(&claims).unwrap();

        let err = decoder.decode(&token).unwrap_err();
        assert_eq!(err.code, ErrorCode::ExpiredToken);

        // Same token passes when expiry checking is off, proving the
        // signature itself was valid.
        let mut lenient = Validation::new(Algorithm::HS256);
        lenient.validate_exp = false;
        let key = DecodingKey::from_secret(config.jwt_secret.as_bytes());
        assert!(decode::<Claims>(&token, &key, &lenient).is_ok());
    }

    #[test]
    fn test_token_expired_one_second_ago_is_rejected() {
        let config = test_config();
        let encoder = JwtEncoder::new(&config).unwrap();
        let decoder = JwtDecoder::new(&config);

        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: "bob@example.com".to_string(),
            authorities: vec!["ROLE_USER".to_string()],
            iat: now - 60,
            exp: now - 1,
        };
        let token = encoder.encode_claims(&claims).unwrap();

        let err = decoder.decode(&token).unwrap_err();
        assert_eq!(err.code, ErrorCode::ExpiredToken);
    }

    #[test]
    fn test_wrong_secret_maps_to_invalid_code() {
        let encoder = JwtEncoder::new(&test_config()).unwrap();
        let token = encoder.generate_token(&test_user()).unwrap();

        let other = AuthConfig {
            jwt_secret: "a-completely-different-secret-key-here".to_string(),
            jwt_ttl_minutes: 60,
            password_min_length: 8,
            argon2: Default::default(),
        };
        let decoder = JwtDecoder::new(&other);

        let err = decoder.decode(&token).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidToken);
    }

    #[test]
    fn test_garbage_token_maps_to_invalid_code() {
        let decoder = JwtDecoder::new(&test_config());
        let err = decoder.decode("not.a.jwt").unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidToken);
        assert!(!decoder.is_valid("not.a.jwt"));
    }

    #[test]
    fn test_extract_subject() {
        let config = test_config();
        let encoder = JwtEncoder::new(&config).unwrap();
        let decoder = JwtDecoder::new(&config);

        let token = encoder.generate_token(&test_user()).unwrap();
        assert_eq!(decoder.extract_subject(&token).unwrap(), "bob@example.com");
    }
}
