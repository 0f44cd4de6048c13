//! Signup and login orchestration.

use std::sync::Arc;

use tracing::info;

use momentum_auth::jwt::JwtEncoder;
use momentum_auth::password::{PasswordHasher, PasswordValidator};
use momentum_core::error::{AppError, ErrorCode};
use momentum_core::result::AppResult;
use momentum_database::repositories::user::UserRepository;
use momentum_entity::user::{CreateUser, User, UserRole};

use crate::context::RequestContext;

/// Handles account registration, credential login, and profile lookup.
#[derive(Clone)]
pub struct AuthService {
    /// User repository.
    user_repo: Arc<UserRepository>,
    /// Argon2id hasher.
    hasher: PasswordHasher,
    /// Password policy.
    validator: PasswordValidator,
    /// Access token signer.
    encoder: Arc<JwtEncoder>,
}

impl AuthService {
    /// Creates a new auth service.
    pub fn new(
        user_repo: Arc<UserRepository>,
        hasher: PasswordHasher,
        validator: PasswordValidator,
        encoder: Arc<JwtEncoder>,
    ) -> Self {
        Self {
            user_repo,
            hasher,
            validator,
            encoder,
        }
    }

    /// Registers a new account with the default `User` role.
    pub async fn signup(&self, email: &str, password: &str, name: &str) -> AppResult<User> {
        if email.trim().is_empty() || name.trim().is_empty() {
            return Err(AppError::new(ErrorCode::MissingRequiredField));
        }
        self.validator.validate(password)?;

        if self.user_repo.exists_by_email(email).await? {
            return Err(AppError::new(ErrorCode::DuplicateEmail));
        }

        let password_hash = self.hasher.hash_password(password)?;
        let user = self
            .user_repo
            .create(&CreateUser {
                email: email.to_string(),
                password_hash,
                name: name.to_string(),
                role: UserRole::User,
            })
            .await?;

        info!(user_id = user.id, "new account registered");
        Ok(user)
    }

    /// Verifies credentials and issues a signed access token.
    pub async fn login(&self, email: &str, password: &str) -> AppResult<String> {
        let user = self.user_repo.find_by_email(email).await?;
        let user = authenticate(user, password, &self.hasher)?;

        let token = self.encoder.generate_token(&user)?;
        info!(user_id = user.id, "login succeeded");
        Ok(token)
    }

    /// Loads the caller's profile.
    pub async fn me(&self, ctx: &RequestContext) -> AppResult<User> {
        self.user_repo
            .find_by_id(ctx.user_id)
            .await?
            .ok_or_else(|| AppError::new(ErrorCode::UserNotFound))
    }

    /// Resolves a JWT subject back to its account.
    ///
    /// Used by the request extractor after signature validation; an account
    /// deleted since token issuance yields a generic Unauthorized.
    pub async fn resolve_subject(&self, email: &str) -> AppResult<User> {
        self.user_repo
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::new(ErrorCode::Unauthorized))
    }
}

/// Checks a password attempt against an optionally found account.
///
/// An absent account and a hash mismatch return the *same* error so the
/// response never reveals which of the two checks failed.
fn authenticate(user: Option<User>, password: &str, hasher: &PasswordHasher) -> AppResult<User> {
    let Some(user) = user else {
        return Err(bad_credentials());
    };
    if hasher.verify_password(password, &user.password_hash)? {
        Ok(user)
    } else {
        Err(bad_credentials())
    }
}

fn bad_credentials() -> AppError {
    AppError::unauthorized("Invalid email or password")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use momentum_auth::jwt::JwtDecoder;
    use momentum_core::config::{Argon2Config, AuthConfig};

    fn test_config() -> AuthConfig {
        AuthConfig {
            jwt_secret: "test-secret-key-that-is-long-enough!".to_string(),
            jwt_ttl_minutes: 60,
            password_min_length: 8,
            argon2: Argon2Config {
                memory_kib: 1024,
                iterations: 1,
                parallelism: 1,
            },
        }
    }

    fn test_hasher() -> PasswordHasher {
        PasswordHasher::new(&test_config()).unwrap()
    }

    fn stored_user(hasher: &PasswordHasher, password: &str) -> User {
        User {
            id: 42,
            email: "carol@example.com".to_string(),
            password_hash: hasher.hash_password(password).unwrap(),
            name: "Carol".to_string(),
            role: UserRole::User,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_absent_user_and_wrong_password_same_error() {
        let hasher = test_hasher();
        let user = stored_user(&hasher, "rightpass1");

        let absent = authenticate(None, "rightpass1", &hasher).unwrap_err();
        let mismatch = authenticate(Some(user), "wrongpass1", &hasher).unwrap_err();

        assert_eq!(absent.code, mismatch.code);
        assert_eq!(absent.message, mismatch.message);
        assert_eq!(absent.code, ErrorCode::Unauthorized);
    }

    #[test]
    fn test_correct_password_authenticates() {
        let hasher = test_hasher();
        let user = stored_user(&hasher, "rightpass1");
        let authed = authenticate(Some(user), "rightpass1", &hasher).unwrap();
        assert_eq!(authed.id, 42);
    }

    #[test]
    fn test_issued_token_subject_is_email() {
        let config = test_config();
        let hasher = test_hasher();
        let user = stored_user(&hasher, "rightpass1");

        let encoder = JwtEncoder::new(&config).unwrap();
        let token = encoder.generate_token(&user).unwrap();

        let decoder = JwtDecoder::new(&config);
        assert_eq!(decoder.decode(&token).unwrap().sub, "carol@example.com");
    }
}
