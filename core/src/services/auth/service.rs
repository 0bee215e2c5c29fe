//! Main authentication service implementation

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::entities::token::TokenPair;
use crate::domain::entities::user::{Privileges, User};
use crate::domain::value_objects::{RegistrationForm, PASSWORD_MISMATCH_MESSAGE};
use crate::errors::{AuthError, DomainError, DomainResult, FieldErrors, TokenError};
use crate::repositories::user::DUPLICATE_EMAIL_MESSAGE;
use crate::repositories::{TokenRepository, UserRepository};
use crate::services::token::TokenService;

use super::config::AuthServiceConfig;
use super::password::{hash_password, verify_password};

/// Authentication service: registration, credential login and token refresh
pub struct AuthService<U, T>
where
    U: UserRepository,
    T: TokenRepository,
{
    /// User repository for database operations
    user_repository: Arc<U>,
    /// Token service for JWT management
    token_service: Arc<TokenService<T>>,
    config: AuthServiceConfig,
}

impl<U, T> AuthService<U, T>
where
    U: UserRepository,
    T: TokenRepository,
{
    /// Create a new authentication service
    ///
    /// # Arguments
    ///
    /// * `user_repository` - Repository for user data persistence
    /// * `token_service` - Service for JWT token management
    /// * `config` - Service configuration
    pub fn new(
        user_repository: Arc<U>,
        token_service: Arc<TokenService<T>>,
        config: AuthServiceConfig,
    ) -> Self {
        Self {
            user_repository,
            token_service,
            config,
        }
    }

    /// Register a new account
    ///
    /// Field-level problems are collected first and reported together. The
    /// password mismatch check only runs once every field is valid, and is
    /// reported under `non_field_errors`. Nothing is stored on failure.
    ///
    /// # Arguments
    ///
    /// * `form` - Submitted registration data
    /// * `privileges` - `Superuser` also sets the staff flag
    pub async fn register(
        &self,
        form: RegistrationForm,
        privileges: Privileges,
    ) -> DomainResult<User> {
        let mut errors = form.field_errors(self.config.min_password_length);
        let email = form.normalized_email();

        if let Some(email) = email.as_deref() {
            if !errors.contains("email") && self.user_repository.exists_by_email(email).await? {
                errors.add("email", DUPLICATE_EMAIL_MESSAGE);
            }
        }
        errors.into_result()?;

        if !form.passwords_match() {
            let mut errors = FieldErrors::new();
            errors.add_non_field(PASSWORD_MISMATCH_MESSAGE);
            return Err(errors.into());
        }

        let (Some(email), Some(password)) = (email, form.password_1) else {
            return Err(DomainError::internal("validated registration form is incomplete"));
        };
        let username = form
            .username
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty());

        let password_hash = hash_password(password, self.config.bcrypt_cost).await?;
        let user = self
            .user_repository
            .create(User::new(email, username, password_hash).with_privileges(privileges))
            .await?;

        info!(user_id = %user.id, superuser = user.is_superuser, "User registered");
        Ok(user)
    }

    /// Exchange e-mail and password for a token pair
    ///
    /// Unknown e-mail, wrong password and inactive accounts all fail the
    /// same way so the response does not reveal which accounts exist.
    pub async fn login(&self, email: &str, password: &str) -> DomainResult<TokenPair> {
        let email = budgetory_shared::utils::validation::normalize_email(email);

        let Some(mut user) = self.user_repository.find_by_email(&email).await? else {
            debug!(%email, "Login for unknown e-mail");
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(password.to_string(), user.password_hash.clone()).await? {
            warn!(user_id = %user.id, "Login with wrong password");
            return Err(AuthError::InvalidCredentials.into());
        }
        if !user.is_active {
            return Err(AuthError::InvalidCredentials.into());
        }

        user.update_last_login();
        let user = self.user_repository.update(user).await?;

        info!(user_id = %user.id, "User logged in");
        self.token_service.generate_tokens(&user).await
    }

    /// Rotate a refresh token into a fresh token pair
    pub async fn refresh(&self, refresh_token: &str) -> DomainResult<TokenPair> {
        let user_id = self.token_service.consume_refresh_token(refresh_token).await?;

        let user = self
            .user_repository
            .find_by_id(user_id)
            .await?
            .filter(|user| user.is_active)
            .ok_or(DomainError::Token(TokenError::InvalidRefreshToken))?;

        debug!(user_id = %user.id, "Refresh token rotated");
        self.token_service.generate_tokens(&user).await
    }
}
