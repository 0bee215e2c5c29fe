//! Signing and verification of access tokens, rotation of refresh tokens

use std::sync::Arc;

use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use rand::distributions::Alphanumeric;
use rand::Rng;
use sha2::{Digest, Sha256};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::domain::entities::token::{Claims, RefreshToken, TokenPair, ACCESS_TOKEN_TYPE};
use crate::domain::entities::user::User;
use crate::errors::{DomainError, TokenError};
use crate::repositories::TokenRepository;

use super::config::TokenServiceConfig;

/// Length of the opaque refresh token handed to clients
pub const REFRESH_TOKEN_LENGTH: usize = 32;

/// Issues and verifies access tokens and manages refresh tokens
pub struct TokenService<R: TokenRepository> {
    repository: Arc<R>,
    config: TokenServiceConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl<R: TokenRepository> TokenService<R> {
    /// Keys and validation rules are derived once from `config`.
    pub fn new(repository: Arc<R>, config: TokenServiceConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_bytes());

        let mut validation = Validation::new(config.algorithm);
        validation.set_issuer(&[config.issuer.as_str()]);
        validation.set_audience(&[config.audience.as_str()]);
        validation.validate_exp = true;
        validation.validate_nbf = true;
        validation.leeway = 0;

        Self {
            repository,
            config,
            encoding_key,
            decoding_key,
            validation,
        }
    }

    /// Fresh access and refresh token for `user`. Only the refresh token's
    /// digest is persisted.
    pub async fn generate_tokens(&self, user: &User) -> Result<TokenPair, DomainError> {
        let access = self.generate_access_token(user)?;
        let refresh = self.generate_refresh_token(user.id).await?;

        debug!(user_id = %user.id, "Issued token pair");
        Ok(TokenPair::new(access, refresh))
    }

    fn generate_access_token(&self, user: &User) -> Result<String, DomainError> {
        let claims = Claims::new_access_token(
            user,
            &self.config.issuer,
            &self.config.audience,
            self.config.access_token_lifetime,
        );
        self.encode_jwt(&claims)
    }

    async fn generate_refresh_token(&self, user_id: Uuid) -> Result<String, DomainError> {
        let token: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(REFRESH_TOKEN_LENGTH)
            .map(char::from)
            .collect();

        let refresh_token = RefreshToken::new(
            user_id,
            hash_token(&token),
            self.config.refresh_token_lifetime,
        );

        self.repository.save(refresh_token).await.map_err(|e| {
            warn!(error = %e, "Failed to store refresh token");
            DomainError::Token(TokenError::TokenGenerationFailed)
        })?;

        Ok(token)
    }

    pub(crate) fn encode_jwt(&self, claims: &Claims) -> Result<String, DomainError> {
        let header = Header::new(self.config.algorithm);
        encode(&header, claims, &self.encoding_key)
            .map_err(|_| DomainError::Token(TokenError::TokenGenerationFailed))
    }

    /// Claims of a valid access token. Expiry maps to `TokenExpired`; any
    /// other defect, including a foreign `token_type`, to `InvalidTokenFormat`.
    pub fn verify_access_token(&self, token: &str) -> Result<Claims, DomainError> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => DomainError::Token(TokenError::TokenExpired),
                _ => DomainError::Token(TokenError::InvalidTokenFormat),
            })?;

        if token_data.claims.token_type != ACCESS_TOKEN_TYPE {
            return Err(DomainError::Token(TokenError::InvalidTokenFormat));
        }

        Ok(token_data.claims)
    }

    /// Validates a refresh token and revokes it, returning its owner.
    ///
    /// Each refresh token can be exchanged exactly once; the caller issues
    /// the replacement pair.
    pub async fn consume_refresh_token(&self, token: &str) -> Result<Uuid, DomainError> {
        let token_hash = hash_token(token);

        let stored = self
            .repository
            .find_by_hash(&token_hash)
            .await?
            .ok_or(DomainError::Token(TokenError::InvalidRefreshToken))?;

        if stored.is_revoked {
            warn!(user_id = %stored.user_id, "Revoked refresh token presented");
            return Err(DomainError::Token(TokenError::TokenRevoked));
        }
        if stored.is_expired() {
            return Err(DomainError::Token(TokenError::TokenExpired));
        }

        // A concurrent refresh may have spent the token since the lookup
        if !self.repository.revoke(&token_hash).await? {
            warn!(user_id = %stored.user_id, "Refresh token already exchanged");
            return Err(DomainError::Token(TokenError::TokenRevoked));
        }

        Ok(stored.user_id)
    }
}

/// SHA-256 hex digest under which a refresh token is stored
pub fn hash_token(token: &str) -> String {
    hex::encode(Sha256::digest(token.as_bytes()))
}
