//! Access token claims and stored refresh tokens.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::user::User;

/// `token_type` of every JWT this service signs
pub const ACCESS_TOKEN_TYPE: &str = "access";

/// Payload of an HS256 access token.
///
/// The privilege flags are a snapshot taken at issue time; a user promoted
/// later only sees the change after the next refresh.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// User id
    pub sub: String,
    pub email: String,
    pub is_staff: bool,
    pub is_superuser: bool,
    pub token_type: String,
    pub iat: i64,
    pub exp: i64,
    pub nbf: i64,
    pub iss: String,
    pub aud: String,
    pub jti: String,
}

impl Claims {
    pub fn new_access_token(user: &User, issuer: &str, audience: &str, lifetime: Duration) -> Self {
        let issued_at = Utc::now().timestamp();

        Self {
            sub: user.id.to_string(),
            email: user.email.clone(),
            is_staff: user.is_staff,
            is_superuser: user.is_superuser,
            token_type: ACCESS_TOKEN_TYPE.to_string(),
            iat: issued_at,
            nbf: issued_at,
            exp: issued_at + lifetime.num_seconds(),
            iss: issuer.to_string(),
            aud: audience.to_string(),
            jti: Uuid::new_v4().simple().to_string(),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.exp <= Utc::now().timestamp()
    }

    pub fn user_id(&self) -> Result<Uuid, uuid::Error> {
        self.sub.parse()
    }
}

/// Server-side record of an opaque refresh token. The raw value is handed to
/// the client once; only its SHA-256 digest is kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshToken {
    pub id: Uuid,
    pub user_id: Uuid,
    pub token_hash: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    /// Set once the token has been rotated or the user signed out everywhere
    pub is_revoked: bool,
}

impl RefreshToken {
    pub fn new(user_id: Uuid, token_hash: String, lifetime: Duration) -> Self {
        let created_at = Utc::now();

        Self {
            id: Uuid::new_v4(),
            user_id,
            token_hash,
            created_at,
            expires_at: created_at + lifetime,
            is_revoked: false,
        }
    }

    pub fn is_expired(&self) -> bool {
        self.expires_at < Utc::now()
    }

    /// Usable for exactly one refresh
    pub fn is_valid(&self) -> bool {
        !self.is_revoked && !self.is_expired()
    }

    pub fn revoke(&mut self) {
        self.is_revoked = true;
    }
}

/// `{"access", "refresh"}` as returned by login, refresh and demo login
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    pub access: String,
    pub refresh: String,
}

impl TokenPair {
    pub fn new(access: String, refresh: String) -> Self {
        Self { access, refresh }
    }
}
