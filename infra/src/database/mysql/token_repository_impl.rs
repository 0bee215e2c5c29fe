//! `refresh_tokens` table. Rows are looked up by the SHA-256 digest; the raw
//! token never reaches the database.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::mysql::MySqlRow;
use sqlx::MySqlPool;

use budgetory_core::domain::entities::token::RefreshToken;
use budgetory_core::errors::DomainError;
use budgetory_core::repositories::TokenRepository;

use super::{column, uuid_column};
use crate::database::{db_error, is_unique_violation};

const SELECT_TOKEN: &str =
    "SELECT id, user_id, token_hash, created_at, expires_at, is_revoked FROM refresh_tokens";

pub struct MySqlTokenRepository {
    pool: MySqlPool,
}

impl MySqlTokenRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_token(row: &MySqlRow) -> Result<RefreshToken, DomainError> {
        Ok(RefreshToken {
            id: uuid_column(row, "id")?,
            user_id: uuid_column(row, "user_id")?,
            token_hash: column(row, "token_hash")?,
            created_at: column(row, "created_at")?,
            expires_at: column(row, "expires_at")?,
            is_revoked: column(row, "is_revoked")?,
        })
    }
}

#[async_trait]
impl TokenRepository for MySqlTokenRepository {
    async fn save(&self, token: RefreshToken) -> Result<RefreshToken, DomainError> {
        let result = sqlx::query(
            r#"
            INSERT INTO refresh_tokens (id, user_id, token_hash, created_at, expires_at, is_revoked)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(token.id.to_string())
        .bind(token.user_id.to_string())
        .bind(&token.token_hash)
        .bind(token.created_at)
        .bind(token.expires_at)
        .bind(token.is_revoked)
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => Ok(token),
            Err(e) if is_unique_violation(&e) => {
                Err(DomainError::internal("Refresh token hash collision"))
            }
            Err(e) => Err(db_error("Failed to save refresh token")(e)),
        }
    }

    async fn find_by_hash(&self, token_hash: &str) -> Result<Option<RefreshToken>, DomainError> {
        let row = sqlx::query(&format!("{} WHERE token_hash = ?", SELECT_TOKEN))
            .bind(token_hash)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("Failed to find refresh token"))?;

        row.as_ref().map(Self::row_to_token).transpose()
    }

    async fn revoke(&self, token_hash: &str) -> Result<bool, DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE refresh_tokens SET is_revoked = TRUE
            WHERE token_hash = ? AND is_revoked = FALSE AND expires_at > ?
            "#,
        )
        .bind(token_hash)
        .bind(Utc::now())
        .execute(&self.pool)
        .await
        .map_err(db_error("Failed to revoke refresh token"))?;

        Ok(result.rows_affected() == 1)
    }

    async fn delete_expired(&self) -> Result<usize, DomainError> {
        let result = sqlx::query("DELETE FROM refresh_tokens WHERE expires_at < ?")
            .bind(Utc::now())
            .execute(&self.pool)
            .await
            .map_err(db_error("Failed to delete expired tokens"))?;

        Ok(result.rows_affected() as usize)
    }
}
