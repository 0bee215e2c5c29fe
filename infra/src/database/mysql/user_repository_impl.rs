//! MySQL implementation of UserRepository

use async_trait::async_trait;
use sqlx::mysql::MySqlRow;
use sqlx::MySqlPool;
use uuid::Uuid;

use budgetory_core::domain::entities::user::User;
use budgetory_core::errors::DomainError;
use budgetory_core::repositories::user::DUPLICATE_EMAIL_MESSAGE;
use budgetory_core::repositories::UserRepository;

use super::{column, uuid_column};
use crate::database::{db_error, is_unique_violation};

const SELECT_USER: &str = r#"
    SELECT id, email, username, password_hash, is_active, is_staff,
           is_superuser, is_demo, date_joined, last_login
    FROM users
"#;

/// MySQL implementation of UserRepository
pub struct MySqlUserRepository {
    pool: MySqlPool,
}

impl MySqlUserRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_user(row: &MySqlRow) -> Result<User, DomainError> {
        Ok(User {
            id: uuid_column(row, "id")?,
            email: column(row, "email")?,
            username: column(row, "username")?,
            password_hash: column(row, "password_hash")?,
            is_active: column(row, "is_active")?,
            is_staff: column(row, "is_staff")?,
            is_superuser: column(row, "is_superuser")?,
            is_demo: column(row, "is_demo")?,
            date_joined: column(row, "date_joined")?,
            last_login: column(row, "last_login")?,
        })
    }
}

#[async_trait]
impl UserRepository for MySqlUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let row = sqlx::query(&format!("{} WHERE email = ?", SELECT_USER))
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("Failed to find user by email"))?;

        row.as_ref().map(Self::row_to_user).transpose()
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError> {
        let row = sqlx::query(&format!("{} WHERE id = ?", SELECT_USER))
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("Failed to find user by id"))?;

        row.as_ref().map(Self::row_to_user).transpose()
    }

    async fn create(&self, user: User) -> Result<User, DomainError> {
        let result = sqlx::query(
            r#"
            INSERT INTO users (id, email, username, password_hash, is_active, is_staff,
                               is_superuser, is_demo, date_joined, last_login)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(user.id.to_string())
        .bind(&user.email)
        .bind(&user.username)
        .bind(&user.password_hash)
        .bind(user.is_active)
        .bind(user.is_staff)
        .bind(user.is_superuser)
        .bind(user.is_demo)
        .bind(user.date_joined)
        .bind(user.last_login)
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => {
                tracing::debug!(user_id = %user.id, "User created");
                Ok(user)
            }
            Err(e) if is_unique_violation(&e) => {
                Err(DomainError::field("email", DUPLICATE_EMAIL_MESSAGE))
            }
            Err(e) => Err(db_error("Failed to create user")(e)),
        }
    }

    async fn update(&self, user: User) -> Result<User, DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE users
            SET email = ?, username = ?, password_hash = ?, is_active = ?, is_staff = ?,
                is_superuser = ?, is_demo = ?, last_login = ?
            WHERE id = ?
            "#,
        )
        .bind(&user.email)
        .bind(&user.username)
        .bind(&user.password_hash)
        .bind(user.is_active)
        .bind(user.is_staff)
        .bind(user.is_superuser)
        .bind(user.is_demo)
        .bind(user.last_login)
        .bind(user.id.to_string())
        .execute(&self.pool)
        .await
        .map_err(db_error("Failed to update user"))?;

        // An update that changes nothing may report zero rows
        if result.rows_affected() == 0 && self.find_by_id(user.id).await?.is_none() {
            return Err(DomainError::not_found("User"));
        }

        Ok(user)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(db_error("Failed to delete user"))?;

        Ok(result.rows_affected() > 0)
    }

    async fn count(&self) -> Result<u64, DomainError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await
            .map_err(db_error("Failed to count users"))?;

        Ok(count as u64)
    }
}
