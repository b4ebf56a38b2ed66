use std::time::Duration;

use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::Row;
use tokio::time::timeout;

use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::UserRecord;
use crate::domain::user::ports::UserDirectory;
use crate::user::errors::DirectoryError;

/// Postgres-backed user directory.
///
/// Uniqueness is enforced by the primary key on `users.email`; the insert is
/// atomic under concurrent registration across service instances. Every
/// query carries a timeout and reports expiry as `Unavailable`.
pub struct PostgresUserDirectory {
    pool: PgPool,
    query_timeout: Duration,
}

impl PostgresUserDirectory {
    pub fn new(pool: PgPool, query_timeout: Duration) -> Self {
        Self {
            pool,
            query_timeout,
        }
    }
}

fn map_sqlx_error(err: sqlx::Error) -> DirectoryError {
    if matches!(err, sqlx::Error::PoolTimedOut | sqlx::Error::Io(_)) {
        DirectoryError::Unavailable(err.to_string())
    } else {
        DirectoryError::Internal(err.to_string())
    }
}

fn record_from_row(row: &sqlx::postgres::PgRow) -> Result<UserRecord, DirectoryError> {
    let email: String = row
        .try_get("email")
        .map_err(|e| DirectoryError::Internal(e.to_string()))?;
    let email = EmailAddress::new(email)
        .map_err(|e| DirectoryError::Internal(format!("corrupt email in storage: {}", e)))?;

    Ok(UserRecord {
        email,
        password_hash: row
            .try_get("password_hash")
            .map_err(|e| DirectoryError::Internal(e.to_string()))?,
        created_at: row
            .try_get("created_at")
            .map_err(|e| DirectoryError::Internal(e.to_string()))?,
    })
}

#[async_trait]
impl UserDirectory for PostgresUserDirectory {
    async fn find_by_email(
        &self,
        email: &EmailAddress,
    ) -> Result<Option<UserRecord>, DirectoryError> {
        let query = sqlx::query(
            r#"
            SELECT email, password_hash, created_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email.as_str());

        let row = timeout(self.query_timeout, query.fetch_optional(&self.pool))
            .await
            .map_err(|_| DirectoryError::Unavailable("storage call timed out".to_string()))?
            .map_err(map_sqlx_error)?;

        match row {
            Some(row) => Ok(Some(record_from_row(&row)?)),
            None => Ok(None),
        }
    }

    async fn create(&self, record: UserRecord) -> Result<UserRecord, DirectoryError> {
        let query = sqlx::query(
            r#"
            INSERT INTO users (email, password_hash, created_at)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(record.email.as_str())
        .bind(&record.password_hash)
        .bind(record.created_at);

        timeout(self.query_timeout, query.execute(&self.pool))
            .await
            .map_err(|_| DirectoryError::Unavailable("storage call timed out".to_string()))?
            .map_err(|e| {
                if let Some(db_err) = e.as_database_error() {
                    if db_err.is_unique_violation() {
                        return DirectoryError::DuplicateUser(
                            record.email.as_str().to_string(),
                        );
                    }
                }
                map_sqlx_error(e)
            })?;

        Ok(record)
    }
}
