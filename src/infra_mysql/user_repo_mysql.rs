use super::util::is_dup_key;
use crate::application_port::AuthError;
use crate::domain_model::{ExternalUserId, User};
use crate::domain_port::{InsertOutcome, UserRepo};
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};

pub struct MySqlUserRepo {
    pool: MySqlPool,
}

impl MySqlUserRepo {
    pub fn new(pool: MySqlPool) -> Self {
        MySqlUserRepo { pool }
    }
}

#[async_trait::async_trait]
impl UserRepo for MySqlUserRepo {
    async fn find_by_external_id(
        &self,
        external_id: &ExternalUserId,
    ) -> Result<Option<User>, AuthError> {
        let row = sqlx::query(
            r#"
SELECT user_id, external_id, email, username, created_at, last_login
FROM user
WHERE external_id = ?
"#,
        )
        .bind(external_id.0.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AuthError::Store(format!("query user by external id: {e}")))?;

        let Some(row) = row else {
            return Ok(None);
        };

        let user = User {
            id: row
                .try_get("user_id")
                .map_err(|e| AuthError::Store(format!("decode user_id: {e}")))?,
            external_id: row
                .try_get("external_id")
                .map_err(|e| AuthError::Store(format!("decode external_id: {e}")))?,
            email: row
                .try_get("email")
                .map_err(|e| AuthError::Store(format!("decode email: {e}")))?,
            username: row
                .try_get("username")
                .map_err(|e| AuthError::Store(format!("decode username: {e}")))?,
            created_at: row
                .try_get("created_at")
                .map_err(|e| AuthError::Store(format!("decode created_at: {e}")))?,
            last_login: row
                .try_get("last_login")
                .map_err(|e| AuthError::Store(format!("decode last_login: {e}")))?,
        };

        Ok(Some(user))
    }

    async fn create(&self, user: &User) -> Result<InsertOutcome, AuthError> {
        let res = sqlx::query(
            r#"
INSERT INTO user (user_id, external_id, email, username, created_at, last_login)
VALUES (?, ?, ?, ?, ?, ?)
"#,
        )
        .bind(user.id)
        .bind(user.external_id.0.as_str())
        .bind(user.email.as_str())
        .bind(user.username.as_str())
        .bind(user.created_at)
        .bind(user.last_login)
        .execute(&self.pool)
        .await;

        match res {
            Ok(_) => Ok(InsertOutcome::Created),
            Err(e) if is_dup_key(&e) => Ok(InsertOutcome::Duplicate),
            Err(e) => Err(AuthError::Store(format!("insert user: {e}"))),
        }
    }

    async fn record_login(
        &self,
        external_id: &ExternalUserId,
        email: &str,
        username: &str,
        at: DateTime<Utc>,
    ) -> Result<(), AuthError> {
        sqlx::query(
            r#"
UPDATE user
SET last_login = ?, email = ?, username = ?
WHERE external_id = ?
"#,
        )
        .bind(at)
        .bind(email)
        .bind(username)
        .bind(external_id.0.as_str())
        .execute(&self.pool)
        .await
        .map_err(|e| AuthError::Store(format!("record login: {e}")))?;

        Ok(())
    }
}
