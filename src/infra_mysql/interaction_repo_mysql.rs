use super::util::{decode_adventure, is_dup_key};
use crate::application_port::InteractionError;
use crate::domain_model::{Adventure, AdventureId, InteractionKind, UserId};
use crate::domain_port::{InsertOutcome, InteractionRepo};
use chrono::{DateTime, Utc};
use sqlx::MySqlPool;

pub struct MySqlInteractionRepo {
    pool: MySqlPool,
}

impl MySqlInteractionRepo {
    pub fn new(pool: MySqlPool) -> Self {
        MySqlInteractionRepo { pool }
    }
}

// The table name comes from InteractionKind::table(), a closed enum mapping,
// never from request input.
#[async_trait::async_trait]
impl InteractionRepo for MySqlInteractionRepo {
    async fn insert(
        &self,
        kind: InteractionKind,
        user_id: UserId,
        adventure_id: AdventureId,
        at: DateTime<Utc>,
    ) -> Result<InsertOutcome, InteractionError> {
        let sql = format!(
            "INSERT INTO {} (user_id, adventure_id, created_at) VALUES (?, ?, ?)",
            kind.table()
        );
        let res = sqlx::query(&sql)
            .bind(user_id)
            .bind(adventure_id)
            .bind(at)
            .execute(&self.pool)
            .await;

        match res {
            Ok(_) => Ok(InsertOutcome::Created),
            Err(e) if is_dup_key(&e) => Ok(InsertOutcome::Duplicate),
            Err(e) => Err(InteractionError::Store(format!(
                "insert {kind} interaction: {e}"
            ))),
        }
    }

    async fn delete(
        &self,
        kind: InteractionKind,
        user_id: UserId,
        adventure_id: AdventureId,
    ) -> Result<bool, InteractionError> {
        let sql = format!(
            "DELETE FROM {} WHERE user_id = ? AND adventure_id = ?",
            kind.table()
        );
        let res = sqlx::query(&sql)
            .bind(user_id)
            .bind(adventure_id)
            .execute(&self.pool)
            .await
            .map_err(|e| InteractionError::Store(format!("delete {kind} interaction: {e}")))?;

        Ok(res.rows_affected() > 0)
    }

    async fn list_adventures(
        &self,
        kind: InteractionKind,
        user_id: UserId,
    ) -> Result<Vec<Adventure>, InteractionError> {
        let sql = format!(
            r#"
SELECT a.adventure_id, a.title, a.description, a.is_published, a.author_id, a.created_at, a.updated_at
FROM {} i
JOIN adventure a ON a.adventure_id = i.adventure_id
WHERE i.user_id = ?
ORDER BY i.created_at ASC
"#,
            kind.table()
        );
        let rows = sqlx::query(&sql)
            .bind(user_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| InteractionError::Store(format!("list {kind} interactions: {e}")))?;

        rows.iter()
            .map(decode_adventure)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| InteractionError::Store(format!("decode adventure: {e}")))
    }
}
