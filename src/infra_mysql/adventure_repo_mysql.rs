use super::util::decode_adventure;
use crate::application_port::AdventureError;
use crate::domain_model::{Adventure, AdventureId, UserId};
use crate::domain_port::AdventureRepo;
use sqlx::MySqlPool;

pub struct MySqlAdventureRepo {
    pool: MySqlPool,
}

impl MySqlAdventureRepo {
    pub fn new(pool: MySqlPool) -> Self {
        MySqlAdventureRepo { pool }
    }
}

#[async_trait::async_trait]
impl AdventureRepo for MySqlAdventureRepo {
    async fn insert(&self, adventure: &Adventure) -> Result<(), AdventureError> {
        sqlx::query(
            r#"
INSERT INTO adventure (adventure_id, title, description, is_published, author_id, created_at, updated_at)
VALUES (?, ?, ?, ?, ?, ?, ?)
"#,
        )
        .bind(adventure.id)
        .bind(adventure.title.as_str())
        .bind(adventure.description.as_str())
        .bind(adventure.is_published)
        .bind(adventure.author_id)
        .bind(adventure.created_at)
        .bind(adventure.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| AdventureError::Store(format!("insert adventure: {e}")))?;

        Ok(())
    }

    async fn fetch(&self, id: AdventureId) -> Result<Option<Adventure>, AdventureError> {
        let row = sqlx::query(
            r#"
SELECT adventure_id, title, description, is_published, author_id, created_at, updated_at
FROM adventure
WHERE adventure_id = ?
"#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AdventureError::Store(format!("query adventure: {e}")))?;

        row.map(|row| decode_adventure(&row))
            .transpose()
            .map_err(|e| AdventureError::Store(format!("decode adventure: {e}")))
    }

    async fn list_by_author(&self, author: UserId) -> Result<Vec<Adventure>, AdventureError> {
        let rows = sqlx::query(
            r#"
SELECT adventure_id, title, description, is_published, author_id, created_at, updated_at
FROM adventure
WHERE author_id = ?
ORDER BY created_at DESC
"#,
        )
        .bind(author)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AdventureError::Store(format!("list adventures: {e}")))?;

        rows.iter()
            .map(decode_adventure)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| AdventureError::Store(format!("decode adventure: {e}")))
    }

    async fn update(&self, adventure: &Adventure) -> Result<(), AdventureError> {
        sqlx::query(
            r#"
UPDATE adventure
SET title = ?, description = ?, is_published = ?, updated_at = ?
WHERE adventure_id = ?
"#,
        )
        .bind(adventure.title.as_str())
        .bind(adventure.description.as_str())
        .bind(adventure.is_published)
        .bind(adventure.updated_at)
        .bind(adventure.id)
        .execute(&self.pool)
        .await
        .map_err(|e| AdventureError::Store(format!("update adventure: {e}")))?;

        Ok(())
    }

    async fn delete(&self, id: AdventureId) -> Result<bool, AdventureError> {
        let res = sqlx::query("DELETE FROM adventure WHERE adventure_id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AdventureError::Store(format!("delete adventure: {e}")))?;

        Ok(res.rows_affected() > 0)
    }

    async fn exists(&self, id: AdventureId) -> Result<bool, AdventureError> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(1) FROM adventure WHERE adventure_id = ?")
                .bind(id)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| AdventureError::Store(format!("adventure exists: {e}")))?;

        Ok(count > 0)
    }
}
