use crate::domain_model::Adventure;
use sqlx::Row;
use sqlx::mysql::{MySqlDatabaseError, MySqlRow};

pub fn is_dup_key(err: &sqlx::Error) -> bool {
    if let sqlx::Error::Database(db) = err {
        if let Some(mysql_err) = db.try_downcast_ref::<MySqlDatabaseError>() {
            return mysql_err.number() == 1062; // ER_DUP_ENTRY
        }
    }

    false
}

pub(crate) fn decode_adventure(row: &MySqlRow) -> Result<Adventure, sqlx::Error> {
    Ok(Adventure {
        id: row.try_get("adventure_id")?,
        title: row.try_get("title")?,
        description: row.try_get("description")?,
        is_published: row.try_get("is_published")?,
        author_id: row.try_get("author_id")?,
        created_at: row.try_get("created_at")?,
        updated_at: row.try_get("updated_at")?,
    })
}
