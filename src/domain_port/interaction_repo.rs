use super::InsertOutcome;
use crate::application_port::InteractionError;
use crate::domain_model::{Adventure, AdventureId, InteractionKind, UserId};
use chrono::{DateTime, Utc};

#[async_trait::async_trait]
pub trait InteractionRepo: Send + Sync {
    async fn insert(
        &self,
        kind: InteractionKind,
        user_id: UserId,
        adventure_id: AdventureId,
        at: DateTime<Utc>,
    ) -> Result<InsertOutcome, InteractionError>;

    /// Returns whether a row was deleted.
    async fn delete(
        &self,
        kind: InteractionKind,
        user_id: UserId,
        adventure_id: AdventureId,
    ) -> Result<bool, InteractionError>;

    /// Adventures the user holds this kind of interaction with, in
    /// interaction insertion order.
    async fn list_adventures(
        &self,
        kind: InteractionKind,
        user_id: UserId,
    ) -> Result<Vec<Adventure>, InteractionError>;
}
