use crate::domain_model::{AdventureId, InteractionKind, UserId, UserInteractions};

#[derive(Debug, thiserror::Error)]
pub enum InteractionError {
    #[error("Already {}", .0.past_tense())]
    Duplicate(InteractionKind),
    #[error("Adventure not found")]
    AdventureNotFound,
    #[error("store error: {0}")]
    Store(String),
}

/// Toggle-on / toggle-off per interaction kind plus the aggregate read.
///
/// `add` on an existing row is `Duplicate`; a concurrent duplicate insert is
/// resolved by the store's unique key and surfaces the same way. `remove` of
/// an absent row is a success: the caller asked for "not present" and that is
/// the state.
#[async_trait::async_trait]
pub trait InteractionService: Send + Sync {
    async fn add(
        &self,
        kind: InteractionKind,
        user_id: UserId,
        adventure_id: AdventureId,
    ) -> Result<(), InteractionError>;

    async fn remove(
        &self,
        kind: InteractionKind,
        user_id: UserId,
        adventure_id: AdventureId,
    ) -> Result<(), InteractionError>;

    async fn list(&self, user_id: UserId) -> Result<UserInteractions, InteractionError>;
}
