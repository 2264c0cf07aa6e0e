use crate::domain_model::{Adventure, AdventureId, UserId};

#[derive(Debug, thiserror::Error)]
pub enum AdventureError {
    #[error("Adventure not found")]
    NotFound,
    #[error("Forbidden")]
    Forbidden,
    #[error("store error: {0}")]
    Store(String),
}

#[derive(Debug, Clone)]
pub struct NewAdventure {
    pub title: String,
    pub description: String,
    pub is_published: bool,
}

#[derive(Debug, Clone, Default)]
pub struct AdventurePatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub is_published: Option<bool>,
}

/// Creator-facing CRUD, always scoped to the authenticated author.
#[async_trait::async_trait]
pub trait AdventureService: Send + Sync {
    async fn create(&self, author: UserId, new: NewAdventure) -> Result<Adventure, AdventureError>;

    async fn fetch(&self, author: UserId, id: AdventureId) -> Result<Adventure, AdventureError>;

    async fn list_by_author(&self, author: UserId) -> Result<Vec<Adventure>, AdventureError>;

    async fn update(
        &self,
        author: UserId,
        id: AdventureId,
        patch: AdventurePatch,
    ) -> Result<Adventure, AdventureError>;

    async fn delete(&self, author: UserId, id: AdventureId) -> Result<(), AdventureError>;
}
