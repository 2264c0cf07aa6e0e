use crate::application_port::AdventureError;
use crate::domain_model::{Adventure, AdventureId, UserId};

#[async_trait::async_trait]
pub trait AdventureRepo: Send + Sync {
    async fn insert(&self, adventure: &Adventure) -> Result<(), AdventureError>;

    async fn fetch(&self, id: AdventureId) -> Result<Option<Adventure>, AdventureError>;

    /// The author's adventures, newest first.
    async fn list_by_author(&self, author: UserId) -> Result<Vec<Adventure>, AdventureError>;

    /// Full-row update keyed by id.
    async fn update(&self, adventure: &Adventure) -> Result<(), AdventureError>;

    /// Returns whether a row was deleted.
    async fn delete(&self, id: AdventureId) -> Result<bool, AdventureError>;

    async fn exists(&self, id: AdventureId) -> Result<bool, AdventureError>;
}
