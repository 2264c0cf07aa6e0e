use crate::application_port::{AdventureError, AdventurePatch, AdventureService, NewAdventure};
use crate::domain_model::{Adventure, AdventureId, UserId};
use crate::domain_port::AdventureRepo;
use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

pub struct RealAdventureService {
    adventure_repo: Arc<dyn AdventureRepo>,
}

impl RealAdventureService {
    pub fn new(adventure_repo: Arc<dyn AdventureRepo>) -> Self {
        Self { adventure_repo }
    }

    async fn fetch_owned(
        &self,
        author: UserId,
        id: AdventureId,
    ) -> Result<Adventure, AdventureError> {
        let adventure = self
            .adventure_repo
            .fetch(id)
            .await?
            .ok_or(AdventureError::NotFound)?;
        if adventure.author_id != author {
            return Err(AdventureError::Forbidden);
        }
        Ok(adventure)
    }
}

#[async_trait::async_trait]
impl AdventureService for RealAdventureService {
    async fn create(&self, author: UserId, new: NewAdventure) -> Result<Adventure, AdventureError> {
        let now = Utc::now();
        let adventure = Adventure {
            id: AdventureId(Uuid::new_v4()),
            title: new.title,
            description: new.description,
            is_published: new.is_published,
            author_id: author,
            created_at: Some(now),
            updated_at: Some(now),
        };
        self.adventure_repo.insert(&adventure).await?;
        Ok(adventure)
    }

    async fn fetch(&self, author: UserId, id: AdventureId) -> Result<Adventure, AdventureError> {
        self.fetch_owned(author, id).await
    }

    async fn list_by_author(&self, author: UserId) -> Result<Vec<Adventure>, AdventureError> {
        self.adventure_repo.list_by_author(author).await
    }

    async fn update(
        &self,
        author: UserId,
        id: AdventureId,
        patch: AdventurePatch,
    ) -> Result<Adventure, AdventureError> {
        let mut adventure = self.fetch_owned(author, id).await?;

        if let Some(title) = patch.title {
            adventure.title = title;
        }
        if let Some(description) = patch.description {
            adventure.description = description;
        }
        if let Some(is_published) = patch.is_published {
            adventure.is_published = is_published;
        }
        adventure.updated_at = Some(Utc::now());

        self.adventure_repo.update(&adventure).await?;
        Ok(adventure)
    }

    async fn delete(&self, author: UserId, id: AdventureId) -> Result<(), AdventureError> {
        self.fetch_owned(author, id).await?;
        self.adventure_repo.delete(id).await?;
        Ok(())
    }
}
