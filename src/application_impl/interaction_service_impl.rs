use crate::application_port::{InteractionError, InteractionService};
use crate::domain_model::{AdventureId, InteractionKind, UserId, UserInteractions};
use crate::domain_port::{AdventureRepo, InsertOutcome, InteractionRepo};
use chrono::Utc;
use std::sync::Arc;

pub struct RealInteractionService {
    interaction_repo: Arc<dyn InteractionRepo>,
    adventure_repo: Arc<dyn AdventureRepo>,
}

impl RealInteractionService {
    pub fn new(
        interaction_repo: Arc<dyn InteractionRepo>,
        adventure_repo: Arc<dyn AdventureRepo>,
    ) -> Self {
        Self {
            interaction_repo,
            adventure_repo,
        }
    }
}

#[async_trait::async_trait]
impl InteractionService for RealInteractionService {
    async fn add(
        &self,
        kind: InteractionKind,
        user_id: UserId,
        adventure_id: AdventureId,
    ) -> Result<(), InteractionError> {
        let known = self
            .adventure_repo
            .exists(adventure_id)
            .await
            .map_err(|e| InteractionError::Store(e.to_string()))?;
        if !known {
            return Err(InteractionError::AdventureNotFound);
        }

        // Two concurrent adds race at the unique key, not here; the loser
        // reports Duplicate like any other repeat.
        match self
            .interaction_repo
            .insert(kind, user_id, adventure_id, Utc::now())
            .await?
        {
            InsertOutcome::Created => Ok(()),
            InsertOutcome::Duplicate => Err(InteractionError::Duplicate(kind)),
        }
    }

    async fn remove(
        &self,
        kind: InteractionKind,
        user_id: UserId,
        adventure_id: AdventureId,
    ) -> Result<(), InteractionError> {
        // Removing an absent row is idempotent success.
        self.interaction_repo
            .delete(kind, user_id, adventure_id)
            .await?;
        Ok(())
    }

    async fn list(&self, user_id: UserId) -> Result<UserInteractions, InteractionError> {
        let favorites = self
            .interaction_repo
            .list_adventures(InteractionKind::Favorite, user_id)
            .await?;
        let likes = self
            .interaction_repo
            .list_adventures(InteractionKind::Like, user_id)
            .await?;
        let saves = self
            .interaction_repo
            .list_adventures(InteractionKind::Save, user_id)
            .await?;

        Ok(UserInteractions {
            favorites,
            likes,
            saves,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{InMemoryAdventureRepo, InMemoryInteractionRepo, test_adventure};
    use uuid::Uuid;

    fn setup() -> (
        RealInteractionService,
        Arc<InMemoryAdventureRepo>,
        Arc<InMemoryInteractionRepo>,
    ) {
        let adventures = Arc::new(InMemoryAdventureRepo::default());
        let interactions = Arc::new(InMemoryInteractionRepo::new(adventures.clone()));
        let service = RealInteractionService::new(interactions.clone(), adventures.clone());
        (service, adventures, interactions)
    }

    #[tokio::test]
    async fn second_add_of_the_same_kind_is_a_duplicate() {
        let (service, adventures, _) = setup();
        let user = UserId(Uuid::new_v4());
        let adventure = test_adventure(UserId(Uuid::new_v4()));
        adventures.put(adventure.clone());

        for kind in InteractionKind::ALL {
            service.add(kind, user, adventure.id).await.unwrap();
            let err = service.add(kind, user, adventure.id).await.unwrap_err();
            assert!(matches!(err, InteractionError::Duplicate(k) if k == kind));
        }
    }

    #[tokio::test]
    async fn removed_adventure_disappears_from_the_aggregate() {
        let (service, adventures, _) = setup();
        let user = UserId(Uuid::new_v4());
        let adventure = test_adventure(UserId(Uuid::new_v4()));
        adventures.put(adventure.clone());

        service
            .add(InteractionKind::Favorite, user, adventure.id)
            .await
            .unwrap();
        service
            .remove(InteractionKind::Favorite, user, adventure.id)
            .await
            .unwrap();

        let interactions = service.list(user).await.unwrap();
        assert!(interactions.favorites.is_empty());
    }

    #[tokio::test]
    async fn remove_is_idempotent_when_absent() {
        let (service, adventures, _) = setup();
        let user = UserId(Uuid::new_v4());
        let adventure = test_adventure(UserId(Uuid::new_v4()));
        adventures.put(adventure.clone());

        service
            .remove(InteractionKind::Save, user, adventure.id)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn add_against_an_unknown_adventure_is_rejected() {
        let (service, _, interactions) = setup();
        let user = UserId(Uuid::new_v4());

        let err = service
            .add(InteractionKind::Like, user, AdventureId(Uuid::new_v4()))
            .await
            .unwrap_err();
        assert!(matches!(err, InteractionError::AdventureNotFound));
        assert_eq!(interactions.len(), 0);
    }

    #[tokio::test]
    async fn list_without_interactions_returns_three_empty_sequences() {
        let (service, _, _) = setup();

        let interactions = service.list(UserId(Uuid::new_v4())).await.unwrap();
        assert_eq!(interactions, UserInteractions::default());
    }

    #[tokio::test]
    async fn list_preserves_interaction_insertion_order() {
        let (service, adventures, _) = setup();
        let user = UserId(Uuid::new_v4());
        let author = UserId(Uuid::new_v4());
        let first = test_adventure(author);
        let second = test_adventure(author);
        adventures.put(first.clone());
        adventures.put(second.clone());

        service
            .add(InteractionKind::Like, user, first.id)
            .await
            .unwrap();
        service
            .add(InteractionKind::Like, user, second.id)
            .await
            .unwrap();

        let interactions = service.list(user).await.unwrap();
        let ids: Vec<_> = interactions.likes.iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![first.id, second.id]);
    }
}
