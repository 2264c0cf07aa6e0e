//! In-memory repository fakes shared by the service and HTTP tests. They
//! mirror the store contracts exactly: unique-key semantics on insert,
//! insertion-order listing, idempotent delete.

use crate::application_port::{AdventureError, AuthError, InteractionError};
use crate::domain_model::{
    Adventure, AdventureId, ExternalUserId, InteractionKind, User, UserId,
};
use crate::domain_port::{AdventureRepo, InsertOutcome, InteractionRepo, UserRepo};
use chrono::{DateTime, Utc};
use std::sync::{Arc, Mutex};
use uuid::Uuid;

pub fn test_adventure(author: UserId) -> Adventure {
    Adventure {
        id: AdventureId(Uuid::new_v4()),
        title: "Test Adventure".to_string(),
        description: "A test adventure".to_string(),
        is_published: true,
        author_id: author,
        created_at: None,
        updated_at: None,
    }
}

#[derive(Default)]
pub struct InMemoryUserRepo {
    users: Mutex<Vec<User>>,
}

impl InMemoryUserRepo {
    pub fn snapshot(&self) -> Vec<User> {
        self.users.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl UserRepo for InMemoryUserRepo {
    async fn find_by_external_id(
        &self,
        external_id: &ExternalUserId,
    ) -> Result<Option<User>, AuthError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| &u.external_id == external_id)
            .cloned())
    }

    async fn create(&self, user: &User) -> Result<InsertOutcome, AuthError> {
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.external_id == user.external_id) {
            return Ok(InsertOutcome::Duplicate);
        }
        users.push(user.clone());
        Ok(InsertOutcome::Created)
    }

    async fn record_login(
        &self,
        external_id: &ExternalUserId,
        email: &str,
        username: &str,
        at: DateTime<Utc>,
    ) -> Result<(), AuthError> {
        let mut users = self.users.lock().unwrap();
        if let Some(user) = users.iter_mut().find(|u| &u.external_id == external_id) {
            user.last_login = at;
            user.email = email.to_string();
            user.username = username.to_string();
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemoryAdventureRepo {
    adventures: Mutex<Vec<Adventure>>,
}

impl InMemoryAdventureRepo {
    pub fn put(&self, adventure: Adventure) {
        self.adventures.lock().unwrap().push(adventure);
    }

    pub fn get(&self, id: AdventureId) -> Option<Adventure> {
        self.adventures
            .lock()
            .unwrap()
            .iter()
            .find(|a| a.id == id)
            .cloned()
    }
}

#[async_trait::async_trait]
impl AdventureRepo for InMemoryAdventureRepo {
    async fn insert(&self, adventure: &Adventure) -> Result<(), AdventureError> {
        self.put(adventure.clone());
        Ok(())
    }

    async fn fetch(&self, id: AdventureId) -> Result<Option<Adventure>, AdventureError> {
        Ok(self.get(id))
    }

    async fn list_by_author(&self, author: UserId) -> Result<Vec<Adventure>, AdventureError> {
        let mut adventures: Vec<_> = self
            .adventures
            .lock()
            .unwrap()
            .iter()
            .filter(|a| a.author_id == author)
            .cloned()
            .collect();
        adventures.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(adventures)
    }

    async fn update(&self, adventure: &Adventure) -> Result<(), AdventureError> {
        let mut adventures = self.adventures.lock().unwrap();
        if let Some(slot) = adventures.iter_mut().find(|a| a.id == adventure.id) {
            *slot = adventure.clone();
        }
        Ok(())
    }

    async fn delete(&self, id: AdventureId) -> Result<bool, AdventureError> {
        let mut adventures = self.adventures.lock().unwrap();
        let before = adventures.len();
        adventures.retain(|a| a.id != id);
        Ok(adventures.len() < before)
    }

    async fn exists(&self, id: AdventureId) -> Result<bool, AdventureError> {
        Ok(self.get(id).is_some())
    }
}

struct InteractionRow {
    kind: InteractionKind,
    user_id: UserId,
    adventure_id: AdventureId,
}

pub struct InMemoryInteractionRepo {
    adventures: Arc<InMemoryAdventureRepo>,
    rows: Mutex<Vec<InteractionRow>>,
}

impl InMemoryInteractionRepo {
    pub fn new(adventures: Arc<InMemoryAdventureRepo>) -> Self {
        Self {
            adventures,
            rows: Mutex::new(Vec::new()),
        }
    }

    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait::async_trait]
impl InteractionRepo for InMemoryInteractionRepo {
    async fn insert(
        &self,
        kind: InteractionKind,
        user_id: UserId,
        adventure_id: AdventureId,
        _at: DateTime<Utc>,
    ) -> Result<InsertOutcome, InteractionError> {
        let mut rows = self.rows.lock().unwrap();
        if rows
            .iter()
            .any(|r| r.kind == kind && r.user_id == user_id && r.adventure_id == adventure_id)
        {
            return Ok(InsertOutcome::Duplicate);
        }
        rows.push(InteractionRow {
            kind,
            user_id,
            adventure_id,
        });
        Ok(InsertOutcome::Created)
    }

    async fn delete(
        &self,
        kind: InteractionKind,
        user_id: UserId,
        adventure_id: AdventureId,
    ) -> Result<bool, InteractionError> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|r| {
            !(r.kind == kind && r.user_id == user_id && r.adventure_id == adventure_id)
        });
        Ok(rows.len() < before)
    }

    async fn list_adventures(
        &self,
        kind: InteractionKind,
        user_id: UserId,
    ) -> Result<Vec<Adventure>, InteractionError> {
        // Vec order is insertion order, matching the store's created_at sort.
        let rows = self.rows.lock().unwrap();
        Ok(rows
            .iter()
            .filter(|r| r.kind == kind && r.user_id == user_id)
            .filter_map(|r| self.adventures.get(r.adventure_id))
            .collect())
    }
}
