use crate::application_port::{AuthError, AuthService, IdentityProvider, RemoteProfile};
use crate::domain_model::{User, UserId};
use crate::domain_port::{InsertOutcome, UserRepo};
use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

pub struct RealAuthService {
    identity_provider: Arc<dyn IdentityProvider>,
    user_repo: Arc<dyn UserRepo>,
}

impl RealAuthService {
    pub fn new(identity_provider: Arc<dyn IdentityProvider>, user_repo: Arc<dyn UserRepo>) -> Self {
        Self {
            identity_provider,
            user_repo,
        }
    }

    /// Lazily mirrors the provider's user record: first sight of an external
    /// id creates the local user, every later sight refreshes last_login and
    /// the profile fields. Deliberately one read and at most one write per
    /// request; request volume is low enough that a cache would be noise.
    pub async fn sync_remote_user(&self, profile: &RemoteProfile) -> Result<UserId, AuthError> {
        let now = Utc::now();
        let email = profile.email.clone().unwrap_or_default();
        let username = profile.display_name().to_string();

        if let Some(user) = self
            .user_repo
            .find_by_external_id(&profile.external_id)
            .await?
        {
            self.user_repo
                .record_login(&profile.external_id, &email, &username, now)
                .await?;
            return Ok(user.id);
        }

        let user = User {
            id: UserId(Uuid::new_v4()),
            external_id: profile.external_id.clone(),
            email,
            username,
            created_at: now,
            last_login: now,
        };

        match self.user_repo.create(&user).await? {
            InsertOutcome::Created => Ok(user.id),
            InsertOutcome::Duplicate => {
                // Lost a first-login race; the winner's row is authoritative.
                self.user_repo
                    .record_login(&profile.external_id, &user.email, &user.username, now)
                    .await?;
                let existing = self
                    .user_repo
                    .find_by_external_id(&profile.external_id)
                    .await?
                    .ok_or_else(|| {
                        AuthError::Store("user row missing after duplicate insert".to_string())
                    })?;
                Ok(existing.id)
            }
        }
    }
}

#[async_trait::async_trait]
impl AuthService for RealAuthService {
    async fn authenticate(&self, session_token: &str) -> Result<UserId, AuthError> {
        let profile = self.identity_provider.verify_session(session_token).await?;
        self.sync_remote_user(&profile).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application_impl::FakeIdentityProvider;
    use crate::test_support::InMemoryUserRepo;

    fn service(user_repo: Arc<InMemoryUserRepo>) -> RealAuthService {
        RealAuthService::new(Arc::new(FakeIdentityProvider::new()), user_repo)
    }

    #[tokio::test]
    async fn first_authentication_creates_the_local_user() {
        let user_repo = Arc::new(InMemoryUserRepo::default());
        let auth = service(user_repo.clone());

        let user_id = auth
            .authenticate(r#"{"id":"ext-1","username":"alex","email":"alex@example.com"}"#)
            .await
            .unwrap();

        let users = user_repo.snapshot();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].id, user_id);
        assert_eq!(users[0].username, "alex");
        assert_eq!(users[0].email, "alex@example.com");
    }

    #[tokio::test]
    async fn repeat_authentication_updates_instead_of_creating() {
        let user_repo = Arc::new(InMemoryUserRepo::default());
        let auth = service(user_repo.clone());

        let first = auth
            .authenticate(r#"{"id":"ext-1","username":"alex","email":"alex@example.com"}"#)
            .await
            .unwrap();
        let second = auth
            .authenticate(r#"{"id":"ext-1","username":"alexandra","email":"a@example.com"}"#)
            .await
            .unwrap();

        assert_eq!(first, second);
        let users = user_repo.snapshot();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].username, "alexandra");
        assert_eq!(users[0].email, "a@example.com");
        assert!(users[0].last_login >= users[0].created_at);
    }

    #[tokio::test]
    async fn username_falls_back_to_first_name_then_literal_user() {
        let user_repo = Arc::new(InMemoryUserRepo::default());
        let auth = service(user_repo.clone());

        auth.authenticate(r#"{"id":"ext-1","first_name":"Sam"}"#)
            .await
            .unwrap();
        auth.authenticate(r#"{"id":"ext-2"}"#).await.unwrap();

        let users = user_repo.snapshot();
        assert_eq!(users[0].username, "Sam");
        assert_eq!(users[1].username, "user");
        assert_eq!(users[1].email, "");
    }

    #[tokio::test]
    async fn malformed_credential_is_unauthorized_and_writes_nothing() {
        let user_repo = Arc::new(InMemoryUserRepo::default());
        let auth = service(user_repo.clone());

        let err = auth.authenticate("garbage").await.unwrap_err();
        assert!(matches!(err, AuthError::Unauthorized));
        assert!(user_repo.snapshot().is_empty());
    }
}
