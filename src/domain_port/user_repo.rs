use super::InsertOutcome;
use crate::application_port::AuthError;
use crate::domain_model::{ExternalUserId, User};
use chrono::{DateTime, Utc};

#[async_trait::async_trait]
pub trait UserRepo: Send + Sync {
    async fn find_by_external_id(
        &self,
        external_id: &ExternalUserId,
    ) -> Result<Option<User>, AuthError>;

    async fn create(&self, user: &User) -> Result<InsertOutcome, AuthError>;

    /// Refreshes last_login plus the profile fields the provider reported.
    async fn record_login(
        &self,
        external_id: &ExternalUserId,
        email: &str,
        username: &str,
        at: DateTime<Utc>,
    ) -> Result<(), AuthError>;
}
