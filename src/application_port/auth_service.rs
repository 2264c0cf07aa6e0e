use super::identity_provider::IdentityError;
use crate::domain_model::UserId;

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Unauthorized")]
    Unauthorized,
    #[error("identity provider error: {0}")]
    Provider(String),
    #[error("store error: {0}")]
    Store(String),
}

impl From<IdentityError> for AuthError {
    fn from(error: IdentityError) -> Self {
        match error {
            IdentityError::InvalidSession => AuthError::Unauthorized,
            IdentityError::Provider(e) => AuthError::Provider(e),
        }
    }
}

/// Resolves a bearer credential to a local user id, syncing the provider's
/// user record into the local user table on the way.
#[async_trait::async_trait]
pub trait AuthService: Send + Sync {
    async fn authenticate(&self, session_token: &str) -> Result<UserId, AuthError>;
}
