use crate::domain_model::ExternalUserId;

#[derive(Debug, thiserror::Error)]
pub enum IdentityError {
    #[error("session credential is not valid")]
    InvalidSession,
    #[error("identity provider error: {0}")]
    Provider(String),
}

/// Profile fields the provider attaches to a verified session.
#[derive(Debug, Clone)]
pub struct RemoteProfile {
    pub external_id: ExternalUserId,
    pub email: Option<String>,
    pub username: Option<String>,
    pub first_name: Option<String>,
}

impl RemoteProfile {
    /// Username fallback chain: explicit username, then first name, then the
    /// literal "user".
    pub fn display_name(&self) -> &str {
        self.username
            .as_deref()
            .or(self.first_name.as_deref())
            .unwrap_or("user")
    }
}

/// Verifies an inbound session credential against the external identity
/// provider. Constructed once per process and injected; never a module-level
/// singleton.
#[async_trait::async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn verify_session(&self, token: &str) -> Result<RemoteProfile, IdentityError>;
}
