use crate::application_port::{IdentityError, IdentityProvider, RemoteProfile};
use crate::domain_model::ExternalUserId;

/// Test-only identity backend: the bearer token is itself a JSON document
/// naming a synthetic user. Settings validation refuses to select this
/// backend outside the test environment.
#[derive(Debug)]
pub struct FakeIdentityProvider;

impl FakeIdentityProvider {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FakeIdentityProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, serde::Deserialize)]
struct SyntheticUser {
    id: String,
    #[serde(default)]
    username: Option<String>,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    first_name: Option<String>,
}

#[async_trait::async_trait]
impl IdentityProvider for FakeIdentityProvider {
    async fn verify_session(&self, token: &str) -> Result<RemoteProfile, IdentityError> {
        let synthetic: SyntheticUser =
            serde_json::from_str(token).map_err(|_| IdentityError::InvalidSession)?;

        Ok(RemoteProfile {
            external_id: ExternalUserId(synthetic.id),
            email: synthetic.email,
            username: synthetic.username,
            first_name: synthetic.first_name,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn resolves_a_synthetic_user_from_a_json_token() {
        let provider = FakeIdentityProvider::new();
        let profile = provider
            .verify_session(r#"{"id":"test-user","username":"test","email":"test@test.com"}"#)
            .await
            .unwrap();

        assert_eq!(profile.external_id, ExternalUserId("test-user".into()));
        assert_eq!(profile.display_name(), "test");
        assert_eq!(profile.email.as_deref(), Some("test@test.com"));
    }

    #[tokio::test]
    async fn rejects_tokens_that_are_not_json() {
        let provider = FakeIdentityProvider::new();
        let err = provider.verify_session("not-a-session").await.unwrap_err();
        assert!(matches!(err, IdentityError::InvalidSession));
    }
}
