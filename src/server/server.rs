use crate::application_impl::*;
use crate::application_port::*;
use crate::domain_port::*;
use crate::infra_mysql::*;
use crate::logger::*;
use crate::settings::{Environment, Settings};
use sqlx::MySqlPool;
use sqlx::mysql::MySqlPoolOptions;
use std::fs;
use std::sync::Arc;

pub struct Server {
    pub auth_service: Arc<dyn AuthService>,
    pub interaction_service: Arc<dyn InteractionService>,
    pub adventure_service: Arc<dyn AdventureService>,
    pool: Option<MySqlPool>,
}

impl Server {
    pub async fn try_new(settings: &Settings) -> anyhow::Result<Self> {
        let pool = MySqlPoolOptions::new()
            .max_connections(settings.database.max_connections)
            .connect(&settings.database.url)
            .await?;
        sqlx::migrate!("./migrations").run(&pool).await?;

        let user_repo: Arc<dyn UserRepo> = Arc::new(MySqlUserRepo::new(pool.clone()));
        let adventure_repo: Arc<dyn AdventureRepo> =
            Arc::new(MySqlAdventureRepo::new(pool.clone()));
        let interaction_repo: Arc<dyn InteractionRepo> =
            Arc::new(MySqlInteractionRepo::new(pool.clone()));

        let identity_provider: Arc<dyn IdentityProvider> =
            match settings.identity.backend.as_str() {
                "fake" => {
                    if settings.environment != Environment::Test {
                        return Err(anyhow::anyhow!(
                            "the fake identity backend requires the test environment"
                        ));
                    }
                    Arc::new(FakeIdentityProvider::new())
                }
                "jwt" => {
                    let public_key_path =
                        settings.identity.public_key_path.as_deref().ok_or_else(|| {
                            anyhow::anyhow!(
                                "identity.public_key_path is required for the jwt backend"
                            )
                        })?;
                    let public_key_pem = fs::read(public_key_path)?;
                    Arc::new(JwtIdentityProvider::new(JwtIdentityConfig {
                        issuer: settings.identity.issuer.clone(),
                        audience: settings.identity.audience.clone(),
                        public_key_pem,
                    })?)
                }
                other => return Err(anyhow::anyhow!("Unknown identity backend: {}", other)),
            };

        let auth_service: Arc<dyn AuthService> =
            Arc::new(RealAuthService::new(identity_provider, user_repo));
        let interaction_service: Arc<dyn InteractionService> = Arc::new(
            RealInteractionService::new(interaction_repo, adventure_repo.clone()),
        );
        let adventure_service: Arc<dyn AdventureService> =
            Arc::new(RealAdventureService::new(adventure_repo));

        info!("server started");

        Ok(Self {
            auth_service,
            interaction_service,
            adventure_service,
            pool: Some(pool),
        })
    }

    /// Wiring shared with the HTTP tests, which supply fake backends and no
    /// pool.
    pub fn from_parts(
        auth_service: Arc<dyn AuthService>,
        interaction_service: Arc<dyn InteractionService>,
        adventure_service: Arc<dyn AdventureService>,
    ) -> Self {
        Self {
            auth_service,
            interaction_service,
            adventure_service,
            pool: None,
        }
    }

    pub async fn shutdown(&self) {
        info!("server shutting down...");

        if let Some(pool) = &self.pool {
            pool.close().await;
        }
    }
}
