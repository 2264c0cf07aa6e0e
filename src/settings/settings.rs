use anyhow::{Result, anyhow};
use config::{Config, File};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub environment: Environment,
    pub http: Http,
    pub database: Database,
    pub identity: Identity,
    pub log: Log,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    Test,
    Production,
}

#[derive(Debug, Deserialize)]
pub struct Http {
    pub address: String,
}

#[derive(Debug, Deserialize)]
pub struct Database {
    pub url: String,
    pub max_connections: u32,
}

#[derive(Debug, Deserialize)]
pub struct Identity {
    pub backend: String, // "jwt" or "fake"
    pub issuer: Option<String>,
    pub audience: Option<String>,
    pub public_key_path: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Log {
    pub filter: String,
}

#[cfg(debug_assertions)]
const SETTINGS_PATH: &str = "settings/dev.toml";
#[cfg(not(debug_assertions))]
const SETTINGS_PATH: &str = "settings/release.toml";

pub fn parse_settings(path: Option<&str>) -> Result<Settings> {
    let path = path.unwrap_or(SETTINGS_PATH);

    let settings: Settings = Config::builder()
        .add_source(File::with_name(path))
        .build()
        .map_err(|e| anyhow!(e))?
        .try_deserialize()
        .map_err(|e| anyhow!(e))?;

    settings.validate()?;

    Ok(settings)
}

impl Settings {
    /// The fake identity backend trusts whatever the bearer token claims, so
    /// it must never be selectable outside the test environment.
    pub fn validate(&self) -> Result<()> {
        if self.identity.backend == "fake" && self.environment != Environment::Test {
            return Err(anyhow!(
                "the fake identity backend is only allowed in the test environment"
            ));
        }
        Ok(())
    }
}
