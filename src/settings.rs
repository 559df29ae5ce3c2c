use std::net::SocketAddr;

use config::{Config, ConfigError, Environment};
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to load configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("{0} must not be empty")]
    Empty(&'static str),
    #[error("{name} is invalid: {reason}")]
    Invalid {
        name: &'static str,
        reason: &'static str,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
    pub database_url: String,
    #[serde(default = "Settings::default_bind_addr")]
    pub bind_addr: SocketAddr,
    #[serde(
        rename = "database_max_connections",
        default = "Settings::default_max_connections"
    )]
    pub max_connections: u32,
    #[serde(default = "Settings::default_run_migrations")]
    pub run_migrations: bool,
}

impl Settings {
    /// Read settings from the process environment, including anything loaded from `.env`.
    pub fn from_env() -> Result<Self, SettingsError> {
        Self::load(Environment::default())
    }

    fn load(source: Environment) -> Result<Self, SettingsError> {
        let settings: Settings = Config::builder()
            .add_source(source.try_parsing(true))
            .build()?
            .try_deserialize()?;

        if settings.database_url.is_empty() {
            return Err(SettingsError::Empty("DATABASE_URL"));
        }
        if settings.max_connections == 0 {
            return Err(SettingsError::Invalid {
                name: "DATABASE_MAX_CONNECTIONS",
                reason: "must be at least 1",
            });
        }

        Ok(settings)
    }

    fn default_bind_addr() -> SocketAddr {
        SocketAddr::from(([127, 0, 0, 1], 8000))
    }

    fn default_max_connections() -> u32 {
        10
    }

    fn default_run_migrations() -> bool {
        true
    }
}
