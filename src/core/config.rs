use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

/// Flat view of the environment, one field per variable.
#[derive(Debug, Deserialize)]
struct EnvSettings {
    app_host: String,
    app_port: u16,
    database_url: String,
    database_max_connections: u32,
}

impl Config {
    /// Load configuration from the process environment.
    pub async fn load() -> Result<Self> {
        Self::from_environment(config::Environment::default())
    }

    /// Build configuration from an environment source, falling back to defaults
    /// for anything unset.
    pub fn from_environment(environment: config::Environment) -> Result<Self> {
        let settings: EnvSettings = config::Config::builder()
            .set_default("app_host", "0.0.0.0")?
            .set_default("app_port", 8000_i64)?
            .set_default("database_url", "sqlite://board.db")?
            .set_default("database_max_connections", 5_i64)?
            .add_source(environment.try_parsing(true))
            .build()
            .context("Failed to read configuration")?
            .try_deserialize()
            .context("Invalid configuration")?;

        Ok(Config {
            server: ServerConfig {
                host: settings.app_host,
                port: settings.app_port,
            },
            database: DatabaseConfig {
                url: settings.database_url,
                max_connections: settings.database_max_connections,
            },
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
