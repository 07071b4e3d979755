//! Configuration for the Products API

use core_config::{server::ServerConfig, ConfigError, Environment, FromEnv};
use database::postgres::PostgresConfig;

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub server: ServerConfig,
    pub postgres: PostgresConfig,
    pub environment: Environment,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            server: ServerConfig::from_env()?,
            postgres: PostgresConfig::from_env()?,
            environment: Environment::from_env(),
        })
    }
}
