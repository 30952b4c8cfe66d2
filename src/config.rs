//! Service configuration.
//!
//! Settings are layered: built-in defaults, then an optional `trivia.toml`
//! next to the binary's working directory, then `TRIVIA_*` environment
//! variables (for example `TRIVIA_DATABASE_URL` or `TRIVIA_PORT`).

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

const DEFAULT_DATABASE_URL: &str = "sqlite:trivia.db";
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// sqlx connection string of the SQLite database
    pub database_url: String,
    pub host: String,
    pub port: u16,
}

impl Settings {
    pub fn load() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_builder(
            Config::builder()
                .add_source(File::with_name("trivia").required(false))
                .add_source(Environment::with_prefix("TRIVIA")),
        )
    }

    fn from_builder(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> Result<Self, ConfigError> {
        builder
            .set_default("database_url", DEFAULT_DATABASE_URL)?
            .set_default("host", DEFAULT_HOST)?
            .set_default("port", i64::from(DEFAULT_PORT))?
            .build()?
            .try_deserialize()
    }

    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
