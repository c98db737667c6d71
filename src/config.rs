use figment::{
    providers::{Env, Serialized},
    Figment,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Listen address (e.g. "127.0.0.1:3000")
    #[serde(default = "default_listen")]
    pub listen: String,

    /// Unix socket path; takes precedence over `listen` when set
    pub socket: Option<String>,

    /// Database configuration
    pub database: Option<DatabaseConfig>,

    /// OpenTelemetry configuration
    #[serde(default)]
    pub otel: OtelConfig,
}

fn default_listen() -> String {
    "127.0.0.1:3000".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// PostgreSQL connection URL
    pub url: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OtelConfig {
    /// OTLP endpoint
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Deployment environment name
    #[serde(default = "default_environment")]
    pub environment: String,
}

fn default_endpoint() -> String {
    "http://127.0.0.1:4318".to_string()
}

fn default_environment() -> String {
    "development".to_string()
}

impl Default for OtelConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            environment: default_environment(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Supports the following env vars:
    /// - SHOWCASE_LISTEN
    /// - SHOWCASE_SOCKET
    /// - SHOWCASE_DATABASE_URL or DATABASE_URL
    /// - SHOWCASE_OTEL_ENDPOINT
    /// - SHOWCASE_OTEL_ENVIRONMENT
    pub fn load() -> Result<Self, figment::Error> {
        let figment = Figment::new()
            .merge(Serialized::defaults(ConfigDefaults::default()))
            .merge(Env::prefixed("SHOWCASE_").split("_"));

        let mut config: Config = figment.extract()?;

        // Plain DATABASE_URL is what sqlx tooling expects
        if config.database.is_none() {
            if let Ok(url) = std::env::var("DATABASE_URL") {
                config.database = Some(DatabaseConfig { url });
            }
        }

        Ok(config)
    }

    /// The database URL, if one was configured.
    #[must_use]
    pub fn database_url(&self) -> Option<&str> {
        self.database.as_ref().map(|d| d.url.as_str())
    }
}

/// Helper struct for default values in figment
#[derive(Debug, Serialize)]
struct ConfigDefaults {
    listen: String,
    otel: OtelConfig,
}

impl Default for ConfigDefaults {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            otel: OtelConfig::default(),
        }
    }
}
