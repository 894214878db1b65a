//! Application configuration structs
//!
//! Loads configuration from environment variables (and a `.env` file if present).

use serde::Deserialize;
use std::collections::HashMap;
use std::env;

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub api: ServerConfig,
    pub database: DatabaseConfig,
    pub session: SessionConfig,
    pub http: HttpConfig,
}

/// General application settings
#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_app_name")]
    pub name: String,
    #[serde(default = "default_env")]
    pub env: Environment,
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Test,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }

    #[must_use]
    pub fn is_test(&self) -> bool {
        matches!(self, Self::Test)
    }

    fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "production" => Some(Self::Production),
            "staging" => Some(Self::Staging),
            "test" => Some(Self::Test),
            "development" => Some(Self::Development),
            _ => None,
        }
    }
}

/// HTTP listener configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl ServerConfig {
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Database configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
}

/// Session cookie configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    pub secret: String,
    #[serde(default = "default_session_expiry")]
    pub expiry_secs: i64,
}

/// Request handling limits
#[derive(Debug, Clone, Deserialize)]
pub struct HttpConfig {
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

// Default value functions
fn default_app_name() -> String {
    "warbler".to_string()
}

fn default_env() -> Environment {
    Environment::Development
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_max_connections() -> u32 {
    20
}

fn default_min_connections() -> u32 {
    5
}

fn default_session_expiry() -> i64 {
    604_800 // 7 days
}

fn default_request_timeout() -> u64 {
    30
}

impl AppConfig {
    /// Configuration with every optional value at its default
    #[must_use]
    pub fn with_defaults(database_url: impl Into<String>, session_secret: impl Into<String>) -> Self {
        Self {
            app: AppSettings {
                name: default_app_name(),
                env: default_env(),
            },
            api: ServerConfig {
                host: default_host(),
                port: default_port(),
            },
            database: DatabaseConfig {
                url: database_url.into(),
                max_connections: default_max_connections(),
                min_connections: default_min_connections(),
            },
            session: SessionConfig {
                secret: session_secret.into(),
                expiry_secs: default_session_expiry(),
            },
            http: HttpConfig {
                request_timeout_secs: default_request_timeout(),
            },
        }
    }

    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if required environment variables are missing
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let vars: HashMap<String, String> = env::vars().collect();
        Self::from_lookup(|key| vars.get(key).cloned())
    }

    /// Load configuration from an arbitrary key lookup
    ///
    /// With `APP_ENV=test` the database URL comes from `TEST_DATABASE_URL`,
    /// falling back to `DATABASE_URL`.
    ///
    /// # Errors
    /// Returns an error if required variables are missing or malformed
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let env = match lookup("APP_ENV") {
            Some(raw) => Environment::parse(&raw)
                .ok_or(ConfigError::InvalidValue("APP_ENV", raw))?,
            None => default_env(),
        };

        let database_url = if env.is_test() {
            lookup("TEST_DATABASE_URL").or_else(|| lookup("DATABASE_URL"))
        } else {
            lookup("DATABASE_URL")
        }
        .ok_or(ConfigError::MissingVar("DATABASE_URL"))?;

        Ok(Self {
            app: AppSettings {
                name: lookup("APP_NAME").unwrap_or_else(default_app_name),
                env,
            },
            api: ServerConfig {
                host: lookup("API_HOST").unwrap_or_else(default_host),
                port: parse_or("API_PORT", lookup("API_PORT"), default_port)?,
            },
            database: DatabaseConfig {
                url: database_url,
                max_connections: parse_or(
                    "DATABASE_MAX_CONNECTIONS",
                    lookup("DATABASE_MAX_CONNECTIONS"),
                    default_max_connections,
                )?,
                min_connections: parse_or(
                    "DATABASE_MIN_CONNECTIONS",
                    lookup("DATABASE_MIN_CONNECTIONS"),
                    default_min_connections,
                )?,
            },
            session: SessionConfig {
                secret: lookup("SESSION_SECRET").ok_or(ConfigError::MissingVar("SESSION_SECRET"))?,
                expiry_secs: parse_or(
                    "SESSION_EXPIRY_SECS",
                    lookup("SESSION_EXPIRY_SECS"),
                    default_session_expiry,
                )?,
            },
            http: HttpConfig {
                request_timeout_secs: parse_or(
                    "REQUEST_TIMEOUT_SECS",
                    lookup("REQUEST_TIMEOUT_SECS"),
                    default_request_timeout,
                )?,
            },
        })
    }
}

fn parse_or<T, D>(key: &'static str, raw: Option<String>, default: D) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    D: FnOnce() -> T,
{
    match raw {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue(key, value)),
        None => Ok(default()),
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}
