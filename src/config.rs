// src/config.rs
use std::{env, fmt, str::FromStr, time::Duration};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Production,
    Development,
    Test,
}

impl AppEnv {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Production => "production",
            Self::Development => "development",
            Self::Test => "test",
        }
    }

    pub fn is_production(self) -> bool {
        self == Self::Production
    }
}

impl fmt::Display for AppEnv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AppEnv {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "production" | "prod" => Ok(Self::Production),
            "development" | "dev" => Ok(Self::Development),
            "test" => Ok(Self::Test),
            other => Err(ConfigError::Invalid(format!(
                "APP_ENV must be production, development or test (got `{other}`)"
            ))),
        }
    }
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    env: AppEnv,
    http_host: String,
    http_port: u16,
    database_dsn: String,
    database_max_connections: u32,
    request_timeout: Duration,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    Missing(&'static str),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_http_host() -> String {
    "0.0.0.0".into()
}

const DEFAULT_HTTP_PORT: u16 = 8080;
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 10;

impl AppConfig {
    /// Build configuration from environment variables, loading a `.env` file
    /// first when one is present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup. Empty values count as
    /// unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let database_dsn = get("DATABASE_DSN")
            .or_else(|| get("DATABASE_URL"))
            .ok_or(ConfigError::Missing("DATABASE_DSN"))?;

        let env = get("APP_ENV")
            .map(|value| value.parse::<AppEnv>())
            .transpose()?
            .unwrap_or(AppEnv::Development);

        let http_host = get("HTTP_HOST").unwrap_or_else(default_http_host);

        let http_port = parse_or("HTTP_PORT", get("HTTP_PORT"), DEFAULT_HTTP_PORT)?;

        let request_timeout_secs = parse_or(
            "REQUEST_TIMEOUT_SECS",
            get("REQUEST_TIMEOUT_SECS"),
            DEFAULT_REQUEST_TIMEOUT_SECS,
        )?;
        if request_timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "REQUEST_TIMEOUT_SECS must be greater than zero".into(),
            ));
        }

        let database_max_connections = parse_or(
            "DATABASE_MAX_CONNECTIONS",
            get("DATABASE_MAX_CONNECTIONS"),
            DEFAULT_DATABASE_MAX_CONNECTIONS,
        )?;
        if database_max_connections == 0 {
            return Err(ConfigError::Invalid(
                "DATABASE_MAX_CONNECTIONS must be greater than zero".into(),
            ));
        }

        Ok(Self {
            env,
            http_host,
            http_port,
            database_dsn,
            database_max_connections,
            request_timeout: Duration::from_secs(request_timeout_secs),
        })
    }

    pub fn env(&self) -> AppEnv {
        self.env
    }

    pub fn http_port(&self) -> u16 {
        self.http_port
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.http_host, self.http_port)
    }

    pub fn database_dsn(&self) -> &str {
        &self.database_dsn
    }

    pub fn database_max_connections(&self) -> u32 {
        self.database_max_connections
    }

    pub fn request_timeout(&self) -> Duration {
        self.request_timeout
    }

    /// Default log filter when `RUST_LOG` is not set.
    pub fn default_log_filter(&self) -> &'static str {
        if self.env.is_production() {
            "info,tower_http=info,sqlx=warn"
        } else {
            "debug,tower_http=debug,sqlx=warn"
        }
    }
}

fn parse_or<T: FromStr>(key: &str, raw: Option<String>, default: T) -> Result<T, ConfigError> {
    match raw {
        Some(value) => value
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::Invalid(format!("{key} has an invalid value `{value}`"))),
        None => Ok(default),
    }
}
