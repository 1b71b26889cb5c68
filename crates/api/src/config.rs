use std::str::FromStr;

use sqlx::postgres::{PgConnectOptions, PgSslMode};

/// A configuration value that could not be parsed.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} must be a valid {expected}, got '{value}'")]
    Invalid {
        var: &'static str,
        expected: &'static str,
        value: String,
    },

    #[error("DATABASE_URL is not a valid connection string: {0}")]
    DatabaseUrl(#[source] sqlx::Error),
}

/// Read `var` through `lookup`, falling back to `default` when unset.
fn string_var(lookup: &impl Fn(&str) -> Option<String>, var: &str, default: &str) -> String {
    lookup(var).unwrap_or_else(|| default.to_string())
}

/// Read and parse `var`, falling back to `default` when unset.
fn parsed_var<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
    default: T,
    expected: &'static str,
) -> Result<T, ConfigError> {
    match lookup(var) {
        None => Ok(default),
        Some(value) => value.trim().parse().map_err(|_| ConfigError::Invalid {
            var,
            expected,
            value,
        }),
    }
}

fn env_lookup(var: &str) -> Option<String> {
    std::env::var(var).ok()
}

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8080`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `8080`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:3000`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(env_lookup)
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = string_var(&lookup, "HOST", "0.0.0.0");
        let port = parsed_var(&lookup, "PORT", 8080u16, "port number")?;

        let cors_origins: Vec<String> = string_var(&lookup, "CORS_ORIGINS", "http://localhost:3000")
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs =
            parsed_var(&lookup, "REQUEST_TIMEOUT_SECS", 30u64, "number of seconds")?;

        Ok(Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
        })
    }
}

/// Record store connection settings.
///
/// `DATABASE_URL`, when set, takes precedence over the individual `DB_*`
/// variables.
#[derive(Clone)]
pub struct DatabaseConfig {
    pub url: Option<String>,
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub name: String,
    pub max_connections: u32,
}

impl DatabaseConfig {
    /// | Env Var              | Default     |
    /// |----------------------|-------------|
    /// | `DATABASE_URL`       | unset       |
    /// | `DB_HOST`            | `localhost` |
    /// | `DB_PORT`            | `5432`      |
    /// | `DB_USER`            | `postgres`  |
    /// | `DB_PASSWORD`        | empty       |
    /// | `DB_NAME`            | `cinema_db` |
    /// | `DB_MAX_CONNECTIONS` | `10`        |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(env_lookup)
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        Ok(Self {
            url: lookup("DATABASE_URL").filter(|url| !url.trim().is_empty()),
            host: string_var(&lookup, "DB_HOST", "localhost"),
            port: parsed_var(&lookup, "DB_PORT", 5432u16, "port number")?,
            user: string_var(&lookup, "DB_USER", "postgres"),
            password: string_var(&lookup, "DB_PASSWORD", ""),
            name: string_var(&lookup, "DB_NAME", "cinema_db"),
            max_connections: parsed_var(&lookup, "DB_MAX_CONNECTIONS", 10u32, "connection count")?,
        })
    }

    /// Connection options for the pool. Component-built connections do not
    /// use TLS.
    pub fn connect_options(&self) -> Result<PgConnectOptions, ConfigError> {
        if let Some(url) = &self.url {
            return PgConnectOptions::from_str(url).map_err(ConfigError::DatabaseUrl);
        }

        Ok(PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.name)
            .ssl_mode(PgSslMode::Disable))
    }
}
