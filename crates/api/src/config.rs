use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use axum::http::HeaderValue;
use contact_db::{DbCredentials, DbTarget, PoolSettings};

/// Startup configuration errors. Any of these aborts the process.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} must be a valid {expected}, got '{value}'")]
    InvalidNumber {
        var: &'static str,
        expected: &'static str,
        value: String,
    },

    #[error("{0} must be greater than zero")]
    Zero(&'static str),

    #[error("Invalid CORS origin '{0}': expected '*' or an http(s) origin")]
    InvalidOrigin(String),

    #[error("CORS_ORIGINS must contain at least one origin or '*'")]
    NoOrigins,

    #[error("No database configured: set DATABASE_URL, INSTANCE_UNIX_SOCKET or DB_HOST")]
    NoDatabase,

    #[error("{var} must be set when connecting via {via}")]
    MissingVar {
        var: &'static str,
        via: &'static str,
    },
}

/// Which browser origins may call the API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsPolicy {
    /// `Access-Control-Allow-Origin: *`.
    AnyOrigin,
    /// Only these exact origins.
    AllowList(Vec<HeaderValue>),
}

/// Server configuration loaded from environment variables.
///
/// Resolved and validated once at startup; handlers only read it.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8080`).
    pub port: u16,
    /// Allowed CORS origins, from `CORS_ORIGINS` (default: `*`).
    pub cors: CorsPolicy,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Directory holding the single-page frontend, if served by this process.
    pub static_dir: Option<PathBuf>,
    /// Database connection target.
    pub database: DbTarget,
    /// Connection pool bounds.
    pub pool: PoolSettings,
}

impl ServerConfig {
    /// Load configuration from the process environment.
    ///
    /// | Env Var                   | Default    |
    /// |---------------------------|------------|
    /// | `HOST`                    | `0.0.0.0`  |
    /// | `PORT`                    | `8080`     |
    /// | `CORS_ORIGINS`            | `*`        |
    /// | `REQUEST_TIMEOUT_SECS`    | `30`       |
    /// | `STATIC_DIR`              | unset      |
    /// | `DATABASE_URL`            | unset      |
    /// | `INSTANCE_UNIX_SOCKET`    | unset      |
    /// | `DB_HOST` / `DB_PORT`     | unset / `5432` |
    /// | `DB_USER` / `DB_PASS` / `DB_NAME` | unset |
    /// | `DB_MAX_CONNECTIONS`      | `10`       |
    /// | `DB_ACQUIRE_TIMEOUT_SECS` | `5`        |
    ///
    /// The database target is chosen in order: `DATABASE_URL`, then
    /// `INSTANCE_UNIX_SOCKET`, then `DB_HOST`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// Blank values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let host = get("HOST").unwrap_or_else(|| "0.0.0.0".into());
        let port: u16 = parse_or("PORT", get("PORT"), 8080, "u16")?;
        let cors = parse_cors(get("CORS_ORIGINS").as_deref().unwrap_or("*"))?;

        let request_timeout_secs: u64 =
            parse_or("REQUEST_TIMEOUT_SECS", get("REQUEST_TIMEOUT_SECS"), 30, "u64")?;
        if request_timeout_secs == 0 {
            return Err(ConfigError::Zero("REQUEST_TIMEOUT_SECS"));
        }

        let static_dir = get("STATIC_DIR").map(PathBuf::from);
        let database = resolve_database(&get)?;

        let max_connections: u32 =
            parse_or("DB_MAX_CONNECTIONS", get("DB_MAX_CONNECTIONS"), 10, "u32")?;
        if max_connections == 0 {
            return Err(ConfigError::Zero("DB_MAX_CONNECTIONS"));
        }
        let acquire_timeout_secs: u64 = parse_or(
            "DB_ACQUIRE_TIMEOUT_SECS",
            get("DB_ACQUIRE_TIMEOUT_SECS"),
            5,
            "u64",
        )?;
        if acquire_timeout_secs == 0 {
            return Err(ConfigError::Zero("DB_ACQUIRE_TIMEOUT_SECS"));
        }

        Ok(Self {
            host,
            port,
            cors,
            request_timeout_secs,
            static_dir,
            database,
            pool: PoolSettings {
                max_connections,
                acquire_timeout: Duration::from_secs(acquire_timeout_secs),
            },
        })
    }
}

fn parse_or<T: FromStr>(
    var: &'static str,
    value: Option<String>,
    default: T,
    expected: &'static str,
) -> Result<T, ConfigError> {
    match value {
        None => Ok(default),
        Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidNumber {
            var,
            expected,
            value: raw,
        }),
    }
}

/// Parse `*` or a comma-separated list of origins.
fn parse_cors(raw: &str) -> Result<CorsPolicy, ConfigError> {
    let entries: Vec<&str> = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();

    if entries.is_empty() {
        return Err(ConfigError::NoOrigins);
    }
    if entries.contains(&"*") {
        return Ok(CorsPolicy::AnyOrigin);
    }

    let origins = entries
        .into_iter()
        .map(|origin| {
            if !(origin.starts_with("http://") || origin.starts_with("https://")) {
                return Err(ConfigError::InvalidOrigin(origin.to_string()));
            }
            HeaderValue::from_str(origin.trim_end_matches('/'))
                .map_err(|_| ConfigError::InvalidOrigin(origin.to_string()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CorsPolicy::AllowList(origins))
}

fn resolve_database<G>(get: &G) -> Result<DbTarget, ConfigError>
where
    G: Fn(&str) -> Option<String>,
{
    if let Some(url) = get("DATABASE_URL") {
        return Ok(DbTarget::Url(url));
    }

    if let Some(dir) = get("INSTANCE_UNIX_SOCKET") {
        return Ok(DbTarget::UnixSocket {
            dir: PathBuf::from(dir),
            credentials: credentials(get, "INSTANCE_UNIX_SOCKET")?,
        });
    }

    if let Some(host) = get("DB_HOST") {
        let port: u16 = parse_or("DB_PORT", get("DB_PORT"), 5432, "u16")?;
        return Ok(DbTarget::Tcp {
            host,
            port,
            credentials: credentials(get, "DB_HOST")?,
        });
    }

    Err(ConfigError::NoDatabase)
}

fn credentials<G>(get: &G, via: &'static str) -> Result<DbCredentials, ConfigError>
where
    G: Fn(&str) -> Option<String>,
{
    let require = |var: &'static str| get(var).ok_or(ConfigError::MissingVar { var, via });
    Ok(DbCredentials {
        user: require("DB_USER")?,
        password: get("DB_PASS"),
        database: require("DB_NAME")?,
    })
}
