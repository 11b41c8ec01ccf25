//! Persistence layer for store-contact submissions and roles.
//!
//! Handlers never see a [`DbPool`] directly; they go through the
//! [`store::SubmissionStore`] trait so tests can swap in [`memory::MemoryStore`].

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use sqlx::postgres::{PgConnectOptions, PgPoolOptions};

pub mod error;
pub mod memory;
pub mod models;
pub mod repositories;
pub mod schema;
pub mod store;

pub type DbPool = sqlx::PgPool;

/// Where the database lives.
#[derive(Clone, PartialEq, Eq)]
pub enum DbTarget {
    /// A full `postgres://` connection URL.
    Url(String),
    /// A TCP host and port.
    Tcp {
        host: String,
        port: u16,
        credentials: DbCredentials,
    },
    /// A directory containing the server's Unix-domain socket (Cloud SQL style).
    UnixSocket {
        dir: PathBuf,
        credentials: DbCredentials,
    },
}

#[derive(Clone, PartialEq, Eq)]
pub struct DbCredentials {
    pub user: String,
    pub password: Option<String>,
    pub database: String,
}

/// Pool sizing. `acquire_timeout` bounds how long a request waits for a free
/// connection before failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolSettings {
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

impl Default for PoolSettings {
    fn default() -> Self {
        Self {
            max_connections: 10,
            acquire_timeout: Duration::from_secs(5),
        }
    }
}

impl DbTarget {
    fn connect_options(&self) -> Result<PgConnectOptions, sqlx::Error> {
        let options = match self {
            DbTarget::Url(url) => PgConnectOptions::from_str(url)?,
            DbTarget::Tcp {
                host,
                port,
                credentials,
            } => credentials.apply(PgConnectOptions::new().host(host).port(*port)),
            DbTarget::UnixSocket { dir, credentials } => {
                credentials.apply(PgConnectOptions::new().socket(dir))
            }
        };
        Ok(options)
    }
}

impl DbCredentials {
    fn apply(&self, options: PgConnectOptions) -> PgConnectOptions {
        let options = options.username(&self.user).database(&self.database);
        match &self.password {
            Some(password) => options.password(password),
            None => options,
        }
    }
}

// Never print credentials or URLs (which may embed a password).
impl fmt::Debug for DbTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for DbTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DbTarget::Url(_) => write!(f, "url(<redacted>)"),
            DbTarget::Tcp {
                host,
                port,
                credentials,
            } => write!(f, "tcp({host}:{port}/{})", credentials.database),
            DbTarget::UnixSocket { dir, credentials } => {
                write!(f, "socket({}/{})", dir.display(), credentials.database)
            }
        }
    }
}

impl fmt::Debug for DbCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DbCredentials")
            .field("user", &self.user)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("database", &self.database)
            .finish()
    }
}

/// Create a connection pool without connecting.
///
/// Connections are opened on first use, so an unreachable database does not
/// prevent the service from starting. Only a malformed URL fails here.
pub fn create_pool(target: &DbTarget, settings: PoolSettings) -> Result<DbPool, sqlx::Error> {
    let options = target.connect_options()?;
    Ok(PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .acquire_timeout(settings.acquire_timeout)
        .connect_lazy_with(options))
}

/// Simple health check: runs `SELECT 1` against the pool.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}
