//! Database connection pool management
//!
//! Uses a sqlx MySqlPool with an explicit connection limit. The pool connects
//! lazily, so the server comes up even while the database is unreachable and
//! each request reports the failure on its own.

use std::fmt;
use std::time::Duration;

use sqlx::mysql::{MySqlConnectOptions, MySqlPoolOptions};
use sqlx::MySqlPool;

/// Default maximum connections for the pool.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 10;

/// How long a request waits for a free connection before failing.
pub const DEFAULT_ACQUIRE_TIMEOUT: Duration = Duration::from_secs(30);

/// Upper bound on the acquire timeout; sqlx adds it to `Instant::now()`.
pub const MAX_ACQUIRE_TIMEOUT: Duration = Duration::from_secs(24 * 60 * 60);

/// Pool settings sqlx cannot run with
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PoolConfigError {
    #[error("max connections must be at least 1")]
    ZeroConnections,

    #[error("acquire timeout must be between 1ms and {max:?}, got {got:?}")]
    AcquireTimeout { got: Duration, max: Duration },
}

/// Connection settings for the products database
#[derive(Clone)]
pub struct DbConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub database: String,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 3306,
            user: "root".to_string(),
            password: String::new(),
            database: String::new(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            acquire_timeout: DEFAULT_ACQUIRE_TIMEOUT,
        }
    }
}

// Password stays out of logs.
impl fmt::Debug for DbConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DbConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &"[REDACTED]")
            .field("database", &self.database)
            .field("max_connections", &self.max_connections)
            .field("acquire_timeout", &self.acquire_timeout)
            .finish()
    }
}

impl DbConfig {
    /// Driver-level connect options for this configuration.
    pub fn connect_options(&self) -> MySqlConnectOptions {
        let options = MySqlConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .database(&self.database);

        if self.password.is_empty() {
            options
        } else {
            options.password(&self.password)
        }
    }
}

/// Create a MySQL connection pool from configuration.
///
/// No connection is opened until the first query.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool(&DbConfig { database: "shop".into(), ..Default::default() });
/// ```
pub fn create_pool(config: &DbConfig) -> Result<MySqlPool, PoolConfigError> {
    tracing::debug!(config = ?config, "Creating database pool");
    create_pool_with_options(
        config.connect_options(),
        config.max_connections,
        config.acquire_timeout,
    )
}

/// Create a MySQL connection pool with custom options.
///
/// # Arguments
///
/// * `options` - MySQL connect options
/// * `max_connections` - Maximum number of connections in the pool
/// * `acquire_timeout` - How long callers queue for a connection
///
/// # Errors
///
/// Rejects zero connections and acquire timeouts outside
/// `1ms..=MAX_ACQUIRE_TIMEOUT`, which sqlx would otherwise panic on.
pub fn create_pool_with_options(
    options: MySqlConnectOptions,
    max_connections: u32,
    acquire_timeout: Duration,
) -> Result<MySqlPool, PoolConfigError> {
    if max_connections == 0 {
        return Err(PoolConfigError::ZeroConnections);
    }
    if acquire_timeout < Duration::from_millis(1) || acquire_timeout > MAX_ACQUIRE_TIMEOUT {
        return Err(PoolConfigError::AcquireTimeout {
            got: acquire_timeout,
            max: MAX_ACQUIRE_TIMEOUT,
        });
    }

    Ok(MySqlPoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(acquire_timeout)
        .connect_lazy_with(options))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = DbConfig::default();
        assert_eq!(config.port, 3306);
        assert_eq!(config.max_connections, 10);
        assert_eq!(config.acquire_timeout, Duration::from_secs(30));
    }

    #[test]
    fn debug_redacts_password() {
        let config = DbConfig {
            password: "hunter2".into(),
            ..Default::default()
        };
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("hunter2"));
        assert!(rendered.contains("[REDACTED]"));
    }

    #[tokio::test]
    async fn pool_respects_max_connections() {
        let pool = create_pool(&DbConfig {
            max_connections: 3,
            ..Default::default()
        })
        .unwrap();
        assert_eq!(pool.options().get_max_connections(), 3);
        assert_eq!(pool.size(), 0);
        pool.close().await;
    }

    #[test]
    fn zero_connections_is_rejected() {
        let err = create_pool(&DbConfig {
            max_connections: 0,
            ..Default::default()
        })
        .unwrap_err();
        assert_eq!(err, PoolConfigError::ZeroConnections);
    }

    #[test]
    fn out_of_range_acquire_timeout_is_rejected() {
        for acquire_timeout in [Duration::ZERO, Duration::from_secs(u64::MAX)] {
            let err = create_pool(&DbConfig {
                acquire_timeout,
                ..Default::default()
            })
            .unwrap_err();
            assert!(matches!(err, PoolConfigError::AcquireTimeout { .. }));
        }
    }

    #[tokio::test]
    async fn longest_acquire_timeout_is_accepted() {
        let pool = create_pool(&DbConfig {
            acquire_timeout: MAX_ACQUIRE_TIMEOUT,
            ..Default::default()
        })
        .unwrap();
        pool.close().await;
    }

    // Integration tests require a real database
    // Run with: DATABASE_URL=mysql://... cargo test -p shopctl-server -- --ignored

    #[tokio::test]
    #[ignore = "requires database"]
    async fn pool_acquires_connection() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let options: MySqlConnectOptions = url.parse().expect("invalid DATABASE_URL");
        let pool = create_pool_with_options(options, 2, DEFAULT_ACQUIRE_TIMEOUT).unwrap();

        let result: (i64,) = sqlx::query_as("SELECT 1")
            .fetch_one(&pool)
            .await
            .expect("query failed");

        assert_eq!(result.0, 1);
    }
}
