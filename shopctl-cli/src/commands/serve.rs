//! HTTP server command
//!
//! Builds the database pool and runs the products API until Ctrl+C/SIGTERM.

use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;

use shopctl_server::db::pool::MAX_ACQUIRE_TIMEOUT;
use shopctl_server::db::{create_pool, DbConfig};
use shopctl_server::http::{run_server, ServerConfig};

const MAX_ACQUIRE_TIMEOUT_SECS: u64 = MAX_ACQUIRE_TIMEOUT.as_secs();

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(long, short = 'p', env = "PORT", default_value_t = 3000)]
    pub port: u16,

    /// Interface to bind to
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: IpAddr,

    /// MySQL host
    #[arg(long, env = "DB_HOST", default_value = "localhost")]
    pub db_host: String,

    /// MySQL port
    #[arg(long, env = "DB_PORT", default_value_t = 3306)]
    pub db_port: u16,

    /// MySQL user
    #[arg(long, env = "DB_USER", default_value = "root")]
    pub db_user: String,

    /// MySQL password
    #[arg(long, env = "DB_PASSWORD", default_value = "", hide_env_values = true)]
    pub db_password: String,

    /// Database holding the products table
    #[arg(long, env = "DB_NAME")]
    pub db_name: String,

    /// Maximum pooled connections; further requests wait for a free one
    #[arg(
        long,
        env = "DB_MAX_CONNECTIONS",
        default_value_t = 10,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub db_max_connections: u32,

    /// Seconds a request waits for a pooled connection (at most one day)
    #[arg(
        long,
        env = "DB_ACQUIRE_TIMEOUT_SECS",
        default_value_t = 30,
        value_parser = clap::value_parser!(u64).range(1..=MAX_ACQUIRE_TIMEOUT_SECS)
    )]
    pub db_acquire_timeout_secs: u64,

    /// Allowed browser origin (repeat or comma-separate for several)
    #[arg(
        long = "cors-origin",
        env = "CORS_ORIGINS",
        value_delimiter = ',',
        default_values = ["http://localhost:5173", "http://localhost:4000"]
    )]
    pub cors_origins: Vec<String>,
}

impl ServeArgs {
    fn db_config(&self) -> DbConfig {
        DbConfig {
            host: self.db_host.clone(),
            port: self.db_port,
            user: self.db_user.clone(),
            password: self.db_password.clone(),
            database: self.db_name.clone(),
            max_connections: self.db_max_connections,
            acquire_timeout: Duration::from_secs(self.db_acquire_timeout_secs),
        }
    }

    fn server_config(&self) -> ServerConfig {
        ServerConfig {
            bind_addr: SocketAddr::new(self.host, self.port),
            cors_origins: self.cors_origins.clone(),
        }
    }
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let db_config = args.db_config();
    tracing::info!(
        db_host = %db_config.host,
        db_name = %db_config.database,
        max_connections = db_config.max_connections,
        "Starting shopctl server on {}:{}",
        args.host,
        args.port
    );

    // Lazy pool: connections open on first use
    let pool = create_pool(&db_config).context("Invalid database pool settings")?;

    // Run server (blocks until shutdown)
    run_server(pool, args.server_config())
        .await
        .context("Server error")?;

    Ok(())
}
