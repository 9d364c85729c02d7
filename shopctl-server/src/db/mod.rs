//! Database layer - connection pool and repositories
//!
//! - One bounded MySQL pool per process, created at startup and closed on shutdown
//! - Every statement is parameterized
//! - Driver errors surface unchanged; nothing is retried here

pub mod pool;
pub mod repos;

pub use pool::{create_pool, create_pool_with_options, DbConfig, PoolConfigError};
pub use repos::*;
