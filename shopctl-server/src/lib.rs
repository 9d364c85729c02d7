//! shopctl-server: products CRUD over HTTP
//!
//! A small axum service in front of a MySQL `products` table:
//! list, create and delete, with JSON in and out.

pub mod db;
pub mod http;
pub mod models;
pub mod state;

pub use http::{run_server, ServerConfig, ServerError};
pub use state::AppState;
