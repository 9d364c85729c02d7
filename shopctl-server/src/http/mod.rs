//! HTTP server layer
//!
//! Axum server with:
//! - CORS restricted to configured origins
//! - Request tracing
//! - Graceful shutdown that closes the database pool
//! - JSON error responses

pub mod error;
pub mod extractors;
pub mod routes;
pub mod server;

pub use error::ApiError;
pub use server::{
    build_router, cors_layer, run_server, serve_with_shutdown, ServerConfig, ServerError,
};
