//! Repository layer
//!
//! Handlers talk to [`ProductStore`]; [`ProductRepo`] is the MySQL
//! implementation.

mod products;

#[cfg(test)]
pub(crate) mod memory;

pub use products::{ProductRepo, ProductStore};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    /// Any driver failure. The display text is the driver's own message.
    #[error("{0}")]
    Sqlx(#[from] sqlx::Error),
}
