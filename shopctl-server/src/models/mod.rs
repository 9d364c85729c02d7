//! Domain models with validation
//!
//! Inbound payloads are parsed into loose drafts and only become
//! insertable values after validation.

mod product;
mod validation;

pub use product::{NewProduct, Product, ProductDraft, ProductId};
pub use validation::ValidationError;
