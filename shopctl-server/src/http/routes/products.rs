//! Product endpoints
//!
//! - `GET /products` lists every product
//! - `POST /products` validates and inserts one product
//! - `DELETE /products/{id}` removes one product

use axum::{
    extract::State,
    http::StatusCode,
    routing::{delete, get},
    Json, Router,
};
use serde::Serialize;

use crate::http::error::ApiError;
use crate::http::extractors::{JsonBody, ValidProductId};
use crate::models::{NewProduct, Product, ProductDraft};
use crate::state::AppState;

/// List response
#[derive(Serialize)]
pub struct ProductList {
    pub products: Vec<Product>,
}

/// Create response; echoes the accepted payload
#[derive(Serialize)]
pub struct ProductCreated {
    pub message: &'static str,
    pub product: NewProduct,
}

/// Plain confirmation
#[derive(Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// GET /products - list all products
async fn list_products(State(state): State<AppState>) -> Result<Json<ProductList>, ApiError> {
    let products = state.products().list().await?;
    tracing::debug!(count = products.len(), "Listed products");

    Ok(Json(ProductList { products }))
}

/// POST /products - create a product
async fn create_product(
    State(state): State<AppState>,
    JsonBody(draft): JsonBody<ProductDraft>,
) -> Result<(StatusCode, Json<ProductCreated>), ApiError> {
    tracing::debug!(product = ?draft, "Received product");
    let product = draft.validate()?;

    let id = state
        .products()
        .insert(&product)
        .await
        .map_err(|e| ApiError::database("Database insert failed", e))?;
    tracing::info!(id, title = %product.title, "Product inserted");

    Ok((
        StatusCode::CREATED,
        Json(ProductCreated {
            message: "Product created successfully",
            product,
        }),
    ))
}

/// DELETE /products/{id} - delete a product
async fn delete_product(
    State(state): State<AppState>,
    ValidProductId(id): ValidProductId,
) -> Result<Json<MessageResponse>, ApiError> {
    let not_found = || ApiError::NotFound {
        resource: "Product",
        id: id.to_string(),
    };

    // Non-numeric ids cannot match a row.
    let key = id.key().ok_or_else(not_found)?;

    let affected = state
        .products()
        .delete(key)
        .await
        .map_err(|e| ApiError::database("Database delete failed", e))?;

    if affected == 0 {
        return Err(not_found());
    }
    tracing::info!(id = key, affected, "Product deleted");

    Ok(Json(MessageResponse {
        message: "Product deleted successfully",
    }))
}

/// Product routes
///
/// `DELETE /products` and `DELETE /products/` are routed too, so a missing id
/// gets a JSON 400 instead of a bare 405/404.
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/products",
            get(list_products).post(create_product).delete(delete_product),
        )
        .route("/products/", delete(delete_product))
        .route("/products/{id}", delete(delete_product))
}
