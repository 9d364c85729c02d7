//! Product repository
//!
//! Three statements, all parameterized:
//! - list: SELECT every row
//! - insert: INSERT one row, returning the generated id
//! - delete: DELETE by id, returning the affected row count

use async_trait::async_trait;
use sqlx::MySqlPool;

use super::DbError;
use crate::models::{NewProduct, Product};

/// Persistence operations the HTTP layer depends on
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// Every stored product.
    async fn list(&self) -> Result<Vec<Product>, DbError>;

    /// Insert one product, returning the id assigned by the store.
    async fn insert(&self, product: &NewProduct) -> Result<u64, DbError>;

    /// Delete by id, returning the number of rows removed.
    async fn delete(&self, id: i64) -> Result<u64, DbError>;

    /// Round-trip to the store; used by the health check.
    async fn ping(&self) -> Result<(), DbError>;
}

/// MySQL-backed product repository
#[derive(Clone)]
pub struct ProductRepo {
    pool: MySqlPool,
}

impl ProductRepo {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    #[cfg(test)]
    pub(crate) fn pool(&self) -> &MySqlPool {
        &self.pool
    }
}

#[async_trait]
impl ProductStore for ProductRepo {
    async fn list(&self) -> Result<Vec<Product>, DbError> {
        let products = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, title, price, description, category, image, rating_rate, rating_count
            FROM products
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(products)
    }

    async fn insert(&self, product: &NewProduct) -> Result<u64, DbError> {
        let result = sqlx::query(
            r#"
            INSERT INTO products (title, price, description, category, image, rating_rate, rating_count)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&product.title)
        .bind(product.price)
        .bind(&product.description)
        .bind(&product.category)
        .bind(&product.image)
        .bind(product.rating_rate)
        .bind(product.rating_count)
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_id())
    }

    async fn delete(&self, id: i64) -> Result<u64, DbError> {
        let result = sqlx::query("DELETE FROM products WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    async fn ping(&self) -> Result<(), DbError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
