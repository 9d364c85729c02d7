//! In-memory stores for handler tests

use std::sync::Mutex;

use async_trait::async_trait;

use super::{DbError, ProductStore};
use crate::models::{NewProduct, Product};

/// Vec-backed store with auto-increment ids
#[derive(Default)]
pub struct MemoryStore {
    rows: Mutex<Vec<Product>>,
    next_id: Mutex<i64>,
}

impl MemoryStore {
    pub fn rows(&self) -> Vec<Product> {
        self.rows.lock().unwrap().clone()
    }
}

#[async_trait]
impl ProductStore for MemoryStore {
    async fn list(&self) -> Result<Vec<Product>, DbError> {
        Ok(self.rows())
    }

    async fn insert(&self, product: &NewProduct) -> Result<u64, DbError> {
        let mut next_id = self.next_id.lock().unwrap();
        *next_id += 1;
        let id = *next_id;

        self.rows.lock().unwrap().push(Product {
            id,
            title: product.title.clone(),
            price: product.price,
            description: product.description.clone(),
            category: product.category.clone(),
            image: product.image.clone(),
            rating_rate: product.rating_rate,
            rating_count: product.rating_count,
        });
        Ok(id as u64)
    }

    async fn delete(&self, id: i64) -> Result<u64, DbError> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|p| p.id != id);
        Ok((before - rows.len()) as u64)
    }

    async fn ping(&self) -> Result<(), DbError> {
        Ok(())
    }
}

/// Store whose every call fails like a dead database
pub struct FailingStore;

fn pool_timeout() -> DbError {
    DbError::Sqlx(sqlx::Error::PoolTimedOut)
}

#[async_trait]
impl ProductStore for FailingStore {
    async fn list(&self) -> Result<Vec<Product>, DbError> {
        Err(pool_timeout())
    }

    async fn insert(&self, _product: &NewProduct) -> Result<u64, DbError> {
        Err(pool_timeout())
    }

    async fn delete(&self, _id: i64) -> Result<u64, DbError> {
        Err(pool_timeout())
    }

    async fn ping(&self) -> Result<(), DbError> {
        Err(pool_timeout())
    }
}
