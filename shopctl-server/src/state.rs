//! Application state shared across handlers

use std::sync::Arc;

use crate::db::ProductStore;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    products: Box<dyn ProductStore>,
}

impl AppState {
    pub fn new(products: impl ProductStore + 'static) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                products: Box::new(products),
            }),
        }
    }

    pub fn products(&self) -> &dyn ProductStore {
        self.inner.products.as_ref()
    }
}
