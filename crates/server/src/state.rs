//! Application state shared across handlers.

use std::sync::Arc;

use crate::db::GroceryStore;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and carries the store client
/// constructed at startup.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    store: Arc<dyn GroceryStore>,
}

impl AppState {
    /// Create a new application state around a store client.
    #[must_use]
    pub fn new(store: Arc<dyn GroceryStore>) -> Self {
        Self {
            inner: Arc::new(AppStateInner { store }),
        }
    }

    /// Get a reference to the store client.
    #[must_use]
    pub fn store(&self) -> &dyn GroceryStore {
        self.inner.store.as_ref()
    }
}
