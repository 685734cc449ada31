//! In-process store with the same semantics as [`PgStore`](super::PgStore).
//!
//! Identities are assigned from a counter starting at 1 and are never reused,
//! matching a `SERIAL` column.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use grocery_core::{GroceryItem, ItemFields, ItemId, NewOrder, Order, OrderId};

use super::{GroceryStore, RepositoryError};

/// Catalog and orders held in memory.
#[derive(Default)]
pub struct MemoryStore {
    inner: RwLock<Collections>,
}

#[derive(Default)]
struct Collections {
    last_item_id: i32,
    last_order_id: i32,
    items: BTreeMap<ItemId, GroceryItem>,
    orders: Vec<Order>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every order placed so far.
    pub async fn orders(&self) -> Vec<Order> {
        self.inner.read().await.orders.clone()
    }
}

#[async_trait]
impl GroceryStore for MemoryStore {
    async fn create_item(&self, fields: &ItemFields) -> Result<GroceryItem, RepositoryError> {
        let mut inner = self.inner.write().await;
        inner.last_item_id += 1;

        let now = Utc::now();
        let item = GroceryItem {
            id: ItemId::new(inner.last_item_id),
            name: fields.name.clone(),
            price: fields.price,
            quantity: fields.quantity,
            created_at: now,
            updated_at: now,
        };
        inner.items.insert(item.id, item.clone());

        Ok(item)
    }

    async fn list_items(&self) -> Result<Vec<GroceryItem>, RepositoryError> {
        Ok(self.inner.read().await.items.values().cloned().collect())
    }

    async fn update_item(&self, id: ItemId, fields: &ItemFields) -> Result<bool, RepositoryError> {
        let mut inner = self.inner.write().await;
        let Some(item) = inner.items.get_mut(&id) else {
            return Ok(false);
        };

        item.name.clone_from(&fields.name);
        item.price = fields.price;
        item.quantity = fields.quantity;
        item.updated_at = Utc::now();

        Ok(true)
    }

    async fn delete_item(&self, id: ItemId) -> Result<bool, RepositoryError> {
        Ok(self.inner.write().await.items.remove(&id).is_some())
    }

    async fn create_order(&self, order: &NewOrder) -> Result<Order, RepositoryError> {
        let mut inner = self.inner.write().await;
        inner.last_order_id += 1;

        let order = Order {
            id: OrderId::new(inner.last_order_id),
            user_id: order.user_id.clone(),
            items: order.items.clone(),
            created_at: Utc::now(),
        };
        inner.orders.push(order.clone());

        Ok(order)
    }

    async fn ping(&self) -> Result<(), RepositoryError> {
        Ok(())
    }

    async fn close(&self) {}
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn milk() -> ItemFields {
        ItemFields::new("Milk", 3.5, 10)
    }

    #[tokio::test]
    async fn test_create_assigns_increasing_ids() {
        let store = MemoryStore::new();

        let first = store.create_item(&milk()).await.unwrap();
        let second = store.create_item(&milk()).await.unwrap();

        assert_eq!(first.id, ItemId::new(1));
        assert_eq!(second.id, ItemId::new(2));
        assert_eq!(store.list_items().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_ids_not_reused_after_delete() {
        let store = MemoryStore::new();

        let first = store.create_item(&milk()).await.unwrap();
        assert!(store.delete_item(first.id).await.unwrap());
        let second = store.create_item(&milk()).await.unwrap();

        assert_ne!(first.id, second.id);
    }

    #[tokio::test]
    async fn test_update_replaces_fields() {
        let store = MemoryStore::new();
        let item = store.create_item(&milk()).await.unwrap();

        let bread = ItemFields::new("Bread", 2.49, 4);
        assert!(store.update_item(item.id, &bread).await.unwrap());

        let items = store.list_items().await.unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, item.id);
        assert_eq!(items[0].name, bread.name);
        assert!((items[0].price - bread.price).abs() < f64::EPSILON);
        assert_eq!(items[0].quantity, bread.quantity);
    }

    #[tokio::test]
    async fn test_missing_id_reports_no_match() {
        let store = MemoryStore::new();

        assert!(!store.update_item(ItemId::new(99), &milk()).await.unwrap());
        assert!(!store.delete_item(ItemId::new(99)).await.unwrap());
    }

    #[tokio::test]
    async fn test_order_keeps_lines_after_catalog_change() {
        let store = MemoryStore::new();
        let item = store.create_item(&milk()).await.unwrap();

        let order = store
            .create_order(&NewOrder {
                user_id: "u1".to_string(),
                items: vec![ItemFields::new("Milk", 3.5, 2)],
            })
            .await
            .unwrap();

        store.delete_item(item.id).await.unwrap();

        let orders = store.orders().await;
        assert_eq!(orders, vec![order]);
        assert_eq!(orders[0].items[0].quantity, 2);
    }
}
