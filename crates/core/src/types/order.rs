//! Order types.
//!
//! An order embeds copies of the submitted item lines. Nothing ties those
//! lines back to catalog identities, so later catalog edits never touch
//! placed orders.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::id::OrderId;
use super::item::ItemFields;

/// Request to place an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOrder {
    /// Opaque caller-supplied user identifier.
    pub user_id: String,
    /// Line items exactly as submitted.
    pub items: Vec<ItemFields>,
}

/// A placed order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub user_id: String,
    pub items: Vec<ItemFields>,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_new_order_uses_camel_case_user_id() {
        let order: NewOrder = serde_json::from_value(json!({
            "userId": "u1",
            "items": [{"name": "Milk", "price": 3.5, "quantity": 2}]
        }))
        .unwrap();

        assert_eq!(order.user_id, "u1");
        assert_eq!(
            order.items,
            vec![ItemFields::new("Milk", 3.5, 2)]
        );
    }

    #[test]
    fn test_new_order_requires_user_id() {
        let result: Result<NewOrder, _> = serde_json::from_value(json!({"items": []}));
        assert!(result.is_err());
    }

    #[test]
    fn test_order_serializes_embedded_items() {
        let order = Order {
            id: OrderId::new(9),
            user_id: "u1".to_string(),
            items: vec![ItemFields::new("Milk", 3.5, 2)],
            created_at: Utc::now(),
        };

        let value = serde_json::to_value(&order).unwrap();
        assert_eq!(value["id"], 9);
        assert_eq!(value["userId"], "u1");
        assert_eq!(
            value["items"],
            json!([{"name": "Milk", "price": 3.5, "quantity": 2}])
        );
    }
}
