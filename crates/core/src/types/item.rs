//! Catalog item types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::id::ItemId;

/// The name/price/quantity triple describing a grocery item.
///
/// Used as the body of add/update requests and as the embedded line
/// snapshot inside an [`Order`](super::order::Order). No range or currency
/// constraints are applied: negative prices and quantities are stored as-is.
/// Price is a double, so any finite JSON number round-trips unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemFields {
    /// Free-form display label.
    pub name: String,
    /// Unit price.
    pub price: f64,
    /// Count on hand (catalog) or count ordered (order line).
    pub quantity: i32,
}

impl ItemFields {
    /// Create a new set of item fields.
    #[must_use]
    pub fn new(name: impl Into<String>, price: f64, quantity: i32) -> Self {
        Self {
            name: name.into(),
            price,
            quantity,
        }
    }
}

/// A grocery item stored in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroceryItem {
    /// Identity assigned by the store on creation.
    pub id: ItemId,
    pub name: String,
    pub price: f64,
    pub quantity: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
