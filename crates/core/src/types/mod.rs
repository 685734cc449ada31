//! Core types for the grocery booking backend.
//!
//! This module provides type-safe wrappers for the catalog and order domain.

pub mod id;
pub mod item;
pub mod order;

pub use id::*;
pub use item::{GroceryItem, ItemFields};
pub use order::{NewOrder, Order};
