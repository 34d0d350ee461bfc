/// Represents an item in the catalog, with its stock level.
///
/// # Collection
/// This struct implements the [`Record`](crate::framework::Record) trait (see
/// [`item_registry`](crate::item_registry)). Its create and update payload is the raw
/// [`ItemDraft`], parsed into [`ItemFields`] by the registry.
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ItemId(pub u32);

impl From<u32> for ItemId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl From<ItemId> for u32 {
    fn from(id: ItemId) -> Self {
        id.0
    }
}

impl Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub price: f64,
    /// Available stock. Placing an order does not decrement it.
    pub qty: u32,
    pub description: String,
}

impl Item {
    pub fn new(id: ItemId, fields: ItemFields) -> Self {
        Self {
            id,
            name: fields.name,
            price: fields.price,
            qty: fields.qty,
            description: fields.description,
        }
    }
}

/// Item form as submitted: numeric fields are still text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemDraft {
    pub name: String,
    pub price: String,
    pub qty: String,
    pub description: String,
}

impl ItemDraft {
    pub fn new(
        name: impl Into<String>,
        price: impl Into<String>,
        qty: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            price: price.into(),
            qty: qty.into(),
            description: description.into(),
        }
    }
}

/// Validated item fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemFields {
    pub name: String,
    pub price: f64,
    pub qty: u32,
    pub description: String,
}

impl From<ItemFields> for ItemDraft {
    fn from(fields: ItemFields) -> Self {
        Self {
            name: fields.name,
            price: fields.price.to_string(),
            qty: fields.qty.to_string(),
            description: fields.description,
        }
    }
}
