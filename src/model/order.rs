/// Represents a placed order.
///
/// # Collection
/// This struct implements the [`Record`](crate::framework::Record) trait (see
/// [`order_book`](crate::order_book)). Orders are immutable: [`OrderUpdate`] and
/// [`OrderAction`] have no variants, so no update or action can ever be built.
use crate::model::{CustomerId, ItemId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct OrderId(pub u32);

impl From<u32> for OrderId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl From<OrderId> for u32 {
    fn from(id: OrderId) -> Self {
        id.0
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One item, quantity and unit price inside a cart or a placed order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    pub line_id: u32,
    pub order_id: OrderId,
    pub item_id: ItemId,
    pub qty: u32,
    pub unit_price: f64,
}

impl OrderLine {
    /// `qty * unit_price`, unrounded.
    pub fn subtotal(&self) -> f64 {
        f64::from(self.qty) * self.unit_price
    }
}

/// Sum of line subtotals, unrounded.
pub fn lines_total(lines: &[OrderLine]) -> f64 {
    lines
        .iter()
        .fold(0.0, |total, line| total + line.subtotal())
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub customer_id: CustomerId,
    pub lines: Vec<OrderLine>,
    pub placed_at: DateTime<Utc>,
}

impl Order {
    pub fn total(&self) -> f64 {
        lines_total(&self.lines)
    }
}

/// Payload for materializing a cart into an order.
#[derive(Debug, Clone)]
pub struct OrderCreate {
    pub customer_id: CustomerId,
    pub lines: Vec<OrderLine>,
}

/// Orders cannot be updated.
#[derive(Debug)]
pub enum OrderUpdate {}

/// Orders have no custom actions.
#[derive(Debug)]
pub enum OrderAction {}
