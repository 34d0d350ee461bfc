//! Values the composer hands back for display.

use crate::model::{format_amount, lines_total, round_to_cents, Customer, Item, ItemId, OrderLine};
use serde::Serialize;

/// Where a session stands. Derived from the selections and lines, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SessionState {
    /// No customer chosen and no lines.
    Empty,
    /// A customer is chosen, the cart is empty.
    CustomerChosen,
    /// At least one line is in the cart.
    HasLines,
}

/// Contact details shown after choosing a customer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CustomerContact {
    pub name: String,
    pub address: String,
    pub mobile: String,
    pub email: String,
}

impl From<Customer> for CustomerContact {
    fn from(customer: Customer) -> Self {
        Self {
            name: customer.name,
            address: customer.address,
            mobile: customer.mobile,
            email: customer.email,
        }
    }
}

/// The item currently picked for the next line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectedItem {
    pub id: ItemId,
    pub name: String,
    pub unit_price: f64,
    /// Stock level when the item was selected.
    pub available: u32,
}

impl From<Item> for SelectedItem {
    fn from(item: Item) -> Self {
        Self {
            id: item.id,
            name: item.name,
            unit_price: item.price,
            available: item.qty,
        }
    }
}

/// Cart contents after a change.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartSnapshot {
    pub lines: Vec<OrderLine>,
    /// Exact sum of `qty * unit_price`.
    pub total: f64,
}

impl CartSnapshot {
    pub fn new(lines: &[OrderLine]) -> Self {
        Self {
            lines: lines.to_vec(),
            total: lines_total(lines),
        }
    }

    /// Total rounded to cents.
    pub fn rounded_total(&self) -> f64 {
        round_to_cents(self.total)
    }

    /// Total formatted for display, e.g. `25.00`.
    pub fn display_total(&self) -> String {
        format_amount(self.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::OrderId;

    #[test]
    fn test_snapshot_keeps_exact_total() {
        let lines = vec![
            OrderLine {
                line_id: 1,
                order_id: OrderId(1),
                item_id: ItemId(1),
                qty: 3,
                unit_price: 0.1,
            },
            OrderLine {
                line_id: 2,
                order_id: OrderId(1),
                item_id: ItemId(2),
                qty: 1,
                unit_price: 2.005,
            },
        ];
        let snapshot = CartSnapshot::new(&lines);

        assert_eq!(snapshot.total, 0.1 * 3.0 + 2.005);
        assert_eq!(snapshot.display_total(), format_amount(snapshot.total));
        assert_eq!(snapshot.lines.len(), 2);
    }

    #[test]
    fn test_empty_snapshot() {
        let snapshot = CartSnapshot::new(&[]);
        assert_eq!(snapshot.total, 0.0);
        assert_eq!(snapshot.display_total(), "0.00");
    }
}
