//! # Order Composer Session
//!
//! One in-progress cart. The session itself is plain owned state (`&mut self` methods);
//! only the lookups and the final placement go through the collection clients.

use super::cart::{CartSnapshot, CustomerContact, SelectedItem, SessionState};
use super::error::ComposerError;
use crate::clients::{CustomerClient, ItemClient, OrderClient};
use crate::framework::Registry;
use crate::model::{lines_total, CustomerId, ItemId, Order, OrderCreate, OrderLine};
use tracing::{debug, info, instrument, warn};

/// A cart being assembled against a chosen customer.
///
/// Every operation either succeeds completely or leaves the session as it was.
pub struct OrderComposer {
    customers: CustomerClient,
    items: ItemClient,
    orders: OrderClient,
    selected_customer: Option<CustomerId>,
    selected_item: Option<SelectedItem>,
    lines: Vec<OrderLine>,
}

impl OrderComposer {
    pub fn new(customers: CustomerClient, items: ItemClient, orders: OrderClient) -> Self {
        Self {
            customers,
            items,
            orders,
            selected_customer: None,
            selected_item: None,
            lines: Vec::new(),
        }
    }

    pub fn state(&self) -> SessionState {
        if !self.lines.is_empty() {
            SessionState::HasLines
        } else if self.selected_customer.is_some() {
            SessionState::CustomerChosen
        } else {
            SessionState::Empty
        }
    }

    pub fn selected_customer(&self) -> Option<CustomerId> {
        self.selected_customer
    }

    pub fn selected_item(&self) -> Option<&SelectedItem> {
        self.selected_item.as_ref()
    }

    pub fn lines(&self) -> &[OrderLine] {
        &self.lines
    }

    /// Exact running total of the cart.
    pub fn total(&self) -> f64 {
        lines_total(&self.lines)
    }

    pub fn snapshot(&self) -> CartSnapshot {
        CartSnapshot::new(&self.lines)
    }

    /// Choose the customer the order is for.
    #[instrument(skip(self))]
    pub async fn select_customer(&mut self, id: CustomerId) -> Result<CustomerContact, ComposerError> {
        let customer = self
            .customers
            .get(id)
            .await?
            .ok_or_else(|| ComposerError::NotFound(format!("customer {id}")))?;

        self.selected_customer = Some(id);
        info!(customer_id = %id, "Customer selected");
        Ok(customer.into())
    }

    /// Choose the item for the next line. Records its price and stock as of now.
    #[instrument(skip(self))]
    pub async fn select_item(&mut self, id: ItemId) -> Result<SelectedItem, ComposerError> {
        let item = self
            .items
            .get(id)
            .await?
            .ok_or_else(|| ComposerError::NotFound(format!("item {id}")))?;

        let selected = SelectedItem::from(item);
        debug!(?selected, "Item selected");
        self.selected_item = Some(selected.clone());
        Ok(selected)
    }

    /// Append a line for the selected item.
    ///
    /// `qty` is taken as a signed integer so zero and negative input from a form can be
    /// rejected here rather than by the caller. Stock is checked against the item's
    /// current level, and the line uses the item's current price.
    ///
    /// # Errors
    /// - `Validation` when no item is selected or `qty <= 0`
    /// - `InsufficientStock` when `qty` exceeds the recorded stock
    /// - `NotFound` when the item was deleted after being selected
    #[instrument(skip(self))]
    pub async fn add_line(&mut self, qty: i64) -> Result<CartSnapshot, ComposerError> {
        let Some(item) = &self.selected_item else {
            return Err(ComposerError::Validation("no item selected".into()));
        };
        if qty <= 0 {
            return Err(ComposerError::Validation(format!(
                "quantity must be a positive integer, got {qty}"
            )));
        }
        let item_id = item.id;
        let qty = u32::try_from(qty).map_err(|_| ComposerError::InsufficientStock {
            requested: u32::MAX,
            available: item.available,
        })?;

        let unit_price = self.items.check_availability(item_id, qty).await?;
        let order_id = self.orders.next_order_id().await?;

        let line = OrderLine {
            line_id: self.lines.len() as u32 + 1,
            order_id,
            item_id,
            qty,
            unit_price,
        };
        info!(line_id = line.line_id, item_id = %item_id, qty, unit_price, "Line added");
        self.lines.push(line);
        Ok(self.snapshot())
    }

    /// Remove a line. Remaining lines are renumbered `1..=n` in order.
    #[instrument(skip(self))]
    pub fn remove_line(&mut self, line_id: u32) -> Result<CartSnapshot, ComposerError> {
        let Some(idx) = self.lines.iter().position(|line| line.line_id == line_id) else {
            warn!(line_id, "Line not in cart");
            return Err(ComposerError::NotFound(format!("line {line_id}")));
        };

        self.lines.remove(idx);
        for (n, line) in self.lines.iter_mut().enumerate() {
            line.line_id = n as u32 + 1;
        }
        info!(line_id, remaining = self.lines.len(), "Line removed");
        Ok(self.snapshot())
    }

    /// Empty the cart and forget the selected item. The chosen customer is kept.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.selected_item = None;
        debug!("Cart cleared");
    }

    /// Store the cart as an order for the selected customer and start a fresh cart.
    ///
    /// Stock levels are not changed.
    #[instrument(skip(self), fields(lines = self.lines.len()))]
    pub async fn place_order(&mut self) -> Result<Order, ComposerError> {
        let Some(customer_id) = self.selected_customer else {
            return Err(ComposerError::Validation("no customer selected".into()));
        };
        if self.lines.is_empty() {
            return Err(ComposerError::Validation("cart is empty".into()));
        }

        let order = self
            .orders
            .place(OrderCreate {
                customer_id,
                lines: self.lines.clone(),
            })
            .await?;

        info!(order_id = %order.id, total = order.total(), "Order placed");
        self.clear();
        Ok(order)
    }
}
