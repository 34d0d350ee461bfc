//! Record trait implementation for [`Order`].
//!
//! Materialization stamps `placed_at` from the injected clock and rewrites every line's
//! `order_id` to the id the collection allocated. Orders have no update or action path.

use super::OrderError;
use crate::clock::SharedClock;
use crate::framework::Record;
use crate::model::{Order, OrderAction, OrderCreate, OrderId, OrderUpdate};

impl Record for Order {
    type Id = OrderId;
    type Create = OrderCreate;
    type Update = OrderUpdate;
    type Action = OrderAction;
    type ActionResult = ();
    type Context = SharedClock;
    type Error = OrderError;

    fn id(&self) -> OrderId {
        self.id
    }

    fn from_create_params(
        id: OrderId,
        params: OrderCreate,
        clock: &SharedClock,
    ) -> Result<Self, OrderError> {
        if params.lines.is_empty() {
            return Err(OrderError::Validation("an order needs at least one line".into()));
        }
        let lines = params
            .lines
            .into_iter()
            .map(|mut line| {
                line.order_id = id;
                line
            })
            .collect();

        Ok(Order {
            id,
            customer_id: params.customer_id,
            lines,
            placed_at: clock.now(),
        })
    }

    fn on_update(&mut self, update: OrderUpdate) -> Result<(), OrderError> {
        match update {}
    }

    fn handle_action(&mut self, action: OrderAction) -> Result<(), OrderError> {
        match action {}
    }
}
