//! # Order Book
//!
//! The append-only collection of placed orders. Orders are created by the
//! [`OrderComposer`](crate::composer::OrderComposer) and never updated or deleted.
//!
//! ## Structure
//!
//! - [`entity`] - [`Record`](crate::framework::Record) implementation for [`Order`]
//! - [`error`] - [`OrderError`]
//! - [`new()`] - Factory that creates the collection actor and its [`OrderClient`]
//!
//! The actor's context is the [`Clock`](crate::clock::Clock) used to stamp `placed_at`:
//!
//! ```rust,ignore
//! let (actor, orders) = order_book::new(32);
//! tokio::spawn(actor.run(Arc::new(SystemClock)));
//! ```

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::OrderClient;
use crate::framework::CollectionActor;
use crate::model::Order;

/// Creates a new Order collection actor and its client.
pub fn new(buffer_size: usize) -> (CollectionActor<Order>, OrderClient) {
    let (actor, generic_client) = CollectionActor::new(buffer_size);
    (actor, OrderClient::new(generic_client))
}
