//! # Item Registry
//!
//! CRUD over the item catalog, plus stock checks as custom actions.
//!
//! ## Structure
//!
//! - [`entity`] - [`Record`](crate::framework::Record) implementation for [`Item`] and
//!   parsing of the raw [`ItemDraft`](crate::model::ItemDraft)
//! - [`error`] - [`ItemError`]
//! - [`actions`] - [`ItemAction`] and [`ItemActionResult`]
//! - [`new()`] - Factory that creates the collection actor and its [`ItemClient`]
//!
//! ## Usage
//!
//! ```rust
//! use pos_core::item_registry;
//! use pos_core::model::ItemDraft;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, client) = item_registry::new(32);
//!     tokio::spawn(actor.run(()));
//!
//!     let pen = client.create_item(ItemDraft::new("Pen", "1.50", "10", "blue")).await?;
//!     assert_eq!(pen.price, 1.5);
//!
//!     // 12 pens are more than the recorded stock
//!     assert!(client.check_availability(pen.id, 12).await.is_err());
//!     Ok(())
//! }
//! ```

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::ItemClient;
use crate::framework::CollectionActor;
use crate::model::Item;

/// Creates a new Item collection actor and its client.
pub fn new(buffer_size: usize) -> (CollectionActor<Item>, ItemClient) {
    let (actor, generic_client) = CollectionActor::new(buffer_size);
    (actor, ItemClient::new(generic_client))
}
