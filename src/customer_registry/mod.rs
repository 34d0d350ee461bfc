//! # Customer Registry
//!
//! CRUD over the customer collection.
//!
//! ## Structure
//!
//! - [`entity`] - [`Record`](crate::framework::Record) implementation for [`Customer`]
//! - [`error`] - [`CustomerError`]
//! - [`new()`] - Factory that creates the collection actor and its [`CustomerClient`]
//!
//! ## Usage
//!
//! ```rust
//! use pos_core::customer_registry;
//! use pos_core::framework::Registry;
//! use pos_core::model::CustomerFields;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, client) = customer_registry::new(32);
//!     tokio::spawn(actor.run(()));
//!
//!     let alice = client
//!         .create_customer(CustomerFields::new("Alice", "1 Rd", "N1", "0770000000", "a@x.com"))
//!         .await?;
//!     assert_eq!(alice.id.0, 1);
//!     assert_eq!(client.count().await?, 1);
//!     Ok(())
//! }
//! ```
//!
//! Deleting a customer does not touch orders that reference it; order history shows
//! such orders under "Unknown".

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::CustomerClient;
use crate::framework::CollectionActor;
use crate::model::Customer;

/// Creates a new Customer collection actor and its client.
pub fn new(buffer_size: usize) -> (CollectionActor<Customer>, CustomerClient) {
    let (actor, generic_client) = CollectionActor::new(buffer_size);
    (actor, CustomerClient::new(generic_client))
}
