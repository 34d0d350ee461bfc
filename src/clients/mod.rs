//! Typed clients for the three collections.
//!
//! Each wraps a generic [`CollectionClient`](crate::framework::CollectionClient) and turns
//! [`StoreError`](crate::framework::StoreError) into its registry's own error type.

pub mod customer_client;
pub mod item_client;
pub mod order_client;

pub use customer_client::CustomerClient;
pub use item_client::ItemClient;
pub use order_client::OrderClient;
