//! Pure data structures for the point-of-sale store.
//!
//! The [`Record`](crate::framework::Record) implementations live next to each registry;
//! this module only holds the shapes and arithmetic.

pub mod amount;
pub mod customer;
pub mod item;
pub mod order;

pub use amount::*;
pub use customer::*;
pub use item::*;
pub use order::*;
