//! Generic in-memory Domain Store.
//!
//! Each collection (customers, items, orders) is owned by one [`CollectionActor`] running on
//! its own Tokio task. Requests are processed one at a time, which gives the single-writer
//! guarantee the store needs without any locking.
//!
//! # Main Components
//!
//! - [`Record`] - Trait that stored types implement
//! - [`CollectionActor`] - Generic actor that owns one ordered collection
//! - [`CollectionClient`] - Typed, cloneable handle for talking to an actor
//! - [`Registry`] - Shared `get`/`delete`/`list`/`count` for typed registry clients
//! - [`StoreError`] - Plumbing errors plus boxed record errors
//!
//! # Testing
//!
//! See the [`mock`] module for driving clients without spawning actors.

pub mod actor;
pub mod client;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod registry;

pub use actor::CollectionActor;
pub use client::CollectionClient;
pub use entity::Record;
pub use error::StoreError;
pub use message::{CollectionRequest, Response};
pub use registry::Registry;
