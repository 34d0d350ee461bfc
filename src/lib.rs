//! # POS Core
//!
//! An in-memory point-of-sale core: customer and item registries, an order composer that
//! builds a cart against them, the order book it places into, and a few reports.
//!
//! ## Design
//!
//! ### One actor per collection
//! Customers, items and orders each live in a [`CollectionActor`](framework::CollectionActor)
//! running on its own Tokio task. The actor owns its `Vec` outright and handles one request
//! at a time, so there are no locks and every write is serialized. Callers talk to it
//! through cloneable clients.
//!
//! ### Typed errors end to end
//! Each registry has its own `thiserror` enum. The actor carries record errors boxed in
//! [`StoreError::Record`](framework::StoreError::Record) and the typed clients downcast them
//! back, so `InsufficientStock { requested, available }` reaches the composer intact.
//!
//! ### Context injection
//! Dependencies are handed to an actor when it starts (`run(context)`), not when it is
//! built. The order book receives the [`Clock`](clock::Clock) this way, which lets tests
//! pin "today".
//!
//! ## Module Tour
//!
//! - [`framework`]: the generic collection actor, its client, the [`Registry`](framework::Registry)
//!   trait and [`mock`](framework::mock) test helpers.
//! - [`model`]: plain data: [`Customer`](model::Customer), [`Item`](model::Item),
//!   [`Order`](model::Order), money formatting.
//! - [`customer_registry`], [`item_registry`], [`order_book`]: the `Record` implementations,
//!   validation and per-collection errors.
//! - [`clients`]: typed handles for each collection.
//! - [`composer`]: the cart session.
//! - [`reporting`]: orders placed today, order history.
//! - [`lifecycle`]: [`PosSystem`](lifecycle::PosSystem) start-up and shutdown, config, tracing.
//!
//! ## Running the Demo
//!
//! ```bash
//! RUST_LOG=info cargo run
//! ```

pub mod clients;
pub mod clock;
pub mod composer;
pub mod customer_registry;
pub mod framework;
pub mod item_registry;
pub mod lifecycle;
pub mod model;
pub mod order_book;
pub mod reporting;
