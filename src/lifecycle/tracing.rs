//! # Observability
//!
//! [`setup_tracing`] installs a `tracing-subscriber` formatter filtered by `RUST_LOG`.
//!
//! ```bash
//! RUST_LOG=info cargo run     # state changes: Created, Deleted, Line added, Order placed
//! RUST_LOG=debug cargo run    # plus request payloads and lookups
//! RUST_LOG=pos_core::composer=debug,info cargo run
//! ```
//!
//! Collection actors tag every event with `entity_type` (`Customer`, `Item`, `Order`) and
//! the record id, so module paths are left out of the output:
//!
//! ```text
//! INFO Created entity_type="Customer" id=1 size=1
//! INFO place_order{lines=2}: Created entity_type="Order" id=1 size=1
//! WARN add_line{qty=6}: Action failed entity_type="Item" id=1 error=Insufficient stock: requested 6, available 5
//! ```

/// Initialise the global subscriber. Call once, at program start.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
