//! # System Lifecycle
//!
//! Starting, wiring and stopping the collection actors.
//!
//! [`PosSystem::with_config`] creates each actor with its client, then spawns it with its
//! context: `()` for the registries and the shared [`Clock`](crate::clock::Clock) for the
//! order book. [`PosSystem::shutdown`] drops the clients so every actor's channel closes,
//! then awaits the tasks.

mod config;
mod pos_system;
mod tracing;

pub use config::{ConfigError, PosConfig, CHANNEL_BUFFER_VAR};
pub use pos_system::PosSystem;
pub use self::tracing::setup_tracing;
