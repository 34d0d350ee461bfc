use super::PosConfig;
use crate::clients::{CustomerClient, ItemClient, OrderClient};
use crate::clock::{SharedClock, SystemClock};
use crate::composer::OrderComposer;
use crate::reporting::OrderReports;
use std::sync::Arc;
use tracing::{error, info};

/// The running point-of-sale core: one actor per collection plus the clock.
///
/// ```rust
/// use pos_core::lifecycle::PosSystem;
/// use pos_core::model::CustomerFields;
///
/// #[tokio::main]
/// async fn main() -> Result<(), String> {
///     let system = PosSystem::new();
///     let alice = system
///         .customer_client
///         .create_customer(CustomerFields::new("Alice", "1 Rd", "N1", "077", "a@x.com"))
///         .await
///         .map_err(|e| e.to_string())?;
///     assert_eq!(alice.id.0, 1);
///
///     system.shutdown().await
/// }
/// ```
///
/// Composers and report handles hold client clones. Drop them before calling
/// [`shutdown`](Self::shutdown), otherwise the actors never see their channels close.
pub struct PosSystem {
    pub customer_client: CustomerClient,
    pub item_client: ItemClient,
    pub order_client: OrderClient,
    clock: SharedClock,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl Default for PosSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl PosSystem {
    /// Starts the system with default settings and the wall clock.
    pub fn new() -> Self {
        Self::with_config(PosConfig::default(), Arc::new(SystemClock))
    }

    /// Starts the three collection actors. Must be called inside a Tokio runtime.
    pub fn with_config(config: PosConfig, clock: SharedClock) -> Self {
        let (customer_actor, customer_client) =
            crate::customer_registry::new(config.channel_buffer);
        let (item_actor, item_client) = crate::item_registry::new(config.channel_buffer);
        let (order_actor, order_client) = crate::order_book::new(config.channel_buffer);

        let customer_handle = tokio::spawn(customer_actor.run(()));
        let item_handle = tokio::spawn(item_actor.run(()));
        // Orders take the clock so placed_at is stamped inside the actor
        let order_handle = tokio::spawn(order_actor.run(clock.clone()));

        info!(channel_buffer = config.channel_buffer, "System started");
        Self {
            customer_client,
            item_client,
            order_client,
            clock,
            handles: vec![customer_handle, item_handle, order_handle],
        }
    }

    /// A fresh, empty cart session.
    pub fn composer(&self) -> OrderComposer {
        OrderComposer::new(
            self.customer_client.clone(),
            self.item_client.clone(),
            self.order_client.clone(),
        )
    }

    pub fn reports(&self) -> OrderReports {
        OrderReports::new(
            self.order_client.clone(),
            self.customer_client.clone(),
            self.item_client.clone(),
            self.clock.clone(),
        )
    }

    /// Drops the clients and waits for every actor to finish.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        drop(self.customer_client);
        drop(self.item_client);
        drop(self.order_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
