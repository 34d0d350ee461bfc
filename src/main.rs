//! Scripted till session: registers a customer and two items, rings up an order and
//! prints the reports. Run with `RUST_LOG=info` to watch the actors work.

use pos_core::clock::SystemClock;
use pos_core::lifecycle::{setup_tracing, PosConfig, PosSystem};
use pos_core::model::{format_amount, CustomerFields, ItemDraft};
use std::sync::Arc;
use tracing::{info, warn, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let config = PosConfig::from_env().map_err(|e| e.to_string())?;
    let system = PosSystem::with_config(config, Arc::new(SystemClock));

    let span = tracing::info_span!("catalog_setup");
    let (alice, widget, gadget) = async {
        let alice = system
            .customer_client
            .create_customer(CustomerFields::new(
                "Alice",
                "12 Harbour Rd",
                "901234567V",
                "0771234567",
                "alice@example.com",
            ))
            .await
            .map_err(|e| e.to_string())?;
        let widget = system
            .item_client
            .create_item(ItemDraft::new("Widget", "10.00", "5", "Standard widget"))
            .await
            .map_err(|e| e.to_string())?;
        let gadget = system
            .item_client
            .create_item(ItemDraft::new("Gadget", "5", "3", "Pocket gadget"))
            .await
            .map_err(|e| e.to_string())?;
        Ok::<_, String>((alice, widget, gadget))
    }
    .instrument(span)
    .await?;
    info!(customer_id = %alice.id, widget = %widget.id, gadget = %gadget.id, "Catalog ready");

    let mut composer = system.composer();
    let span = tracing::info_span!("checkout");
    let order = async {
        let contact = composer.select_customer(alice.id).await?;
        info!(address = %contact.address, "Ringing up for {}", contact.name);

        composer.select_item(widget.id).await?;
        composer.add_line(2).await?;

        composer.select_item(gadget.id).await?;
        if let Err(e) = composer.add_line(10).await {
            warn!(error = %e, "Line rejected");
        }
        let cart = composer.add_line(1).await?;
        info!(lines = cart.lines.len(), total = %cart.display_total(), "Cart ready");

        composer.place_order().await
    }
    .instrument(span)
    .await
    .map_err(|e| e.to_string())?;
    info!(order_id = %order.id, total = %format_amount(order.total()), "Order placed");

    let reports = system.reports();
    let today = reports
        .orders_placed_today()
        .await
        .map_err(|e| e.to_string())?;
    info!(today, "Orders placed today");
    for row in reports.order_history().await.map_err(|e| e.to_string())? {
        info!(
            order_id = %row.order_id,
            date = %row.date,
            customer = %row.customer_name,
            total = %format_amount(row.total),
            "History"
        );
    }

    drop(composer);
    drop(reports);
    system.shutdown().await?;

    info!("Session complete");
    Ok(())
}
