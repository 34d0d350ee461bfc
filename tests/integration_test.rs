use pos_core::clock::FixedClock;
use pos_core::customer_registry::CustomerError;
use pos_core::framework::Registry;
use pos_core::item_registry::ItemError;
use pos_core::lifecycle::{PosConfig, PosSystem};
use pos_core::model::{CustomerFields, CustomerId, ItemDraft, ItemId};
use std::sync::Arc;

fn customer(name: &str) -> CustomerFields {
    CustomerFields::new(
        name,
        "12 Harbour Rd",
        "901234567V",
        "0771234567",
        format!("{}@example.com", name.to_lowercase()),
    )
}

fn system() -> PosSystem {
    let now = chrono::Utc::now();
    PosSystem::with_config(PosConfig::default(), Arc::new(FixedClock(now)))
}

/// Registries against real actors: ids, listing order, validation.
#[tokio::test]
async fn test_customer_registry_lifecycle() {
    let system = system();
    let customers = &system.customer_client;

    let alice = customers.create_customer(customer("Alice")).await.unwrap();
    let bob = customers.create_customer(customer("Bob")).await.unwrap();
    assert_eq!((alice.id, bob.id), (CustomerId(1), CustomerId(2)));

    customers.delete(CustomerId(1)).await.unwrap();
    let remaining: Vec<_> = customers
        .list()
        .await
        .unwrap()
        .into_iter()
        .map(|c| (c.id, c.name))
        .collect();
    assert_eq!(remaining, vec![(CustomerId(2), "Bob".to_string())]);

    // Highest id is 2, so the next customer gets 3
    let carol = customers.create_customer(customer("Carol")).await.unwrap();
    assert_eq!(carol.id, CustomerId(3));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_customer_validation_lists_missing_fields() {
    let system = system();

    let err = system
        .customer_client
        .create_customer(CustomerFields::new("Dan", "", "N9", "  ", "dan@example.com"))
        .await
        .unwrap_err();

    assert_eq!(
        err,
        CustomerError::Validation {
            missing: vec!["address", "mobile"]
        }
    );
    assert_eq!(system.customer_client.count().await.unwrap(), 0);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_customer_update_replaces_record() {
    let system = system();
    let customers = &system.customer_client;
    customers.create_customer(customer("Alice")).await.unwrap();

    let updated = customers
        .update_customer(
            CustomerId(1),
            CustomerFields::new("Alice B", "9 Hill St", "N2", "0719999999", "ab@example.com"),
        )
        .await
        .unwrap();
    assert_eq!(updated.id, CustomerId(1));
    assert_eq!(updated.address, "9 Hill St");

    assert_eq!(
        customers
            .update_customer(CustomerId(42), customer("Nobody"))
            .await,
        Err(CustomerError::NotFound("42".into()))
    );
    assert_eq!(
        customers.delete(CustomerId(42)).await,
        Err(CustomerError::NotFound("42".into()))
    );

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_item_registry_parses_and_validates() {
    let system = system();
    let items = &system.item_client;

    let pen = items
        .create_item(ItemDraft::new("Pen", "1.50", "10", "blue"))
        .await
        .unwrap();
    assert_eq!(pen.id, ItemId(1));
    assert_eq!(pen.price, 1.5);
    assert_eq!(pen.qty, 10);

    let err = items
        .create_item(ItemDraft::new("Bad", "abc", "5", "x"))
        .await
        .unwrap_err();
    assert_eq!(err, ItemError::Validation { fields: vec!["price"] });
    assert_eq!(items.count().await.unwrap(), 1);

    // A rejected update leaves the stored item as it was
    assert!(items
        .update_item(pen.id, ItemDraft::new("Pen", "1.50", "lots", "blue"))
        .await
        .is_err());
    assert_eq!(items.get(pen.id).await.unwrap().unwrap(), pen);

    let repriced = items
        .update_item(pen.id, ItemDraft::new("Pen", "2", "8", "blue"))
        .await
        .unwrap();
    assert_eq!((repriced.price, repriced.qty), (2.0, 8));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_stock_checks_against_recorded_level() {
    let system = system();
    let items = &system.item_client;
    let pen = items
        .create_item(ItemDraft::new("Pen", "1.50", "10", "blue"))
        .await
        .unwrap();

    assert_eq!(items.check_availability(pen.id, 10).await.unwrap(), 1.5);
    assert_eq!(
        items.check_availability(pen.id, 11).await,
        Err(ItemError::InsufficientStock {
            requested: 11,
            available: 10
        })
    );
    assert_eq!(
        items.check_stock(ItemId(99)).await,
        Err(ItemError::NotFound("99".into()))
    );

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_dashboard_counts() {
    let system = system();
    system
        .customer_client
        .create_customer(customer("Alice"))
        .await
        .unwrap();
    for name in ["Pen", "Ink"] {
        system
            .item_client
            .create_item(ItemDraft::new(name, "1", "1", "stationery"))
            .await
            .unwrap();
    }

    let reports = system.reports();
    let summary = reports.dashboard().await.unwrap();
    assert_eq!((summary.customers, summary.items, summary.orders_today), (1, 2, 0));

    drop(reports);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_shutdown_completes() {
    let system = PosSystem::new();
    system
        .customer_client
        .create_customer(customer("Alice"))
        .await
        .unwrap();
    assert!(system.shutdown().await.is_ok());
}
