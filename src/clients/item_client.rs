//! # Item Client
//!
//! Provides the Item Registry API plus the stock checks used by the order composer.
use crate::framework::{CollectionClient, Registry, StoreError};
use crate::item_registry::{ItemAction, ItemActionResult, ItemError};
use crate::model::{Item, ItemDraft, ItemId};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for the item collection.
#[derive(Clone)]
pub struct ItemClient {
    inner: CollectionClient<Item>,
}

impl ItemClient {
    pub fn new(inner: CollectionClient<Item>) -> Self {
        Self { inner }
    }

    /// Parse, validate and store a new item.
    #[instrument(skip(self))]
    pub async fn create_item(&self, draft: ItemDraft) -> Result<Item, ItemError> {
        debug!("Sending request");
        self.inner.create(draft).await.map_err(Self::map_error)
    }

    /// Replace every field of an existing item.
    #[instrument(skip(self))]
    pub async fn update_item(&self, id: ItemId, draft: ItemDraft) -> Result<Item, ItemError> {
        debug!("Sending request");
        self.inner.update(id, draft).await.map_err(Self::map_error)
    }

    /// Current stock level of an item.
    #[instrument(skip(self))]
    pub async fn check_stock(&self, id: ItemId) -> Result<u32, ItemError> {
        debug!("Checking stock");
        match self
            .inner
            .perform_action(id, ItemAction::CheckStock)
            .await
            .map_err(Self::map_error)?
        {
            ItemActionResult::CheckStock(level) => Ok(level),
            other => unreachable!("CheckStock answered with {other:?}"),
        }
    }

    /// Confirm `qty` units are in stock and return the current unit price.
    #[instrument(skip(self))]
    pub async fn check_availability(&self, id: ItemId, qty: u32) -> Result<f64, ItemError> {
        debug!("Checking availability");
        match self
            .inner
            .perform_action(id, ItemAction::CheckAvailability(qty))
            .await
            .map_err(Self::map_error)?
        {
            ItemActionResult::CheckAvailability(unit_price) => Ok(unit_price),
            other => unreachable!("CheckAvailability answered with {other:?}"),
        }
    }
}

#[async_trait]
impl Registry<Item> for ItemClient {
    type Error = ItemError;

    fn inner(&self) -> &CollectionClient<Item> {
        &self.inner
    }

    fn map_error(e: StoreError) -> ItemError {
        match e {
            StoreError::NotFound(id) => ItemError::NotFound(id),
            other => other
                .downcast_record::<ItemError>()
                .unwrap_or_else(|e| ItemError::Communication(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::{create_mock_client, expect_action};

    #[tokio::test]
    async fn test_check_availability_sends_requested_quantity() {
        let (client, mut receiver) = create_mock_client::<Item>(10);
        let items = ItemClient::new(client);

        let task = tokio::spawn(async move { items.check_availability(ItemId(1), 3).await });

        let (id, action, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        assert_eq!(id, ItemId(1));
        assert!(matches!(action, ItemAction::CheckAvailability(3)));
        responder
            .send(Ok(ItemActionResult::CheckAvailability(4.25)))
            .unwrap();

        assert_eq!(task.await.unwrap().unwrap(), 4.25);
    }

    #[tokio::test]
    async fn test_insufficient_stock_is_recovered_from_record_error() {
        let (client, mut receiver) = create_mock_client::<Item>(10);
        let items = ItemClient::new(client);

        let task = tokio::spawn(async move { items.check_availability(ItemId(2), 50).await });

        let (_, _, responder) = expect_action(&mut receiver).await.unwrap();
        responder
            .send(Err(StoreError::Record(Box::new(ItemError::InsufficientStock {
                requested: 50,
                available: 7,
            }))))
            .unwrap();

        assert_eq!(
            task.await.unwrap(),
            Err(ItemError::InsufficientStock {
                requested: 50,
                available: 7
            })
        );
    }

    #[tokio::test]
    async fn test_check_stock_reports_level() {
        let (client, mut receiver) = create_mock_client::<Item>(10);
        let items = ItemClient::new(client);

        let task = tokio::spawn(async move { items.check_stock(ItemId(1)).await });

        let (_, action, responder) = expect_action(&mut receiver).await.unwrap();
        assert!(matches!(action, ItemAction::CheckStock));
        responder.send(Ok(ItemActionResult::CheckStock(42))).unwrap();

        assert_eq!(task.await.unwrap().unwrap(), 42);
    }
}
