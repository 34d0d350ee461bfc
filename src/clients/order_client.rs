//! # Order Client
//!
//! Read access to placed orders, plus the materialization call used by the composer.
//! Orders have no update or delete.
use crate::framework::{CollectionClient, StoreError};
use crate::model::{Order, OrderCreate, OrderId};
use crate::order_book::OrderError;
use tracing::{debug, info, instrument};

/// Client for the order collection.
#[derive(Clone)]
pub struct OrderClient {
    inner: CollectionClient<Order>,
}

impl OrderClient {
    pub fn new(inner: CollectionClient<Order>) -> Self {
        Self { inner }
    }

    fn map_error(e: StoreError) -> OrderError {
        match e {
            StoreError::NotFound(id) => OrderError::NotFound(id),
            other => other
                .downcast_record::<OrderError>()
                .unwrap_or_else(|e| OrderError::Communication(e.to_string())),
        }
    }

    /// Store a new order built from cart lines.
    #[instrument(skip(self, params), fields(customer_id = %params.customer_id, lines = params.lines.len()))]
    pub async fn place(&self, params: OrderCreate) -> Result<Order, OrderError> {
        debug!(?params, "place called");
        let order = self.inner.create(params).await.map_err(Self::map_error)?;
        info!(order_id = %order.id, "Order stored");
        Ok(order)
    }

    /// The id the next placed order will receive.
    pub async fn next_order_id(&self) -> Result<OrderId, OrderError> {
        self.inner.next_id().await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: OrderId) -> Result<Option<Order>, OrderError> {
        self.inner.get(id).await.map_err(Self::map_error)
    }

    /// All orders in placement order.
    pub async fn list(&self) -> Result<Vec<Order>, OrderError> {
        self.inner.list().await.map_err(Self::map_error)
    }
}
