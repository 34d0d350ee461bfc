//! # Customer Client
//!
//! Provides the Customer Registry API: `create_customer`, `update_customer`, and the
//! [`Registry`] operations `get`, `delete`, `list` and `count`.
use crate::customer_registry::CustomerError;
use crate::framework::{CollectionClient, Registry, StoreError};
use crate::model::{Customer, CustomerFields, CustomerId};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for the customer collection.
#[derive(Clone)]
pub struct CustomerClient {
    inner: CollectionClient<Customer>,
}

impl CustomerClient {
    pub fn new(inner: CollectionClient<Customer>) -> Self {
        Self { inner }
    }

    /// Validate and store a new customer. Returns the record with its allocated id.
    #[instrument(skip(self))]
    pub async fn create_customer(&self, fields: CustomerFields) -> Result<Customer, CustomerError> {
        debug!("Sending request");
        self.inner.create(fields).await.map_err(Self::map_error)
    }

    /// Replace every field of an existing customer.
    #[instrument(skip(self))]
    pub async fn update_customer(
        &self,
        id: CustomerId,
        fields: CustomerFields,
    ) -> Result<Customer, CustomerError> {
        debug!("Sending request");
        self.inner.update(id, fields).await.map_err(Self::map_error)
    }
}

#[async_trait]
impl Registry<Customer> for CustomerClient {
    type Error = CustomerError;

    fn inner(&self) -> &CollectionClient<Customer> {
        &self.inner
    }

    fn map_error(e: StoreError) -> CustomerError {
        match e {
            StoreError::NotFound(id) => CustomerError::NotFound(id),
            other => other
                .downcast_record::<CustomerError>()
                .unwrap_or_else(|e| CustomerError::Communication(e.to_string())),
        }
    }
}
