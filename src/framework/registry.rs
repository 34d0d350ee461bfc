//! # Registry Trait
//!
//! Shared read/delete operations for the typed registry clients
//! (`CustomerClient`, `ItemClient`), built on a generic [`CollectionClient`].
use crate::framework::{CollectionClient, Record, StoreError};
use async_trait::async_trait;

/// Trait for registry clients to inherit the standard non-create operations.
///
/// Implementors supply the inner client and an error mapping; `get`, `delete`,
/// `list` and `count` come for free.
#[async_trait]
pub trait Registry<T: Record>: Send + Sync {
    /// The registry-specific error type.
    type Error: Send + Sync;

    /// Access the inner generic client.
    fn inner(&self) -> &CollectionClient<T>;

    /// Map store errors to the registry error type.
    fn map_error(e: StoreError) -> Self::Error;

    /// Fetch a record by id.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Delete a record by id. Fails when the id is unknown.
    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: T::Id) -> Result<(), Self::Error> {
        tracing::debug!("Sending request");
        self.inner().delete(id).await.map_err(Self::map_error)
    }

    /// All records in insertion order.
    #[tracing::instrument(skip(self))]
    async fn list(&self) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().list().await.map_err(Self::map_error)
    }

    /// Number of stored records.
    async fn count(&self) -> Result<usize, Self::Error> {
        self.list().await.map(|records| records.len())
    }
}
