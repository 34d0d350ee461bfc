//! # Collection Client
//!
//! The typed, cloneable handle used to talk to a [`CollectionActor`](crate::framework::CollectionActor).

use crate::framework::entity::Record;
use crate::framework::error::StoreError;
use crate::framework::message::CollectionRequest;
use tokio::sync::{mpsc, oneshot};

/// A type-safe client for one collection.
///
/// Holds only the channel sender, so cloning is cheap. Every method sends a request and
/// awaits the actor's one-shot reply.
pub struct CollectionClient<T: Record> {
    sender: mpsc::Sender<CollectionRequest<T>>,
}

// Derive would demand `T: Clone` on the bound instead of on the sender.
impl<T: Record> Clone for CollectionClient<T> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<T: Record> CollectionClient<T> {
    pub fn new(sender: mpsc::Sender<CollectionRequest<T>>) -> Self {
        Self { sender }
    }

    async fn request<R>(
        &self,
        build: impl FnOnce(oneshot::Sender<Result<R, StoreError>>) -> CollectionRequest<T>,
    ) -> Result<R, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| StoreError::ActorClosed)?;
        response.await.map_err(|_| StoreError::ActorDropped)?
    }

    pub async fn create(&self, params: T::Create) -> Result<T, StoreError> {
        self.request(|respond_to| CollectionRequest::Create { params, respond_to })
            .await
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<T>, StoreError> {
        self.request(|respond_to| CollectionRequest::Get { id, respond_to })
            .await
    }

    pub async fn update(&self, id: T::Id, update: T::Update) -> Result<T, StoreError> {
        self.request(|respond_to| CollectionRequest::Update {
            id,
            update,
            respond_to,
        })
        .await
    }

    pub async fn delete(&self, id: T::Id) -> Result<(), StoreError> {
        self.request(|respond_to| CollectionRequest::Delete { id, respond_to })
            .await
    }

    pub async fn list(&self) -> Result<Vec<T>, StoreError> {
        self.request(|respond_to| CollectionRequest::List { respond_to })
            .await
    }

    pub async fn next_id(&self) -> Result<T::Id, StoreError> {
        self.request(|respond_to| CollectionRequest::NextId { respond_to })
            .await
    }

    pub async fn perform_action(
        &self,
        id: T::Id,
        action: T::Action,
    ) -> Result<T::ActionResult, StoreError> {
        self.request(|respond_to| CollectionRequest::Action {
            id,
            action,
            respond_to,
        })
        .await
    }
}
