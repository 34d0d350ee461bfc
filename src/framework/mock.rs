//! # Mock Collections
//!
//! `MockClient<T>` hands out a real [`CollectionClient<T>`] whose requests are answered from
//! a queue of scripted expectations instead of a running [`CollectionActor`](crate::framework::CollectionActor).
//! It lets the composer and the typed clients be tested without any real collection, and
//! makes failures that are awkward to reproduce (a closed actor, a dropped reply) trivial.
//!
//! | | MockClient | Real actor |
//! |---|---|---|
//! | **State** | None, replies are scripted | Real records |
//! | **Use case** | Logic *around* the client | The collection itself or the full system |
//! | **Error injection** | `return_err` | Needs specific state |
//!
//! ```rust
//! use pos_core::framework::mock::MockClient;
//! use pos_core::framework::StoreError;
//! use pos_core::model::{Customer, CustomerId};
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockClient::<Customer>::new();
//!     mock.expect_get(CustomerId(1)).return_err(StoreError::ActorClosed);
//!
//!     let client = mock.client();
//!     assert!(matches!(client.get(CustomerId(1)).await, Err(StoreError::ActorClosed)));
//!     mock.verify();
//! }
//! ```
//!
//! For request-level assertions (inspecting the payload that was sent), use
//! [`create_mock_client`] with [`expect_create`], [`expect_get`] and [`expect_action`].

use crate::framework::client::CollectionClient;
use crate::framework::entity::Record;
use crate::framework::error::StoreError;
use crate::framework::message::CollectionRequest;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::{mpsc, oneshot};

/// A scripted reply, consumed in order by the mock's background task.
enum Expectation<T: Record> {
    Create {
        response: Result<T, StoreError>,
    },
    Get {
        id: T::Id,
        response: Result<Option<T>, StoreError>,
    },
    Update {
        id: T::Id,
        response: Result<T, StoreError>,
    },
    Delete {
        id: T::Id,
        response: Result<(), StoreError>,
    },
    List {
        response: Result<Vec<T>, StoreError>,
    },
    NextId {
        response: Result<T::Id, StoreError>,
    },
    Action {
        id: T::Id,
        response: Result<T::ActionResult, StoreError>,
    },
}

type Expectations<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

/// A mock collection with expectation tracking.
///
/// Requests must arrive in the order the expectations were registered, and ids must match;
/// anything else panics the mock task, which the caller observes as
/// [`StoreError::ActorDropped`].
pub struct MockClient<T: Record> {
    client: CollectionClient<T>,
    expectations: Expectations<T>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: Record> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

fn check_id<I: PartialEq + std::fmt::Debug>(expected: I, actual: I) {
    assert_eq!(expected, actual, "mock received a request for the wrong id");
}

impl<T: Record> MockClient<T> {
    /// Creates a new mock with no expectations. Must be called inside a Tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<CollectionRequest<T>>(100);
        let expectations: Expectations<T> = Arc::new(Mutex::new(VecDeque::new()));
        let queue = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = queue.lock().unwrap().pop_front();

                match (request, expectation) {
                    (
                        CollectionRequest::Create { respond_to, .. },
                        Some(Expectation::Create { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        CollectionRequest::Get { id, respond_to },
                        Some(Expectation::Get { id: want, response }),
                    ) => {
                        check_id(want, id);
                        let _ = respond_to.send(response);
                    }
                    (
                        CollectionRequest::Update { id, respond_to, .. },
                        Some(Expectation::Update { id: want, response }),
                    ) => {
                        check_id(want, id);
                        let _ = respond_to.send(response);
                    }
                    (
                        CollectionRequest::Delete { id, respond_to },
                        Some(Expectation::Delete { id: want, response }),
                    ) => {
                        check_id(want, id);
                        let _ = respond_to.send(response);
                    }
                    (
                        CollectionRequest::List { respond_to },
                        Some(Expectation::List { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        CollectionRequest::NextId { respond_to },
                        Some(Expectation::NextId { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        CollectionRequest::Action { id, respond_to, .. },
                        Some(Expectation::Action { id: want, response }),
                    ) => {
                        check_id(want, id);
                        let _ = respond_to.send(response);
                    }
                    _ => panic!("Unexpected request or expectation mismatch"),
                }
            }
        });

        Self {
            client: CollectionClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns a client wired to this mock.
    pub fn client(&self) -> CollectionClient<T> {
        self.client.clone()
    }

    fn builder<R: 'static>(
        &self,
        make: impl FnOnce(Result<R, StoreError>) -> Expectation<T> + Send + 'static,
    ) -> ExpectationBuilder<T, R> {
        ExpectationBuilder {
            expectations: self.expectations.clone(),
            make: Box::new(make),
        }
    }

    pub fn expect_create(&mut self) -> ExpectationBuilder<T, T> {
        self.builder(|response| Expectation::Create { response })
    }

    pub fn expect_get(&mut self, id: T::Id) -> ExpectationBuilder<T, Option<T>> {
        self.builder(move |response| Expectation::Get { id, response })
    }

    pub fn expect_update(&mut self, id: T::Id) -> ExpectationBuilder<T, T> {
        self.builder(move |response| Expectation::Update { id, response })
    }

    pub fn expect_delete(&mut self, id: T::Id) -> ExpectationBuilder<T, ()> {
        self.builder(move |response| Expectation::Delete { id, response })
    }

    pub fn expect_list(&mut self) -> ExpectationBuilder<T, Vec<T>> {
        self.builder(|response| Expectation::List { response })
    }

    pub fn expect_next_id(&mut self) -> ExpectationBuilder<T, T::Id> {
        self.builder(|response| Expectation::NextId { response })
    }

    pub fn expect_action(&mut self, id: T::Id) -> ExpectationBuilder<T, T::ActionResult> {
        self.builder(move |response| Expectation::Action { id, response })
    }

    /// Panics if any registered expectation was never consumed.
    pub fn verify(&self) {
        let remaining = self.expectations.lock().unwrap().len();
        if remaining > 0 {
            panic!("Not all expectations were met. {} remaining", remaining);
        }
    }
}

/// Completes an expectation with the reply the mock should send.
pub struct ExpectationBuilder<T: Record, R> {
    expectations: Expectations<T>,
    make: Box<dyn FnOnce(Result<R, StoreError>) -> Expectation<T> + Send>,
}

impl<T: Record, R> ExpectationBuilder<T, R> {
    /// Reply with a successful result.
    pub fn return_ok(self, value: R) {
        self.push(Ok(value));
    }

    /// Reply with an error.
    pub fn return_err(self, error: StoreError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<R, StoreError>) {
        let expectation = (self.make)(response);
        self.expectations.lock().unwrap().push_back(expectation);
    }
}

// =============================================================================
// REQUEST-LEVEL HELPERS
// =============================================================================

/// Creates a client and the receiving end of its channel.
///
/// Tests pull requests off the receiver, assert on their payload and answer through the
/// reply sender.
pub fn create_mock_client<T: Record>(
    buffer_size: usize,
) -> (CollectionClient<T>, mpsc::Receiver<CollectionRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (CollectionClient::new(sender), receiver)
}

/// Next message must be a Create request.
pub async fn expect_create<T: Record>(
    receiver: &mut mpsc::Receiver<CollectionRequest<T>>,
) -> Option<(T::Create, oneshot::Sender<Result<T, StoreError>>)> {
    match receiver.recv().await {
        Some(CollectionRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Next message must be a Get request.
pub async fn expect_get<T: Record>(
    receiver: &mut mpsc::Receiver<CollectionRequest<T>>,
) -> Option<(T::Id, oneshot::Sender<Result<Option<T>, StoreError>>)> {
    match receiver.recv().await {
        Some(CollectionRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Next message must be an Action request.
pub async fn expect_action<T: Record>(
    receiver: &mut mpsc::Receiver<CollectionRequest<T>>,
) -> Option<(
    T::Id,
    T::Action,
    oneshot::Sender<Result<T::ActionResult, StoreError>>,
)> {
    match receiver.recv().await {
        Some(CollectionRequest::Action {
            id,
            action,
            respond_to,
        }) => Some((id, action, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Label {
        id: u32,
        text: String,
    }

    #[derive(Debug, thiserror::Error)]
    #[error("label error")]
    struct LabelError;

    impl Record for Label {
        type Id = u32;
        type Create = String;
        type Update = String;
        type Action = ();
        type ActionResult = ();
        type Context = ();
        type Error = LabelError;

        fn id(&self) -> u32 {
            self.id
        }
        fn from_create_params(id: u32, text: String, _: &()) -> Result<Self, LabelError> {
            Ok(Self { id, text })
        }
        fn on_update(&mut self, text: String) -> Result<(), LabelError> {
            self.text = text;
            Ok(())
        }
        fn handle_action(&mut self, _: ()) -> Result<(), LabelError> {
            Ok(())
        }
    }

    fn label(id: u32, text: &str) -> Label {
        Label {
            id,
            text: text.to_string(),
        }
    }

    #[tokio::test]
    async fn test_request_level_create() {
        let (client, mut receiver) = create_mock_client::<Label>(10);

        let task = tokio::spawn(async move { client.create("new".to_string()).await });

        let (payload, responder) = expect_create(&mut receiver)
            .await
            .expect("Expected Create request");
        assert_eq!(payload, "new");
        responder.send(Ok(label(1, "new"))).unwrap();

        assert_eq!(task.await.unwrap().unwrap(), label(1, "new"));
    }

    #[tokio::test]
    async fn test_expectations_are_answered_in_order() {
        let mut mock = MockClient::<Label>::new();
        mock.expect_next_id().return_ok(3);
        mock.expect_create().return_ok(label(3, "c"));
        mock.expect_list().return_ok(vec![label(3, "c")]);
        mock.expect_delete(3).return_err(StoreError::NotFound("3".into()));

        let client = mock.client();
        assert_eq!(client.next_id().await.unwrap(), 3);
        assert_eq!(client.create("c".into()).await.unwrap().id, 3);
        assert_eq!(client.list().await.unwrap().len(), 1);
        assert!(matches!(client.delete(3).await, Err(StoreError::NotFound(_))));

        mock.verify();
    }

    #[tokio::test]
    async fn test_unexpected_request_surfaces_as_dropped() {
        let mock = MockClient::<Label>::new();
        let client = mock.client();
        assert!(matches!(client.get(1).await, Err(StoreError::ActorDropped)));
    }
}
