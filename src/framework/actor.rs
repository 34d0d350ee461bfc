//! # Collection Actor
//!
//! The `CollectionActor` is the server half of the Domain Store. One actor owns one
//! collection (customers, items or orders) and processes requests sequentially, so the
//! collection needs no lock: the task has exclusive ownership of its `Vec`.

use crate::framework::client::CollectionClient;
use crate::framework::entity::Record;
use crate::framework::error::StoreError;
use crate::framework::message::CollectionRequest;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that manages one ordered collection of records.
///
/// # Usage Pattern
///
/// 1. **Create**: `CollectionActor::new()` returns the actor and its client.
/// 2. **Wire**: pass the record's context into `actor.run(context)`.
/// 3. **Run**: spawn the run loop on a Tokio task.
///
/// ```rust
/// use pos_core::framework::{CollectionActor, Record};
///
/// #[derive(Clone, Debug)] struct Note { id: u32, text: String }
/// #[derive(Debug, thiserror::Error)] #[error("empty note")] struct NoteError;
///
/// impl Record for Note {
///     type Id = u32;
///     type Create = String;
///     type Update = String;
///     type Action = ();
///     type ActionResult = ();
///     type Context = ();
///     type Error = NoteError;
///
///     fn id(&self) -> u32 { self.id }
///     fn from_create_params(id: u32, text: String, _: &()) -> Result<Self, NoteError> {
///         if text.is_empty() { return Err(NoteError); }
///         Ok(Self { id, text })
///     }
///     fn on_update(&mut self, text: String) -> Result<(), NoteError> { self.text = text; Ok(()) }
///     fn handle_action(&mut self, _: ()) -> Result<(), NoteError> { Ok(()) }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = CollectionActor::<Note>::new(10);
///     tokio::spawn(actor.run(()));
///
///     let note = client.create("hello".to_string()).await.unwrap();
///     assert_eq!(note.id, 1);
///     assert_eq!(client.next_id().await.unwrap(), 2);
/// }
/// ```
///
/// # Id allocation
///
/// Ids are `max(existing) + 1`, or `1` for an empty collection. They are derived from
/// the records themselves rather than from a running counter, so deleting the newest
/// record frees its id for the next create.
pub struct CollectionActor<T: Record> {
    receiver: mpsc::Receiver<CollectionRequest<T>>,
    records: Vec<T>,
}

impl<T: Record> CollectionActor<T> {
    /// Creates a new `CollectionActor` and its associated `CollectionClient`.
    ///
    /// `buffer_size` is the capacity of the request channel; callers wait when it is full.
    pub fn new(buffer_size: usize) -> (Self, CollectionClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            records: Vec::new(),
        };
        (actor, CollectionClient::new(sender))
    }

    fn next_id(&self) -> T::Id {
        let next = self
            .records
            .iter()
            .map(|record| -> u32 { record.id().into() })
            .max()
            .map_or(1, |max| max + 1);
        T::Id::from(next)
    }

    fn position(&self, id: T::Id) -> Option<usize> {
        self.records.iter().position(|record| record.id() == id)
    }

    /// Runs the actor's event loop until every client has been dropped.
    ///
    /// The `context` is handed to [`Record::from_create_params`] on every create.
    pub async fn run(mut self, context: T::Context) {
        // "Customer" instead of "pos_core::model::customer::Customer"
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Collection started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                CollectionRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let id = self.next_id();
                    match T::from_create_params(id, params, &context) {
                        Ok(record) => {
                            self.records.push(record.clone());
                            info!(entity_type, %id, size = self.records.len(), "Created");
                            let _ = respond_to.send(Ok(record));
                        }
                        Err(e) => {
                            warn!(entity_type, error = %e, "Create failed");
                            let _ = respond_to.send(Err(StoreError::Record(Box::new(e))));
                        }
                    }
                }
                CollectionRequest::Get { id, respond_to } => {
                    let record = self.position(id).map(|idx| self.records[idx].clone());
                    debug!(entity_type, %id, found = record.is_some(), "Get");
                    let _ = respond_to.send(Ok(record));
                }
                CollectionRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?update, "Update");
                    let Some(idx) = self.position(id) else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(StoreError::NotFound(id.to_string())));
                        continue;
                    };
                    let record = &mut self.records[idx];
                    match record.on_update(update) {
                        Ok(()) => {
                            info!(entity_type, %id, "Updated");
                            let _ = respond_to.send(Ok(record.clone()));
                        }
                        Err(e) => {
                            warn!(entity_type, %id, error = %e, "Update failed");
                            let _ = respond_to.send(Err(StoreError::Record(Box::new(e))));
                        }
                    }
                }
                CollectionRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    match self.position(id) {
                        Some(idx) => {
                            self.records.remove(idx);
                            info!(entity_type, %id, size = self.records.len(), "Deleted");
                            let _ = respond_to.send(Ok(()));
                        }
                        None => {
                            warn!(entity_type, %id, "Not found");
                            let _ = respond_to.send(Err(StoreError::NotFound(id.to_string())));
                        }
                    }
                }
                CollectionRequest::List { respond_to } => {
                    debug!(entity_type, size = self.records.len(), "List");
                    let _ = respond_to.send(Ok(self.records.clone()));
                }
                CollectionRequest::NextId { respond_to } => {
                    let id = self.next_id();
                    debug!(entity_type, %id, "NextId");
                    let _ = respond_to.send(Ok(id));
                }
                CollectionRequest::Action {
                    id,
                    action,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?action, "Action");
                    let Some(idx) = self.position(id) else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(StoreError::NotFound(id.to_string())));
                        continue;
                    };
                    let result = self.records[idx]
                        .handle_action(action)
                        .map_err(|e| StoreError::Record(Box::new(e)));
                    match &result {
                        Ok(_) => info!(entity_type, %id, "Action ok"),
                        Err(e) => warn!(entity_type, %id, error = %e, "Action failed"),
                    }
                    let _ = respond_to.send(result);
                }
            }
        }

        info!(entity_type, size = self.records.len(), "Shutdown");
    }
}
