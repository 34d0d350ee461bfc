//! # Collection Messages
//!
//! Requests sent from a [`CollectionClient`](crate::framework::CollectionClient) to its
//! [`CollectionActor`](crate::framework::CollectionActor).

use crate::framework::entity::Record;
use crate::framework::error::StoreError;
use tokio::sync::oneshot;

/// One-shot reply channel used by the actor.
pub type Response<T> = oneshot::Sender<Result<T, StoreError>>;

/// Internal message type sent to a collection actor.
///
/// The variants are the Domain Store contract: `Create` (allocate an id and insert),
/// `Get` (find), `Update` (replace, `NotFound` if absent), `Delete` (`NotFound` if absent),
/// `List` (all records, insertion order) and `NextId`, plus an `Action` escape hatch for
/// record-specific operations.
#[derive(Debug)]
pub enum CollectionRequest<T: Record> {
    Create {
        params: T::Create,
        respond_to: Response<T>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<()>,
    },
    List {
        respond_to: Response<Vec<T>>,
    },
    NextId {
        respond_to: Response<T::Id>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
}
