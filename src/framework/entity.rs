//! # Record Trait
//!
//! The `Record` trait is the contract every stored type (Customer, Item, Order) implements
//! to be managed by the generic [`CollectionActor`](crate::framework::CollectionActor).
//!
//! # Architecture Note
//! The collection actor knows nothing about customers or items. It only knows how to
//! allocate ids, keep records in insertion order and route requests to the hooks below.
//! Associated types keep every collection strongly typed: a `Customer` collection only
//! accepts `CustomerFields`, and the compiler rejects an `ItemDraft` sent to it.
//!
//! # Context
//! `Context` is injected once when the actor starts (`run(context)`) and handed to
//! `from_create_params`. The order collection uses it to receive its clock; the
//! registries use `()`.

use std::fmt::{Debug, Display};

/// Trait that any stored record must implement to be managed by a `CollectionActor`.
pub trait Record: Clone + Send + Sync + 'static {
    /// Identifier of the record. Ids are allocated by the actor as `max(existing) + 1`,
    /// so the type must round-trip through `u32`.
    type Id: Copy + Eq + Ord + Send + Sync + Display + Debug + From<u32> + Into<u32>;

    /// Payload used to create a new record.
    type Create: Send + Sync + Debug;

    /// Payload used to replace an existing record.
    type Update: Send + Sync + Debug;

    /// Record-specific operations that don't fit CRUD (e.g. `CheckAvailability`).
    type Action: Send + Sync + Debug;

    /// Result type of custom actions.
    type ActionResult: Send + Sync + Debug;

    /// Runtime dependencies injected into the actor. Use `()` if none are needed.
    type Context: Send + Sync;

    /// Error type for this record.
    ///
    /// One enum covers every operation of the collection. The actor boxes it into
    /// [`StoreError::Record`](crate::framework::StoreError::Record) and the typed
    /// clients downcast it back.
    type Error: std::error::Error + Send + Sync + 'static;

    /// The record's identifier.
    fn id(&self) -> Self::Id;

    /// Build the record from the allocated id and the create payload.
    ///
    /// Returning an error rejects the create; nothing is stored.
    fn from_create_params(
        id: Self::Id,
        params: Self::Create,
        ctx: &Self::Context,
    ) -> Result<Self, Self::Error>;

    /// Apply an update in place.
    ///
    /// Implementations must validate before mutating so a rejected update leaves
    /// the stored record untouched.
    fn on_update(&mut self, update: Self::Update) -> Result<(), Self::Error>;

    /// Handle a custom record-specific action.
    fn handle_action(&mut self, action: Self::Action) -> Result<Self::ActionResult, Self::Error>;
}
