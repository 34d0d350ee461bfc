//! Error types for the order composer.

use crate::customer_registry::CustomerError;
use crate::item_registry::ItemError;
use crate::order_book::OrderError;
use thiserror::Error;

/// Errors returned by [`OrderComposer`](super::OrderComposer) operations.
///
/// A failed operation never changes the session.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ComposerError {
    /// Missing selection, non-positive quantity or an empty cart.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The referenced customer, item or cart line does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The requested quantity exceeds the item's recorded stock.
    #[error("Insufficient stock: requested {requested}, available {available}")]
    InsufficientStock { requested: u32, available: u32 },

    /// A collection could not be reached.
    #[error("Store error: {0}")]
    Store(String),
}

impl From<CustomerError> for ComposerError {
    fn from(e: CustomerError) -> Self {
        match e {
            CustomerError::NotFound(id) => ComposerError::NotFound(format!("customer {id}")),
            CustomerError::Validation { .. } => ComposerError::Validation(e.to_string()),
            CustomerError::Communication(msg) => ComposerError::Store(msg),
        }
    }
}

impl From<ItemError> for ComposerError {
    fn from(e: ItemError) -> Self {
        match e {
            ItemError::NotFound(id) => ComposerError::NotFound(format!("item {id}")),
            ItemError::Validation { .. } => ComposerError::Validation(e.to_string()),
            ItemError::InsufficientStock {
                requested,
                available,
            } => ComposerError::InsufficientStock {
                requested,
                available,
            },
            ItemError::Communication(msg) => ComposerError::Store(msg),
        }
    }
}

impl From<OrderError> for ComposerError {
    fn from(e: OrderError) -> Self {
        match e {
            OrderError::NotFound(id) => ComposerError::NotFound(format!("order {id}")),
            OrderError::Validation(msg) => ComposerError::Validation(msg),
            OrderError::Communication(msg) => ComposerError::Store(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insufficient_stock_keeps_quantities() {
        let err: ComposerError = ItemError::InsufficientStock {
            requested: 5,
            available: 2,
        }
        .into();
        assert_eq!(
            err,
            ComposerError::InsufficientStock {
                requested: 5,
                available: 2
            }
        );
        assert_eq!(err.to_string(), "Insufficient stock: requested 5, available 2");
    }

    #[test]
    fn test_not_found_names_the_collection() {
        let err: ComposerError = CustomerError::NotFound("4".into()).into();
        assert_eq!(err, ComposerError::NotFound("customer 4".into()));
    }
}
