//! Error types for the Order book.

use thiserror::Error;

/// Errors that can occur during order operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// The requested order was not found.
    #[error("Order not found: {0}")]
    NotFound(String),

    /// The order data provided is invalid.
    #[error("Order validation error: {0}")]
    Validation(String),

    /// The order collection could not be reached.
    #[error("Store communication error: {0}")]
    Communication(String),
}
