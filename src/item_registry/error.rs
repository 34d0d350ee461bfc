//! Error types for the Item registry.

use thiserror::Error;

/// Errors that can occur during item operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ItemError {
    /// The requested item was not found.
    #[error("Item not found: {0}")]
    NotFound(String),

    /// One or more fields were empty or did not parse.
    #[error("Item validation error: invalid {}", .fields.join(", "))]
    Validation { fields: Vec<&'static str> },

    /// The requested quantity exceeds the recorded stock.
    #[error("Insufficient stock: requested {requested}, available {available}")]
    InsufficientStock { requested: u32, available: u32 },

    /// The item collection could not be reached.
    #[error("Store communication error: {0}")]
    Communication(String),
}
