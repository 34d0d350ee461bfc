//! Error types for the Customer registry.

use thiserror::Error;

/// Errors that can occur during customer operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CustomerError {
    /// The requested customer was not found.
    #[error("Customer not found: {0}")]
    NotFound(String),

    /// One or more required fields were empty.
    #[error("Customer validation error: missing {}", .missing.join(", "))]
    Validation { missing: Vec<&'static str> },

    /// The customer collection could not be reached.
    #[error("Store communication error: {0}")]
    Communication(String),
}
