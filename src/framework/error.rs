//! # Store Errors
//!
//! Errors raised by the collection plumbing itself. Record-level failures
//! (validation, insufficient stock) travel boxed inside [`StoreError::Record`].

/// Errors that can occur while talking to a collection actor.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Collection actor closed")]
    ActorClosed,
    #[error("Collection actor dropped response channel")]
    ActorDropped,
    #[error("Record not found: {0}")]
    NotFound(String),
    #[error("Record error: {0}")]
    Record(Box<dyn std::error::Error + Send + Sync>),
}

impl StoreError {
    /// Recover a typed record error, if this is one.
    ///
    /// Anything that isn't an `E` is handed back unchanged.
    pub fn downcast_record<E>(self) -> Result<E, StoreError>
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        match self {
            StoreError::Record(inner) => match inner.downcast::<E>() {
                Ok(err) => Ok(*err),
                Err(other) => Err(StoreError::Record(other)),
            },
            other => Err(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, thiserror::Error, PartialEq)]
    #[error("too few")]
    struct TooFew;

    #[derive(Debug, thiserror::Error)]
    #[error("other")]
    struct Other;

    #[test]
    fn test_downcast_record_recovers_typed_error() {
        let err = StoreError::Record(Box::new(TooFew));
        assert_eq!(err.downcast_record::<TooFew>().unwrap(), TooFew);
    }

    #[test]
    fn test_downcast_record_keeps_foreign_errors() {
        let err = StoreError::Record(Box::new(Other));
        assert!(matches!(
            err.downcast_record::<TooFew>(),
            Err(StoreError::Record(_))
        ));

        let err = StoreError::NotFound("7".into());
        assert!(matches!(
            err.downcast_record::<TooFew>(),
            Err(StoreError::NotFound(id)) if id == "7"
        ));
    }
}
