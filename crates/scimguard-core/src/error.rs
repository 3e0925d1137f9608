//! Policy error types.

use thiserror::Error;

/// Error that can occur while a listener callback runs.
#[derive(Debug, Error)]
pub enum PolicyError {
    /// Reading a capability flag or claim values from the user store failed.
    ///
    /// Propagated to the caller: continuing would mean operating against a
    /// store with unknown semantics.
    #[error("store access failed: {message}")]
    StoreAccess {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl PolicyError {
    /// Create a store access error.
    pub fn store_access(message: impl Into<String>) -> Self {
        PolicyError::StoreAccess {
            message: message.into(),
            source: None,
        }
    }

    /// Create a store access error with source.
    pub fn store_access_with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        PolicyError::StoreAccess {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

/// Result type for listener callbacks and store operations.
pub type PolicyResult<T> = Result<T, PolicyError>;
