//! Bound handle error types
//!
//! Two failure classes, kept apart because callers handle them
//! differently: `Decode` means a document exists but no longer matches the
//! record shape (schema drift, worth surfacing upstream); `Store` wraps a
//! store-defined failure with the operation and identifier involved.
//! Absence is not here at all; `get` returns `Ok(None)` for it.

use std::fmt;

use thiserror::Error;

use crate::codec::DecodeError;
use crate::document::DocumentId;
use crate::store::StoreError;

/// Result type for bound-handle operations
pub type HandleResult<T> = Result<T, HandleError>;

/// A handle was constructed with invalid configuration.
///
/// A programming error; fails at `bind`, never deferred to first use.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Collection name is empty")]
    EmptyCollection,
}

/// Which handle operation was in flight when a store call failed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    /// Encoding and writing a new record
    Add,
    /// Reading the document with the given identifier
    Get(DocumentId),
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Add => write!(f, "add"),
            Self::Get(id) => write!(f, "get '{}'", id),
        }
    }
}

/// Failure of a bound-handle operation
#[derive(Debug, Clone, Error)]
pub enum HandleError {
    /// The document exists but could not be coerced into the record shape
    #[error("decode failed for document '{id}': {source}")]
    Decode {
        id: DocumentId,
        #[source]
        source: DecodeError,
    },

    /// The underlying store reported a failure
    #[error("store {op} failed: {source}")]
    Store {
        op: Operation,
        #[source]
        source: StoreError,
    },
}

impl HandleError {
    pub(crate) fn decode(id: DocumentId, source: DecodeError) -> Self {
        Self::Decode { id, source }
    }

    pub(crate) fn store(op: Operation, source: StoreError) -> Self {
        Self::Store { op, source }
    }

    /// True when the failure is schema drift rather than a store fault.
    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode { .. })
    }
}
