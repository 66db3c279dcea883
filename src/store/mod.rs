//! Document store interface
//!
//! The external collaborator this crate is layered over. A store exposes
//! two operations on named collections: write a schemaless document and
//! receive a store-assigned identifier, and read a document back by
//! identifier. Everything else about the store (transport, durability,
//! querying) is outside this crate's scope.

mod errors;
mod memory;

pub use errors::{StoreError, StoreResult};
pub use memory::MemoryStore;

use std::fmt;
use std::future::Future;

use crate::document::{Document, DocumentId};

/// Reference to a named collection inside a document store.
///
/// A plain value; carrying one implies nothing about whether the
/// collection exists yet.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CollectionRef(String);

impl CollectionRef {
    /// Create a reference to the named collection.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the collection name.
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CollectionRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Backend trait for document stores.
///
/// Futures are `Send` so handles over any store remain spawnable.
/// Implementations decide identifier format, durability, and failure
/// classes; the codec layer adds no retry policy on top.
pub trait DocumentStore: Send + Sync {
    /// Write a document into a collection; the store assigns and returns
    /// the identifier.
    fn write(
        &self,
        collection: &CollectionRef,
        document: Document,
    ) -> impl Future<Output = StoreResult<DocumentId>> + Send;

    /// Read a document by identifier.
    ///
    /// `Ok(None)` means the identifier does not exist, which is an
    /// expected outcome, not an error.
    fn read(
        &self,
        collection: &CollectionRef,
        id: &DocumentId,
    ) -> impl Future<Output = StoreResult<Option<Document>>> + Send;
}
