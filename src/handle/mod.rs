//! Bound collection handles
//!
//! A `BoundHandle` presents a typed read/write surface over one raw
//! collection, using exactly one codec, so calling code never touches raw
//! documents. It is a thin composition value: a shared store reference, a
//! collection reference, and a codec, all immutable after binding. It is a
//! pass-through compute boundary with no retries, no swallowed failures,
//! and no state of its own, so any number of tasks may use one handle (or
//! clones of it) concurrently.

mod errors;

pub use errors::{ConfigError, HandleError, HandleResult, Operation};

use std::sync::Arc;

use crate::codec::Codec;
use crate::document::DocumentId;
use crate::store::{CollectionRef, DocumentStore};

/// Typed view over one collection, fixed to one codec.
#[derive(Debug)]
pub struct BoundHandle<R, S> {
    store: Arc<S>,
    collection: CollectionRef,
    codec: Codec<R>,
}

impl<R, S: DocumentStore> BoundHandle<R, S> {
    /// Bind a store's collection to a codec.
    ///
    /// Pure composition, no I/O. Fails immediately if the collection name
    /// is empty rather than deferring the failure to first use.
    pub fn bind(
        store: Arc<S>,
        collection: CollectionRef,
        codec: Codec<R>,
    ) -> Result<Self, ConfigError> {
        if collection.name().is_empty() {
            return Err(ConfigError::EmptyCollection);
        }
        Ok(Self {
            store,
            collection,
            codec,
        })
    }

    /// Returns the collection this handle is bound to.
    pub fn collection(&self) -> &CollectionRef {
        &self.collection
    }

    /// Encode a record and write it; returns the store-assigned
    /// identifier.
    ///
    /// # Errors
    ///
    /// Store failures are propagated unchanged, tagged with the `add`
    /// operation. Encoding itself cannot fail.
    pub async fn add(&self, record: &R) -> HandleResult<DocumentId> {
        let document = self.codec.encode(record);
        self.store
            .write(&self.collection, document)
            .await
            .map_err(|e| HandleError::store(Operation::Add, e))
    }

    /// Read a record by identifier.
    ///
    /// `Ok(None)` means the identifier does not exist. An existing
    /// document that no longer matches the record shape yields
    /// `HandleError::Decode`, a distinct outcome from absence.
    ///
    /// # Errors
    ///
    /// Store failures are tagged with the `get` operation and the
    /// identifier involved; decode failures carry the identifier and the
    /// offending field.
    pub async fn get(&self, id: &DocumentId) -> HandleResult<Option<R>> {
        let found = self
            .store
            .read(&self.collection, id)
            .await
            .map_err(|e| HandleError::store(Operation::Get(id.clone()), e))?;

        match found {
            None => Ok(None),
            Some(document) => self
                .codec
                .decode(&document)
                .map(Some)
                .map_err(|e| HandleError::decode(id.clone(), e)),
        }
    }
}

impl<R, S> Clone for BoundHandle<R, S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            collection: self.collection.clone(),
            codec: self.codec.clone(),
        }
    }
}
