//! In-memory document store
//!
//! Map-of-maps implementation of [`DocumentStore`]: collection name to
//! identifier to document, behind one async lock. Assigns UUID v4
//! identifiers on write. Used by the test suites and by embedders that
//! need a store without standing up an external one.

use std::collections::HashMap;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::document::{Document, DocumentId};

use super::errors::StoreResult;
use super::{CollectionRef, DocumentStore};

type Collections = HashMap<String, HashMap<DocumentId, Document>>;

/// In-process document store backed by a `HashMap` per collection.
#[derive(Debug, Default)]
pub struct MemoryStore {
    collections: RwLock<Collections>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a document under a caller-chosen identifier.
    ///
    /// Bypasses identifier assignment; overwrites any existing document
    /// under that identifier. Tests use this to seed documents whose
    /// shape predates the current record type.
    pub async fn put(&self, collection: &CollectionRef, id: DocumentId, document: Document) {
        let mut collections = self.collections.write().await;
        collections
            .entry(collection.name().to_string())
            .or_default()
            .insert(id, document);
    }

    /// Number of documents currently held in a collection.
    pub async fn len(&self, collection: &CollectionRef) -> usize {
        let collections = self.collections.read().await;
        collections
            .get(collection.name())
            .map_or(0, HashMap::len)
    }
}

impl DocumentStore for MemoryStore {
    async fn write(
        &self,
        collection: &CollectionRef,
        document: Document,
    ) -> StoreResult<DocumentId> {
        let id = DocumentId::new(Uuid::new_v4().to_string());
        let mut collections = self.collections.write().await;
        collections
            .entry(collection.name().to_string())
            .or_default()
            .insert(id.clone(), document);
        Ok(id)
    }

    async fn read(
        &self,
        collection: &CollectionRef,
        id: &DocumentId,
    ) -> StoreResult<Option<Document>> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(collection.name())
            .and_then(|docs| docs.get(id))
            .cloned())
    }
}
