//! Typed document codecs
//!
//! A `Codec<R>` pairs the two pure functions that tie a record kind to its
//! document representation:
//!
//! - `encode: &R -> Document` is total. A live record already satisfied its
//!   own invariants, so rendering it as a document cannot fail.
//! - `decode: &Document -> Result<R, DecodeError>` is partial. Documents
//!   arrive from a schemaless store and may be missing fields or carry
//!   values of the wrong kind; decode reports the first offending field.
//!
//! Decode is deliberately not a method on the record type: it must be
//! callable when only a document is in hand and no instance exists yet.
//! Encode may come either as a free closure or from the record's own
//! [`ToDocument`] impl via [`Codec::with_to_document`].
//!
//! The round-trip law holds for every codec used with this crate:
//! `decode(&encode(&r))` yields a record field-for-field equal to `r`.

mod errors;
pub mod fields;

pub use errors::{DecodeError, DecodeReason, DecodeResult};

use std::fmt;
use std::sync::Arc;

use crate::document::Document;

/// Capability for record types that can render themselves as a document.
///
/// The document must contain exactly the record's fields under fixed
/// string names, no extras and no omissions.
pub trait ToDocument {
    /// Render this record as a document.
    fn to_document(&self) -> Document;
}

type DecodeFn<R> = Arc<dyn Fn(&Document) -> DecodeResult<R> + Send + Sync>;
type EncodeFn<R> = Arc<dyn Fn(&R) -> Document + Send + Sync>;

/// Encode/decode pair for one record kind.
///
/// Holds both functions behind shared pointers, so codecs are cheap to
/// clone and safe to share across tasks. A codec has no mutable state.
pub struct Codec<R> {
    decode: DecodeFn<R>,
    encode: EncodeFn<R>,
}

impl<R> Codec<R> {
    /// Bundle two independently supplied pure functions into a codec.
    pub fn new(
        decode: impl Fn(&Document) -> DecodeResult<R> + Send + Sync + 'static,
        encode: impl Fn(&R) -> Document + Send + Sync + 'static,
    ) -> Self {
        Self {
            decode: Arc::new(decode),
            encode: Arc::new(encode),
        }
    }

    /// Decode a document into a record.
    ///
    /// # Errors
    ///
    /// Returns `DecodeError` naming the first field that is missing, of
    /// the wrong kind, or out of domain.
    pub fn decode(&self, doc: &Document) -> DecodeResult<R> {
        (self.decode)(doc)
    }

    /// Encode a record into a document. Always succeeds.
    pub fn encode(&self, record: &R) -> Document {
        (self.encode)(record)
    }
}

impl<R: ToDocument> Codec<R> {
    /// Build a codec whose encode half is the record's own [`ToDocument`]
    /// impl.
    pub fn with_to_document(
        decode: impl Fn(&Document) -> DecodeResult<R> + Send + Sync + 'static,
    ) -> Self {
        Self::new(decode, |record: &R| record.to_document())
    }
}

impl<R> Clone for Codec<R> {
    fn clone(&self) -> Self {
        Self {
            decode: Arc::clone(&self.decode),
            encode: Arc::clone(&self.encode),
        }
    }
}

impl<R> fmt::Debug for Codec<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Codec").finish_non_exhaustive()
    }
}
