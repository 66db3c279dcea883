//! Document data model
//!
//! Documents are the wire/storage representation: a finite mapping from
//! field-name strings to JSON-shaped values. They carry no type identity
//! beyond their shape; the codec layer is what ties a shape to a record
//! kind.

mod types;

pub use types::{from_value, value_kind, Document, DocumentId};
