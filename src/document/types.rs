//! Document and identifier types
//!
//! A `Document` is a schemaless field map. Values follow the JSON data
//! model: null, bool, number, string, nested object, array.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Schemaless document: field names mapped to JSON-shaped values.
pub type Document = serde_json::Map<String, Value>;

/// Store-assigned document identifier.
///
/// Opaque to this layer; the store decides the format. Identifiers are
/// compared byte-for-byte.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DocumentId(String);

impl DocumentId {
    /// Create an identifier from its string form.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for DocumentId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Extracts the document out of a JSON value, if the value is an object.
///
/// Convenient for building documents from `serde_json::json!` literals.
pub fn from_value(value: Value) -> Option<Document> {
    match value {
        Value::Object(map) => Some(map),
        _ => None,
    }
}

/// Returns the kind name of a value for error messages.
///
/// Integers and floats are reported as distinct kinds; decoding performs
/// no coercion between them.
pub fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(n) => {
            if n.is_i64() || n.is_u64() {
                "int"
            } else {
                "float"
            }
        }
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
