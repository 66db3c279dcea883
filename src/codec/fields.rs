//! Typed field accessors for decode functions
//!
//! Decode functions read raw documents field by field. These helpers do the
//! lookup and kind check in one step and produce `DecodeError`s that name
//! the field and the expected/actual kinds.
//!
//! Kind matching is exact: an int is not a float, a null is not an absent
//! optional value's stand-in for the wrong kind. No coercion, no defaults.

use serde_json::Value;

use crate::document::{value_kind, Document};

use super::errors::{DecodeError, DecodeResult};

/// Returns the raw value of a required field.
pub fn require<'a>(doc: &'a Document, field: &str) -> DecodeResult<&'a Value> {
    doc.get(field).ok_or_else(|| DecodeError::missing(field))
}

/// Returns a required string field as a slice.
pub fn require_str<'a>(doc: &'a Document, field: &str) -> DecodeResult<&'a str> {
    let value = require(doc, field)?;
    value
        .as_str()
        .ok_or_else(|| DecodeError::wrong_kind(field, "string", value_kind(value)))
}

/// Returns a required string field as an owned `String`.
pub fn require_string(doc: &Document, field: &str) -> DecodeResult<String> {
    require_str(doc, field).map(str::to_string)
}

/// Returns a required 64-bit integer field.
pub fn require_i64(doc: &Document, field: &str) -> DecodeResult<i64> {
    let value = require(doc, field)?;
    value
        .as_i64()
        .ok_or_else(|| DecodeError::wrong_kind(field, "int", value_kind(value)))
}

/// Returns a required 64-bit float field.
///
/// Integer values are rejected; the stored kind must already be a float.
pub fn require_f64(doc: &Document, field: &str) -> DecodeResult<f64> {
    let value = require(doc, field)?;
    match value {
        Value::Number(n) if !n.is_i64() && !n.is_u64() => n
            .as_f64()
            .ok_or_else(|| DecodeError::wrong_kind(field, "float", value_kind(value))),
        _ => Err(DecodeError::wrong_kind(field, "float", value_kind(value))),
    }
}

/// Returns a required boolean field.
pub fn require_bool(doc: &Document, field: &str) -> DecodeResult<bool> {
    let value = require(doc, field)?;
    value
        .as_bool()
        .ok_or_else(|| DecodeError::wrong_kind(field, "bool", value_kind(value)))
}

/// Returns a required nested document field.
pub fn require_object<'a>(doc: &'a Document, field: &str) -> DecodeResult<&'a Document> {
    let value = require(doc, field)?;
    value
        .as_object()
        .ok_or_else(|| DecodeError::wrong_kind(field, "object", value_kind(value)))
}

/// Returns a required array field.
pub fn require_array<'a>(doc: &'a Document, field: &str) -> DecodeResult<&'a Vec<Value>> {
    let value = require(doc, field)?;
    value
        .as_array()
        .ok_or_else(|| DecodeError::wrong_kind(field, "array", value_kind(value)))
}

/// Returns an optional field's value.
///
/// An absent field and an explicit null both read as `None`.
pub fn optional<'a>(doc: &'a Document, field: &str) -> Option<&'a Value> {
    match doc.get(field) {
        Some(Value::Null) | None => None,
        Some(value) => Some(value),
    }
}
