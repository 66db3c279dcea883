//! Codec Invariant Tests
//!
//! Tests for the codec contract:
//! - Round-trip: decode(encode(r)) == r, field for field
//! - Decode rejects malformed documents and names the offending field
//! - Encode emits exactly the record's fields, no extras, no omissions
//! - Decode is deterministic

use docbind::codec::{fields, Codec, DecodeReason, ToDocument};
use docbind::document::{from_value, Document};
use serde_json::{json, Value};

// =============================================================================
// Fixture Record
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
struct Person {
    name: String,
    age: i64,
}

impl ToDocument for Person {
    fn to_document(&self) -> Document {
        let mut doc = Document::new();
        doc.insert("name".to_string(), Value::String(self.name.clone()));
        doc.insert("age".to_string(), Value::from(self.age));
        doc
    }
}

fn person_codec() -> Codec<Person> {
    Codec::with_to_document(|doc| {
        Ok(Person {
            name: fields::require_string(doc, "name")?,
            age: fields::require_i64(doc, "age")?,
        })
    })
}

// =============================================================================
// Round-Trip Law
// =============================================================================

/// Every well-formed record survives encode then decode unchanged.
#[test]
fn test_roundtrip_law() {
    let codec = person_codec();
    let people = [
        Person {
            name: "Sundar".to_string(),
            age: 50,
        },
        Person {
            name: String::new(),
            age: 0,
        },
        Person {
            name: "Ada".to_string(),
            age: -1,
        },
    ];

    for person in people {
        let decoded = codec.decode(&codec.encode(&person)).unwrap();
        assert_eq!(decoded, person);
    }
}

/// Encode emits exactly the record's fields under fixed names.
#[test]
fn test_encode_emits_exact_fields() {
    let codec = person_codec();
    let doc = codec.encode(&Person {
        name: "Sundar".to_string(),
        age: 50,
    });

    assert_eq!(doc.len(), 2);
    assert_eq!(doc.get("name"), Some(&json!("Sundar")));
    assert_eq!(doc.get("age"), Some(&json!(50)));
}

// =============================================================================
// Malformed Document Rejection
// =============================================================================

/// A missing required field yields a DecodeError naming that field.
#[test]
fn test_decode_rejects_missing_field() {
    let codec = person_codec();
    let doc = from_value(json!({"name": "Sundar"})).unwrap();

    let err = codec.decode(&doc).unwrap_err();
    assert_eq!(err.field, "age");
    assert_eq!(err.reason, DecodeReason::Missing);
}

/// A field of the wrong value kind yields a DecodeError, never a default.
#[test]
fn test_decode_rejects_wrong_kind() {
    let codec = person_codec();
    let doc = from_value(json!({"name": "Sundar", "age": "fifty"})).unwrap();

    let err = codec.decode(&doc).unwrap_err();
    assert_eq!(err.field, "age");
    assert_eq!(
        err.reason,
        DecodeReason::WrongKind {
            expected: "int",
            actual: "string"
        }
    );
}

/// Decode reports the first field that fails, in the decode function's
/// own field order.
#[test]
fn test_decode_reports_first_failing_field() {
    let codec = person_codec();
    let doc = from_value(json!({"name": 7, "age": "fifty"})).unwrap();

    let err = codec.decode(&doc).unwrap_err();
    assert_eq!(err.field, "name");
}

/// Same document decodes the same way every time.
#[test]
fn test_decode_is_deterministic() {
    let codec = person_codec();
    let good = from_value(json!({"name": "Sundar", "age": 50})).unwrap();
    let bad = from_value(json!({"name": "Sundar"})).unwrap();

    for _ in 0..100 {
        assert!(codec.decode(&good).is_ok());
        assert_eq!(codec.decode(&bad).unwrap_err().field, "age");
    }
}

// =============================================================================
// Construction Shapes
// =============================================================================

/// A codec built from two free closures behaves the same as one built
/// from the record's ToDocument capability.
#[test]
fn test_free_function_pair_matches_capability_codec() {
    let capability = person_codec();
    let free_pair = Codec::new(
        |doc: &Document| {
            Ok(Person {
                name: fields::require_string(doc, "name")?,
                age: fields::require_i64(doc, "age")?,
            })
        },
        |person: &Person| person.to_document(),
    );

    let person = Person {
        name: "Grace".to_string(),
        age: 36,
    };
    assert_eq!(capability.encode(&person), free_pair.encode(&person));
    let doc = capability.encode(&person);
    assert_eq!(
        capability.decode(&doc).unwrap(),
        free_pair.decode(&doc).unwrap()
    );
}
