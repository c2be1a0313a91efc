//! Repository layer: store access in domain terms, generic over
//! `ConnectionTrait` so callers can pass a pool or a transaction.

pub mod quotes;
pub mod users;

use serde_json::{Map, Value};

/// Field under which rendered documents expose their identifier.
pub const DOCUMENT_ID_FIELD: &str = "_id";

/// Render a stored document as `{ "_id": id, ...document }`.
pub(crate) fn render_document(id: &str, document: &Value, hidden: &[&str]) -> Value {
    let mut out = Map::new();
    out.insert(DOCUMENT_ID_FIELD.to_string(), Value::String(id.to_string()));
    if let Value::Object(fields) = document {
        for (key, value) in fields {
            if key == DOCUMENT_ID_FIELD || hidden.contains(&key.as_str()) {
                continue;
            }
            out.insert(key.clone(), value.clone());
        }
    }
    Value::Object(out)
}
