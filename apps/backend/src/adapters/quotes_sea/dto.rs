//! DTOs for quotes_sea adapter.

use serde_json::{Map, Value};

/// DTO for inserting a quote document.
#[derive(Debug, Clone)]
pub struct QuoteCreate {
    pub name: Option<String>,
    pub quote: Option<String>,
    pub document: Map<String, Value>,
}

impl QuoteCreate {
    pub fn from_document(document: Map<String, Value>) -> Self {
        let field = |key: &str| document.get(key).and_then(Value::as_str).map(str::to_owned);
        Self {
            name: field("name"),
            quote: field("quote"),
            document,
        }
    }
}

/// DTO for overwriting the named fields of an existing quote.
#[derive(Debug, Clone, Default)]
pub struct QuoteUpdate {
    pub name: Option<String>,
    pub quote: Option<String>,
}
