//! DTOs for users_sea adapter.

use serde_json::{Map, Value};

/// DTO for inserting a user document.
#[derive(Debug, Clone)]
pub struct UserCreate {
    pub username: Option<String>,
    pub password: Option<String>,
    pub document: Map<String, Value>,
}

impl UserCreate {
    /// Build from a registration body, lifting the lookup fields out of it.
    /// Non-string `username`/`password` values are kept in the document but
    /// can never match a login.
    pub fn from_document(document: Map<String, Value>) -> Self {
        let field = |key: &str| document.get(key).and_then(Value::as_str).map(str::to_owned);
        Self {
            username: field("username"),
            password: field("password"),
            document,
        }
    }
}
