//! User repository functions for domain layer (generic over ConnectionTrait).

use sea_orm::ConnectionTrait;
use serde_json::{Map, Value};

use super::render_document;
use crate::adapters::users_sea::{self as users_adapter, UserCreate};
use crate::auth::jwt::Identity;
use crate::errors::domain::DomainError;

/// User domain model
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: String,
    pub username: Option<String>,
    pub document: Value,
    pub created_at: time::OffsetDateTime,
}

impl User {
    /// Identity payload for token issuance. A user registered without a
    /// username gets an empty one.
    pub fn identity(&self) -> Identity {
        Identity {
            id: self.id.clone(),
            username: self.username.clone().unwrap_or_default(),
        }
    }

    /// The stored registration document with `_id`, minus the password.
    pub fn rendered(&self) -> Value {
        render_document(&self.id, &self.document, &["password"])
    }
}

pub async fn register_user<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    document: Map<String, Value>,
) -> Result<User, DomainError> {
    let user = users_adapter::insert_user(conn, UserCreate::from_document(document)).await?;
    Ok(User::from(user))
}

pub async fn find_user_by_credentials<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    username: &str,
    password: &str,
) -> Result<Option<User>, DomainError> {
    let user = users_adapter::find_user_by_credentials(conn, username, password).await?;
    Ok(user.map(User::from))
}

impl From<crate::entities::users::Model> for User {
    fn from(model: crate::entities::users::Model) -> Self {
        Self {
            id: model.id,
            username: model.username,
            document: model.document,
            created_at: model.created_at,
        }
    }
}
