//! SeaORM adapter for the users collection.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};
use serde_json::Value;
use uuid::Uuid;

use crate::entities::users;

pub mod dto;

pub use dto::UserCreate;

// Adapter functions return DbErr; repos layer maps to DomainError via From<DbErr>.

pub async fn insert_user<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: UserCreate,
) -> Result<users::Model, sea_orm::DbErr> {
    let user_active = users::ActiveModel {
        id: Set(Uuid::new_v4().to_string()),
        username: Set(dto.username),
        password: Set(dto.password),
        document: Set(Value::Object(dto.document)),
        created_at: Set(time::OffsetDateTime::now_utc()),
    };

    user_active.insert(conn).await
}

/// Exact username + password match; the oldest match wins.
pub async fn find_user_by_credentials<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    username: &str,
    password: &str,
) -> Result<Option<users::Model>, sea_orm::DbErr> {
    users::Entity::find()
        .filter(users::Column::Username.eq(username))
        .filter(users::Column::Password.eq(password))
        .order_by_asc(users::Column::CreatedAt)
        .one(conn)
        .await
}

/// Number of stored user documents.
pub async fn count_users<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<u64, sea_orm::DbErr> {
    users::Entity::find().count(conn).await
}
