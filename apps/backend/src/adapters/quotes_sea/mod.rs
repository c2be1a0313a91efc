//! SeaORM adapter for the quotes collection.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::entities::quotes;

pub mod dto;

pub use dto::{QuoteCreate, QuoteUpdate};

/// All quotes in insertion order.
pub async fn list_quotes<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<quotes::Model>, sea_orm::DbErr> {
    quotes::Entity::find()
        .order_by_asc(quotes::Column::CreatedAt)
        .order_by_asc(quotes::Column::Id)
        .all(conn)
        .await
}

pub async fn insert_quote<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: QuoteCreate,
) -> Result<quotes::Model, sea_orm::DbErr> {
    let now = time::OffsetDateTime::now_utc();
    let quote_active = quotes::ActiveModel {
        id: Set(Uuid::new_v4().to_string()),
        name: Set(dto.name),
        quote: Set(dto.quote),
        document: Set(Value::Object(dto.document)),
        created_at: Set(now),
        updated_at: Set(now),
    };

    quote_active.insert(conn).await
}

/// First quote (in insertion order) with exactly this name.
pub async fn find_quote_by_name<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    name: &str,
) -> Result<Option<quotes::Model>, sea_orm::DbErr> {
    quotes::Entity::find()
        .filter(quotes::Column::Name.eq(name))
        .order_by_asc(quotes::Column::CreatedAt)
        .order_by_asc(quotes::Column::Id)
        .one(conn)
        .await
}

/// Overwrite the fields present in `dto`, mirroring them into the document.
pub async fn update_quote<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    existing: quotes::Model,
    dto: QuoteUpdate,
) -> Result<quotes::Model, sea_orm::DbErr> {
    let mut document = match existing.document.clone() {
        Value::Object(map) => map,
        _ => Map::new(),
    };

    let mut quote_active: quotes::ActiveModel = existing.into();
    if let Some(name) = dto.name {
        document.insert("name".to_string(), Value::String(name.clone()));
        quote_active.name = Set(Some(name));
    }
    if let Some(quote) = dto.quote {
        document.insert("quote".to_string(), Value::String(quote.clone()));
        quote_active.quote = Set(Some(quote));
    }
    quote_active.document = Set(Value::Object(document));
    quote_active.updated_at = Set(time::OffsetDateTime::now_utc());

    quote_active.update(conn).await
}

/// Returns the number of rows removed.
pub async fn delete_quote<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: &str,
) -> Result<u64, sea_orm::DbErr> {
    let result = quotes::Entity::delete_by_id(id.to_string()).exec(conn).await?;
    Ok(result.rows_affected)
}

/// Number of stored quote documents.
pub async fn count_quotes<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<u64, sea_orm::DbErr> {
    quotes::Entity::find().count(conn).await
}
