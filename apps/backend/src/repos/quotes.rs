//! Quote repository functions for domain layer (generic over ConnectionTrait).

use sea_orm::{ConnectionTrait, TransactionTrait};
use serde_json::{Map, Value};

use super::render_document;
use crate::adapters::quotes_sea::{self as quotes_adapter, QuoteCreate, QuoteUpdate};
use crate::errors::domain::DomainError;

/// Quote domain model
#[derive(Debug, Clone, PartialEq)]
pub struct Quote {
    pub id: String,
    pub name: Option<String>,
    pub quote: Option<String>,
    pub document: Value,
}

impl Quote {
    pub fn rendered(&self) -> Value {
        render_document(&self.id, &self.document, &[])
    }
}

/// Result of deleting by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    NothingToDelete,
}

pub async fn list_quotes<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<Quote>, DomainError> {
    let quotes = quotes_adapter::list_quotes(conn).await?;
    Ok(quotes.into_iter().map(Quote::from).collect())
}

pub async fn create_quote<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    document: Map<String, Value>,
) -> Result<Quote, DomainError> {
    let quote = quotes_adapter::insert_quote(conn, QuoteCreate::from_document(document)).await?;
    Ok(Quote::from(quote))
}

/// Update the first quote named `name`, or insert a new one if none exists.
///
/// On insert the quote is named after `name` unless `update.name` says
/// otherwise. Runs in one transaction so a concurrent upsert of the same
/// name cannot interleave between the lookup and the write.
pub async fn upsert_quote_by_name<C: TransactionTrait + Send + Sync>(
    conn: &C,
    name: &str,
    update: QuoteUpdate,
) -> Result<Quote, DomainError> {
    let txn = conn.begin().await?;

    let quote = match quotes_adapter::find_quote_by_name(&txn, name).await? {
        Some(existing) => quotes_adapter::update_quote(&txn, existing, update).await?,
        None => {
            let name = update.name.unwrap_or_else(|| name.to_string());
            let mut document = Map::new();
            document.insert("name".to_string(), Value::String(name.clone()));
            if let Some(quote) = &update.quote {
                document.insert("quote".to_string(), Value::String(quote.clone()));
            }
            quotes_adapter::insert_quote(
                &txn,
                QuoteCreate {
                    name: Some(name),
                    quote: update.quote,
                    document,
                },
            )
            .await?
        }
    };

    txn.commit().await?;
    Ok(Quote::from(quote))
}

/// Delete the first quote named `name`.
pub async fn delete_quote_by_name<C: TransactionTrait + Send + Sync>(
    conn: &C,
    name: &str,
) -> Result<DeleteOutcome, DomainError> {
    let txn = conn.begin().await?;

    let outcome = match quotes_adapter::find_quote_by_name(&txn, name).await? {
        Some(existing) => match quotes_adapter::delete_quote(&txn, &existing.id).await? {
            0 => DeleteOutcome::NothingToDelete,
            _ => DeleteOutcome::Deleted,
        },
        None => DeleteOutcome::NothingToDelete,
    };

    txn.commit().await?;
    Ok(outcome)
}

impl From<crate::entities::quotes::Model> for Quote {
    fn from(model: crate::entities::quotes::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            quote: model.quote,
            document: model.document,
        }
    }
}
