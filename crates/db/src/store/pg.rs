//! PostgreSQL backend: one JSONB table per collection.

use async_trait::async_trait;
use serde_json::Value;

use super::DocumentStore;
use crate::error::DbError;
use crate::DbPool;

/// Stores documents in `{collection}(id, seq, body, created_at, updated_at)` tables.
///
/// Collection names come from `Document::COLLECTION` constants and are
/// interpolated into the SQL; they are never user input.
#[derive(Debug, Clone)]
pub struct PgDocumentStore {
    pool: DbPool,
}

impl PgDocumentStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DocumentStore for PgDocumentStore {
    async fn ping(&self) -> Result<(), DbError> {
        crate::health_check(&self.pool).await?;
        Ok(())
    }

    async fn find_all(&self, collection: &'static str) -> Result<Vec<Value>, DbError> {
        let query = format!("SELECT body FROM {collection} ORDER BY seq");
        let docs = sqlx::query_scalar::<_, Value>(&query)
            .fetch_all(&self.pool)
            .await?;
        Ok(docs)
    }

    async fn find_by_id(
        &self,
        collection: &'static str,
        id: &str,
    ) -> Result<Option<Value>, DbError> {
        let query = format!("SELECT body FROM {collection} WHERE id = $1");
        let doc = sqlx::query_scalar::<_, Value>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(doc)
    }

    async fn insert(
        &self,
        collection: &'static str,
        id: &str,
        doc: &Value,
    ) -> Result<Value, DbError> {
        let query = format!(
            "INSERT INTO {collection} (id, body)
             VALUES ($1, $2)
             RETURNING body"
        );
        sqlx::query_scalar::<_, Value>(&query)
            .bind(id)
            .bind(doc)
            .fetch_one(&self.pool)
            .await
            .map_err(|err| classify_insert_error(err, collection, id))
    }

    async fn replace(
        &self,
        collection: &'static str,
        id: &str,
        doc: &Value,
    ) -> Result<Option<Value>, DbError> {
        let query = format!(
            "UPDATE {collection} SET body = $2, updated_at = NOW()
             WHERE id = $1
             RETURNING body"
        );
        let stored = sqlx::query_scalar::<_, Value>(&query)
            .bind(id)
            .bind(doc)
            .fetch_optional(&self.pool)
            .await?;
        Ok(stored)
    }

    async fn delete(&self, collection: &'static str, id: &str) -> Result<bool, DbError> {
        let query = format!("DELETE FROM {collection} WHERE id = $1");
        let result = sqlx::query(&query).bind(id).execute(&self.pool).await?;
        Ok(result.rows_affected() > 0)
    }
}

/// Map a primary-key violation (PostgreSQL error code 23505) to
/// [`DbError::DuplicateKey`], matching the in-memory store.
fn classify_insert_error(err: sqlx::Error, collection: &'static str, id: &str) -> DbError {
    match &err {
        sqlx::Error::Database(db_err) if db_err.code().as_deref() == Some("23505") => {
            DbError::DuplicateKey {
                collection,
                id: id.to_string(),
            }
        }
        _ => DbError::Sqlx(err),
    }
}
