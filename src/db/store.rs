//! Durable, key-ordered, write-once record store.
//!
//! Each [`KeyedStore`] is one SQLite table keyed by a `TEXT PRIMARY KEY`.
//! Inserting an existing key never overwrites: the store hands back the record
//! already held under that key and leaves conflict policy to the caller.

use sqlx::query::Query;
use sqlx::sqlite::{Sqlite, SqliteArguments, SqlitePool, SqliteRow};
use sqlx::Row;
use std::marker::PhantomData;
use thiserror::Error;

pub type SqliteQuery<'q> = Query<'q, Sqlite, SqliteArguments<'q>>;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Db(#[from] sqlx::Error),
    #[error("corrupt row in {table} (key {key}): {detail}")]
    Corrupt {
        table: &'static str,
        key: String,
        detail: String,
    },
}

/// Table mapping for a record kind.
///
/// `COLUMNS` lists the record's columns in the order `bind_columns` binds them;
/// the `key` and `created_at` columns are handled by the store.
pub trait StoredRecord: Sized + Send + Sync + Unpin + 'static {
    const TABLE: &'static str;
    const COLUMNS: &'static [&'static str];

    fn bind_columns<'q>(&'q self, query: SqliteQuery<'q>) -> SqliteQuery<'q>;

    fn from_row(row: &SqliteRow) -> Result<Self, StoreError>;
}

pub struct KeyedStore<R> {
    pool: SqlitePool,
    _record: PhantomData<fn() -> R>,
}

impl<R> Clone for KeyedStore<R> {
    fn clone(&self) -> Self {
        Self {
            pool: self.pool.clone(),
            _record: PhantomData,
        }
    }
}

impl<R: StoredRecord> KeyedStore<R> {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            pool,
            _record: PhantomData,
        }
    }

    /// Insert `record` under `key` if the key is free.
    ///
    /// Returns `None` when the record was written, or `Some(existing)` when
    /// the key was already taken; the existing record is left untouched.
    pub async fn insert(&self, key: &str, record: &R) -> Result<Option<R>, StoreError> {
        let placeholders = vec!["?"; R::COLUMNS.len()].join(", ");
        let sql = format!(
            "INSERT INTO {} (key, {}, created_at) VALUES (?, {}, ?) ON CONFLICT(key) DO NOTHING",
            R::TABLE,
            R::COLUMNS.join(", "),
            placeholders
        );

        let result = record
            .bind_columns(sqlx::query(&sql).bind(key))
            .bind(chrono::Utc::now().timestamp_millis())
            .execute(&self.pool)
            .await?;

        if result.rows_affected() > 0 {
            return Ok(None);
        }

        match self.get(key).await? {
            Some(existing) => Ok(Some(existing)),
            None => Err(StoreError::Corrupt {
                table: R::TABLE,
                key: key.to_string(),
                detail: "insert ignored but no row holds the key".to_string(),
            }),
        }
    }

    pub async fn get(&self, key: &str) -> Result<Option<R>, StoreError> {
        let sql = format!("{} WHERE key = ?", select_sql::<R>());
        let row = sqlx::query(&sql)
            .bind(key)
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(R::from_row).transpose()
    }

    /// All records in ascending key order.
    pub async fn values(&self) -> Result<Vec<R>, StoreError> {
        let sql = format!("{} ORDER BY key ASC", select_sql::<R>());
        let rows = sqlx::query(&sql).fetch_all(&self.pool).await?;

        rows.iter().map(R::from_row).collect()
    }

    /// Number of stored records.
    pub async fn count(&self) -> Result<usize, StoreError> {
        let sql = format!("SELECT COUNT(*) FROM {}", R::TABLE);
        let count: i64 = sqlx::query_scalar(&sql).fetch_one(&self.pool).await?;
        Ok(count as usize)
    }

    #[cfg(test)]
    pub async fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.count().await? == 0)
    }
}

fn select_sql<R: StoredRecord>() -> String {
    format!("SELECT key, {} FROM {}", R::COLUMNS.join(", "), R::TABLE)
}

/// Read a u64 column stored as decimal text.
pub(crate) fn get_u64(
    row: &SqliteRow,
    table: &'static str,
    column: &str,
) -> Result<u64, StoreError> {
    let raw: String = row.try_get(column)?;
    raw.parse::<u64>().map_err(|e| StoreError::Corrupt {
        table,
        key: row.try_get::<String, _>("key").unwrap_or_default(),
        detail: format!("{}={:?}: {}", column, raw, e),
    })
}
