//! Append-only review log
//!
//! The store holds the entire review history as one JSON array under a
//! single fixed key, mirroring the key/value shape of the original client
//! storage. There are exactly two operations: load the whole history and
//! append one record (a single read-modify-write).

use crate::models::review::{ReviewHistory, ReviewRecord};
use sqlx::SqlitePool;
use thiserror::Error;

/// The one key the review history lives under.
pub const REVIEW_HISTORY_KEY: &str = "review_history";

#[derive(Error, Debug)]
pub enum StoreError {
  #[error("database error: {0}")]
  Database(#[from] sqlx::Error),

  #[error("failed to serialize review history: {0}")]
  Serialize(#[from] serde_json::Error),
}

/// Handle to the persistent review log. Passed explicitly to callers; there
/// is no ambient storage access anywhere else in the crate.
#[derive(Clone)]
pub struct ReviewStore {
  pool: SqlitePool,
}

impl ReviewStore {
  pub fn new(pool: SqlitePool) -> Self {
    Self { pool }
  }

  /// Load the full review history in insertion order.
  ///
  /// An absent key yields an empty history. So does stored content that
  /// fails to parse: a corrupt value is logged and treated as empty rather
  /// than surfaced as an error.
  pub async fn load(&self) -> Result<ReviewHistory, StoreError> {
    let row: Option<(String,)> = sqlx::query_as("SELECT value FROM kv_store WHERE key = ?1")
      .bind(REVIEW_HISTORY_KEY)
      .fetch_optional(&self.pool)
      .await?;

    let Some((raw,)) = row else {
      return Ok(Vec::new());
    };

    match serde_json::from_str::<ReviewHistory>(&raw) {
      Ok(history) => Ok(history),
      Err(e) => {
        tracing::warn!("stored review history failed to parse, treating as empty: {}", e);
        Ok(Vec::new())
      }
    }
  }

  /// Append one record and write the whole collection back.
  ///
  /// The read-modify-write is not transactional across concurrent writers;
  /// a lost update between near-simultaneous appends is accepted.
  pub async fn append(&self, record: ReviewRecord) -> Result<(), StoreError> {
    let mut history = self.load().await?;
    history.push(record);

    let raw = serde_json::to_string(&history)?;

    sqlx::query(
      r#"
      INSERT INTO kv_store (key, value, updated_at)
      VALUES (?1, ?2, CURRENT_TIMESTAMP)
      ON CONFLICT(key) DO UPDATE SET
        value = excluded.value,
        updated_at = CURRENT_TIMESTAMP
      "#,
    )
    .bind(REVIEW_HISTORY_KEY)
    .bind(raw)
    .execute(&self.pool)
    .await?;

    Ok(())
  }
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------
