use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub type DbPool = SqlitePool;

const DATA_DIR_ENV: &str = "CARB_COACH_DATA_DIR";
const DB_FILE_NAME: &str = "carb-coach.db";

#[derive(Error, Debug)]
pub enum DbError {
  #[error("could not determine a data directory (set {DATA_DIR_ENV})")]
  NoDataDir,

  #[error("failed to create data directory: {0}")]
  Io(#[from] std::io::Error),

  #[error("database error: {0}")]
  Database(#[from] sqlx::Error),

  #[error("migration error: {0}")]
  Migrate(#[from] sqlx::migrate::MigrateError),
}

/// Resolve where the database lives: explicit flag, then environment,
/// then the platform data directory.
pub fn resolve_data_dir(override_dir: Option<PathBuf>) -> Result<PathBuf, DbError> {
  if let Some(dir) = override_dir {
    return Ok(dir);
  }
  if let Ok(dir) = std::env::var(DATA_DIR_ENV) {
    return Ok(PathBuf::from(dir));
  }
  dirs::data_dir()
    .map(|d| d.join("carb-coach"))
    .ok_or(DbError::NoDataDir)
}

/// Initialize the database connection pool and run migrations
pub async fn initialize_db(data_dir: &Path) -> Result<DbPool, DbError> {
  fs::create_dir_all(data_dir)?;

  let db_path = data_dir.join(DB_FILE_NAME);
  let db_url = format!("sqlite://{}?mode=rwc", db_path.display());

  tracing::debug!("initializing database at {}", db_path.display());

  let pool = SqlitePoolOptions::new()
    .max_connections(5)
    .connect(&db_url)
    .await?;

  sqlx::migrate!("./migrations").run(&pool).await?;

  Ok(pool)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[tokio::test]
  async fn test_initialize_db_creates_file_and_schema() {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let pool = initialize_db(dir.path()).await.expect("init failed");

    assert!(dir.path().join(DB_FILE_NAME).exists());

    let tables: Vec<(String,)> =
      sqlx::query_as("SELECT name FROM sqlite_master WHERE type='table' AND name='kv_store'")
        .fetch_all(&pool)
        .await
        .expect("failed to query tables");
    assert_eq!(tables.len(), 1);

    pool.close().await;
  }

  #[test]
  fn test_resolve_data_dir_prefers_override() {
    let dir = resolve_data_dir(Some(PathBuf::from("/tmp/somewhere"))).expect("resolve failed");
    assert_eq!(dir, PathBuf::from("/tmp/somewhere"));
  }
}
