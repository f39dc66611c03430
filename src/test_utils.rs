//! Test utilities and helpers for unit testing
//!
//! Common test infrastructure: in-memory database setup/teardown and mock
//! data factories for profiles and reviews.

use crate::models::profile::{Distance, Experience};
use crate::models::review::ReviewRecord;
use crate::models::RunnerProfile;
use sqlx::SqlitePool;

/// ---------------------------------------------------------------------------
/// Database Test Utilities
/// ---------------------------------------------------------------------------

/// Create an in-memory SQLite database for testing
/// Runs all migrations and returns a ready-to-use pool
///
/// Uses max_connections(1) to prevent multiple pool connections from creating
/// isolated in-memory databases, which would cause intermittent test failures
pub async fn setup_test_db() -> SqlitePool {
  let pool = sqlx::sqlite::SqlitePoolOptions::new()
    .max_connections(1)
    .connect("sqlite::memory:")
    .await
    .expect("Failed to create in-memory database");

  sqlx::migrate!("./migrations")
    .run(&pool)
    .await
    .expect("Failed to run migrations");

  pool
}

/// Close a test database pool
pub async fn teardown_test_db(pool: SqlitePool) {
  pool.close().await;
}

/// ---------------------------------------------------------------------------
/// Mock Data Factories
/// ---------------------------------------------------------------------------

/// A plain intermediate marathoner in mild weather, no optional fields.
/// Tests override the fields they care about with struct update syntax.
pub fn mock_profile() -> RunnerProfile {
  RunnerProfile {
    experience: Experience::Intermediate,
    distance: Distance::Marathon,
    target_time: "3:45".to_string(),
    weather: "18".to_string(),
    sleep: "7 hours, decent".to_string(),
    last_meal: "Oatmeal 3 hours out".to_string(),
    gi_issues: None,
    fuel_preference: None,
    history_notes: None,
  }
}

/// Create a review record with the given date, rating, and notes.
pub fn mock_review(run_date: &str, rating: u8, notes: &str) -> ReviewRecord {
  ReviewRecord {
    run_date: run_date.to_string(),
    rating,
    notes: notes.to_string(),
  }
}
