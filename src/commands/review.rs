//! `review` commands: log a post-race review, list the stored log

use crate::db::DbPool;
use crate::models::ReviewRecord;
use crate::render::render_reviews;
use crate::store::ReviewStore;
use anyhow::Result;

/// Append one review to the log. The run date defaults to today.
pub async fn add(pool: &DbPool, run_date: Option<String>, rating: u8, notes: String) -> Result<()> {
  let run_date =
    run_date.unwrap_or_else(|| chrono::Local::now().format("%Y-%m-%d").to_string());

  let store = ReviewStore::new(pool.clone());
  store
    .append(ReviewRecord {
      run_date,
      rating,
      notes,
    })
    .await?;

  println!("Review logged. It will shape your next plan.");
  Ok(())
}

/// Print the stored reviews in insertion order.
pub async fn list(pool: &DbPool) -> Result<()> {
  let store = ReviewStore::new(pool.clone());
  let history = store.load().await?;
  print!("{}", render_reviews(&history));
  Ok(())
}
