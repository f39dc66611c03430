//! `plan` command: generate and print a fueling plan

use crate::db::DbPool;
use crate::models::RunnerProfile;
use crate::planner::{generate_plan, generate_plan_simulated};
use crate::prompt::build_prompt;
use crate::render::render_plan;
use crate::store::ReviewStore;
use anyhow::Result;

/// Load the review history, generate a plan for the profile, and print it.
///
/// `skip_delay` bypasses the simulated analysis delay (useful in scripts);
/// the plan itself is identical either way.
pub async fn run(pool: &DbPool, profile: RunnerProfile, skip_delay: bool) -> Result<()> {
  let store = ReviewStore::new(pool.clone());
  let history = store.load().await?;

  // The prompt a real coaching model would receive. Assembled and logged
  // for illustration only; nothing is transmitted.
  let prompt = build_prompt(&profile);
  tracing::debug!("assembled coach prompt:\n{}", prompt);

  let plan = if skip_delay {
    generate_plan(&profile, &history)
  } else {
    println!("Analyzing profile & generating plan...");
    generate_plan_simulated(&profile, &history).await
  };

  print!("{}", render_plan(&plan));
  Ok(())
}
