//! Terminal rendering for plans and reviews
//!
//! Pure PlanResult-to-text formatting, kept out of the command handlers so
//! the layout is testable without a database or a terminal.

use crate::models::review::ReviewRecord;
use crate::models::PlanResult;
use std::fmt::Write;

/// Render a generated plan as terminal text.
pub fn render_plan(plan: &PlanResult) -> String {
  let mut out = String::new();

  let weather_impact = if plan.is_hot {
    "Heat strategy active"
  } else {
    "Normal conditions"
  };

  writeln!(out, "Race strategy: {}", plan.distance.to_uppercase()).ok();
  writeln!(
    out,
    "Goal time: {} | Weather impact: {}",
    plan.target_time, weather_impact
  )
  .ok();
  writeln!(out).ok();

  writeln!(out, "Core nutrition targets").ok();
  let steady = if plan.steady_state { " (steady state)" } else { "" };
  writeln!(
    out,
    "  Carbohydrates: {}-{}g per hour{}",
    plan.carbs_g_per_hr.low, plan.carbs_g_per_hr.high, steady
  )
  .ok();
  writeln!(
    out,
    "  Fluids:        {}-{}ml per hour",
    plan.fluids_ml_per_hr.low, plan.fluids_ml_per_hr.high
  )
  .ok();
  writeln!(out, "  Sodium:        {}", plan.sodium.as_str()).ok();
  writeln!(out).ok();

  if !plan.adjustments.is_empty() {
    writeln!(out, "Adjustments from your past reviews").ok();
    for note in &plan.adjustments {
      writeln!(out, "  - {}", note).ok();
    }
    writeln!(out).ok();
  }

  writeln!(out, "Hour-by-hour plan").ok();
  for row in &plan.schedule {
    writeln!(out, "  {:<22} {}", row.label, row.action).ok();
    writeln!(out, "  {:<22} {}", "", row.intake).ok();
  }
  writeln!(out).ok();

  writeln!(out, "Coach's notes").ok();
  writeln!(out, "  Pacing:    {}", plan.notes.pacing).ok();
  writeln!(out, "  GI check:  {}", plan.notes.gi_check).ok();
  writeln!(out, "  Hydration: {}", plan.notes.hydration).ok();

  out
}

/// Render the stored review log in insertion order.
pub fn render_reviews(history: &[ReviewRecord]) -> String {
  if history.is_empty() {
    return "No reviews logged yet.\n".to_string();
  }

  let mut out = String::new();
  for record in history {
    writeln!(out, "{} ({}/5)", record.run_date, record.rating).ok();
    writeln!(out, "  {}", record.notes).ok();
  }
  out
}
