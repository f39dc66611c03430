//! Deterministic plan generation for race-day fueling
//!
//! This module derives a complete carb/hydration plan from a runner profile
//! and the stored review history. Generation is a pure function of its two
//! inputs so it can be tested without storage or rendering; the simulated
//! analysis delay lives in a thin async wrapper.

use crate::models::plan::{CoachNotes, PlanResult, ScheduleRow, SodiumLevel, TargetRange};
use crate::models::profile::Distance;
use crate::models::review::ReviewRecord;
use crate::models::RunnerProfile;
use std::time::Duration;

/// Fallback when the target time can't be parsed
const DEFAULT_DURATION_HOURS: f64 = 3.0;

/// Durations beyond this are treated as unparseable. Longer than any
/// footrace the schedule format makes sense for, and keeps the row count
/// bounded.
const MAX_DURATION_HOURS: f64 = 48.0;

/// Integer temperatures above this (Celsius) trigger the heat strategy
const HOT_TEMP_THRESHOLD: i64 = 24;

/// Fixed stand-in for where a real model call would sit
const SIMULATED_ANALYSIS_DELAY: Duration = Duration::from_millis(1500);

/// ---------------------------------------------------------------------------
/// Duration Parsing
/// ---------------------------------------------------------------------------

/// Parse a target time into fractional hours.
///
/// Accepts "H:MM", "H:MM:SS", or a bare decimal number of hours. Anything
/// else falls back to 3 hours, as do non-positive, non-finite, or
/// absurdly large values.
pub fn parse_duration_hours(target_time: &str) -> f64 {
  let parsed = parse_duration_strict(target_time);
  match parsed {
    Some(hours) if hours > 0.0 && hours <= MAX_DURATION_HOURS => hours,
    _ => DEFAULT_DURATION_HOURS,
  }
}

fn parse_duration_strict(target_time: &str) -> Option<f64> {
  let trimmed = target_time.trim();

  let parts: Vec<&str> = trimmed.split(':').collect();
  match parts.as_slice() {
    [hours] => hours.parse::<f64>().ok(),
    [hours, minutes] => {
      let h = hours.parse::<f64>().ok()?;
      let m = minutes.parse::<f64>().ok()?;
      Some(h + m / 60.0)
    }
    [hours, minutes, seconds] => {
      let h = hours.parse::<f64>().ok()?;
      let m = minutes.parse::<f64>().ok()?;
      let s = seconds.parse::<f64>().ok()?;
      Some(h + m / 60.0 + s / 3600.0)
    }
    _ => None,
  }
}

/// ---------------------------------------------------------------------------
/// Heat Detection
/// ---------------------------------------------------------------------------

/// A forecast counts as hot if it mentions "hot" anywhere, or if it is an
/// integer temperature above the threshold.
pub fn is_hot_weather(weather: &str) -> bool {
  if weather.to_lowercase().contains("hot") {
    return true;
  }
  weather
    .trim()
    .parse::<i64>()
    .map(|temp| temp > HOT_TEMP_THRESHOLD)
    .unwrap_or(false)
}

/// ---------------------------------------------------------------------------
/// History-Driven Adjustments
/// ---------------------------------------------------------------------------

const GUT_KEYWORDS: [&str; 3] = ["bloated", "stomach", "gi"];
const ENERGY_KEYWORDS: [&str; 3] = ["bonk", "tired", "crash"];
const CRAMP_KEYWORD: &str = "cramp";

/// Net carb delta (g/hr) plus the explanation for each rule that fired.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryAdjustment {
  pub carb_delta_g: i32,
  pub notes: Vec<String>,
}

/// Scan the whole review log for trigger keywords.
///
/// All review notes are lowercased into one blob and each rule is tested
/// independently in a fixed order, so rules compound rather than shadow
/// each other. Repeated mentions of the same keyword do not stack.
pub fn adjustment_from_history(history: &[ReviewRecord]) -> HistoryAdjustment {
  let blob = history
    .iter()
    .map(|record| record.notes.to_lowercase())
    .collect::<Vec<_>>()
    .join(" ");

  let mut carb_delta_g = 0;
  let mut notes = Vec::new();

  if GUT_KEYWORDS.iter().any(|kw| blob.contains(kw)) {
    carb_delta_g -= 10;
    notes.push(
      "Past reviews mention gut distress - lowering the carb target by 10g/hr.".to_string(),
    );
  }

  if ENERGY_KEYWORDS.iter().any(|kw| blob.contains(kw)) {
    carb_delta_g += 10;
    notes.push(
      "Past reviews mention fading late - raising the carb target by 10g/hr.".to_string(),
    );
  }

  if blob.contains(CRAMP_KEYWORD) {
    // Strategy note only, no numeric change
    notes.push(
      "Cramping came up in past reviews - front-load sodium and keep electrolytes steady all race."
        .to_string(),
    );
  }

  HistoryAdjustment { carb_delta_g, notes }
}

/// ---------------------------------------------------------------------------
/// Plan Generation
/// ---------------------------------------------------------------------------

/// Derive a fueling plan from a profile and the full review history.
///
/// Pure with respect to both inputs: identical inputs always produce an
/// identical plan. There is no error path; malformed fields degrade to
/// documented defaults instead.
pub fn generate_plan(profile: &RunnerProfile, history: &[ReviewRecord]) -> PlanResult {
  let duration_hours = parse_duration_hours(&profile.target_time);
  let is_hot = is_hot_weather(&profile.weather);
  let steady_state = profile.distance == Distance::Ultra;

  // Ultra distances override experience: gut capacity doesn't help when the
  // race runs all day, so the target drops to a steady 60g/hr.
  let base_carbs: i32 = if steady_state {
    60
  } else if profile.experience.is_gut_trained() {
    90
  } else {
    60
  };

  let adjustment = adjustment_from_history(history);
  let adjusted_carbs = (base_carbs + adjustment.carb_delta_g).max(0) as u32;
  let carbs = TargetRange::from_base(adjusted_carbs);

  let fluids = if is_hot {
    TargetRange::new(700, 800)
  } else {
    TargetRange::new(500, 600)
  };

  let sodium = if is_hot {
    SodiumLevel::High
  } else {
    SodiumLevel::Moderate
  };

  let schedule = build_schedule(duration_hours, carbs, fluids);
  let notes = build_notes(profile, is_hot);

  PlanResult {
    distance: profile.distance.as_str().to_string(),
    target_time: profile.target_time.clone(),
    is_hot,
    steady_state,
    carbs_g_per_hr: carbs,
    fluids_ml_per_hr: fluids,
    sodium,
    adjustments: adjustment.notes,
    schedule,
    notes,
  }
}

/// Generate a plan after the fixed simulated analysis delay.
///
/// Models where a real model call would occur; the delay always completes
/// and always succeeds. Tests call [`generate_plan`] directly.
pub async fn generate_plan_simulated(
  profile: &RunnerProfile,
  history: &[ReviewRecord],
) -> PlanResult {
  tokio::time::sleep(SIMULATED_ANALYSIS_DELAY).await;
  generate_plan(profile, history)
}

/// Fixed pre-race row, then one row per whole race hour.
fn build_schedule(duration_hours: f64, carbs: TargetRange, fluids: TargetRange) -> Vec<ScheduleRow> {
  let total_hours = duration_hours.ceil() as u32;

  let hourly_intake = format!(
    "{}-{}g carbs + {}-{}ml fluid",
    carbs.low, carbs.high, fluids.low, fluids.high
  );

  let mut rows = vec![ScheduleRow {
    label: "Pre-race (15 min out)".to_string(),
    action: "Top off glycogen and caffeine".to_string(),
    intake: "1 gel + small sip of water".to_string(),
  }];

  for hour in 1..=total_hours {
    let action = if hour == 1 {
      "Settle into pace, start fueling early".to_string()
    } else if hour == total_hours {
      "Final push - hold intake, caffeine boost if tolerated".to_string()
    } else {
      "Maintain steady intake".to_string()
    };

    rows.push(ScheduleRow {
      label: format!("Hour {}", hour),
      action,
      intake: hourly_intake.clone(),
    });
  }

  rows
}

fn build_notes(profile: &RunnerProfile, is_hot: bool) -> CoachNotes {
  let gi_check = match &profile.gi_issues {
    Some(issues) if !issues.trim().is_empty() => format!(
      "Since you mentioned \"{}\", stick to your tested fuel sources strictly.",
      issues
    ),
    _ => "Listen to your stomach. If bloated, switch to water for 10 minutes then resume."
      .to_string(),
  };

  let hydration = if is_hot {
    "Drink to thirst but keep a minimum baseline. Heat will increase perceived effort.".to_string()
  } else {
    "Sip consistently, don't gulp.".to_string()
  };

  CoachNotes {
    pacing: "Start slow. Don't bank time - trust the nutrition to kick in.".to_string(),
    gi_check,
    hydration,
  }
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
  use super::*;
  use crate::models::profile::Experience;
  use crate::test_utils::{mock_profile, mock_review};

  #[test]
  fn test_duration_parsing_formats() {
    assert!((parse_duration_hours("3:45") - 3.75).abs() < 1e-9);
    assert!((parse_duration_hours("3:45:30") - (3.0 + 45.0 / 60.0 + 30.0 / 3600.0)).abs() < 1e-9);
    assert!((parse_duration_hours("4") - 4.0).abs() < 1e-9);
    assert!((parse_duration_hours("2.5") - 2.5).abs() < 1e-9);
  }

  #[test]
  fn test_duration_parsing_garbage_defaults() {
    assert_eq!(parse_duration_hours("garbage"), 3.0);
    assert_eq!(parse_duration_hours(""), 3.0);
    assert_eq!(parse_duration_hours("1:2:3:4"), 3.0);
    // Non-positive durations are as useless as unparseable ones
    assert_eq!(parse_duration_hours("0"), 3.0);
    assert_eq!(parse_duration_hours("-2"), 3.0);
  }

  #[test]
  fn test_absurd_durations_take_default() {
    // f64 parsing accepts these, but no race schedule does
    assert_eq!(parse_duration_hours("1e9"), 3.0);
    assert_eq!(parse_duration_hours("inf"), 3.0);
    assert_eq!(parse_duration_hours("NaN"), 3.0);
    assert_eq!(parse_duration_hours("49"), 3.0);
    // The longest supported duration still parses
    assert_eq!(parse_duration_hours("48"), 48.0);
  }

  #[test]
  fn test_schedule_stays_bounded_on_absurd_target_time() {
    let profile = RunnerProfile {
      target_time: "1e6".to_string(),
      ..mock_profile()
    };
    let plan = generate_plan(&profile, &[]);
    // Falls back to the 3-hour default: pre-race + 3 hourly rows
    assert_eq!(plan.schedule.len(), 4);
  }

  #[test]
  fn test_heat_detection() {
    assert!(is_hot_weather("Hot and humid"));
    assert!(is_hot_weather("HOT"));
    assert!(!is_hot_weather("18"));
    assert!(is_hot_weather("30"));
    assert!(!is_hot_weather("24")); // threshold is exclusive
    assert!(!is_hot_weather("cool and overcast"));
  }

  #[test]
  fn test_base_carbs_by_experience() {
    for experience in [Experience::Beginner, Experience::Intermediate] {
      let profile = RunnerProfile {
        experience,
        ..mock_profile()
      };
      let plan = generate_plan(&profile, &[]);
      assert_eq!(plan.carbs_g_per_hr, TargetRange::new(60, 70));
    }

    for experience in [Experience::Experienced, Experience::Elite] {
      let profile = RunnerProfile {
        experience,
        ..mock_profile()
      };
      let plan = generate_plan(&profile, &[]);
      assert_eq!(plan.carbs_g_per_hr, TargetRange::new(90, 100));
    }
  }

  #[test]
  fn test_ultra_forces_steady_state() {
    let profile = RunnerProfile {
      experience: Experience::Elite,
      distance: Distance::Ultra,
      ..mock_profile()
    };
    let plan = generate_plan(&profile, &[]);
    assert!(plan.steady_state);
    assert_eq!(plan.carbs_g_per_hr, TargetRange::new(60, 70));
  }

  #[test]
  fn test_hot_weather_targets() {
    let profile = RunnerProfile {
      weather: "30".to_string(),
      ..mock_profile()
    };
    let plan = generate_plan(&profile, &[]);
    assert!(plan.is_hot);
    assert_eq!(plan.fluids_ml_per_hr, TargetRange::new(700, 800));
    assert_eq!(plan.sodium, SodiumLevel::High);

    let profile = RunnerProfile {
      weather: "18".to_string(),
      ..mock_profile()
    };
    let plan = generate_plan(&profile, &[]);
    assert!(!plan.is_hot);
    assert_eq!(plan.fluids_ml_per_hr, TargetRange::new(500, 600));
    assert_eq!(plan.sodium, SodiumLevel::Moderate);
  }

  #[test]
  fn test_history_adjustments_compound() {
    // One gut note and one energy note: deltas cancel, both notes appear
    let history = vec![
      mock_review("2025-04-12", 2, "Felt bloated from mile 16 on"),
      mock_review("2025-05-03", 3, "Huge bonk at the 30k mark"),
    ];

    let adjustment = adjustment_from_history(&history);
    assert_eq!(adjustment.carb_delta_g, 0);
    assert_eq!(adjustment.notes.len(), 2);
    assert!(adjustment.notes[0].contains("gut distress"));
    assert!(adjustment.notes[1].contains("fading late"));

    let plan = generate_plan(&mock_profile(), &history);
    assert_eq!(plan.carbs_g_per_hr, TargetRange::new(60, 70));
    assert_eq!(plan.adjustments.len(), 2);
  }

  #[test]
  fn test_gut_keywords_lower_target() {
    let history = vec![mock_review("2025-06-01", 3, "Stomach turned on me late")];
    let plan = generate_plan(&mock_profile(), &history);
    assert_eq!(plan.carbs_g_per_hr, TargetRange::new(50, 60));
    assert_eq!(plan.adjustments.len(), 1);
  }

  #[test]
  fn test_cramp_adds_note_without_delta() {
    let history = vec![mock_review("2025-06-01", 4, "Calf cramps in the last 5k")];
    let adjustment = adjustment_from_history(&history);
    assert_eq!(adjustment.carb_delta_g, 0);
    assert_eq!(adjustment.notes.len(), 1);
    assert!(adjustment.notes[0].contains("sodium"));
  }

  #[test]
  fn test_repeated_keywords_do_not_stack() {
    let history = vec![
      mock_review("2025-03-01", 2, "bloated and more bloated"),
      mock_review("2025-04-01", 2, "stomach issues again"),
    ];
    let adjustment = adjustment_from_history(&history);
    assert_eq!(adjustment.carb_delta_g, -10);
    assert_eq!(adjustment.notes.len(), 1);
  }

  #[test]
  fn test_schedule_row_count() {
    // 3.75 hours -> pre-race + 4 hourly rows = 5
    let profile = RunnerProfile {
      target_time: "3:45".to_string(),
      ..mock_profile()
    };
    let plan = generate_plan(&profile, &[]);
    assert_eq!(plan.schedule.len(), 5);

    // Default 3 hours -> 4 rows
    let profile = RunnerProfile {
      target_time: "garbage".to_string(),
      ..mock_profile()
    };
    let plan = generate_plan(&profile, &[]);
    assert_eq!(plan.schedule.len(), 4);
  }

  #[test]
  fn test_schedule_wording() {
    let profile = RunnerProfile {
      target_time: "4".to_string(),
      ..mock_profile()
    };
    let plan = generate_plan(&profile, &[]);

    assert!(plan.schedule[0].label.starts_with("Pre-race"));
    assert!(plan.schedule[1].action.contains("Settle into pace"));
    assert!(plan.schedule[2].action.contains("Maintain steady intake"));
    assert!(plan.schedule[4].action.contains("Final push"));

    // Every row after pre-race references the carb and fluid targets
    for row in &plan.schedule[1..] {
      assert!(row.intake.contains("60-70g carbs"));
      assert!(row.intake.contains("500-600ml fluid"));
    }
  }

  #[test]
  fn test_single_hour_race_keeps_settle_wording() {
    let profile = RunnerProfile {
      target_time: "0:50".to_string(),
      ..mock_profile()
    };
    let plan = generate_plan(&profile, &[]);
    assert_eq!(plan.schedule.len(), 2);
    assert!(plan.schedule[1].action.contains("Settle into pace"));
  }

  #[test]
  fn test_gi_note_echoed_verbatim() {
    let profile = RunnerProfile {
      gi_issues: Some("gels give me reflux".to_string()),
      ..mock_profile()
    };
    let plan = generate_plan(&profile, &[]);
    assert!(plan.notes.gi_check.contains("gels give me reflux"));

    let plan = generate_plan(&mock_profile(), &[]);
    assert!(plan.notes.gi_check.contains("Listen to your stomach"));
  }

  #[test]
  fn test_generation_is_deterministic() {
    let profile = mock_profile();
    let history = vec![mock_review("2025-05-03", 3, "tired legs, cramping calves")];
    let first = generate_plan(&profile, &history);
    let second = generate_plan(&profile, &history);
    assert_eq!(first, second);
  }
}
