//! Coach prompt assembly
//!
//! Builds the full CarbCoach prompt from the system prompt and the runner's
//! profile. The prompt is assembled and logged for illustration only; no
//! request is ever sent anywhere.

use crate::models::RunnerProfile;

const SYSTEM_PROMPT: &str = include_str!("prompts/carb_coach.txt");

/// Format the runner profile as the user-context block of the prompt.
/// Absent optional fields surface as "None"/"Any" placeholders.
pub fn build_user_context(profile: &RunnerProfile) -> String {
  format!(
    r#"**Runner Profile:**
- Experience: {experience}
- GI Issues: {gi_issues}
- Fuel Preferences: {fuel_pref}

**Race Details:**
- Distance: {distance}
- Target Time: {target_time}
- Weather: {weather}

**Pre-Race Context:**
- Sleep: {sleep}
- Last Meal: {last_meal}

**History:**
{history}"#,
    experience = profile.experience.as_str(),
    gi_issues = profile.gi_issues.as_deref().unwrap_or("None"),
    fuel_pref = profile.fuel_preference.as_deref().unwrap_or("Any"),
    distance = profile.distance.as_str(),
    target_time = profile.target_time,
    weather = profile.weather,
    sleep = profile.sleep,
    last_meal = profile.last_meal,
    history = profile.history_notes.as_deref().unwrap_or("None provided"),
  )
}

/// Assemble the full prompt a real model call would receive.
pub fn build_prompt(profile: &RunnerProfile) -> String {
  format!(
    "{}\n\n---\n\nUser Context:\n{}",
    SYSTEM_PROMPT.trim_end(),
    build_user_context(profile)
  )
}
