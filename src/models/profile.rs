use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Runner experience level, as selected on the profile form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Experience {
  Beginner,
  Intermediate,
  Experienced,
  Elite,
}

impl Experience {
  /// Experienced and elite runners have trained their gut for higher intake
  pub fn is_gut_trained(&self) -> bool {
    matches!(self, Experience::Experienced | Experience::Elite)
  }

  pub fn as_str(&self) -> &'static str {
    match self {
      Experience::Beginner => "beginner",
      Experience::Intermediate => "intermediate",
      Experience::Experienced => "experienced",
      Experience::Elite => "elite",
    }
  }
}

/// Race distance category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Distance {
  #[value(name = "5k")]
  FiveK,
  #[value(name = "10k")]
  TenK,
  Half,
  Marathon,
  Ultra,
}

impl Distance {
  pub fn as_str(&self) -> &'static str {
    match self {
      Distance::FiveK => "5k",
      Distance::TenK => "10k",
      Distance::Half => "half",
      Distance::Marathon => "marathon",
      Distance::Ultra => "ultra",
    }
  }
}

/// A runner's race-day profile, constructed per plan request at the CLI
/// boundary. Free-text fields are carried as entered; optional fields get
/// "None"/"Any" placeholders only at prompt and render time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunnerProfile {
  pub experience: Experience,
  pub distance: Distance,

  /// Target finish time: "H:MM", "H:MM:SS", or decimal hours
  pub target_time: String,

  /// Forecast as entered: a description ("hot and humid") or a temperature
  pub weather: String,

  pub sleep: String,
  pub last_meal: String,

  pub gi_issues: Option<String>,
  pub fuel_preference: Option<String>,
  pub history_notes: Option<String>,
}
