use serde::{Deserialize, Serialize};

/// An hourly intake target presented as a low-high band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetRange {
  pub low: u32,
  pub high: u32,
}

impl TargetRange {
  /// Band of width 10 starting at `base` (carb targets)
  pub fn from_base(base: u32) -> Self {
    Self {
      low: base,
      high: base + 10,
    }
  }

  pub fn new(low: u32, high: u32) -> Self {
    Self { low, high }
  }
}

/// Sodium strategy bucket; only two levels exist, picked by the heat flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SodiumLevel {
  Moderate,
  High,
}

impl SodiumLevel {
  pub fn as_str(&self) -> &'static str {
    match self {
      SodiumLevel::Moderate => "Moderate (400-500mg / hr)",
      SodiumLevel::High => "High (700mg+ / hr)",
    }
  }
}

/// One row of the hour-by-hour schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleRow {
  /// "Pre-race (15 min out)", "Hour 1", ...
  pub label: String,
  pub action: String,
  pub intake: String,
}

/// Narrative guidance attached to every plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoachNotes {
  pub pacing: String,
  pub gi_check: String,
  pub hydration: String,
}

/// A complete generated fueling plan. Derived targets plus the schedule and
/// the explanations for any history-driven adjustments. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanResult {
  /// Distance label echoed from the profile
  pub distance: String,

  /// Goal time echoed from the profile
  pub target_time: String,

  /// Whether the heat strategy is active
  pub is_hot: bool,

  /// Whether the steady-state ultra profile applied
  pub steady_state: bool,

  /// Carbohydrate target in g/hr, after history adjustments
  pub carbs_g_per_hr: TargetRange,

  /// Fluid target in ml/hr
  pub fluids_ml_per_hr: TargetRange,

  pub sodium: SodiumLevel,

  /// One explanation per history rule that fired, in rule order
  pub adjustments: Vec<String>,

  /// Pre-race row followed by one row per race hour
  pub schedule: Vec<ScheduleRow>,

  pub notes: CoachNotes,
}
