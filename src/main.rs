use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use carb_coach::commands;
use carb_coach::db;
use carb_coach::models::profile::{Distance, Experience};
use carb_coach::models::RunnerProfile;

#[derive(Parser)]
#[command(name = "carb-coach", about = "Race-day fueling planner")]
struct Cli {
  /// Data directory (overrides CARB_COACH_DATA_DIR env var)
  #[arg(long, global = true)]
  data_dir: Option<PathBuf>,

  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Generate a fueling plan from your race-day profile
  Plan {
    #[arg(long, value_enum)]
    experience: Experience,

    #[arg(long, value_enum)]
    distance: Distance,

    /// Target finish time: "3:45", "3:45:30", or decimal hours like "4"
    #[arg(long)]
    target_time: String,

    /// Forecast: a description ("hot and humid") or a temperature ("28")
    #[arg(long)]
    weather: String,

    /// How you slept last night
    #[arg(long)]
    sleep: String,

    /// What and when you last ate
    #[arg(long)]
    last_meal: String,

    /// Known GI issues, if any
    #[arg(long)]
    gi_issues: Option<String>,

    /// Fuel preferences (gels, chews, real food, ...)
    #[arg(long)]
    fuel_pref: Option<String>,

    /// Anything else from your running history
    #[arg(long)]
    history: Option<String>,

    /// Skip the simulated analysis delay
    #[arg(long)]
    no_delay: bool,
  },
  /// Post-race review log
  Review {
    #[command(subcommand)]
    command: ReviewCommands,
  },
}

#[derive(Subcommand)]
enum ReviewCommands {
  /// Log a post-race review
  Add {
    /// Run date, e.g. "2025-04-12" (defaults to today)
    #[arg(long)]
    date: Option<String>,

    /// Overall rating, 1-5
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=5))]
    rating: u8,

    /// How it went; mentions of gut trouble, bonking, or cramps feed
    /// future plan adjustments
    #[arg(long)]
    notes: String,
  },
  /// Show the stored review log
  List,
}

#[tokio::main]
async fn main() -> Result<()> {
  dotenvy::dotenv().ok();

  tracing_subscriber::fmt()
    .with_env_filter(
      tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
    )
    .init();

  let cli = Cli::parse();

  let data_dir = db::resolve_data_dir(cli.data_dir)?;
  let pool = db::initialize_db(&data_dir).await?;

  match cli.command {
    Commands::Plan {
      experience,
      distance,
      target_time,
      weather,
      sleep,
      last_meal,
      gi_issues,
      fuel_pref,
      history,
      no_delay,
    } => {
      let profile = RunnerProfile {
        experience,
        distance,
        target_time,
        weather,
        sleep,
        last_meal,
        gi_issues,
        fuel_preference: fuel_pref,
        history_notes: history,
      };
      commands::plan::run(&pool, profile, no_delay).await
    }
    Commands::Review { command } => match command {
      ReviewCommands::Add { date, rating, notes } => {
        commands::review::add(&pool, date, rating, notes).await
      }
      ReviewCommands::List => commands::review::list(&pool).await,
    },
  }
}
