pub mod commands;
pub mod db;
pub mod models;
pub mod planner;
pub mod prompt;
pub mod render;
pub mod store;

#[cfg(test)]
pub mod test_utils;

pub use models::{PlanResult, ReviewHistory, ReviewRecord, RunnerProfile};
pub use planner::{generate_plan, generate_plan_simulated};
pub use store::ReviewStore;
