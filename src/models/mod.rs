pub mod plan;
pub mod profile;
pub mod review;

pub use plan::PlanResult;
pub use profile::RunnerProfile;
pub use review::{ReviewHistory, ReviewRecord};
