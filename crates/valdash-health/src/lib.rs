mod evaluator;
mod status;

pub use evaluator::EpochHealthEvaluator;
pub use status::{HealthStatus, FINALIZATION_THRESHOLD, GENESIS_WINDOW_EPOCHS};
