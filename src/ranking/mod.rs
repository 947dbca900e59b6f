mod aggregator;
mod evaluation_result;
mod evaluator;
mod risk;

pub use aggregator::{AggregateInputs, MAX_DEVICE_RISK, RiskAggregator, RiskScores};
pub use evaluation_result::EvaluationResult;
pub use evaluator::Evaluator;
pub use risk::Risk;
