pub mod config;
pub mod cost;
pub mod error;
pub mod estimator;
pub mod magnitude;
pub mod model;
pub mod params;
pub mod report;

pub use cost::{CostModel, CostProfile, CurrentCost};
pub use error::EstimateError;
pub use estimator::Estimator;
pub use magnitude::Magnitude;
pub use model::{AlgorithmKind, AlgorithmSpec, AnalysisResult, CostEstimate};
pub use params::ModelParams;
