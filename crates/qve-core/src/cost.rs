use crate::error::EstimateError;
use crate::magnitude::Magnitude;
use crate::model::{AlgorithmKind, AlgorithmSpec};
use crate::params::ModelParams;

/// Cost attributed to the current-era noisy adversary. `OutOfReach`
/// marks primitives whose key size exceeds the addressable-qubit budget;
/// there is no finite time to report for them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CurrentCost {
    Bounded(Magnitude),
    OutOfReach,
}

/// Raw cost surface a model hands back to the estimator. Times are
/// wall-clock seconds in the log2 domain; success rates use the 0..=100
/// scale. Scores and advantage ratios are derived centrally so every
/// model is graded on the same curve.
#[derive(Debug, Clone)]
pub struct CostProfile {
    pub classical_seconds: Magnitude,
    pub perfect_seconds: Magnitude,
    pub current_seconds: CurrentCost,
    pub perfect_success_rate: f64,
    pub current_success_rate: f64,
    pub note: String,
}

/// A closed-form attack cost model for one algorithm kind.
///
/// Models are registered with the estimator as trait objects; adding a
/// primitive means registering another model, never editing estimator
/// control flow. Implementations must be pure: same spec and params, same
/// profile.
pub trait CostModel: Send + Sync {
    /// Stable identifier used in logs.
    fn id(&self) -> &'static str;
    /// The algorithm kind this model covers.
    fn kind(&self) -> AlgorithmKind;
    fn cost(
        &self,
        spec: &AlgorithmSpec,
        params: &ModelParams,
    ) -> Result<CostProfile, EstimateError>;
}
