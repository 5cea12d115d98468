use num_bigint::Sign;
use tracing::debug;

use crate::cost::{CostModel, CostProfile, CurrentCost};
use crate::error::EstimateError;
use crate::magnitude::Magnitude;
use crate::model::{
    AdvantageRatio, AlgorithmKind, AlgorithmSpec, AnalysisResult, CostEstimate, QuantumAdvantage,
    TimeToBreak,
};
use crate::params::ModelParams;

// Log2-seconds anchors of the vulnerability score: one second or less
// scores 100, 2^128 seconds or more scores 0.
const SCORE_FLOOR_LOG2: f64 = 0.0;
const SCORE_CEILING_LOG2: f64 = 128.0;

/// Registry of cost models plus the shared parameters. Stateless after
/// construction; `estimate` may be called concurrently from any thread.
pub struct Estimator {
    models: Vec<Box<dyn CostModel>>,
    params: ModelParams,
}

impl Estimator {
    pub fn new(models: Vec<Box<dyn CostModel>>) -> Self {
        Self::with_params(models, ModelParams::default())
    }

    pub fn with_params(models: Vec<Box<dyn CostModel>>, params: ModelParams) -> Self {
        Self { models, params }
    }

    pub fn params(&self) -> &ModelParams {
        &self.params
    }

    /// Maps a primitive to its attack-cost estimates under the idealized
    /// and the current-era quantum adversary.
    pub fn estimate(&self, spec: &AlgorithmSpec) -> Result<AnalysisResult, EstimateError> {
        let span = tracing::debug_span!(
            "estimate",
            kind = spec.kind.as_str(),
            key_bits = ?spec.key_bits
        );
        let _guard = span.enter();

        validate_spec(spec)?;
        let model = self
            .models
            .iter()
            .find(|m| m.kind() == spec.kind)
            .ok_or_else(|| EstimateError::unsupported(spec.kind.as_str()))?;
        let profile = model.cost(spec, &self.params)?;
        debug!(
            model = model.id(),
            classical_log2 = profile.classical_seconds.log2(),
            perfect_log2 = profile.perfect_seconds.log2(),
            "Cost profile computed"
        );
        Ok(assemble(spec, profile))
    }
}

fn validate_spec(spec: &AlgorithmSpec) -> Result<(), EstimateError> {
    if spec.key_bits == Some(0) {
        return Err(EstimateError::invalid("keyBits must be positive"));
    }
    let requires_key_bits = matches!(
        spec.kind,
        AlgorithmKind::SymmetricCipher | AlgorithmKind::Hash | AlgorithmKind::EcdsaLike
    );
    if requires_key_bits && spec.key_bits.is_none() {
        return Err(EstimateError::invalid(format!(
            "keyBits is required for kind {}",
            spec.kind.as_str()
        )));
    }
    if let Some(modulus) = &spec.modulus {
        if spec.kind != AlgorithmKind::RsaLike {
            return Err(EstimateError::invalid(format!(
                "modulusNumber does not apply to kind {}",
                spec.kind.as_str()
            )));
        }
        if modulus.sign() != Sign::Plus {
            return Err(EstimateError::invalid("modulusNumber must be positive"));
        }
    }
    Ok(())
}

fn assemble(spec: &AlgorithmSpec, profile: CostProfile) -> AnalysisResult {
    let perfect = profile.perfect_seconds;
    // A noisy machine is never faster than the idealized one, whatever a
    // model reports.
    let current = match profile.current_seconds {
        CurrentCost::Bounded(m) => Some(Magnitude::from_log2(m.log2().max(perfect.log2()))),
        CurrentCost::OutOfReach => None,
    };

    let perfect_quantum = CostEstimate {
        success_rate: profile.perfect_success_rate.clamp(0.0, 100.0),
        time_to_break: time_to_break(Some(&perfect)),
        vulnerability_score: vulnerability_score(Some(&perfect)),
    };
    let current_quantum = CostEstimate {
        success_rate: profile.current_success_rate.clamp(0.0, 100.0),
        time_to_break: time_to_break(current.as_ref()),
        vulnerability_score: vulnerability_score(current.as_ref()),
    };
    let quantum_advantage = QuantumAdvantage {
        perfect: advantage_ratio(profile.classical_seconds, Some(perfect)),
        current: advantage_ratio(profile.classical_seconds, current),
    };

    AnalysisResult {
        spec: spec.clone(),
        perfect_quantum,
        current_quantum,
        quantum_advantage,
        note: profile.note,
    }
}

fn time_to_break(cost: Option<&Magnitude>) -> TimeToBreak {
    match cost {
        None => TimeToBreak {
            seconds: f64::MAX,
            exceeds_range: true,
        },
        Some(m) => {
            let (seconds, exceeds_range) = m.to_linear();
            TimeToBreak {
                seconds,
                exceeds_range,
            }
        }
    }
}

fn vulnerability_score(cost: Option<&Magnitude>) -> f64 {
    match cost {
        None => 0.0,
        Some(m) => {
            let span = SCORE_CEILING_LOG2 - SCORE_FLOOR_LOG2;
            (((SCORE_CEILING_LOG2 - m.log2()) / span) * 100.0).clamp(0.0, 100.0)
        }
    }
}

fn advantage_ratio(classical: Magnitude, quantum: Option<Magnitude>) -> AdvantageRatio {
    let Some(quantum) = quantum else {
        // No finite denominator to divide by.
        return AdvantageRatio {
            factor: 0.0,
            exceeds_range: true,
        };
    };
    let (_, classical_overflow) = classical.to_linear();
    let (factor, ratio_overflow) =
        Magnitude::from_log2(classical.log2() - quantum.log2()).to_linear();
    AdvantageRatio {
        factor,
        exceeds_range: classical_overflow || ratio_overflow,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_is_monotone_in_time() {
        let fast = vulnerability_score(Some(&Magnitude::from_log2(4.0)));
        let slow = vulnerability_score(Some(&Magnitude::from_log2(64.0)));
        assert!(fast > slow);
    }

    #[test]
    fn score_clamps_to_bounds() {
        assert_eq!(vulnerability_score(Some(&Magnitude::from_log2(-40.0))), 100.0);
        assert_eq!(vulnerability_score(Some(&Magnitude::from_log2(4000.0))), 0.0);
        assert_eq!(vulnerability_score(None), 0.0);
    }

    #[test]
    fn advantage_flags_unbounded_denominator() {
        let ratio = advantage_ratio(Magnitude::from_log2(90.0), None);
        assert!(ratio.exceeds_range);
        assert_eq!(ratio.factor, 0.0);
    }

    #[test]
    fn advantage_flags_overflowing_classical_side() {
        let ratio = advantage_ratio(
            Magnitude::from_log2(1100.0),
            Some(Magnitude::from_log2(900.0)),
        );
        assert!(ratio.exceeds_range);
    }

    #[test]
    fn advantage_below_one_is_representable() {
        let ratio = advantage_ratio(
            Magnitude::from_log2(10.0),
            Some(Magnitude::from_log2(20.0)),
        );
        assert!(!ratio.exceeds_range);
        assert!((ratio.factor - 2f64.powi(-10)).abs() < 1e-12);
    }
}
