use qve_core::{
    AlgorithmKind, AlgorithmSpec, CostModel, CostProfile, CurrentCost, EstimateError, Magnitude,
    ModelParams,
};

const PERFECT_SUCCESS_RATE: f64 = 98.0;
const CURRENT_SUCCESS_RATE: f64 = 75.0;
const OUT_OF_REACH_SUCCESS_RATE: f64 = 1.0;

const BASE_NOTE: &str =
    "Shor's period finding solves the curve discrete log in polynomial time; no larger curve restores the classical margin.";
const QUBIT_SHORTFALL_NOTE: &str =
    "Current hardware cannot address enough qubits for this key size.";

/// Discrete-log attack against ECDSA-style curve signatures. Classical
/// Pollard rho costs about 2^(n/2) group operations; Shor's algorithm
/// needs on the order of n^3 gates but one logical qubit per key bit.
pub struct ShorDiscreteLogModel;

impl CostModel for ShorDiscreteLogModel {
    fn id(&self) -> &'static str {
        "shor_discrete_log"
    }

    fn kind(&self) -> AlgorithmKind {
        AlgorithmKind::EcdsaLike
    }

    fn cost(
        &self,
        spec: &AlgorithmSpec,
        params: &ModelParams,
    ) -> Result<CostProfile, EstimateError> {
        let bits = spec
            .key_bits
            .ok_or_else(|| EstimateError::invalid("keyBits is required for discrete log costs"))?;
        let bits_f = f64::from(bits);

        let classical_seconds =
            Magnitude::from_log2(bits_f / 2.0 - params.classical_ops_per_second.log2());
        let perfect_seconds =
            Magnitude::from_log2(3.0 * bits_f.log2() + params.quantum_op_seconds.log2());

        if bits > params.max_addressable_qubits {
            return Ok(CostProfile {
                classical_seconds,
                perfect_seconds,
                current_seconds: CurrentCost::OutOfReach,
                perfect_success_rate: PERFECT_SUCCESS_RATE,
                current_success_rate: OUT_OF_REACH_SUCCESS_RATE,
                note: format!("{} {}", BASE_NOTE, QUBIT_SHORTFALL_NOTE),
            });
        }

        Ok(CostProfile {
            classical_seconds,
            perfect_seconds,
            current_seconds: CurrentCost::Bounded(
                perfect_seconds.scale(params.noise_overhead_factor),
            ),
            perfect_success_rate: PERFECT_SUCCESS_RATE,
            current_success_rate: CURRENT_SUCCESS_RATE,
            note: BASE_NOTE.to_string(),
        })
    }
}
