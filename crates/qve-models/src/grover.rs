use qve_core::{
    AlgorithmKind, AlgorithmSpec, CostModel, CostProfile, CurrentCost, EstimateError, Magnitude,
    ModelParams,
};

const PERFECT_SUCCESS_RATE: f64 = 95.0;
const CURRENT_SUCCESS_RATE: f64 = 40.0;

/// Unstructured Grover search against an n-bit secret. Classical brute
/// force walks the full 2^n space; the quantum adversary needs about
/// 2^(n/2) oracle queries.
pub struct GroverSearchModel {
    kind: AlgorithmKind,
}

impl GroverSearchModel {
    pub fn symmetric() -> Self {
        Self {
            kind: AlgorithmKind::SymmetricCipher,
        }
    }

    pub fn hash() -> Self {
        Self {
            kind: AlgorithmKind::Hash,
        }
    }

    fn note(&self) -> &'static str {
        match self.kind {
            AlgorithmKind::SymmetricCipher => {
                "Grover search halves the effective key strength; doubling the key length restores the classical margin."
            }
            _ => {
                "Grover search halves the effective preimage strength; doubling the digest length restores the classical margin."
            }
        }
    }
}

impl CostModel for GroverSearchModel {
    fn id(&self) -> &'static str {
        "grover_search"
    }

    fn kind(&self) -> AlgorithmKind {
        self.kind
    }

    fn cost(
        &self,
        spec: &AlgorithmSpec,
        params: &ModelParams,
    ) -> Result<CostProfile, EstimateError> {
        let bits = spec
            .key_bits
            .ok_or_else(|| EstimateError::invalid("keyBits is required for search costs"))?;
        let bits = f64::from(bits);

        let classical_seconds =
            Magnitude::from_log2(bits - params.classical_ops_per_second.log2());
        let perfect_seconds =
            Magnitude::from_log2(bits / 2.0 + params.quantum_op_seconds.log2());
        let current_seconds =
            CurrentCost::Bounded(perfect_seconds.scale(params.noise_overhead_factor));

        Ok(CostProfile {
            classical_seconds,
            perfect_seconds,
            current_seconds,
            perfect_success_rate: PERFECT_SUCCESS_RATE,
            current_success_rate: CURRENT_SUCCESS_RATE,
            note: self.note().to_string(),
        })
    }
}
