use std::f64::consts::LN_2;

use qve_core::{
    AlgorithmKind, AlgorithmSpec, CostModel, CostProfile, CurrentCost, EstimateError, Magnitude,
    ModelParams,
};

const PERFECT_SUCCESS_RATE: f64 = 98.0;
const CURRENT_SUCCESS_RATE: f64 = 75.0;
const OUT_OF_REACH_SUCCESS_RATE: f64 = 1.0;

// (64/9)^(1/3), the exponent constant of the general number field sieve.
const GNFS_CONSTANT: f64 = 1.923;

const BASE_NOTE: &str =
    "Shor's period finding factors the modulus in polynomial time, against a subexponential number field sieve classically.";
const QUBIT_SHORTFALL_NOTE: &str =
    "Current hardware cannot address enough qubits for this key size.";

/// Factoring attack against RSA-style moduli. The modulus bit length
/// comes from the modulus itself when one is given, otherwise from the
/// declared key size.
pub struct ShorFactoringModel;

impl CostModel for ShorFactoringModel {
    fn id(&self) -> &'static str {
        "shor_factoring"
    }

    fn kind(&self) -> AlgorithmKind {
        AlgorithmKind::RsaLike
    }

    fn cost(
        &self,
        spec: &AlgorithmSpec,
        params: &ModelParams,
    ) -> Result<CostProfile, EstimateError> {
        let bits = modulus_bits(spec)?;
        let bits_f = bits as f64;

        let classical_seconds =
            Magnitude::from_log2(gnfs_log2_ops(bits)? - params.classical_ops_per_second.log2());
        let perfect_seconds =
            Magnitude::from_log2(3.0 * bits_f.log2() + params.quantum_op_seconds.log2());

        if bits > u64::from(params.max_addressable_qubits) {
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

fn modulus_bits(spec: &AlgorithmSpec) -> Result<u64, EstimateError> {
    if let Some(modulus) = &spec.modulus {
        return Ok(modulus.bits());
    }
    match spec.key_bits {
        Some(bits) => Ok(u64::from(bits)),
        None => Err(EstimateError::invalid(
            "factoring costs need keyBits or modulusNumber",
        )),
    }
}

/// Classical factoring cost for an n-bit modulus, as log2 of the number
/// field sieve operation count: exp(1.923 (ln N)^(1/3) (ln ln N)^(2/3)).
fn gnfs_log2_ops(bits: u64) -> Result<f64, EstimateError> {
    if bits < 2 {
        return Err(EstimateError::invalid("modulusNumber is too small to factor"));
    }
    let ln_n = bits as f64 * LN_2;
    let exponent = GNFS_CONSTANT * ln_n.cbrt() * ln_n.ln().powf(2.0 / 3.0);
    Ok(exponent / LN_2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sieve_cost_grows_with_modulus_size() {
        let small = gnfs_log2_ops(1024).unwrap();
        let medium = gnfs_log2_ops(2048).unwrap();
        let large = gnfs_log2_ops(4096).unwrap();
        assert!(small < medium && medium < large);
    }

    #[test]
    fn sieve_cost_matches_published_rsa_2048_ballpark() {
        let ops = gnfs_log2_ops(2048).unwrap();
        assert!((110.0..125.0).contains(&ops), "got 2^{} ops", ops);
    }

    #[test]
    fn single_bit_modulus_is_rejected() {
        assert!(gnfs_log2_ops(1).is_err());
    }
}
