use num_bigint::BigInt;
use serde::{Deserialize, Serialize};

use crate::error::EstimateError;
use crate::estimator::Estimator;
use crate::model::{AlgorithmKind, AlgorithmSpec, AnalysisResult, CostEstimate};

const SECONDS_PER_MINUTE: f64 = 60.0;
const SECONDS_PER_HOUR: f64 = 3600.0;
const SECONDS_PER_DAY: f64 = 86_400.0;
const SECONDS_PER_YEAR: f64 = 31_557_600.0;

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SupportedAlgorithm {
    pub name: &'static str,
    pub kind: AlgorithmKind,
    pub conventional_key_bits: u32,
}

const SUPPORTED: &[SupportedAlgorithm] = &[
    SupportedAlgorithm {
        name: "AES",
        kind: AlgorithmKind::SymmetricCipher,
        conventional_key_bits: 256,
    },
    SupportedAlgorithm {
        name: "SHA-256",
        kind: AlgorithmKind::Hash,
        conventional_key_bits: 256,
    },
    SupportedAlgorithm {
        name: "SHA-3",
        kind: AlgorithmKind::Hash,
        conventional_key_bits: 256,
    },
    SupportedAlgorithm {
        name: "Keccak-256",
        kind: AlgorithmKind::Hash,
        conventional_key_bits: 256,
    },
    SupportedAlgorithm {
        name: "RIPEMD-160",
        kind: AlgorithmKind::Hash,
        conventional_key_bits: 160,
    },
    SupportedAlgorithm {
        name: "ECDSA",
        kind: AlgorithmKind::EcdsaLike,
        conventional_key_bits: 256,
    },
    SupportedAlgorithm {
        name: "EdDSA",
        kind: AlgorithmKind::EcdsaLike,
        conventional_key_bits: 255,
    },
    SupportedAlgorithm {
        name: "RSA",
        kind: AlgorithmKind::RsaLike,
        conventional_key_bits: 2048,
    },
];

pub fn supported_algorithms() -> &'static [SupportedAlgorithm] {
    SUPPORTED
}

/// Maps a wire algorithm name to its kind. Names match the fixed table,
/// ASCII case-insensitively; anything else has no cost model.
pub fn algorithm_kind(name: &str) -> Option<AlgorithmKind> {
    SUPPORTED
        .iter()
        .find(|entry| entry.name.eq_ignore_ascii_case(name))
        .map(|entry| entry.kind)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRequest {
    pub algorithm: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_size: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number_to_factor: Option<String>,
}

impl AnalysisRequest {
    /// Validates the wire fields and produces the library spec. The key
    /// size arrives signed so that non-positive values come back as
    /// invalid-parameter errors instead of deserialization failures.
    pub fn to_spec(&self) -> Result<AlgorithmSpec, EstimateError> {
        let kind = algorithm_kind(&self.algorithm)
            .ok_or_else(|| EstimateError::unsupported(self.algorithm.clone()))?;
        let key_bits = match self.key_size {
            Some(v) if v <= 0 => {
                return Err(EstimateError::invalid(format!(
                    "keySize must be positive, got {}",
                    v
                )))
            }
            Some(v) if v > u32::MAX as i64 => {
                return Err(EstimateError::invalid(format!("keySize {} out of range", v)))
            }
            Some(v) => Some(v as u32),
            None => None,
        };
        let modulus = match &self.number_to_factor {
            Some(text) => Some(text.trim().parse::<BigInt>().map_err(|_| {
                EstimateError::invalid("numberToFactor must be a decimal integer")
            })?),
            None => None,
        };
        Ok(AlgorithmSpec {
            kind,
            key_bits,
            modulus,
        })
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimateSummary {
    pub success_rate: f64,
    pub time_to_break: f64,
    #[serde(skip_serializing_if = "is_false")]
    pub exceeds_range: bool,
    pub vulnerability_score: f64,
}

impl EstimateSummary {
    fn from_estimate(estimate: &CostEstimate) -> Self {
        Self {
            success_rate: estimate.success_rate,
            time_to_break: estimate.time_to_break.seconds,
            exceeds_range: estimate.time_to_break.exceeds_range,
            vulnerability_score: estimate.vulnerability_score,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvantageSummary {
    pub perfect: f64,
    #[serde(skip_serializing_if = "is_false")]
    pub perfect_exceeds_range: bool,
    pub current: f64,
    #[serde(skip_serializing_if = "is_false")]
    pub current_exceeds_range: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResponse {
    pub algorithm: String,
    pub key_size: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_to_factor: Option<String>,
    pub perfect_quantum: EstimateSummary,
    pub current_quantum: EstimateSummary,
    pub quantum_advantage: AdvantageSummary,
    pub note: String,
}

impl AnalysisResponse {
    pub fn from_result(request: &AnalysisRequest, result: &AnalysisResult) -> Self {
        let key_size = result.spec.key_bits.unwrap_or_else(|| {
            result
                .spec
                .modulus
                .as_ref()
                .map(|m| u32::try_from(m.bits()).unwrap_or(u32::MAX))
                .unwrap_or(0)
        });
        Self {
            algorithm: request.algorithm.clone(),
            key_size,
            number_to_factor: request.number_to_factor.clone(),
            perfect_quantum: EstimateSummary::from_estimate(&result.perfect_quantum),
            current_quantum: EstimateSummary::from_estimate(&result.current_quantum),
            quantum_advantage: AdvantageSummary {
                perfect: result.quantum_advantage.perfect.factor,
                perfect_exceeds_range: result.quantum_advantage.perfect.exceeds_range,
                current: result.quantum_advantage.current.factor,
                current_exceeds_range: result.quantum_advantage.current.exceeds_range,
            },
            note: result.note.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorBody {
    pub fn from_error(err: &EstimateError) -> Self {
        let details = match err {
            EstimateError::InvalidParameter { reason } => reason.clone(),
            EstimateError::UnsupportedAlgorithm { name } => {
                format!("no cost model registered for {}", name)
            }
        };
        Self {
            error: err.kind_label().to_string(),
            details: Some(details),
        }
    }
}

/// The single wire entry point: request in, response or taxonomy error
/// out.
pub fn analyze(
    estimator: &Estimator,
    request: &AnalysisRequest,
) -> Result<AnalysisResponse, EstimateError> {
    let spec = request.to_spec()?;
    let result = estimator.estimate(&spec)?;
    Ok(AnalysisResponse::from_result(request, &result))
}

pub fn print_human(response: &AnalysisResponse) {
    println!(
        "Algorithm: {} ({} bits)",
        response.algorithm, response.key_size
    );
    if let Some(n) = &response.number_to_factor {
        println!("Modulus: {}", n);
    }
    println!();
    println!(
        "{:<18} {:>10} {:>26} {:>7}",
        "adversary", "success %", "time to break", "score"
    );
    print_estimate_row("perfect quantum", &response.perfect_quantum);
    print_estimate_row("current quantum", &response.current_quantum);
    println!();
    println!(
        "Quantum advantage: perfect {}, current {}",
        format_ratio(
            response.quantum_advantage.perfect,
            response.quantum_advantage.perfect_exceeds_range
        ),
        format_ratio(
            response.quantum_advantage.current,
            response.quantum_advantage.current_exceeds_range
        )
    );
    println!("Note: {}", response.note);
}

fn print_estimate_row(label: &str, estimate: &EstimateSummary) {
    println!(
        "{:<18} {:>10.1} {:>26} {:>7.1}",
        label,
        estimate.success_rate,
        format_seconds(estimate.time_to_break, estimate.exceeds_range),
        estimate.vulnerability_score
    );
}

pub fn format_seconds(seconds: f64, exceeds_range: bool) -> String {
    if exceeds_range {
        return "beyond range".into();
    }
    if seconds < 1.0 {
        format!("{:.3} s", seconds)
    } else if seconds < SECONDS_PER_MINUTE {
        format!("{:.1} s", seconds)
    } else if seconds < SECONDS_PER_HOUR {
        format!("{:.1} min", seconds / SECONDS_PER_MINUTE)
    } else if seconds < SECONDS_PER_DAY {
        format!("{:.1} h", seconds / SECONDS_PER_HOUR)
    } else if seconds < SECONDS_PER_YEAR {
        format!("{:.1} days", seconds / SECONDS_PER_DAY)
    } else if seconds < SECONDS_PER_YEAR * 1e6 {
        format!("{:.1} years", seconds / SECONDS_PER_YEAR)
    } else {
        format!("{:.2e} years", seconds / SECONDS_PER_YEAR)
    }
}

pub fn format_ratio(factor: f64, exceeds_range: bool) -> String {
    if exceeds_range {
        return "beyond range".into();
    }
    if factor >= 1e6 {
        format!("{:.2e}x", factor)
    } else {
        format!("{:.2}x", factor)
    }
}

fn is_false(value: &bool) -> bool {
    !*value
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_maps_known_names() {
        assert_eq!(algorithm_kind("AES"), Some(AlgorithmKind::SymmetricCipher));
        assert_eq!(algorithm_kind("sha-256"), Some(AlgorithmKind::Hash));
        assert_eq!(algorithm_kind("EdDSA"), Some(AlgorithmKind::EcdsaLike));
        assert_eq!(algorithm_kind("rsa"), Some(AlgorithmKind::RsaLike));
        assert_eq!(algorithm_kind("zk-SNARKs"), None);
    }

    #[test]
    fn negative_key_size_is_invalid() {
        let request = AnalysisRequest {
            algorithm: "AES".into(),
            key_size: Some(-5),
            number_to_factor: None,
        };
        let err = request.to_spec().unwrap_err();
        assert!(matches!(err, EstimateError::InvalidParameter { .. }));
    }

    #[test]
    fn malformed_modulus_is_invalid() {
        let request = AnalysisRequest {
            algorithm: "RSA".into(),
            key_size: None,
            number_to_factor: Some("0x10001".into()),
        };
        let err = request.to_spec().unwrap_err();
        assert!(matches!(err, EstimateError::InvalidParameter { .. }));
    }

    #[test]
    fn seconds_formatting() {
        assert_eq!(format_seconds(0.016, false), "0.016 s");
        assert_eq!(format_seconds(90.0, false), "1.5 min");
        assert_eq!(format_seconds(1.0, true), "beyond range");
    }
}
