use num_bigint::BigInt;
use serde::{Deserialize, Serialize, Serializer};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Eq, PartialEq, Hash)]
pub enum AlgorithmKind {
    SymmetricCipher,
    Hash,
    EcdsaLike,
    RsaLike,
    Other,
}

impl AlgorithmKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlgorithmKind::SymmetricCipher => "symmetric-cipher",
            AlgorithmKind::Hash => "hash",
            AlgorithmKind::EcdsaLike => "signature-ecdsa-like",
            AlgorithmKind::RsaLike => "signature-rsa-like",
            AlgorithmKind::Other => "other",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AlgorithmSpec {
    pub kind: AlgorithmKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_bits: Option<u32>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "modulus_as_decimal"
    )]
    pub modulus: Option<BigInt>,
}

impl AlgorithmSpec {
    pub fn new(kind: AlgorithmKind) -> Self {
        Self {
            kind,
            key_bits: None,
            modulus: None,
        }
    }

    pub fn symmetric(key_bits: u32) -> Self {
        Self::new(AlgorithmKind::SymmetricCipher).with_key_bits(key_bits)
    }

    pub fn hash(key_bits: u32) -> Self {
        Self::new(AlgorithmKind::Hash).with_key_bits(key_bits)
    }

    pub fn ecdsa(key_bits: u32) -> Self {
        Self::new(AlgorithmKind::EcdsaLike).with_key_bits(key_bits)
    }

    pub fn rsa_bits(key_bits: u32) -> Self {
        Self::new(AlgorithmKind::RsaLike).with_key_bits(key_bits)
    }

    pub fn rsa_modulus(modulus: BigInt) -> Self {
        Self::new(AlgorithmKind::RsaLike).with_modulus(modulus)
    }

    pub fn with_key_bits(mut self, key_bits: u32) -> Self {
        self.key_bits = Some(key_bits);
        self
    }

    pub fn with_modulus(mut self, modulus: BigInt) -> Self {
        self.modulus = Some(modulus);
        self
    }
}

fn modulus_as_decimal<S: Serializer>(
    value: &Option<BigInt>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match value {
        Some(modulus) => serializer.serialize_str(&modulus.to_str_radix(10)),
        None => serializer.serialize_none(),
    }
}

/// Wall-clock seconds for one attack, capped at the largest finite f64.
/// `exceeds_range` marks values past the representable range, including
/// attacks the adversary cannot mount at all.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct TimeToBreak {
    pub seconds: f64,
    pub exceeds_range: bool,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct CostEstimate {
    pub success_rate: f64,
    pub time_to_break: TimeToBreak,
    pub vulnerability_score: f64,
}

/// Classical-over-quantum cost ratio. Carries the same range sentinel as
/// [`TimeToBreak`]; a flagged ratio means the true value is not
/// representable, never that the computation failed.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct AdvantageRatio {
    pub factor: f64,
    pub exceeds_range: bool,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct QuantumAdvantage {
    pub perfect: AdvantageRatio,
    pub current: AdvantageRatio,
}

#[derive(Debug, Clone, Serialize)]
pub struct AnalysisResult {
    pub spec: AlgorithmSpec,
    pub perfect_quantum: CostEstimate,
    pub current_quantum: CostEstimate,
    pub quantum_advantage: QuantumAdvantage,
    pub note: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_labels_are_stable() {
        assert_eq!(AlgorithmKind::SymmetricCipher.as_str(), "symmetric-cipher");
        assert_eq!(AlgorithmKind::EcdsaLike.as_str(), "signature-ecdsa-like");
    }

    #[test]
    fn modulus_serializes_as_decimal_string() {
        let spec = AlgorithmSpec::rsa_modulus(BigInt::from(3233));
        let value = serde_json::to_value(&spec).unwrap();
        assert_eq!(value["modulus"], serde_json::json!("3233"));
    }

    #[test]
    fn absent_fields_are_omitted() {
        let spec = AlgorithmSpec::hash(256);
        let value = serde_json::to_value(&spec).unwrap();
        assert!(value.get("modulus").is_none());
        assert_eq!(value["key_bits"], serde_json::json!(256));
    }
}
