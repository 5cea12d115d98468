use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::{info, warn};

use crate::params::ModelParams;

const MAX_CONFIG_BYTES: u64 = 1024 * 1024;
const MIN_NOISE_OVERHEAD_FACTOR: f64 = 1.0;
const MAX_NOISE_OVERHEAD_FACTOR: f64 = 1e18;
const MAX_ADDRESSABLE_QUBITS_LIMIT: u32 = 1_000_000;
const MIN_CLASSICAL_OPS_PER_SECOND: f64 = 1.0;
const MAX_CLASSICAL_OPS_PER_SECOND: f64 = 1e30;
const MIN_QUANTUM_OP_SECONDS: f64 = 1e-15;
const MAX_QUANTUM_OP_SECONDS: f64 = 1.0;

#[derive(Debug, Deserialize)]
pub struct Config {
    pub profiles: Option<HashMap<String, Profile>>,
    pub estimator: Option<EstimatorConfig>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Profile {
    pub estimator: Option<EstimatorConfig>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct EstimatorConfig {
    pub noise_overhead_factor: Option<f64>,
    pub max_addressable_qubits: Option<u32>,
    pub classical_ops_per_second: Option<f64>,
    pub quantum_op_seconds: Option<f64>,
}

impl Config {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if let Ok(meta) = fs::metadata(path) {
            if meta.len() > MAX_CONFIG_BYTES {
                return Err(anyhow::anyhow!(
                    "config {} exceeds {} bytes",
                    path.display(),
                    MAX_CONFIG_BYTES
                ));
            }
        }
        let data = fs::read_to_string(path)?;
        let cfg = match path.extension().and_then(|s| s.to_str()) {
            Some("toml") => toml::from_str::<Config>(&data)?,
            Some("yaml") | Some("yml") => serde_yaml::from_str::<Config>(&data)?,
            _ => toml::from_str::<Config>(&data)
                .or_else(|_| serde_yaml::from_str::<Config>(&data))?,
        };
        Ok(cfg)
    }

    /// Applies the base `[estimator]` section, then the named profile's
    /// overlay on top of it. Invalid values are rejected field by field.
    pub fn apply(&self, params: &mut ModelParams, profile: Option<&str>) {
        if let Some(estimator) = &self.estimator {
            apply_estimator(estimator, params);
        }
        if let Some(p) = profile {
            if let Some(profiles) = &self.profiles {
                if let Some(profile_cfg) = profiles.get(p) {
                    if let Some(estimator) = &profile_cfg.estimator {
                        apply_estimator(estimator, params);
                    }
                }
            }
        }
    }
}

fn apply_estimator(cfg: &EstimatorConfig, params: &mut ModelParams) {
    if let Some(v) = cfg.noise_overhead_factor {
        // Below 1 would let the noisy adversary beat the idealized one.
        if !v.is_finite() || !(MIN_NOISE_OVERHEAD_FACTOR..=MAX_NOISE_OVERHEAD_FACTOR).contains(&v)
        {
            warn!(value = v, "Invalid noise_overhead_factor in config");
        } else {
            info!(value = v, "Config override noise_overhead_factor");
            params.noise_overhead_factor = v;
        }
    }
    if let Some(v) = cfg.max_addressable_qubits {
        if v == 0 || v > MAX_ADDRESSABLE_QUBITS_LIMIT {
            warn!(
                value = v,
                limit = MAX_ADDRESSABLE_QUBITS_LIMIT,
                "Invalid max_addressable_qubits in config"
            );
        } else {
            info!(value = v, "Config override max_addressable_qubits");
            params.max_addressable_qubits = v;
        }
    }
    if let Some(v) = cfg.classical_ops_per_second {
        if !v.is_finite()
            || !(MIN_CLASSICAL_OPS_PER_SECOND..=MAX_CLASSICAL_OPS_PER_SECOND).contains(&v)
        {
            warn!(value = v, "Invalid classical_ops_per_second in config");
        } else {
            info!(value = v, "Config override classical_ops_per_second");
            params.classical_ops_per_second = v;
        }
    }
    if let Some(v) = cfg.quantum_op_seconds {
        if !v.is_finite() || !(MIN_QUANTUM_OP_SECONDS..=MAX_QUANTUM_OP_SECONDS).contains(&v) {
            warn!(value = v, "Invalid quantum_op_seconds in config");
        } else {
            info!(value = v, "Config override quantum_op_seconds");
            params.quantum_op_seconds = v;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toml_overrides_apply() {
        let cfg: Config = toml::from_str(
            r#"
            [estimator]
            noise_overhead_factor = 1000.0
            max_addressable_qubits = 512
            "#,
        )
        .unwrap();
        let mut params = ModelParams::default();
        cfg.apply(&mut params, None);
        assert_eq!(params.noise_overhead_factor, 1000.0);
        assert_eq!(params.max_addressable_qubits, 512);
    }

    #[test]
    fn profile_overlay_wins_over_base() {
        let cfg: Config = toml::from_str(
            r#"
            [estimator]
            max_addressable_qubits = 128

            [profiles.lab.estimator]
            max_addressable_qubits = 4096
            "#,
        )
        .unwrap();
        let mut params = ModelParams::default();
        cfg.apply(&mut params, Some("lab"));
        assert_eq!(params.max_addressable_qubits, 4096);
    }

    #[test]
    fn sub_unity_noise_factor_is_rejected() {
        let cfg: Config = toml::from_str(
            r#"
            [estimator]
            noise_overhead_factor = 0.5
            "#,
        )
        .unwrap();
        let mut params = ModelParams::default();
        cfg.apply(&mut params, None);
        assert_eq!(
            params.noise_overhead_factor,
            ModelParams::default().noise_overhead_factor
        );
    }

    #[test]
    fn yaml_parses_logging_section() {
        let cfg: Config = serde_yaml::from_str(
            r#"
            logging:
              level: debug
            estimator:
              quantum_op_seconds: 0.000001
            "#,
        )
        .unwrap();
        assert_eq!(cfg.logging.as_ref().unwrap().level.as_deref(), Some("debug"));
        let mut params = ModelParams::default();
        cfg.apply(&mut params, None);
        assert_eq!(params.quantum_op_seconds, 1e-6);
    }

    #[test]
    fn zero_qubits_rejected() {
        let cfg: Config = toml::from_str(
            r#"
            [estimator]
            max_addressable_qubits = 0
            "#,
        )
        .unwrap();
        let mut params = ModelParams::default();
        cfg.apply(&mut params, None);
        assert_eq!(
            params.max_addressable_qubits,
            ModelParams::default().max_addressable_qubits
        );
    }
}
