const DEFAULT_NOISE_OVERHEAD_FACTOR: f64 = 1e6;
const DEFAULT_MAX_ADDRESSABLE_QUBITS: u32 = 256;
const DEFAULT_CLASSICAL_OPS_PER_SECOND: f64 = 1e9;
const DEFAULT_QUANTUM_OP_SECONDS: f64 = 1e-6;

/// Tunable constants shared by every cost model. One instance lives in
/// the estimator and is passed by reference to each model invocation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelParams {
    /// Multiplier applied to the idealized quantum time to account for
    /// error-correction overhead on current hardware. Never below 1, so
    /// the current-era adversary cannot beat the idealized one.
    pub noise_overhead_factor: f64,
    /// Largest key size, in bits, the current-era adversary can map onto
    /// addressable qubits. Primitives past it are out of reach today.
    pub max_addressable_qubits: u32,
    /// Sequential trial rate assumed for the classical adversary.
    pub classical_ops_per_second: f64,
    /// Wall-clock cost of one operation on the idealized quantum machine.
    pub quantum_op_seconds: f64,
}

impl Default for ModelParams {
    fn default() -> Self {
        Self {
            noise_overhead_factor: DEFAULT_NOISE_OVERHEAD_FACTOR,
            max_addressable_qubits: DEFAULT_MAX_ADDRESSABLE_QUBITS,
            classical_ops_per_second: DEFAULT_CLASSICAL_OPS_PER_SECOND,
            quantum_op_seconds: DEFAULT_QUANTUM_OP_SECONDS,
        }
    }
}
