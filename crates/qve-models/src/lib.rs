pub mod grover;
pub mod shor_dlog;
pub mod shor_factor;

use qve_core::CostModel;

pub use grover::GroverSearchModel;
pub use shor_dlog::ShorDiscreteLogModel;
pub use shor_factor::ShorFactoringModel;

/// The built-in registry. Symmetric ciphers and hashes both route to
/// Grover-style search; curve signatures and RSA-style moduli route to
/// the two Shor variants.
pub fn default_models() -> Vec<Box<dyn CostModel>> {
    vec![
        Box::new(GroverSearchModel::symmetric()),
        Box::new(GroverSearchModel::hash()),
        Box::new(ShorDiscreteLogModel),
        Box::new(ShorFactoringModel),
    ]
}
