#![no_main]
use libfuzzer_sys::fuzz_target;
use qve_core::report::{analyze, AnalysisRequest};
use qve_core::Estimator;

fuzz_target!(|data: &[u8]| {
    if let Ok(request) = serde_json::from_slice::<AnalysisRequest>(data) {
        let estimator = Estimator::new(qve_models::default_models());
        let _ = analyze(&estimator, &request);
    }
});
