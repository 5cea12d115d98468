use num_bigint::BigInt;
use qve_core::{AlgorithmSpec, CostModel, CurrentCost, EstimateError, ModelParams};
use qve_models::{GroverSearchModel, ShorDiscreteLogModel, ShorFactoringModel};

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn grover_quantum_cost_is_the_square_root_of_classical_search() {
    let params = ModelParams::default();
    let profile = GroverSearchModel::symmetric()
        .cost(&AlgorithmSpec::symmetric(128), &params)
        .expect("cost should succeed");
    assert!(close(
        profile.perfect_seconds.log2(),
        64.0 + params.quantum_op_seconds.log2()
    ));
    assert!(close(
        profile.classical_seconds.log2(),
        128.0 - params.classical_ops_per_second.log2()
    ));
}

#[test]
fn noise_overhead_multiplies_the_current_cost() {
    let params = ModelParams::default();
    let profile = GroverSearchModel::hash()
        .cost(&AlgorithmSpec::hash(256), &params)
        .expect("cost should succeed");
    match profile.current_seconds {
        CurrentCost::Bounded(current) => assert!(close(
            current.log2(),
            profile.perfect_seconds.log2() + params.noise_overhead_factor.log2()
        )),
        CurrentCost::OutOfReach => panic!("hash search should stay in reach"),
    }
}

#[test]
fn discrete_log_quantum_cost_is_polynomial() {
    let params = ModelParams::default();
    let profile = ShorDiscreteLogModel
        .cost(&AlgorithmSpec::ecdsa(256), &params)
        .expect("cost should succeed");
    assert!(close(
        profile.perfect_seconds.log2(),
        3.0 * 8.0 + params.quantum_op_seconds.log2()
    ));
    assert!(close(
        profile.classical_seconds.log2(),
        128.0 - params.classical_ops_per_second.log2()
    ));
}

#[test]
fn oversized_curve_exhausts_the_qubit_budget() {
    let params = ModelParams::default();
    let profile = ShorDiscreteLogModel
        .cost(&AlgorithmSpec::ecdsa(521), &params)
        .expect("cost should succeed");
    assert!(matches!(profile.current_seconds, CurrentCost::OutOfReach));
    assert_eq!(profile.current_success_rate, 1.0);
    assert!(profile.note.contains("qubits"));
}

#[test]
fn curve_at_the_qubit_budget_stays_in_reach() {
    let params = ModelParams::default();
    let profile = ShorDiscreteLogModel
        .cost(&AlgorithmSpec::ecdsa(params.max_addressable_qubits), &params)
        .expect("cost should succeed");
    assert!(matches!(profile.current_seconds, CurrentCost::Bounded(_)));
}

#[test]
fn explicit_modulus_and_equivalent_key_size_agree() {
    let params = ModelParams::default();
    // 2^127 - 1, a 127-bit modulus.
    let modulus: BigInt = "170141183460469231731687303715884105727"
        .parse()
        .expect("modulus should parse");
    let from_modulus = ShorFactoringModel
        .cost(&AlgorithmSpec::rsa_modulus(modulus), &params)
        .expect("cost should succeed");
    let from_bits = ShorFactoringModel
        .cost(&AlgorithmSpec::rsa_bits(127), &params)
        .expect("cost should succeed");
    assert!(close(
        from_modulus.classical_seconds.log2(),
        from_bits.classical_seconds.log2()
    ));
    assert!(close(
        from_modulus.perfect_seconds.log2(),
        from_bits.perfect_seconds.log2()
    ));
}

#[test]
fn tiny_modulus_is_rejected() {
    let err = ShorFactoringModel
        .cost(&AlgorithmSpec::rsa_modulus(BigInt::from(1)), &ModelParams::default())
        .unwrap_err();
    assert!(matches!(err, EstimateError::InvalidParameter { .. }));
}

#[test]
fn factoring_without_any_size_input_is_rejected() {
    let err = ShorFactoringModel
        .cost(
            &AlgorithmSpec::new(qve_core::AlgorithmKind::RsaLike),
            &ModelParams::default(),
        )
        .unwrap_err();
    assert!(matches!(err, EstimateError::InvalidParameter { .. }));
}
