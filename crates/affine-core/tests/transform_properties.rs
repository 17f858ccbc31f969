// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
#![allow(clippy::expect_used, clippy::unwrap_used)]
use affine_core::{
    matrix_from_quat, quat_from_matrix, quat_identity, quat_slerp, Transform, TransformMatrix,
    Vector,
};
use affine_dry_tests::{
    rigid_matrix, rigid_transform, same_rotation, unit_quat, vec_close, vector3,
};
use proptest::prelude::*;
use proptest::test_runner::{Config as PropConfig, RngAlgorithm, TestRng, TestRunner};

const TOL: f64 = 1e-9;

fn is_identity(t: &Transform, tol: f64) -> bool {
    same_rotation(&t.rot(), &quat_identity(), tol) && vec_close(&t.trans(), &Vector::zero(), tol)
}

proptest! {
    #[test]
    fn quat_matrix_round_trip_up_to_sign(q in unit_quat()) {
        let back = quat_from_matrix(&matrix_from_quat(&q));
        prop_assert!(same_rotation(&back, &q, 1e-9), "{q:?} -> {back:?}");
    }

    #[test]
    fn transform_times_inverse_is_identity(t in rigid_transform()) {
        prop_assert!(is_identity(&(t * t.inverse()), TOL));
        prop_assert!(is_identity(&(t.inverse() * t), TOL));
    }

    #[test]
    fn matrix_times_inverse_is_identity(m in rigid_matrix()) {
        let id = m * m.inverse();
        for i in 0..3 {
            for j in 0..3 {
                let expected = if i == j { 1.0 } else { 0.0 };
                prop_assert!((id.rot(i, j) - expected).abs() < TOL);
            }
        }
        prop_assert!(vec_close(&id.trans(), &Vector::zero(), TOL));
    }

    #[test]
    fn normalize4_is_idempotent(c in prop::array::uniform4(-10.0f64..10.0)) {
        let v = Vector::from(c);
        prop_assume!(v.length_sqr4() > 1e-6);
        let once = v.normalized4();
        let twice = once.normalized4();
        prop_assert!(vec_close(&once, &twice, 1e-12));
        prop_assert!((once.length_sqr4() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn slerp_hits_both_endpoints(q0 in unit_quat(), q1 in unit_quat()) {
        prop_assert!(same_rotation(&quat_slerp(&q0, &q1, 0.0), &q0, 1e-6));
        prop_assert!(same_rotation(&quat_slerp(&q0, &q1, 1.0), &q1, 1e-6));
    }

    #[test]
    fn composition_is_associative(
        a in rigid_transform(),
        b in rigid_transform(),
        c in rigid_transform(),
    ) {
        let left = (a * b) * c;
        let right = a * (b * c);
        prop_assert!(same_rotation(&left.rot(), &right.rot(), 1e-9));
        prop_assert!(vec_close(&left.trans(), &right.trans(), 1e-8));
    }

    #[test]
    fn transform_and_matrix_act_alike(t in rigid_transform(), p in vector3(50.0)) {
        let m = TransformMatrix::from(&t);
        prop_assert!(vec_close(&(m * p), &(t * p), 1e-9));
        prop_assert!(vec_close(&m.rotate(&p), &t.rotate(&p), 1e-9));
    }
}

#[test]
fn proptest_seed_pinned_matrix_composition() {
    const SEED_BYTES: [u8; 32] = [
        0x5a, 0xff, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
        0, 0, 0,
    ];

    let rng = TestRng::from_seed(RngAlgorithm::ChaCha, &SEED_BYTES);
    let mut runner = TestRunner::new_with_rng(PropConfig::default(), rng);

    runner
        .run(&(rigid_transform(), rigid_transform()), |(a, b)| {
            let composed = TransformMatrix::from(&(a * b));
            let product = TransformMatrix::from(&a) * TransformMatrix::from(&b);
            for (x, y) in composed.padded().iter().zip(product.padded()) {
                prop_assert!((x - y).abs() < 1e-9, "{composed:?} vs {product:?}");
            }
            prop_assert!(vec_close(&composed.trans(), &product.trans(), 1e-8));
            Ok(())
        })
        .expect("matrix composition agrees with transform composition");
}
