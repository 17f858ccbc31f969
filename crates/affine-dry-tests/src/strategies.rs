// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Proptest strategies.
//!
//! Quaternions are drawn from the unit 4-cube and rejected when too close to
//! the origin before normalizing, so the distribution is never degenerate.

use affine_core::{Quaternion, Transform, TransformMatrix, Vector};
use proptest::prelude::*;

/// Unit quaternion with every component in `[-1, 1]` before normalizing.
pub fn unit_quat() -> impl Strategy<Value = Quaternion> {
    prop::array::uniform4(-1.0f64..1.0)
        .prop_filter("quaternion too close to zero", |c| {
            c.iter().map(|v| v * v).sum::<f64>() > 0.01
        })
        .prop_map(|c| Vector::from(c).normalized4())
}

/// Vector with `x, y, z` in `[-range, range]` and `w = 0`.
pub fn vector3(range: f64) -> impl Strategy<Value = Vector> {
    prop::array::uniform3(-range..range).prop_map(Vector::from)
}

/// [`vector3`] excluding vectors shorter than `0.1`.
pub fn nonzero_vector(range: f64) -> impl Strategy<Value = Vector> {
    vector3(range).prop_filter("vector too short", |v| v.length_sqr3() > 0.01)
}

/// Rigid transform with translation in `[-100, 100]`.
pub fn rigid_transform() -> impl Strategy<Value = Transform> {
    (unit_quat(), vector3(100.0)).prop_map(|(rot, trans)| Transform::new(rot, trans))
}

/// [`rigid_transform`] as a [`TransformMatrix`].
pub fn rigid_matrix() -> impl Strategy<Value = TransformMatrix> {
    rigid_transform().prop_map(TransformMatrix::from)
}
