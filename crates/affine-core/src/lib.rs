// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! affine-core: rigid-body transform math over `f32` and `f64`.
//!
//! Provides a four-component [`Vector`], a quaternion-plus-translation
//! [`Transform`], a row-padded [`TransformMatrix`], and the conversions between
//! quaternions, matrices and axis-angle vectors. Every type is a small `Copy`
//! value; nothing here allocates, locks or performs I/O.
//!
//! Failure policy:
//! - Caller bugs (non-unit quaternion, zero-length normalize, reflection
//!   passed to `inverse`, out-of-range element access) panic. Checked `try_*`
//!   variants return [`MathError`] for callers handling untrusted input.
//! - Degenerate but valid geometry (zero rotation axis, parallel directions,
//!   antipodal slerp endpoints, camera on its target) resolves to a fallback
//!   value and emits a `tracing` trace event.
#![forbid(unsafe_code)]

mod error;
mod matrix;
pub mod quat;
mod scalar;
/// Whitespace-separated text codec for the core types.
pub mod text;
mod transform;
mod vector;

pub use error::MathError;
pub use matrix::{transform_lookat, Basis, TransformMatrix};
pub use quat::{
    axis_angle_from_matrix, axis_angle_from_quat, extract_axis_from_quat, matrix_from_axis_angle,
    matrix_from_axis_angle_packed, matrix_from_quat, matrix_from_quat_into, normalize_axis_rotation,
    quat_from_axis_angle, quat_from_axis_angle_packed, quat_from_matrix, quat_identity,
    quat_inverse, quat_multiply, quat_rotate, quat_rotate_direction, quat_slerp,
    try_matrix_from_quat, Axis, Quaternion, QUAT_NORM_TOLERANCE,
};
pub use scalar::Real;
pub use text::{decode, FromTokens, TextError, TokenReader};
pub use transform::Transform;
pub use vector::Vector;
