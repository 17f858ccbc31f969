// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Quaternion, rotation matrix, and axis-angle conversions.
//!
//! Quaternions are plain [`Vector`]s laid out as `(s, vx, vy, vz)`: the scalar
//! part lives in `x`, the vector part in `y, z, w`. Axis-angle values are
//! `axis * angle` packed into the first three components.
//!
//! Degenerate inputs (zero axis, parallel directions, antipodal slerp
//! endpoints) resolve to documented fallbacks and emit a `trace!` event.
//! Malformed inputs (non-unit quaternions) are caller bugs and panic; the
//! `try_*` twins report them as [`MathError`] instead.

use tracing::trace;

use crate::error::MathError;
use crate::matrix::TransformMatrix;
use crate::scalar::Real;
use crate::vector::Vector;

/// Quaternion `(s, vx, vy, vz)` stored in a [`Vector`].
pub type Quaternion<T = f64> = Vector<T>;

/// Squared-norm tolerance used to catch grossly malformed quaternions.
///
/// A quaternion passes when its squared norm lies strictly inside
/// `(1 - QUAT_NORM_TOLERANCE, 1 + QUAT_NORM_TOLERANCE)`.
pub const QUAT_NORM_TOLERANCE: f64 = 0.01;

const SLERP_SIN_EPSILON: f64 = 1e-7;
const ROTATE_DIRECTION_AXIS_EPSILON_SQ: f64 = 1e-8;

pub(crate) fn is_near_unit<T: Real>(norm_sq: T) -> bool {
    let tol = T::from_f64(QUAT_NORM_TOLERANCE);
    norm_sq > T::one() - tol && norm_sq < T::one() + tol
}

pub(crate) fn check_unit<T: Real>(q: &Quaternion<T>) -> Result<(), MathError> {
    let norm_sq = q.length_sqr4();
    if is_near_unit(norm_sq) {
        Ok(())
    } else {
        Err(MathError::NonUnitQuaternion {
            norm_sq: norm_sq.to_f64(),
        })
    }
}

/// Rotation matrix column selector for [`extract_axis_from_quat`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    /// First column.
    X,
    /// Second column.
    Y,
    /// Third column.
    Z,
}

impl TryFrom<usize> for Axis {
    type Error = MathError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        match index {
            0 => Ok(Self::X),
            1 => Ok(Self::Y),
            2 => Ok(Self::Z),
            _ => Err(MathError::AxisOutOfRange { index }),
        }
    }
}

/// The identity rotation `(1, 0, 0, 0)`.
pub fn quat_identity<T: Real>() -> Quaternion<T> {
    Vector::new(T::one(), T::zero(), T::zero(), T::zero())
}

/// Rotation of `angle` radians about `axis`. The axis need not be unit length.
///
/// Returns the identity when `axis` has exactly zero length.
///
/// # Examples
/// ```
/// use affine_core::{quat_from_axis_angle, Vector};
/// let q = quat_from_axis_angle(&Vector::new3(0.0, 0.0, 1.0), std::f64::consts::FRAC_PI_2);
/// assert!((q.x() - 0.5_f64.sqrt()).abs() < 1e-12);
/// assert!((q.w() - 0.5_f64.sqrt()).abs() < 1e-12);
/// ```
pub fn quat_from_axis_angle<T: Real>(axis: &Vector<T>, angle: T) -> Quaternion<T> {
    let axislen = axis.length_sqr3();
    if axislen == T::zero() {
        trace!("zero-length rotation axis; returning identity");
        return quat_identity();
    }
    let (sinang, cosang) = (angle * T::half()).sin_cos();
    let f = sinang / axislen.sqrt();
    Vector::new(cosang, axis.x() * f, axis.y() * f, axis.z() * f)
}

/// [`quat_from_axis_angle`] for a packed `axis * angle` vector.
pub fn quat_from_axis_angle_packed<T: Real>(axisangle: &Vector<T>) -> Quaternion<T> {
    let angle = axisangle.length_sqr3().sqrt();
    if angle == T::zero() {
        trace!("zero-length rotation axis; returning identity");
        return quat_identity();
    }
    quat_from_axis_angle(axisangle, angle)
}

/// Unit quaternion for the rotation block of `m` (Shepperd's method).
///
/// Branches on the trace and, when it is negative, on the largest diagonal
/// element so the leading component is never a small difference.
pub fn quat_from_matrix<T: Real>(m: &TransformMatrix<T>) -> Quaternion<T> {
    let r = |i: usize, j: usize| m.rot(i, j);
    let l = T::one();
    let tr = r(0, 0) + r(1, 1) + r(2, 2);
    let mut q = if tr >= T::zero() {
        Vector::new(
            tr + l,
            r(2, 1) - r(1, 2),
            r(0, 2) - r(2, 0),
            r(1, 0) - r(0, 1),
        )
    } else if r(1, 1) > r(0, 0) && r(1, 1) >= r(2, 2) {
        Vector::new(
            r(0, 2) - r(2, 0),
            r(0, 1) + r(1, 0),
            r(1, 1) - (r(2, 2) + r(0, 0)) + l,
            r(1, 2) + r(2, 1),
        )
    } else if r(2, 2) > r(0, 0) {
        Vector::new(
            r(1, 0) - r(0, 1),
            r(2, 0) + r(0, 2),
            r(1, 2) + r(2, 1),
            r(2, 2) - (r(0, 0) + r(1, 1)) + l,
        )
    } else {
        Vector::new(
            r(2, 1) - r(1, 2),
            r(0, 0) - (r(1, 1) + r(2, 2)) + l,
            r(0, 1) + r(1, 0),
            r(2, 0) + r(0, 2),
        )
    };
    q.normalize4();
    q
}

/// Writes the rotation for `quat` into `m`, leaving its translation alone.
///
/// # Panics
/// Panics if `quat`'s squared norm is outside `(0.99, 1.01)`.
pub fn matrix_from_quat_into<T: Real>(m: &mut TransformMatrix<T>, quat: &Quaternion<T>) {
    let l2 = quat.length_sqr4();
    assert!(
        is_near_unit(l2),
        "quaternion is not unit length (squared norm {l2})"
    );
    fill_rotation(m, quat, l2);
}

fn fill_rotation<T: Real>(m: &mut TransformMatrix<T>, q: &Quaternion<T>, l2: T) {
    let il = T::two() / l2;
    let [q0, q1, q2, q3] = q.to_array();
    let l = T::one();
    m.rot_from_rows([
        [
            l - il * q2 * q2 - il * q3 * q3,
            il * (q1 * q2 - q0 * q3),
            il * (q1 * q3 + q0 * q2),
        ],
        [
            il * (q1 * q2 + q0 * q3),
            l - il * q1 * q1 - il * q3 * q3,
            il * (q2 * q3 - q0 * q1),
        ],
        [
            il * (q1 * q3 - q0 * q2),
            il * (q2 * q3 + q0 * q1),
            l - il * q1 * q1 - il * q2 * q2,
        ],
    ]);
}

/// Rotation matrix (zero translation) for `quat`.
///
/// # Panics
/// Panics if `quat`'s squared norm is outside `(0.99, 1.01)`.
pub fn matrix_from_quat<T: Real>(quat: &Quaternion<T>) -> TransformMatrix<T> {
    let mut m = TransformMatrix::identity();
    matrix_from_quat_into(&mut m, quat);
    m
}

/// Checked [`matrix_from_quat`].
pub fn try_matrix_from_quat<T: Real>(quat: &Quaternion<T>) -> Result<TransformMatrix<T>, MathError> {
    check_unit(quat)?;
    let mut m = TransformMatrix::identity();
    fill_rotation(&mut m, quat, quat.length_sqr4());
    Ok(m)
}

/// Rotation matrix for `angle` radians about `axis`.
pub fn matrix_from_axis_angle<T: Real>(axis: &Vector<T>, angle: T) -> TransformMatrix<T> {
    matrix_from_quat(&quat_from_axis_angle(axis, angle))
}

/// Rotation matrix for a packed `axis * angle` vector.
pub fn matrix_from_axis_angle_packed<T: Real>(axisangle: &Vector<T>) -> TransformMatrix<T> {
    matrix_from_quat(&quat_from_axis_angle_packed(axisangle))
}

/// Hamilton product `q0 * q1`. The result is not renormalized.
pub fn quat_multiply<T: Real>(q0: &Quaternion<T>, q1: &Quaternion<T>) -> Quaternion<T> {
    let [a0, a1, a2, a3] = q0.to_array();
    let [b0, b1, b2, b3] = q1.to_array();
    Vector::new(
        a0 * b0 - a1 * b1 - a2 * b2 - a3 * b3,
        a0 * b1 + a1 * b0 + a2 * b3 - a3 * b2,
        a0 * b2 + a2 * b0 + a3 * b1 - a1 * b3,
        a0 * b3 + a3 * b0 + a1 * b2 - a2 * b1,
    )
}

/// Conjugate of `q`; the inverse only when `q` is unit length.
pub fn quat_inverse<T: Real>(q: &Quaternion<T>) -> Quaternion<T> {
    Vector::new(q.x(), -q.y(), -q.z(), -q.w())
}

/// Spherical linear interpolation from `q0` (`t = 0`) to `q1` (`t = 1`) along
/// the shorter arc.
///
/// When the endpoints are nearly antipodal after the shorter-arc flip the
/// result falls back to their plain average.
pub fn quat_slerp<T: Real>(q0: &Quaternion<T>, q1: &Quaternion<T>, t: T) -> Quaternion<T> {
    let qb = if q0.dot(q1) < T::zero() { -*q1 } else { *q1 };
    let cos_half = q0.dot(&qb);
    if cos_half.abs() >= T::one() {
        return *q0;
    }

    let half_theta = cos_half.acos();
    let sin_half = (T::one() - cos_half * cos_half).sqrt();
    if sin_half.abs() < T::from_f64(SLERP_SIN_EPSILON) {
        trace!("slerp endpoints are antipodal; blending linearly");
        return (*q0 + qb) * T::half();
    }

    let ratio_a = ((T::one() - t) * half_theta).sin() / sin_half;
    let ratio_b = (t * half_theta).sin() / sin_half;
    *q0 * ratio_a + qb * ratio_b
}

/// Rotates `v` by `q` using the expanded rotation matrix. The result has
/// `w = 0`.
pub fn quat_rotate<T: Real>(q: &Quaternion<T>, v: &Vector<T>) -> Vector<T> {
    let two = T::two();
    let [s, x, y, z] = q.to_array();
    let (xx, xy, xz, xw) = (two * x * x, two * x * y, two * x * z, two * x * s);
    let (yy, yz, yw) = (two * y * y, two * y * z, two * y * s);
    let (zz, zw) = (two * z * z, two * z * s);
    let l = T::one();
    Vector::new3(
        (l - yy - zz) * v.x() + (xy - zw) * v.y() + (xz + yw) * v.z(),
        (xy + zw) * v.x() + (l - xx - zz) * v.y() + (yz - xw) * v.z(),
        (xz - yw) * v.x() + (yz + xw) * v.y() + (l - xx - yy) * v.z(),
    )
}

/// Column `axis` of the rotation matrix implied by `q`, without building the
/// whole matrix.
pub fn extract_axis_from_quat<T: Real>(q: &Quaternion<T>, axis: Axis) -> Vector<T> {
    let two = T::two();
    let l = T::one();
    let [s, x, y, z] = q.to_array();
    match axis {
        Axis::X => Vector::new3(
            l - two * (y * y + z * z),
            two * (x * y + z * s),
            two * (x * z - y * s),
        ),
        Axis::Y => Vector::new3(
            two * (x * y - z * s),
            l - two * (x * x + z * z),
            two * (y * z + x * s),
        ),
        Axis::Z => Vector::new3(
            two * (x * z + y * s),
            two * (y * z - x * s),
            l - two * (x * x + y * y),
        ),
    }
}

/// Smallest rotation taking direction `source` onto direction `target`. Both
/// should be unit length.
///
/// Exactly opposite directions rotate half a turn about an axis perpendicular
/// to `source`, built from world +X or, failing that, world +Z.
pub fn quat_rotate_direction<T: Real>(source: &Vector<T>, target: &Vector<T>) -> Quaternion<T> {
    let (o, l) = (T::zero(), T::one());
    let rottodirection = source.cross(target);
    let fsin = rottodirection.length_sqr3().sqrt();
    let fcos = source.dot3(target);
    if fsin > o {
        return quat_from_axis_angle(&(rottodirection * (l / fsin)), fsin.atan2(fcos));
    }
    if fcos < o {
        trace!("source and target directions are opposite; picking a perpendicular axis");
        let mut axis = Vector::new3(l, o, o);
        axis -= *source * source.dot3(&axis);
        if axis.length_sqr3() < T::from_f64(ROTATE_DIRECTION_AXIS_EPSILON_SQ) {
            axis = Vector::new3(o, o, l);
            axis -= *source * source.dot3(&axis);
        }
        axis.normalize3();
        return quat_from_axis_angle(&axis, fsin.atan2(fcos));
    }
    quat_identity()
}

/// Removes the twist of `quat` about `axis`.
///
/// Finds the angle whose rotation about `axis`, applied before `quat`, brings
/// the result closest to the identity. Returns `(angle, corrected)` where
/// `corrected = rotation(axis, angle) * quat`.
pub fn normalize_axis_rotation<T: Real>(axis: &Vector<T>, quat: &Quaternion<T>) -> (T, Quaternion<T>) {
    let axislen = axis.length_sqr3().sqrt();
    let half = (-quat.w() * axis.z() - quat.z() * axis.y() - quat.y() * axis.x()).atan2(quat.x() * axislen);
    let (sinhalf, coshalf) = half.sin_cos();
    let f = sinhalf / axislen;
    let normalizing = Vector::new(coshalf, axis.x() * f, axis.y() * f, axis.z() * f);
    (T::two() * half, quat_multiply(&normalizing, quat))
}

/// Packed `axis * angle` form of `quat`, with the angle in `[0, π]`.
///
/// Returns the zero vector when the vector part is exactly zero.
pub fn axis_angle_from_quat<T: Real>(quat: &Quaternion<T>) -> Vector<T> {
    let sinang_sq = quat.y() * quat.y() + quat.z() * quat.z() + quat.w() * quat.w();
    if sinang_sq == T::zero() {
        trace!("quaternion has no vector part; axis-angle is zero");
        return Vector::zero();
    }
    let q = if quat.x() < T::zero() { -*quat } else { *quat };
    let sinang = sinang_sq.sqrt();
    let f = T::two() * sinang.atan2(q.x()) / sinang;
    Vector::new3(q.y() * f, q.z() * f, q.w() * f)
}

/// Packed `axis * angle` form of the rotation block of `m`.
pub fn axis_angle_from_matrix<T: Real>(m: &TransformMatrix<T>) -> Vector<T> {
    axis_angle_from_quat(&quat_from_matrix(m))
}
