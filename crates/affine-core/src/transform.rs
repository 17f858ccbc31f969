// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::fmt;
use core::ops::{Mul, MulAssign};

use crate::error::MathError;
use crate::quat::{
    check_unit, is_near_unit, quat_identity, quat_inverse, quat_multiply, quat_rotate, Quaternion,
};
use crate::scalar::Real;
use crate::vector::Vector;

/// Rigid transform: a unit quaternion rotation followed by a translation.
///
/// The rotation is stored `(s, vx, vy, vz)`; see [`crate::quat`]. Construction
/// asserts the quaternion's squared norm lies in `(0.99, 1.01)` so garbage
/// input fails loudly; [`Transform::try_new`] reports the same condition as a
/// [`MathError`].
///
/// # Examples
/// ```
/// use affine_core::{quat_from_axis_angle, Transform, Vector};
/// let rot = quat_from_axis_angle(&Vector::new3(0.0, 0.0, 1.0), std::f64::consts::FRAC_PI_2);
/// let t = Transform::new(rot, Vector::new3(1.0, 0.0, 0.0));
/// let p = t * Vector::new3(1.0, 0.0, 0.0);
/// assert!((p.x() - 1.0).abs() < 1e-12 && (p.y() - 1.0).abs() < 1e-12);
/// ```
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        try_from = "TransformRepr<T>",
        bound(deserialize = "T: Real + serde::Deserialize<'de>")
    )
)]
pub struct Transform<T = f64> {
    rot: Quaternion<T>,
    trans: Vector<T>,
}

/// Unchecked wire form; deserialization goes through [`Transform::try_new`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct TransformRepr<T> {
    rot: Quaternion<T>,
    trans: Vector<T>,
}

#[cfg(feature = "serde")]
impl<T: Real> TryFrom<TransformRepr<T>> for Transform<T> {
    type Error = MathError;

    fn try_from(repr: TransformRepr<T>) -> Result<Self, Self::Error> {
        Self::try_new(repr.rot, repr.trans)
    }
}

impl<T: Real> Default for Transform<T> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<T: Real> Transform<T> {
    /// Identity rotation `(1, 0, 0, 0)` with zero translation.
    pub fn identity() -> Self {
        Self {
            rot: quat_identity(),
            trans: Vector::zero(),
        }
    }

    /// Resets to the identity.
    pub fn set_identity(&mut self) {
        *self = Self::identity();
    }

    /// Builds a transform from a rotation and translation.
    ///
    /// # Panics
    /// Panics if `rot`'s squared norm is outside `(0.99, 1.01)`.
    pub fn new(rot: Quaternion<T>, trans: Vector<T>) -> Self {
        let norm_sq = rot.length_sqr4();
        assert!(
            is_near_unit(norm_sq),
            "quaternion is not unit length (squared norm {norm_sq})"
        );
        Self { rot, trans }
    }

    /// Checked [`Transform::new`].
    pub fn try_new(rot: Quaternion<T>, trans: Vector<T>) -> Result<Self, MathError> {
        check_unit(&rot)?;
        Ok(Self { rot, trans })
    }

    /// Rotation quaternion.
    pub fn rot(&self) -> Quaternion<T> {
        self.rot
    }

    /// Translation.
    pub fn trans(&self) -> Vector<T> {
        self.trans
    }

    /// Replaces the rotation.
    ///
    /// # Panics
    /// Panics if `rot`'s squared norm is outside `(0.99, 1.01)`.
    pub fn set_rot(&mut self, rot: Quaternion<T>) {
        *self = Self::new(rot, self.trans);
    }

    /// Replaces the translation.
    pub fn set_trans(&mut self, trans: Vector<T>) {
        self.trans = trans;
    }

    /// Rotates `v` without translating it.
    pub fn rotate(&self, v: &Vector<T>) -> Vector<T> {
        quat_rotate(&self.rot, v)
    }

    /// Composes rotations only: `self.trans` is ignored, and the result's
    /// translation is `other.trans` rotated by `self`.
    pub fn rotate_transform(&self, other: &Self) -> Self {
        Self {
            rot: self.compose_rot(&other.rot),
            trans: self.rotate(&other.trans),
        }
    }

    fn compose_rot(&self, other: &Quaternion<T>) -> Quaternion<T> {
        let mut rot = quat_multiply(&self.rot, other);
        let norm_sq = rot.length_sqr4();
        assert!(
            is_near_unit(norm_sq),
            "composed quaternion drifted from unit length (squared norm {norm_sq})"
        );
        rot.normalize4();
        rot
    }

    /// Inverse transform. Exact for unit rotations.
    pub fn inverse(&self) -> Self {
        let rot = quat_inverse(&self.rot);
        let trans = -quat_rotate(&rot, &self.trans);
        Self { rot, trans }
    }

    /// Converts to another scalar kind.
    ///
    /// # Panics
    /// Panics if the converted quaternion is no longer near unit length.
    pub fn cast<U: Real>(&self) -> Transform<U> {
        Transform::new(self.rot.cast(), self.trans.cast())
    }
}

impl<T: Real> Mul<Vector<T>> for Transform<T> {
    type Output = Vector<T>;

    /// Rotates then translates the point `v`.
    fn mul(self, v: Vector<T>) -> Vector<T> {
        let r = self.rotate(&v);
        Vector::new3(
            self.trans.x() + r.x(),
            self.trans.y() + r.y(),
            self.trans.z() + r.z(),
        )
    }
}

impl<T: Real> Mul for Transform<T> {
    type Output = Self;

    /// `self * rhs` applies `rhs` first.
    fn mul(self, rhs: Self) -> Self {
        Self {
            rot: self.compose_rot(&rhs.rot),
            trans: self * rhs.trans,
        }
    }
}

impl<T: Real> MulAssign for Transform<T> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

/// `r0 r1 r2 r3 t0 t1 t2 ` with a trailing space and no newline.
impl<T: Real> fmt::Display for Transform<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r0, r1, r2, r3] = self.rot.to_array();
        write!(
            f,
            "{r0} {r1} {r2} {r3} {} {} {} ",
            self.trans.x(),
            self.trans.y(),
            self.trans.z()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::TransformMatrix;
    use crate::quat::{matrix_from_quat, quat_from_axis_angle};
    use core::f64::consts::FRAC_PI_2;

    fn close3(a: Vector<f64>, b: [f64; 3]) -> bool {
        a.xyz().iter().zip(b).all(|(x, y)| (x - y).abs() < 1e-12)
    }

    fn quarter_z() -> Transform<f64> {
        Transform::new(
            quat_from_axis_angle(&Vector::new3(0.0, 0.0, 1.0), FRAC_PI_2),
            Vector::new3(1.0, 2.0, 3.0),
        )
    }

    #[test]
    fn identity_is_default() {
        let t = Transform::<f64>::default();
        assert_eq!(t.rot().to_array(), [1.0, 0.0, 0.0, 0.0]);
        assert_eq!(t.trans(), Vector::zero());
        let mut u = quarter_z();
        u.set_identity();
        assert_eq!(u, t);
    }

    #[test]
    fn point_is_rotated_then_translated() {
        let t = quarter_z();
        assert!(close3(t * Vector::new3(1.0, 0.0, 0.0), [1.0, 3.0, 3.0]));
        assert!(close3(t.rotate(&Vector::new3(1.0, 0.0, 0.0)), [0.0, 1.0, 0.0]));
    }

    #[test]
    fn composition_matches_sequential_application() {
        let a = quarter_z();
        let b = Transform::new(
            quat_from_axis_angle(&Vector::new3(1.0, 0.0, 0.0), 0.3),
            Vector::new3(-1.0, 0.5, 0.0),
        );
        let p = Vector::new3(0.2, -0.7, 1.5);
        assert!(close3((a * b) * p, (a * (b * p)).xyz()));
        let mut c = a;
        c *= b;
        assert_eq!(c, a * b);
    }

    #[test]
    fn rotate_transform_ignores_own_translation() {
        let a = quarter_z();
        let b = Transform::new(quat_identity(), Vector::new3(1.0, 0.0, 0.0));
        let r = a.rotate_transform(&b);
        assert!(close3(r.trans(), [0.0, 1.0, 0.0]));
        assert_eq!(r.rot(), (a * b).rot());
    }

    #[test]
    fn inverse_round_trips() {
        let t = quarter_z();
        let id = t * t.inverse();
        assert!((id.rot().x() - 1.0).abs() < 1e-12);
        assert!(close3(id.trans(), [0.0, 0.0, 0.0]));
        let p = Vector::new3(4.0, 5.0, 6.0);
        assert!(close3(t.inverse() * (t * p), p.xyz()));
    }

    #[test]
    #[should_panic(expected = "not unit length")]
    fn new_rejects_non_unit() {
        let _ = Transform::new(Vector::new(1.5, 0.0, 0.0, 0.0), Vector::zero());
    }

    #[test]
    fn try_new_reports_non_unit() {
        let err = Transform::try_new(Vector::new(0.0, 0.0, 0.0, 0.0), Vector::<f64>::zero());
        assert_eq!(err, Err(MathError::NonUnitQuaternion { norm_sq: 0.0 }));
    }

    #[test]
    fn matrix_conversions_agree() {
        let t = quarter_z();
        let m = TransformMatrix::from(&t);
        let p = Vector::new3(1.0, -1.0, 2.0);
        assert!(close3(m * p, (t * p).xyz()));
        assert_eq!(m.padded(), matrix_from_quat(&t.rot()).padded());
        let back = Transform::from(&m);
        assert!(close3(back * p, (t * p).xyz()));
    }

    #[test]
    fn display_lists_rotation_then_translation() {
        let t = Transform::new(quat_identity(), Vector::new3(1.0, 2.0, 3.5));
        assert_eq!(t.to_string(), "1 0 0 0 1 2 3.5 ");
    }

    #[test]
    fn cast_to_f32() {
        let t: Transform<f32> = quarter_z().cast();
        assert_eq!(t.trans().xyz(), [1.0, 2.0, 3.0]);
    }

    #[test]
    fn set_rot_keeps_translation() {
        let mut t = quarter_z();
        let rot = quat_from_axis_angle(&Vector::new3(1.0, 0.0, 0.0), 0.4);
        t.set_rot(rot);
        assert_eq!(t.rot(), rot);
        assert_eq!(t.trans().xyz(), [1.0, 2.0, 3.0]);
    }

    #[test]
    #[should_panic(expected = "not unit length")]
    fn set_rot_rejects_non_unit() {
        let mut t = quarter_z();
        t.set_rot(Vector::new(0.5, 0.0, 0.0, 0.0));
    }
}
