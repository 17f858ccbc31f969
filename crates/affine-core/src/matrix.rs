// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::fmt;
use core::ops::{Mul, MulAssign};

use tracing::trace;

use crate::error::MathError;
use crate::quat::{matrix_from_quat_into, quat_from_matrix};
use crate::scalar::Real;
use crate::transform::Transform;
use crate::vector::Vector;

/// Affine transform stored as a 3×3 rotation plus a translation.
///
/// Layout:
/// - The rotation is row-major in a 12-slot array where row `i` starts at
///   index `4 * i`; slots 3, 7 and 11 are padding and stay zero.
/// - The translation is a separate [`Vector`]; its `w` is unused.
///
/// Scale and shear are not modelled. [`TransformMatrix::inverse`] accepts any
/// non-negative determinant but rejects reflections.
///
/// # Examples
/// ```
/// use affine_core::{TransformMatrix, Vector};
/// let mut m = TransformMatrix::identity();
/// m.set_trans(Vector::new3(1.0, 2.0, 3.0));
/// assert_eq!((m * Vector::new3(1.0, 1.0, 1.0)).xyz(), [2.0, 3.0, 4.0]);
/// ```
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransformMatrix<T = f64> {
    m: [T; 12],
    trans: Vector<T>,
}

/// Orthonormal frame decomposed from a [`TransformMatrix`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Basis<T = f64> {
    /// First rotation column.
    pub right: Vector<T>,
    /// Second rotation column.
    pub up: Vector<T>,
    /// Third rotation column.
    pub dir: Vector<T>,
    /// Translation.
    pub pos: Vector<T>,
}

impl<T: Real> Default for TransformMatrix<T> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<T: Real> TransformMatrix<T> {
    /// Identity rotation with zero translation.
    pub fn identity() -> Self {
        let (o, l) = (T::zero(), T::one());
        Self {
            m: [l, o, o, o, o, l, o, o, o, o, l, o],
            trans: Vector::zero(),
        }
    }

    /// Builds a transform from rotation rows and a translation.
    pub fn from_rows(rows: [[T; 3]; 3], trans: Vector<T>) -> Self {
        let mut t = Self::identity();
        t.rot_from_rows(rows);
        t.trans = trans;
        t
    }

    /// Resets to the identity, translation included.
    pub fn set_identity(&mut self) {
        *self = Self::identity();
    }

    /// Overwrites the rotation block from row-major values; translation is
    /// untouched.
    pub fn rot_from_rows(&mut self, rows: [[T; 3]; 3]) {
        for (i, row) in rows.iter().enumerate() {
            self.m[4 * i..4 * i + 3].copy_from_slice(row);
            self.m[4 * i + 3] = T::zero();
        }
    }

    /// Rotation element at row `i`, column `j`.
    ///
    /// # Panics
    /// Panics unless `i < 3 && j < 3`.
    pub fn rot(&self, i: usize, j: usize) -> T {
        assert!(i < 3 && j < 3, "rotation index ({i}, {j}) out of range");
        self.m[4 * i + j]
    }

    /// Mutable rotation element at row `i`, column `j`.
    ///
    /// # Panics
    /// Panics unless `i < 3 && j < 3`.
    pub fn rot_mut(&mut self, i: usize, j: usize) -> &mut T {
        assert!(i < 3 && j < 3, "rotation index ({i}, {j}) out of range");
        &mut self.m[4 * i + j]
    }

    /// The padded row-major rotation storage.
    pub fn padded(&self) -> &[T; 12] {
        &self.m
    }

    /// Translation component.
    pub fn trans(&self) -> Vector<T> {
        self.trans
    }

    /// Replaces the translation component.
    pub fn set_trans(&mut self, trans: Vector<T>) {
        self.trans = trans;
    }

    /// Rotation column `j` as a vector with `w = 0`.
    ///
    /// # Panics
    /// Panics unless `j < 3`.
    pub fn column(&self, j: usize) -> Vector<T> {
        Vector::new3(self.rot(0, j), self.rot(1, j), self.rot(2, j))
    }

    /// Applies the rotation only.
    pub fn rotate(&self, v: &Vector<T>) -> Vector<T> {
        let m = &self.m;
        Vector::new3(
            v.x() * m[0] + v.y() * m[1] + v.z() * m[2],
            v.x() * m[4] + v.y() * m[5] + v.z() * m[6],
            v.x() * m[8] + v.y() * m[9] + v.z() * m[10],
        )
    }

    /// Composes rotations only: the result's translation is
    /// `self.rotation * other.trans`, without `self.trans`.
    pub fn rotate_matrix(&self, other: &Self) -> Self {
        Self {
            m: self.rot_product(other),
            trans: self.rotate(&other.trans),
        }
    }

    fn rot_product(&self, r: &Self) -> [T; 12] {
        let mut out = [T::zero(); 12];
        for i in 0..3 {
            for j in 0..3 {
                out[4 * i + j] = self.m[4 * i] * r.m[j]
                    + self.m[4 * i + 1] * r.m[4 + j]
                    + self.m[4 * i + 2] * r.m[8 + j];
            }
        }
        out
    }

    /// Determinant of the rotation block, expanded along the third column.
    pub fn determinant(&self) -> T {
        self.adjugate().1
    }

    // Returns (adjugate, determinant).
    fn adjugate(&self) -> ([T; 12], T) {
        let m = &self.m;
        let mut inv = [T::zero(); 12];
        inv[0] = m[5] * m[10] - m[6] * m[9];
        inv[1] = m[2] * m[9] - m[1] * m[10];
        inv[2] = m[1] * m[6] - m[2] * m[5];
        inv[4] = m[6] * m[8] - m[4] * m[10];
        inv[5] = m[0] * m[10] - m[2] * m[8];
        inv[6] = m[2] * m[4] - m[0] * m[6];
        inv[8] = m[4] * m[9] - m[5] * m[8];
        inv[9] = m[1] * m[8] - m[0] * m[9];
        inv[10] = m[0] * m[5] - m[1] * m[4];
        let det = m[2] * inv[8] + m[6] * inv[9] + m[10] * inv[10];
        (inv, det)
    }

    fn finish_inverse(&self, mut adj: [T; 12], det: T) -> Self {
        let f = T::one() / det;
        for i in [0, 1, 2, 4, 5, 6, 8, 9, 10] {
            adj[i] *= f;
        }
        let mut inv = Self {
            m: adj,
            trans: Vector::zero(),
        };
        inv.trans = -inv.rotate(&self.trans);
        inv
    }

    /// Inverse via the adjugate of the rotation block.
    ///
    /// Works for any invertible block with positive determinant, so uniform
    /// scale survives the round trip.
    ///
    /// # Panics
    /// Panics if the determinant is negative (a reflection).
    pub fn inverse(&self) -> Self {
        let (adj, det) = self.adjugate();
        assert!(det >= T::zero(), "cannot invert rotation block with determinant {det}");
        self.finish_inverse(adj, det)
    }

    /// Checked [`Self::inverse`].
    pub fn try_inverse(&self) -> Result<Self, MathError> {
        let (adj, det) = self.adjugate();
        if det >= T::zero() {
            Ok(self.finish_inverse(adj, det))
        } else {
            Err(MathError::NegativeDeterminant { det: det.to_f64() })
        }
    }

    /// Splits into the three rotation columns plus translation.
    pub fn extract(&self) -> Basis<T> {
        Basis {
            right: self.column(0),
            up: self.column(1),
            dir: self.column(2),
            pos: self.trans,
        }
    }

    /// Converts every element to another scalar kind.
    pub fn cast<U: Real>(&self) -> TransformMatrix<U> {
        TransformMatrix {
            m: self.m.map(|v| U::from_f64(v.to_f64())),
            trans: self.trans.cast(),
        }
    }
}

impl<T: Real> Mul<Vector<T>> for TransformMatrix<T> {
    type Output = Vector<T>;

    fn mul(self, v: Vector<T>) -> Vector<T> {
        let mut out = self.rotate(&v);
        out += Vector::new3(self.trans.x(), self.trans.y(), self.trans.z());
        out
    }
}

/// `self * rhs`: rotations multiply, and the translation becomes
/// `self.rotation * rhs.trans + self.trans`.
impl<T: Real> Mul for TransformMatrix<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self {
            m: self.rot_product(&rhs),
            trans: self * rhs.trans,
        }
    }
}

impl<T: Real> MulAssign for TransformMatrix<T> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<T: Real> From<&Transform<T>> for TransformMatrix<T> {
    fn from(t: &Transform<T>) -> Self {
        let mut m = Self::identity();
        matrix_from_quat_into(&mut m, &t.rot());
        m.trans = t.trans();
        m
    }
}

impl<T: Real> From<Transform<T>> for TransformMatrix<T> {
    fn from(t: Transform<T>) -> Self {
        Self::from(&t)
    }
}

impl<T: Real> From<&TransformMatrix<T>> for Transform<T> {
    /// Takes the rotation through [`quat_from_matrix`], which assumes an
    /// orthonormal block.
    fn from(m: &TransformMatrix<T>) -> Self {
        Transform::new(quat_from_matrix(m), m.trans)
    }
}

/// Serializes column by column: `m00 m10 m20 m01 m11 m21 m02 m12 m22 tx ty tz `.
///
/// This is the transposed order existing consumers expect on the wire, with a
/// trailing space and no newline.
impl<T: Real> fmt::Display for TransformMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let m = &self.m;
        for idx in [0, 4, 8, 1, 5, 9, 2, 6, 10] {
            write!(f, "{} ", m[idx])?;
        }
        write!(f, "{} {} {} ", self.trans.x(), self.trans.y(), self.trans.z())
    }
}

const LOOKAT_DIR_EPSILON: f64 = 1e-6;
const LOOKAT_UP_EPSILON_SQ: f64 = 1e-8;

/// Camera transform at `camera_pos` looking toward `look_at`.
///
/// The columns are `(right, up, dir)` with `dir` pointing at the target and
/// `up` the component of `camera_up` orthogonal to it. Degenerate inputs fall
/// back instead of failing:
/// - camera on the target: `dir` becomes world +Z;
/// - `camera_up` parallel to `dir`: world +Y, then world +X.
pub fn transform_lookat<T: Real>(
    look_at: &Vector<T>,
    camera_pos: &Vector<T>,
    camera_up: &Vector<T>,
) -> TransformMatrix<T> {
    let (o, l) = (T::zero(), T::one());
    let mut dir = *look_at - *camera_pos;
    let len = dir.length_sqr3().sqrt();
    if len > T::from_f64(LOOKAT_DIR_EPSILON) {
        dir *= l / len;
    } else {
        trace!("look-at target coincides with camera; viewing along +Z");
        dir = Vector::new3(o, o, l);
    }

    let up_eps = T::from_f64(LOOKAT_UP_EPSILON_SQ);
    let mut up = *camera_up - dir * dir.dot3(camera_up);
    let mut len = up.length_sqr3();
    if len < up_eps {
        trace!("camera up is parallel to view direction; trying +Y");
        up = Vector::new3(o, l, o);
        up -= dir * dir.dot3(&up);
        len = up.length_sqr3();
        if len < up_eps {
            trace!("view direction is parallel to +Y; using +X");
            up = Vector::new3(l, o, o);
            up -= dir * dir.dot3(&up);
            len = up.length_sqr3();
        }
    }
    up *= l / len.sqrt();
    let right = up.cross(&dir);

    let mut t = TransformMatrix::identity();
    t.rot_from_rows([
        [right.x(), up.x(), dir.x()],
        [right.y(), up.y(), dir.y()],
        [right.z(), up.z(), dir.z()],
    ]);
    t.trans = *camera_pos;
    t
}
