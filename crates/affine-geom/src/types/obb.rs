// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use affine_core::{Real, Transform, TransformMatrix, Vector};

use super::aabb::Aabb;

/// Oriented bounding box: an orthonormal frame, a center and half-extents.
///
/// `extents.x` runs along `right`, `extents.y` along `up`, `extents.z`
/// along `dir`.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Obb<T = f64> {
    /// First local axis.
    pub right: Vector<T>,
    /// Second local axis.
    pub up: Vector<T>,
    /// Third local axis.
    pub dir: Vector<T>,
    /// Center.
    pub pos: Vector<T>,
    /// Half-extents along `right`, `up`, `dir`.
    pub extents: Vector<T>,
}

impl<T: Real> Default for Obb<T> {
    /// Unit axes at the origin with zero extents.
    fn default() -> Self {
        let basis = TransformMatrix::<T>::identity().extract();
        Self {
            right: basis.right,
            up: basis.up,
            dir: basis.dir,
            pos: Vector::zero(),
            extents: Vector::zero(),
        }
    }
}

impl<T: Real> Obb<T> {
    /// Places `aabb` in the frame of `m`: the rotation columns become the
    /// box axes and the center is transformed as a point.
    #[must_use]
    pub fn from_aabb(aabb: &Aabb<T>, m: &TransformMatrix<T>) -> Self {
        let basis = m.extract();
        Self {
            right: basis.right,
            up: basis.up,
            dir: basis.dir,
            pos: *m * aabb.pos,
            extents: aabb.extents,
        }
    }

    /// [`Obb::from_aabb`] for a quaternion transform.
    #[must_use]
    pub fn from_aabb_transform(aabb: &Aabb<T>, t: &Transform<T>) -> Self {
        Self::from_aabb(aabb, &TransformMatrix::from(t))
    }

    /// This box re-expressed under `t`.
    #[must_use]
    pub fn transformed(&self, t: &Transform<T>) -> Self {
        Self {
            right: t.rotate(&self.right),
            up: t.rotate(&self.up),
            dir: t.rotate(&self.dir),
            pos: *t * self.pos,
            extents: self.extents,
        }
    }

    /// This box re-expressed under `m`.
    #[must_use]
    pub fn transformed_by_matrix(&self, m: &TransformMatrix<T>) -> Self {
        Self {
            right: m.rotate(&self.right),
            up: m.rotate(&self.up),
            dir: m.rotate(&self.dir),
            pos: *m * self.pos,
            extents: self.extents,
        }
    }

    /// Half-width of the box projected onto `n`.
    pub(crate) fn projected_radius(&self, n: &Vector<T>) -> T {
        self.extents.x() * n.dot3(&self.right).abs()
            + self.extents.y() * n.dot3(&self.up).abs()
            + self.extents.z() * n.dot3(&self.dir).abs()
    }
}

/// Oriented box stored as a rigid transform plus half-extents.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(bound(deserialize = "T: Real + serde::Deserialize<'de>"))
)]
pub struct OrientedBox<T = f64> {
    /// Pose of the box center.
    pub transform: Transform<T>,
    /// Half-extents along the local axes.
    pub extents: Vector<T>,
}

impl<T: Real> Default for OrientedBox<T> {
    /// Identity pose with zero extents.
    fn default() -> Self {
        Self {
            transform: Transform::identity(),
            extents: Vector::zero(),
        }
    }
}

impl<T: Real> OrientedBox<T> {
    /// Explicit-axes form of this box.
    #[must_use]
    pub fn to_obb(&self) -> Obb<T> {
        let aabb = Aabb::new(Vector::zero(), self.extents);
        Obb::from_aabb_transform(&aabb, &self.transform)
    }
}

impl<T: Real> From<&OrientedBox<T>> for Obb<T> {
    fn from(b: &OrientedBox<T>) -> Self {
        b.to_obb()
    }
}
