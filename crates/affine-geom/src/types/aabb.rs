// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use affine_core::{Real, Vector};

/// Axis-aligned bounding box given by its center and half-extents.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Aabb<T = f64> {
    /// Center.
    pub pos: Vector<T>,
    /// Half-extents along x, y and z.
    pub extents: Vector<T>,
}

impl<T: Real> Aabb<T> {
    /// Creates a box from its center and half-extents.
    #[must_use]
    pub fn new(pos: Vector<T>, extents: Vector<T>) -> Self {
        Self { pos, extents }
    }

    /// Whether `p` lies inside the box, faces included.
    #[must_use]
    pub fn contains(&self, p: &Vector<T>) -> bool {
        let d = *p - self.pos;
        (0..3).all(|i| d[i].abs() <= self.extents[i])
    }
}
