// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::ops::{Index, IndexMut};

use affine_core::{Real, Vector};

/// Triangle given by three vertices, counter-clockwise when seen from the
/// side its normal points to.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Triangle<T = f64> {
    /// First vertex.
    pub v1: Vector<T>,
    /// Second vertex.
    pub v2: Vector<T>,
    /// Third vertex.
    pub v3: Vector<T>,
}

impl<T: Real> Triangle<T> {
    /// Creates a triangle from its vertices.
    #[must_use]
    pub fn new(v1: Vector<T>, v2: Vector<T>, v3: Vector<T>) -> Self {
        Self { v1, v2, v3 }
    }

    /// Unnormalized face normal `(v2 - v1) × (v3 - v1)`.
    #[must_use]
    pub fn normal(&self) -> Vector<T> {
        (self.v2 - self.v1).cross(&(self.v3 - self.v1))
    }

    /// The vertices in order.
    #[must_use]
    pub fn vertices(&self) -> [Vector<T>; 3] {
        [self.v1, self.v2, self.v3]
    }
}

impl<T> Index<usize> for Triangle<T> {
    type Output = Vector<T>;

    /// # Panics
    /// Panics if `i > 2`.
    fn index(&self, i: usize) -> &Vector<T> {
        assert!(i < 3, "triangle vertex index {i} out of range");
        match i {
            0 => &self.v1,
            1 => &self.v2,
            _ => &self.v3,
        }
    }
}

impl<T> IndexMut<usize> for Triangle<T> {
    fn index_mut(&mut self, i: usize) -> &mut Vector<T> {
        assert!(i < 3, "triangle vertex index {i} out of range");
        match i {
            0 => &mut self.v1,
            1 => &mut self.v2,
            _ => &mut self.v3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normal_follows_winding() {
        let mut t = Triangle::new(
            Vector::new3(0.0, 0.0, 0.0),
            Vector::new3(1.0, 0.0, 0.0),
            Vector::new3(0.0, 1.0, 0.0),
        );
        assert_eq!(t.normal().xyz(), [0.0, 0.0, 1.0]);
        let v = t[1];
        t[1] = t[2];
        t[2] = v;
        assert_eq!(t.normal().xyz(), [0.0, 0.0, -1.0]);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn index_past_third_vertex_panics() {
        let t = Triangle::<f64>::default();
        let _ = t[3];
    }
}
