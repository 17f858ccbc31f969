// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use affine_core::{Real, Vector};

use crate::types::triangle::Triangle;

// Sums the angles subtended at `p` by consecutive vertex pairs. A point
// within epsilon of a vertex counts as inside.
fn angle_sum_inside<T: Real>(p: &Vector<T>, verts: &[Vector<T>]) -> bool {
    let eps = T::EPSILON;
    let mut anglesum = T::zero();
    for (i, a) in verts.iter().enumerate() {
        let b = &verts[(i + 1) % verts.len()];
        let v4 = *a - *p;
        let v5 = *b - *p;
        let m1 = v4.length_sqr3();
        let m2 = v5.length_sqr3();
        if m1 * m2 <= eps * eps {
            return true;
        }
        let costheta = v4.dot3(&v5) / (m1 * m2).sqrt();
        anglesum += costheta.acos();
    }
    (anglesum - T::two() * T::PI).abs() <= eps
}

/// Whether `p` lies inside the planar quadrilateral `verts`.
///
/// The angles subtended at `p` must sum to a full turn within machine
/// epsilon. That is tighter than the rounding of the sum itself, so points
/// off the plane always fail and in-plane interior points often fail too:
/// `(0.1, 0.2, 0)` inside the diamond `(±1, 0, 0)`, `(0, ±1, 0)` is
/// rejected. Points within epsilon of a vertex always pass.
#[must_use]
pub fn inside_quadrilateral<T: Real>(p: &Vector<T>, verts: &[Vector<T>; 4]) -> bool {
    angle_sum_inside(p, verts)
}

/// Whether `p` lies inside `tri`, with the same tolerance as
/// [`inside_quadrilateral`].
#[must_use]
pub fn inside_triangle<T: Real>(p: &Vector<T>, tri: &Triangle<T>) -> bool {
    angle_sum_inside(p, &tri.vertices())
}
