// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use affine_core::{Real, Vector};
use tracing::trace;

use crate::types::triangle::Triangle;

/// Where two triangles touch.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Contact<T = f64> {
    /// Midpoint of the intersection segment.
    pub position: Vector<T>,
    /// Unit normal of the second triangle.
    pub normal: Vector<T>,
}

/// Intersects triangle `u` with triangle `v`, both wound counter-clockwise.
///
/// Finds the segment where `u` crosses the plane of `v`, clips it against the
/// three edges of `v`, and reports the midpoint of what remains.
///
/// Returns `None` when all of `u` lies strictly on one side of `v`'s plane or
/// on it. Coplanar triangles therefore never report a contact, even when they
/// overlap.
#[must_use]
pub fn tri_tri_collision<T: Real>(u: &Triangle<T>, v: &Triangle<T>) -> Option<Contact<T>> {
    let o = T::zero();
    let v12 = v.v2 - v.v1;
    let v23 = v.v3 - v.v2;
    let v31 = v.v1 - v.v3;
    let mut vnorm = v31.cross(&v12);
    vnorm.set_w(-vnorm.dot3(&v.v1));
    let side = |p: &Vector<T>| vnorm.dot3(p) + vnorm.w();

    let mut bits = 0u8;
    for (i, p) in u.vertices().iter().enumerate() {
        if side(p) > o {
            bits |= 1 << i;
        }
    }
    if bits == 0 || bits == 7 {
        trace!(bits, "triangle does not cross the other's plane");
        return None;
    }

    // the vertex alone on its side of the plane
    let (lone, a, b) = match bits {
        1 | 6 => (u.v1, u.v2, u.v3),
        2 | 5 => (u.v2, u.v1, u.v3),
        _ => (u.v3, u.v1, u.v2),
    };
    let t = side(&lone);
    let e1 = a - lone;
    let e2 = b - lone;
    let mut p1 = lone - e1 * (t / vnorm.dot3(&e1));
    let mut p2 = lone - e2 * (t / vnorm.dot3(&e2));

    for (start, edge) in [(v.v1, v12), (v.v2, v23), (v.v3, v31)] {
        let q1 = p1 - start;
        let q2 = p2 - start;
        let vcross = edge.cross(&vnorm);
        let t1 = q1.dot3(&vcross);
        let t2 = q2.dot3(&vcross);
        if t1 >= o && t2 >= o {
            return None;
        }
        if t1 > o && t2 < o {
            let dq = q2 - q1;
            p1 -= dq * (t1 / dq.dot3(&vcross));
        } else if t1 < o && t2 > o {
            let dq = q1 - q2;
            p2 -= dq * (t2 / dq.dot3(&vcross));
        }
    }

    Some(Contact {
        position: (p1 + p2) * T::half(),
        normal: vnorm.normalized3(),
    })
}
