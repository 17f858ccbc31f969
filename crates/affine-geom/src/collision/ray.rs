// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use affine_core::{Real, Vector};

use crate::types::aabb::Aabb;
use crate::types::obb::Obb;
use crate::types::ray::Ray;

// `offset` is the ray origin relative to the box center and `dir` the ray
// direction, both in the box frame.
fn ray_box_local<T: Real>(offset: &Vector<T>, dir: &Vector<T>, extents: &Vector<T>) -> bool {
    // origin outside a slab and heading away from it
    for i in 0..3 {
        if offset[i].abs() > extents[i] && dir[i] * offset[i] > T::zero() {
            return false;
        }
    }
    let vd = dir.cross(offset);
    let [ex, ey, ez] = extents.xyz();
    let [ax, ay, az] = [dir.x().abs(), dir.y().abs(), dir.z().abs()];
    !(vd.x().abs() > ey * az + ez * ay
        || vd.y().abs() > ex * az + ez * ax
        || vd.z().abs() > ex * ay + ey * ax)
}

/// Whether the ray hits the box.
///
/// Slab rejection followed by the three cross-product axes; no divisions.
#[must_use]
pub fn ray_aabb_test<T: Real>(r: &Ray<T>, b: &Aabb<T>) -> bool {
    ray_box_local(&(r.pos - b.pos), &r.dir, &b.extents)
}

/// Whether the ray hits the oriented box. Same test as [`ray_aabb_test`]
/// after projecting the ray into the box frame.
#[must_use]
pub fn ray_obb_test<T: Real>(r: &Ray<T>, o: &Obb<T>) -> bool {
    let vd = r.pos - o.pos;
    let local = |v: &Vector<T>| Vector::new3(v.dot3(&o.right), v.dot3(&o.up), v.dot3(&o.dir));
    ray_box_local(&local(&vd), &local(&r.dir), &o.extents)
}
