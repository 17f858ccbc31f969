// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use affine_core::{Real, Vector};

use crate::types::aabb::Aabb;
use crate::types::frustum::Frustum;
use crate::types::obb::Obb;

/// Whether the oriented box lies entirely inside the frustum.
///
/// Checks the four side planes, then the near and far planes along `dir`. A
/// box straddling any plane is rejected.
#[must_use]
pub fn is_obb_in_frustum<T: Real>(o: &Obb<T>, fr: &Frustum<T>) -> bool {
    let v = o.pos - fr.pos;
    // outward side-plane normals through the apex
    let normals = [
        fr.right * fr.cos_fov_x - fr.dir * fr.sin_fov_x,
        -fr.right * fr.cos_fov_x - fr.dir * fr.sin_fov_x,
        fr.up * fr.cos_fov_y - fr.dir * fr.sin_fov_y,
        -fr.up * fr.cos_fov_y - fr.dir * fr.sin_fov_y,
    ];
    if normals
        .iter()
        .any(|n| v.dot3(n) > -o.projected_radius(n))
    {
        return false;
    }
    let depth = v.dot3(&fr.dir);
    let radius = o.projected_radius(&fr.dir);
    !(depth < fr.near + radius || depth > fr.far - radius)
}

/// Whether the oriented box lies inside the convex hull bounded by `planes`.
///
/// Each plane is `(nx, ny, nz, d)` with the normal facing inward, so a point
/// `p` is inside when `n · p + d >= 0`.
#[must_use]
pub fn is_obb_in_convex_hull<T: Real>(o: &Obb<T>, planes: &[Vector<T>]) -> bool {
    planes
        .iter()
        .all(|p| o.pos.dot3(p) + p.w() >= o.projected_radius(p))
}

/// Whether two axis-aligned boxes overlap, touching faces included.
#[must_use]
pub fn aabb_collision<T: Real>(a: &Aabb<T>, b: &Aabb<T>) -> bool {
    let v = a.pos - b.pos;
    (0..3).all(|i| v[i].abs() <= a.extents[i] + b.extents[i])
}

/// Squared distance from `p` to the closest point of the box; zero inside.
#[must_use]
pub fn dist_vertex_obb_sq<T: Real>(p: &Vector<T>, o: &Obb<T>) -> T {
    let d = *p - o.pos;
    let local = [d.dot3(&o.right), d.dot3(&o.up), d.dot3(&o.dir)];
    local
        .iter()
        .zip(o.extents.xyz())
        .map(|(c, e)| c.abs() - e)
        .filter(|over| *over > T::zero())
        .fold(T::zero(), |acc, over| acc + over * over)
}
