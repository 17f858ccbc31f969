// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![forbid(unsafe_code)]
#![doc = r"Geometric primitives and collision tests built on `affine-core`.

This crate provides:
- Rays, axis-aligned and oriented boxes, triangles, view frustums and camera
  intrinsics (`types`).
- Point-in-polygon, ray/box, box/frustum, box/convex-hull, box/box and
  triangle/triangle tests, plus point-to-box distance (`collision`).

Design notes:
- Every test is a pure predicate or measurement over `Copy` values.
- Generic over `affine_core::Real`, so `f32` and `f64` share one definition.
- Boxes are center plus half-extents throughout.
"]

/// Intersection, containment and distance tests.
pub mod collision;
/// Geometric primitives.
pub mod types;

pub use collision::point::{inside_quadrilateral, inside_triangle};
pub use collision::ray::{ray_aabb_test, ray_obb_test};
pub use collision::triangle::{tri_tri_collision, Contact};
pub use collision::volume::{aabb_collision, dist_vertex_obb_sq, is_obb_in_convex_hull, is_obb_in_frustum};
pub use types::aabb::Aabb;
pub use types::camera::{CameraIntrinsics, DEFAULT_FOCAL_LENGTH};
pub use types::frustum::Frustum;
pub use types::obb::{Obb, OrientedBox};
pub use types::ray::Ray;
pub use types::triangle::Triangle;
