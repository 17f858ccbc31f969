// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Geometric primitives consumed by the collision tests.
//!
//! All primitives are plain data with public fields. Extents are half-sizes
//! along each local axis, and positions are box centers. Basis vectors of an
//! [`obb::Obb`] or [`frustum::Frustum`] are expected to be orthonormal; nothing
//! here re-orthonormalizes them.

#[doc = "Axis-aligned bounding boxes."]
pub mod aabb;
#[doc = "Pinhole camera intrinsics."]
pub mod camera;
#[doc = "View frustums with cached half-angle trigonometry."]
pub mod frustum;
#[doc = "Oriented bounding boxes."]
pub mod obb;
#[doc = "Rays with a text codec."]
pub mod ray;
#[doc = "Triangles."]
pub mod triangle;
