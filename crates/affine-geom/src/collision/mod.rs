// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Intersection and containment predicates over the primitives in
//! [`crate::types`].
//!
//! Every test is a pure function of its arguments. Volume tests treat
//! touching as intersecting except where a function says otherwise.

#[doc = "Point-in-polygon tests."]
pub mod point;
#[doc = "Ray against box tests."]
pub mod ray;
#[doc = "Triangle against triangle intersection."]
pub mod triangle;
#[doc = "Box against box, frustum and convex hull tests."]
pub mod volume;
