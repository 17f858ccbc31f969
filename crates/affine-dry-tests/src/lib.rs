// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Shared test fixtures for the affine crates.
#![forbid(unsafe_code)]
//!
//! # Modules
//!
//! - [`approx`] - Tolerance comparisons for scalars, vectors and rotations
//! - [`strategies`] - Proptest strategies for quaternions, vectors and transforms

pub mod approx;
pub mod strategies;

pub use approx::{assert_same_rotation, assert_vec_close, close, same_rotation, vec_close, TOL};
pub use strategies::{nonzero_vector, rigid_transform, rigid_matrix, unit_quat, vector3};
