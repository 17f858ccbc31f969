// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Tolerance comparisons.

use affine_core::{Quaternion, Vector};

/// Default absolute tolerance for `f64` comparisons.
pub const TOL: f64 = 1e-9;

/// `|a - b| <= tol`.
pub fn close(a: f64, b: f64, tol: f64) -> bool {
    (a - b).abs() <= tol
}

/// Component-wise [`close`] over all four components.
pub fn vec_close(a: &Vector, b: &Vector, tol: f64) -> bool {
    a.to_array()
        .iter()
        .zip(b.to_array())
        .all(|(x, y)| close(*x, y, tol))
}

/// Whether `a` and `b` are the same rotation; `q` and `-q` compare equal.
pub fn same_rotation(a: &Quaternion, b: &Quaternion, tol: f64) -> bool {
    vec_close(a, b, tol) || vec_close(a, &-*b, tol)
}

/// Panics with both values when [`vec_close`] fails.
///
/// # Panics
/// Panics if any component differs by more than `tol`.
#[track_caller]
pub fn assert_vec_close(a: &Vector, b: &Vector, tol: f64) {
    assert!(vec_close(a, b, tol), "vectors differ: {a:?} vs {b:?} (tol {tol})");
}

/// Panics with both values when [`same_rotation`] fails.
///
/// # Panics
/// Panics if `a` matches neither `b` nor `-b` within `tol`.
#[track_caller]
pub fn assert_same_rotation(a: &Quaternion, b: &Quaternion, tol: f64) {
    assert!(
        same_rotation(a, b, tol),
        "rotations differ: {a:?} vs {b:?} (tol {tol})"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negated_quaternion_is_same_rotation() {
        let q = Vector::new(0.5, 0.5, 0.5, 0.5);
        assert!(same_rotation(&q, &-q, TOL));
        assert!(!vec_close(&q, &-q, TOL));
    }
}
