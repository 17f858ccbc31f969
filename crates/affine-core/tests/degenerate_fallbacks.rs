// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
//! Degenerate inputs resolve to fallback values instead of panicking.
//!
//! Run with `--nocapture` to see the trace events each fallback emits.

use std::io;
use std::sync::{Arc, Mutex, PoisonError};

use affine_core::{
    axis_angle_from_quat, quat_from_axis_angle, quat_from_axis_angle_packed, quat_identity, quat_rotate, quat_rotate_direction,
    quat_slerp, transform_lookat, Vector,
};
use affine_dry_tests::{assert_same_rotation, assert_vec_close, TOL};
use tracing::Level;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(Level::TRACE)
        .with_test_writer()
        .without_time()
        .try_init();
}

#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl Captured {
    fn text(&self) -> String {
        let buf = self.0.lock().unwrap_or_else(PoisonError::into_inner);
        String::from_utf8_lossy(&buf).into_owned()
    }
}

impl io::Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn traced<R>(f: impl FnOnce() -> R) -> (R, String) {
    let captured = Captured::default();
    let writer = captured.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(Level::TRACE)
        .with_ansi(false)
        .without_time()
        .with_writer(move || writer.clone())
        .finish();
    let out = tracing::subscriber::with_default(subscriber, f);
    (out, captured.text())
}

#[test]
fn zero_axis_yields_identity() {
    init_tracing();
    let q = quat_from_axis_angle(&Vector::zero(), 2.0);
    assert_eq!(q, quat_identity());
}

#[test]
fn zero_axis_fallbacks_are_traced() {
    let (q, log) = traced(|| quat_from_axis_angle(&Vector::zero(), 2.0));
    assert_eq!(q, quat_identity());
    assert!(log.contains("zero-length rotation axis"), "{log}");

    let (q, log) = traced(|| quat_from_axis_angle_packed(&Vector::<f64>::zero()));
    assert_eq!(q, quat_identity());
    assert!(log.contains("zero-length rotation axis"), "{log}");
}

#[test]
fn nearly_parallel_slerp_blends_linearly() {
    init_tracing();
    let q0 = quat_identity();
    let eps = 3e-8_f64;
    let q1 = Vector::new(eps.cos(), eps.sin(), 0.0, 0.0);
    // sin of the half angle is below the slerp threshold but cos is not 1
    assert!(q0.dot(&q1) < 1.0);
    let mid = quat_slerp(&q0, &q1, 0.25);
    assert_vec_close(&mid, &((q0 + q1) * 0.5), 0.0);
}

#[test]
fn opposite_directions_rotate_half_turn() {
    init_tracing();
    let src = Vector::new3(0.0, 0.0, -1.0);
    let q = quat_rotate_direction(&src, &-src);
    assert_vec_close(&quat_rotate(&q, &src), &-src, TOL);
}

#[test]
fn identity_has_zero_axis_angle() {
    init_tracing();
    assert_eq!(axis_angle_from_quat(&quat_identity::<f64>()), Vector::zero());
    assert_same_rotation(&quat_identity(), &-quat_identity::<f64>(), 0.0);
}

#[test]
fn lookat_with_every_fallback() {
    init_tracing();
    let p = Vector::new3(2.0, 2.0, 2.0);
    let m = transform_lookat(&p, &p, &Vector::new3(0.0, 0.0, 5.0));
    // dir falls back to +Z, the supplied up is parallel to it, +Y is not
    assert_eq!(m.column(2).xyz(), [0.0, 0.0, 1.0]);
    assert_eq!(m.column(1).xyz(), [0.0, 1.0, 0.0]);
    assert_eq!(m.column(0).xyz(), [1.0, 0.0, 0.0]);
    assert_eq!(m.trans(), p);
}
