// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Floating-point abstraction shared by every affine type.
//!
//! All vectors, transforms, and primitives are generic over a [`Real`] so the
//! same definitions serve both single- and double-precision callers. The
//! trait is implemented for `f32` and `f64` only.
//!
//! Determinism contract:
//! - Transcendentals (`sin`, `cos`, `acos`, `atan2`) go through `libm` so a
//!   given input produces the same bits on every target.
//! - `sqrt` and `abs` are IEEE-exact and use the inherent float methods.

use core::fmt::{Debug, Display};
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use core::str::FromStr;

/// Scalar kind used by the affine types.
///
/// Arithmetic is required through the standard operator traits so generic
/// code can use `+`, `-`, `*`, `/`, unary `-`, and the compound assignments.
pub trait Real:
    Copy
    + Debug
    + Display
    + Default
    + PartialEq
    + PartialOrd
    + FromStr
    + Send
    + Sync
    + 'static
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + AddAssign
    + SubAssign
    + MulAssign
    + DivAssign
{
    /// Machine epsilon of this kind.
    const EPSILON: Self;

    /// Archimedes' constant.
    const PI: Self;

    /// Additive identity.
    fn zero() -> Self;

    /// Multiplicative identity.
    fn one() -> Self;

    /// Converts from `f64`, rounding to nearest when narrowing.
    fn from_f64(value: f64) -> Self;

    /// Widens to `f64` for diagnostics and cross-kind casts.
    fn to_f64(self) -> f64;

    /// Square root.
    fn sqrt(self) -> Self;

    /// Absolute value.
    fn abs(self) -> Self;

    /// Sine of `self` (radians).
    fn sin(self) -> Self;

    /// Cosine of `self` (radians).
    fn cos(self) -> Self;

    /// Arc cosine, in radians.
    fn acos(self) -> Self;

    /// Four-quadrant arc tangent of `self / x`.
    fn atan2(self, x: Self) -> Self;

    /// Returns `(sin, cos)` of `self`.
    fn sin_cos(self) -> (Self, Self) {
        (self.sin(), self.cos())
    }

    /// Two.
    fn two() -> Self {
        Self::one() + Self::one()
    }

    /// One half.
    fn half() -> Self {
        Self::one() / Self::two()
    }
}

impl Real for f32 {
    const EPSILON: Self = f32::EPSILON;
    const PI: Self = core::f32::consts::PI;

    fn zero() -> Self {
        0.0
    }

    fn one() -> Self {
        1.0
    }

    fn from_f64(value: f64) -> Self {
        value as f32
    }

    fn to_f64(self) -> f64 {
        f64::from(self)
    }

    fn sqrt(self) -> Self {
        f32::sqrt(self)
    }

    fn abs(self) -> Self {
        f32::abs(self)
    }

    fn sin(self) -> Self {
        libm::sinf(self)
    }

    fn cos(self) -> Self {
        libm::cosf(self)
    }

    fn acos(self) -> Self {
        libm::acosf(self)
    }

    fn atan2(self, x: Self) -> Self {
        libm::atan2f(self, x)
    }
}

impl Real for f64 {
    const EPSILON: Self = f64::EPSILON;
    const PI: Self = core::f64::consts::PI;

    fn zero() -> Self {
        0.0
    }

    fn one() -> Self {
        1.0
    }

    fn from_f64(value: f64) -> Self {
        value
    }

    fn to_f64(self) -> f64 {
        self
    }

    fn sqrt(self) -> Self {
        f64::sqrt(self)
    }

    fn abs(self) -> Self {
        f64::abs(self)
    }

    fn sin(self) -> Self {
        libm::sin(self)
    }

    fn cos(self) -> Self {
        libm::cos(self)
    }

    fn acos(self) -> Self {
        libm::acos(self)
    }

    fn atan2(self, x: Self) -> Self {
        libm::atan2(self, x)
    }
}
