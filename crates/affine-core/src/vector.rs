// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::fmt;
use core::ops::{
    Add, AddAssign, BitXor, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use crate::error::MathError;
use crate::scalar::Real;

/// Four-component vector `(x, y, z, w)`.
///
/// * `w` is a homogeneous/auxiliary slot. Operations suffixed `3` ignore it;
///   operations suffixed `4` (and the unsuffixed arithmetic operators)
///   include it.
/// * The same type carries quaternions as `(s, vx, vy, vz)`, i.e. the scalar
///   part lives in `x`. See [`crate::quat`].
/// * Indexing treats the vector as `[x, y, z, w]`; an index past 3 panics.
///
/// # Examples
/// ```
/// use affine_core::Vector;
/// let a = Vector::new3(1.0, 0.0, 0.0);
/// let b = Vector::new3(0.0, 1.0, 0.0);
/// assert_eq!(a.cross(&b).to_array(), [0.0, 0.0, 1.0, 0.0]);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector<T = f64> {
    data: [T; 4],
}

impl<T: Real> Vector<T> {
    /// Creates a vector from four components.
    pub const fn new(x: T, y: T, z: T, w: T) -> Self {
        Self { data: [x, y, z, w] }
    }

    /// Creates a vector from three components with `w = 0`.
    pub fn new3(x: T, y: T, z: T) -> Self {
        Self::new(x, y, z, T::zero())
    }

    /// The zero vector.
    pub fn zero() -> Self {
        Self::default()
    }

    /// Builds a vector from the first three values of `values`, `w = 0`.
    ///
    /// # Panics
    /// Panics if `values` holds fewer than three elements.
    pub fn from_slice3(values: &[T]) -> Self {
        assert!(values.len() >= 3, "from_slice3 needs 3 values, got {}", values.len());
        Self::new3(values[0], values[1], values[2])
    }

    /// Returns the components as `[x, y, z, w]`.
    pub fn to_array(self) -> [T; 4] {
        self.data
    }

    /// Returns `[x, y, z]`.
    pub fn xyz(self) -> [T; 3] {
        [self.data[0], self.data[1], self.data[2]]
    }

    /// X component.
    pub fn x(&self) -> T {
        self.data[0]
    }

    /// Y component.
    pub fn y(&self) -> T {
        self.data[1]
    }

    /// Z component.
    pub fn z(&self) -> T {
        self.data[2]
    }

    /// W component.
    pub fn w(&self) -> T {
        self.data[3]
    }

    /// Overwrites `w`, leaving `x`, `y`, `z` untouched.
    pub fn set_w(&mut self, w: T) {
        self.data[3] = w;
    }

    /// Overwrites `x`, `y`, `z`; `w` is untouched.
    pub fn set3(&mut self, x: T, y: T, z: T) {
        self.data[0] = x;
        self.data[1] = y;
        self.data[2] = z;
    }

    /// Overwrites all four components.
    pub fn set4(&mut self, x: T, y: T, z: T, w: T) {
        self.data = [x, y, z, w];
    }

    /// Four-component dot product.
    pub fn dot(&self, other: &Self) -> T {
        self.data[0] * other.data[0]
            + self.data[1] * other.data[1]
            + self.data[2] * other.data[2]
            + self.data[3] * other.data[3]
    }

    /// Three-component dot product (ignores `w`).
    pub fn dot3(&self, other: &Self) -> T {
        self.data[0] * other.data[0] + self.data[1] * other.data[1] + self.data[2] * other.data[2]
    }

    /// Three-component cross product; the result has `w = 0`.
    pub fn cross(&self, other: &Self) -> Self {
        let [ax, ay, az, _] = self.data;
        let [bx, by, bz, _] = other.data;
        Self::new3(ay * bz - az * by, az * bx - ax * bz, ax * by - ay * bx)
    }

    /// Squared norm of `(x, y)`.
    pub fn length_sqr2(&self) -> T {
        self.data[0] * self.data[0] + self.data[1] * self.data[1]
    }

    /// Squared norm of `(x, y, z)`.
    pub fn length_sqr3(&self) -> T {
        self.dot3(self)
    }

    /// Squared norm of all four components.
    pub fn length_sqr4(&self) -> T {
        self.dot(self)
    }

    /// Norm of `(x, y, z)`.
    pub fn length3(&self) -> T {
        self.length_sqr3().sqrt()
    }

    /// Norm of all four components.
    pub fn length4(&self) -> T {
        self.length_sqr4().sqrt()
    }

    /// Normalizes all four components in place. Alias of [`Self::normalize4`].
    pub fn normalize(&mut self) -> &mut Self {
        self.normalize4()
    }

    /// Normalizes all four components in place.
    ///
    /// A squared length already within machine epsilon of one is left as is.
    /// Otherwise every component is divided by the length separately rather
    /// than multiplied by its reciprocal, trading speed for precision.
    ///
    /// # Panics
    /// Panics if the vector has zero length.
    pub fn normalize4(&mut self) -> &mut Self {
        let f = self.length_sqr4();
        if f < T::one() - T::EPSILON || f > T::one() + T::EPSILON {
            assert!(f > T::zero(), "normalize4 called on a zero-length vector");
            let len = f.sqrt();
            for c in &mut self.data {
                *c /= len;
            }
        }
        self
    }

    /// Normalizes `(x, y, z)` in place; `w` is untouched.
    ///
    /// Same skip-if-unit and per-component division policy as
    /// [`Self::normalize4`].
    ///
    /// # Panics
    /// Panics if `(x, y, z)` has zero length.
    pub fn normalize3(&mut self) -> &mut Self {
        let f = self.length_sqr3();
        if f < T::one() - T::EPSILON || f > T::one() + T::EPSILON {
            assert!(f > T::zero(), "normalize3 called on a zero-length vector");
            let len = f.sqrt();
            for c in &mut self.data[..3] {
                *c /= len;
            }
        }
        self
    }

    /// Checked [`Self::normalize4`].
    pub fn try_normalize4(&mut self) -> Result<&mut Self, MathError> {
        if self.length_sqr4() > T::zero() {
            Ok(self.normalize4())
        } else {
            Err(MathError::ZeroLength)
        }
    }

    /// Checked [`Self::normalize3`].
    pub fn try_normalize3(&mut self) -> Result<&mut Self, MathError> {
        if self.length_sqr3() > T::zero() {
            Ok(self.normalize3())
        } else {
            Err(MathError::ZeroLength)
        }
    }

    /// Returns a copy normalized over four components.
    pub fn normalized4(mut self) -> Self {
        self.normalize4();
        self
    }

    /// Returns a copy normalized over `(x, y, z)`.
    pub fn normalized3(mut self) -> Self {
        self.normalize3();
        self
    }

    /// Converts every component to another scalar kind.
    pub fn cast<U: Real>(self) -> Vector<U> {
        let [x, y, z, w] = self.data;
        Vector::new(
            U::from_f64(x.to_f64()),
            U::from_f64(y.to_f64()),
            U::from_f64(z.to_f64()),
            U::from_f64(w.to_f64()),
        )
    }
}

impl From<Vector<f32>> for Vector<f64> {
    fn from(value: Vector<f32>) -> Self {
        value.cast()
    }
}

impl<T: Real> From<[T; 4]> for Vector<T> {
    fn from(value: [T; 4]) -> Self {
        Self { data: value }
    }
}

impl<T: Real> From<[T; 3]> for Vector<T> {
    fn from(value: [T; 3]) -> Self {
        Self::new3(value[0], value[1], value[2])
    }
}

impl<T> Index<usize> for Vector<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.data[index]
    }
}

impl<T> IndexMut<usize> for Vector<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.data[index]
    }
}

impl<T: Real> Neg for Vector<T> {
    type Output = Self;

    fn neg(self) -> Self {
        let [x, y, z, w] = self.data;
        Self::new(-x, -y, -z, -w)
    }
}

impl<T: Real> Add for Vector<T> {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self {
        self += rhs;
        self
    }
}

impl<T: Real> Sub for Vector<T> {
    type Output = Self;

    fn sub(mut self, rhs: Self) -> Self {
        self -= rhs;
        self
    }
}

/// Component-wise product.
impl<T: Real> Mul for Vector<T> {
    type Output = Self;

    fn mul(mut self, rhs: Self) -> Self {
        self *= rhs;
        self
    }
}

impl<T: Real> Mul<T> for Vector<T> {
    type Output = Self;

    fn mul(mut self, k: T) -> Self {
        self *= k;
        self
    }
}

/// Cross product, same as [`Vector::cross`].
impl<T: Real> BitXor for Vector<T> {
    type Output = Self;

    fn bitxor(self, rhs: Self) -> Self {
        self.cross(&rhs)
    }
}

impl<T: Real> AddAssign for Vector<T> {
    fn add_assign(&mut self, rhs: Self) {
        for (a, b) in self.data.iter_mut().zip(rhs.data) {
            *a += b;
        }
    }
}

impl<T: Real> SubAssign for Vector<T> {
    fn sub_assign(&mut self, rhs: Self) {
        for (a, b) in self.data.iter_mut().zip(rhs.data) {
            *a -= b;
        }
    }
}

impl<T: Real> MulAssign for Vector<T> {
    fn mul_assign(&mut self, rhs: Self) {
        for (a, b) in self.data.iter_mut().zip(rhs.data) {
            *a *= b;
        }
    }
}

impl<T: Real> MulAssign<T> for Vector<T> {
    fn mul_assign(&mut self, k: T) {
        for a in &mut self.data {
            *a *= k;
        }
    }
}

/// Divides by multiplying with the reciprocal of `k`.
impl<T: Real> DivAssign<T> for Vector<T> {
    fn div_assign(&mut self, k: T) {
        *self *= T::one() / k;
    }
}

macro_rules! impl_scalar_lhs_mul {
    ($($t:ty),*) => {$(
        impl Mul<Vector<$t>> for $t {
            type Output = Vector<$t>;

            fn mul(self, rhs: Vector<$t>) -> Vector<$t> {
                rhs * self
            }
        }
    )*};
}

impl_scalar_lhs_mul!(f32, f64);

/// Writes `x y z w ` with a trailing space and no newline, so several values
/// can share one line on the wire.
impl<T: Real> fmt::Display for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [x, y, z, w] = self.data;
        write!(f, "{x} {y} {z} {w} ")
    }
}

#[cfg(test)]
mod tests {
    use super::Vector;

    #[test]
    fn arithmetic_includes_w() {
        let a = Vector::new(1.0, -2.0, 0.5, 1.0);
        let b = Vector::new(-3.0, 4.0, 1.5, 2.0);
        assert_eq!((a + b).to_array(), [-2.0, 2.0, 2.0, 3.0]);
        assert_eq!((a - b).to_array(), [4.0, -6.0, -1.0, -1.0]);
        assert_eq!((a * b).to_array(), [-3.0, -8.0, 0.75, 2.0]);
        assert_eq!((a * 2.0).to_array(), [2.0, -4.0, 1.0, 2.0]);
        assert_eq!((2.0_f64 * a).to_array(), [2.0, -4.0, 1.0, 2.0]);
        assert_eq!((-a).to_array(), [-1.0, 2.0, -0.5, -1.0]);
    }

    #[test]
    fn compound_assignment() {
        let mut v = Vector::new(1.0, 2.0, 3.0, 4.0);
        v += Vector::new(-1.0, 1.0, 0.0, 0.0);
        assert_eq!(v.to_array(), [0.0, 3.0, 3.0, 4.0]);
        v -= Vector::new(0.0, 1.0, 1.0, 2.0);
        assert_eq!(v.to_array(), [0.0, 2.0, 2.0, 2.0]);
        v *= 0.5;
        assert_eq!(v.to_array(), [0.0, 1.0, 1.0, 1.0]);
        v *= Vector::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(v.to_array(), [0.0, 2.0, 3.0, 4.0]);
        v /= 2.0;
        assert_eq!(v.to_array(), [0.0, 1.0, 1.5, 2.0]);
    }

    #[test]
    fn dot_products_and_lengths() {
        let v = Vector::new(1.0, 2.0, 2.0, 4.0);
        assert_eq!(v.dot3(&v), 9.0);
        assert_eq!(v.dot(&v), 25.0);
        assert_eq!(v.length_sqr2(), 5.0);
        assert_eq!(v.length_sqr3(), 9.0);
        assert_eq!(v.length_sqr4(), 25.0);
        assert_eq!(v.length3(), 3.0);
        assert_eq!(v.length4(), 5.0);
    }

    #[test]
    fn cross_ignores_w_and_matches_operator() {
        let a = Vector::new(1.0, 0.0, 0.0, 7.0);
        let b = Vector::new(0.0, 1.0, 0.0, 9.0);
        assert_eq!(a.cross(&b).to_array(), [0.0, 0.0, 1.0, 0.0]);
        assert_eq!((a ^ b).to_array(), [0.0, 0.0, 1.0, 0.0]);
        assert_eq!((b ^ a).to_array(), [0.0, 0.0, -1.0, 0.0]);
    }

    #[test]
    fn normalize3_leaves_w_alone() {
        let mut v = Vector::new(3.0, 0.0, 4.0, 10.0);
        v.normalize3();
        assert_eq!(v.to_array(), [0.6, 0.0, 0.8, 10.0]);
    }

    #[test]
    fn normalize4_divides_all_components() {
        let mut v = Vector::new(2.0, 0.0, 0.0, 0.0);
        v.normalize4();
        assert_eq!(v.to_array(), [1.0, 0.0, 0.0, 0.0]);
        let mut q = Vector::new(1.0, 1.0, 1.0, 1.0);
        q.normalize();
        assert_eq!(q.to_array(), [0.5, 0.5, 0.5, 0.5]);
    }

    #[test]
    fn near_unit_vectors_are_not_rescaled() {
        let mut v = Vector::new(0.6, 0.8, 0.0, 0.0);
        v.normalize4();
        assert_eq!(v.to_array(), [0.6, 0.8, 0.0, 0.0]);
    }

    #[test]
    #[should_panic(expected = "zero-length")]
    fn normalize_zero_vector_panics() {
        let mut v: Vector<f64> = Vector::zero();
        v.normalize4();
    }

    #[test]
    fn try_normalize_reports_zero_length() {
        let mut v: Vector<f32> = Vector::zero();
        assert!(v.try_normalize3().is_err());
        let mut u = Vector::new3(0.0_f32, 5.0, 0.0);
        assert_eq!(u.try_normalize3().map(|n| n.y()), Ok(1.0));
    }

    #[test]
    fn indexing_and_setters() {
        let mut v = Vector::new3(1.0, 2.0, 3.0);
        assert_eq!(v[2], 3.0);
        v[3] = 4.0;
        assert_eq!(v.w(), 4.0);
        v.set3(7.0, 8.0, 9.0);
        assert_eq!(v.to_array(), [7.0, 8.0, 9.0, 4.0]);
        v.set4(0.0, 0.0, 0.0, 1.0);
        assert_eq!(v.to_array(), [0.0, 0.0, 0.0, 1.0]);
        assert_eq!(Vector::from_slice3(&[1.0, 2.0, 3.0, 4.0]).to_array(), [1.0, 2.0, 3.0, 0.0]);
    }

    #[test]
    #[should_panic]
    fn index_past_w_panics() {
        let v = Vector::new3(1.0, 2.0, 3.0);
        let _ = v[4];
    }

    #[test]
    fn cast_between_kinds() {
        let v = Vector::new(1.5_f32, -2.0, 0.25, 1.0);
        let w: Vector<f64> = v.into();
        assert_eq!(w.to_array(), [1.5, -2.0, 0.25, 1.0]);
        assert_eq!(w.cast::<f32>(), v);
    }

    #[test]
    fn display_has_trailing_space_and_no_newline() {
        let v = Vector::new(1.0, 2.5, -3.0, 0.0);
        assert_eq!(v.to_string(), "1 2.5 -3 0 ");
    }

    #[test]
    fn try_normalize4_scales_all_components() {
        let mut v = Vector::new(0.0, 3.0, 0.0, 4.0);
        assert_eq!(v.try_normalize4().map(|n| n.to_array()), Ok([0.0, 0.6, 0.0, 0.8]));
        let mut z: Vector = Vector::zero();
        assert!(z.try_normalize4().is_err());
        assert_eq!(z.to_array(), [0.0; 4]);
    }
}
