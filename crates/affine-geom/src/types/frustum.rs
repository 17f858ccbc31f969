// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use affine_core::{transform_lookat, Basis, Real, TransformMatrix, Vector};

/// Symmetric view frustum: a pyramid along `dir` clipped by near and far
/// planes.
///
/// Field-of-view angles are half-angles in radians, measured from `dir`
/// toward `right` (x) and toward `up` (y). Their sines and cosines are cached
/// and kept in sync by [`Frustum::set_fov`].
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Frustum<T = f64> {
    /// Horizontal axis.
    pub right: Vector<T>,
    /// Vertical axis.
    pub up: Vector<T>,
    /// Viewing direction.
    pub dir: Vector<T>,
    /// Apex.
    pub pos: Vector<T>,
    /// Distance from `pos` to the near plane along `dir`.
    pub near: T,
    /// Distance from `pos` to the far plane along `dir`.
    pub far: T,
    fov_x: T,
    fov_y: T,
    pub(crate) cos_fov_x: T,
    pub(crate) sin_fov_x: T,
    pub(crate) cos_fov_y: T,
    pub(crate) sin_fov_y: T,
}

impl<T: Real> Frustum<T> {
    /// Frustum with apex and axes from `basis` (columns right, up, dir).
    #[must_use]
    pub fn from_basis(basis: &Basis<T>, near: T, far: T, half_fov_x: T, half_fov_y: T) -> Self {
        let (sin_fov_x, cos_fov_x) = half_fov_x.sin_cos();
        let (sin_fov_y, cos_fov_y) = half_fov_y.sin_cos();
        Self {
            right: basis.right,
            up: basis.up,
            dir: basis.dir,
            pos: basis.pos,
            near,
            far,
            fov_x: half_fov_x,
            fov_y: half_fov_y,
            cos_fov_x,
            sin_fov_x,
            cos_fov_y,
            sin_fov_y,
        }
    }

    /// Frustum for the camera transform `m`; see [`TransformMatrix::extract`].
    #[must_use]
    pub fn from_matrix(m: &TransformMatrix<T>, near: T, far: T, half_fov_x: T, half_fov_y: T) -> Self {
        Self::from_basis(&m.extract(), near, far, half_fov_x, half_fov_y)
    }

    /// Frustum for a camera at `camera_pos` looking at `look_at`; see
    /// [`transform_lookat`].
    #[must_use]
    pub fn look_at(
        look_at: &Vector<T>,
        camera_pos: &Vector<T>,
        camera_up: &Vector<T>,
        near: T,
        far: T,
        half_fov: (T, T),
    ) -> Self {
        let m = transform_lookat(look_at, camera_pos, camera_up);
        Self::from_matrix(&m, near, far, half_fov.0, half_fov.1)
    }

    /// Horizontal half-angle.
    #[must_use]
    pub fn fov_x(&self) -> T {
        self.fov_x
    }

    /// Vertical half-angle.
    #[must_use]
    pub fn fov_y(&self) -> T {
        self.fov_y
    }

    /// Replaces both half-angles and refreshes the cached trigonometry.
    pub fn set_fov(&mut self, half_fov_x: T, half_fov_y: T) {
        self.fov_x = half_fov_x;
        self.fov_y = half_fov_y;
        (self.sin_fov_x, self.cos_fov_x) = half_fov_x.sin_cos();
        (self.sin_fov_y, self.cos_fov_y) = half_fov_y.sin_cos();
    }
}
