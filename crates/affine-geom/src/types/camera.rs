// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use affine_core::Real;

/// Physical focal length used when none is supplied, in meters.
pub const DEFAULT_FOCAL_LENGTH: f64 = 0.01;

/// Pinhole camera intrinsics.
///
/// `focal_length` is the physical lens distance. It cannot be recovered from
/// `fx`/`fy` alone but locates the lens plane.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CameraIntrinsics<T = f64> {
    /// Focal length along x, in pixels.
    pub fx: T,
    /// Focal length along y, in pixels.
    pub fy: T,
    /// Principal point x, in pixels.
    pub cx: T,
    /// Principal point y, in pixels.
    pub cy: T,
    /// Distortion model name, e.g. `"plumb_bob"`. Empty means none.
    pub distortion_model: String,
    /// Coefficients for `distortion_model`.
    pub distortion_coeffs: Vec<T>,
    /// Physical focal length.
    pub focal_length: T,
}

impl<T: Real> Default for CameraIntrinsics<T> {
    fn default() -> Self {
        Self::new(T::zero(), T::zero(), T::zero(), T::zero())
    }
}

impl<T: Real> CameraIntrinsics<T> {
    /// Intrinsics with no distortion and the default focal length.
    #[must_use]
    pub fn new(fx: T, fy: T, cx: T, cy: T) -> Self {
        Self {
            fx,
            fy,
            cx,
            cy,
            distortion_model: String::new(),
            distortion_coeffs: Vec::new(),
            focal_length: T::from_f64(DEFAULT_FOCAL_LENGTH),
        }
    }

    /// Whether a distortion model is set.
    #[must_use]
    pub fn has_distortion(&self) -> bool {
        !self.distortion_model.is_empty()
    }

    /// Converts every value to another scalar kind.
    #[must_use]
    pub fn cast<U: Real>(&self) -> CameraIntrinsics<U> {
        let conv = |v: T| U::from_f64(v.to_f64());
        CameraIntrinsics {
            fx: conv(self.fx),
            fy: conv(self.fy),
            cx: conv(self.cx),
            cy: conv(self.cy),
            distortion_model: self.distortion_model.clone(),
            distortion_coeffs: self.distortion_coeffs.iter().copied().map(conv).collect(),
            focal_length: conv(self.focal_length),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_small_focal_length() {
        let c = CameraIntrinsics::<f64>::default();
        assert_eq!(c.focal_length, 0.01);
        assert_eq!(c.fx, 0.0);
        assert!(!c.has_distortion());
    }

    #[test]
    fn cast_copies_distortion() {
        let mut c = CameraIntrinsics::new(500.0, 510.0, 320.0, 240.0);
        c.distortion_model = "plumb_bob".to_owned();
        c.distortion_coeffs = vec![0.1, -0.05, 0.0, 0.0, 0.001];
        let narrow: CameraIntrinsics<f32> = c.cast();
        assert_eq!(narrow.fy, 510.0);
        assert_eq!(narrow.distortion_coeffs.len(), 5);
        assert_eq!(narrow.distortion_model, "plumb_bob");
        assert!(narrow.has_distortion());
        assert_eq!(narrow.focal_length, 0.01_f32);
    }
}
