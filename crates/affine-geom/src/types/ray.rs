// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::fmt;
use core::str::FromStr;

use affine_core::text::{decode, FromTokens, TextError, TokenReader};
use affine_core::{Real, Vector};

/// Ray with an origin and a direction. The direction need not be unit length.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ray<T = f64> {
    /// Origin.
    pub pos: Vector<T>,
    /// Direction.
    pub dir: Vector<T>,
}

impl<T: Real> Ray<T> {
    /// Creates a ray from its origin and direction.
    #[must_use]
    pub fn new(pos: Vector<T>, dir: Vector<T>) -> Self {
        Self { pos, dir }
    }

    /// Point at parameter `t` along the ray.
    #[must_use]
    pub fn at(&self, t: T) -> Vector<T> {
        self.pos + self.dir * t
    }
}

/// `px py pz dx dy dz ` with a trailing space and no newline.
impl<T: Real> fmt::Display for Ray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [px, py, pz] = self.pos.xyz();
        let [dx, dy, dz] = self.dir.xyz();
        write!(f, "{px} {py} {pz} {dx} {dy} {dz} ")
    }
}

impl<T: Real> FromTokens for Ray<T> {
    fn from_tokens(reader: &mut TokenReader<'_>) -> Result<Self, TextError> {
        let pos = Vector::new3(
            reader.scalar("pos.x")?,
            reader.scalar("pos.y")?,
            reader.scalar("pos.z")?,
        );
        let dir = Vector::new3(
            reader.scalar("dir.x")?,
            reader.scalar("dir.y")?,
            reader.scalar("dir.z")?,
        );
        Ok(Self { pos, dir })
    }
}

impl<T: Real> FromStr for Ray<T> {
    type Err = TextError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_round_trip() {
        let r = Ray::new(Vector::new3(-5.0, 0.5, 0.0), Vector::new3(1.0, 0.0, -0.25));
        let text = r.to_string();
        assert_eq!(text, "-5 0.5 0 1 0 -0.25 ");
        assert_eq!(text.parse::<Ray>(), Ok(r));
    }

    #[test]
    fn short_input_names_missing_field() {
        assert_eq!(
            "0 0 0 1 0".parse::<Ray>(),
            Err(TextError::MissingToken { expected: "dir.z" })
        );
    }

    #[test]
    fn at_walks_along_direction() {
        let r = Ray::new(Vector::new3(1.0, 0.0, 0.0), Vector::new3(0.0, 2.0, 0.0));
        assert_eq!(r.at(1.5).xyz(), [1.0, 3.0, 0.0]);
    }
}
