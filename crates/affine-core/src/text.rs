// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Whitespace-separated text codec.
//!
//! Values are written by their `Display` impls as scalars each followed by a
//! single space, with no newline, so several values can share one line.
//! [`TokenReader`] reads them back in sequence; the `FromStr` impls decode a
//! single value and reject trailing input.
//!
//! [`TransformMatrix`] is written column by column even though it is stored
//! row-major; the reader applies the same transposition.

use core::iter::Peekable;
use core::str::{FromStr, SplitWhitespace};

use thiserror::Error;
use tracing::debug;

use crate::error::MathError;
use crate::matrix::TransformMatrix;
use crate::scalar::Real;
use crate::transform::Transform;
use crate::vector::Vector;

/// Errors produced while decoding text.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TextError {
    /// Input ended before all scalars were read.
    #[error("missing token: expected {expected}")]
    MissingToken {
        /// Name of the field that was being read.
        expected: &'static str,
    },
    /// A token did not parse as a number.
    #[error("invalid number {token:?}")]
    InvalidNumber {
        /// The offending token.
        token: String,
    },
    /// Tokens remained after the value was complete.
    #[error("unexpected trailing input")]
    TrailingInput,
    /// The scalars parsed but describe an invalid value.
    #[error(transparent)]
    Math(#[from] MathError),
}

/// Sequential reader over whitespace-separated scalars.
///
/// # Examples
/// ```
/// use affine_core::{TokenReader, Transform, Vector};
/// let line = format!("{}{}", Vector::new3(1.0, 2.0, 3.0), Transform::<f64>::identity());
/// let mut reader = TokenReader::new(&line);
/// let v: Vector = reader.read()?;
/// let t: Transform = reader.read()?;
/// reader.finish()?;
/// assert_eq!(v.z(), 3.0);
/// assert_eq!(t, Transform::identity());
/// # Ok::<(), affine_core::TextError>(())
/// ```
#[derive(Debug, Clone)]
pub struct TokenReader<'a> {
    tokens: Peekable<SplitWhitespace<'a>>,
}

impl<'a> TokenReader<'a> {
    /// Wraps `input` for reading.
    pub fn new(input: &'a str) -> Self {
        Self {
            tokens: input.split_whitespace().peekable(),
        }
    }

    /// Reads one scalar; `expected` names it in the error.
    pub fn scalar<T: Real>(&mut self, expected: &'static str) -> Result<T, TextError> {
        let token = self
            .tokens
            .next()
            .ok_or(TextError::MissingToken { expected })?;
        token.parse().map_err(|_| TextError::InvalidNumber {
            token: token.to_owned(),
        })
    }

    /// Reads one complete value.
    pub fn read<V: FromTokens>(&mut self) -> Result<V, TextError> {
        V::from_tokens(self)
    }

    /// Whether every token has been consumed.
    pub fn is_empty(&mut self) -> bool {
        self.tokens.peek().is_none()
    }

    /// Fails with [`TextError::TrailingInput`] if tokens remain.
    pub fn finish(mut self) -> Result<(), TextError> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(TextError::TrailingInput)
        }
    }
}

/// Values that can be read from a [`TokenReader`].
pub trait FromTokens: Sized {
    /// Consumes exactly the tokens of one value.
    fn from_tokens(reader: &mut TokenReader<'_>) -> Result<Self, TextError>;
}

/// Decodes exactly one value from `input`.
pub fn decode<V: FromTokens>(input: &str) -> Result<V, TextError> {
    let mut reader = TokenReader::new(input);
    let result = reader.read().and_then(|v| reader.finish().map(|()| v));
    if let Err(err) = &result {
        debug!(
            value_type = core::any::type_name::<V>(),
            error = %err,
            "failed to decode text value"
        );
    }
    result
}

impl<T: Real> FromTokens for Vector<T> {
    fn from_tokens(reader: &mut TokenReader<'_>) -> Result<Self, TextError> {
        Ok(Vector::new(
            reader.scalar("x")?,
            reader.scalar("y")?,
            reader.scalar("z")?,
            reader.scalar("w")?,
        ))
    }
}

impl<T: Real> FromTokens for Transform<T> {
    fn from_tokens(reader: &mut TokenReader<'_>) -> Result<Self, TextError> {
        let rot = reader.read::<Vector<T>>()?;
        let trans = Vector::new3(
            reader.scalar("trans.x")?,
            reader.scalar("trans.y")?,
            reader.scalar("trans.z")?,
        );
        Ok(Transform::try_new(rot, trans)?)
    }
}

impl<T: Real> FromTokens for TransformMatrix<T> {
    fn from_tokens(reader: &mut TokenReader<'_>) -> Result<Self, TextError> {
        let mut rows = [[T::zero(); 3]; 3];
        for j in 0..3 {
            for row in &mut rows {
                row[j] = reader.scalar("rotation")?;
            }
        }
        let trans = Vector::new3(
            reader.scalar("trans.x")?,
            reader.scalar("trans.y")?,
            reader.scalar("trans.z")?,
        );
        Ok(TransformMatrix::from_rows(rows, trans))
    }
}

impl<T: Real> FromStr for Vector<T> {
    type Err = TextError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode(s)
    }
}

impl<T: Real> FromStr for Transform<T> {
    type Err = TextError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode(s)
    }
}

impl<T: Real> FromStr for TransformMatrix<T> {
    type Err = TextError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode(s)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]
    use super::*;

    #[test]
    fn vector_parses_display_output() {
        let v = Vector::new(1.0, -2.5, 3.0, 0.25);
        assert_eq!(v.to_string().parse::<Vector>(), Ok(v));
    }

    #[test]
    fn matrix_reads_column_major() {
        let m: TransformMatrix = "0 1 0 -1 0 0 0 0 1 1 2 3".parse().expect("matrix text");
        assert_eq!(m.rot(0, 1), -1.0);
        assert_eq!(m.rot(1, 0), 1.0);
        assert_eq!(m.trans().xyz(), [1.0, 2.0, 3.0]);
    }

    #[test]
    fn missing_tokens_are_named() {
        assert_eq!(
            "1 2 3".parse::<Vector>(),
            Err(TextError::MissingToken { expected: "w" })
        );
        assert_eq!(
            "1 0 0 0 1 2".parse::<Transform>(),
            Err(TextError::MissingToken { expected: "trans.z" })
        );
    }

    #[test]
    fn bad_number_and_trailing_input() {
        assert_eq!(
            "1 two 3 4".parse::<Vector>(),
            Err(TextError::InvalidNumber {
                token: "two".to_owned()
            })
        );
        assert_eq!("1 2 3 4 5".parse::<Vector>(), Err(TextError::TrailingInput));
    }

    #[test]
    fn non_unit_rotation_is_rejected() {
        assert_eq!(
            "2 0 0 0 0 0 0".parse::<Transform>(),
            Err(TextError::Math(MathError::NonUnitQuaternion { norm_sq: 4.0 }))
        );
    }

    #[test]
    fn reader_handles_concatenated_values() {
        let t = Transform::new(Vector::new(0.0, 1.0, 0.0, 0.0), Vector::new3(7.0, 8.0, 9.0));
        let m = TransformMatrix::<f32>::identity();
        let line = format!("{t}{m}");
        let mut reader = TokenReader::new(&line);
        assert_eq!(reader.read::<Transform>(), Ok(t));
        assert_eq!(reader.read::<TransformMatrix<f32>>(), Ok(m));
        assert!(reader.is_empty());
        assert_eq!(reader.finish(), Ok(()));
    }
}
