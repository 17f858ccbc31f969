// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Recoverable error type for the checked (`try_*`) entry points.
//!
//! The unchecked operations treat these conditions as caller bugs and
//! `assert!`. Inputs that are merely degenerate (zero axis, parallel
//! directions, antipodal slerp endpoints) never surface here; they resolve to
//! a documented fallback value instead.

use thiserror::Error;

/// Precondition failures reported by the checked entry points.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum MathError {
    /// A quaternion's squared norm fell outside `(0.99, 1.01)`.
    #[error("quaternion is not unit length (squared norm {norm_sq})")]
    NonUnitQuaternion {
        /// Squared norm that was observed.
        norm_sq: f64,
    },
    /// A rotation block had a negative determinant (reflection).
    #[error("rotation block has negative determinant {det}")]
    NegativeDeterminant {
        /// Determinant that was observed.
        det: f64,
    },
    /// Normalization was requested for a zero-length vector.
    #[error("cannot normalize a zero-length vector")]
    ZeroLength,
    /// An axis index other than 0, 1, or 2 was supplied.
    #[error("axis index {index} out of range (expected 0, 1 or 2)")]
    AxisOutOfRange {
        /// Index that was supplied.
        index: usize,
    },
}
