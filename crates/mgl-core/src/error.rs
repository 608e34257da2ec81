// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use thiserror::Error;

/// Errors surfaced by the fallible linear-algebra entry points.
///
/// Singular matrix inverses are not errors: `Mat*::inverse` returns the zero
/// matrix as a documented sentinel. Only operations that cannot produce a
/// meaningful sentinel report through this type.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MathError {
    /// The composite projection · modelview matrix has no inverse.
    #[error("projection * modelview is singular; cannot unproject")]
    SingularMatrix,
    /// A rotation-order name outside the twelve recognized Euler orders.
    #[error("unknown euler rotation order: {0:?}")]
    UnknownEulerOrder(String),
    /// A tolerance that is not finite and strictly positive.
    #[error("tolerance must be finite and > 0, got {0}")]
    InvalidEpsilon(f32),
}
