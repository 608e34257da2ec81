// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Process-wide tolerance used by approximate predicates.
//!
//! Contract:
//! - Callers install a [`Tolerance`] during start-up, before any predicate
//!   runs, and never write it again. Readers then observe a stable value.
//! - The slot stores the `f32` bit pattern in an atomic so reads and writes
//!   are data-race free; no ordering beyond `Relaxed` is promised.
//! - Geometric closeness in hull and separating-axis code does not consult
//!   this value; those routines use their own fixed constants.

use core::sync::atomic::{AtomicU32, Ordering};

use tracing::debug;

use crate::MathError;

/// Default tolerance for [`crate::float_equal`] and matrix/vector
/// approximate equality.
pub const DEFAULT_EPSILON: f32 = 1e-10;

static EPSILON_BITS: AtomicU32 = AtomicU32::new(DEFAULT_EPSILON.to_bits());

/// Returns the currently installed process-wide tolerance.
#[inline]
pub fn epsilon() -> f32 {
    f32::from_bits(EPSILON_BITS.load(Ordering::Relaxed))
}

/// Overwrites the process-wide tolerance without validation.
///
/// Prefer [`Tolerance::install`], which rejects non-finite or non-positive
/// values.
pub fn set_epsilon(value: f32) {
    EPSILON_BITS.store(value.to_bits(), Ordering::Relaxed);
}

/// Ambient numeric configuration for the predicates in this crate.
///
/// Larger values make approximate predicates more permissive (more false
/// positives), smaller values make them stricter.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tolerance {
    /// Relative/absolute threshold for approximate float equality.
    #[cfg_attr(feature = "serde", serde(default = "default_epsilon"))]
    pub epsilon: f32,
}

#[cfg(feature = "serde")]
const fn default_epsilon() -> f32 {
    DEFAULT_EPSILON
}

impl Default for Tolerance {
    fn default() -> Self {
        Self {
            epsilon: DEFAULT_EPSILON,
        }
    }
}

impl Tolerance {
    /// Creates a tolerance with the given epsilon.
    pub const fn new(epsilon: f32) -> Self {
        Self { epsilon }
    }

    /// Snapshot of the currently installed tolerance.
    pub fn current() -> Self {
        Self { epsilon: epsilon() }
    }

    /// Checks that `epsilon` is finite and strictly positive.
    pub fn validate(&self) -> Result<(), MathError> {
        if self.epsilon.is_finite() && self.epsilon > 0.0 {
            Ok(())
        } else {
            Err(MathError::InvalidEpsilon(self.epsilon))
        }
    }

    /// Validates and installs this tolerance process-wide.
    pub fn install(self) -> Result<(), MathError> {
        self.validate()?;
        let previous = epsilon();
        set_epsilon(self.epsilon);
        debug!(previous, epsilon = self.epsilon, "installed math tolerance");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_constant() {
        assert_eq!(Tolerance::default().epsilon, DEFAULT_EPSILON);
    }

    #[test]
    fn validate_rejects_bad_values() {
        for bad in [0.0, -1.0, f32::NAN, f32::INFINITY] {
            assert!(Tolerance::new(bad).validate().is_err(), "{bad} accepted");
        }
        assert!(Tolerance::new(1e-6).validate().is_ok());
    }
}
