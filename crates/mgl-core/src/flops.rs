// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Comparison helpers with a fixed tolerance of [`FLOPS_EPSILON`].
//!
//! These are the hot-loop counterparts of [`crate::float_equal_threshold`]:
//! the tolerance is a constant (no atomic load) and the common cases exit
//! early. For every non-NaN input they return exactly what the reference
//! predicate returns with `epsilon = FLOPS_EPSILON`.
//!
//! Ordering helpers are strict with respect to approximate equality:
//! `lt(a, b)` holds only when `a < b` *and* the two are not approximately
//! equal.

use crate::scalar::MIN_NORMAL;

/// Tolerance used by every function in this module.
pub const FLOPS_EPSILON: f32 = 1e-6;

const FLOPS_EPSILON_SQ: f32 = FLOPS_EPSILON * FLOPS_EPSILON;

/// `a ≈ b`.
#[inline]
pub fn eq(a: f32, b: f32) -> bool {
    if a == b {
        return true;
    }
    let diff = (a - b).abs();
    if a == 0.0 || b == 0.0 || diff < MIN_NORMAL {
        return diff < FLOPS_EPSILON_SQ;
    }
    // a * b can underflow to zero for tiny non-zero operands; the reference
    // predicate treats that as the absolute branch too.
    if a * b == 0.0 {
        return diff < FLOPS_EPSILON_SQ;
    }
    diff / (a.abs() + b.abs()) < FLOPS_EPSILON
}

/// `a ≉ b`.
#[inline]
pub fn ne(a: f32, b: f32) -> bool {
    !eq(a, b)
}

/// `a < b` and not `a ≈ b`.
#[inline]
pub fn lt(a: f32, b: f32) -> bool {
    a < b && !eq(a, b)
}

/// `a < b` or `a ≈ b`.
#[inline]
pub fn le(a: f32, b: f32) -> bool {
    a < b || eq(a, b)
}

/// `a > b` and not `a ≈ b`.
#[inline]
pub fn gt(a: f32, b: f32) -> bool {
    a > b && !eq(a, b)
}

/// `a > b` or `a ≈ b`.
#[inline]
pub fn ge(a: f32, b: f32) -> bool {
    a > b || eq(a, b)
}

/// `a ≈ 0`.
#[inline]
pub fn z(a: f32) -> bool {
    a.abs() < FLOPS_EPSILON_SQ
}

/// `a ≉ 0`.
#[inline]
pub fn nz(a: f32) -> bool {
    !z(a)
}
