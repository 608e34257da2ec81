// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::f32::consts::PI;

use crate::config::epsilon;

/// Smallest positive normal `f32`.
pub const MIN_NORMAL: f32 = f32::MIN_POSITIVE;

/// Largest finite `f32`; substituted for `+∞` lengths before dividing.
pub const MAX_VALUE: f32 = f32::MAX;

/// Approximate equality under the process-wide tolerance.
///
/// See [`float_equal_threshold`] for the predicate.
#[inline]
pub fn float_equal(a: f32, b: f32) -> bool {
    float_equal_threshold(a, b, epsilon())
}

/// Approximate equality with a caller-supplied tolerance.
///
/// The predicate is a relative/absolute hybrid:
/// - exact equality (including equal infinities) is always equal;
/// - if either operand is zero or the difference is subnormal, the absolute
///   difference must be below `epsilon²`;
/// - otherwise the difference relative to `|a| + |b|` must be below
///   `epsilon`.
#[inline]
pub fn float_equal_threshold(a: f32, b: f32, epsilon: f32) -> bool {
    if a == b {
        return true;
    }
    let diff = (a - b).abs();
    if a * b == 0.0 || diff < MIN_NORMAL {
        return diff < epsilon * epsilon;
    }
    diff / (a.abs() + b.abs()) < epsilon
}

/// Returns `lo` if `x < lo`, `hi` if `x > hi`, else `x`.
///
/// NaN passes through unchanged.
#[inline]
pub fn clamp(x: f32, lo: f32, hi: f32) -> f32 {
    if x < lo {
        lo
    } else if x > hi {
        hi
    } else {
        x
    }
}

/// Returns a closure that clamps its argument to `[lo, hi]`.
///
/// Handy for `map` over component iterators.
pub fn clamp_func(lo: f32, hi: f32) -> impl Fn(f32) -> f32 {
    move |x| clamp(x, lo, hi)
}

/// Absolute value with `-0.0` mapped to `0.0`.
#[inline]
pub fn abs(a: f32) -> f32 {
    if a < 0.0 {
        -a
    } else if a == 0.0 {
        0.0
    } else {
        a
    }
}

/// Clamps in place; convenience for pipelines that mutate a slot.
#[inline]
pub fn clamp_mut(x: &mut f32, lo: f32, hi: f32) {
    *x = clamp(*x, lo, hi);
}

/// Returns `true` when `x` already lies inside `[lo, hi]`.
#[inline]
pub fn is_clamped(x: f32, lo: f32, hi: f32) -> bool {
    x >= lo && x <= hi
}

/// Raises `*x` to `min` if it is smaller.
#[inline]
pub fn set_min(x: &mut f32, min: f32) {
    if *x < min {
        *x = min;
    }
}

/// Lowers `*x` to `max` if it is larger.
#[inline]
pub fn set_max(x: &mut f32, max: f32) {
    if *x > max {
        *x = max;
    }
}

/// Converts degrees to radians.
#[inline]
pub fn deg_to_rad(angle: f32) -> f32 {
    angle * (PI / 180.0)
}

/// Converts radians to degrees.
#[inline]
pub fn rad_to_deg(angle: f32) -> f32 {
    angle * (180.0 / PI)
}

/// Rounds `v` half-away-from-zero to `precision` fractional digits.
///
/// Intermediate math runs in `f64` so the scaled value does not lose the
/// digit being rounded.
pub fn round(v: f32, precision: i32) -> f32 {
    let p = 10f64.powi(precision);
    let t = f64::from(v) * p;
    if t > 0.0 {
        ((t + 0.5).floor() / p) as f32
    } else {
        ((t - 0.5).ceil() / p) as f32
    }
}

/// Squares `x`.
#[inline]
pub fn sq(x: f32) -> f32 {
    x * x
}
