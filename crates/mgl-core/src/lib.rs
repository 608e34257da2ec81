// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! mgl-core: single-precision linear algebra for real-time rendering and
//! physics.
//!
//! The crate provides fixed-size vectors (`Vec2`, `Vec3`, `Vec4`), square
//! matrices (`Mat2`, `Mat3`, `Mat4`), the affine shortcut `Mat3x4`, unit
//! quaternions (`Quat`), a rigid `Transform` wrapper, and OpenGL-style
//! projection helpers.
//!
//! Conventions:
//! - Every value is an `f32`; angles are radians.
//! - Matrices are column-major: element `(r, c)` of an `m`-row matrix lives
//!   at linear index `c * m + r`. The layout is observable (GPU uploads) and
//!   pinned with compile-time size assertions.
//! - Binary operations come in three forms: a value-returning `op`, an
//!   in-place `op_of(lhs, rhs)` that writes into `self`, and `op_with(rhs)`
//!   that updates the left operand. None of them allocate.
//! - Approximate equality consults the process-wide tolerance installed via
//!   [`config::Tolerance::install`]; it defaults to `1e-10`.
#![forbid(unsafe_code)]
#![deny(rust_2018_idioms, unused_must_use)]
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro,
    clippy::print_stdout,
    clippy::print_stderr
)]
#![allow(
    clippy::must_use_candidate,
    clippy::return_self_not_must_use,
    clippy::unreadable_literal,
    clippy::missing_const_for_fn,
    clippy::suboptimal_flops,
    clippy::many_single_char_names,
    clippy::module_name_repetitions,
    clippy::float_cmp,
    clippy::use_self,
    clippy::len_without_is_empty,
    clippy::should_implement_trait,
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation
)]

/// Process-wide tolerance configuration.
pub mod config;
/// Cartesian, spherical, and cylindrical coordinate conversions.
pub mod conv;
mod error;
/// Fast comparison family with a fixed `1e-6` tolerance.
pub mod flops;
/// Square and affine matrices.
pub mod mat;
/// OpenGL-style projection and viewport helpers.
pub mod project;
mod quat;
/// Scalar utilities: approximate equality, clamping, rounding, angles.
pub mod scalar;
mod transform;
mod vec;

pub use config::{epsilon, set_epsilon, Tolerance};
pub use project::Viewport;
pub use error::MathError;
pub use mat::{Mat2, Mat3, Mat3x4, Mat4};
pub use quat::{
    angles_to_quat, mat4_to_quat, quat_between_vectors, quat_ident, quat_lerp, quat_look_at_v,
    quat_nlerp, quat_rotate, quat_slerp, EulerOrder, Quat, SLERP_NLERP_THRESHOLD,
};
pub use scalar::{clamp, deg_to_rad, float_equal, float_equal_threshold, rad_to_deg, round};
pub use transform::Transform;
pub use vec::{Vec2, Vec3, Vec4};
