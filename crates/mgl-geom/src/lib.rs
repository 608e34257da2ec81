// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![forbid(unsafe_code)]
#![deny(rust_2018_idioms, unused_must_use, missing_docs)]
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
    clippy::cast_precision_loss
)]
#![doc = r"Geometry on top of `mgl-core`.

This crate provides:
- Bounding volumes (`Aabb3`, `Aabb2`, `Sphere3`, `Sphere2`, `Obb3`, `Obb2`,
  `Capsule3`, `Capsule2`, `Rect3`, `Dop8`) and their overlap, containment and
  closest-point queries.
- Planes and slabs.
- Segment and triangle queries: closest points and barycentric coordinates.
- A planar Quickhull (`ConvexHull2`) with an O(1)-start support query.
- The 2D GJK simplex reducer (`Simplex2`) and a boolean intersection driver.
- Covariance, Jacobi eigen-decomposition, and bounding-sphere builders
  (Ritter, Eigen, Ritter-Eigen).

Design notes:
- Float32 throughout; every type is a small `Copy` value except the hull,
  which owns three parallel arrays.
- Geometric slack in the hull and SAT tests is the fixed [`GEOM_EPSILON`],
  independent of the process-wide tolerance in `mgl_core::config`.
- Empty point sets are reported as [`GeomError::EmptyPointSet`]; nothing
  here reads an element that is not there.
"]

mod error;
/// Covariance, Jacobi eigen-decomposition, and bounding-sphere fitting.
pub mod fit;
/// 2D GJK intersection driver.
pub mod gjk;
/// Planar Quickhull with a precomputed support cache.
pub mod hull;
/// Segment and triangle closest-point queries.
pub mod query;
/// 2D GJK simplex reducer.
pub mod simplex;
/// Bounding volumes, planes, and slabs.
pub mod types;

pub use error::GeomError;
pub use gjk::gjk_intersect;
pub use hull::{ConvexHull2, HullEdge, HullVertex};
pub use simplex::Simplex2;
pub use types::aabb::{Aabb2, Aabb3};
pub use types::capsule::{Capsule2, Capsule3};
pub use types::dop::Dop8;
pub use types::obb::{Obb2, Obb3};
pub use types::plane::{Plane, Slab};
pub use types::rect::Rect3;
pub use types::sphere::{Sphere2, Sphere3};

/// Slack used by the hull containment test and the OBB separating-axis test.
///
/// Distinct from the process-wide tolerance; fixed at `1e-4`.
pub const GEOM_EPSILON: f32 = 1e-4;
