// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Bounding volumes and the half-space primitives built on them.
//!
//! Every volume is a plain `Copy` record parameterized by a centre and
//! extents. Overlap tests are inclusive: touching volumes overlap.
//! Oriented types (`Obb*`, `Rect3`) assume orthonormal axes; nothing here
//! re-orthonormalizes them.

#[doc = "Axis-aligned boxes in 3D and 2D."]
pub mod aabb;
#[doc = "Swept spheres around a segment."]
pub mod capsule;
#[doc = "Eight-sided discrete oriented polytope."]
pub mod dop;
#[doc = "Oriented boxes in 3D and 2D."]
pub mod obb;
#[doc = "Planes and slabs."]
pub mod plane;
#[doc = "Oriented rectangles embedded in 3D."]
pub mod rect;
#[doc = "Spheres and circles."]
pub mod sphere;

use mgl_core::Vec3;

// Component-wise min/max; Vec3 has no lattice ops of its own.
pub(crate) fn min3(a: Vec3, b: Vec3) -> Vec3 {
    Vec3::new(a.x().min(b.x()), a.y().min(b.y()), a.z().min(b.z()))
}

pub(crate) fn max3(a: Vec3, b: Vec3) -> Vec3 {
    Vec3::new(a.x().max(b.x()), a.y().max(b.y()), a.z().max(b.z()))
}
