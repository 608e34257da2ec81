// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Closest-point queries against segments and triangles.
//!
//! These are the building blocks the capsule predicates reduce to.

mod segment;
mod triangle;

pub use segment::{
    closest_point_on_segment, closest_points_segment_segment, sq_distance_point_segment,
    SegmentClosest,
};
pub use triangle::{barycentric, closest_point_on_triangle, BarycentricCache, Triangle};
