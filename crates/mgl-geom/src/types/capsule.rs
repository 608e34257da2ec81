// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use mgl_core::{Vec2, Vec3};

use super::sphere::{Sphere2, Sphere3};
use crate::query::{closest_points_segment_segment, sq_distance_point_segment};

/// Sphere swept along the segment `a..b`.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Capsule3 {
    /// First endpoint of the core segment.
    pub a: Vec3,
    /// Second endpoint of the core segment.
    pub b: Vec3,
    /// Sweep radius.
    pub radius: f32,
}

impl Capsule3 {
    /// Creates a capsule.
    pub const fn new(a: Vec3, b: Vec3, radius: f32) -> Self {
        Self { a, b, radius }
    }

    /// Returns `true` if `p` lies inside or on the capsule.
    pub fn contains_point(&self, p: Vec3) -> bool {
        sq_distance_point_segment(p, self.a, self.b) <= self.radius * self.radius
    }

    /// Returns `true` if the capsules touch or intersect.
    pub fn overlaps(&self, other: &Self) -> bool {
        let r = self.radius + other.radius;
        closest_points_segment_segment(self.a, self.b, other.a, other.b).sq_distance <= r * r
    }

    /// Returns `true` if the capsule touches or intersects the sphere.
    pub fn overlaps_sphere(&self, s: &Sphere3) -> bool {
        let r = self.radius + s.radius();
        sq_distance_point_segment(s.center(), self.a, self.b) <= r * r
    }
}

/// Planar capsule (a stadium).
#[derive(Debug, Copy, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Capsule2 {
    /// First endpoint of the core segment.
    pub a: Vec2,
    /// Second endpoint of the core segment.
    pub b: Vec2,
    /// Sweep radius.
    pub radius: f32,
}

// The planar predicates run the 3D segment queries in the z = 0 plane.
impl Capsule2 {
    /// Creates a capsule.
    pub const fn new(a: Vec2, b: Vec2, radius: f32) -> Self {
        Self { a, b, radius }
    }

    /// Returns `true` if `p` lies inside or on the capsule.
    pub fn contains_point(&self, p: Vec2) -> bool {
        sq_distance_point_segment(p.vec3(0.0), self.a.vec3(0.0), self.b.vec3(0.0))
            <= self.radius * self.radius
    }

    /// Returns `true` if the capsules touch or intersect.
    pub fn overlaps(&self, other: &Self) -> bool {
        let r = self.radius + other.radius;
        let c = closest_points_segment_segment(
            self.a.vec3(0.0),
            self.b.vec3(0.0),
            other.a.vec3(0.0),
            other.b.vec3(0.0),
        );
        c.sq_distance <= r * r
    }

    /// Returns `true` if the capsule touches or intersects the circle.
    pub fn overlaps_sphere(&self, s: &Sphere2) -> bool {
        let r = self.radius + s.radius();
        let c = s.center().vec3(0.0);
        sq_distance_point_segment(c, self.a.vec3(0.0), self.b.vec3(0.0)) <= r * r
    }
}
