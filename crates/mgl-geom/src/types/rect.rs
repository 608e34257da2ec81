// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use mgl_core::scalar::clamp;
use mgl_core::{Vec2, Vec3};

/// Rectangle embedded in 3D: centre, two orthonormal in-plane axes, and
/// the half-extent along each.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect3 {
    /// Rectangle centre.
    pub center: Vec3,
    /// In-plane axes; must be orthonormal.
    pub axes: [Vec3; 2],
    /// Half-extent along each axis.
    pub half: Vec2,
}

impl Rect3 {
    /// Creates a rectangle.
    pub const fn new(center: Vec3, axes: [Vec3; 2], half: Vec2) -> Self {
        Self { center, axes, half }
    }

    /// Rectangle with corner `a` and edges `b − a`, `c − a`.
    ///
    /// `b − a` and `c − a` must be perpendicular.
    pub fn from_corners(a: Vec3, b: Vec3, c: Vec3) -> Self {
        let ab = b.sub(a);
        let ac = c.sub(a);
        Self::new(
            a.add(ab.mul(0.5)).add(ac.mul(0.5)),
            [ab.normalized(), ac.normalized()],
            Vec2::new(ab.len() * 0.5, ac.len() * 0.5),
        )
    }

    /// Unit normal `axes[0] × axes[1]`.
    pub fn normal(&self) -> Vec3 {
        self.axes[0].cross(self.axes[1])
    }

    /// The four corners in counter-clockwise order about [`Self::normal`].
    pub fn corners(&self) -> [Vec3; 4] {
        let u = self.axes[0].mul(self.half.x());
        let v = self.axes[1].mul(self.half.y());
        [
            self.center.sub(u).sub(v),
            self.center.add(u).sub(v),
            self.center.add(u).add(v),
            self.center.sub(u).add(v),
        ]
    }

    /// Point of the rectangle nearest to `p`.
    pub fn closest_point(&self, p: Vec3) -> Vec3 {
        let d = p.sub(self.center);
        let mut q = self.center;
        for (i, axis) in self.axes.iter().enumerate() {
            let dist = clamp(d.dot(*axis), -self.half[i], self.half[i]);
            q.add_scaled_vec(dist, axis);
        }
        q
    }

    /// Squared distance from `p` to the rectangle.
    pub fn sq_distance(&self, p: Vec3) -> f32 {
        self.closest_point(p).sub(p).len2()
    }
}
