// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use mgl_core::Vec3;

/// Plane `{ x : normal · x = d }` with a unit normal.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Plane {
    /// Unit normal.
    pub normal: Vec3,
    /// Signed offset from the origin along `normal`.
    pub d: f32,
}

impl Plane {
    /// Creates a plane from a unit normal and offset.
    pub const fn new(normal: Vec3, d: f32) -> Self {
        Self { normal, d }
    }

    /// Plane through `a, b, c`.
    ///
    /// The normal follows the right-hand rule over the counter-clockwise
    /// winding `a → b → c`.
    pub fn from_points(a: Vec3, b: Vec3, c: Vec3) -> Self {
        let normal = b.sub(a).cross(c.sub(a)).normalized();
        Self::new(normal, normal.dot(a))
    }

    /// Plane with the given normal passing through `p`. The normal is
    /// normalized.
    pub fn from_normal_and_point(normal: Vec3, p: Vec3) -> Self {
        let normal = normal.normalized();
        Self::new(normal, normal.dot(p))
    }

    /// Signed distance of `p`; positive on the side the normal points to.
    pub fn signed_distance(&self, p: Vec3) -> f32 {
        self.normal.dot(p) - self.d
    }

    /// Orthogonal projection of `p` onto the plane.
    pub fn closest_point(&self, p: Vec3) -> Vec3 {
        p.sub(self.normal.mul(self.signed_distance(p)))
    }
}

/// Region between two parallel planes sharing a unit normal.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Slab {
    /// Unit normal shared by both bounding planes.
    pub normal: Vec3,
    /// Offset of the near plane along `normal`.
    pub near: f32,
    /// Offset of the far plane along `normal`; `near <= far`.
    pub far: f32,
}

impl Slab {
    /// Creates a slab.
    pub const fn new(normal: Vec3, near: f32, far: f32) -> Self {
        Self { normal, near, far }
    }

    /// Returns `true` if `p` lies between the planes, inclusive.
    pub fn contains_point(&self, p: Vec3) -> bool {
        let t = self.normal.dot(p);
        t >= self.near && t <= self.far
    }
}
