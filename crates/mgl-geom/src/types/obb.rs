// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use mgl_core::scalar::clamp;
use mgl_core::{Mat3x4, Vec2, Vec3};

use super::aabb::Aabb3;
use crate::GEOM_EPSILON;

/// Oriented bounding box: centre, orthonormal local axes, half-extents.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Obb3 {
    /// Box centre.
    pub center: Vec3,
    /// Local x, y, and z axes; must be orthonormal.
    pub axes: [Vec3; 3],
    /// Half-extent along each local axis.
    pub half: Vec3,
}

impl Obb3 {
    /// Creates a box.
    pub const fn new(center: Vec3, axes: [Vec3; 3], half: Vec3) -> Self {
        Self { center, axes, half }
    }

    /// Box obtained by moving `aabb` through the affine transform `m`.
    ///
    /// Scale in the linear part is folded into the half-extents so the
    /// stored axes stay unit length.
    pub fn from_aabb_and_transform(aabb: &Aabb3, m: &Mat3x4) -> Self {
        let mut axes = [Vec3::ZERO; 3];
        let mut half = Vec3::ZERO;
        for (i, axis) in axes.iter_mut().enumerate() {
            let col = m.axis(i);
            half[i] = aabb.half[i] * col.len();
            *axis = col.normalized();
        }
        Self::new(m.mul_vec3(aabb.center), axes, half)
    }

    /// Point of the box nearest to `p`.
    pub fn closest_point(&self, p: Vec3) -> Vec3 {
        let d = p.sub(self.center);
        let mut q = self.center;
        for (i, axis) in self.axes.iter().enumerate() {
            let dist = clamp(d.dot(*axis), -self.half[i], self.half[i]);
            q.add_scaled_vec(dist, axis);
        }
        q
    }

    /// Squared distance from `p` to the box; zero inside.
    pub fn sq_distance(&self, p: Vec3) -> f32 {
        let d = p.sub(self.center);
        let mut sq = 0.0;
        for (i, axis) in self.axes.iter().enumerate() {
            let dist = d.dot(*axis);
            let excess = if dist < -self.half[i] {
                dist + self.half[i]
            } else if dist > self.half[i] {
                dist - self.half[i]
            } else {
                0.0
            };
            sq += excess * excess;
        }
        sq
    }

    /// Separating-axis test over the 15 candidate axes.
    ///
    /// [`GEOM_EPSILON`] is added to every `|Rᵢⱼ|` so that near-parallel
    /// edge pairs, whose cross product is close to zero, cannot report a
    /// false separation.
    pub fn overlaps(&self, other: &Self) -> bool {
        let a = self;
        let b = other;
        let mut r = [[0.0f32; 3]; 3];
        let mut abs_r = [[0.0f32; 3]; 3];
        for i in 0..3 {
            for j in 0..3 {
                r[i][j] = a.axes[i].dot(b.axes[j]);
                abs_r[i][j] = r[i][j].abs() + GEOM_EPSILON;
            }
        }
        let d = b.center.sub(a.center);
        let t = [d.dot(a.axes[0]), d.dot(a.axes[1]), d.dot(a.axes[2])];

        // A's face normals
        for i in 0..3 {
            let ra = a.half[i];
            let rb = b.half[0] * abs_r[i][0] + b.half[1] * abs_r[i][1] + b.half[2] * abs_r[i][2];
            if t[i].abs() > ra + rb {
                return false;
            }
        }

        // B's face normals
        for j in 0..3 {
            let ra = a.half[0] * abs_r[0][j] + a.half[1] * abs_r[1][j] + a.half[2] * abs_r[2][j];
            let rb = b.half[j];
            let dist = t[0] * r[0][j] + t[1] * r[1][j] + t[2] * r[2][j];
            if dist.abs() > ra + rb {
                return false;
            }
        }

        // edge-edge axes A_i x B_j
        for i in 0..3 {
            let (i1, i2) = ((i + 1) % 3, (i + 2) % 3);
            for j in 0..3 {
                let (j1, j2) = ((j + 1) % 3, (j + 2) % 3);
                let ra = a.half[i1] * abs_r[i2][j] + a.half[i2] * abs_r[i1][j];
                let rb = b.half[j1] * abs_r[i][j2] + b.half[j2] * abs_r[i][j1];
                let dist = t[i2] * r[i1][j] - t[i1] * r[i2][j];
                if dist.abs() > ra + rb {
                    return false;
                }
            }
        }
        true
    }
}

/// Planar oriented box.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Obb2 {
    /// Box centre.
    pub center: Vec2,
    /// Local x and y axes; must be orthonormal.
    pub axes: [Vec2; 2],
    /// Half-extent along each local axis.
    pub half: Vec2,
}

impl Obb2 {
    /// Creates a box.
    pub const fn new(center: Vec2, axes: [Vec2; 2], half: Vec2) -> Self {
        Self { center, axes, half }
    }

    /// Box of the given half-extents rotated by `angle` radians.
    pub fn from_angle(center: Vec2, angle: f32, half: Vec2) -> Self {
        let (s, c) = angle.sin_cos();
        let x = Vec2::new(c, s);
        Self::new(center, [x, x.perp()], half)
    }

    /// Point of the box nearest to `p`.
    pub fn closest_point(&self, p: Vec2) -> Vec2 {
        let d = p.sub(self.center);
        let mut q = self.center;
        for (i, axis) in self.axes.iter().enumerate() {
            let dist = clamp(d.dot(*axis), -self.half[i], self.half[i]);
            q.add_scaled_vec(dist, axis);
        }
        q
    }

    /// Squared distance from `p` to the box; zero inside.
    pub fn sq_distance(&self, p: Vec2) -> f32 {
        self.closest_point(p).sub(p).len2()
    }

    fn radius_along(&self, axis: Vec2) -> f32 {
        self.half[0] * self.axes[0].dot(axis).abs() + self.half[1] * self.axes[1].dot(axis).abs()
    }

    /// Separating-axis test over the four face normals.
    pub fn overlaps(&self, other: &Self) -> bool {
        let t = other.center.sub(self.center);
        self.axes.iter().chain(other.axes.iter()).all(|axis| {
            t.dot(*axis).abs() <= self.radius_along(*axis) + other.radius_along(*axis)
        })
    }
}
