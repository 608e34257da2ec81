// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use mgl_core::scalar::clamp;
use mgl_core::{Mat3x4, Vec2, Vec3};

use super::{max3, min3};
use crate::GeomError;

/// Axis-aligned bounding box stored as centre and half-extents.
///
/// Invariants:
/// - every component of `half` is non-negative.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Aabb3 {
    /// Box centre.
    pub center: Vec3,
    /// Half-extent along each axis.
    pub half: Vec3,
}

impl Aabb3 {
    /// Creates a box from its centre and half-extents.
    pub const fn new(center: Vec3, half: Vec3) -> Self {
        Self { center, half }
    }

    /// Creates the box spanning two corners.
    ///
    /// The corners may be given in any order.
    pub fn from_min_max(a: Vec3, b: Vec3) -> Self {
        let lo = min3(a, b);
        let hi = max3(a, b);
        Self {
            center: lo.add(hi).mul(0.5),
            half: hi.sub(lo).mul(0.5),
        }
    }

    /// Builds the smallest box containing every point.
    ///
    /// # Errors
    /// [`GeomError::EmptyPointSet`] if `points` is empty.
    pub fn from_points(points: &[Vec3]) -> Result<Self, GeomError> {
        let (first, rest) = points.split_first().ok_or(GeomError::EmptyPointSet)?;
        let (lo, hi) = rest
            .iter()
            .fold((*first, *first), |(lo, hi), p| (min3(lo, *p), max3(hi, *p)));
        Ok(Self::from_min_max(lo, hi))
    }

    /// Minimum corner.
    pub fn min(&self) -> Vec3 {
        self.center.sub(self.half)
    }

    /// Maximum corner.
    pub fn max(&self) -> Vec3 {
        self.center.add(self.half)
    }

    /// Returns `true` if the boxes overlap (inclusive on faces).
    pub fn overlaps(&self, other: &Self) -> bool {
        (0..3).all(|i| (self.center[i] - other.center[i]).abs() <= self.half[i] + other.half[i])
    }

    /// Returns `true` if `p` lies inside or on the box.
    pub fn contains_point(&self, p: Vec3) -> bool {
        (0..3).all(|i| (p[i] - self.center[i]).abs() <= self.half[i])
    }

    /// Point of the box nearest to `p`.
    pub fn closest_point(&self, p: Vec3) -> Vec3 {
        let lo = self.min();
        let hi = self.max();
        Vec3::new(
            clamp(p.x(), lo.x(), hi.x()),
            clamp(p.y(), lo.y(), hi.y()),
            clamp(p.z(), lo.z(), hi.z()),
        )
    }

    /// Squared distance from `p` to the box; zero inside.
    pub fn sq_distance(&self, p: Vec3) -> f32 {
        let lo = self.min();
        let hi = self.max();
        let mut d = 0.0;
        for i in 0..3 {
            let v = p[i];
            if v < lo[i] {
                d += (lo[i] - v) * (lo[i] - v);
            }
            if v > hi[i] {
                d += (v - hi[i]) * (v - hi[i]);
            }
        }
        d
    }

    /// Enclosing box of this box after the affine transform `m`.
    ///
    /// `c'ᵢ = tᵢ + Σⱼ Mᵢⱼ cⱼ` and `h'ᵢ = Σⱼ |Mᵢⱼ| hⱼ`.
    pub fn update(&self, m: &Mat3x4) -> Self {
        let mut out = Self::new(m.translation(), Vec3::ZERO);
        for i in 0..3 {
            for j in 0..3 {
                let e = m.at(i, j);
                out.center[i] += e * self.center[j];
                out.half[i] += e.abs() * self.half[j];
            }
        }
        out
    }

    /// Smallest box containing both boxes.
    pub fn union(&self, other: &Self) -> Self {
        Self::from_min_max(min3(self.min(), other.min()), max3(self.max(), other.max()))
    }

    /// Grows the box by `margin` on every side.
    pub fn inflate(&self, margin: f32) -> Self {
        Self::new(self.center, self.half.add(Vec3::new(margin, margin, margin)))
    }
}

/// Planar counterpart of [`Aabb3`].
#[derive(Debug, Copy, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Aabb2 {
    /// Box centre.
    pub center: Vec2,
    /// Half-extent along each axis.
    pub half: Vec2,
}

impl Aabb2 {
    /// Creates a box from its centre and half-extents.
    pub const fn new(center: Vec2, half: Vec2) -> Self {
        Self { center, half }
    }

    /// Creates the box spanning two corners.
    pub fn from_min_max(a: Vec2, b: Vec2) -> Self {
        let lo = Vec2::new(a.x().min(b.x()), a.y().min(b.y()));
        let hi = Vec2::new(a.x().max(b.x()), a.y().max(b.y()));
        Self {
            center: lo.add(hi).mul(0.5),
            half: hi.sub(lo).mul(0.5),
        }
    }

    /// Builds the smallest box containing every point.
    ///
    /// # Errors
    /// [`GeomError::EmptyPointSet`] if `points` is empty.
    pub fn from_points(points: &[Vec2]) -> Result<Self, GeomError> {
        let (first, rest) = points.split_first().ok_or(GeomError::EmptyPointSet)?;
        let (lo, hi) = rest.iter().fold((*first, *first), |(lo, hi), p| {
            (
                Vec2::new(lo.x().min(p.x()), lo.y().min(p.y())),
                Vec2::new(hi.x().max(p.x()), hi.y().max(p.y())),
            )
        });
        Ok(Self::from_min_max(lo, hi))
    }

    /// Minimum corner.
    pub fn min(&self) -> Vec2 {
        self.center.sub(self.half)
    }

    /// Maximum corner.
    pub fn max(&self) -> Vec2 {
        self.center.add(self.half)
    }

    /// Returns `true` if the boxes overlap (inclusive on edges).
    pub fn overlaps(&self, other: &Self) -> bool {
        (0..2).all(|i| (self.center[i] - other.center[i]).abs() <= self.half[i] + other.half[i])
    }

    /// Returns `true` if `p` lies inside or on the box.
    pub fn contains_point(&self, p: Vec2) -> bool {
        (0..2).all(|i| (p[i] - self.center[i]).abs() <= self.half[i])
    }

    /// Point of the box nearest to `p`.
    pub fn closest_point(&self, p: Vec2) -> Vec2 {
        let lo = self.min();
        let hi = self.max();
        Vec2::new(clamp(p.x(), lo.x(), hi.x()), clamp(p.y(), lo.y(), hi.y()))
    }

    /// Squared distance from `p` to the box; zero inside.
    pub fn sq_distance(&self, p: Vec2) -> f32 {
        self.closest_point(p).sub(p).len2()
    }

    /// Smallest box containing both boxes.
    pub fn union(&self, other: &Self) -> Self {
        let (a, b) = (self.min(), other.min());
        let lo = Vec2::new(a.x().min(b.x()), a.y().min(b.y()));
        let (a, b) = (self.max(), other.max());
        let hi = Vec2::new(a.x().max(b.x()), a.y().max(b.y()));
        Self::from_min_max(lo, hi)
    }

    /// Grows the box by `margin` on every side.
    pub fn inflate(&self, margin: f32) -> Self {
        Self::new(self.center, self.half.add(Vec2::new(margin, margin)))
    }
}
