// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use mgl_core::{Vec2, Vec3};

use super::aabb::{Aabb2, Aabb3};

macro_rules! impl_sphere {
    ($name:ident, $vec:ident, $aabb:ident) => {
        impl $name {
            /// Creates a sphere; `radius` is expected to be non-negative.
            pub fn new(center: $vec, radius: f32) -> Self {
                Self {
                    center,
                    radius,
                    radius2: radius * radius,
                }
            }

            /// Centre.
            pub fn center(&self) -> $vec {
                self.center
            }

            /// Radius.
            pub fn radius(&self) -> f32 {
                self.radius
            }

            /// Cached `radius²`.
            pub fn radius2(&self) -> f32 {
                self.radius2
            }

            /// Moves the centre.
            pub fn set_center(&mut self, center: $vec) -> &mut Self {
                self.center = center;
                self
            }

            /// Replaces the radius and refreshes the cached square.
            pub fn set_radius(&mut self, radius: f32) -> &mut Self {
                self.radius = radius;
                self.radius2 = radius * radius;
                self
            }

            /// Returns `true` if the spheres touch or intersect.
            pub fn overlaps(&self, other: &Self) -> bool {
                let r = self.radius + other.radius;
                self.center.sub(other.center).len2() <= r * r
            }

            /// Returns `true` if `p` lies inside or on the sphere.
            pub fn contains_point(&self, p: $vec) -> bool {
                p.sub(self.center).len2() <= self.radius2
            }

            /// Point of the solid sphere nearest to `p`; `p` itself when inside.
            pub fn closest_point(&self, p: $vec) -> $vec {
                let d = p.sub(self.center);
                let len2 = d.len2();
                if len2 <= self.radius2 {
                    return p;
                }
                self.center.add(d.mul(self.radius / len2.sqrt()))
            }

            /// Squared distance from `p` to the solid sphere; zero inside.
            pub fn sq_distance(&self, p: $vec) -> f32 {
                let d = (p.sub(self.center).len() - self.radius).max(0.0);
                d * d
            }

            /// Returns `true` if the sphere touches or intersects the box.
            pub fn overlaps_aabb(&self, b: &$aabb) -> bool {
                b.sq_distance(self.center) <= self.radius2
            }

            /// Grows the sphere just enough to enclose `p`.
            ///
            /// The new boundary keeps the far side of the old one and passes
            /// through `p`: `r' = (r + d) / 2`, `c' = c + (r' − r)/d · (p − c)`.
            pub fn merge_point(&mut self, p: $vec) -> &mut Self {
                let d = p.sub(self.center);
                let dist2 = d.len2();
                if dist2 > self.radius2 {
                    let dist = dist2.sqrt();
                    let radius = (self.radius + dist) * 0.5;
                    let k = (radius - self.radius) / dist;
                    self.center.add_scaled_vec(k, &d);
                    self.set_radius(radius);
                }
                self
            }
        }
    };
}

/// Solid sphere with a cached squared radius.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "SphereParts<Vec3>", into = "SphereParts<Vec3>")
)]
pub struct Sphere3 {
    center: Vec3,
    radius: f32,
    radius2: f32,
}

/// Solid circle with a cached squared radius.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "SphereParts<Vec2>", into = "SphereParts<Vec2>")
)]
pub struct Sphere2 {
    center: Vec2,
    radius: f32,
    radius2: f32,
}

impl_sphere!(Sphere3, Vec3, Aabb3);
impl_sphere!(Sphere2, Vec2, Aabb2);

// Wire form; the squared radius is rebuilt on load.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct SphereParts<V> {
    center: V,
    radius: f32,
}

#[cfg(feature = "serde")]
macro_rules! impl_sphere_parts {
    ($name:ident, $vec:ident) => {
        impl From<SphereParts<$vec>> for $name {
            fn from(parts: SphereParts<$vec>) -> Self {
                Self::new(parts.center, parts.radius)
            }
        }

        impl From<$name> for SphereParts<$vec> {
            fn from(s: $name) -> Self {
                Self {
                    center: s.center,
                    radius: s.radius,
                }
            }
        }
    };
}

#[cfg(feature = "serde")]
impl_sphere_parts!(Sphere3, Vec3);
#[cfg(feature = "serde")]
impl_sphere_parts!(Sphere2, Vec2);
