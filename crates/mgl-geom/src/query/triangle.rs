// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use mgl_core::Vec3;

/// Barycentric coordinates `(u, v, w)` of `p` with respect to `a, b, c`.
///
/// `p ≈ u·a + v·b + w·c` with `u + v + w = 1`. Points off the triangle's
/// plane are projected onto it. A degenerate triangle yields non-finite
/// weights.
pub fn barycentric(p: Vec3, a: Vec3, b: Vec3, c: Vec3) -> Vec3 {
    BarycentricCache::new(a, b, c).barycentric(p)
}

/// Precomputed Gram matrix of a triangle for repeated barycentric queries.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BarycentricCache {
    a: Vec3,
    v0: Vec3,
    v1: Vec3,
    d00: f32,
    d01: f32,
    d11: f32,
    inv_denom: f32,
}

impl BarycentricCache {
    /// Prepares queries against the triangle `a, b, c`.
    pub fn new(a: Vec3, b: Vec3, c: Vec3) -> Self {
        let v0 = b.sub(a);
        let v1 = c.sub(a);
        let d00 = v0.dot(v0);
        let d01 = v0.dot(v1);
        let d11 = v1.dot(v1);
        Self {
            a,
            v0,
            v1,
            d00,
            d01,
            d11,
            inv_denom: 1.0 / (d00 * d11 - d01 * d01),
        }
    }

    /// Barycentric coordinates `(u, v, w)` of `p`.
    pub fn barycentric(&self, p: Vec3) -> Vec3 {
        let v2 = p.sub(self.a);
        let d20 = v2.dot(self.v0);
        let d21 = v2.dot(self.v1);
        let v = (self.d11 * d20 - self.d01 * d21) * self.inv_denom;
        let w = (self.d00 * d21 - self.d01 * d20) * self.inv_denom;
        Vec3::new(1.0 - v - w, v, w)
    }
}

/// Triangle given by three vertices.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Triangle {
    /// First vertex.
    pub a: Vec3,
    /// Second vertex.
    pub b: Vec3,
    /// Third vertex.
    pub c: Vec3,
}

impl Triangle {
    /// Creates a triangle.
    pub const fn new(a: Vec3, b: Vec3, c: Vec3) -> Self {
        Self { a, b, c }
    }

    /// Returns `true` if `p`, projected onto the triangle's plane, falls
    /// inside or on the triangle.
    pub fn contains_point(&self, p: Vec3) -> bool {
        let bary = barycentric(p, self.a, self.b, self.c);
        bary.y() >= 0.0 && bary.z() >= 0.0 && bary.y() + bary.z() <= 1.0
    }

    /// See [`closest_point_on_triangle`].
    pub fn closest_point(&self, p: Vec3) -> Vec3 {
        closest_point_on_triangle(p, self.a, self.b, self.c)
    }

    /// Unnormalized normal `(b − a) × (c − a)`.
    pub fn normal(&self) -> Vec3 {
        self.b.sub(self.a).cross(self.c.sub(self.a))
    }
}

/// Closest point to `p` on the triangle `a, b, c`.
///
/// Walks the Voronoi regions of the three vertices and three edges before
/// falling back to the face.
pub fn closest_point_on_triangle(p: Vec3, a: Vec3, b: Vec3, c: Vec3) -> Vec3 {
    let ab = b.sub(a);
    let ac = c.sub(a);
    let ap = p.sub(a);
    let d1 = ab.dot(ap);
    let d2 = ac.dot(ap);
    if d1 <= 0.0 && d2 <= 0.0 {
        return a;
    }

    let bp = p.sub(b);
    let d3 = ab.dot(bp);
    let d4 = ac.dot(bp);
    if d3 >= 0.0 && d4 <= d3 {
        return b;
    }

    let vc = d1 * d4 - d3 * d2;
    if vc <= 0.0 && d1 >= 0.0 && d3 <= 0.0 {
        let v = d1 / (d1 - d3);
        return a.add(ab.mul(v));
    }

    let cp = p.sub(c);
    let d5 = ab.dot(cp);
    let d6 = ac.dot(cp);
    if d6 >= 0.0 && d5 <= d6 {
        return c;
    }

    let vb = d5 * d2 - d1 * d6;
    if vb <= 0.0 && d2 >= 0.0 && d6 <= 0.0 {
        let w = d2 / (d2 - d6);
        return a.add(ac.mul(w));
    }

    let va = d3 * d6 - d5 * d4;
    if va <= 0.0 && (d4 - d3) >= 0.0 && (d5 - d6) >= 0.0 {
        let w = (d4 - d3) / ((d4 - d3) + (d5 - d6));
        return b.add(c.sub(b).mul(w));
    }

    let denom = 1.0 / (va + vb + vc);
    let v = vb * denom;
    let w = vc * denom;
    a.add(ab.mul(v)).add(ac.mul(w))
}
