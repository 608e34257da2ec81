// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Planar convex hull built by Quickhull.
//!
//! The hull is stored as three parallel arrays owned by [`ConvexHull2`]:
//! vertex records, edge records, and the bare vertex positions. Vertex `i`
//! links to `(i − 1) mod n` and `(i + 1) mod n`; edge `i` runs from vertex
//! `i` to vertex `(i + 1) mod n`. Vertices wind clockwise, so the interior
//! lies to the right of every edge.
//!
//! Besides the polygon the hull keeps a three-slot support cache: for the
//! directions at 0, 2π/3, and 4π/3 the index of the vertex farthest from
//! the centroid. [`ConvexHull2::support`] starts its hill-climb there.

use core::f32::consts::PI;

use mgl_core::Vec2;
use tracing::{debug, trace};

use crate::query::sq_distance_point_segment;
use crate::{GeomError, GEOM_EPSILON};

/// Hull vertex with its cyclic neighbours.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HullVertex {
    /// Position.
    pub position: Vec2,
    /// Index of the previous vertex.
    pub prev: usize,
    /// Index of the next vertex.
    pub next: usize,
}

/// Directed hull edge `v0 → v1` with its cyclic neighbours.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HullEdge {
    /// Start vertex.
    pub v0: usize,
    /// End vertex.
    pub v1: usize,
    /// Index of the previous edge.
    pub prev: usize,
    /// Index of the next edge.
    pub next: usize,
}

/// Convex polygon with a precomputed support cache.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConvexHull2 {
    vertices: Vec<HullVertex>,
    edges: Vec<HullEdge>,
    positions: Vec<Vec2>,
    centroid: Vec2,
    support_cache: [usize; 3],
}

/// Unit directions of the support cache slots.
fn cache_direction(k: usize) -> Vec2 {
    let angle = 2.0 * PI * k as f32 / 3.0;
    let (s, c) = angle.sin_cos();
    Vec2::new(c, s)
}

// Lexicographic (x, then y) ordering keeps the seed edge well defined when
// several points share the extreme x.
fn lex_less(a: Vec2, b: Vec2) -> bool {
    a.x() < b.x() || (a.x() == b.x() && a.y() < b.y())
}

impl ConvexHull2 {
    /// Builds the hull of `points`.
    ///
    /// Collinear points on an edge are dropped; duplicate points are
    /// harmless. A set of coincident points yields a one-vertex hull and a
    /// collinear set a two-vertex hull.
    ///
    /// # Errors
    /// [`GeomError::EmptyPointSet`] if `points` is empty.
    pub fn new(points: &[Vec2]) -> Result<Self, GeomError> {
        if points.is_empty() {
            return Err(GeomError::EmptyPointSet);
        }
        let mut lo = 0;
        let mut hi = 0;
        for (i, p) in points.iter().enumerate() {
            if lex_less(*p, points[lo]) {
                lo = i;
            }
            if lex_less(points[hi], *p) {
                hi = i;
            }
        }
        if lo == hi {
            return Ok(Self::from_ring(vec![points[lo]]));
        }

        let mut ring = vec![points[lo], points[hi]];
        let mut candidates: Vec<Vec2> = points
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != lo && *i != hi)
            .map(|(_, p)| *p)
            .collect();

        let mut i = 0;
        while i < ring.len() {
            let a = ring[i];
            let b = ring[(i + 1) % ring.len()];
            match farthest_outside(a, b, &candidates) {
                Some(k) => {
                    let p = candidates.swap_remove(k);
                    trace!(edge = i, ?a, ?b, ?p, "quickhull: insert");
                    ring.insert(i + 1, p);
                }
                None => i += 1,
            }
        }

        let hull = Self::from_ring(ring);
        debug!(
            input = points.len(),
            vertices = hull.vertex_count(),
            "quickhull: built hull"
        );
        Ok(hull)
    }

    fn from_ring(ring: Vec<Vec2>) -> Self {
        let n = ring.len();
        let vertices = ring
            .iter()
            .enumerate()
            .map(|(i, p)| HullVertex {
                position: *p,
                prev: (i + n - 1) % n,
                next: (i + 1) % n,
            })
            .collect();
        let edges = (0..n)
            .map(|i| HullEdge {
                v0: i,
                v1: (i + 1) % n,
                prev: (i + n - 1) % n,
                next: (i + 1) % n,
            })
            .collect();
        let centroid = ring.iter().fold(Vec2::ZERO, |acc, p| acc.add(*p)).mul(1.0 / n as f32);
        let mut support_cache = [0; 3];
        for (k, slot) in support_cache.iter_mut().enumerate() {
            let d = cache_direction(k);
            *slot = argmax(&ring, |p| p.sub(centroid).dot(d));
        }
        Self {
            vertices,
            edges,
            positions: ring,
            centroid,
            support_cache,
        }
    }

    /// Vertex records in clockwise order.
    pub fn vertices(&self) -> &[HullVertex] {
        &self.vertices
    }

    /// Edge records; edge `i` starts at vertex `i`.
    pub fn edges(&self) -> &[HullEdge] {
        &self.edges
    }

    /// Vertex positions in clockwise order.
    pub fn positions(&self) -> &[Vec2] {
        &self.positions
    }

    /// Number of hull vertices; never zero.
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Mean of the hull vertices.
    pub fn centroid(&self) -> Vec2 {
        self.centroid
    }

    /// Vertex indices farthest from the centroid along 0, 2π/3, and 4π/3.
    pub fn support_cache(&self) -> [usize; 3] {
        self.support_cache
    }

    /// Index of a vertex maximizing `v · dir`.
    ///
    /// Starts at the cached vertex whose direction is nearest `dir` and
    /// hill-climbs to a neighbour while that strictly improves the dot
    /// product.
    pub fn support(&self, dir: Vec2) -> usize {
        let (x, y) = (dir.x(), dir.y());
        let slot = if x >= 0.0 {
            if y >= 0.0 {
                usize::from(2.0 * x <= y)
            } else if 2.0 * x > -y {
                0
            } else {
                2
            }
        } else if y >= 0.0 {
            1
        } else {
            2
        };

        let mut cur = self.support_cache[slot];
        let mut best = self.positions[cur].dot(dir);
        loop {
            let v = self.vertices[cur];
            let next = self.positions[v.next].dot(dir);
            let prev = self.positions[v.prev].dot(dir);
            if next > best && next >= prev {
                cur = v.next;
                best = next;
            } else if prev > best {
                cur = v.prev;
                best = prev;
            } else {
                return cur;
            }
        }
    }

    /// Linear-scan version of [`Self::support`]; the first maximizer wins.
    pub fn support_slow(&self, dir: Vec2) -> usize {
        argmax(&self.positions, |p| p.dot(dir))
    }

    /// Position of [`Self::support`].
    pub fn support_point(&self, dir: Vec2) -> Vec2 {
        self.positions[self.support(dir)]
    }

    /// Outward unit normal of edge `i`.
    ///
    /// # Panics
    /// Panics if `i` is out of range.
    pub fn edge_normal(&self, i: usize) -> Vec2 {
        let e = self.edges[i];
        self.positions[e.v1].sub(self.positions[e.v0]).perp().normalized()
    }

    /// Returns `true` if `p` is inside the hull or within [`GEOM_EPSILON`]
    /// of its boundary.
    pub fn contains_point(&self, p: Vec2) -> bool {
        if self.vertex_count() < 3 {
            let a = self.positions[0];
            let b = self.positions[self.vertex_count() - 1];
            return sq_distance_point_segment(p.vec3(0.0), a.vec3(0.0), b.vec3(0.0))
                <= GEOM_EPSILON * GEOM_EPSILON;
        }
        self.edges.iter().all(|e| {
            let a = self.positions[e.v0];
            let ab = self.positions[e.v1].sub(a);
            ab.cross(p.sub(a)) <= GEOM_EPSILON * ab.len()
        })
    }

    /// Enclosed area; zero for degenerate hulls.
    pub fn area(&self) -> f32 {
        let twice: f32 = self
            .edges
            .iter()
            .map(|e| self.positions[e.v0].cross(self.positions[e.v1]))
            .sum();
        twice.abs() * 0.5
    }
}

fn argmax(points: &[Vec2], key: impl Fn(Vec2) -> f32) -> usize {
    let mut best = 0;
    let mut best_key = f32::NEG_INFINITY;
    for (i, p) in points.iter().enumerate() {
        let k = key(*p);
        if k > best_key {
            best = i;
            best_key = k;
        }
    }
    best
}

/// Candidate strictly left of `a → b` with the largest distance from the
/// line; ties go to the larger projection along `a → b`.
fn farthest_outside(a: Vec2, b: Vec2, candidates: &[Vec2]) -> Option<usize> {
    let ab = b.sub(a);
    let mut best: Option<(usize, f32, f32)> = None;
    for (k, p) in candidates.iter().enumerate() {
        let ap = p.sub(a);
        let dist = ab.cross(ap);
        if dist <= 0.0 {
            continue;
        }
        let along = ab.dot(ap);
        let better = match best {
            None => true,
            Some((_, d, t)) => dist > d || (dist == d && along > t),
        };
        if better {
            best = Some((k, dist, along));
        }
    }
    best.map(|(k, _, _)| k)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Vec<Vec2> {
        vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(2.0, 0.0),
            Vec2::new(2.0, 2.0),
            Vec2::new(0.0, 2.0),
            Vec2::new(1.0, 1.0),
            Vec2::new(1.0, 0.0),
        ]
    }

    #[test]
    fn links_are_cyclic() {
        let Ok(hull) = ConvexHull2::new(&square()) else {
            panic!("square hull");
        };
        let n = hull.vertex_count();
        assert_eq!(n, 4);
        for (i, v) in hull.vertices().iter().enumerate() {
            assert_eq!(hull.vertices()[v.next].prev, i);
            assert_eq!(hull.edges()[i].v1, hull.edges()[hull.edges()[i].next].v0);
        }
        assert_eq!(hull.area(), 4.0);
        assert_eq!(hull.centroid(), Vec2::new(1.0, 1.0));
    }

    #[test]
    fn edge_normals_point_outward() {
        let Ok(hull) = ConvexHull2::new(&square()) else {
            panic!("square hull");
        };
        for i in 0..hull.vertex_count() {
            let n = hull.edge_normal(i);
            let mid = hull.positions()[i].add(hull.positions()[(i + 1) % 4]).mul(0.5);
            assert!(mid.sub(hull.centroid()).dot(n) > 0.0, "edge {i}: {n}");
        }
    }

    #[test]
    fn degenerate_inputs() {
        let p = Vec2::new(3.0, -1.0);
        let Ok(one) = ConvexHull2::new(&[p, p, p]) else {
            panic!("point hull");
        };
        assert_eq!(one.vertex_count(), 1);
        assert_eq!(one.support(Vec2::new(-1.0, 0.3)), 0);
        assert!(one.contains_point(p));

        let line = [Vec2::new(0.0, 0.0), Vec2::new(2.0, 2.0), Vec2::new(1.0, 1.0)];
        let Ok(two) = ConvexHull2::new(&line) else {
            panic!("segment hull");
        };
        assert_eq!(two.vertex_count(), 2);
        assert_eq!(two.area(), 0.0);
        assert!(two.contains_point(Vec2::new(0.5, 0.5)));
        assert!(!two.contains_point(Vec2::new(3.0, 3.0)));
        assert_eq!(ConvexHull2::new(&[]), Err(GeomError::EmptyPointSet));
    }
}
