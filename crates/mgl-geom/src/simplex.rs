// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! GJK simplex reduction in the plane.
//!
//! A [`Simplex2`] holds one to three points of a Minkowski difference.
//! [`Simplex2::nearest_to_origin`] finds the Voronoi region of the simplex
//! that contains the origin, discards the vertices outside that feature,
//! and returns the next search direction.

use mgl_core::{float_equal, Vec2};

/// Up to three points of a planar GJK simplex.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Simplex2 {
    points: [Vec2; 3],
    size: usize,
}

/// Edge normal of `a → b` on the origin's side of the line.
///
/// When the origin is on the line the normal faces away from `away`.
fn edge_normal_toward_origin(a: Vec2, b: Vec2, away: Vec2) -> Vec2 {
    let n = b.sub(a).perp();
    let side = n.dot(-a);
    if side > 0.0 {
        n
    } else if side < 0.0 || n.dot(away.sub(a)) > 0.0 {
        -n
    } else {
        n
    }
}

impl Simplex2 {
    /// Empty simplex.
    pub const fn new() -> Self {
        Self {
            points: [Vec2::ZERO; 3],
            size: 0,
        }
    }

    /// Number of points held.
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns `true` when no point has been merged yet.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// The held points, oldest first.
    pub fn points(&self) -> &[Vec2] {
        &self.points[..self.size]
    }

    /// Drops every point.
    pub fn clear(&mut self) {
        self.size = 0;
    }

    /// Appends a point.
    ///
    /// # Panics
    /// Panics if the simplex already holds three points.
    pub fn merge(&mut self, p: Vec2) -> &mut Self {
        assert!(self.size < 3, "simplex is full");
        self.points[self.size] = p;
        self.size += 1;
        self
    }

    fn keep(&mut self, kept: &[Vec2]) {
        self.points[..kept.len()].copy_from_slice(kept);
        self.size = kept.len();
    }

    /// Reduces the simplex to the feature nearest the origin.
    ///
    /// Returns the search direction, pointing from the retained feature
    /// towards the origin, and whether the origin lies in the simplex
    /// (boundary included). When the origin is inside a triangle the
    /// direction is zero.
    ///
    /// # Panics
    /// Panics if the simplex is empty.
    pub fn nearest_to_origin(&mut self) -> (Vec2, bool) {
        match self.size {
            1 => {
                let a = self.points[0];
                (-a, float_equal(a.len2(), 0.0))
            }
            2 => self.reduce_segment(),
            3 => self.reduce_triangle(),
            n => panic!("cannot reduce a simplex of {n} points"),
        }
    }

    fn reduce_segment(&mut self) -> (Vec2, bool) {
        let [a, b, _] = self.points;
        self.reduce_edge(a, b)
    }

    fn reduce_edge(&mut self, a: Vec2, b: Vec2) -> (Vec2, bool) {
        let ab = b.sub(a);
        let t = ab.dot(-a);
        if t <= 0.0 {
            self.keep(&[a]);
            return (-a, float_equal(a.len2(), 0.0));
        }
        if t >= ab.len2() {
            self.keep(&[b]);
            return (-b, float_equal(b.len2(), 0.0));
        }
        self.keep(&[a, b]);
        let cross = ab.cross(-a);
        let mut n = ab.perp();
        if n.dot(-a) < 0.0 {
            n = -n;
        }
        (n, float_equal(cross, 0.0))
    }

    // Seven regions: three vertices, three edges, interior.
    fn reduce_triangle(&mut self) -> (Vec2, bool) {
        let [a, b, c] = self.points;
        let ab = b.sub(a);
        let ac = c.sub(a);
        if float_equal(ab.cross(ac), 0.0) {
            return self.reduce_flat_triangle();
        }

        let d1 = ab.dot(-a);
        let d2 = ac.dot(-a);
        if d1 <= 0.0 && d2 <= 0.0 {
            self.keep(&[a]);
            return (-a, float_equal(a.len2(), 0.0));
        }

        let d3 = ab.dot(-b);
        let d4 = ac.dot(-b);
        if d3 >= 0.0 && d4 <= d3 {
            self.keep(&[b]);
            return (-b, float_equal(b.len2(), 0.0));
        }

        let vc = d1 * d4 - d3 * d2;
        if vc <= 0.0 && d1 >= 0.0 && d3 <= 0.0 {
            self.keep(&[a, b]);
            return (edge_normal_toward_origin(a, b, c), float_equal(ab.cross(-a), 0.0));
        }

        let d5 = ab.dot(-c);
        let d6 = ac.dot(-c);
        if d6 >= 0.0 && d5 <= d6 {
            self.keep(&[c]);
            return (-c, float_equal(c.len2(), 0.0));
        }

        let vb = d5 * d2 - d1 * d6;
        if vb <= 0.0 && d2 >= 0.0 && d6 <= 0.0 {
            self.keep(&[a, c]);
            return (edge_normal_toward_origin(a, c, b), float_equal(ac.cross(-a), 0.0));
        }

        let va = d3 * d6 - d5 * d4;
        if va <= 0.0 && (d4 - d3) >= 0.0 && (d5 - d6) >= 0.0 {
            self.keep(&[b, c]);
            let bc = c.sub(b);
            return (edge_normal_toward_origin(b, c, a), float_equal(bc.cross(-b), 0.0));
        }

        (Vec2::ZERO, true)
    }

    // Collinear or repeated points: the longest side spans the other vertex.
    fn reduce_flat_triangle(&mut self) -> (Vec2, bool) {
        let [a, b, c] = self.points;
        let sides = [(a, b), (a, c), (b, c)];
        let mut longest = sides[0];
        for side in &sides[1..] {
            if side.1.sub(side.0).len2() > longest.1.sub(longest.0).len2() {
                longest = *side;
            }
        }
        self.reduce_edge(longest.0, longest.1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle(a: Vec2, b: Vec2, c: Vec2) -> Simplex2 {
        let mut s = Simplex2::new();
        s.merge(a).merge(b).merge(c);
        s
    }

    #[test]
    fn vertex_region_keeps_one_point() {
        let mut s = triangle(Vec2::new(1.0, 1.0), Vec2::new(3.0, 1.0), Vec2::new(1.0, 3.0));
        let (d, inside) = s.nearest_to_origin();
        assert!(!inside);
        assert_eq!(s.points(), &[Vec2::new(1.0, 1.0)]);
        assert_eq!(d, Vec2::new(-1.0, -1.0));
    }

    #[test]
    fn edge_region_points_away_from_opposite_vertex() {
        let mut s = triangle(Vec2::new(-1.0, 1.0), Vec2::new(1.0, 1.0), Vec2::new(0.0, 3.0));
        let (d, inside) = s.nearest_to_origin();
        assert!(!inside);
        assert_eq!(s.len(), 2);
        assert!(d.y() < 0.0 && d.x() == 0.0, "{d}");
    }

    #[test]
    fn origin_on_edge_counts_as_inside() {
        let mut s = triangle(Vec2::new(-1.0, 0.0), Vec2::new(1.0, 0.0), Vec2::new(0.0, 2.0));
        let (_, inside) = s.nearest_to_origin();
        assert!(inside);
    }

    #[test]
    fn segment_interior_direction_faces_origin() {
        let mut s = Simplex2::new();
        s.merge(Vec2::new(-1.0, 2.0)).merge(Vec2::new(1.0, 2.0));
        let (d, inside) = s.nearest_to_origin();
        assert!(!inside);
        assert_eq!(s.len(), 2);
        assert_eq!(d, Vec2::new(0.0, -2.0));
    }

    #[test]
    fn collinear_triangle_reduces_to_its_span() {
        let mut s = triangle(Vec2::new(-1.0, 1.0), Vec2::new(1.0, 1.0), Vec2::new(3.0, 1.0));
        let (d, inside) = s.nearest_to_origin();
        assert!(!inside);
        assert_eq!(s.points(), &[Vec2::new(-1.0, 1.0), Vec2::new(3.0, 1.0)]);
        assert!(d.y() < 0.0 && d.x() == 0.0, "{d}");
    }

    #[test]
    fn repeated_vertex_never_reports_containment() {
        let p = Vec2::new(2.0, 1.0);
        let mut s = triangle(p, p, Vec2::new(4.0, 1.0));
        let (d, inside) = s.nearest_to_origin();
        assert!(!inside);
        assert_eq!(s.points(), &[p]);
        assert_eq!(d, -p);
    }

    #[test]
    fn edge_normal_breaks_ties_away_from_third_vertex() {
        let n = edge_normal_toward_origin(Vec2::new(-1.0, 0.0), Vec2::UNIT_X, Vec2::UNIT_Y);
        assert!(n.y() < 0.0, "{n}");
        let n = edge_normal_toward_origin(Vec2::new(-1.0, 2.0), Vec2::new(1.0, 2.0), Vec2::ZERO);
        assert!(n.y() < 0.0, "{n}");
    }

    #[test]
    #[should_panic(expected = "simplex is full")]
    fn fourth_point_panics() {
        let mut s = triangle(Vec2::ZERO, Vec2::UNIT_X, Vec2::UNIT_Y);
        s.merge(Vec2::new(1.0, 1.0));
    }

    #[test]
    #[should_panic(expected = "cannot reduce")]
    fn empty_simplex_panics() {
        Simplex2::new().nearest_to_origin();
    }
}
