// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
mod common;

use mgl_core::Vec2;
use mgl_geom::{gjk_intersect, ConvexHull2, Simplex2};
use proptest::prelude::*;

use common::{init_tracing, vec2s};

fn simplex_of(points: &[Vec2]) -> Simplex2 {
    let mut s = Simplex2::new();
    for p in points {
        s.merge(*p);
    }
    s
}

fn square(cx: f32, cy: f32, half: f32) -> ConvexHull2 {
    let corners = vec2s(&[
        (cx - half, cy - half),
        (cx + half, cy - half),
        (cx + half, cy + half),
        (cx - half, cy + half),
    ]);
    match ConvexHull2::new(&corners) {
        Ok(hull) => hull,
        Err(e) => panic!("square hull: {e}"),
    }
}

#[test]
fn triangle_around_origin_contains_it() {
    let mut s = simplex_of(&vec2s(&[(1.0, 1.0), (-1.0, 1.0), (0.0, -1.0)]));
    let (dir, inside) = s.nearest_to_origin();
    assert!(inside);
    assert_eq!(s.len(), 3);
    assert_eq!(dir, Vec2::ZERO);
}

#[test]
fn every_vertex_order_agrees_on_containment() {
    let tri = vec2s(&[(1.0, 1.0), (-1.0, 1.0), (0.0, -1.0)]);
    for perm in [[0, 1, 2], [0, 2, 1], [1, 0, 2], [1, 2, 0], [2, 0, 1], [2, 1, 0]] {
        let mut s = simplex_of(&perm.map(|i| tri[i]));
        assert!(s.nearest_to_origin().1, "{perm:?}");
    }
}

#[test]
fn single_point_direction_is_negated_point() {
    let mut s = simplex_of(&[Vec2::new(2.0, -3.0)]);
    assert_eq!(s.nearest_to_origin(), (Vec2::new(-2.0, 3.0), false));
    let mut s = simplex_of(&[Vec2::ZERO]);
    assert!(s.nearest_to_origin().1);
}

#[test]
fn collinear_simplex_searches_towards_origin() {
    let mut s = simplex_of(&vec2s(&[(-1.0, 1.0), (1.0, 1.0), (3.0, 1.0)]));
    let (dir, inside) = s.nearest_to_origin();
    assert!(!inside);
    assert_eq!(s.len(), 2);
    for v in s.points() {
        assert!(dir.dot(-*v) > 0.0, "{dir} from {v}");
    }
}

#[test]
fn gjk_overlapping_and_separated_squares() {
    init_tracing();
    assert!(gjk_intersect(&square(0.0, 0.0, 1.0), &square(1.5, 0.5, 1.0)));
    assert!(!gjk_intersect(&square(0.0, 0.0, 1.0), &square(3.0, 0.0, 1.0)));
    assert!(gjk_intersect(&square(0.0, 0.0, 2.0), &square(0.0, 0.0, 0.5)));
    assert!(!gjk_intersect(&square(0.0, 0.0, 1.0), &square(2.5, 2.5, 1.0)));
}

fn signed_area(a: Vec2, b: Vec2, c: Vec2) -> f32 {
    b.sub(a).cross(c.sub(a))
}

fn point() -> impl Strategy<Value = Vec2> {
    prop::array::uniform2(-5.0f32..5.0).prop_map(Vec2::from)
}

proptest! {
    #[test]
    fn reducer_classifies_strict_cases(a in point(), b in point(), c in point()) {
        let area = signed_area(a, b, c);
        prop_assume!(area.abs() > 0.5);
        // origin-side of each edge, oriented to the triangle's winding
        let sides = [
            signed_area(a, b, Vec2::ZERO) * area.signum(),
            signed_area(b, c, Vec2::ZERO) * area.signum(),
            signed_area(c, a, Vec2::ZERO) * area.signum(),
        ];
        prop_assume!(sides.iter().all(|s| s.abs() > 0.05));
        let mut s = simplex_of(&[a, b, c]);
        let (dir, inside) = s.nearest_to_origin();
        if sides.iter().all(|s| *s > 0.0) {
            prop_assert!(inside);
        } else {
            prop_assert!(!inside);
            prop_assert!(s.len() < 3);
            for v in s.points() {
                prop_assert!(dir.dot(-*v) > 0.0, "{} from {}", dir, v);
            }
        }
    }

    #[test]
    fn flat_triangles_search_towards_origin(
        a in point(),
        b in point(),
        t in -2.0f32..3.0,
        repeat in 0usize..4
    ) {
        let c = a.add(b.sub(a).mul(t));
        let tri = match repeat {
            0 => [a, b, c],
            1 => [a, a, b],
            2 => [a, b, b],
            _ => [c, a, c],
        };
        let mut s = simplex_of(&tri);
        let (dir, inside) = s.nearest_to_origin();
        if !inside {
            prop_assert!(s.len() < 3);
            for v in s.points() {
                prop_assert!(dir.dot(-*v) >= -1e-3, "{} from {}", dir, v);
            }
        }
    }

    #[test]
    fn gjk_matches_square_overlap(dx in -4.0f32..4.0, dy in -4.0f32..4.0) {
        prop_assume!((dx.abs() - 2.0).abs() > 0.05 && (dy.abs() - 2.0).abs() > 0.05);
        let hit = gjk_intersect(&square(0.0, 0.0, 1.0), &square(dx, dy, 1.0));
        prop_assert_eq!(hit, dx.abs() < 2.0 && dy.abs() < 2.0);
    }
}
