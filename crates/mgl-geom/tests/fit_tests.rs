// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
mod common;

use mgl_core::{Mat3, Vec3};
use mgl_geom::fit::{
    covariance, eigen_sphere, extreme_points_along_direction, jacobi,
    most_separated_points_on_aabb, ritter_eigen_sphere, ritter_sphere,
    sphere_from_distant_points,
};
use mgl_geom::{GeomError, Sphere3};
use proptest::prelude::*;

use common::init_tracing;

const RIGHT_TRIANGLE: [Vec3; 3] = [
    Vec3::new(0.0, 0.0, 0.0),
    Vec3::new(10.0, 0.0, 0.0),
    Vec3::new(0.0, 10.0, 0.0),
];

fn covers(s: &Sphere3, points: &[Vec3]) -> bool {
    let slack = 1e-4 * s.radius().max(1.0);
    points.iter().all(|p| p.sub(s.center()).len() <= s.radius() + slack)
}

fn unwrap_sphere(r: Result<Sphere3, GeomError>) -> Sphere3 {
    match r {
        Ok(s) => s,
        Err(e) => panic!("sphere builder failed: {e}"),
    }
}

#[test]
fn ritter_eigen_sphere_on_right_triangle() {
    init_tracing();
    let s = unwrap_sphere(ritter_eigen_sphere(&RIGHT_TRIANGLE));
    assert!(covers(&s, &RIGHT_TRIANGLE));
    assert!(s.radius() > 5.0 && s.radius() < 8.0, "radius {}", s.radius());
}

#[test]
fn ritter_sphere_on_right_triangle_covers_points() {
    let s = unwrap_sphere(ritter_sphere(&RIGHT_TRIANGLE));
    assert!(covers(&s, &RIGHT_TRIANGLE));
    // seeded on the hypotenuse, which already encloses the right angle
    assert!(s.radius() > 5.0 && s.radius() < 8.0, "radius {}", s.radius());
}

#[test]
fn eigen_sphere_spans_principal_axis() {
    let s = unwrap_sphere(eigen_sphere(&RIGHT_TRIANGLE));
    let close = |a: f32, b: f32| (a - b).abs() < 1e-3;
    assert!(s.center().approx_func_eq(Vec3::new(5.0, 5.0, 0.0), close), "{}", s.center());
    assert!(close(s.radius(), 50.0f32.sqrt()));
}

#[test]
fn distant_point_helpers() {
    assert_eq!(most_separated_points_on_aabb(&RIGHT_TRIANGLE), Ok((1, 2)));
    let tall = [Vec3::new(0.0, -3.0, 0.0), Vec3::new(1.0, 0.0, 0.0), Vec3::new(0.0, 5.0, 0.0)];
    assert_eq!(most_separated_points_on_aabb(&tall), Ok((0, 2)));
    let dir = Vec3::new(1.0, -1.0, 0.0);
    assert_eq!(extreme_points_along_direction(dir, &RIGHT_TRIANGLE), Ok((2, 1)));
    let s = unwrap_sphere(sphere_from_distant_points(&RIGHT_TRIANGLE));
    assert_eq!(s.center(), Vec3::new(5.0, 5.0, 0.0));
    assert!((s.radius() - 50.0f32.sqrt()).abs() < 1e-4, "radius {}", s.radius());
}

#[test]
fn builders_reject_empty_input() {
    assert_eq!(ritter_sphere(&[]), Err(GeomError::EmptyPointSet));
    assert_eq!(ritter_eigen_sphere(&[]), Err(GeomError::EmptyPointSet));
    assert_eq!(eigen_sphere(&[]), Err(GeomError::EmptyPointSet));
    assert_eq!(most_separated_points_on_aabb(&[]), Err(GeomError::EmptyPointSet));
    assert_eq!(extreme_points_along_direction(Vec3::UNIT_X, &[]), Err(GeomError::EmptyPointSet));
}

#[test]
fn jacobi_diagonalizes_symmetric_matrix() {
    init_tracing();
    let a = Mat3::from_rows([
        Vec3::new(4.0, 1.0, 0.0),
        Vec3::new(1.0, 3.0, 1.0),
        Vec3::new(0.0, 1.0, 2.0),
    ]);
    let (d, v) = jacobi(&a);
    for i in 0..3 {
        let col = v.col(i);
        let lhs = a.mul_vec(col);
        let rhs = col.mul(d.at(i, i));
        assert!(lhs.approx_func_eq(rhs, |x, y| (x - y).abs() < 1e-3), "{lhs} vs {rhs}");
        assert!((col.len() - 1.0).abs() < 1e-5);
    }
    let vtv = v.transposed() * v;
    assert!(vtv.approx_func_eq(&Mat3::IDENT, |x, y| (x - y).abs() < 1e-5));
    assert!((d.trace() - a.trace()).abs() < 1e-4);
}

#[test]
fn covariance_is_symmetric_and_centered() {
    let pts = [
        Vec3::new(1.0, 2.0, 3.0),
        Vec3::new(-1.0, 0.5, 2.0),
        Vec3::new(4.0, -2.0, 0.0),
        Vec3::new(0.0, 1.0, -1.0),
    ];
    let Ok(c) = covariance(&pts) else {
        panic!("non-empty input");
    };
    assert_eq!(c, c.transposed());
    let shifted: Vec<Vec3> = pts.iter().map(|p| p.add(Vec3::new(100.0, -50.0, 7.0))).collect();
    let Ok(c2) = covariance(&shifted) else {
        panic!("non-empty input");
    };
    assert!(c.approx_func_eq(&c2, |x, y| (x - y).abs() < 1e-3));
}

fn cloud() -> impl Strategy<Value = Vec<Vec3>> {
    prop::collection::vec(prop::array::uniform3(-10.0f32..10.0), 1..30)
        .prop_map(|v| v.into_iter().map(Vec3::from).collect())
}

proptest! {
    #[test]
    fn ritter_spheres_cover_every_point(points in cloud()) {
        let s = unwrap_sphere(ritter_sphere(&points));
        prop_assert!(covers(&s, &points), "{:?}", s);
        let s = unwrap_sphere(ritter_eigen_sphere(&points));
        prop_assert!(covers(&s, &points), "{:?}", s);
    }
}
