// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
use mgl_core::{Mat3, Mat3x4, Quat, Vec3};
use mgl_geom::query::{closest_points_segment_segment, Triangle};
use mgl_geom::{Aabb3, Capsule3, Dop8, Obb3, Plane, Sphere3};
use proptest::prelude::*;

fn unit_box(x: f32, y: f32, z: f32) -> Aabb3 {
    Aabb3::new(Vec3::new(x, y, z), Vec3::new(1.0, 1.0, 1.0))
}

fn close3(a: Vec3, b: Vec3, tol: f32) -> bool {
    a.approx_func_eq(b, |x, y| (x - y).abs() <= tol)
}

#[test]
fn overlapping_and_separated_boxes() {
    let a = unit_box(0.0, 0.0, 1.0);
    assert!(a.overlaps(&unit_box(0.5, 0.5, 1.0)));
    assert!(!a.overlaps(&unit_box(5.0, 5.0, 1.0)));
}

#[test]
fn touching_boxes_overlap() {
    let a = unit_box(0.0, 0.0, 0.0);
    assert!(a.overlaps(&unit_box(2.0, 0.0, 0.0)));
    assert!(a.contains_point(Vec3::new(1.0, -1.0, 0.5)));
}

#[test]
fn corners_union_and_inflate() {
    let a = Aabb3::from_min_max(Vec3::new(2.0, 0.0, -1.0), Vec3::new(0.0, 4.0, 1.0));
    assert_eq!(a.center, Vec3::new(1.0, 2.0, 0.0));
    assert_eq!(a.half, Vec3::new(1.0, 2.0, 1.0));
    assert_eq!(a.min(), Vec3::new(0.0, 0.0, -1.0));
    assert_eq!(a.max(), Vec3::new(2.0, 4.0, 1.0));

    let u = a.union(&unit_box(5.0, 0.0, 0.0));
    assert_eq!(u.min(), Vec3::new(0.0, -1.0, -1.0));
    assert_eq!(u.max(), Vec3::new(6.0, 4.0, 1.0));
    assert_eq!(a.inflate(0.5).half, Vec3::new(1.5, 2.5, 1.5));

    let from_pts = Aabb3::from_points(&[
        Vec3::new(0.0, 0.0, -1.0),
        Vec3::new(2.0, 4.0, 1.0),
        Vec3::new(1.0, 1.0, 0.0),
    ]);
    assert_eq!(from_pts, Ok(a));
}

#[test]
fn updated_box_encloses_transformed_corners() {
    let b = Aabb3::new(Vec3::new(0.5, -1.0, 2.0), Vec3::new(1.0, 0.5, 2.0));
    let mut m = Mat3x4::IDENT;
    m.set_orientation_and_pos(
        &mgl_core::quat_rotate(0.8, Vec3::new(1.0, 2.0, -0.5).normalized()),
        Vec3::new(3.0, 0.0, -2.0),
    );
    let out = b.update(&m).inflate(1e-5);
    let (lo, hi) = (b.min(), b.max());
    for i in 0..8 {
        let corner = Vec3::new(
            if i & 1 == 0 { lo.x() } else { hi.x() },
            if i & 2 == 0 { lo.y() } else { hi.y() },
            if i & 4 == 0 { lo.z() } else { hi.z() },
        );
        assert!(out.contains_point(m.mul_vec3(corner)), "corner {i}");
    }
}

#[test]
fn obb_from_identity_transform_matches_box() {
    let aabb = unit_box(0.0, 0.0, 0.0);
    let obb = Obb3::from_aabb_and_transform(&aabb, &Mat3x4::IDENT);
    for p in [Vec3::new(3.0, 0.5, -2.0), Vec3::new(0.2, 0.2, 0.2), Vec3::new(-4.0, 4.0, 4.0)] {
        assert_eq!(obb.sq_distance(p), aabb.sq_distance(p));
        assert_eq!(obb.closest_point(p), aabb.closest_point(p));
    }
}

#[test]
fn obb_overlap_agrees_with_aabb_when_aligned() {
    let a = Obb3::new(Vec3::ZERO, Mat3::IDENT.cols(), Vec3::new(1.0, 2.0, 3.0));
    let rot = Quat::IDENT.mat3();
    let b = Obb3::new(Vec3::new(1.9, 3.9, 0.0), rot.cols(), Vec3::new(1.0, 2.0, 3.0));
    assert!(a.overlaps(&b));
    let b = Obb3::new(Vec3::new(2.1, 0.0, 0.0), rot.cols(), Vec3::new(1.0, 2.0, 3.0));
    assert!(!a.overlaps(&b));
}

#[test]
fn sphere_and_capsule_predicates() {
    let s = Sphere3::new(Vec3::new(0.0, 0.0, 3.0), 1.0);
    assert!(s.overlaps(&Sphere3::new(Vec3::new(0.0, 0.0, 1.0), 1.0)));
    assert!(!s.overlaps(&Sphere3::new(Vec3::new(0.0, 0.0, 0.9), 1.0)));
    let cap = Capsule3::new(Vec3::new(-5.0, 0.0, 0.0), Vec3::new(5.0, 0.0, 0.0), 2.0);
    assert!(cap.overlaps_sphere(&s));
    assert!(!cap.overlaps_sphere(&Sphere3::new(Vec3::new(7.5, 0.0, 3.0), 1.0)));
}

#[test]
fn plane_through_triangle_contains_its_closest_points() {
    let t = Triangle::new(
        Vec3::new(1.0, 0.0, 0.0),
        Vec3::new(0.0, 1.0, 0.0),
        Vec3::new(0.0, 0.0, 1.0),
    );
    let plane = Plane::from_points(t.a, t.b, t.c);
    assert!(plane.normal.dot(Vec3::new(1.0, 1.0, 1.0)) > 0.0);
    let p = Vec3::new(2.0, 2.0, 2.0);
    let q = t.closest_point(p);
    assert!(close3(q, Vec3::new(1.0, 1.0, 1.0).mul(1.0 / 3.0), 1e-6), "{q}");
    assert!(plane.signed_distance(q).abs() < 1e-6);
    assert!(t.contains_point(q));
}

#[test]
fn dop_contains_its_points() {
    let pts = [Vec3::new(0.0, 0.0, 0.0), Vec3::new(1.0, 2.0, 3.0), Vec3::new(-2.0, 1.0, 0.5)];
    let Ok(dop) = Dop8::from_points(&pts) else {
        panic!("non-empty input");
    };
    assert!(pts.iter().all(|p| dop.contains_point(*p)));
    assert!(!dop.contains_point(Vec3::new(0.0, 0.0, 10.0)));
}

fn coord() -> impl Strategy<Value = Vec3> {
    prop::array::uniform3(-5.0f32..5.0).prop_map(Vec3::from)
}

proptest! {
    #[test]
    fn segment_closest_points_beat_samples(
        p1 in coord(),
        q1 in coord(),
        p2 in coord(),
        q2 in coord()
    ) {
        let r = closest_points_segment_segment(p1, q1, p2, q2);
        prop_assert!((0.0..=1.0).contains(&r.s) && (0.0..=1.0).contains(&r.t));
        prop_assert!((r.c1.sub(r.c2).len2() - r.sq_distance).abs() <= 1e-4);
        for i in 0..=8 {
            for j in 0..=8 {
                let a = p1.add(q1.sub(p1).mul(i as f32 / 8.0));
                let b = p2.add(q2.sub(p2).mul(j as f32 / 8.0));
                let d = a.sub(b).len2();
                prop_assert!(r.sq_distance <= d + 1e-3 * d.max(1.0), "{} > {}", r.sq_distance, d);
            }
        }
    }

    #[test]
    fn aabb_closest_point_realizes_distance(
        c in coord(),
        h in prop::array::uniform3(0.0f32..3.0),
        p in coord()
    ) {
        let b = Aabb3::new(c, Vec3::from(h));
        let q = b.closest_point(p);
        prop_assert!(b.inflate(1e-5).contains_point(q));
        prop_assert!((q.sub(p).len2() - b.sq_distance(p)).abs() <= 1e-3);
    }
}
