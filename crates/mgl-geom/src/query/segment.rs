// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use mgl_core::scalar::clamp;
use mgl_core::{epsilon, Vec3};

/// Closest point to `p` on the segment `a..b`.
pub fn closest_point_on_segment(p: Vec3, a: Vec3, b: Vec3) -> Vec3 {
    let ab = b.sub(a);
    let denom = ab.len2();
    if denom == 0.0 {
        return a;
    }
    let t = clamp(p.sub(a).dot(ab) / denom, 0.0, 1.0);
    a.add(ab.mul(t))
}

/// Squared distance from `p` to the segment `a..b`.
pub fn sq_distance_point_segment(p: Vec3, a: Vec3, b: Vec3) -> f32 {
    let ab = b.sub(a);
    let ap = p.sub(a);
    let e = ap.dot(ab);
    if e <= 0.0 {
        return ap.len2();
    }
    let f = ab.len2();
    if e >= f {
        return p.sub(b).len2();
    }
    ap.len2() - e * e / f
}

/// Result of [`closest_points_segment_segment`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SegmentClosest {
    /// Parameter of `c1` along the first segment, in `[0, 1]`.
    pub s: f32,
    /// Parameter of `c2` along the second segment, in `[0, 1]`.
    pub t: f32,
    /// Closest point on the first segment.
    pub c1: Vec3,
    /// Closest point on the second segment.
    pub c2: Vec3,
    /// `|c1 - c2|²`.
    pub sq_distance: f32,
}

/// Closest points between segments `p1..q1` and `p2..q2`.
///
/// A segment whose squared length is at most the process-wide tolerance is
/// treated as a point. Parallel segments pick `s = 0` and clamp `t`.
pub fn closest_points_segment_segment(p1: Vec3, q1: Vec3, p2: Vec3, q2: Vec3) -> SegmentClosest {
    let eps = epsilon();
    let d1 = q1.sub(p1);
    let d2 = q2.sub(p2);
    let r = p1.sub(p2);
    let a = d1.len2();
    let e = d2.len2();
    let f = d2.dot(r);

    let (s, t) = if a <= eps && e <= eps {
        (0.0, 0.0)
    } else if a <= eps {
        (0.0, clamp(f / e, 0.0, 1.0))
    } else {
        let c = d1.dot(r);
        if e <= eps {
            (clamp(-c / a, 0.0, 1.0), 0.0)
        } else {
            let b = d1.dot(d2);
            let denom = a * e - b * b;
            let s = if denom == 0.0 {
                0.0
            } else {
                clamp((b * f - c * e) / denom, 0.0, 1.0)
            };
            let t = (b * s + f) / e;
            // t fell off the second segment: clamp it and recompute s
            if t < 0.0 {
                (clamp(-c / a, 0.0, 1.0), 0.0)
            } else if t > 1.0 {
                (clamp((b - c) / a, 0.0, 1.0), 1.0)
            } else {
                (s, t)
            }
        }
    };

    let c1 = p1.add(d1.mul(s));
    let c2 = p2.add(d2.mul(t));
    SegmentClosest {
        s,
        t,
        c1,
        c2,
        sq_distance: c1.sub(c2).len2(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crossing_segments_meet() {
        let r = closest_points_segment_segment(
            Vec3::new(-1.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, -1.0, 1.0),
            Vec3::new(0.0, 1.0, 1.0),
        );
        assert_eq!((r.s, r.t), (0.5, 0.5));
        assert_eq!(r.sq_distance, 1.0);
        assert_eq!(r.c1, Vec3::ZERO);
        assert_eq!(r.c2, Vec3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn clamped_parameter_is_recomputed() {
        // second segment lies past the end of the first
        let r = closest_points_segment_segment(
            Vec3::ZERO,
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(3.0, 1.0, 0.0),
            Vec3::new(3.0, 2.0, 0.0),
        );
        assert_eq!((r.s, r.t), (1.0, 0.0));
        assert_eq!(r.sq_distance, 5.0);
    }

    #[test]
    fn degenerate_segments_collapse_to_points() {
        let p = Vec3::new(1.0, 1.0, 1.0);
        let r = closest_points_segment_segment(p, p, Vec3::ZERO, Vec3::new(2.0, 0.0, 0.0));
        assert_eq!(r.s, 0.0);
        assert_eq!(r.c2, Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(r.sq_distance, 2.0);
        let r = closest_points_segment_segment(p, p, p, p);
        assert_eq!(r.sq_distance, 0.0);
    }

    #[test]
    fn point_segment_distance_matches_closest_point() {
        let (a, b) = (Vec3::new(0.0, 0.0, 0.0), Vec3::new(4.0, 0.0, 0.0));
        for p in [Vec3::new(-1.0, 1.0, 0.0), Vec3::new(2.0, 3.0, 0.0), Vec3::new(6.0, 0.0, 2.0)] {
            let q = closest_point_on_segment(p, a, b);
            assert!((q.sub(p).len2() - sq_distance_point_segment(p, a, b)).abs() < 1e-5);
        }
    }
}
