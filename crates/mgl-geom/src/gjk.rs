// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use mgl_core::Vec2;
use tracing::trace;

use crate::{ConvexHull2, Simplex2};

/// Iteration cap for [`gjk_intersect`].
pub const GJK_MAX_ITERATIONS: usize = 64;

/// Support point of the Minkowski difference `a − b` along `dir`.
pub fn minkowski_support(a: &ConvexHull2, b: &ConvexHull2, dir: Vec2) -> Vec2 {
    a.support_point(dir).sub(b.support_point(-dir))
}

/// Returns `true` if the two convex hulls touch or intersect.
///
/// Runs GJK on `a − b`: the hulls intersect exactly when the difference
/// contains the origin. Gives up, reporting no intersection, after
/// [`GJK_MAX_ITERATIONS`] rounds.
pub fn gjk_intersect(a: &ConvexHull2, b: &ConvexHull2) -> bool {
    let mut dir = b.centroid().sub(a.centroid());
    if dir.len2() == 0.0 {
        dir = Vec2::UNIT_X;
    }
    let mut simplex = Simplex2::new();
    simplex.merge(minkowski_support(a, b, dir));
    let (next, inside) = simplex.nearest_to_origin();
    if inside {
        return true;
    }
    dir = next;

    for iteration in 0..GJK_MAX_ITERATIONS {
        let p = minkowski_support(a, b, dir);
        trace!(iteration, ?dir, ?p, size = simplex.len(), "gjk: step");
        if p.dot(dir) < 0.0 {
            // the new point did not pass the origin
            return false;
        }
        simplex.merge(p);
        let (next, inside) = simplex.nearest_to_origin();
        if inside {
            return true;
        }
        dir = next;
    }
    false
}
