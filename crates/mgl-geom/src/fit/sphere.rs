// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use mgl_core::Vec3;

use super::covariance::{covariance, jacobi};
use crate::{GeomError, Sphere3};

/// Indices of the most separated pair among the per-axis extreme points.
///
/// The points with the smallest and largest x, y, and z coordinates are
/// compared pairwise and the farthest pair wins; earlier pairs win ties.
/// The pair is not always the two endpoints of a single axis: for a right
/// triangle it is the hypotenuse.
///
/// # Errors
/// [`GeomError::EmptyPointSet`] if `points` is empty.
pub fn most_separated_points_on_aabb(points: &[Vec3]) -> Result<(usize, usize), GeomError> {
    if points.is_empty() {
        return Err(GeomError::EmptyPointSet);
    }
    let mut lo = [0usize; 3];
    let mut hi = [0usize; 3];
    for (i, p) in points.iter().enumerate() {
        for axis in 0..3 {
            if p[axis] < points[lo[axis]][axis] {
                lo[axis] = i;
            }
            if p[axis] > points[hi[axis]][axis] {
                hi[axis] = i;
            }
        }
    }
    let extremes = [lo[0], hi[0], lo[1], hi[1], lo[2], hi[2]];
    let mut best = (lo[0], hi[0]);
    let mut best_d2 = points[hi[0]].sub(points[lo[0]]).len2();
    for (k, &i) in extremes.iter().enumerate() {
        for &j in &extremes[k + 1..] {
            let d2 = points[j].sub(points[i]).len2();
            if d2 > best_d2 {
                best = (i, j);
                best_d2 = d2;
            }
        }
    }
    Ok(best)
}

/// Sphere through the pair found by [`most_separated_points_on_aabb`].
///
/// # Errors
/// [`GeomError::EmptyPointSet`] if `points` is empty.
pub fn sphere_from_distant_points(points: &[Vec3]) -> Result<Sphere3, GeomError> {
    let (lo, hi) = most_separated_points_on_aabb(points)?;
    Ok(sphere_on_diameter(points[lo], points[hi]))
}

fn sphere_on_diameter(a: Vec3, b: Vec3) -> Sphere3 {
    Sphere3::new(a.add(b).mul(0.5), b.sub(a).len() * 0.5)
}

/// Indices of the points with the smallest and largest projection on `dir`.
///
/// # Errors
/// [`GeomError::EmptyPointSet`] if `points` is empty.
pub fn extreme_points_along_direction(
    dir: Vec3,
    points: &[Vec3],
) -> Result<(usize, usize), GeomError> {
    if points.is_empty() {
        return Err(GeomError::EmptyPointSet);
    }
    let (mut lo, mut hi) = (0, 0);
    let (mut min_proj, mut max_proj) = (f32::INFINITY, f32::NEG_INFINITY);
    for (i, p) in points.iter().enumerate() {
        let proj = p.dot(dir);
        if proj < min_proj {
            min_proj = proj;
            lo = i;
        }
        if proj > max_proj {
            max_proj = proj;
            hi = i;
        }
    }
    Ok((lo, hi))
}

/// Sphere spanning the extreme points along the principal axis.
///
/// The axis is the eigenvector of the covariance matrix with the largest
/// eigenvalue magnitude. The result need not contain every point.
///
/// # Errors
/// [`GeomError::EmptyPointSet`] if `points` is empty.
pub fn eigen_sphere(points: &[Vec3]) -> Result<Sphere3, GeomError> {
    let (d, v) = jacobi(&covariance(points)?);
    let mut axis = 0;
    for i in 1..3 {
        if d.at(i, i).abs() > d.at(axis, axis).abs() {
            axis = i;
        }
    }
    let (lo, hi) = extreme_points_along_direction(v.col(axis), points)?;
    Ok(sphere_on_diameter(points[lo], points[hi]))
}

/// Ritter's bounding sphere: [`sphere_from_distant_points`] grown over
/// every point.
///
/// # Errors
/// [`GeomError::EmptyPointSet`] if `points` is empty.
pub fn ritter_sphere(points: &[Vec3]) -> Result<Sphere3, GeomError> {
    let mut s = sphere_from_distant_points(points)?;
    for p in points {
        s.merge_point(*p);
    }
    Ok(s)
}

/// [`eigen_sphere`] grown over every point.
///
/// # Errors
/// [`GeomError::EmptyPointSet`] if `points` is empty.
pub fn ritter_eigen_sphere(points: &[Vec3]) -> Result<Sphere3, GeomError> {
    let mut s = eigen_sphere(points)?;
    for p in points {
        s.merge_point(*p);
    }
    Ok(s)
}
