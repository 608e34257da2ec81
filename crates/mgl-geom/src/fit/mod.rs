// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Fitting volumes to point sets.
//!
//! The covariance matrix of a point cloud and its Jacobi eigenvectors give
//! the principal axes used by [`eigen_sphere`]. The Ritter builders start
//! from a rough sphere and grow it with [`crate::Sphere3::merge_point`]
//! until every point is covered.

mod covariance;
mod sphere;

pub use covariance::{covariance, jacobi, JACOBI_MAX_SWEEPS, JACOBI_PIVOT_THRESHOLD};
pub use sphere::{
    eigen_sphere, extreme_points_along_direction, most_separated_points_on_aabb,
    ritter_eigen_sphere, ritter_sphere, sphere_from_distant_points,
};
