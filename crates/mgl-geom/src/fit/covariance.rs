// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use mgl_core::{Mat3, Vec3};
use tracing::debug;

use crate::GeomError;

/// Upper bound on Jacobi sweeps.
pub const JACOBI_MAX_SWEEPS: usize = 50;

/// Off-diagonal magnitude below which a pivot is left unrotated.
pub const JACOBI_PIVOT_THRESHOLD: f32 = 1e-4;

/// Covariance matrix of `points` about their centroid.
///
/// # Errors
/// [`GeomError::EmptyPointSet`] if `points` is empty.
pub fn covariance(points: &[Vec3]) -> Result<Mat3, GeomError> {
    if points.is_empty() {
        return Err(GeomError::EmptyPointSet);
    }
    let inv_n = 1.0 / points.len() as f32;
    let centroid = points.iter().fold(Vec3::ZERO, |acc, p| acc.add(*p)).mul(inv_n);

    let (mut e00, mut e11, mut e22) = (0.0, 0.0, 0.0);
    let (mut e01, mut e02, mut e12) = (0.0, 0.0, 0.0);
    for p in points {
        let d = p.sub(centroid);
        e00 += d.x() * d.x();
        e11 += d.y() * d.y();
        e22 += d.z() * d.z();
        e01 += d.x() * d.y();
        e02 += d.x() * d.z();
        e12 += d.y() * d.z();
    }
    Ok(Mat3::from_rows([
        Vec3::new(e00, e01, e02),
        Vec3::new(e01, e11, e12),
        Vec3::new(e02, e12, e22),
    ])
    .scale(inv_n))
}

/// Cosine/sine pair of the 2×2 Schur rotation that zeroes `a[p][q]`.
fn sym_schur2(a: &Mat3, p: usize, q: usize) -> (f32, f32) {
    let apq = a.at(p, q);
    if apq.abs() <= JACOBI_PIVOT_THRESHOLD {
        return (1.0, 0.0);
    }
    let r = (a.at(q, q) - a.at(p, p)) / (2.0 * apq);
    let t = if r >= 0.0 {
        1.0 / (r + (1.0 + r * r).sqrt())
    } else {
        -1.0 / (-r + (1.0 + r * r).sqrt())
    };
    let c = 1.0 / (1.0 + t * t).sqrt();
    (c, t * c)
}

fn off_diagonal_sq(a: &Mat3) -> f32 {
    let mut off = 0.0;
    for i in 0..3 {
        for j in 0..3 {
            if i != j {
                off += a.at(i, j) * a.at(i, j);
            }
        }
    }
    off
}

/// Jacobi eigen-decomposition of the symmetric matrix `a`.
///
/// Returns `(d, v)`: the diagonal of `d` holds the eigenvalues and the
/// columns of `v` the matching unit eigenvectors. Each sweep rotates away
/// the largest off-diagonal entry. Iteration stops once the off-diagonal
/// energy stops decreasing (never before the fourth sweep) or after
/// [`JACOBI_MAX_SWEEPS`].
pub fn jacobi(a: &Mat3) -> (Mat3, Mat3) {
    let mut a = *a;
    let mut v = Mat3::IDENT;
    let mut prev_off = f32::INFINITY;
    let mut off = off_diagonal_sq(&a);
    let mut sweeps = 0;

    for n in 0..JACOBI_MAX_SWEEPS {
        sweeps = n + 1;
        let (mut p, mut q) = (0, 1);
        for (i, j) in [(0, 2), (1, 2)] {
            if a.at(i, j).abs() > a.at(p, q).abs() {
                p = i;
                q = j;
            }
        }

        let (c, s) = sym_schur2(&a, p, q);
        let mut rot = Mat3::IDENT;
        rot.set(p, p, c).set(p, q, s).set(q, p, -s).set(q, q, c);

        v.mat_mul_with(&rot);
        a = rot.transposed() * a * rot;

        off = off_diagonal_sq(&a);
        if n > 2 && off >= prev_off {
            break;
        }
        prev_off = off;
    }
    debug!(sweeps, off, "jacobi: converged");
    (a, v)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn covariance_of_axis_pair() {
        let pts = [Vec3::new(-1.0, 0.0, 0.0), Vec3::new(1.0, 0.0, 0.0)];
        let Ok(c) = covariance(&pts) else {
            panic!("non-empty input");
        };
        assert_eq!(c, Mat3::diag(Vec3::new(1.0, 0.0, 0.0)));
        assert_eq!(covariance(&[]), Err(GeomError::EmptyPointSet));
    }

    #[test]
    fn diagonal_input_is_left_alone() {
        let a = Mat3::diag(Vec3::new(3.0, 1.0, 2.0));
        let (d, v) = jacobi(&a);
        assert_eq!(d, a);
        assert_eq!(v, Mat3::IDENT);
    }
}
