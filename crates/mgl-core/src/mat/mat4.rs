// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use bytemuck::{Pod, Zeroable};

use crate::config::epsilon;
use crate::mat::{Mat2, Mat3, Mat3x4};
use crate::vec::{Vec3, Vec4};

/// Column‑major 4×4 matrix.
///
/// - Stored in column‑major order to align with GPU uploads.
/// - Represents affine and projective transforms; [`Mat4::transform_point`]
///   assumes `w = 1` and skips the perspective divide, use
///   [`Mat4::transform_coordinate`] when the divide matters.
///
/// # Examples
/// ```
/// use mgl_core::{Mat4, Vec3};
/// let t = Mat4::translate_3d(5.0, -3.0, 2.0);
/// let p = Vec3::new(2.0, 4.0, -1.0);
/// assert_eq!(t.transform_point(p).to_array(), [7.0, 1.0, 1.0]);
/// ```
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mat4 {
    pub(super) data: [f32; 16],
}

const _: () = assert!(core::mem::size_of::<Mat4>() == 64);

impl_mat_common!(Mat4, 4, 4, 16);
impl_mat_square!(Mat4, Vec4, 4, 16);

// The twelve 2×2 minors of the top row pair (s*) and bottom row pair (c*).
// Both the determinant and every cofactor are built from these, so the 24
// pairwise products behind them are evaluated exactly once.
struct Minors {
    s: [f32; 6],
    c: [f32; 6],
}

impl Minors {
    #[allow(clippy::similar_names)]
    fn of(m: &[f32; 16]) -> Self {
        let [a00, a10, a20, a30, a01, a11, a21, a31, a02, a12, a22, a32, a03, a13, a23, a33] = *m;
        Self {
            s: [
                a00 * a11 - a10 * a01,
                a00 * a12 - a10 * a02,
                a00 * a13 - a10 * a03,
                a01 * a12 - a11 * a02,
                a01 * a13 - a11 * a03,
                a02 * a13 - a12 * a03,
            ],
            c: [
                a20 * a31 - a30 * a21,
                a20 * a32 - a30 * a22,
                a20 * a33 - a30 * a23,
                a21 * a32 - a31 * a22,
                a21 * a33 - a31 * a23,
                a22 * a33 - a32 * a23,
            ],
        }
    }

    fn det(&self) -> f32 {
        let Self { s, c } = self;
        s[0] * c[5] - s[1] * c[4] + s[2] * c[3] + s[3] * c[2] - s[4] * c[1] + s[5] * c[0]
    }
}

impl Mat4 {
    /// Determinant via shared 2×2 minors.
    pub fn determinant(&self) -> f32 {
        Minors::of(&self.data).det()
    }

    /// Writes the inverse of `m` into `self`, or zeros when singular.
    ///
    /// Equivalent to the adjugate of 3×3 cofactors over the determinant;
    /// each cofactor is the Laplace expansion over the shared 2×2 minors.
    pub fn inverse_of(&mut self, m: &Self) -> &mut Self {
        let minors = Minors::of(&m.data);
        let det = minors.det();
        if det.abs() < epsilon() {
            *self = Self::ZERO;
            return self;
        }
        let inv = 1.0 / det;
        let Minors { s, c } = minors;
        let [a00, a10, a20, a30, a01, a11, a21, a31, a02, a12, a22, a32, a03, a13, a23, a33] =
            m.data;
        self.data = [
            // col 0
            (a11 * c[5] - a12 * c[4] + a13 * c[3]) * inv,
            (-a10 * c[5] + a12 * c[2] - a13 * c[1]) * inv,
            (a10 * c[4] - a11 * c[2] + a13 * c[0]) * inv,
            (-a10 * c[3] + a11 * c[1] - a12 * c[0]) * inv,
            // col 1
            (-a01 * c[5] + a02 * c[4] - a03 * c[3]) * inv,
            (a00 * c[5] - a02 * c[2] + a03 * c[1]) * inv,
            (-a00 * c[4] + a01 * c[2] - a03 * c[0]) * inv,
            (a00 * c[3] - a01 * c[1] + a02 * c[0]) * inv,
            // col 2
            (a31 * s[5] - a32 * s[4] + a33 * s[3]) * inv,
            (-a30 * s[5] + a32 * s[2] - a33 * s[1]) * inv,
            (a30 * s[4] - a31 * s[2] + a33 * s[0]) * inv,
            (-a30 * s[3] + a31 * s[1] - a32 * s[0]) * inv,
            // col 3
            (-a21 * s[5] + a22 * s[4] - a23 * s[3]) * inv,
            (a20 * s[5] - a22 * s[2] + a23 * s[1]) * inv,
            (-a20 * s[4] + a21 * s[2] - a23 * s[0]) * inv,
            (a20 * s[3] - a21 * s[1] + a22 * s[0]) * inv,
        ];
        self
    }

    /// Upper-left 3×3 block (the linear part of an affine transform).
    pub fn mat3(&self) -> Mat3 {
        let m = &self.data;
        Mat3::new([m[0], m[1], m[2], m[4], m[5], m[6], m[8], m[9], m[10]])
    }

    /// Upper-left 2×2 block.
    pub fn mat2(&self) -> Mat2 {
        let m = &self.data;
        Mat2::new([m[0], m[1], m[4], m[5]])
    }

    /// Drops the bottom row, keeping the affine part.
    pub fn mat3x4(&self) -> Mat3x4 {
        let m = &self.data;
        Mat3x4::new([
            m[0], m[1], m[2], //
            m[4], m[5], m[6], //
            m[8], m[9], m[10], //
            m[12], m[13], m[14],
        ])
    }

    /// Transforms a point (assumes `w = 1`, no perspective divide).
    pub fn transform_point(&self, point: Vec3) -> Vec3 {
        self.mul_vec(point.vec4(1.0)).vec3()
    }

    /// Transforms a direction vector (ignores translation, `w = 0`).
    pub fn transform_direction(&self, direction: Vec3) -> Vec3 {
        self.mul_vec(direction.vec4(0.0)).vec3()
    }
}
