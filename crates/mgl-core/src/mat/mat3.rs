// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use bytemuck::{Pod, Zeroable};

use crate::config::epsilon;
use crate::mat::{Mat2, Mat4};
use crate::vec::Vec3;

/// 3×3 column-major matrix.
///
/// Used for pure rotations, inertia tensors, and normal matrices.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mat3 {
    pub(super) data: [f32; 9],
}

const _: () = assert!(core::mem::size_of::<Mat3>() == 36);

impl_mat_common!(Mat3, 3, 3, 9);
impl_mat_square!(Mat3, Vec3, 3, 9);

impl Mat3 {
    /// Determinant by cofactor expansion along the first row.
    pub fn determinant(&self) -> f32 {
        let [a, d, g, b, e, h, c, f, i] = self.data;
        a * (e * i - f * h) - b * (d * i - f * g) + c * (d * h - e * g)
    }

    /// Writes the inverse of `m` into `self`, or zeros when singular.
    pub fn inverse_of(&mut self, m: &Self) -> &mut Self {
        let det = m.determinant();
        if det.abs() < epsilon() {
            *self = Self::ZERO;
            return self;
        }
        let inv = 1.0 / det;
        let [a, d, g, b, e, h, c, f, i] = m.data;
        // adjugate, written column by column
        self.data = [
            (e * i - f * h) * inv,
            (f * g - d * i) * inv,
            (d * h - e * g) * inv,
            (c * h - b * i) * inv,
            (a * i - c * g) * inv,
            (b * g - a * h) * inv,
            (b * f - c * e) * inv,
            (c * d - a * f) * inv,
            (a * e - b * d) * inv,
        ];
        self
    }

    /// Upper-left 2×2 block.
    pub fn mat2(&self) -> Mat2 {
        let m = &self.data;
        Mat2::new([m[0], m[1], m[3], m[4]])
    }

    /// Embeds into the upper-left of a 4×4 identity.
    pub fn mat4(&self) -> Mat4 {
        let m = &self.data;
        Mat4::new([
            m[0], m[1], m[2], 0.0, //
            m[3], m[4], m[5], 0.0, //
            m[6], m[7], m[8], 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ])
    }
}
