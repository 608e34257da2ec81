// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use bytemuck::{Pod, Zeroable};

use crate::config::epsilon;
use crate::mat::{Mat3, Mat4};
use crate::vec::Vec2;

/// 2×2 column-major matrix.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mat2 {
    pub(super) data: [f32; 4],
}

const _: () = assert!(core::mem::size_of::<Mat2>() == 16);

impl_mat_common!(Mat2, 2, 2, 4);
impl_mat_square!(Mat2, Vec2, 2, 4);

impl Mat2 {
    /// Determinant.
    pub fn determinant(&self) -> f32 {
        let [a, c, b, d] = self.data;
        a * d - b * c
    }

    /// Writes the inverse of `m` into `self`, or zeros when singular.
    pub fn inverse_of(&mut self, m: &Self) -> &mut Self {
        let det = m.determinant();
        if det.abs() < epsilon() {
            *self = Self::ZERO;
            return self;
        }
        let inv = 1.0 / det;
        let [a, c, b, d] = m.data;
        self.data = [d * inv, -c * inv, -b * inv, a * inv];
        self
    }

    /// Embeds into the upper-left of a 3×3 identity.
    pub fn mat3(&self) -> Mat3 {
        let m = &self.data;
        Mat3::new([m[0], m[1], 0.0, m[2], m[3], 0.0, 0.0, 0.0, 1.0])
    }

    /// Embeds into the upper-left of a 4×4 identity.
    pub fn mat4(&self) -> Mat4 {
        self.mat3().mat4()
    }
}
