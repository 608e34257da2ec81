// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use bytemuck::{Pod, Zeroable};

use crate::mat::{Mat3, Mat4};
use crate::quat::Quat;
use crate::vec::{Vec3, Vec4};

/// Affine 3×4 matrix: a 3×3 linear part followed by a translation column.
///
/// Every operation assumes an implicit fourth row of `[0 0 0 1]`. The first
/// nine floats share the layout of [`Mat3`], the last three are the
/// translation.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mat3x4 {
    pub(super) data: [f32; 12],
}

const _: () = assert!(core::mem::size_of::<Mat3x4>() == 48);

impl_mat_common!(Mat3x4, 3, 4, 12);

impl Default for Mat3x4 {
    fn default() -> Self {
        Self::IDENT
    }
}

impl Mat3x4 {
    /// Identity rotation, zero translation.
    pub const IDENT: Self = Self {
        data: [1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0],
    };

    /// Returns [`Mat3x4::IDENT`].
    pub const fn identity() -> Self {
        Self::IDENT
    }

    /// Assembles a matrix from its linear part and translation.
    pub fn from_parts(linear: &Mat3, translation: Vec3) -> Self {
        let mut out = Self::ZERO;
        out.data[..9].copy_from_slice(linear.as_slice());
        out.set_translation(translation);
        out
    }

    /// Inner 3×3 linear part.
    pub fn mat3(&self) -> Mat3 {
        let m = &self.data;
        Mat3::new([m[0], m[1], m[2], m[3], m[4], m[5], m[6], m[7], m[8]])
    }

    /// Extends with a `[0 0 0 1]` bottom row.
    pub fn mat4(&self) -> Mat4 {
        let m = &self.data;
        Mat4::new([
            m[0], m[1], m[2], 0.0, //
            m[3], m[4], m[5], 0.0, //
            m[6], m[7], m[8], 0.0, //
            m[9], m[10], m[11], 1.0,
        ])
    }

    /// Translation column.
    pub fn translation(&self) -> Vec3 {
        Vec3::new(self.data[9], self.data[10], self.data[11])
    }

    /// Overwrites the translation column.
    pub fn set_translation(&mut self, t: Vec3) -> &mut Self {
        self.data[9..12].copy_from_slice(t.as_slice());
        self
    }

    /// Column `i`; columns 0..3 are the basis axes, column 3 is the
    /// translation.
    pub fn axis(&self, i: usize) -> Vec3 {
        Vec3::new(self.data[i * 3], self.data[i * 3 + 1], self.data[i * 3 + 2])
    }

    /// Transforms a point: `R·v + t`.
    pub fn mul_vec3(&self, v: Vec3) -> Vec3 {
        self.mat3().mul_vec(v).add(self.translation())
    }

    /// Transforms a homogeneous vector: `R·v.xyz + t·v.w`.
    pub fn mul_vec4(&self, v: Vec4) -> Vec3 {
        let mut out = self.mat3().mul_vec(v.vec3());
        out.add_scaled_vec(v.w(), &self.translation());
        out
    }

    /// Rotates/scales a direction without translating it.
    pub fn transform_direction(&self, v: Vec3) -> Vec3 {
        self.mat3().mul_vec(v)
    }

    /// Composition `self · other` under the implied `[0 0 0 1]` row.
    pub fn mat_mul(self, other: Self) -> Self {
        let mut out = Self::ZERO;
        out.mat_mul_of(&self, &other);
        out
    }

    /// Writes `a · b` into `self`.
    pub fn mat_mul_of(&mut self, a: &Self, b: &Self) -> &mut Self {
        let ra = a.mat3();
        let linear = ra.mat_mul(b.mat3());
        let translation = ra.mul_vec(b.translation()).add(a.translation());
        *self = Self::from_parts(&linear, translation);
        self
    }

    /// `self = self · other`.
    pub fn mat_mul_with(&mut self, other: &Self) -> &mut Self {
        let a = *self;
        self.mat_mul_of(&a, other)
    }

    /// Determinant of the linear part.
    pub fn determinant(&self) -> f32 {
        self.mat3().determinant()
    }

    /// Affine inverse: `R⁻¹` with translation `−R⁻¹·t`.
    ///
    /// Writes the zero matrix when the linear part is singular.
    pub fn inverse_of(&mut self, m: &Self) -> &mut Self {
        let r_inv = m.mat3().inverse();
        if r_inv == Mat3::ZERO {
            *self = Self::ZERO;
            return self;
        }
        let t = r_inv.mul_vec(m.translation()).inverse();
        *self = Self::from_parts(&r_inv, t);
        self
    }

    /// Affine inverse; see [`Mat3x4::inverse_of`].
    pub fn inverse(self) -> Self {
        let mut out = Self::ZERO;
        out.inverse_of(&self);
        out
    }

    /// Inverts in place.
    pub fn invert(&mut self) -> &mut Self {
        let a = *self;
        self.inverse_of(&a)
    }

    /// Maps a world point back through a rigid transform: `Rᵀ·(v − t)`.
    ///
    /// Only valid when the linear part is orthogonal.
    pub fn transform_inverse(&self, v: Vec3) -> Vec3 {
        self.transform_inverse_direction(v.sub(self.translation()))
    }

    /// `Rᵀ·v`; the rigid inverse without the translation.
    pub fn transform_inverse_direction(&self, v: Vec3) -> Vec3 {
        self.mat3().transposed().mul_vec(v)
    }

    /// Writes the rotation of `q` into the linear part and `p` into the
    /// translation.
    pub fn set_orientation_and_pos(&mut self, q: &Quat, p: Vec3) -> &mut Self {
        *self = Self::from_parts(&q.mat3(), p);
        self
    }
}

impl core::ops::Mul for Mat3x4 {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        self.mat_mul(rhs)
    }
}

impl core::ops::Mul<Vec3> for Mat3x4 {
    type Output = Vec3;
    fn mul(self, rhs: Vec3) -> Vec3 {
        self.mul_vec3(rhs)
    }
}

impl core::ops::Mul<Vec4> for Mat3x4 {
    type Output = Vec3;
    fn mul(self, rhs: Vec4) -> Vec3 {
        self.mul_vec4(rhs)
    }
}

impl From<Mat4> for Mat3x4 {
    fn from(m: Mat4) -> Self {
        m.mat3x4()
    }
}

impl From<Mat3x4> for Mat4 {
    fn from(m: Mat3x4) -> Self {
        m.mat4()
    }
}
