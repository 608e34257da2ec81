// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::fmt;

use bytemuck::{Pod, Zeroable};

use crate::{Mat3, Mat4, Quat, Vec3};

/// Scene-graph style transform: a [`Mat4`] built up by post-multiplication.
///
/// `translate_*`, `rotate_quat`, and `concatenate` append to the current
/// matrix (`M ← M · T`), so operations apply to points in reverse call
/// order. `set_*` replaces the matrix outright.
///
/// # Examples
/// ```
/// use mgl_core::{Transform, Vec3};
/// let mut t = Transform::identity();
/// t.translate_3f(1.0, 0.0, 0.0);
/// assert_eq!(t.local_to_world(Vec3::ZERO), Vec3::new(1.0, 0.0, 0.0));
/// ```
#[repr(transparent)]
#[derive(Debug, Copy, Clone, PartialEq, Default, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transform(Mat4);

impl Transform {
    /// The identity transform.
    pub const fn identity() -> Self {
        Self(Mat4::IDENT)
    }

    /// Wraps an existing matrix.
    pub const fn from_mat4(m: Mat4) -> Self {
        Self(m)
    }

    /// Underlying matrix.
    pub const fn mat4(&self) -> &Mat4 {
        &self.0
    }

    /// Post-multiplies by a translation.
    pub fn translate_3f(&mut self, x: f32, y: f32, z: f32) -> &mut Self {
        self.0.mat_mul_with(&Mat4::translate_3d(x, y, z));
        self
    }

    /// Post-multiplies by a translation.
    pub fn translate_vec3(&mut self, v: Vec3) -> &mut Self {
        self.translate_3f(v.x(), v.y(), v.z())
    }

    /// Replaces the matrix with a pure translation.
    pub fn set_translate_3f(&mut self, x: f32, y: f32, z: f32) -> &mut Self {
        self.0 = Mat4::translate_3d(x, y, z);
        self
    }

    /// Replaces the matrix with a pure translation.
    pub fn set_translate_vec3(&mut self, v: Vec3) -> &mut Self {
        self.set_translate_3f(v.x(), v.y(), v.z())
    }

    /// Post-multiplies by the rotation of `q`.
    pub fn rotate_quat(&mut self, q: &Quat) -> &mut Self {
        self.0.mat_mul_with(&q.mat4());
        self
    }

    /// Replaces the matrix with the rotation of `q`.
    pub fn set_rotate_quat(&mut self, q: &Quat) -> &mut Self {
        self.0 = q.mat4();
        self
    }

    /// Post-multiplies by `other`.
    pub fn concatenate(&mut self, other: &Self) -> &mut Self {
        self.0.mat_mul_with(&other.0);
        self
    }

    /// `M · (v, 1)` with the trailing 1 dropped.
    pub fn local_to_world(&self, v: Vec3) -> Vec3 {
        self.0.transform_point(v)
    }

    /// `M⁻¹ · (v, 1)`.
    ///
    /// Inverts on every call; cache [`Mat4::inverse`] yourself for repeated
    /// queries. A singular matrix maps everything to the origin.
    pub fn world_to_local(&self, v: Vec3) -> Vec3 {
        self.0.inverse().transform_point(v)
    }

    /// Upper-left 3×3, i.e. the normal transform for rigid matrices.
    pub fn normal(&self) -> Mat3 {
        self.0.mat3()
    }
}

impl From<Mat4> for Transform {
    fn from(m: Mat4) -> Self {
        Self(m)
    }
}

impl From<Transform> for Mat4 {
    fn from(t: Transform) -> Self {
        t.0
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
