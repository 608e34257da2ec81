// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Rotation, translation, scale, and shear constructors.
//!
//! Angles are radians; rotations are counter-clockwise about the named axis
//! when looking down that axis towards the origin.

use crate::mat::{Mat2, Mat3, Mat4};
use crate::vec::Vec3;

impl Mat2 {
    /// 2D rotation by `angle`.
    pub fn rotate_2d(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new([c, s, -s, c])
    }
}

impl Mat3 {
    /// Rotation about +X.
    pub fn rotate_3d_x(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new([
            1.0, 0.0, 0.0, //
            0.0, c, s, //
            0.0, -s, c,
        ])
    }

    /// Rotation about +Y.
    pub fn rotate_3d_y(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new([
            c, 0.0, -s, //
            0.0, 1.0, 0.0, //
            s, 0.0, c,
        ])
    }

    /// Rotation about +Z.
    pub fn rotate_3d_z(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new([
            c, s, 0.0, //
            -s, c, 0.0, //
            0.0, 0.0, 1.0,
        ])
    }

    /// Homogeneous 2D translation.
    pub const fn translate_2d(tx: f32, ty: f32) -> Self {
        Self::new([1.0, 0.0, 0.0, 0.0, 1.0, 0.0, tx, ty, 1.0])
    }

    /// Homogeneous 2D scale.
    pub const fn scale_2d(sx: f32, sy: f32) -> Self {
        Self::new([sx, 0.0, 0.0, 0.0, sy, 0.0, 0.0, 0.0, 1.0])
    }

    /// Homogeneous 2D rotation; same block as [`Mat2::rotate_2d`].
    pub fn homog_rotate_2d(angle: f32) -> Self {
        Mat2::rotate_2d(angle).mat3()
    }

    /// Homogeneous 2D shear along X: `x' = x + shear·y`.
    pub const fn shear_x_2d(shear: f32) -> Self {
        Self::new([1.0, 0.0, 0.0, shear, 1.0, 0.0, 0.0, 0.0, 1.0])
    }

    /// Homogeneous 2D shear along Y: `y' = y + shear·x`.
    pub const fn shear_y_2d(shear: f32) -> Self {
        Self::new([1.0, shear, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0])
    }
}

impl Mat4 {
    /// Builds a translation matrix.
    ///
    /// Column-major layout: translation occupies the last column.
    pub const fn translate_3d(tx: f32, ty: f32, tz: f32) -> Self {
        Self::new([
            1.0, 0.0, 0.0, 0.0, // col 0
            0.0, 1.0, 0.0, 0.0, // col 1
            0.0, 0.0, 1.0, 0.0, // col 2
            tx, ty, tz, 1.0, // col 3 (translation)
        ])
    }

    /// Builds a non-uniform scale matrix.
    pub const fn scale_3d(sx: f32, sy: f32, sz: f32) -> Self {
        Self::new([
            sx, 0.0, 0.0, 0.0, //
            0.0, sy, 0.0, 0.0, //
            0.0, 0.0, sz, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    /// Homogeneous rotation about +X.
    pub fn homog_rotate_3d_x(angle: f32) -> Self {
        Mat3::rotate_3d_x(angle).mat4()
    }

    /// Homogeneous rotation about +Y.
    pub fn homog_rotate_3d_y(angle: f32) -> Self {
        Mat3::rotate_3d_y(angle).mat4()
    }

    /// Homogeneous rotation about +Z.
    pub fn homog_rotate_3d_z(angle: f32) -> Self {
        Mat3::rotate_3d_z(angle).mat4()
    }

    /// Homogeneous rotation by `angle` about a unit `axis` (Rodrigues).
    pub fn homog_rotate_3d(angle: f32, axis: Vec3) -> Self {
        let [x, y, z] = axis.to_array();
        let (s, c) = angle.sin_cos();
        let k = 1.0 - c;
        Self::new([
            x * x * k + c,
            x * y * k + z * s,
            x * z * k - y * s,
            0.0,
            x * y * k - z * s,
            y * y * k + c,
            y * z * k + x * s,
            0.0,
            x * z * k + y * s,
            y * z * k - x * s,
            z * z * k + c,
            0.0,
            0.0,
            0.0,
            0.0,
            1.0,
        ])
    }

    /// Shear of Y and Z by X.
    pub const fn shear_x_3d(shear_y: f32, shear_z: f32) -> Self {
        let mut m = Self::IDENT;
        m.data[1] = shear_y;
        m.data[2] = shear_z;
        m
    }

    /// Shear of X and Z by Y.
    pub const fn shear_y_3d(shear_x: f32, shear_z: f32) -> Self {
        let mut m = Self::IDENT;
        m.data[4] = shear_x;
        m.data[6] = shear_z;
        m
    }

    /// Shear of X and Y by Z.
    pub const fn shear_z_3d(shear_x: f32, shear_y: f32) -> Self {
        let mut m = Self::IDENT;
        m.data[8] = shear_x;
        m.data[9] = shear_y;
        m
    }

    /// Largest axis scale of the linear part.
    pub fn extract_max_scale(&self) -> f32 {
        let m = self.mat3();
        let max2 = m.col(0).len2().max(m.col(1).len2()).max(m.col(2).len2());
        max2.sqrt()
    }

    /// Inverse-transpose of the linear part, for transforming normals.
    pub fn normal_matrix(&self) -> Mat3 {
        self.mat3().inverse().transposed()
    }

    /// Transforms a point with the full projective divide.
    pub fn transform_coordinate(&self, v: Vec3) -> Vec3 {
        let t = self.mul_vec(v.vec4(1.0));
        t.mul(1.0 / t.w()).vec3()
    }

    /// Transforms a normal-like vector (`w = 0`, no divide).
    pub fn transform_normal(&self, v: Vec3) -> Vec3 {
        self.transform_direction(v)
    }
}

#[cfg(test)]
mod tests {
    use core::f32::consts::FRAC_PI_2;

    use super::*;

    fn close(a: Vec3, b: Vec3) -> bool {
        a.approx_func_eq(b, |x, y| (x - y).abs() < 1e-6)
    }

    #[test]
    fn axis_rotations_follow_right_hand_rule() {
        assert!(close(Mat3::rotate_3d_z(FRAC_PI_2) * Vec3::UNIT_X, Vec3::UNIT_Y));
        assert!(close(Mat3::rotate_3d_x(FRAC_PI_2) * Vec3::UNIT_Y, Vec3::UNIT_Z));
        assert!(close(Mat3::rotate_3d_y(FRAC_PI_2) * Vec3::UNIT_Z, Vec3::UNIT_X));
    }

    #[test]
    fn axis_angle_matches_axis_rotations() {
        let a = Mat4::homog_rotate_3d(0.4, Vec3::UNIT_Y);
        let b = Mat4::homog_rotate_3d_y(0.4);
        assert!(a.approx_func_eq(&b, |x, y| (x - y).abs() < 1e-6));
    }

    #[test]
    fn shears_and_2d_helpers() {
        let p = Mat3::shear_x_2d(2.0) * Vec3::new(1.0, 1.0, 1.0);
        assert_eq!(p, Vec3::new(3.0, 1.0, 1.0));
        let p = Mat3::translate_2d(1.0, 2.0) * Mat3::scale_2d(2.0, 3.0) * Vec3::new(1.0, 1.0, 1.0);
        assert_eq!(p, Vec3::new(3.0, 5.0, 1.0));
        let p = Mat4::shear_z_3d(1.0, 2.0).transform_point(Vec3::new(0.0, 0.0, 1.0));
        assert_eq!(p, Vec3::new(1.0, 2.0, 1.0));
    }

    #[test]
    fn scale_and_normal_helpers() {
        let m = Mat4::scale_3d(1.0, 4.0, 2.0);
        assert_eq!(m.extract_max_scale(), 4.0);
        let n = m.normal_matrix() * Vec3::UNIT_Y;
        assert!(close(n, Vec3::new(0.0, 0.25, 0.0)));
        let t = Mat4::translate_3d(1.0, 0.0, 0.0);
        assert_eq!(t.transform_normal(Vec3::UNIT_Y), Vec3::UNIT_Y);
        assert_eq!(t.transform_coordinate(Vec3::UNIT_Y), Vec3::new(1.0, 1.0, 0.0));
    }
}
