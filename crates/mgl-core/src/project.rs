// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! OpenGL-style projection matrices and viewport mapping.
//!
//! All matrices are right-handed with clip-space `z ∈ [-1, 1]`, matching the
//! classic `glOrtho`/`gluPerspective`/`gluLookAt` family.

use tracing::debug;

use crate::{Mat4, MathError, Vec3, Vec4};

/// Window rectangle in pixels used by [`project`] and [`unproject`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Viewport {
    /// Left edge.
    pub x: i32,
    /// Bottom edge.
    pub y: i32,
    /// Width.
    pub width: i32,
    /// Height.
    pub height: i32,
}

impl Viewport {
    /// Creates a viewport.
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Orthographic projection of the box `[left,right]×[bottom,top]×[near,far]`.
pub fn ortho(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> Mat4 {
    let rml = right - left;
    let tmb = top - bottom;
    let fmn = far - near;
    Mat4::new([
        2.0 / rml,
        0.0,
        0.0,
        0.0,
        0.0,
        2.0 / tmb,
        0.0,
        0.0,
        0.0,
        0.0,
        -2.0 / fmn,
        0.0,
        -(right + left) / rml,
        -(top + bottom) / tmb,
        -(far + near) / fmn,
        1.0,
    ])
}

/// [`ortho`] with `near = -1` and `far = 1`.
pub fn ortho_2d(left: f32, right: f32, bottom: f32, top: f32) -> Mat4 {
    ortho(left, right, bottom, top, -1.0, 1.0)
}

/// Symmetric perspective projection; `fovy` is the full vertical field of
/// view in radians.
pub fn perspective(fovy: f32, aspect: f32, near: f32, far: f32) -> Mat4 {
    let f = 1.0 / (fovy / 2.0).tan();
    let nmf = near - far;
    Mat4::new([
        f / aspect,
        0.0,
        0.0,
        0.0,
        0.0,
        f,
        0.0,
        0.0,
        0.0,
        0.0,
        (near + far) / nmf,
        -1.0,
        0.0,
        0.0,
        2.0 * far * near / nmf,
        0.0,
    ])
}

/// Off-axis perspective projection of the given near-plane rectangle.
pub fn frustum(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> Mat4 {
    let rml = right - left;
    let tmb = top - bottom;
    let fmn = far - near;
    let a = (right + left) / rml;
    let b = (top + bottom) / tmb;
    let c = -(far + near) / fmn;
    let d = -(2.0 * far * near) / fmn;
    Mat4::new([
        2.0 * near / rml,
        0.0,
        0.0,
        0.0,
        0.0,
        2.0 * near / tmb,
        0.0,
        0.0,
        a,
        b,
        c,
        -1.0,
        0.0,
        0.0,
        d,
        0.0,
    ])
}

/// Scalar form of [`look_at_v`].
#[allow(clippy::too_many_arguments)]
pub fn look_at(
    eye_x: f32,
    eye_y: f32,
    eye_z: f32,
    center_x: f32,
    center_y: f32,
    center_z: f32,
    up_x: f32,
    up_y: f32,
    up_z: f32,
) -> Mat4 {
    look_at_v(
        Vec3::new(eye_x, eye_y, eye_z),
        Vec3::new(center_x, center_y, center_z),
        Vec3::new(up_x, up_y, up_z),
    )
}

/// View matrix placing the camera at `eye`, looking at `center`.
pub fn look_at_v(eye: Vec3, center: Vec3, up: Vec3) -> Mat4 {
    let f = center.sub(eye).normalized();
    let s = f.cross(up.normalized()).normalized();
    let u = s.cross(f);
    let [s0, s1, s2] = s.to_array();
    let [u0, u1, u2] = u.to_array();
    let [f0, f1, f2] = f.to_array();
    let rotation = Mat4::new([
        s0, u0, -f0, 0.0, //
        s1, u1, -f1, 0.0, //
        s2, u2, -f2, 0.0, //
        0.0, 0.0, 0.0, 1.0,
    ]);
    rotation * Mat4::translate_3d(-eye.x(), -eye.y(), -eye.z())
}

/// Maps an object-space point to window coordinates.
///
/// The result's `z` is the depth in `[0, 1]`.
pub fn project(obj: Vec3, modelview: &Mat4, projection: &Mat4, viewport: Viewport) -> Vec3 {
    let clip = projection.mat_mul(*modelview).mul_vec(obj.vec4(1.0));
    let ndc = clip.vec3().mul(1.0 / clip.w());
    let Viewport {
        x,
        y,
        width,
        height,
    } = viewport;
    Vec3::new(
        x as f32 + width as f32 * (ndc.x() + 1.0) / 2.0,
        y as f32 + height as f32 * (ndc.y() + 1.0) / 2.0,
        (ndc.z() + 1.0) / 2.0,
    )
}

/// Inverse of [`project`].
///
/// # Errors
/// [`MathError::SingularMatrix`] when `projection · modelview` has no
/// inverse.
pub fn unproject(
    win: Vec3,
    modelview: &Mat4,
    projection: &Mat4,
    viewport: Viewport,
) -> Result<Vec3, MathError> {
    let inv = projection.mat_mul(*modelview).inverse();
    if inv == Mat4::ZERO {
        debug!(?win, "unproject: projection * modelview is singular");
        return Err(MathError::SingularMatrix);
    }
    let Viewport {
        x,
        y,
        width,
        height,
    } = viewport;
    let ndc = Vec4::new(
        2.0 * (win.x() - x as f32) / width as f32 - 1.0,
        2.0 * (win.y() - y as f32) / height as f32 - 1.0,
        2.0 * win.z() - 1.0,
        1.0,
    );
    let obj = inv.mul_vec(ndc);
    Ok(obj.vec3().mul(1.0 / obj.w()))
}
