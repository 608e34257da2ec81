// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::f32::consts::PI;
use core::fmt;
use core::ops::{Add, Mul, Neg, Sub};
use core::str::FromStr;

use bytemuck::{Pod, Zeroable};

use crate::scalar::{clamp, float_equal, float_equal_threshold, MAX_VALUE};
use crate::vec::Vec3;
use crate::{Mat3, Mat4, MathError};

/// Dot product above which [`quat_slerp`] falls back to [`quat_nlerp`].
pub const SLERP_NLERP_THRESHOLD: f32 = 0.9995;

/// Quaternion stored scalar-first as `(w, v)`.
///
/// * All angles are expressed in radians.
/// * Products follow the Hamilton convention; `q` and `-q` describe the
///   same orientation.
/// * [`Quat::rotate`] assumes a unit quaternion.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Quat {
    /// Scalar part.
    pub w: f32,
    /// Vector part.
    pub v: Vec3,
}

const _: () = assert!(core::mem::size_of::<Quat>() == 16);
const _: () = assert!(core::mem::offset_of!(Quat, w) == 0);

impl Default for Quat {
    fn default() -> Self {
        Self::IDENT
    }
}

impl Quat {
    /// Identity rotation `(1, 0)`.
    pub const IDENT: Self = Self::new(1.0, Vec3::ZERO);

    /// Creates a quaternion from its scalar and vector parts.
    pub const fn new(w: f32, v: Vec3) -> Self {
        Self { w, v }
    }

    /// X component of the vector part.
    pub const fn x(&self) -> f32 {
        self.v.x()
    }

    /// Y component of the vector part.
    pub const fn y(&self) -> f32 {
        self.v.y()
    }

    /// Z component of the vector part.
    pub const fn z(&self) -> f32 {
        self.v.z()
    }

    /// Component-wise sum.
    pub fn add(self, other: Self) -> Self {
        Self::new(self.w + other.w, self.v.add(other.v))
    }

    /// Writes `a + b` into `self`.
    pub fn add_of(&mut self, a: &Self, b: &Self) -> &mut Self {
        *self = a.add(*b);
        self
    }

    /// `self += other`.
    pub fn add_with(&mut self, other: &Self) -> &mut Self {
        *self = self.add(*other);
        self
    }

    /// Component-wise difference.
    pub fn sub(self, other: Self) -> Self {
        Self::new(self.w - other.w, self.v.sub(other.v))
    }

    /// Writes `a - b` into `self`.
    pub fn sub_of(&mut self, a: &Self, b: &Self) -> &mut Self {
        *self = a.sub(*b);
        self
    }

    /// `self -= other`.
    pub fn sub_with(&mut self, other: &Self) -> &mut Self {
        *self = self.sub(*other);
        self
    }

    /// Multiplies every component by `s`.
    pub fn scale(self, s: f32) -> Self {
        Self::new(self.w * s, self.v.mul(s))
    }

    /// Writes `q * s` into `self`.
    pub fn scale_of(&mut self, q: &Self, s: f32) -> &mut Self {
        *self = q.scale(s);
        self
    }

    /// `self *= s`.
    pub fn scale_with(&mut self, s: f32) -> &mut Self {
        *self = self.scale(s);
        self
    }

    /// Hamilton product `self · other`.
    ///
    /// Operand order matters: the result applies `other` first, then
    /// `self`, when used as a rotation.
    pub fn mul(self, other: Self) -> Self {
        let w = self.w * other.w - self.v.dot(other.v);
        let mut v = self.v.cross(other.v);
        v.add_scaled_vec(self.w, &other.v);
        v.add_scaled_vec(other.w, &self.v);
        Self::new(w, v)
    }

    /// Writes `a · b` into `self`.
    pub fn mul_of(&mut self, a: &Self, b: &Self) -> &mut Self {
        *self = a.mul(*b);
        self
    }

    /// `self = self · other`.
    pub fn mul_with(&mut self, other: &Self) -> &mut Self {
        *self = self.mul(*other);
        self
    }

    /// Four-component dot product.
    pub fn dot(self, other: Self) -> f32 {
        self.w * other.w + self.v.dot(other.v)
    }

    /// Squared norm.
    pub fn len2(self) -> f32 {
        self.dot(self)
    }

    /// Norm.
    pub fn len(self) -> f32 {
        self.len2().sqrt()
    }

    /// `(w, -v)`.
    pub fn conjugate(self) -> Self {
        Self::new(self.w, self.v.inverse())
    }

    /// Writes the conjugate of `q` into `self`.
    pub fn conjugate_of(&mut self, q: &Self) -> &mut Self {
        *self = q.conjugate();
        self
    }

    /// Multiplicative inverse `q* / |q|²`.
    pub fn inverse(self) -> Self {
        self.conjugate().scale(1.0 / self.len2())
    }

    /// Writes the inverse of `q` into `self`.
    pub fn inverse_of(&mut self, q: &Self) -> &mut Self {
        *self = q.inverse();
        self
    }

    /// Normalized copy; see [`Quat::set_normalized_of`] for edge cases.
    pub fn normalized(self) -> Self {
        let mut out = self;
        out.normalize();
        out
    }

    /// Normalizes in place.
    pub fn normalize(&mut self) -> &mut Self {
        let q = *self;
        self.set_normalized_of(&q)
    }

    /// Writes `q / |q|` into `self`.
    ///
    /// - `|q| ≈ 1` copies `q` untouched;
    /// - `|q| = 0` writes the identity;
    /// - `|q| = +∞` divides by `f32::MAX` instead.
    pub fn set_normalized_of(&mut self, q: &Self) -> &mut Self {
        let mut len = q.len();
        if float_equal(len, 1.0) {
            *self = *q;
            return self;
        }
        if len == 0.0 {
            *self = Self::IDENT;
            return self;
        }
        if len == f32::INFINITY {
            len = MAX_VALUE;
        }
        *self = q.scale(1.0 / len);
        self
    }

    /// Rotates `v` by this (unit) quaternion.
    ///
    /// Uses `v + 2w(V×v) + 2V×(V×v)`, which avoids the two full products of
    /// `q·(0,v)·q*`.
    pub fn rotate(self, v: Vec3) -> Vec3 {
        let cross = self.v.cross(v);
        let mut out = v;
        out.add_scaled_vec(2.0 * self.w, &cross);
        out.add_with(&self.v.mul(2.0).cross(cross));
        out
    }

    /// Equivalent 3×3 rotation matrix.
    pub fn mat3(self) -> Mat3 {
        self.mat4().mat3()
    }

    /// Equivalent homogeneous rotation matrix.
    pub fn mat4(self) -> Mat4 {
        let Self { w, v } = self;
        let [x, y, z] = v.to_array();
        Mat4::new([
            1.0 - 2.0 * y * y - 2.0 * z * z,
            2.0 * x * y + 2.0 * w * z,
            2.0 * x * z - 2.0 * w * y,
            0.0,
            2.0 * x * y - 2.0 * w * z,
            1.0 - 2.0 * x * x - 2.0 * z * z,
            2.0 * y * z + 2.0 * w * x,
            0.0,
            2.0 * x * z + 2.0 * w * y,
            2.0 * y * z - 2.0 * w * x,
            1.0 - 2.0 * x * x - 2.0 * y * y,
            0.0,
            0.0,
            0.0,
            0.0,
            1.0,
        ])
    }

    /// Exact component equality.
    pub fn equal(self, other: Self) -> bool {
        self == other
    }

    /// Component-wise [`float_equal`].
    pub fn approx_eq(self, other: Self) -> bool {
        self.approx_func_eq(other, float_equal)
    }

    /// Component-wise [`float_equal_threshold`].
    pub fn approx_eq_threshold(self, other: Self, epsilon: f32) -> bool {
        self.approx_func_eq(other, |a, b| float_equal_threshold(a, b, epsilon))
    }

    /// Component-wise equality under a caller-supplied predicate.
    pub fn approx_func_eq(self, other: Self, eq: impl Fn(f32, f32) -> bool) -> bool {
        eq(self.w, other.w) && self.v.approx_func_eq(other.v, eq)
    }

    /// `true` when both describe the same orientation (`q ≈ ±other`).
    pub fn orientation_eq(self, other: Self) -> bool {
        self.orientation_eq_threshold(other, crate::epsilon())
    }

    /// [`Quat::orientation_eq`] with a caller-supplied tolerance.
    pub fn orientation_eq_threshold(self, other: Self, epsilon: f32) -> bool {
        let dot = self.normalized().dot(other.normalized());
        float_equal_threshold(dot.abs(), 1.0, epsilon)
    }
}

impl Add for Quat {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Quat::add(self, rhs)
    }
}

impl Sub for Quat {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Quat::sub(self, rhs)
    }
}

impl Mul for Quat {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        Quat::mul(self, rhs)
    }
}

impl Mul<f32> for Quat {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self {
        self.scale(rhs)
    }
}

impl Neg for Quat {
    type Output = Self;
    fn neg(self) -> Self {
        self.scale(-1.0)
    }
}

impl fmt::Display for Quat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.w, self.v)
    }
}

/// Returns [`Quat::IDENT`].
pub const fn quat_ident() -> Quat {
    Quat::IDENT
}

/// Rotation of `angle` radians about a unit `axis`.
pub fn quat_rotate(angle: f32, axis: Vec3) -> Quat {
    let (s, c) = (angle * 0.5).sin_cos();
    Quat::new(c, axis.mul(s))
}

/// Axis of a single Euler rotation.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Axis {
    X,
    Y,
    Z,
}

/// Order in which [`angles_to_quat`] composes its three rotations.
///
/// Tait–Bryan orders use three distinct axes; proper Euler orders repeat
/// the first axis last. For `Abc`, the result is `q_A(a₁)·q_B(a₂)·q_C(a₃)`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[allow(clippy::upper_case_acronyms)]
pub enum EulerOrder {
    /// X, then Y, then Z.
    XYZ,
    /// X, then Z, then Y.
    XZY,
    /// Y, then X, then Z.
    YXZ,
    /// Y, then Z, then X.
    YZX,
    /// Z, then X, then Y.
    ZXY,
    /// Z, then Y, then X.
    ZYX,
    /// X, then Y, then X.
    XYX,
    /// X, then Z, then X.
    XZX,
    /// Y, then X, then Y.
    YXY,
    /// Y, then Z, then Y.
    YZY,
    /// Z, then X, then Z.
    ZXZ,
    /// Z, then Y, then Z.
    ZYZ,
}

impl EulerOrder {
    /// Every recognized order.
    pub const ALL: [Self; 12] = [
        Self::XYZ,
        Self::XZY,
        Self::YXZ,
        Self::YZX,
        Self::ZXY,
        Self::ZYX,
        Self::XYX,
        Self::XZX,
        Self::YXY,
        Self::YZY,
        Self::ZXZ,
        Self::ZYZ,
    ];

    fn axes(self) -> [Axis; 3] {
        use Axis::{X, Y, Z};
        match self {
            Self::XYZ => [X, Y, Z],
            Self::XZY => [X, Z, Y],
            Self::YXZ => [Y, X, Z],
            Self::YZX => [Y, Z, X],
            Self::ZXY => [Z, X, Y],
            Self::ZYX => [Z, Y, X],
            Self::XYX => [X, Y, X],
            Self::XZX => [X, Z, X],
            Self::YXY => [Y, X, Y],
            Self::YZY => [Y, Z, Y],
            Self::ZXZ => [Z, X, Z],
            Self::ZYZ => [Z, Y, Z],
        }
    }

    /// Upper-case name, e.g. `"ZYX"`.
    pub const fn name(self) -> &'static str {
        match self {
            Self::XYZ => "XYZ",
            Self::XZY => "XZY",
            Self::YXZ => "YXZ",
            Self::YZX => "YZX",
            Self::ZXY => "ZXY",
            Self::ZYX => "ZYX",
            Self::XYX => "XYX",
            Self::XZX => "XZX",
            Self::YXY => "YXY",
            Self::YZY => "YZY",
            Self::ZXZ => "ZXZ",
            Self::ZYZ => "ZYZ",
        }
    }
}

impl FromStr for EulerOrder {
    type Err = MathError;

    /// Parses an order name case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|order| order.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| MathError::UnknownEulerOrder(s.to_owned()))
    }
}

impl fmt::Display for EulerOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Builds a rotation from three Euler angles composed in `order`.
pub fn angles_to_quat(angle1: f32, angle2: f32, angle3: f32, order: EulerOrder) -> Quat {
    let half = |angle: f32, axis: Axis| {
        let (s, c) = (angle * 0.5).sin_cos();
        let v = match axis {
            Axis::X => Vec3::new(s, 0.0, 0.0),
            Axis::Y => Vec3::new(0.0, s, 0.0),
            Axis::Z => Vec3::new(0.0, 0.0, s),
        };
        Quat::new(c, v)
    };
    let [a1, a2, a3] = order.axes();
    half(angle1, a1).mul(half(angle2, a2)).mul(half(angle3, a3))
}

/// Converts the rotation part of `m` to a quaternion (Shepperd's method).
///
/// Branches on the trace, then on the largest diagonal entry, so the square
/// root is always taken of the largest available quantity.
pub fn mat4_to_quat(m: &Mat4) -> Quat {
    let m = m.as_slice();
    let (m00, m11, m22) = (m[0], m[5], m[10]);
    let trace = m00 + m11 + m22;
    if trace > 0.0 {
        let s = 0.5 / (trace + 1.0).sqrt();
        Quat::new(
            0.25 / s,
            Vec3::new((m[6] - m[9]) * s, (m[8] - m[2]) * s, (m[1] - m[4]) * s),
        )
    } else if m00 > m11 && m00 > m22 {
        let s = 2.0 * (1.0 + m00 - m11 - m22).sqrt();
        Quat::new(
            (m[6] - m[9]) / s,
            Vec3::new(0.25 * s, (m[4] + m[1]) / s, (m[8] + m[2]) / s),
        )
    } else if m11 > m22 {
        let s = 2.0 * (1.0 + m11 - m00 - m22).sqrt();
        Quat::new(
            (m[8] - m[2]) / s,
            Vec3::new((m[4] + m[1]) / s, 0.25 * s, (m[9] + m[6]) / s),
        )
    } else {
        let s = 2.0 * (1.0 + m22 - m00 - m11).sqrt();
        Quat::new(
            (m[1] - m[4]) / s,
            Vec3::new((m[8] + m[2]) / s, (m[9] + m[6]) / s, 0.25 * s),
        )
    }
}

/// Shortest rotation taking direction `start` to direction `dest`.
///
/// Inputs need not be unit length. Opposite directions rotate by π about
/// an axis perpendicular to `start`.
pub fn quat_between_vectors(start: Vec3, dest: Vec3) -> Quat {
    const NEAR_OPPOSITE: f32 = 0.001;

    let start = start.normalized();
    let dest = dest.normalized();
    let cos = start.dot(dest);
    if cos < -1.0 + NEAR_OPPOSITE {
        let mut axis = Vec3::UNIT_X.cross(start);
        if axis.len2() < NEAR_OPPOSITE {
            axis = Vec3::UNIT_Y.cross(start);
        }
        return quat_rotate(PI, axis.normalized());
    }
    let axis = start.cross(dest);
    let s = ((1.0 + cos) * 2.0).sqrt();
    Quat::new(s * 0.5, axis.mul(1.0 / s))
}

/// Camera orientation looking from `eye` towards `center` with `up` as the
/// preferred up direction.
///
/// The result is the inverse of the rotation taking the camera's default
/// frame (looking down −Z, +Y up) to the requested frame.
pub fn quat_look_at_v(eye: Vec3, center: Vec3, up: Vec3) -> Quat {
    let direction = center.sub(eye).normalized();
    let rot_dir = quat_between_vectors(Vec3::new(0.0, 0.0, -1.0), direction);
    let current_up = rot_dir.rotate(Vec3::UNIT_Y);
    let rot_up = quat_between_vectors(current_up, up);
    rot_up.mul(rot_dir).inverse()
}

/// `a + t·(b − a)`; neither normalized nor constant-speed.
pub fn quat_lerp(a: Quat, b: Quat, t: f32) -> Quat {
    a.add(b.sub(a).scale(t))
}

/// Normalized [`quat_lerp`].
pub fn quat_nlerp(a: Quat, b: Quat, t: f32) -> Quat {
    quat_lerp(a, b, t).normalized()
}

/// Constant-angular-speed interpolation between `a` and `b`.
///
/// Both inputs are normalized first. Nearly parallel inputs
/// (`dot > SLERP_NLERP_THRESHOLD`) use [`quat_nlerp`].
pub fn quat_slerp(a: Quat, b: Quat, t: f32) -> Quat {
    let a = a.normalized();
    let b = b.normalized();
    let dot = a.dot(b);
    if dot > SLERP_NLERP_THRESHOLD {
        return quat_nlerp(a, b, t);
    }
    let dot = clamp(dot, -1.0, 1.0);
    let theta = dot.acos() * t;
    let rel = b.sub(a.scale(dot)).normalized();
    let (s, c) = theta.sin_cos();
    a.scale(c).add(rel.scale(s))
}
