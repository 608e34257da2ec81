// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Fixed-size `f32` vectors.
//!
//! There is no distinction between row and column vectors; context decides.
//! Every type is a dense `#[repr(C)]` array so slices of vectors are tightly
//! packed (`Vec3` is exactly 12 bytes).

use core::fmt;
use core::ops::{Add, AddAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};

use bytemuck::{Pod, Zeroable};

use crate::scalar::{float_equal, float_equal_threshold, MAX_VALUE};
use crate::Mat3;

// Shared component algebra for Vec2/Vec3/Vec4. Each binary operation is
// emitted as `op` (returns a value), `op_of` (writes into `self`), and
// `op_with` (updates `self` using itself as the left operand).
macro_rules! impl_vec_common {
    ($name:ident, $n:literal) => {
        impl $name {
            /// The zero vector.
            pub const ZERO: Self = Self { data: [0.0; $n] };

            /// Returns the zero vector.
            pub const fn zero() -> Self {
                Self::ZERO
            }

            /// Builds a vector from a component array.
            pub const fn from_array(data: [f32; $n]) -> Self {
                Self { data }
            }

            /// Returns the components as an array.
            pub const fn to_array(self) -> [f32; $n] {
                self.data
            }

            /// Borrows the components as a slice.
            pub fn as_slice(&self) -> &[f32] {
                &self.data
            }

            /// Mutably borrows the components as a slice.
            pub fn as_mut_slice(&mut self) -> &mut [f32] {
                &mut self.data
            }

            /// Returns component `idx`.
            ///
            /// # Panics
            /// Panics if `idx` is out of range.
            #[inline]
            pub fn elem(self, idx: usize) -> f32 {
                self.data[idx]
            }

            /// Sets every component to zero.
            pub fn set_zero(&mut self) -> &mut Self {
                self.data = [0.0; $n];
                self
            }

            /// Component-wise sum.
            #[inline]
            pub fn add(self, other: Self) -> Self {
                let mut out = self;
                out.add_with(&other);
                out
            }

            /// Writes `a + b` into `self`.
            #[inline]
            pub fn add_of(&mut self, a: &Self, b: &Self) -> &mut Self {
                for i in 0..$n {
                    self.data[i] = a.data[i] + b.data[i];
                }
                self
            }

            /// `self += other`.
            #[inline]
            pub fn add_with(&mut self, other: &Self) -> &mut Self {
                let a = *self;
                self.add_of(&a, other)
            }

            /// Component-wise difference.
            #[inline]
            pub fn sub(self, other: Self) -> Self {
                let mut out = self;
                out.sub_with(&other);
                out
            }

            /// Writes `a - b` into `self`.
            #[inline]
            pub fn sub_of(&mut self, a: &Self, b: &Self) -> &mut Self {
                for i in 0..$n {
                    self.data[i] = a.data[i] - b.data[i];
                }
                self
            }

            /// `self -= other`.
            #[inline]
            pub fn sub_with(&mut self, other: &Self) -> &mut Self {
                let a = *self;
                self.sub_of(&a, other)
            }

            /// Scales every component by `s`.
            #[inline]
            pub fn mul(self, s: f32) -> Self {
                let mut out = self;
                out.mul_with(s);
                out
            }

            /// Writes `v * s` into `self`.
            #[inline]
            pub fn mul_of(&mut self, v: &Self, s: f32) -> &mut Self {
                for i in 0..$n {
                    self.data[i] = v.data[i] * s;
                }
                self
            }

            /// `self *= s`.
            #[inline]
            pub fn mul_with(&mut self, s: f32) -> &mut Self {
                let a = *self;
                self.mul_of(&a, s)
            }

            /// Component-wise (Hadamard) product.
            #[inline]
            pub fn component_product(self, other: Self) -> Self {
                let mut out = self;
                out.component_product_with(&other);
                out
            }

            /// Writes the component-wise product of `a` and `b` into `self`.
            #[inline]
            pub fn component_product_of(&mut self, a: &Self, b: &Self) -> &mut Self {
                for i in 0..$n {
                    self.data[i] = a.data[i] * b.data[i];
                }
                self
            }

            /// Multiplies `self` component-wise by `other`.
            #[inline]
            pub fn component_product_with(&mut self, other: &Self) -> &mut Self {
                let a = *self;
                self.component_product_of(&a, other)
            }

            /// `self += v * s`.
            #[inline]
            pub fn add_scaled_vec(&mut self, s: f32, v: &Self) -> &mut Self {
                for i in 0..$n {
                    self.data[i] += v.data[i] * s;
                }
                self
            }

            /// Writes `a + v * s` into `self`.
            #[inline]
            pub fn add_scaled_vec_of(&mut self, a: &Self, s: f32, v: &Self) -> &mut Self {
                for i in 0..$n {
                    self.data[i] = a.data[i] + v.data[i] * s;
                }
                self
            }

            /// Negated copy.
            #[inline]
            pub fn inverse(self) -> Self {
                let mut out = self;
                out.inverse_with();
                out
            }

            /// Writes `-v` into `self`.
            #[inline]
            pub fn inverse_of(&mut self, v: &Self) -> &mut Self {
                for i in 0..$n {
                    self.data[i] = -v.data[i];
                }
                self
            }

            /// Negates in place.
            #[inline]
            pub fn inverse_with(&mut self) -> &mut Self {
                let a = *self;
                self.inverse_of(&a)
            }

            /// Dot product.
            #[inline]
            pub fn dot(self, other: Self) -> f32 {
                let mut sum = 0.0;
                for i in 0..$n {
                    sum += self.data[i] * other.data[i];
                }
                sum
            }

            /// Euclidean length.
            #[inline]
            pub fn len(self) -> f32 {
                self.dot(self).sqrt()
            }

            /// Squared length.
            #[inline]
            pub fn len2(self) -> f32 {
                self.dot(self)
            }

            /// Normalized copy; see [`Self::set_normalize_of`] for edge cases.
            #[inline]
            pub fn normalized(self) -> Self {
                let mut out = self;
                out.normalize();
                out
            }

            /// Normalizes in place.
            #[inline]
            pub fn normalize(&mut self) -> &mut Self {
                let a = *self;
                self.set_normalize_of(&a)
            }

            /// Writes `v / |v|` into `self`.
            ///
            /// - `|v| = 0` writes the leftmost basis vector `(1, 0, …)`.
            /// - `|v| = +∞` divides by `f32::MAX` instead.
            /// - NaN components propagate.
            pub fn set_normalize_of(&mut self, v: &Self) -> &mut Self {
                let mut len = v.len();
                if len == 0.0 {
                    self.data = [0.0; $n];
                    self.data[0] = 1.0;
                    return self;
                }
                if len == f32::INFINITY {
                    len = MAX_VALUE;
                }
                self.mul_of(v, 1.0 / len)
            }

            /// Exact component-wise equality.
            pub fn equal(self, other: Self) -> bool {
                self.data == other.data
            }

            /// Component-wise [`float_equal`].
            pub fn approx_eq(self, other: Self) -> bool {
                self.approx_func_eq(other, float_equal)
            }

            /// Component-wise [`float_equal_threshold`] with `epsilon`.
            pub fn approx_eq_threshold(self, other: Self, epsilon: f32) -> bool {
                self.approx_func_eq(other, |a, b| float_equal_threshold(a, b, epsilon))
            }

            /// Component-wise equality under a caller-supplied predicate.
            pub fn approx_func_eq(self, other: Self, eq: impl Fn(f32, f32) -> bool) -> bool {
                self.data.iter().zip(other.data.iter()).all(|(a, b)| eq(*a, *b))
            }
        }

        impl From<[f32; $n]> for $name {
            fn from(value: [f32; $n]) -> Self {
                Self { data: value }
            }
        }

        impl From<$name> for [f32; $n] {
            fn from(value: $name) -> Self {
                value.data
            }
        }

        impl Index<usize> for $name {
            type Output = f32;
            fn index(&self, idx: usize) -> &f32 {
                &self.data[idx]
            }
        }

        impl IndexMut<usize> for $name {
            fn index_mut(&mut self, idx: usize) -> &mut f32 {
                &mut self.data[idx]
            }
        }

        impl Add for $name {
            type Output = Self;
            fn add(self, rhs: Self) -> Self {
                $name::add(self, rhs)
            }
        }

        impl Sub for $name {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self {
                $name::sub(self, rhs)
            }
        }

        impl Mul<f32> for $name {
            type Output = Self;
            fn mul(self, rhs: f32) -> Self {
                $name::mul(self, rhs)
            }
        }

        impl Mul<$name> for f32 {
            type Output = $name;
            fn mul(self, rhs: $name) -> $name {
                $name::mul(rhs, self)
            }
        }

        impl Neg for $name {
            type Output = Self;
            fn neg(self) -> Self {
                $name::inverse(self)
            }
        }

        impl AddAssign for $name {
            fn add_assign(&mut self, rhs: Self) {
                self.add_with(&rhs);
            }
        }

        impl SubAssign for $name {
            fn sub_assign(&mut self, rhs: Self) {
                self.sub_with(&rhs);
            }
        }

        impl MulAssign<f32> for $name {
            fn mul_assign(&mut self, rhs: f32) {
                self.mul_with(rhs);
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "(")?;
                for (i, c) in self.data.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{c}")?;
                }
                write!(f, ")")
            }
        }
    };
}

/// 2D vector.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Default, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2 {
    data: [f32; 2],
}

/// 3D vector; points or directions depending on the calling context.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Default, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec3 {
    data: [f32; 3],
}

/// 4D vector, typically homogeneous coordinates.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Default, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec4 {
    data: [f32; 4],
}

const _: () = assert!(core::mem::size_of::<Vec2>() == 8);
const _: () = assert!(core::mem::size_of::<Vec3>() == 12);
const _: () = assert!(core::mem::size_of::<Vec4>() == 16);

impl_vec_common!(Vec2, 2);
impl_vec_common!(Vec3, 3);
impl_vec_common!(Vec4, 4);

impl Vec2 {
    /// Unit vector along +X.
    pub const UNIT_X: Self = Self::new(1.0, 0.0);
    /// Unit vector along +Y.
    pub const UNIT_Y: Self = Self::new(0.0, 1.0);

    /// Creates a vector from components.
    pub const fn new(x: f32, y: f32) -> Self {
        Self { data: [x, y] }
    }

    /// X component.
    pub const fn x(self) -> f32 {
        self.data[0]
    }

    /// Y component.
    pub const fn y(self) -> f32 {
        self.data[1]
    }

    /// Widens to 3D with the given `z`.
    pub const fn vec3(self, z: f32) -> Vec3 {
        Vec3::new(self.data[0], self.data[1], z)
    }

    /// Widens to 4D with the given tail.
    pub const fn vec4(self, z: f32, w: f32) -> Vec4 {
        Vec4::new(self.data[0], self.data[1], z, w)
    }

    /// Scalar 2D cross product (`self.x * other.y - self.y * other.x`).
    ///
    /// Positive when `other` lies counter-clockwise of `self`.
    #[inline]
    pub fn cross(self, other: Self) -> f32 {
        self.data[0] * other.data[1] - self.data[1] * other.data[0]
    }

    /// Counter-clockwise perpendicular `(-y, x)`.
    #[inline]
    pub const fn perp(self) -> Self {
        Self::new(-self.data[1], self.data[0])
    }
}

impl Vec3 {
    /// Unit vector along +X.
    pub const UNIT_X: Self = Self::new(1.0, 0.0, 0.0);
    /// Unit vector along +Y.
    pub const UNIT_Y: Self = Self::new(0.0, 1.0, 0.0);
    /// Unit vector along +Z.
    pub const UNIT_Z: Self = Self::new(0.0, 0.0, 1.0);

    /// Creates a vector from components.
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { data: [x, y, z] }
    }

    /// X component.
    pub const fn x(self) -> f32 {
        self.data[0]
    }

    /// Y component.
    pub const fn y(self) -> f32 {
        self.data[1]
    }

    /// Z component.
    pub const fn z(self) -> f32 {
        self.data[2]
    }

    /// Drops `z`.
    pub const fn vec2(self) -> Vec2 {
        Vec2::new(self.data[0], self.data[1])
    }

    /// Widens to 4D with the given `w`.
    pub const fn vec4(self, w: f32) -> Vec4 {
        Vec4::new(self.data[0], self.data[1], self.data[2], w)
    }

    /// Cross product `self × other`.
    #[inline]
    pub fn cross(self, other: Self) -> Self {
        let mut out = Self::ZERO;
        out.cross_of(&self, &other);
        out
    }

    /// Writes `a × b` into `self`; both operands are read before writing.
    #[inline]
    pub fn cross_of(&mut self, a: &Self, b: &Self) -> &mut Self {
        let [ax, ay, az] = a.data;
        let [bx, by, bz] = b.data;
        self.data = [ay * bz - az * by, az * bx - ax * bz, ax * by - ay * bx];
        self
    }

    /// `self = self × other`.
    #[inline]
    pub fn cross_with(&mut self, other: &Self) -> &mut Self {
        let a = *self;
        self.cross_of(&a, other)
    }

    /// Outer product `self · otherᵀ`.
    pub fn outer_product(self, other: Self) -> Mat3 {
        let [a0, a1, a2] = self.data;
        let [b0, b1, b2] = other.data;
        Mat3::new([
            a0 * b0, a1 * b0, a2 * b0, //
            a0 * b1, a1 * b1, a2 * b1, //
            a0 * b2, a1 * b2, a2 * b2,
        ])
    }
}

impl Vec4 {
    /// Creates a vector from components.
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { data: [x, y, z, w] }
    }

    /// X component.
    pub const fn x(self) -> f32 {
        self.data[0]
    }

    /// Y component.
    pub const fn y(self) -> f32 {
        self.data[1]
    }

    /// Z component.
    pub const fn z(self) -> f32 {
        self.data[2]
    }

    /// W component.
    pub const fn w(self) -> f32 {
        self.data[3]
    }

    /// Drops `z` and `w`.
    pub const fn vec2(self) -> Vec2 {
        Vec2::new(self.data[0], self.data[1])
    }

    /// Drops `w`.
    pub const fn vec3(self) -> Vec3 {
        Vec3::new(self.data[0], self.data[1], self.data[2])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_forms_agree() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(-4.0, 0.5, 2.0);
        let pure = a.add(b);
        let mut of = Vec3::ZERO;
        of.add_of(&a, &b);
        let mut with = a;
        with.add_with(&b);
        assert_eq!(pure, of);
        assert_eq!(pure, with);
        assert_eq!(pure, a + b);
    }

    #[test]
    fn normalize_edge_cases() {
        assert_eq!(Vec3::ZERO.normalized(), Vec3::UNIT_X);
        assert_eq!(Vec2::ZERO.normalized(), Vec2::UNIT_X);
        let inf = Vec3::new(f32::INFINITY, 0.0, 0.0).normalized();
        assert_eq!(inf.x(), f32::INFINITY / f32::MAX);
        let n = Vec4::new(3.0, 0.0, 4.0, 0.0).normalized();
        assert!((n.len() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn cross_with_aliases_safely() {
        let mut v = Vec3::UNIT_X;
        v.cross_with(&Vec3::UNIT_Y);
        assert_eq!(v, Vec3::UNIT_Z);
    }

    #[test]
    fn widen_and_narrow() {
        let v = Vec2::new(1.0, 2.0).vec3(3.0).vec4(4.0);
        assert_eq!(v.to_array(), [1.0, 2.0, 3.0, 4.0]);
        assert_eq!(v.vec3().vec2(), Vec2::new(1.0, 2.0));
    }
}
