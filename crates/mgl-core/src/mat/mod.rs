// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Column-major matrices.
//!
//! Layout contract: element `(row, col)` of an `R`-row matrix is stored at
//! linear index `col * R + row`. A `Mat4` is therefore laid out as
//! `[m00 m10 m20 m30 m01 m11 … m33]`, which is what GPU uniform uploads
//! expect. `Mat3x4` holds the first three rows of the equivalent `Mat4`
//! in the same order and always implies a fourth row of `[0 0 0 1]`.
//!
//! Singular inverses return (or write) the zero matrix when
//! `|det| < epsilon()`. This is a sentinel, not an error.

// Element-wise algebra shared by every matrix shape.
macro_rules! impl_mat_common {
    ($name:ident, $rows:literal, $cols:literal, $len:literal) => {
        impl $name {
            /// Number of rows.
            pub const ROWS: usize = $rows;
            /// Number of columns.
            pub const COLS: usize = $cols;

            /// Matrix with every element zero.
            pub const ZERO: Self = Self { data: [0.0; $len] };

            /// Creates a matrix from column-major data.
            pub const fn new(data: [f32; $len]) -> Self {
                Self { data }
            }

            /// Returns the zero matrix.
            pub const fn zero() -> Self {
                Self::ZERO
            }

            /// Returns the column-major storage.
            pub const fn to_array(self) -> [f32; $len] {
                self.data
            }

            /// Borrows the column-major storage.
            pub fn as_slice(&self) -> &[f32] {
                &self.data
            }

            /// Mutably borrows the column-major storage.
            pub fn as_mut_slice(&mut self) -> &mut [f32] {
                &mut self.data
            }

            /// Linear index of `(row, col)` in the column-major storage.
            #[inline]
            pub const fn linear_index(row: usize, col: usize) -> usize {
                col * $rows + row
            }

            /// Element at `(row, col)`.
            ///
            /// # Panics
            /// Panics if `row` or `col` is out of range.
            #[inline]
            pub fn at(&self, row: usize, col: usize) -> f32 {
                self.data[Self::linear_index(row, col)]
            }

            /// Sets element `(row, col)`.
            #[inline]
            pub fn set(&mut self, row: usize, col: usize, value: f32) -> &mut Self {
                self.data[Self::linear_index(row, col)] = value;
                self
            }

            /// Element-wise sum.
            pub fn add(self, other: Self) -> Self {
                let mut out = self;
                out.add_with(&other);
                out
            }

            /// Writes `a + b` into `self`.
            pub fn add_of(&mut self, a: &Self, b: &Self) -> &mut Self {
                for i in 0..$len {
                    self.data[i] = a.data[i] + b.data[i];
                }
                self
            }

            /// `self += other`.
            pub fn add_with(&mut self, other: &Self) -> &mut Self {
                let a = *self;
                self.add_of(&a, other)
            }

            /// Element-wise difference.
            pub fn sub(self, other: Self) -> Self {
                let mut out = self;
                out.sub_with(&other);
                out
            }

            /// Writes `a - b` into `self`.
            pub fn sub_of(&mut self, a: &Self, b: &Self) -> &mut Self {
                for i in 0..$len {
                    self.data[i] = a.data[i] - b.data[i];
                }
                self
            }

            /// `self -= other`.
            pub fn sub_with(&mut self, other: &Self) -> &mut Self {
                let a = *self;
                self.sub_of(&a, other)
            }

            /// Multiplies every element by `s`.
            pub fn scale(self, s: f32) -> Self {
                let mut out = self;
                out.scale_with(s);
                out
            }

            /// Writes `m * s` into `self`.
            pub fn scale_of(&mut self, m: &Self, s: f32) -> &mut Self {
                for i in 0..$len {
                    self.data[i] = m.data[i] * s;
                }
                self
            }

            /// `self *= s`.
            pub fn scale_with(&mut self, s: f32) -> &mut Self {
                let a = *self;
                self.scale_of(&a, s)
            }

            /// Element-wise absolute value.
            pub fn abs(self) -> Self {
                let mut out = self;
                out.abs_self();
                out
            }

            /// Writes the element-wise absolute value of `m` into `self`.
            pub fn abs_of(&mut self, m: &Self) -> &mut Self {
                for i in 0..$len {
                    self.data[i] = m.data[i].abs();
                }
                self
            }

            /// Replaces every element by its absolute value.
            pub fn abs_self(&mut self) -> &mut Self {
                let a = *self;
                self.abs_of(&a)
            }

            /// Exact element-wise equality.
            pub fn equal(&self, other: &Self) -> bool {
                self.data == other.data
            }

            /// Element-wise [`crate::float_equal`].
            pub fn approx_eq(&self, other: &Self) -> bool {
                self.approx_func_eq(other, crate::scalar::float_equal)
            }

            /// Element-wise [`crate::float_equal_threshold`] with `epsilon`.
            pub fn approx_eq_threshold(&self, other: &Self, epsilon: f32) -> bool {
                self.approx_func_eq(other, |a, b| {
                    crate::scalar::float_equal_threshold(a, b, epsilon)
                })
            }

            /// Element-wise equality under a caller-supplied predicate.
            pub fn approx_func_eq(&self, other: &Self, eq: impl Fn(f32, f32) -> bool) -> bool {
                self.data.iter().zip(other.data.iter()).all(|(a, b)| eq(*a, *b))
            }
        }

        impl From<[f32; $len]> for $name {
            fn from(value: [f32; $len]) -> Self {
                Self { data: value }
            }
        }

        impl From<$name> for [f32; $len] {
            fn from(value: $name) -> Self {
                value.data
            }
        }

        impl core::ops::Index<(usize, usize)> for $name {
            type Output = f32;
            fn index(&self, (row, col): (usize, usize)) -> &f32 {
                &self.data[Self::linear_index(row, col)]
            }
        }

        impl core::ops::IndexMut<(usize, usize)> for $name {
            fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f32 {
                &mut self.data[Self::linear_index(row, col)]
            }
        }

        impl core::ops::Add for $name {
            type Output = Self;
            fn add(self, rhs: Self) -> Self {
                $name::add(self, rhs)
            }
        }

        impl core::ops::Sub for $name {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self {
                $name::sub(self, rhs)
            }
        }

        impl core::ops::Neg for $name {
            type Output = Self;
            fn neg(self) -> Self {
                $name::scale(self, -1.0)
            }
        }

        impl core::ops::Mul<f32> for $name {
            type Output = Self;
            fn mul(self, rhs: f32) -> Self {
                $name::scale(self, rhs)
            }
        }

        impl core::ops::AddAssign for $name {
            fn add_assign(&mut self, rhs: Self) {
                self.add_with(&rhs);
            }
        }

        impl core::ops::SubAssign for $name {
            fn sub_assign(&mut self, rhs: Self) {
                self.sub_with(&rhs);
            }
        }

        impl core::fmt::Display for $name {
            // Row-major, one row per line, for human eyes.
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                for row in 0..$rows {
                    for col in 0..$cols {
                        if col > 0 {
                            write!(f, "\t")?;
                        }
                        write!(f, "{:.6}", self.at(row, col))?;
                    }
                    writeln!(f)?;
                }
                Ok(())
            }
        }
    };
}

// Square-matrix algebra. `$vec` is the matching column/row vector type; the
// type-specific `determinant` and `inverse_of` live next to each struct.
macro_rules! impl_mat_square {
    ($name:ident, $vec:ident, $n:literal, $len:literal) => {
        impl $name {
            /// Identity matrix.
            pub const IDENT: Self = {
                let mut data = [0.0; $len];
                let mut i = 0;
                while i < $n {
                    data[i * $n + i] = 1.0;
                    i += 1;
                }
                Self { data }
            };

            /// Returns the identity matrix.
            pub const fn identity() -> Self {
                Self::IDENT
            }

            /// Diagonal matrix with `v` on the diagonal.
            pub fn diag(v: $vec) -> Self {
                let mut out = Self::ZERO;
                for i in 0..$n {
                    out.data[i * $n + i] = v[i];
                }
                out
            }

            /// Builds a matrix from row vectors.
            pub fn from_rows(rows: [$vec; $n]) -> Self {
                let mut out = Self::ZERO;
                for (r, row) in rows.iter().enumerate() {
                    out.set_row(r, *row);
                }
                out
            }

            /// Builds a matrix from column vectors.
            pub fn from_cols(cols: [$vec; $n]) -> Self {
                let mut out = Self::ZERO;
                for (c, col) in cols.iter().enumerate() {
                    out.set_col(c, *col);
                }
                out
            }

            /// Row `r` as a vector.
            pub fn row(&self, r: usize) -> $vec {
                let mut v = $vec::ZERO;
                for c in 0..$n {
                    v[c] = self.at(r, c);
                }
                v
            }

            /// All rows, top to bottom.
            pub fn rows(&self) -> [$vec; $n] {
                core::array::from_fn(|r| self.row(r))
            }

            /// Column `c` as a vector.
            pub fn col(&self, c: usize) -> $vec {
                let mut v = $vec::ZERO;
                for r in 0..$n {
                    v[r] = self.at(r, c);
                }
                v
            }

            /// All columns, left to right.
            pub fn cols(&self) -> [$vec; $n] {
                core::array::from_fn(|c| self.col(c))
            }

            /// Overwrites column `c`.
            pub fn set_col(&mut self, c: usize, v: $vec) -> &mut Self {
                for r in 0..$n {
                    self.data[c * $n + r] = v[r];
                }
                self
            }

            /// Overwrites row `r`.
            pub fn set_row(&mut self, r: usize, v: $vec) -> &mut Self {
                for c in 0..$n {
                    self.data[c * $n + r] = v[c];
                }
                self
            }

            /// Sum of the diagonal.
            pub fn trace(&self) -> f32 {
                let mut sum = 0.0;
                for i in 0..$n {
                    sum += self.data[i * $n + i];
                }
                sum
            }

            /// Matrix product `self · other`.
            pub fn mat_mul(self, other: Self) -> Self {
                let mut out = Self::ZERO;
                out.mat_mul_of(&self, &other);
                out
            }

            /// Writes `a · b` into `self`.
            pub fn mat_mul_of(&mut self, a: &Self, b: &Self) -> &mut Self {
                for c in 0..$n {
                    for r in 0..$n {
                        let mut sum = 0.0;
                        for k in 0..$n {
                            sum += a.data[k * $n + r] * b.data[c * $n + k];
                        }
                        self.data[c * $n + r] = sum;
                    }
                }
                self
            }

            /// `self = self · other`.
            pub fn mat_mul_with(&mut self, other: &Self) -> &mut Self {
                let a = *self;
                self.mat_mul_of(&a, other)
            }

            /// Matrix-vector product `self · v`.
            pub fn mul_vec(&self, v: $vec) -> $vec {
                let mut out = $vec::ZERO;
                for i in 0..$n {
                    let mut sum = 0.0;
                    for j in 0..$n {
                        sum += self.data[j * $n + i] * v[j];
                    }
                    out[i] = sum;
                }
                out
            }

            /// Transposed copy.
            pub fn transposed(self) -> Self {
                let mut out = Self::ZERO;
                out.transpose_of(&self);
                out
            }

            /// Writes `mᵀ` into `self`.
            pub fn transpose_of(&mut self, m: &Self) -> &mut Self {
                for r in 0..$n {
                    for c in 0..$n {
                        self.data[c * $n + r] = m.data[r * $n + c];
                    }
                }
                self
            }

            /// Transposes in place.
            pub fn transpose(&mut self) -> &mut Self {
                let a = *self;
                self.transpose_of(&a)
            }

            /// Inverse, or the zero matrix when `|det| < epsilon()`.
            pub fn inverse(self) -> Self {
                let mut out = Self::ZERO;
                out.inverse_of(&self);
                out
            }

            /// Inverts in place; writes zeros when singular.
            pub fn invert(&mut self) -> &mut Self {
                let a = *self;
                self.inverse_of(&a)
            }
        }

        impl core::ops::Mul for $name {
            type Output = Self;
            fn mul(self, rhs: Self) -> Self {
                self.mat_mul(rhs)
            }
        }

        impl core::ops::Mul<$vec> for $name {
            type Output = $vec;
            fn mul(self, rhs: $vec) -> $vec {
                self.mul_vec(rhs)
            }
        }

        impl core::ops::MulAssign for $name {
            fn mul_assign(&mut self, rhs: Self) {
                self.mat_mul_with(&rhs);
            }
        }

        impl core::ops::MulAssign<&$name> for $name {
            fn mul_assign(&mut self, rhs: &Self) {
                self.mat_mul_with(rhs);
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::IDENT
            }
        }
    };
}

mod mat2;
mod mat3;
mod mat3x4;
mod mat4;
mod transforms;

pub use mat2::Mat2;
pub use mat3::Mat3;
pub use mat3x4::Mat3x4;
pub use mat4::Mat4;
