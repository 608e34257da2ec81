// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
use mgl_core::{Mat2, Mat3, Mat3x4, Mat4, Vec3, Vec4};
use proptest::prelude::*;

const ABS_TOL: f32 = 1e-4;
const REL_TOL: f32 = 1e-4;

fn close(a: f32, b: f32) -> bool {
    let scale = a.abs().max(b.abs());
    (a - b).abs() <= ABS_TOL.max(REL_TOL * scale)
}

fn assert_mat_close(a: &[f32], b: &[f32]) {
    for (i, (x, y)) in a.iter().zip(b.iter()).enumerate() {
        assert!(close(*x, *y), "index {i}: {a:?} vs {b:?}");
    }
}

// Diagonally dominant matrices keep determinants away from zero so the
// inverse laws are well conditioned.
fn well_conditioned<const N: usize>() -> impl Strategy<Value = [f32; N]> {
    let n = (N as f64).sqrt() as usize;
    prop::array::uniform(-0.5f32..0.5).prop_flat_map(move |off: [f32; N]| {
        prop::array::uniform(2.0f32..4.0).prop_map(move |diag: [f32; 4]| {
            let mut out = off;
            for i in 0..n {
                out[i * n + i] = diag[i];
            }
            out
        })
    })
}

fn any_entries<const N: usize>() -> impl Strategy<Value = [f32; N]> {
    prop::array::uniform(-10.0f32..10.0)
}

#[test]
fn column_major_layout_is_observable() {
    let m = Mat4::from_rows([
        Vec4::new(0.0, 1.0, 2.0, 3.0),
        Vec4::new(4.0, 5.0, 6.0, 7.0),
        Vec4::new(8.0, 9.0, 10.0, 11.0),
        Vec4::new(12.0, 13.0, 14.0, 15.0),
    ]);
    assert_eq!(&m.as_slice()[..4], &[0.0, 4.0, 8.0, 12.0]);
    let bytes: &[u8] = bytemuck::bytes_of(&m);
    assert_eq!(bytes.len(), 64);
    let m34 = m.mat3x4();
    assert_eq!(m34.as_slice(), &[0.0, 4.0, 8.0, 1.0, 5.0, 9.0, 2.0, 6.0, 10.0, 3.0, 7.0, 11.0]);
}

#[test]
fn three_forms_agree_for_matrices() {
    let a = Mat3::new([1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 10.0]);
    let b = Mat3::rotate_3d_z(0.3);
    let pure = a.mat_mul(b);
    let mut of = Mat3::ZERO;
    of.mat_mul_of(&a, &b);
    let mut with = a;
    with.mat_mul_with(&b);
    assert_eq!(pure, of);
    assert_eq!(pure, with);
    assert_eq!(pure, a * b);

    let mut s = Mat3::ZERO;
    s.sub_of(&a.add(b), &b);
    assert_mat_close(s.as_slice(), a.as_slice());
    assert_eq!(a.scale(2.0), a + a);
    assert_eq!((-a).abs(), a.abs());
}

#[test]
fn display_is_row_major() {
    let m = Mat2::new([1.0, 2.0, 3.0, 4.0]);
    assert_eq!(m.to_string(), "1.000000\t3.000000\n2.000000\t4.000000\n");
}

#[test]
fn approx_eq_flavours() {
    let a = Mat2::IDENT;
    let mut b = a;
    b.set(0, 1, 1e-3);
    assert!(!a.approx_eq(&b));
    assert!(!a.approx_eq_threshold(&b, 1e-2));
    assert!(a.approx_func_eq(&b, |x, y| (x - y).abs() < 1e-2));
    assert!(a.equal(&Mat2::identity()));
}

#[test]
fn mat3x4_inverse_composes_to_identity() {
    let m = Mat3x4::from_parts(&Mat3::rotate_3d_x(0.4), Vec3::new(3.0, -1.0, 2.0));
    let id = m * m.inverse();
    assert_mat_close(id.as_slice(), Mat3x4::IDENT.as_slice());
}

proptest! {
    #[test]
    fn identity_is_neutral(e in any_entries::<16>()) {
        let m = Mat4::new(e);
        prop_assert_eq!(m * Mat4::IDENT, m);
        prop_assert_eq!(Mat4::IDENT * m, m);
        let m3 = Mat4::new(e).mat3();
        prop_assert_eq!(m3 * Mat3::IDENT, m3);
        let m2 = Mat4::new(e).mat2();
        prop_assert_eq!(Mat2::IDENT * m2, m2);
    }

    #[test]
    fn transpose_reverses_products(a in any_entries::<9>(), b in any_entries::<9>()) {
        let (a, b) = (Mat3::new(a), Mat3::new(b));
        let lhs = (a * b).transposed();
        let rhs = b.transposed() * a.transposed();
        assert_mat_close(lhs.as_slice(), rhs.as_slice());
    }

    #[test]
    fn determinant_is_multiplicative(a in well_conditioned::<16>(), b in well_conditioned::<16>()) {
        let (a, b) = (Mat4::new(a), Mat4::new(b));
        prop_assert!(close((a * b).determinant(), a.determinant() * b.determinant()));
        let (a3, b3) = (a.mat3(), b.mat3());
        prop_assert!(close((a3 * b3).determinant(), a3.determinant() * b3.determinant()));
    }

    #[test]
    fn inverse_laws_mat4(e in well_conditioned::<16>()) {
        let m = Mat4::new(e);
        assert_mat_close((m * m.inverse()).as_slice(), Mat4::IDENT.as_slice());
        assert_mat_close(m.inverse().inverse().as_slice(), m.as_slice());
        let mut inplace = m;
        inplace.invert();
        prop_assert_eq!(inplace, m.inverse());
    }

    #[test]
    fn inverse_laws_mat3_and_mat2(e in well_conditioned::<9>(), f in well_conditioned::<4>()) {
        let m = Mat3::new(e);
        assert_mat_close((m * m.inverse()).as_slice(), Mat3::IDENT.as_slice());
        assert_mat_close(m.inverse().inverse().as_slice(), m.as_slice());
        let m = Mat2::new(f);
        assert_mat_close((m * m.inverse()).as_slice(), Mat2::IDENT.as_slice());
    }

    #[test]
    fn mul_vec_matches_column_formula(e in any_entries::<16>(), v in any_entries::<4>()) {
        let m = Mat4::new(e);
        let v = Vec4::from(v);
        let out = m * v;
        for i in 0..4 {
            let expected: f32 = (0..4).map(|j| e[j * 4 + i] * v[j]).sum();
            prop_assert!(close(out[i], expected));
        }
    }
}
