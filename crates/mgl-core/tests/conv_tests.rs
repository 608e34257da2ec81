// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
use mgl_core::conv::{
    cartesian_to_cylindrical, cartesian_to_spherical, cylindrical_to_spherical,
    spherical_to_cartesian, spherical_to_cylindrical,
};
use proptest::prelude::*;

fn approx_eq3(a: [f32; 3], b: [f32; 3], tol: f32) {
    for i in 0..3 {
        let diff = (a[i] - b[i]).abs();
        assert!(diff <= tol, "index {i}: {a:?} vs {b:?}, diff={diff}, tol={tol}");
    }
}

#[test]
fn spherical_seed_case() {
    let [r, theta, phi] = cartesian_to_spherical(5.0, 12.0, 9.0);
    approx_eq3([r, theta, phi], [15.8114, 0.96525, 1.17601], 1e-4);
    approx_eq3(spherical_to_cartesian(r, theta, phi), [5.0, 12.0, 9.0], 1e-4);
}

#[test]
fn spherical_matches_libm_oracle() {
    let (x, y, z) = (-3.5f32, 0.25f32, -7.0f32);
    let r = libm::sqrtf(x * x + y * y + z * z);
    let expected = [r, libm::acosf(z / r), libm::atan2f(y, x)];
    approx_eq3(cartesian_to_spherical(x, y, z), expected, 1e-6);
    let expected = [libm::hypotf(x, y), libm::atan2f(y, x), z];
    approx_eq3(cartesian_to_cylindrical(x, y, z), expected, 1e-6);
}

proptest! {
    #[test]
    fn cylindrical_routes_agree(c in prop::array::uniform3(-50.0f32..50.0)) {
        prop_assume!(c[0].hypot(c[1]) > 0.1);
        let [x, y, z] = c;
        let [r, theta, phi] = cartesian_to_spherical(x, y, z);
        let direct = cartesian_to_cylindrical(x, y, z);
        let via = spherical_to_cylindrical(r, theta, phi);
        approx_eq3(direct, via, 1e-3);
        let back = cylindrical_to_spherical(direct[0], direct[1], direct[2]);
        approx_eq3(back, [r, theta, phi], 1e-3);
    }
}
