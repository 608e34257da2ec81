// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Coordinate-system conversions.
//!
//! Spherical coordinates are `(r, θ, φ)` with θ the polar angle from +Z and
//! φ the azimuth from +X towards +Y. Cylindrical coordinates are
//! `(ρ, φ, z)` with the same azimuth.

/// `(x, y, z)` to `(r, θ, φ)`.
///
/// The origin yields `θ = NaN`; inputs are not sanitized.
pub fn cartesian_to_spherical(x: f32, y: f32, z: f32) -> [f32; 3] {
    let r = (x * x + y * y + z * z).sqrt();
    [r, (z / r).acos(), y.atan2(x)]
}

/// `(r, θ, φ)` to `(x, y, z)`.
pub fn spherical_to_cartesian(r: f32, theta: f32, phi: f32) -> [f32; 3] {
    let (st, ct) = theta.sin_cos();
    let (sp, cp) = phi.sin_cos();
    [r * st * cp, r * st * sp, r * ct]
}

/// `(x, y, z)` to `(ρ, φ, z)`.
pub fn cartesian_to_cylindrical(x: f32, y: f32, z: f32) -> [f32; 3] {
    [x.hypot(y), y.atan2(x), z]
}

/// `(ρ, φ, z)` to `(x, y, z)`.
pub fn cylindrical_to_cartesian(rho: f32, phi: f32, z: f32) -> [f32; 3] {
    let (s, c) = phi.sin_cos();
    [rho * c, rho * s, z]
}

/// `(r, θ, φ)` to `(ρ, φ, z)`.
pub fn spherical_to_cylindrical(r: f32, theta: f32, phi: f32) -> [f32; 3] {
    let (s, c) = theta.sin_cos();
    [r * s, phi, r * c]
}

/// `(ρ, φ, z)` to `(r, θ, φ)`.
pub fn cylindrical_to_spherical(rho: f32, phi: f32, z: f32) -> [f32; 3] {
    [rho.hypot(z), rho.atan2(z), phi]
}
