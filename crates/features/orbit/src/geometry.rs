//! Vector helpers over [`Position`]: spherical points, the Fibonacci lattice and
//! Rodrigues rotation.

use starfield_domain::Position;
use std::f64::consts::TAU;

/// The golden ratio.
pub const PHI: f64 = 1.618_033_988_749_895;

/// Point at `radius` from the origin; `theta` is the azimuth, `phi` the polar angle from +z.
pub fn spherical(radius: f64, theta: f64, phi: f64) -> Position {
    let (sin_phi, cos_phi) = phi.sin_cos();
    let (sin_theta, cos_theta) = theta.sin_cos();
    Position::new(radius * sin_phi * cos_theta, radius * sin_phi * sin_theta, radius * cos_phi)
}

/// Point in the z = 0 plane at `radius` and `angle`, lifted to height `z`.
pub fn polar(radius: f64, angle: f64, z: f64) -> Position {
    let (sin, cos) = angle.sin_cos();
    Position::new(radius * cos, radius * sin, z)
}

/// Uniform direction on the unit sphere from two unit-interval samples.
pub fn unit_direction(u: f64, v: f64) -> Position {
    let theta = u * TAU;
    let phi = v.mul_add(2.0, -1.0).clamp(-1.0, 1.0).acos();
    spherical(1.0, theta, phi)
}

/// Azimuth and polar angle of lattice point `index` out of `total`.
///
/// A `total` of zero is treated as one; the polar cosine is clamped before `acos`.
pub fn fibonacci_angles(index: usize, total: usize) -> (f64, f64) {
    let total = total.max(1) as f64;
    let i = index as f64;
    let theta = TAU * i / PHI;
    let cos_phi = 1.0 - 2.0 * (i + 0.5) / total;
    (theta, cos_phi.clamp(-1.0, 1.0).acos())
}

/// Lattice point `index` of `total` on the unit sphere.
pub fn fibonacci_point(index: usize, total: usize) -> Position {
    let (theta, phi) = fibonacci_angles(index, total);
    spherical(1.0, theta, phi)
}

pub fn add(a: Position, b: Position) -> Position {
    Position::new(a.x + b.x, a.y + b.y, a.z + b.z)
}

pub fn scale(v: Position, k: f64) -> Position {
    Position::new(v.x * k, v.y * k, v.z * k)
}

pub fn dot(a: Position, b: Position) -> f64 {
    a.z.mul_add(b.z, a.x.mul_add(b.x, a.y * b.y))
}

pub fn cross(a: Position, b: Position) -> Position {
    Position::new(
        a.y.mul_add(b.z, -(a.z * b.y)),
        a.z.mul_add(b.x, -(a.x * b.z)),
        a.x.mul_add(b.y, -(a.y * b.x)),
    )
}

/// Rotates `v` by `angle` around the unit vector `axis` (Rodrigues' formula).
pub fn rotate(v: Position, axis: Position, angle: f64) -> Position {
    let (sin, cos) = angle.sin_cos();
    let parallel = scale(axis, dot(axis, v) * (1.0 - cos));
    add(add(scale(v, cos), scale(cross(axis, v), sin)), parallel)
}
