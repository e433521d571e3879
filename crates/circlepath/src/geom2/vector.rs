//! Point arithmetic on `Vector2<f64>`.
//!
//! Addition, subtraction, dot product, and length come from nalgebra; the
//! helpers here cover what it does not name directly (facing angles, polar
//! offsets, angular differences, segment projection).

use std::f64::consts::TAU;

use nalgebra::Vector2;

/// Substitute length for normalizing (near-)zero vectors.
pub(crate) const LEN_EPS: f64 = 1e-6;

/// Offset of length `r` in direction `a` (radians).
#[inline]
pub fn polar(r: f64, a: f64) -> Vector2<f64> {
    Vector2::new(r * a.cos(), r * a.sin())
}

/// Direction of `q` as seen from `p`, in (−π, π].
#[inline]
pub fn facing(p: Vector2<f64>, q: Vector2<f64>) -> f64 {
    let d = q - p;
    d.y.atan2(d.x)
}

/// Signed 2D cross product; positive when `q` is counterclockwise of `p`.
#[inline]
pub fn cross(p: Vector2<f64>, q: Vector2<f64>) -> f64 {
    p.x * q.y - p.y * q.x
}

#[inline]
pub fn interpolate(p: Vector2<f64>, q: Vector2<f64>, t: f64) -> Vector2<f64> {
    p + (q - p) * t
}

#[inline]
pub fn distance(p: Vector2<f64>, q: Vector2<f64>) -> f64 {
    (p - q).norm()
}

/// Unit vector along `p`; a zero vector stays (numerically) zero instead of NaN.
#[inline]
pub fn normalize(p: Vector2<f64>) -> Vector2<f64> {
    let len = p.norm();
    let d = if len > 0.0 { len } else { LEN_EPS };
    p / d
}

/// `|b − a| mod 2π`. Not symmetric across the ±π seam; see [`arc_angle`].
#[inline]
pub fn angle_difference(a: f64, b: f64) -> f64 {
    (b - a).abs() % TAU
}

/// Minor-arc angle between two facing angles, in [0, π].
#[inline]
pub fn arc_angle(a: f64, b: f64) -> f64 {
    let d = angle_difference(a, b);
    d.min(TAU - d)
}

/// Point of segment `p`–`q` closest to `c` (projection clamped to [0, 1]).
pub fn closest_point_on_segment(
    p: Vector2<f64>,
    q: Vector2<f64>,
    c: Vector2<f64>,
) -> Vector2<f64> {
    let d = q - p;
    let len2 = d.norm_squared();
    if len2 == 0.0 {
        return p;
    }
    let t = ((c - p).dot(&d) / len2).clamp(0.0, 1.0);
    interpolate(p, q, t)
}

#[inline]
pub fn is_finite(p: Vector2<f64>) -> bool {
    p.x.is_finite() && p.y.is_finite()
}
