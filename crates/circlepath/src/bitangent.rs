//! Bitangent touch points between two circles.
//!
//! Internal bitangents cross between the circles (the crossed-belt case);
//! external bitangents keep both circles on the same side (the pulley case).
//! Each family yields four touch points `C, D` on `a` and `E, F` on `b`,
//! forming the segments `C–F` and `D–E`.
//!
//! A family is undefined when the arccosine argument leaves [−1, 1]:
//! overlapping circles have no internal bitangents, and a circle strictly
//! inside another has no external ones. Both functions then return `None`.

use nalgebra::Vector2;

use crate::geom2::{distance, facing, polar, Circle};

/// Eagerly computed bitangent family for one ordered circle pair.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bitangents {
    /// Angle at `a` between the center line and the radius to `C` / `D`.
    pub theta: f64,
    pub c: Vector2<f64>,
    pub d: Vector2<f64>,
    pub e: Vector2<f64>,
    pub f: Vector2<f64>,
}

impl Bitangents {
    /// The two tangent segments, `(C, F)` then `(D, E)`.
    #[inline]
    pub fn segments(&self) -> [(Vector2<f64>, Vector2<f64>); 2] {
        [(self.c, self.f), (self.d, self.e)]
    }
}

/// `acos` that reports an out-of-domain argument (or NaN from a zero
/// distance) as `None` instead of NaN.
#[inline]
fn real_acos(cos_angle: f64) -> Option<f64> {
    let theta = cos_angle.acos();
    (!theta.is_nan()).then_some(theta)
}

/// Internal (crossing) bitangents: `theta = acos((r_a + r_b) / |ab|)`.
pub fn internal(a: &Circle, b: &Circle) -> Option<Bitangents> {
    let (pa, pb) = (a.center(), b.center());
    let theta = real_acos((a.r + b.r) / distance(pa, pb))?;
    let a_to_b = facing(pa, pb);
    let b_to_a = facing(pb, pa);
    Some(Bitangents {
        theta,
        c: pa + polar(a.r, a_to_b - theta),
        d: pa + polar(a.r, a_to_b + theta),
        e: pb + polar(b.r, b_to_a + theta),
        f: pb + polar(b.r, b_to_a - theta),
    })
}

/// External (same-side) bitangents: `theta = acos((r_a − r_b) / |ab|)`.
///
/// The sign of `r_a − r_b` matters: a negative cosine (larger `b`) gives an
/// obtuse `theta`, which is still a valid configuration.
pub fn external(a: &Circle, b: &Circle) -> Option<Bitangents> {
    let (pa, pb) = (a.center(), b.center());
    let theta = real_acos((a.r - b.r) / distance(pa, pb))?;
    let a_to_b = facing(pa, pb);
    Some(Bitangents {
        theta,
        c: pa + polar(a.r, a_to_b - theta),
        d: pa + polar(a.r, a_to_b + theta),
        e: pb + polar(b.r, a_to_b + theta),
        f: pb + polar(b.r, a_to_b - theta),
    })
}

/// Internal bitangents exist (the disks do not overlap).
#[inline]
pub fn non_overlapping(a: &Circle, b: &Circle) -> bool {
    internal(a, b).is_some()
}

/// `a` does not strictly contain `b`, so external bitangents exist from `a`'s side.
#[inline]
pub fn non_containing(a: &Circle, b: &Circle) -> bool {
    distance(a.center(), b.center()) >= a.r - b.r
}
