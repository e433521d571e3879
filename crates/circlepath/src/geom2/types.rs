//! Circles, tolerances, and input validation.
//!
//! - `Circle`: center + radius; `r = 0` is a point (start/goal markers).
//! - `GeomCfg`: node rounding precision and the line-of-sight tolerance.
//! - `validate_circles`: boundary check run before any graph build.

use std::collections::HashSet;

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Caller-assigned circle identifier (unique within one circle list).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CircleId(pub u32);

impl std::fmt::Display for CircleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Circular obstacle. Immutable for the duration of one graph build.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub id: CircleId,
    pub x: f64,
    pub y: f64,
    pub r: f64,
}

impl Circle {
    #[inline]
    pub fn new(id: u32, x: f64, y: f64, r: f64) -> Self {
        Self {
            id: CircleId(id),
            x,
            y,
            r,
        }
    }

    /// Zero-radius circle at `(x, y)`.
    #[inline]
    pub fn point(id: u32, x: f64, y: f64) -> Self {
        Self::new(id, x, y, 0.0)
    }

    #[inline]
    pub fn center(&self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }

    #[inline]
    pub fn is_point(&self) -> bool {
        self.r == 0.0
    }

    /// Closed-disk overlap test (touching counts).
    #[inline]
    pub fn touches(&self, other: &Circle) -> bool {
        (self.center() - other.center()).norm() <= self.r + other.r
    }
}

/// Geometry configuration (tolerances).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeomCfg {
    /// Decimal places kept when deduplicating tangent points into nodes.
    pub node_decimals: u32,
    /// A segment is blocked by circle k iff its closest approach to k's center
    /// is `<= r_k - los_eps`. Grazing within `los_eps` counts as clear.
    pub los_eps: f64,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self {
            node_decimals: 2,
            los_eps: 1e-9,
        }
    }
}

impl GeomCfg {
    /// Multiplier applied before rounding node coordinates.
    #[inline]
    pub(crate) fn node_scale(&self) -> f64 {
        10f64.powi(self.node_decimals.min(12) as i32)
    }
}

/// Malformed circle input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CircleError {
    #[error("duplicate circle id {0}")]
    DuplicateId(CircleId),
    #[error("circle {id} has negative radius {r}")]
    NegativeRadius { id: CircleId, r: f64 },
    #[error("circle {0} has a non-finite center or radius")]
    NonFinite(CircleId),
    #[error("no circle with id {0}")]
    UnknownId(CircleId),
}

/// Reject duplicate ids, negative radii, and NaN/infinite parameters.
pub fn validate_circles(circles: &[Circle]) -> Result<(), CircleError> {
    let mut seen = HashSet::with_capacity(circles.len());
    for c in circles {
        if !(c.x.is_finite() && c.y.is_finite() && c.r.is_finite()) {
            return Err(CircleError::NonFinite(c.id));
        }
        if c.r < 0.0 {
            return Err(CircleError::NegativeRadius { id: c.id, r: c.r });
        }
        if !seen.insert(c.id) {
            return Err(CircleError::DuplicateId(c.id));
        }
    }
    Ok(())
}

/// Look up a circle by id.
pub fn find_circle(circles: &[Circle], id: CircleId) -> Result<&Circle, CircleError> {
    circles
        .iter()
        .find(|c| c.id == id)
        .ok_or(CircleError::UnknownId(id))
}
