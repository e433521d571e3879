//! 2D geometry kernel.
//!
//! Purpose
//! - Stateless vector helpers shared by the bitangent calculator, the graph
//!   builder, and the search cost functions.
//! - `Circle` / `CircleId` input types, `GeomCfg` tolerances, and the
//!   boundary validation every build runs first.
//!
//! Conventions
//! - Angles are radians from `atan2`, in (−π, π].
//! - Points and offsets are `nalgebra::Vector2<f64>`.

mod types;
mod vector;

pub use types::{find_circle, validate_circles, Circle, CircleError, CircleId, GeomCfg};
pub use vector::{
    angle_difference, arc_angle, closest_point_on_segment, cross, distance, facing, interpolate,
    is_finite, normalize, polar,
};

#[cfg(test)]
mod tests;
