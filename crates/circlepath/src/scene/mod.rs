//! Scenes: an obstacle list plus the start and goal markers.
//!
//! - `Scene`: the bundle the CLI reads and writes as JSON.
//! - Reference layouts (`belt_pair`, `all_edges`, `busy_edges`).
//! - `position_is_clear`: drag-target check used by interactive hosts.
//! - `rand`: reproducible random layouts for tests and benches.

pub mod rand;

use serde::{Deserialize, Serialize};

use crate::geom2::{distance, find_circle, Circle, CircleError, CircleId};

/// Obstacles plus the ids of the zero-radius start and goal circles.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub circles: Vec<Circle>,
    pub start: CircleId,
    pub goal: CircleId,
}

impl Scene {
    pub fn start_circle(&self) -> Result<&Circle, CircleError> {
        find_circle(&self.circles, self.start)
    }

    pub fn goal_circle(&self) -> Result<&Circle, CircleError> {
        find_circle(&self.circles, self.goal)
    }

    /// Obstacles only (start and goal removed).
    pub fn obstacles(&self) -> impl Iterator<Item = &Circle> + '_ {
        self.circles
            .iter()
            .filter(move |c| c.id != self.start && c.id != self.goal)
    }
}

/// Whether circle `index` may move to `(x, y)` without touching another circle.
///
/// Returns `false` for an out-of-range `index`.
pub fn position_is_clear(circles: &[Circle], index: usize, x: f64, y: f64) -> bool {
    let Some(moving) = circles.get(index) else {
        return false;
    };
    let target = nalgebra::Vector2::new(x, y);
    circles
        .iter()
        .enumerate()
        .all(|(k, c)| k == index || distance(target, c.center()) > c.r + moving.r)
}

/// Two circles of the belt/pulley diagrams; no start or goal.
pub fn belt_pair() -> [Circle; 2] {
    [
        Circle::new(0, 150.0, 150.0, 130.0),
        Circle::new(1, 450.0, 150.0, 50.0),
    ]
}

/// Three obstacles, sorted by decreasing radius, used to show every tangent.
///
/// Start and goal are absent; `start`/`goal` point at the first two circles
/// only so the value round-trips as a `Scene`.
pub fn all_edges() -> Scene {
    Scene {
        circles: vec![
            Circle::new(0, 340.0, 200.0, 90.0),
            Circle::new(1, 80.0, 200.0, 70.0),
            Circle::new(2, 505.0, 65.0, 50.0),
        ],
        start: CircleId(0),
        goal: CircleId(1),
    }
}

/// Six obstacles plus start (20, 20) and goal (570, 280).
pub fn busy_edges() -> Scene {
    Scene {
        circles: vec![
            Circle::new(0, 180.0, 100.0, 55.0),
            Circle::new(1, 240.0, 230.0, 30.0),
            Circle::new(2, 340.0, 200.0, 30.0),
            Circle::new(3, 505.0, 65.0, 25.0),
            Circle::new(4, 405.0, 255.0, 20.0),
            Circle::new(5, 80.0, 200.0, 20.0),
            Circle::point(6, 20.0, 20.0),
            Circle::point(7, 570.0, 280.0),
        ],
        start: CircleId(6),
        goal: CircleId(7),
    }
}
