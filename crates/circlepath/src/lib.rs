//! Shortest paths around circular obstacles.
//!
//! A path is a chain of straight segments tangent to circle boundaries
//! ("surfing") and arcs along a single circle ("hugging"). The crate builds the
//! tangent visibility graph over a circle list and runs a uniform-cost search
//! on it.
//!
//! Pipeline
//! - `geom2`: vector kernel, `Circle`, tolerances, input validation.
//! - `bitangent`: internal/external bitangent touch points for one pair.
//! - `visibility`: nodes, surfing edges (line-of-sight filtered), hugging edges.
//! - `search`: Dijkstra (optionally A*) over the mixed graph.
//! - `scene`: start/goal bundles, reference layouts, seeded random layouts.
//!
//! Everything here is sans-IO and pure: same circles in, same graph out.

pub mod api;
pub mod bitangent;
pub mod geom2;
pub mod scene;
pub mod search;
pub mod visibility;

use thiserror::Error;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use geom2::{Circle, CircleError, CircleId, GeomCfg};
pub use nalgebra::Vector2;
pub use scene::Scene;
pub use search::{find_path, path_length, Path, SearchCfg, SearchError};
pub use visibility::{build_graph, Edge, EdgeKind, Graph, Node, NodeId};

/// Point / offset in the plane.
pub type Vec2 = Vector2<f64>;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::bitangent::{external, internal, Bitangents};
    pub use crate::geom2::{Circle, CircleId, GeomCfg};
    pub use crate::scene::Scene;
    pub use crate::search::{find_path, path_length, Path, SearchCfg};
    pub use crate::visibility::{build_graph, EdgeKind, Graph, Node, NodeId};
    pub use crate::Vec2;
}

/// Any failure of the build-then-search convenience entry points.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Circles(#[from] CircleError),
    #[error(transparent)]
    Search(#[from] SearchError),
}

/// Build the visibility graph for `scene` and search from its start to its goal.
///
/// `Ok(None)` means the goal is unreachable.
pub fn solve(scene: &Scene, geom: GeomCfg, search: SearchCfg) -> Result<Option<Path>, Error> {
    let graph = build_graph(&scene.circles, geom)?;
    let start = scene.start_circle()?;
    let goal = scene.goal_circle()?;
    Ok(find_path(&graph, start, goal, search)?)
}

/// Same as [`solve`] with default tolerances and plain Dijkstra.
pub fn solve_with_defaults(scene: &Scene) -> Result<Option<Path>, Error> {
    solve(scene, GeomCfg::default(), SearchCfg::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solve_busy_preset_matches_reference_cost() {
        let scene = scene::busy_edges();
        let path = solve_with_defaults(&scene).unwrap().expect("path exists");
        assert!((path.cost - 618.751_678_150_792).abs() < 1e-6);
        let circles: Vec<u32> = path.nodes.iter().map(|n| n.circle.id.0).collect();
        assert_eq!(circles, vec![6, 0, 0, 7]);
    }

    #[test]
    fn solve_reports_unknown_start() {
        let mut scene = scene::busy_edges();
        scene.start = CircleId(99);
        let err = solve_with_defaults(&scene).unwrap_err();
        assert!(matches!(err, Error::Circles(CircleError::UnknownId(CircleId(99)))));
    }
}
