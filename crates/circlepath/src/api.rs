//! Curated API surface (UNSTABLE).
//!
//! Important
//! - A convenience surface for the CLI, benches, and host glue. Breaking
//!   changes are allowed; prefer these re-exports over deep module paths.

// Vector kernel and circles
pub use crate::geom2::{
    arc_angle, closest_point_on_segment, distance, facing, find_circle, polar, validate_circles,
    Circle, CircleError, CircleId, GeomCfg,
};
// Bitangents of one pair
pub use crate::bitangent::{external, internal, non_containing, non_overlapping, Bitangents};
// Visibility graph
pub use crate::visibility::{
    build_graph, edge_cost, hugging_edges, line_of_sight, Edge, EdgeKind, Graph, Node, NodeId,
};
// Search
pub use crate::search::{
    circle_node, find_path, path_length, to_petgraph, Path, SearchCfg, SearchError,
};
// Scenes
pub use crate::scene::rand::{
    draw_scene, Bounds2 as SceneBounds, CircleCount, ReplayToken as SceneReplay, ScatterCfg,
    ScatterError,
};
pub use crate::scene::{all_edges, belt_pair, busy_edges, position_is_clear, Scene};
// One-shot entry points
pub use crate::{solve, solve_with_defaults, Error};
