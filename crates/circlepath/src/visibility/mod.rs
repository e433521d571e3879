//! Visibility graph over a circle list.
//!
//! Purpose
//! - Turn every defined bitangent with clear line of sight into a surfing edge,
//!   merge coincident tangent points into nodes, and connect nodes sharing a
//!   circle with hugging edges.
//!
//! Candidate policy (per circle pair)
//! - internal `C–F` always; internal `D–E` only if both radii are nonzero;
//! - external `C–F` only if at least one radius is nonzero; external `D–E`
//!   only if both are nonzero.
//!
//! A zero-radius circle would otherwise contribute the same segment twice.
//!
//! Cost: O(C²) pairs × O(C) line-of-sight checks, plus O(N²) hugging edges per
//! circle. Intended for interactive sizes (tens of circles).

mod build;
mod types;

pub use build::{build_graph, hugging_edges, line_of_sight};
pub use types::{edge_cost, Edge, EdgeKind, Graph, Node, NodeId};
