//! Shortest path over the visibility graph.
//!
//! Purpose
//! - Map the start and goal circles to their single node, then run a
//!   uniform-cost search (Dijkstra) over surfing + hugging edges.
//!
//! Notes
//! - The search runs on a `petgraph` undirected graph whose weights are the
//!   edge costs precomputed by the builder, so arc lengths and segment lengths
//!   are compared on the same scale.
//! - `SearchCfg::use_heuristic` turns the search into A* with the straight-line
//!   distance to the goal. Every edge cost is at least the chord between its
//!   endpoints, so the estimate is admissible and the optimum is unchanged.
//! - No path is `Ok(None)`; a bad start/goal mapping or an edge pointing past
//!   the node list is an error.

use petgraph::algo::astar;
use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::geom2::{distance, Circle, CircleId};
use crate::visibility::{edge_cost, Graph, Node, NodeId};

/// Search configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchCfg {
    /// Straight-line distance to goal as A* estimate (off: plain Dijkstra).
    pub use_heuristic: bool,
}

/// Invalid start/goal for a search.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("circle {0} is not part of the graph")]
    UnknownCircle(CircleId),
    #[error("circle {0} has no node; start/goal must be a reachable point circle")]
    NoNode(CircleId),
    #[error("circle {id} has {count} nodes; start/goal must map to exactly one")]
    AmbiguousNode { id: CircleId, count: usize },
    #[error("edge {edge} references node {node:?}, graph has {len} nodes")]
    MalformedGraph { edge: usize, node: NodeId, len: usize },
}

/// Start-to-goal node sequence and its total cost.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Path {
    pub ids: Vec<NodeId>,
    pub nodes: Vec<Node>,
    pub cost: f64,
}

impl Path {
    #[inline]
    pub fn start(&self) -> Option<&Node> {
        self.nodes.first()
    }

    #[inline]
    pub fn goal(&self) -> Option<&Node> {
        self.nodes.last()
    }
}

/// Sum of edge costs along consecutive nodes (0 for fewer than two nodes).
pub fn path_length(nodes: &[Node]) -> f64 {
    nodes.windows(2).map(|w| edge_cost(&w[0], &w[1])).sum()
}

/// The unique node on `circle`.
pub fn circle_node(graph: &Graph, circle: &Circle) -> Result<NodeId, SearchError> {
    if !graph.circles.iter().any(|c| c.id == circle.id) {
        return Err(SearchError::UnknownCircle(circle.id));
    }
    let mut on = graph.nodes_on(circle.id);
    match (on.next(), on.next()) {
        (Some(n), None) => Ok(n),
        (None, _) => Err(SearchError::NoNode(circle.id)),
        (Some(_), Some(_)) => Err(SearchError::AmbiguousNode {
            id: circle.id,
            count: 2 + on.count(),
        }),
    }
}

/// Undirected `petgraph` view; node index `k` is `NodeId(k)`.
///
/// Edges with an endpoint outside `graph.nodes` are rejected.
pub fn to_petgraph(graph: &Graph) -> Result<UnGraph<NodeId, f64>, SearchError> {
    let len = graph.nodes.len();
    let mut g = UnGraph::with_capacity(len, graph.edges.len());
    for k in 0..len {
        g.add_node(NodeId(k));
    }
    for (edge, e) in graph.edges.iter().enumerate() {
        if let Some(&node) = [e.a, e.b].iter().find(|n| n.0 >= len) {
            return Err(SearchError::MalformedGraph { edge, node, len });
        }
        g.add_edge(NodeIndex::new(e.a.0), NodeIndex::new(e.b.0), e.cost);
    }
    Ok(g)
}

/// Minimum-cost path from `start`'s node to `goal`'s node.
///
/// `start == goal` yields the single-node path of cost 0.
pub fn find_path(
    graph: &Graph,
    start: &Circle,
    goal: &Circle,
    cfg: SearchCfg,
) -> Result<Option<Path>, SearchError> {
    let g = to_petgraph(graph)?;
    let s = circle_node(graph, start)?;
    let t = circle_node(graph, goal)?;
    let goal_pos = graph.node(t).pos();

    let found = astar(
        &g,
        NodeIndex::new(s.0),
        |n| n.index() == t.0,
        |e| *e.weight(),
        |n| {
            if cfg.use_heuristic {
                distance(graph.nodes[n.index()].pos(), goal_pos)
            } else {
                0.0
            }
        },
    );
    let Some((cost, route)) = found else {
        debug!(start = %start.id, goal = %goal.id, "no path");
        return Ok(None);
    };
    let ids: Vec<NodeId> = route.into_iter().map(|n| NodeId(n.index())).collect();
    let nodes: Vec<Node> = ids.iter().map(|&id| *graph.node(id)).collect();
    debug!(
        start = %start.id,
        goal = %goal.id,
        hops = ids.len().saturating_sub(1),
        cost,
        "path found"
    );
    Ok(Some(Path { ids, nodes, cost }))
}
