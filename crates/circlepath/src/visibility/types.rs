//! Data types for the visibility graph.
//!
//! Kept small and explicit to make `build` and `search` easy to read.

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use crate::geom2::{arc_angle, distance, facing, Circle, CircleId};

/// Dense node index inside one `Graph`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub usize);

/// Tangent point on the boundary of exactly one circle.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub circle: Circle,
    pub x: f64,
    pub y: f64,
}

impl Node {
    #[inline]
    pub fn new(circle: Circle, p: Vector2<f64>) -> Self {
        Self {
            circle,
            x: p.x,
            y: p.y,
        }
    }

    #[inline]
    pub fn pos(&self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }

    #[inline]
    pub fn circle_id(&self) -> CircleId {
        self.circle.id
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeKind {
    /// Straight tangent segment between nodes on different circles.
    Surfing,
    /// Arc along one circle between two of its nodes.
    Hugging,
}

/// Undirected edge; `a` and `b` are unordered.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub a: NodeId,
    pub b: NodeId,
    pub kind: EdgeKind,
    pub cost: f64,
}

impl Edge {
    /// Endpoint opposite to `n`, if `n` is an endpoint.
    #[inline]
    pub fn other(&self, n: NodeId) -> Option<NodeId> {
        if self.a == n {
            Some(self.b)
        } else if self.b == n {
            Some(self.a)
        } else {
            None
        }
    }
}

/// Travel cost between two adjacent nodes.
///
/// Same circle: minor arc length `arc_angle(∠Oa, ∠Ob) · r`.
/// Different circles: straight-line distance.
pub fn edge_cost(a: &Node, b: &Node) -> f64 {
    if a.circle.id == b.circle.id {
        let center = a.circle.center();
        let delta = arc_angle(facing(center, a.pos()), facing(center, b.pos()));
        delta * a.circle.r
    } else {
        distance(a.pos(), b.pos())
    }
}

/// Nodes and edges for one circle configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Graph {
    pub circles: Vec<Circle>,
    pub nodes: Vec<Node>,
    /// Surfing edges first (in generation order), then hugging edges.
    pub edges: Vec<Edge>,
}

impl Graph {
    #[inline]
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    /// Ids of all nodes lying on `circle`.
    pub fn nodes_on(&self, circle: CircleId) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .filter(move |(_, n)| n.circle.id == circle)
            .map(|(k, _)| NodeId(k))
    }

    pub fn surfing_edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.iter().filter(|e| e.kind == EdgeKind::Surfing)
    }

    pub fn hugging_edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.iter().filter(|e| e.kind == EdgeKind::Hugging)
    }

    /// Neighbours of `n` with the connecting edge cost.
    pub fn neighbors(&self, n: NodeId) -> impl Iterator<Item = (NodeId, f64)> + '_ {
        self.edges
            .iter()
            .filter_map(move |e| e.other(n).map(|m| (m, e.cost)))
    }

    /// The edge joining `a` and `b`, in either orientation.
    pub fn edge_between(&self, a: NodeId, b: NodeId) -> Option<&Edge> {
        self.edges
            .iter()
            .find(|e| (e.a == a && e.b == b) || (e.a == b && e.b == a))
    }
}
