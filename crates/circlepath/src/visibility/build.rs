//! Graph construction: tangent candidates, line of sight, node dedup, hugging.

use std::collections::{HashMap, HashSet};

use nalgebra::Vector2;
use tracing::debug;

use crate::bitangent::{external, internal};
use crate::geom2::{
    closest_point_on_segment, distance, is_finite, validate_circles, Circle, CircleError,
    CircleId, GeomCfg,
};

use super::types::{edge_cost, Edge, EdgeKind, Graph, Node, NodeId};

/// Dedup key: circle id plus coordinates rounded to `GeomCfg::node_decimals`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
struct NodeKey {
    circle: CircleId,
    x: i64,
    y: i64,
}

/// Node store that merges tangent points which coincide after rounding.
struct NodeTable {
    scale: f64,
    index: HashMap<NodeKey, NodeId>,
    nodes: Vec<Node>,
}

impl NodeTable {
    fn new(cfg: &GeomCfg) -> Self {
        Self {
            scale: cfg.node_scale(),
            index: HashMap::new(),
            nodes: Vec::new(),
        }
    }

    /// Existing node for `(circle, p)` after rounding, or a new one.
    fn intern(&mut self, circle: &Circle, p: Vector2<f64>) -> NodeId {
        let key = NodeKey {
            circle: circle.id,
            x: (p.x * self.scale).round() as i64,
            y: (p.y * self.scale).round() as i64,
        };
        *self.index.entry(key).or_insert_with(|| {
            self.nodes.push(Node::new(*circle, p));
            NodeId(self.nodes.len() - 1)
        })
    }
}

/// Segment `p`–`q` between circles `i` and `j` misses the interior of every
/// other circle.
pub fn line_of_sight(
    circles: &[Circle],
    i: usize,
    p: Vector2<f64>,
    j: usize,
    q: Vector2<f64>,
    cfg: &GeomCfg,
) -> bool {
    circles.iter().enumerate().all(|(k, c)| {
        if k == i || k == j {
            return true;
        }
        let closest = closest_point_on_segment(p, q, c.center());
        distance(closest, c.center()) > c.r - cfg.los_eps
    })
}

/// Build the visibility graph (tangent points as nodes; surfing + hugging edges).
///
/// Pairs are visited as `(i, j)` with `j < i`. Within a pair the smaller
/// circle plays `A` in the bitangent formulas (ties: circle `i`), so that a
/// zero-radius partner produces two distinct tangents under the suppression
/// rule below.
pub fn build_graph(circles: &[Circle], cfg: GeomCfg) -> Result<Graph, CircleError> {
    validate_circles(circles)?;

    let mut table = NodeTable::new(&cfg);
    let mut edges: Vec<Edge> = Vec::new();
    let mut linked: HashSet<(NodeId, NodeId)> = HashSet::new();
    let mut undefined_families = 0usize;
    let mut rejected_nonfinite = 0usize;
    let mut rejected_blocked = 0usize;

    let mut add_edge = |ia: usize, p: Vector2<f64>, ib: usize, q: Vector2<f64>| {
        if !is_finite(p) || !is_finite(q) {
            rejected_nonfinite += 1;
            return;
        }
        if !line_of_sight(circles, ia, p, ib, q, &cfg) {
            debug!(
                from = %circles[ia].id,
                to = %circles[ib].id,
                "surfing candidate blocked"
            );
            rejected_blocked += 1;
            return;
        }
        let na = table.intern(&circles[ia], p);
        let nb = table.intern(&circles[ib], q);
        let key = if na <= nb { (na, nb) } else { (nb, na) };
        if !linked.insert(key) {
            return;
        }
        let cost = edge_cost(&table.nodes[na.0], &table.nodes[nb.0]);
        edges.push(Edge {
            a: na,
            b: nb,
            kind: EdgeKind::Surfing,
            cost,
        });
    };

    for i in 0..circles.len() {
        for j in 0..i {
            let (ia, ib) = if circles[i].r <= circles[j].r {
                (i, j)
            } else {
                (j, i)
            };
            let (a, b) = (&circles[ia], &circles[ib]);
            let both_sized = a.r != 0.0 && b.r != 0.0;
            let any_sized = a.r != 0.0 || b.r != 0.0;

            match internal(a, b) {
                Some(bt) => {
                    add_edge(ia, bt.c, ib, bt.f);
                    if both_sized {
                        add_edge(ia, bt.d, ib, bt.e);
                    }
                }
                None => undefined_families += 1,
            }
            if any_sized {
                match external(a, b) {
                    Some(bt) => {
                        add_edge(ia, bt.c, ib, bt.f);
                        if both_sized {
                            add_edge(ia, bt.d, ib, bt.e);
                        }
                    }
                    None => undefined_families += 1,
                }
            }
        }
    }

    let surfing = edges.len();
    let nodes = table.nodes;
    edges.extend(hugging_edges(&nodes));
    debug!(
        circles = circles.len(),
        nodes = nodes.len(),
        surfing,
        hugging = edges.len() - surfing,
        undefined_families,
        rejected_nonfinite,
        rejected_blocked,
        "visibility graph built"
    );
    Ok(Graph {
        circles: circles.to_vec(),
        nodes,
        edges,
    })
}

/// Connect every pair of nodes that share a circle.
///
/// Buckets keep first-seen circle order so edge order is deterministic.
pub fn hugging_edges(nodes: &[Node]) -> Vec<Edge> {
    let mut order: Vec<CircleId> = Vec::new();
    let mut buckets: HashMap<CircleId, Vec<NodeId>> = HashMap::new();
    for (k, n) in nodes.iter().enumerate() {
        buckets
            .entry(n.circle.id)
            .or_insert_with(|| {
                order.push(n.circle.id);
                Vec::new()
            })
            .push(NodeId(k));
    }
    let mut out = Vec::new();
    for id in order {
        let bucket = &buckets[&id];
        for (x, &a) in bucket.iter().enumerate() {
            for &b in &bucket[..x] {
                out.push(Edge {
                    a,
                    b,
                    kind: EdgeKind::Hugging,
                    cost: edge_cost(&nodes[a.0], &nodes[b.0]),
                });
            }
        }
    }
    out
}
