//! Shortest path through the busy reference scene, with timings.
//!
//! Purpose
//! - Print graph size, build and search time, and the node sequence of the
//!   optimal path for the six-obstacle layout, one line per hop.
//!
//! Usage
//! - `cargo run -p circlepath --example busy_path`

use std::time::Instant;

use circlepath::api::*;

fn main() {
    let scene = busy_edges();

    let t0 = Instant::now();
    let graph = build_graph(&scene.circles, GeomCfg::default()).expect("valid preset");
    let build_ms = t0.elapsed().as_secs_f64() * 1e3;
    println!(
        "nodes={} surfing={} hugging={} build_ms={build_ms:.3}",
        graph.nodes.len(),
        graph.surfing_edges().count(),
        graph.hugging_edges().count(),
    );

    let start = scene.start_circle().expect("start marker");
    let goal = scene.goal_circle().expect("goal marker");
    let t1 = Instant::now();
    let path = find_path(&graph, start, goal, SearchCfg::default())
        .expect("start/goal map to single nodes")
        .expect("goal reachable");
    let search_ms = t1.elapsed().as_secs_f64() * 1e3;
    println!("cost={:.6} search_ms={search_ms:.3}", path.cost);

    for w in path.ids.windows(2) {
        let e = graph.edge_between(w[0], w[1]).expect("path follows edges");
        let (a, b) = (graph.node(w[0]), graph.node(w[1]));
        println!(
            "{:?} {} ({:.2}, {:.2}) -> {} ({:.2}, {:.2}) cost={:.3}",
            e.kind,
            a.circle.id,
            a.x,
            a.y,
            b.circle.id,
            b.x,
            b.y,
            e.cost
        );
    }
}
