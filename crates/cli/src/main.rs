use anyhow::{Context, Result};
use circlepath::api::*;
use clap::{Parser, Subcommand, ValueEnum};
use serde_json::{json, Value};
use std::path::Path as FsPath;
use tracing_subscriber::fmt::SubscriberBuilder;

mod provenance;

use provenance::{current_git_rev, write_sidecar, Payload};

#[derive(Parser)]
#[command(name = "circlepath-cli")]
#[command(about = "Shortest paths around circular obstacles (JSON in, JSON out)")]
struct Cmd {
    /// Optional run label; copied into provenance sidecars and logs
    #[arg(long)]
    tag: Option<String>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Build the visibility graph of a scene and write nodes/edges
    Graph {
        #[arg(long)]
        input: String,
        #[arg(long)]
        out: String,
        /// Node dedup rounding precision (decimal places)
        #[arg(long, default_value_t = GeomCfg::default().node_decimals)]
        decimals: u32,
    },
    /// Search the shortest start→goal path of a scene
    Path {
        #[arg(long)]
        input: String,
        /// Use the straight-line A* estimate
        #[arg(long)]
        heuristic: bool,
        /// Write here instead of stdout
        #[arg(long)]
        out: Option<String>,
    },
    /// Write one of the reference scenes
    Preset {
        #[arg(long, value_enum)]
        name: PresetName,
        #[arg(long)]
        out: String,
    },
    /// Write a seeded random scene
    Generate {
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        /// Fixed obstacle count (default: uniform 3–8)
        #[arg(long)]
        count: Option<usize>,
        #[arg(long)]
        out: String,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum PresetName {
    Belt,
    AllEdges,
    Busy,
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    let tag = cmd.tag.as_deref();
    match cmd.action {
        Action::Graph {
            input,
            out,
            decimals,
        } => graph(&input, &out, decimals, tag),
        Action::Path {
            input,
            heuristic,
            out,
        } => path(&input, heuristic, out.as_deref(), tag),
        Action::Preset { name, out } => preset(name, &out, tag),
        Action::Generate {
            seed,
            index,
            count,
            out,
        } => generate(seed, index, count, &out, tag),
        Action::Report => report(tag),
    }
}

fn graph(input: &str, out: &str, decimals: u32, tag: Option<&str>) -> Result<()> {
    tracing::info!(input, out, decimals, tag, "graph");
    let scene = read_scene(input)?;
    let cfg = GeomCfg {
        node_decimals: decimals,
        ..GeomCfg::default()
    };
    let g = build_graph(&scene.circles, cfg)
        .with_context(|| format!("building graph for {input}"))?;
    tracing::info!(
        nodes = g.nodes.len(),
        surfing = g.surfing_edges().count(),
        hugging = g.hugging_edges().count(),
        "graph_built"
    );
    write_json(out, &serde_json::to_value(&g)?)?;
    let params = json!({ "input": input });
    write_sidecar(out, Payload::new("graph", params).with_geom(cfg).with_tag(tag))?;
    Ok(())
}

fn path(input: &str, heuristic: bool, out: Option<&str>, tag: Option<&str>) -> Result<()> {
    tracing::info!(input, heuristic, out, tag, "path");
    let scene = read_scene(input)?;
    let doc = path_json(&scene, heuristic)?;
    match out {
        Some(out) => {
            write_json(out, &doc)?;
            let params = json!({ "input": input });
            let payload = Payload::new("path", params)
                .with_geom(GeomCfg::default())
                .with_search(SearchCfg {
                    use_heuristic: heuristic,
                })
                .with_tag(tag);
            write_sidecar(out, payload)?;
        }
        None => println!("{}", serde_json::to_string_pretty(&doc)?),
    }
    Ok(())
}

fn path_json(scene: &Scene, heuristic: bool) -> Result<Value> {
    let search = SearchCfg {
        use_heuristic: heuristic,
    };
    let found = solve(scene, GeomCfg::default(), search)?;
    Ok(match found {
        Some(p) => {
            tracing::info!(cost = p.cost, hops = p.nodes.len().saturating_sub(1), "path_found");
            json!({ "found": true, "cost": p.cost, "nodes": p.nodes })
        }
        None => {
            tracing::warn!(start = %scene.start, goal = %scene.goal, "no_path");
            json!({ "found": false, "cost": null, "nodes": [] })
        }
    })
}

fn preset(name: PresetName, out: &str, tag: Option<&str>) -> Result<()> {
    tracing::info!(?name, out, tag, "preset");
    let scene = preset_scene(name);
    write_json(out, &serde_json::to_value(&scene)?)?;
    let params = json!({ "preset": format!("{name:?}") });
    write_sidecar(out, Payload::new("preset", params).with_tag(tag))?;
    Ok(())
}

/// `belt` has no start/goal; its two circles stand in for them.
fn preset_scene(name: PresetName) -> Scene {
    match name {
        PresetName::Belt => Scene {
            circles: belt_pair().to_vec(),
            start: CircleId(0),
            goal: CircleId(1),
        },
        PresetName::AllEdges => all_edges(),
        PresetName::Busy => busy_edges(),
    }
}

fn generate(seed: u64, index: u64, count: Option<usize>, out: &str, tag: Option<&str>) -> Result<()> {
    tracing::info!(seed, index, ?count, out, tag, "generate");
    let mut cfg = ScatterCfg::default();
    if let Some(n) = count {
        cfg.count = CircleCount::Fixed(n);
    }
    let scene = draw_scene(cfg, SceneReplay { seed, index })?;
    write_json(out, &serde_json::to_value(&scene)?)?;
    let params = json!({ "seed": seed, "index": index, "scatter": cfg });
    write_sidecar(out, Payload::new("generate", params).with_tag(tag))?;
    Ok(())
}

fn report(tag: Option<&str>) -> Result<()> {
    let obj = json!({
        "code_rev": current_git_rev(),
        "crate_version": circlepath::VERSION,
        "tag": tag,
        "params": {},
        "outputs": []
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

fn read_scene(input: &str) -> Result<Scene> {
    let bytes = std::fs::read(input).with_context(|| format!("reading {input}"))?;
    let scene: Scene =
        serde_json::from_slice(&bytes).with_context(|| format!("parsing scene {input}"))?;
    Ok(scene)
}

fn write_json(out: &str, doc: &Value) -> Result<()> {
    let out_path = FsPath::new(out);
    if let Some(parent) = out_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(out_path, serde_json::to_vec_pretty(doc)?)
        .with_context(|| format!("writing {out}"))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn preset_then_graph_writes_outputs_and_sidecars() {
        let dir = tempdir().unwrap();
        let scene_path = dir.path().join("scenes/busy.json");
        let graph_path = dir.path().join("busy.graph.json");
        let scene_str = scene_path.to_str().unwrap();
        let graph_str = graph_path.to_str().unwrap();

        preset(PresetName::Busy, scene_str, Some("t1")).unwrap();
        assert!(dir.path().join("scenes/busy.provenance.json").exists());
        assert_eq!(read_scene(scene_str).unwrap(), busy_edges());

        graph(scene_str, graph_str, 2, None).unwrap();
        let g: Graph = serde_json::from_slice(&std::fs::read(&graph_path).unwrap()).unwrap();
        assert_eq!(g.surfing_edges().count(), 60);
        let sidecar = dir.path().join("busy.graph.provenance.json");
        let prov: Value = serde_json::from_slice(&std::fs::read(sidecar).unwrap()).unwrap();
        assert_eq!(prov["command"], "graph");
        assert_eq!(prov["config"]["geom"]["node_decimals"], 2);
        assert!(prov["config"]["search"].is_null());
    }

    #[test]
    fn path_document_for_busy_scene() {
        let doc = path_json(&busy_edges(), false).unwrap();
        assert_eq!(doc["found"], true);
        assert!((doc["cost"].as_f64().unwrap() - 618.751_678_150_792).abs() < 1e-6);
        assert_eq!(doc["nodes"].as_array().unwrap().len(), 4);
    }

    #[test]
    fn path_document_rejects_sized_start() {
        let mut scene = busy_edges();
        scene.start = CircleId(0);
        let err = path_json(&scene, false).unwrap_err();
        let inner = err.downcast_ref::<circlepath::Error>().unwrap();
        assert!(matches!(
            inner,
            circlepath::Error::Search(SearchError::AmbiguousNode { .. })
        ));
    }

    #[test]
    fn generate_is_reproducible() {
        let dir = tempdir().unwrap();
        let a = dir.path().join("a.json");
        let b = dir.path().join("b.json");
        generate(5, 1, Some(4), a.to_str().unwrap(), None).unwrap();
        generate(5, 1, Some(4), b.to_str().unwrap(), None).unwrap();
        let sa = read_scene(a.to_str().unwrap()).unwrap();
        assert_eq!(sa, read_scene(b.to_str().unwrap()).unwrap());
        assert_eq!(sa.circles.len(), 6);
    }

    #[test]
    fn belt_preset_carries_both_circles() {
        let s = preset_scene(PresetName::Belt);
        assert_eq!(s.circles.len(), 2);
        assert!(s.start_circle().is_ok() && s.goal_circle().is_ok());
    }
}
