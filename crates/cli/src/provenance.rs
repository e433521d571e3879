//! `<stem>.provenance.json` sidecars for every artifact the CLI writes.
//!
//! A sidecar records which command produced the file, with which tolerances
//! and search settings, from which commit, plus free-form run tags.

use anyhow::{Context, Result};
use circlepath::api::{GeomCfg, SearchCfg};
use serde::Serialize;
use serde_json::Value;
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

/// What produced an artifact.
pub struct Payload {
    pub command: &'static str,
    pub params: Value,
    pub geom: Option<GeomCfg>,
    pub search: Option<SearchCfg>,
    pub tags: Vec<String>,
}

impl Payload {
    pub fn new(command: &'static str, params: Value) -> Self {
        Self {
            command,
            params,
            geom: None,
            search: None,
            tags: Vec::new(),
        }
    }

    pub fn with_geom(mut self, cfg: GeomCfg) -> Self {
        self.geom = Some(cfg);
        self
    }

    pub fn with_search(mut self, cfg: SearchCfg) -> Self {
        self.search = Some(cfg);
        self
    }

    pub fn with_tag(mut self, tag: Option<&str>) -> Self {
        self.tags.extend(tag.map(str::to_owned));
        self
    }
}

#[derive(Serialize)]
struct Callsite {
    file: &'static str,
    line: u32,
}

#[derive(Serialize)]
struct Config {
    geom: Option<GeomCfg>,
    search: Option<SearchCfg>,
}

/// On-disk sidecar layout.
#[derive(Serialize)]
struct Sidecar<'a> {
    command: &'static str,
    code_rev: String,
    crate_version: &'static str,
    callsite: Callsite,
    config: Config,
    params: &'a Value,
    tags: &'a [String],
    outputs: [String; 1],
}

/// Write the sidecar next to `artifact` and return its path.
#[track_caller]
pub fn write_sidecar<P: AsRef<Path>>(artifact: P, payload: Payload) -> Result<PathBuf> {
    let artifact = artifact.as_ref();
    let target = sidecar_path(artifact);
    let caller = Location::caller();
    let doc = Sidecar {
        command: payload.command,
        code_rev: current_git_rev(),
        crate_version: circlepath::VERSION,
        callsite: Callsite {
            file: caller.file(),
            line: caller.line(),
        },
        config: Config {
            geom: payload.geom,
            search: payload.search,
        },
        params: &payload.params,
        tags: &payload.tags,
        outputs: [artifact.display().to_string()],
    };
    fs::write(&target, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", target.display()))?;
    tracing::debug!(sidecar = %target.display(), command = payload.command, "provenance");
    Ok(target)
}

/// `dir/name.ext` → `dir/name.provenance.json` (`artifact` when there is no stem).
fn sidecar_path(artifact: &Path) -> PathBuf {
    let stem = artifact
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "artifact".to_owned());
    artifact.with_file_name(format!("{stem}.provenance.json"))
}

/// Commit hash from `GIT_COMMIT` (build time, then run time), else `git rev-parse HEAD`.
pub fn current_git_rev() -> String {
    let from_env = option_env!("GIT_COMMIT")
        .map(str::to_owned)
        .or_else(|| std::env::var("GIT_COMMIT").ok())
        .filter(|s| !s.is_empty());
    if let Some(rev) = from_env {
        return rev;
    }
    Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .filter(|out| out.status.success())
        .and_then(|out| String::from_utf8(out.stdout).ok())
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::tempdir;

    #[test]
    fn sidecar_name_replaces_extension() {
        let derived = sidecar_path(Path::new("/tmp/out/busy.scene.json"));
        assert_eq!(derived, Path::new("/tmp/out/busy.scene.provenance.json"));
        let bare = sidecar_path(Path::new("graph"));
        assert_eq!(bare, Path::new("graph.provenance.json"));
    }

    #[test]
    fn sidecar_records_configs_params_and_tag() {
        let dir = tempdir().unwrap();
        let artifact = dir.path().join("path.json");
        fs::write(&artifact, "{}").unwrap();
        let geom = GeomCfg {
            node_decimals: 3,
            ..GeomCfg::default()
        };
        let payload = Payload::new("path", json!({"input": "busy.json"}))
            .with_geom(geom)
            .with_search(SearchCfg {
                use_heuristic: true,
            })
            .with_tag(Some("run-7"));
        let sidecar = write_sidecar(&artifact, payload).unwrap();
        let parsed: Value = serde_json::from_slice(&fs::read(sidecar).unwrap()).unwrap();
        assert_eq!(parsed["command"], "path");
        assert_eq!(parsed["outputs"][0], artifact.display().to_string());
        assert_eq!(parsed["config"]["geom"]["node_decimals"], 3);
        assert_eq!(parsed["config"]["search"]["use_heuristic"], true);
        assert_eq!(parsed["params"]["input"], "busy.json");
        assert_eq!(parsed["tags"][0], "run-7");
        assert!(parsed["callsite"]["line"].as_u64().unwrap() > 0);
    }

    #[test]
    fn scene_only_commands_leave_config_empty() {
        let dir = tempdir().unwrap();
        let artifact = dir.path().join("scene.json");
        fs::write(&artifact, "{}").unwrap();
        let sidecar = write_sidecar(&artifact, Payload::new("preset", json!({}))).unwrap();
        let parsed: Value = serde_json::from_slice(&fs::read(sidecar).unwrap()).unwrap();
        assert!(parsed["config"]["geom"].is_null());
        assert!(parsed["config"]["search"].is_null());
        assert_eq!(parsed["tags"].as_array().unwrap().len(), 0);
    }
}
