//! Random obstacle layouts (rejection sampling + replay tokens).
//!
//! Purpose
//! - Provide a small, deterministic sampler of non-touching circles with a
//!   start and a goal point, used by property tests, benches, and the CLI.
//!
//! Model
//! - Draw a circle count, then place circles one at a time with uniform
//!   centers inside the bounds and uniform radii; reject any draw that comes
//!   within `gap` of an already placed circle or leaves the bounds.
//! - Start and goal are zero-radius circles placed the same way, so they are
//!   never inside an obstacle.
//! - Determinism: a replay token `(seed, index)` keys one `StdRng` per scene.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::Scene;
use crate::geom2::{distance, Circle, CircleId};

/// Obstacle count distribution.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CircleCount {
    Fixed(usize),
    Uniform { min: usize, max: usize },
}

impl CircleCount {
    fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        match *self {
            CircleCount::Fixed(n) => n,
            CircleCount::Uniform { min, max } => rng.gen_range(min..=max.max(min)),
        }
    }
}

/// Axis-aligned drawing area `[0, width] × [0, height]`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bounds2 {
    pub width: f64,
    pub height: f64,
}

/// Scatter sampler configuration.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScatterCfg {
    pub count: CircleCount,
    pub r_min: f64,
    pub r_max: f64,
    pub bounds: Bounds2,
    /// Minimum clearance between any two placed circles (boundary to boundary).
    pub gap: f64,
    /// Placement attempts per circle before giving up.
    pub max_attempts: usize,
}

impl Default for ScatterCfg {
    fn default() -> Self {
        Self {
            count: CircleCount::Uniform { min: 3, max: 8 },
            r_min: 15.0,
            r_max: 60.0,
            bounds: Bounds2 {
                width: 600.0,
                height: 300.0,
            },
            gap: 2.0,
            max_attempts: 200,
        }
    }
}

impl ScatterCfg {
    fn validate(&self) -> Result<(), ScatterError> {
        let finite = [
            self.r_min,
            self.r_max,
            self.bounds.width,
            self.bounds.height,
            self.gap,
        ]
        .iter()
        .all(|v| v.is_finite());
        if !finite {
            return Err(ScatterError::invalid("parameters must be finite"));
        }
        if self.r_min < 0.0 || self.r_min > self.r_max {
            return Err(ScatterError::invalid("0 <= r_min <= r_max required"));
        }
        if 2.0 * self.r_max >= self.bounds.width.min(self.bounds.height) {
            return Err(ScatterError::invalid("largest circle must fit inside bounds"));
        }
        if self.gap < 0.0 {
            return Err(ScatterError::invalid("gap must be >= 0"));
        }
        if self.max_attempts == 0 {
            return Err(ScatterError::invalid("max_attempts must be > 0"));
        }
        Ok(())
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    /// ChaCha key: `seed` and `index` little-endian in the first 16 bytes,
    /// a fixed tag in the rest so scene streams differ from other `StdRng` users.
    fn rng(self) -> StdRng {
        const TAG: &[u8; 16] = b"circlepath-scene";
        let mut key = [0u8; 32];
        key[..8].copy_from_slice(&self.seed.to_le_bytes());
        key[8..16].copy_from_slice(&self.index.to_le_bytes());
        key[16..].copy_from_slice(TAG);
        StdRng::from_seed(key)
    }

    /// Token for the next scene in the same sequence.
    pub fn advance(self) -> Self {
        Self {
            index: self.index.wrapping_add(1),
            ..self
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScatterError {
    #[error("invalid scatter params: {reason}")]
    InvalidParams { reason: String },
    #[error("placed {placed} of {wanted} circles before running out of attempts")]
    Exhausted { placed: usize, wanted: usize },
}

impl ScatterError {
    fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidParams {
            reason: reason.into(),
        }
    }
}

/// Draw a random scene: obstacles with ids `0..n`, start `n`, goal `n + 1`.
pub fn draw_scene(cfg: ScatterCfg, tok: ReplayToken) -> Result<Scene, ScatterError> {
    cfg.validate()?;
    let mut rng = tok.rng();
    let n = cfg.count.sample(&mut rng);
    let wanted = n + 2;
    let mut circles: Vec<Circle> = Vec::with_capacity(wanted);
    for k in 0..wanted {
        let r = if k < n {
            rng.gen_range(cfg.r_min..=cfg.r_max)
        } else {
            0.0
        };
        let placed = (0..cfg.max_attempts).find_map(|_| {
            let x = rng.gen_range(r..=cfg.bounds.width - r);
            let y = rng.gen_range(r..=cfg.bounds.height - r);
            let c = Circle::new(k as u32, x, y, r);
            clear_of(&circles, &c, cfg.gap).then_some(c)
        });
        match placed {
            Some(c) => circles.push(c),
            None => {
                return Err(ScatterError::Exhausted {
                    placed: circles.len(),
                    wanted,
                })
            }
        }
    }
    Ok(Scene {
        circles,
        start: CircleId(n as u32),
        goal: CircleId(n as u32 + 1),
    })
}

fn clear_of(placed: &[Circle], c: &Circle, gap: f64) -> bool {
    placed
        .iter()
        .all(|o| distance(o.center(), c.center()) > o.r + c.r + gap)
}
