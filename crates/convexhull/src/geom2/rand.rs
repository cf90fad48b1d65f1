//! Random 2D point clouds (replay tokens for reproducible draws).
//!
//! Purpose
//! - Feed benches, property tests and the CLI with deterministic point sets.
//!
//! Model
//! - `Box`: uniform in `[-r, r]²`.
//! - `Disk`: uniform in the disk of radius `r` (sqrt-radius sampling).
//! - `Circle`: on the circle of radius `r`; every point is a hull vertex.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::types::Point;

/// Region the cloud is drawn from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CloudShape {
    Box,
    Disk,
    Circle,
}

/// Point-cloud sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct CloudCfg {
    pub count: usize,
    pub shape: CloudShape,
    /// Half-width (box) or radius (disk, circle).
    pub radius: f64,
}

impl Default for CloudCfg {
    fn default() -> Self {
        Self {
            count: 32,
            shape: CloudShape::Disk,
            radius: 0.9,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }

    /// Token for the next draw in the same stream.
    #[inline]
    pub fn next(self) -> Self {
        Self {
            seed: self.seed,
            index: self.index.wrapping_add(1),
        }
    }
}

/// Draw `cfg.count` points; the same `(cfg, tok)` always yields the same cloud.
pub fn draw_cloud(cfg: CloudCfg, tok: ReplayToken) -> Vec<Point> {
    let mut rng = tok.to_std_rng();
    let r = cfg.radius.abs();
    (0..cfg.count)
        .map(|_| match cfg.shape {
            CloudShape::Box => Vector2::new(rng.gen_range(-r..=r), rng.gen_range(-r..=r)),
            CloudShape::Disk => {
                let th = rng.gen::<f64>() * std::f64::consts::TAU;
                let rho = rng.gen::<f64>().sqrt() * r;
                Vector2::new(th.cos() * rho, th.sin() * rho)
            }
            CloudShape::Circle => {
                let th = rng.gen::<f64>() * std::f64::consts::TAU;
                Vector2::new(th.cos() * r, th.sin() * r)
            }
        })
        .collect()
}
