//! JSON record written by `run` and read back by `figure`.

use anyhow::{Context, Result};
use convexhull::api::{Algorithm, Frame, Hull, Point};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HullRecord {
    pub algo: String,
    pub points: Vec<[f64; 2]>,
    /// CCW hull vertices; fewer than 3 for degenerate input.
    pub hull: Vec<[f64; 2]>,
    /// Whether `hull` is drawn as a closed polygon.
    pub polygon: bool,
}

impl HullRecord {
    pub fn new(algo: Algorithm, points: &[Point], hull: &Hull) -> Self {
        Self {
            algo: algo.key().to_string(),
            points: points.iter().map(|p| [p.x, p.y]).collect(),
            hull: hull.vertices().iter().map(|p| [p.x, p.y]).collect(),
            polygon: hull.polygon().is_some(),
        }
    }

    pub fn frame(&self) -> Frame {
        let to_points =
            |v: &[[f64; 2]]| -> Vec<Point> { v.iter().map(|[x, y]| Point::new(*x, *y)).collect() };
        Frame {
            points: to_points(&self.points),
            outline: self.polygon.then(|| to_points(&self.hull)),
        }
    }

    pub fn write(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(path, serde_json::to_vec_pretty(self)?)
            .with_context(|| format!("writing {}", path.display()))
    }

    pub fn read(path: &Path) -> Result<Self> {
        let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
        serde_json::from_slice(&bytes).with_context(|| format!("parsing {}", path.display()))
    }
}
