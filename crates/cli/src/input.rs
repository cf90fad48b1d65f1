//! Point-set sources for `run`: CSV/Parquet files (columns `x`, `y`) or a random cloud.

use anyhow::{bail, Context, Result};
use convexhull::api::{draw_cloud, CloudCfg, CloudReplay, CloudShape, Point};
use polars::prelude::*;
use std::path::Path;

/// Read `x`/`y` columns; any other columns are ignored.
pub fn read_points(path: &Path) -> Result<Vec<Point>> {
    let lf = match path.extension().and_then(|e| e.to_str()) {
        Some("parquet") => LazyFrame::scan_parquet(path, ScanArgsParquet::default())
            .with_context(|| format!("scanning {}", path.display()))?,
        _ => LazyCsvReader::new(path)
            .with_has_header(true)
            .with_infer_schema_length(Some(100))
            .finish()
            .with_context(|| format!("reading {}", path.display()))?,
    };
    let df = lf
        .select([
            col("x").cast(DataType::Float64),
            col("y").cast(DataType::Float64),
        ])
        .collect()
        .with_context(|| format!("selecting x/y columns from {}", path.display()))?;
    tracing::info!(rows = df.height(), path = %path.display(), "points_read");

    let xs = df.column("x")?.f64()?;
    let ys = df.column("y")?.f64()?;
    let mut points = Vec::with_capacity(df.height());
    for (row, (x, y)) in xs.into_iter().zip(ys.into_iter()).enumerate() {
        match (x, y) {
            (Some(x), Some(y)) => points.push(Point::new(x, y)),
            _ => bail!("row {row}: missing x or y"),
        }
    }
    Ok(points)
}

pub fn parse_shape(s: &str) -> Result<CloudShape> {
    match s.to_ascii_lowercase().as_str() {
        "box" => Ok(CloudShape::Box),
        "disk" => Ok(CloudShape::Disk),
        "circle" => Ok(CloudShape::Circle),
        other => bail!("unknown cloud shape {other:?} (expected box, disk or circle)"),
    }
}

/// Random cloud inside the unit viewport.
pub fn random_points(count: usize, shape: CloudShape, seed: u64) -> Vec<Point> {
    let cfg = CloudCfg {
        count,
        shape,
        radius: 0.9,
    };
    draw_cloud(cfg, CloudReplay { seed, index: 0 })
}
