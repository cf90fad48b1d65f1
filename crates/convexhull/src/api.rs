//! Curated internal API for front ends (UNSTABLE).
//!
//! Prefer these re-exports in the CLI and the Python bindings so both go
//! through the same surface. Breaking changes are allowed.

// Predicates and orders
pub use crate::geom2::{
    cmp_x_then_y, cmp_y_then_x, cross, orientation, turn_angle, Orientation, Point,
};
// Builders
pub use crate::geom2::{Hull, HullError};
pub use crate::hull::{graham_scan, jarvis_march, Algorithm, ParseAlgorithmError};
// Random clouds
pub use crate::geom2::rand::{draw_cloud, CloudCfg, CloudShape, ReplayToken as CloudReplay};
// Consumer side
pub use crate::session::Session;
pub use crate::view::{Frame, HullRenderer, Viewport};

/// Hull of `(x, y)` tuples as `(x, y)` tuples, for callers without nalgebra.
pub fn hull_of_pairs(algo: Algorithm, pairs: &[(f64, f64)]) -> Result<Vec<(f64, f64)>, HullError> {
    let points: Vec<Point> = pairs.iter().map(|&(x, y)| Point::new(x, y)).collect();
    let hull = algo.build(&points)?;
    Ok(hull.vertices().iter().map(|p| (p.x, p.y)).collect())
}
