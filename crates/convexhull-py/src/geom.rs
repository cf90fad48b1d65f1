//! Hull and predicate bindings (kept separate so `lib.rs` stays tiny).

use crate::common::{map_algo_err, map_hull_err, point_from_py};
use convexhull::api::{hull_of_pairs, Algorithm, Orientation};
use pyo3::prelude::*;

/// Hull vertices in CCW order, starting at the leftmost point.
#[pyfunction]
pub fn graham_scan(points: Vec<(f64, f64)>) -> PyResult<Vec<(f64, f64)>> {
    hull_of_pairs(Algorithm::GrahamScan, &points).map_err(map_hull_err)
}

/// Hull vertices in CCW order, starting at the lowest point.
#[pyfunction]
pub fn jarvis_march(points: Vec<(f64, f64)>) -> PyResult<Vec<(f64, f64)>> {
    hull_of_pairs(Algorithm::JarvisMarch, &points).map_err(map_hull_err)
}

/// Hull by algorithm key (`"graham"` or `"jarvis"`).
#[pyfunction]
pub fn convex_hull(algo: &str, points: Vec<(f64, f64)>) -> PyResult<Vec<(f64, f64)>> {
    let algo: Algorithm = algo.parse().map_err(map_algo_err)?;
    hull_of_pairs(algo, &points).map_err(map_hull_err)
}

/// `1` for a left turn a→b→c, `-1` for right, `0` for collinear.
#[pyfunction]
pub fn orientation(a: (f64, f64), b: (f64, f64), c: (f64, f64)) -> i8 {
    match convexhull::api::orientation(point_from_py(a), point_from_py(b), point_from_py(c)) {
        Orientation::Left => 1,
        Orientation::Right => -1,
        Orientation::Collinear => 0,
    }
}

pub fn register(m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(graham_scan, m)?)?;
    m.add_function(wrap_pyfunction!(jarvis_march, m)?)?;
    m.add_function(wrap_pyfunction!(convex_hull, m)?)?;
    m.add_function(wrap_pyfunction!(orientation, m)?)?;
    Ok(())
}
