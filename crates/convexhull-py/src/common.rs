use convexhull::api::{HullError, ParseAlgorithmError, Point};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

pub fn point_from_py(pair: (f64, f64)) -> Point {
    Point::new(pair.0, pair.1)
}

pub fn map_hull_err(err: HullError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

pub fn map_algo_err(err: ParseAlgorithmError) -> PyErr {
    PyValueError::new_err(err.to_string())
}
