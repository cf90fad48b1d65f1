//! PyO3 bindings for the `convexhull` builders.
//!
//! Points cross the boundary as `(x, y)` tuples; hulls come back as CCW
//! vertex lists. Anything richer (sessions, rendering) stays on the Rust side.

use pyo3::prelude::*;

mod common;
mod geom;

#[pymodule]
fn convexhull_native(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add("__version__", convexhull::VERSION)?;
    geom::register(m)?;
    Ok(())
}
