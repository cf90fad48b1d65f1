//! Basic 2D types shared by both hull builders.
//!
//! - `Point`: a plain `Vector2<f64>`; equality is exact coordinate equality.
//! - `Hull`: ordered CCW vertex sequence, first vertex never repeated at the end.
//! - `HullError`: the two ways a builder can refuse an input.
//!
//! References
//! - Code cross-refs: `predicates::{orientation, cross}`, `crate::hull::{graham_scan, jarvis_march}`

use std::fmt;

use nalgebra::Vector2;

use super::predicates::{cross, orientation, Orientation};

/// A point in the normalized device space (each axis in `[-aspect, aspect]`).
pub type Point = Vector2<f64>;

/// Reasons a builder rejects a point set.
#[derive(Clone, Debug, PartialEq)]
pub enum HullError {
    /// A coordinate is NaN or infinite; orders and angles are undefined.
    NonFinite { index: usize },
    /// Gift wrapping did not return to its start within the step bound.
    Unclosed { steps: usize },
}

impl fmt::Display for HullError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HullError::NonFinite { index } => {
                write!(f, "point {} has a non-finite coordinate", index)
            }
            HullError::Unclosed { steps } => write!(
                f,
                "degenerate point set: wrap did not close after {} steps",
                steps
            ),
        }
    }
}

impl std::error::Error for HullError {}

/// Reject NaN/inf coordinates up front; returns the first offending index.
pub(crate) fn check_finite(points: &[Point]) -> Result<(), HullError> {
    match points
        .iter()
        .position(|p| !(p.x.is_finite() && p.y.is_finite()))
    {
        Some(index) => Err(HullError::NonFinite { index }),
        None => Ok(()),
    }
}

/// Convex hull as an ordered vertex loop.
///
/// Invariants:
/// - Vertices are in counter-clockwise order.
/// - No collinear boundary points, no repeated vertices.
/// - The closing edge (last → first) is implicit.
///
/// Fewer than 3 vertices means the input was too small or collinear; such a
/// hull is kept (callers may inspect it) but never emitted as a polygon.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Hull {
    vertices: Vec<Point>,
}

impl Hull {
    #[inline]
    pub fn empty() -> Self {
        Self::default()
    }

    #[inline]
    pub(crate) fn from_vertices(vertices: Vec<Point>) -> Self {
        Self { vertices }
    }

    #[inline]
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    #[inline]
    pub fn into_vertices(self) -> Vec<Point> {
        self.vertices
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// True for anything that does not enclose area (0, 1 or 2 vertices).
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.vertices.len() < 3
    }

    /// The polygon to draw, or `None` when fewer than 3 vertices exist.
    ///
    /// The consumer connects the last vertex back to the first.
    #[inline]
    pub fn polygon(&self) -> Option<&[Point]> {
        if self.vertices.len() >= 3 {
            Some(&self.vertices)
        } else {
            None
        }
    }

    /// Directed edges `(v_k, v_{k+1})`, including the closing edge.
    pub fn edges(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |k| (self.vertices[k], self.vertices[(k + 1) % n]))
    }

    /// Shoelace area; positive for CCW order, zero when degenerate.
    pub fn signed_area(&self) -> f64 {
        if self.is_degenerate() {
            return 0.0;
        }
        0.5 * self.edges().map(|(p, q)| p.x * q.y - q.x * p.y).sum::<f64>()
    }

    /// Every consecutive vertex triple (cyclically) is a strict left turn.
    pub fn is_strictly_convex(&self) -> bool {
        let n = self.vertices.len();
        if n < 3 {
            return false;
        }
        (0..n).all(|k| {
            let a = self.vertices[k];
            let b = self.vertices[(k + 1) % n];
            let c = self.vertices[(k + 2) % n];
            orientation(a, b, c) == Orientation::Left
        })
    }

    /// Closed containment: `p` is inside or on the boundary.
    ///
    /// Exact predicate (no epsilon); only meaningful for a non-degenerate hull.
    pub fn contains(&self, p: Point) -> bool {
        if self.is_degenerate() {
            return false;
        }
        self.edges().all(|(a, b)| cross(a, b, p) >= 0.0)
    }
}
