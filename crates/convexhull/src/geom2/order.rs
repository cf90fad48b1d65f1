//! Lexicographic point orders used as sort keys by the builders.

use std::cmp::Ordering;

use super::types::Point;

/// Coordinate order: agrees with `==` (so `-0.0` ties with `0.0`), and stays
/// total on non-finite values via `total_cmp`.
#[inline]
fn cmp_coord(a: f64, b: f64) -> Ordering {
    if a == b {
        Ordering::Equal
    } else {
        a.total_cmp(&b)
    }
}

/// x ascending, ties by y ascending (Graham sort key).
#[inline]
pub fn cmp_x_then_y(a: &Point, b: &Point) -> Ordering {
    cmp_coord(a.x, b.x).then_with(|| cmp_coord(a.y, b.y))
}

/// y ascending, ties by x ascending (Jarvis start point).
#[inline]
pub fn cmp_y_then_x(a: &Point, b: &Point) -> Ordering {
    cmp_coord(a.y, b.y).then_with(|| cmp_coord(a.x, b.x))
}

/// Copy of `points` sorted by `cmp_x_then_y` with exact duplicates removed.
pub fn sorted_by_x(points: &[Point]) -> Vec<Point> {
    let mut pts = points.to_vec();
    pts.sort_by(cmp_x_then_y);
    pts.dedup();
    pts
}

/// Index of the lowest point (smallest y, then smallest x).
pub fn lowest_point(points: &[Point]) -> Option<usize> {
    points
        .iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| cmp_y_then_x(a, b))
        .map(|(i, _)| i)
}
