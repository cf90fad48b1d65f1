//! Graham's scan in its monotone-chain form (x-sorted, two chains).

use crate::geom2::{check_finite, orientation, sorted_by_x, Hull, HullError, Orientation, Point};

/// Convex hull by Graham's scan; CCW, starting at the leftmost (then lowest) point.
///
/// - Fewer than 3 input points: empty hull.
/// - Collinear input: the two extreme points (degenerate, `polygon()` is `None`).
/// - Collinear boundary points are dropped.
pub fn graham_scan(points: &[Point]) -> Result<Hull, HullError> {
    check_finite(points)?;
    if points.len() < 3 {
        return Ok(Hull::empty());
    }
    let pts = sorted_by_x(points);
    if pts.len() < 3 {
        return Ok(Hull::from_vertices(pts));
    }
    // Left-to-right sweep keeps left turns only, so it traces the lower boundary;
    // the right-to-left sweep traces the upper one.
    let mut hull = chain(pts.iter().copied());
    let upper = chain(pts.iter().rev().copied());
    // Both ends of the second chain are already in the first.
    hull.extend_from_slice(&upper[1..upper.len() - 1]);
    Ok(Hull::from_vertices(hull))
}

/// One monotone chain; drops the middle point of every non-left turn.
fn chain(sweep: impl Iterator<Item = Point>) -> Vec<Point> {
    let mut out: Vec<Point> = Vec::new();
    for p in sweep {
        out.push(p);
        while out.len() > 2 && !turns_left(&out) {
            let n = out.len();
            out.remove(n - 2);
        }
    }
    out
}

#[inline]
fn turns_left(chain: &[Point]) -> bool {
    let n = chain.len();
    orientation(chain[n - 3], chain[n - 2], chain[n - 1]) == Orientation::Left
}
