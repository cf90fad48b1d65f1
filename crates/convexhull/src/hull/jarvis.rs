//! Jarvis' march (gift wrapping) with an index-tracked candidate pool.

use nalgebra::Vector2;

use crate::geom2::{
    check_finite, cmp_y_then_x, orientation, turn_angle_from, Hull, HullError, Orientation, Point,
};

/// Initial edge direction: from the start point towards a virtual point on its right.
#[inline]
fn seed_dir() -> Vector2<f64> {
    Vector2::x()
}

/// Which candidate won a selection round.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Pick {
    /// Position in the pool (not the point index).
    Pool(usize),
    /// The start point; closes the wrap.
    Start,
}

/// Convex hull by gift wrapping; CCW, starting at the lowest (then leftmost) point.
///
/// - Fewer than 3 input points: empty hull.
/// - Collinear input: the two extreme points (degenerate, `polygon()` is `None`).
/// - Collinear boundary points are dropped (ties pick the farthest candidate).
/// - At most `n + 1` selection rounds for `n` distinct points; otherwise `Unclosed`.
pub fn jarvis_march(points: &[Point]) -> Result<Hull, HullError> {
    check_finite(points)?;
    if points.len() < 3 {
        return Ok(Hull::empty());
    }
    let mut pts = points.to_vec();
    pts.sort_by(cmp_y_then_x);
    pts.dedup();

    let bound = pts.len() + 1;
    wrap(&pts, bound).map(Hull::from_vertices)
}

/// Wrap `pts` (deduplicated, lowest point first) in at most `max_rounds` selections.
fn wrap(pts: &[Point], max_rounds: usize) -> Result<Vec<Point>, HullError> {
    let start = pts[0];
    let mut pool: Vec<usize> = (1..pts.len()).collect();
    let mut hull = vec![start];
    let mut dir = seed_dir();
    for step in 0..max_rounds {
        let cur = hull[hull.len() - 1];
        // The start only competes once the wrap has left it.
        let closing = (step > 0).then_some(start);
        match select_next(pts, &pool, cur, dir, closing) {
            None | Some(Pick::Start) => return Ok(hull),
            Some(Pick::Pool(slot)) => {
                let next = pts[pool.swap_remove(slot)];
                dir = next - cur;
                hull.push(next);
            }
        }
    }
    Err(HullError::Unclosed { steps: max_rounds })
}

/// Candidate with the smallest turn from `dir` at `cur`.
///
/// Candidates in the same direction from `cur` (exactly collinear) are ranked
/// by distance, farthest first.
fn select_next(
    pts: &[Point],
    pool: &[usize],
    cur: Point,
    dir: Vector2<f64>,
    start: Option<Point>,
) -> Option<Pick> {
    let candidates = pool
        .iter()
        .enumerate()
        .map(|(slot, &i)| (Pick::Pool(slot), pts[i]))
        .chain(start.map(|s| (Pick::Start, s)));

    let mut best: Option<(Pick, Point, f64)> = None;
    for (pick, c) in candidates {
        let angle = turn_angle_from(dir, cur, c);
        let better = match best {
            None => true,
            Some((_, b, best_angle)) => {
                let (vb, vc) = (b - cur, c - cur);
                if orientation(cur, b, c) == Orientation::Collinear && vb.dot(&vc) > 0.0 {
                    vc.norm_squared() > vb.norm_squared()
                } else {
                    angle < best_angle
                }
            }
        };
        if better {
            best = Some((pick, c, angle));
        }
    }
    best.map(|(pick, _, _)| pick)
}
