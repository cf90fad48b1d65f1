//! Turn predicates: orientation (cross-product sign) and the Jarvis turn angle.
//!
//! Both are exact in the sense of "no epsilon": the sign of the raw cross
//! product decides. Callers keep inputs finite.

use std::f64::consts::TAU;

use nalgebra::Vector2;

use super::types::Point;

/// Turn direction of an ordered point triple.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Counter-clockwise.
    Left,
    /// Clockwise.
    Right,
    Collinear,
}

impl Orientation {
    /// The orientation of the same triple with its last two points swapped.
    #[inline]
    pub fn reversed(self) -> Self {
        match self {
            Orientation::Left => Orientation::Right,
            Orientation::Right => Orientation::Left,
            Orientation::Collinear => Orientation::Collinear,
        }
    }
}

/// Signed area (×2) of the triangle `a, b, c`: `(b-a) × (c-a)`.
#[inline]
pub fn cross(a: Point, b: Point, c: Point) -> f64 {
    let ab = b - a;
    let ac = c - a;
    ab.x * ac.y - ab.y * ac.x
}

/// Turn direction of `a → b → c`.
#[inline]
pub fn orientation(a: Point, b: Point, c: Point) -> Orientation {
    let d = cross(a, b, c);
    if d > 0.0 {
        Orientation::Left
    } else if d < 0.0 {
        Orientation::Right
    } else {
        Orientation::Collinear
    }
}

/// Exterior angle needed to continue the edge `prev → cur` towards `candidate`.
///
/// Returns `2π − acos(cos θ)` where θ is the angle at `cur` between
/// `cur − prev` and `cur − candidate`. Straight ahead gives `π`, straight back
/// gives `2π`; for candidates on the left of the edge the value grows with the
/// required turn.
///
/// Pre: `candidate != cur` and `prev != cur` (zero-length vectors give NaN).
#[inline]
pub fn turn_angle(prev: Point, cur: Point, candidate: Point) -> f64 {
    turn_angle_from(cur - prev, cur, candidate)
}

/// `turn_angle` with the incoming edge given as a direction vector.
pub fn turn_angle_from(dir: Vector2<f64>, cur: Point, candidate: Point) -> f64 {
    let back = cur - candidate;
    let module = dir.norm() * back.norm();
    let cos = (dir.dot(&back) / module).clamp(-1.0, 1.0);
    TAU - cos.acos()
}
