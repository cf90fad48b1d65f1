//! 2D primitives for hull construction.
//!
//! Purpose
//! - Provide the point type, the orientation and turn-angle predicates, the two
//!   lexicographic point orders, and the `Hull` result type shared by both
//!   builders in `crate::hull`.
//! - Keep everything pure: functions take explicit inputs and return new values.
//!
//! Conventions
//! - Exact arithmetic on `f64`: no epsilons; the sign of the raw cross product
//!   decides. Robust predicates are out of scope.
//! - Hulls are counter-clockwise and exclude collinear boundary points.
//!
//! References
//! - Code cross-refs: `Point`, `Hull`, `orientation`, `turn_angle`, `cmp_x_then_y`

pub mod order;
pub mod predicates;
pub mod rand;
mod types;

pub use order::{cmp_x_then_y, cmp_y_then_x, lowest_point, sorted_by_x};
pub use predicates::{cross, orientation, turn_angle, turn_angle_from, Orientation};
pub(crate) use types::check_finite;
pub use types::{Hull, HullError, Point};

#[cfg(test)]
mod tests;
