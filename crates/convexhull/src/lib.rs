//! Planar convex hulls: Graham's scan and Jarvis' march.
//!
//! Layout
//! - `geom2`: point type, orientation/turn-angle predicates, point orders, `Hull`.
//! - `hull`: the two builders and the `Algorithm` selector.
//! - `session`, `view`: point-set ownership, pixel transform, renderer seam.
//!
//! API Policy
//! - This crate is project-internal. There is no stable public API; breaking
//!   changes are fine when they improve the design.

pub mod api;
pub mod geom2;
pub mod hull;
pub mod session;
pub mod view;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom2::rand::{draw_cloud, CloudCfg, CloudShape, ReplayToken};
    pub use crate::geom2::{orientation, turn_angle, Hull, HullError, Orientation, Point};
    pub use crate::hull::{graham_scan, jarvis_march, Algorithm};
    pub use crate::session::Session;
    pub use crate::view::{Frame, HullRenderer, Viewport};
}
