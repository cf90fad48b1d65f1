//! Interactive session: the point set, the selected algorithm and the viewport.
//!
//! One `Session` is handed by reference to the input and redraw callbacks of
//! whatever window toolkit hosts it. There is no global state.
//!
//! Policy
//! - Clicks are transformed through the viewport and appended; nothing else
//!   mutates the point set.
//! - No algorithm is selected initially; selecting one replaces the other.
//! - The hull is rebuilt from a snapshot on every request (no cache).

use tracing::debug;

use crate::geom2::{Hull, HullError, Point};
use crate::hull::Algorithm;
use crate::view::{Frame, Viewport};

#[derive(Clone, Debug, Default)]
pub struct Session {
    points: Vec<Point>,
    mode: Option<Algorithm>,
    viewport: Viewport,
}

impl Session {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            points: Vec::new(),
            mode: None,
            viewport,
        }
    }

    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    #[inline]
    pub fn mode(&self) -> Option<Algorithm> {
        self.mode
    }

    #[inline]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Append a point given in normalized coordinates.
    pub fn add_point(&mut self, p: Point) {
        self.points.push(p);
    }

    /// Append the point under a pointer click given in device pixels.
    pub fn click(&mut self, px: f64, py: f64) -> Point {
        let p = self.viewport.to_normalized(px, py);
        debug!(px, py, x = p.x, y = p.y, "click");
        self.points.push(p);
        p
    }

    /// Select the algorithm for subsequent redraws.
    pub fn select(&mut self, algo: Algorithm) {
        self.mode = Some(algo);
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.viewport = Viewport::new(width, height);
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    /// Hull of the current points, or `None` while no algorithm is selected.
    pub fn hull(&self) -> Option<Result<Hull, HullError>> {
        self.mode.map(|algo| algo.build(&self.points))
    }

    /// Redraw description; the outline is omitted for degenerate sets and errors.
    pub fn frame(&self) -> Frame {
        let outline = match self.hull() {
            None => None,
            Some(Ok(hull)) => {
                if hull.is_degenerate() && self.points.len() >= 3 {
                    debug!(points = self.points.len(), "degenerate point set");
                }
                hull.polygon().map(<[Point]>::to_vec)
            }
            Some(Err(err)) => {
                debug!(%err, "hull not drawn");
                None
            }
        };
        Frame {
            points: self.points.clone(),
            outline,
        }
    }
}
