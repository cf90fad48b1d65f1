//! Viewport transform, frame description and the renderer seam.
//!
//! - `Viewport`: device pixels ↔ normalized coordinates (`[-ax, ax] × [-ay, ay]`),
//!   with the longer window side stretched by its aspect ratio.
//! - `Frame`: what one redraw shows: axes backdrop, point markers, and the
//!   closed hull outline when there is one.
//! - `HullRenderer`: implemented by whatever draws (SVG in the CLI, a GPU canvas elsewhere).

use crate::geom2::Point;

/// Pixel-space window and its normalized projection.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    width: u32,
    height: u32,
    aspect_x: f64,
    aspect_y: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1, 1)
    }
}

impl Viewport {
    /// Zero sizes are clamped to one pixel.
    pub fn new(width: u32, height: u32) -> Self {
        let width = width.max(1);
        let height = height.max(1);
        let (w, h) = (width as f64, height as f64);
        let (aspect_x, aspect_y) = if width > height {
            (w / h, 1.0)
        } else {
            (1.0, h / w)
        };
        Self {
            width,
            height,
            aspect_x,
            aspect_y,
        }
    }

    #[inline]
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Half-extents `(ax, ay)` of the visible normalized region.
    #[inline]
    pub fn bounds(&self) -> (f64, f64) {
        (self.aspect_x, self.aspect_y)
    }

    /// Pixel position (origin top-left, y down) to normalized coordinates (y up).
    pub fn to_normalized(&self, px: f64, py: f64) -> Point {
        let (w, h) = (self.width as f64, self.height as f64);
        Point::new(
            (2.0 * px / w - 1.0) * self.aspect_x,
            -(2.0 * py / h - 1.0) * self.aspect_y,
        )
    }

    /// Inverse of `to_normalized`.
    pub fn to_pixels(&self, p: Point) -> (f64, f64) {
        let (w, h) = (self.width as f64, self.height as f64);
        (
            (p.x / self.aspect_x + 1.0) * w / 2.0,
            (1.0 - p.y / self.aspect_y) * h / 2.0,
        )
    }
}

/// Drawing backend for one frame.
pub trait HullRenderer {
    /// Coordinate axes: the horizontal then the vertical segment.
    fn axes(&mut self, x_axis: [Point; 2], y_axis: [Point; 2]);

    /// Discrete markers, one per input point.
    fn markers(&mut self, points: &[Point]);

    /// Outline through `vertices` in order, closed back to the first vertex.
    fn closed_polygon(&mut self, vertices: &[Point]);
}

/// Everything one redraw needs, decoupled from any drawing API.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Frame {
    pub points: Vec<Point>,
    /// Present only for hulls with at least 3 vertices.
    pub outline: Option<Vec<Point>>,
}

impl Frame {
    /// Axis segments spanning `[-1, 1]`: horizontal, vertical.
    pub fn axes() -> ([Point; 2], [Point; 2]) {
        (
            [Point::new(-1.0, 0.0), Point::new(1.0, 0.0)],
            [Point::new(0.0, -1.0), Point::new(0.0, 1.0)],
        )
    }

    /// Axes first, markers next, outline last.
    pub fn draw<R: HullRenderer + ?Sized>(&self, r: &mut R) {
        let (x_axis, y_axis) = Self::axes();
        r.axes(x_axis, y_axis);
        if !self.points.is_empty() {
            r.markers(&self.points);
        }
        if let Some(outline) = &self.outline {
            r.closed_polygon(outline);
        }
    }
}
