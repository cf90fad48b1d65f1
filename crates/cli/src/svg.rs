//! SVG backend for `HullRenderer`: black canvas, grey axes, red markers, yellow outline.

use convexhull::api::{HullRenderer, Point, Viewport};

const AXIS_COLOR: &str = "#808080";
const MARKER_COLOR: &str = "#ff0000";
const HULL_COLOR: &str = "#ffff00";

pub struct SvgRenderer {
    viewport: Viewport,
    body: String,
    clipped: usize,
}

impl SvgRenderer {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            body: String::new(),
            clipped: 0,
        }
    }

    /// Markers that fell outside the visible region.
    pub fn clipped(&self) -> usize {
        self.clipped
    }

    pub fn finish(self) -> String {
        let (w, h) = self.viewport.size();
        format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n\
             <rect width=\"{w}\" height=\"{h}\" fill=\"#000000\"/>\n{}</svg>\n",
            self.body
        )
    }

    fn px(&self, p: Point) -> (f64, f64) {
        self.viewport.to_pixels(p)
    }

    fn line(&mut self, a: Point, b: Point) {
        let (x1, y1) = self.px(a);
        let (x2, y2) = self.px(b);
        self.body.push_str(&format!(
            "<line x1=\"{x1:.2}\" y1=\"{y1:.2}\" x2=\"{x2:.2}\" y2=\"{y2:.2}\" stroke=\"{AXIS_COLOR}\"/>\n"
        ));
    }
}

impl HullRenderer for SvgRenderer {
    fn axes(&mut self, x_axis: [Point; 2], y_axis: [Point; 2]) {
        self.line(x_axis[0], x_axis[1]);
        self.line(y_axis[0], y_axis[1]);
    }

    fn markers(&mut self, points: &[Point]) {
        let (ax, ay) = self.viewport.bounds();
        for &p in points {
            if p.x.abs() > ax || p.y.abs() > ay {
                self.clipped += 1;
            }
            let (cx, cy) = self.px(p);
            self.body.push_str(&format!(
                "<circle cx=\"{cx:.2}\" cy=\"{cy:.2}\" r=\"3\" fill=\"{MARKER_COLOR}\"/>\n"
            ));
        }
    }

    fn closed_polygon(&mut self, vertices: &[Point]) {
        let coords: Vec<String> = vertices
            .iter()
            .map(|&p| {
                let (x, y) = self.px(p);
                format!("{x:.2},{y:.2}")
            })
            .collect();
        self.body.push_str(&format!(
            "<polygon points=\"{}\" fill=\"none\" stroke=\"{HULL_COLOR}\" stroke-width=\"2\"/>\n",
            coords.join(" ")
        ));
    }
}
