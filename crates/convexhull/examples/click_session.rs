//! Drive a `Session` the way a window toolkit would: resize, clicks, mode switches.
//!
//! Usage:
//!   cargo run -p convexhull --example click_session
//!
//! Prints the frame for each mode through a renderer that logs draw calls.

use convexhull::prelude::*;

struct PrintRenderer;

impl HullRenderer for PrintRenderer {
    fn axes(&mut self, x_axis: [Point; 2], y_axis: [Point; 2]) {
        println!(
            "  axes x: {:?}→{:?}  y: {:?}→{:?}",
            (x_axis[0].x, x_axis[0].y),
            (x_axis[1].x, x_axis[1].y),
            (y_axis[0].x, y_axis[0].y),
            (y_axis[1].x, y_axis[1].y)
        );
    }

    fn markers(&mut self, points: &[Point]) {
        println!("  {} markers", points.len());
    }

    fn closed_polygon(&mut self, vertices: &[Point]) {
        let loop_str: Vec<String> = vertices
            .iter()
            .map(|p| format!("({:.3}, {:.3})", p.x, p.y))
            .collect();
        println!("  hull loop: {}", loop_str.join(" → "));
    }
}

fn main() {
    let mut session = Session::new(Viewport::new(800, 600));
    let clicks = [
        (120.0, 480.0),
        (680.0, 500.0),
        (400.0, 300.0),
        (650.0, 90.0),
        (150.0, 110.0),
        (420.0, 40.0),
        (300.0, 350.0),
    ];
    for (px, py) in clicks {
        session.click(px, py);
    }

    println!("no mode selected:");
    session.frame().draw(&mut PrintRenderer);

    for algo in Algorithm::ALL {
        session.select(algo);
        println!("{}:", algo.label());
        session.frame().draw(&mut PrintRenderer);
    }
}
