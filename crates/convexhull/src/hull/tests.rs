//! Builder scenarios and hull properties shared by Graham and Jarvis.

use super::*;
use crate::geom2::rand::{draw_cloud, CloudCfg, CloudShape, ReplayToken};
use crate::geom2::{cmp_x_then_y, cross};
use proptest::prelude::*;

fn p(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

fn sorted(mut v: Vec<Point>) -> Vec<Point> {
    v.sort_by(cmp_x_then_y);
    v
}

fn both(points: &[Point]) -> [(Algorithm, Hull); 2] {
    Algorithm::ALL.map(|algo| (algo, algo.build(points).expect("finite input")))
}

#[test]
fn square_with_interior_point() {
    let pts = [p(0.0, 0.0), p(4.0, 0.0), p(4.0, 4.0), p(0.0, 4.0), p(2.0, 2.0)];
    for (algo, hull) in both(&pts) {
        assert_eq!(
            sorted(hull.vertices().to_vec()),
            vec![p(0.0, 0.0), p(0.0, 4.0), p(4.0, 0.0), p(4.0, 4.0)],
            "{algo}"
        );
        assert!(hull.is_strictly_convex(), "{algo}");
        assert!((hull.signed_area() - 16.0).abs() < 1e-12, "{algo}");
    }
}

#[test]
fn collinear_input_is_degenerate() {
    let pts = [p(0.0, 0.0), p(1.0, 0.0), p(2.0, 0.0)];
    for (algo, hull) in both(&pts) {
        assert!(hull.is_degenerate(), "{algo}");
        assert!(hull.polygon().is_none(), "{algo}");
        assert_eq!(sorted(hull.into_vertices()), vec![p(0.0, 0.0), p(2.0, 0.0)]);
    }
}

#[test]
fn two_points_give_no_polygon() {
    let pts = [p(0.0, 0.0), p(1.0, 1.0)];
    for (algo, hull) in both(&pts) {
        assert!(hull.is_empty(), "{algo}");
        assert!(hull.polygon().is_none(), "{algo}");
    }
    for (_, hull) in both(&[]) {
        assert!(hull.is_empty());
    }
}

#[test]
fn triangle_keeps_all_vertices_ccw() {
    let pts = [p(0.0, 0.0), p(2.0, 0.0), p(1.0, 2.0)];
    for (algo, hull) in both(&pts) {
        let poly = hull.polygon().expect("triangle");
        assert_eq!(poly.len(), 3, "{algo}");
        assert!(hull.signed_area() > 0.0, "{algo}");
        assert!(hull.is_strictly_convex(), "{algo}");
    }
}

#[test]
fn edge_midpoint_is_excluded() {
    let pts = [p(0.0, 0.0), p(4.0, 0.0), p(4.0, 4.0), p(0.0, 4.0), p(2.0, 0.0)];
    for (algo, hull) in both(&pts) {
        assert_eq!(hull.len(), 4, "{algo}");
        assert!(!hull.vertices().contains(&p(2.0, 0.0)), "{algo}");
        assert!(hull.contains(p(2.0, 0.0)), "{algo}");
    }
}

#[test]
fn collinear_points_on_every_edge_are_excluded() {
    let mut pts = Vec::new();
    for k in 0..=4 {
        let t = k as f64;
        pts.extend([p(t, 0.0), p(4.0, t), p(4.0 - t, 4.0), p(0.0, 4.0 - t)]);
    }
    for (algo, hull) in both(&pts) {
        assert_eq!(hull.len(), 4, "{algo}");
    }
}

#[test]
fn start_vertices_follow_each_sort_key() {
    // lowest point differs from the leftmost one
    let pts = [p(0.0, 1.0), p(2.0, 0.0), p(3.0, 3.0), p(1.0, 4.0)];
    let g = graham_scan(&pts).unwrap();
    let j = jarvis_march(&pts).unwrap();
    assert_eq!(g.vertices()[0], p(0.0, 1.0));
    assert_eq!(j.vertices()[0], p(2.0, 0.0));
    assert_eq!(sorted(g.into_vertices()), sorted(j.into_vertices()));
}

#[test]
fn random_clouds_agree() {
    let mut tok = ReplayToken { seed: 2015, index: 0 };
    for shape in [CloudShape::Box, CloudShape::Disk, CloudShape::Circle] {
        for _ in 0..8 {
            let cfg = CloudCfg {
                count: 48,
                shape,
                radius: 0.9,
            };
            let pts = draw_cloud(cfg, tok);
            tok = tok.next();
            let [(_, g), (_, j)] = both(&pts);
            assert!(g.is_strictly_convex());
            assert!(j.is_strictly_convex());
            assert_eq!(sorted(g.vertices().to_vec()), sorted(j.vertices().to_vec()));
            if shape == CloudShape::Circle {
                assert_eq!(g.len(), pts.len());
            }
        }
    }
}

#[test]
fn algorithm_names_round_trip() {
    for algo in Algorithm::ALL {
        assert_eq!(algo.key().parse::<Algorithm>(), Ok(algo));
    }
    assert_eq!(" Graham-Scan ".parse::<Algorithm>(), Ok(Algorithm::GrahamScan));
    assert_eq!("gift-wrapping".parse::<Algorithm>(), Ok(Algorithm::JarvisMarch));
    let err = "quickhull".parse::<Algorithm>().unwrap_err();
    assert!(err.to_string().contains("quickhull"));
    assert_eq!(Algorithm::JarvisMarch.label(), "Jarvis' March");
}

fn small_grid_points() -> impl Strategy<Value = Vec<Point>> {
    prop::collection::vec((-12i32..=12, -12i32..=12), 0..40).prop_map(|v| {
        v.into_iter()
            .map(|(x, y)| Point::new(x as f64, y as f64))
            .collect()
    })
}

/// Eighths (exact in f64 products) mixed with both signed zeros.
fn signed_coord() -> impl Strategy<Value = f64> {
    prop_oneof![
        Just(0.0),
        Just(-0.0),
        (-24i32..=24).prop_map(|k| k as f64 / 8.0),
    ]
}

fn signed_zero_points() -> impl Strategy<Value = Vec<Point>> {
    prop::collection::vec((signed_coord(), signed_coord()), 0..30)
        .prop_map(|v| v.into_iter().map(|(x, y)| Point::new(x, y)).collect())
}

fn check_convex_and_encloses(pts: &[Point]) -> Result<(), TestCaseError> {
    for (_, hull) in both(pts) {
        prop_assert!(hull.len() <= pts.len());
        for (k, v) in hull.vertices().iter().enumerate() {
            prop_assert!(pts.contains(v));
            prop_assert!(!hull.vertices()[..k].contains(v), "repeated vertex {:?}", v);
        }
        if hull.polygon().is_some() {
            prop_assert!(hull.is_strictly_convex());
            for q in pts {
                prop_assert!(hull.contains(*q));
            }
        }
    }
    Ok(())
}

fn check_minimal(pts: &[Point]) -> Result<(), TestCaseError> {
    for (_, hull) in both(pts) {
        if hull.polygon().is_none() {
            continue;
        }
        for k in 0..hull.len() {
            let mut rest = hull.vertices().to_vec();
            let v = rest.remove(k);
            let reduced = Hull::from_vertices(rest);
            prop_assert!(!reduced.contains(v));
        }
    }
    Ok(())
}

fn check_agreement(pts: &[Point]) -> Result<(), TestCaseError> {
    let [(_, g), (_, j)] = both(pts);
    prop_assert_eq!(sorted(g.into_vertices()), sorted(j.into_vertices()));
    Ok(())
}

fn check_degenerate_is_collinear(pts: &[Point]) -> Result<(), TestCaseError> {
    if pts.len() < 3 {
        return Ok(());
    }
    for (_, hull) in both(pts) {
        if hull.is_degenerate() {
            let a = hull.vertices()[0];
            let b = *hull.vertices().last().unwrap();
            for q in pts {
                prop_assert_eq!(cross(a, b, *q), 0.0);
            }
        }
    }
    Ok(())
}

proptest! {
    #[test]
    fn hull_is_convex_and_encloses_input(pts in small_grid_points()) {
        check_convex_and_encloses(&pts)?;
    }

    #[test]
    fn hull_vertices_are_minimal(pts in small_grid_points()) {
        check_minimal(&pts)?;
    }

    #[test]
    fn graham_and_jarvis_agree(pts in small_grid_points()) {
        check_agreement(&pts)?;
    }

    #[test]
    fn degenerate_hull_means_collinear_input(pts in small_grid_points()) {
        check_degenerate_is_collinear(&pts)?;
    }

    #[test]
    fn signed_zero_inputs_keep_hull_properties(pts in signed_zero_points()) {
        check_convex_and_encloses(&pts)?;
        check_minimal(&pts)?;
        check_agreement(&pts)?;
        check_degenerate_is_collinear(&pts)?;
    }

    #[test]
    fn points_on_a_line_collapse_to_extremes(xs in prop::collection::vec(-30i32..30, 3..20)) {
        let pts: Vec<Point> = xs.iter().map(|&x| Point::new(x as f64, 2.0 * x as f64 + 1.0)).collect();
        let lo = *xs.iter().min().unwrap() as f64;
        let hi = *xs.iter().max().unwrap() as f64;
        for (_, hull) in both(&pts) {
            prop_assert!(hull.polygon().is_none());
            if lo < hi {
                prop_assert_eq!(
                    sorted(hull.into_vertices()),
                    vec![Point::new(lo, 2.0 * lo + 1.0), Point::new(hi, 2.0 * hi + 1.0)]
                );
            } else {
                prop_assert_eq!(hull.len(), 1);
            }
        }
    }
}
