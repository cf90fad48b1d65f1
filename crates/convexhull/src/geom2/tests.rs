use super::*;
use proptest::prelude::*;

fn grid_point() -> impl Strategy<Value = Point> {
    (-50i32..=50, -50i32..=50).prop_map(|(x, y)| Point::new(x as f64, y as f64))
}

#[test]
fn collinear_iff_on_one_line() {
    let a = Point::new(-1.0, -1.0);
    let b = Point::new(1.0, 1.0);
    assert_eq!(orientation(a, b, Point::new(3.0, 3.0)), Orientation::Collinear);
    assert_eq!(orientation(a, b, Point::new(0.0, 0.0)), Orientation::Collinear);
    assert_eq!(orientation(a, b, Point::new(3.0, 3.5)), Orientation::Left);
    assert_eq!(orientation(a, b, Point::new(3.5, 3.0)), Orientation::Right);
}

#[test]
fn turn_angle_orders_left_candidates_by_turn() {
    // Walking +x along the bottom edge of a square.
    let prev = Point::new(0.0, 0.0);
    let cur = Point::new(1.0, 0.0);
    let mut cands = vec![
        Point::new(0.0, 1.0),
        Point::new(1.0, 1.0),
        Point::new(2.0, 1.0),
        Point::new(2.0, 0.0),
    ];
    cands.sort_by(|a, b| turn_angle(prev, cur, *a).total_cmp(&turn_angle(prev, cur, *b)));
    assert_eq!(
        cands,
        vec![
            Point::new(2.0, 0.0),
            Point::new(2.0, 1.0),
            Point::new(1.0, 1.0),
            Point::new(0.0, 1.0),
        ]
    );
}

proptest! {
    #[test]
    fn orientation_is_antisymmetric(a in grid_point(), b in grid_point(), c in grid_point()) {
        prop_assert_eq!(orientation(a, b, c), orientation(a, c, b).reversed());
        prop_assert_eq!(cross(a, b, c), -cross(a, c, b));
    }

    #[test]
    fn orientation_is_invariant_under_rotation_of_the_triple(
        a in grid_point(), b in grid_point(), c in grid_point()
    ) {
        prop_assert_eq!(orientation(a, b, c), orientation(b, c, a));
    }

    #[test]
    fn collinear_with_a_scaled_direction(a in grid_point(), d in grid_point(), k in -5i32..=5) {
        let b = a + d;
        let c = a + d * k as f64;
        prop_assert_eq!(orientation(a, b, c), Orientation::Collinear);
    }

    #[test]
    fn turn_angle_stays_in_range(
        prev in grid_point(), cur in grid_point(), cand in grid_point()
    ) {
        prop_assume!(prev != cur && cand != cur);
        let t = turn_angle(prev, cur, cand);
        prop_assert!(t >= std::f64::consts::PI - 1e-12);
        prop_assert!(t <= std::f64::consts::TAU + 1e-12);
    }
}
