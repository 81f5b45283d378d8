use super::*;

fn lane() -> Rect {
    Rect::new(56.0, 183.0, 856.0, 219.0)
}

fn path() -> MotionPath {
    MotionPath::for_lane(lane(), 14.0).unwrap()
}

fn close(a: Point, b: Point) -> bool {
    (a - b).hypot() < 1e-6
}

#[test]
fn waypoints_form_a_diamond_in_the_lane() {
    let p = path();
    let w = p.waypoints();
    assert_eq!(w[0], Point::new(66.0, 201.0));
    assert_eq!(w[2], Point::new(846.0, 201.0));
    assert!(w[1].y < w[0].y && w[3].y > w[0].y);
    assert_eq!(w[1].x, w[3].x);
    for pt in w {
        assert!(lane().contains(*pt));
    }
}

#[test]
fn position_hits_waypoints_at_segment_starts() {
    let p = path();
    for k in 0..=4 {
        let t = k as f64 * p.segment_duration();
        assert!(close(p.position(t), p.waypoints()[k % 4]), "k={k}");
    }
}

#[test]
fn loop_closes() {
    let p = path();
    assert!(close(p.position(0.0), p.position(14.0)));
    assert!(close(p.position(3.0), p.position(17.0)));
    assert!(close(p.position(-1.0), p.position(13.0)));
}

#[test]
fn continuous_across_segment_boundaries() {
    let p = path();
    let eps = 1e-9;
    for k in 1..4 {
        let t = k as f64 * p.segment_duration();
        let before = p.position(t - eps);
        let after = p.position(t + eps);
        assert!((before - after).hypot() < 1e-4, "boundary {k}");
    }
}

#[test]
fn midpoint_interpolates_linearly() {
    let p = path();
    let w = p.waypoints();
    let mid = p.position(p.segment_duration() / 2.0);
    assert!(close(mid, w[0].midpoint(w[1])));
}

#[test]
fn rejects_bad_inputs() {
    assert!(MotionPath::for_lane(lane(), 0.0).is_err());
    let open = [Point::ZERO, Point::new(1.0, 0.0), Point::ZERO, Point::ZERO, Point::new(5.0, 5.0)];
    assert!(MotionPath::new(open, 1.0).is_err());
}
