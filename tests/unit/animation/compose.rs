use chrono::NaiveDate;

use super::*;
use crate::foundation::core::Rect;

const CYCLE: f64 = 14.0;
const TRAVEL: f64 = 0.7;

fn motion() -> MotionPath {
    MotionPath::for_lane(Rect::new(56.0, 183.0, 856.0, 219.0), CYCLE).unwrap()
}

fn target(fire_time: f64) -> Target {
    Target {
        week_index: 3,
        day_index: 2,
        date: NaiveDate::from_ymd_opt(2024, 2, 6).unwrap(),
        count: 20,
        center: Point::new(111.0, 111.0),
        fire_time,
    }
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn strikes_share_fire_and_impact_times() {
    let strikes = compose_strikes(&[target(7.0)], &motion(), TRAVEL).unwrap();
    let s = &strikes[0];
    assert!(approx(s.impact_time, 7.7));
    assert_eq!(s.launch, motion().position(7.0));

    let fire = 7.0 / CYCLE;
    let impact = fire + TRAVEL / CYCLE;

    // Projectile: visible only in flight, moving launch -> center.
    assert!(approx(s.projectile_opacity.sample(fire - 0.001), 0.0));
    assert!(approx(s.projectile_opacity.sample(fire), 1.0));
    assert!(approx(s.projectile_opacity.sample(impact - 0.001), 1.0));
    assert!(approx(s.projectile_opacity.sample(impact + 0.001), 0.0));
    assert!((s.projectile_path.sample(fire) - s.launch).hypot() < 1e-6);
    assert!((s.projectile_path.sample(impact) - s.target.center).hypot() < 1e-6);

    // Pulse: steady until impact, dips, then recovers.
    assert!(approx(s.pulse.sample(impact - 0.001), 1.0));
    assert!(approx(s.pulse.sample(impact + PULSE_DIP_SPAN), PULSE_LOW));
    let mid = s.pulse.sample(impact + 0.1);
    assert!(mid > PULSE_LOW && mid < 1.0);
    assert!(approx(s.pulse.sample(impact + PULSE_RECOVER_SPAN + 0.001), 1.0));

    // Burst: invisible until impact, then expands and fades.
    assert!(approx(s.burst_opacity.sample(impact - 0.001), 0.0));
    assert!(approx(s.burst_opacity.sample(impact), BURST_PEAK_OPACITY));
    assert!(approx(s.burst_radius.sample(impact), BURST_RADIUS_START));
    assert!(s.burst_radius.sample(impact + BURST_SPAN / 2.0) > BURST_RADIUS_START);
    assert!(approx(s.burst_opacity.sample(impact + BURST_SPAN + 0.001), 0.0));
}

#[test]
fn every_track_is_a_valid_cycle() {
    let targets = (0..10)
        .map(|i| target(CYCLE * (i as f64 + 0.5) / 10.0))
        .collect::<Vec<_>>();
    let strikes = compose_strikes(&targets, &motion(), TRAVEL).unwrap();
    assert_eq!(strikes.len(), 10);
    for s in &strikes {
        s.pulse.validate().unwrap();
        s.projectile_path.validate().unwrap();
        s.projectile_opacity.validate().unwrap();
        s.burst_radius.validate().unwrap();
        s.burst_opacity.validate().unwrap();
    }
}

#[test]
fn impact_on_the_cycle_seam_wraps_to_the_start() {
    // Last of ten targets: fire at 13.3, impact exactly at 14.0.
    let strikes = compose_strikes(&[target(13.3)], &motion(), TRAVEL).unwrap();
    let s = &strikes[0];
    assert!(s.burst_opacity.sample(0.001) > 0.8);
    assert!(approx(s.pulse.sample(0.999), 1.0));
    assert!(approx(s.pulse.sample(PULSE_DIP_SPAN), PULSE_LOW));
    assert!(approx(s.projectile_opacity.sample(0.96), 1.0));
}

#[test]
fn no_targets_no_strikes() {
    assert!(compose_strikes(&[], &motion(), TRAVEL).unwrap().is_empty());
}

#[test]
fn travel_must_fit_the_cycle() {
    assert!(compose_strikes(&[target(1.0)], &motion(), 0.0).is_err());
    assert!(compose_strikes(&[target(1.0)], &motion(), CYCLE).is_err());
}

#[test]
fn motes_are_seeded_and_in_bounds() {
    let canvas = Canvas {
        width: 872,
        height: 257,
    };
    let a = scatter_motes(canvas, 40, &mut Rng64::stream(42, MOTE_STREAM));
    let b = scatter_motes(canvas, 40, &mut Rng64::stream(42, MOTE_STREAM));
    assert_eq!(a, b);
    assert_eq!(a.len(), 40);
    for m in &a {
        assert!(m.center.x >= 10.0 && m.center.x <= 862.0);
        assert!(m.center.y >= 10.0 && m.center.y <= 247.0);
        assert!((0.4..1.2).contains(&m.radius));
        assert!(m.opacity_low < m.opacity_high);
        assert!((2.0..5.0).contains(&m.period_secs));
        assert!((0.0..3.0).contains(&m.phase_secs));
    }
}
