use super::*;

fn kf(keys: &[(f64, f64)]) -> Keyframes<f64> {
    Keyframes::new(keys.iter().map(|&(at, v)| Keyframe::new(at, v)).collect()).unwrap()
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn linear_interpolates_between_keys() {
    let k = kf(&[(0.0, 0.0), (0.5, 10.0), (1.0, 0.0)]);
    assert!(approx(k.sample(0.25), 5.0));
    assert!(approx(k.sample(0.5), 10.0));
    assert!(approx(k.sample(0.75), 5.0));
}

#[test]
fn duplicate_time_is_a_jump_to_the_later_key() {
    let k = kf(&[(0.0, 1.0), (0.3, 1.0), (0.3, 0.0), (1.0, 0.0)]);
    assert!(approx(k.sample(0.2999), 1.0));
    assert!(approx(k.sample(0.3), 0.0));
}

#[test]
fn validate_rejects_bad_tracks() {
    assert!(Keyframes::<f64>::new(vec![]).is_err());
    assert!(Keyframes::new(vec![Keyframe::new(0.1, 1.0), Keyframe::new(1.0, 1.0)]).is_err());
    assert!(
        Keyframes::new(vec![
            Keyframe::new(0.0, 1.0),
            Keyframe::new(0.6, 1.0),
            Keyframe::new(0.4, 1.0),
            Keyframe::new(1.0, 1.0),
        ])
        .is_err()
    );
}

#[test]
fn anchored_at_zero_is_identity() {
    let k = kf(&[(0.0, 1.0), (0.2, 0.0), (1.0, 0.0)]);
    assert_eq!(k.anchored(0.0), k);
    assert_eq!(k.anchored(1.0), k);
}

#[test]
fn anchored_shifts_the_profile() {
    // A 0.2-long ramp from 1 down to 0, then rest.
    let profile = kf(&[(0.0, 1.0), (0.2, 0.0), (1.0, 0.0)]);
    let k = profile.anchored(0.3);
    k.validate().unwrap();
    assert!(approx(k.sample(0.29), 0.0));
    assert!(approx(k.sample(0.3), 1.0));
    assert!(approx(k.sample(0.4), 0.5));
    assert!(approx(k.sample(0.5), 0.0));
}

#[test]
fn anchored_wraps_past_cycle_end() {
    let profile = kf(&[(0.0, 1.0), (0.2, 0.0), (1.0, 0.0)]);
    let k = profile.anchored(0.9);
    k.validate().unwrap();
    // Half the ramp happens before the seam, half after.
    assert!(approx(k.sample(0.95), 0.75));
    assert!(approx(k.sample(0.0), 0.5));
    assert!(approx(k.sample(0.05), 0.25));
    assert!(approx(k.sample(0.1), 0.0));
    assert!(approx(k.sample(0.89), 0.0));
}

#[test]
fn anchored_matches_shifted_sampling_everywhere() {
    let profile = kf(&[(0.0, 0.0), (0.1, 4.0), (0.35, 2.0), (0.35, 7.0), (0.6, 1.0), (1.0, 0.0)]);
    for anchor in [0.05, 0.33, 0.5, 0.71, 0.999] {
        let k = profile.anchored(anchor);
        k.validate().unwrap();
        for i in 0..200 {
            let t = i as f64 / 200.0 + 0.0013;
            let u = (t - anchor).rem_euclid(1.0);
            assert!(
                approx(k.sample(t), profile.sample(u)),
                "anchor {anchor} t {t}"
            );
        }
    }
}

#[test]
fn point_tracks_interpolate_both_axes() {
    let k = Keyframes::new(vec![
        Keyframe::new(0.0, Point::new(0.0, 10.0)),
        Keyframe::new(1.0, Point::new(10.0, 0.0)),
    ])
    .unwrap();
    assert_eq!(k.sample(0.5), Point::new(5.0, 5.0));
}
