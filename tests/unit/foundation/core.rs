use super::*;

#[test]
fn same_seed_same_sequence() {
    let mut a = Rng64::new(42);
    let mut b = Rng64::new(42);
    for _ in 0..16 {
        assert_eq!(a.next_u64(), b.next_u64());
    }
}

#[test]
fn streams_with_different_salts_diverge() {
    let mut a = Rng64::stream(42, 1);
    let mut b = Rng64::stream(42, 2);
    let xs: Vec<u64> = (0..4).map(|_| a.next_u64()).collect();
    let ys: Vec<u64> = (0..4).map(|_| b.next_u64()).collect();
    assert_ne!(xs, ys);
}

#[test]
fn unit_draws_stay_in_range() {
    let mut rng = Rng64::new(7);
    for _ in 0..1000 {
        let v = rng.next_f64_01();
        assert!((0.0..1.0).contains(&v));
        let u = rng.uniform(2.0, 5.0);
        assert!((2.0..5.0).contains(&u));
    }
}

#[test]
fn weighted_index_skips_zero_weights() {
    let mut rng = Rng64::new(3);
    for _ in 0..500 {
        let idx = rng.weighted_index(&[0.0, 1.0, 0.0, 2.0]).unwrap();
        assert!(idx == 1 || idx == 3);
    }
    assert_eq!(rng.weighted_index(&[]), None);
    assert_eq!(rng.weighted_index(&[0.0, 0.0]), None);
}
