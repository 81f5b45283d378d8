use super::*;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn level_thresholds_match_table() {
    let table = [
        (0, 0),
        (1, 1),
        (3, 1),
        (4, 2),
        (7, 2),
        (8, 3),
        (12, 3),
        (13, 4),
        (500, 4),
    ];
    for (count, level) in table {
        assert_eq!(level_for(count), level, "count {count}");
    }
}

#[test]
fn level_is_monotonic() {
    let mut prev = 0;
    for c in 0..100 {
        let l = level_for(c);
        assert!(l >= prev);
        assert!(usize::from(l) < LEVELS);
        prev = l;
    }
}

#[test]
fn days_land_in_sunday_first_slots() {
    // 2024-01-03 is a Wednesday.
    let cal = Calendar::from_days([
        (date(2024, 1, 3), 1),
        (date(2024, 1, 6), 2),
        (date(2024, 1, 7), 3),
    ])
    .unwrap();

    assert_eq!(cal.week_count(), 2);
    assert!(cal.weeks()[0].day(0).is_none());
    assert_eq!(cal.weeks()[0].day(3).unwrap().count, 1);
    assert_eq!(cal.weeks()[0].day(6).unwrap().count, 2);
    assert_eq!(cal.weeks()[1].day(0).unwrap().date, date(2024, 1, 7));
    assert_eq!(cal.total(), 6);
    assert_eq!(cal.sum_counts(), 6);
}

#[test]
fn missing_weeks_become_empty_columns() {
    let cal = Calendar::from_days([(date(2024, 1, 7), 1), (date(2024, 1, 28), 1)]).unwrap();
    assert_eq!(cal.week_count(), 4);
    assert_eq!(cal.weeks()[1].days().count(), 0);
    assert_eq!(cal.weeks()[2].days().count(), 0);
    assert_eq!(cal.weeks()[3].day(0).unwrap().date, date(2024, 1, 28));
}

#[test]
fn non_increasing_dates_are_rejected() {
    let err = Calendar::from_days([(date(2024, 1, 3), 1), (date(2024, 1, 3), 2)]).unwrap_err();
    assert!(matches!(err, GalaxiaError::Calendar(_)));
}

#[test]
fn empty_input_is_rejected() {
    let err = Calendar::from_days(Vec::<(NaiveDate, u32)>::new()).unwrap_err();
    assert!(err.to_string().contains("no days"));
}

#[test]
fn reported_total_overrides_display_only() {
    let cal = Calendar::from_days([(date(2024, 1, 3), 4)]).unwrap().with_total(99);
    assert_eq!(cal.total(), 99);
    assert_eq!(cal.sum_counts(), 4);
}

#[test]
fn days_iterate_week_major() {
    let cal = Calendar::from_days([
        (date(2024, 1, 6), 1),
        (date(2024, 1, 7), 2),
        (date(2024, 1, 8), 3),
    ])
    .unwrap();
    let order: Vec<(usize, usize)> = cal.days().map(|(w, d, _)| (w, d)).collect();
    assert_eq!(order, vec![(0, 6), (1, 0), (1, 1)]);
}
