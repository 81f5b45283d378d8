use super::*;

fn end() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 30).unwrap()
}

#[test]
fn covers_inclusive_window() {
    let cal = synthetic_calendar(end(), 365, 42).unwrap();
    assert_eq!(cal.days().count(), 366);
    let dates: Vec<NaiveDate> = cal.days().map(|(_, _, d)| d.date).collect();
    assert_eq!(dates.last(), Some(&end()));
    assert_eq!(dates.first().copied(), end().checked_sub_days(Days::new(365)));
    assert!((53..=54).contains(&cal.week_count()));
}

#[test]
fn same_seed_is_stable() {
    let a = synthetic_calendar(end(), 365, 42).unwrap();
    let b = synthetic_calendar(end(), 365, 42).unwrap();
    assert_eq!(a, b);
    let c = synthetic_calendar(end(), 365, 43).unwrap();
    assert_ne!(a, c);
}

#[test]
fn weekends_stay_quiet() {
    let cal = synthetic_calendar(end(), 365, 42).unwrap();
    for (_, slot, day) in cal.days() {
        if slot == 0 || slot == 6 {
            assert!(day.count <= 2, "weekend {} has {}", day.date, day.count);
        } else {
            assert!(WEEKDAY_COUNTS.contains(&day.count));
        }
    }
    assert_eq!(cal.total(), cal.sum_counts());
    assert!(cal.total() > 0);
}
