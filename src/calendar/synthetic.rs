use chrono::{Datelike, Days, NaiveDate, Weekday};

use crate::{
    calendar::model::Calendar,
    foundation::core::Rng64,
    foundation::error::{GalaxiaError, GalaxiaResult},
};

const WEEKDAY_COUNTS: [u32; 7] = [0, 1, 2, 3, 5, 8, 13];
const WEEKDAY_WEIGHTS: [f64; 7] = [3.0, 4.0, 3.0, 2.0, 1.0, 1.0, 0.5];
const WEEKEND_COUNTS: [u32; 3] = [0, 1, 2];
const WEEKEND_WEIGHTS: [f64; 3] = [5.0, 3.0, 1.0];

/// Salt separating the synthetic-calendar stream from other consumers of the scene seed.
pub const SYNTHETIC_STREAM: u64 = 0x5EED_CA1E;

/// Plausible stand-in calendar for when no provider data is available.
///
/// Covers `[end - window_days, end]` inclusive. Weekdays draw from a busier distribution than
/// weekends. The same `(end, window_days, seed)` always yields the same calendar.
pub fn synthetic_calendar(end: NaiveDate, window_days: u32, seed: u64) -> GalaxiaResult<Calendar> {
    let start = end
        .checked_sub_days(Days::new(u64::from(window_days)))
        .ok_or_else(|| GalaxiaError::validation("synthetic window reaches before year -262143"))?;

    let mut rng = Rng64::stream(seed, SYNTHETIC_STREAM);
    let days = start
        .iter_days()
        .take_while(|d| *d <= end)
        .map(|date| (date, draw_count(&mut rng, date.weekday())))
        .collect::<Vec<_>>();

    tracing::debug!(%start, %end, days = days.len(), "generated synthetic calendar");
    Calendar::from_days(days)
}

fn draw_count(rng: &mut Rng64, weekday: Weekday) -> u32 {
    let (counts, weights): (&[u32], &[f64]) = match weekday {
        Weekday::Sat | Weekday::Sun => (&WEEKEND_COUNTS, &WEEKEND_WEIGHTS),
        _ => (&WEEKDAY_COUNTS, &WEEKDAY_WEIGHTS),
    };
    rng.weighted_index(weights)
        .and_then(|idx| counts.get(idx).copied())
        .unwrap_or(0)
}

#[cfg(test)]
#[path = "../../tests/unit/calendar/synthetic.rs"]
mod tests;
