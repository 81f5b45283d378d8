use chrono::{Datelike, Days, NaiveDate};

use crate::foundation::error::{GalaxiaError, GalaxiaResult};

/// Rows per week column. Slot 0 is Sunday.
pub const DAYS_PER_WEEK: usize = 7;

/// Number of distinct activity levels (`0..=4`).
pub const LEVELS: usize = 5;

/// Bucket a daily count into an activity level.
pub fn level_for(count: u32) -> u8 {
    match count {
        0 => 0,
        1..=3 => 1,
        4..=7 => 2,
        8..=12 => 3,
        _ => 4,
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Day {
    pub date: NaiveDate,
    pub count: u32,
    pub level: u8,
}

impl Day {
    pub fn new(date: NaiveDate, count: u32) -> Self {
        Self {
            date,
            count,
            level: level_for(count),
        }
    }
}

/// One calendar column. Slots outside the data window stay empty.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Week {
    days: [Option<Day>; DAYS_PER_WEEK],
}

impl Week {
    pub fn day(&self, day_index: usize) -> Option<&Day> {
        self.days.get(day_index).and_then(Option::as_ref)
    }

    /// Present days with their weekday slot, Sunday first.
    pub fn days(&self) -> impl Iterator<Item = (usize, &Day)> {
        self.days
            .iter()
            .enumerate()
            .filter_map(|(idx, d)| d.as_ref().map(|d| (idx, d)))
    }
}

/// Ordered weeks covering the activity window, plus the aggregate shown to readers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Calendar {
    weeks: Vec<Week>,
    total: u64,
}

impl Calendar {
    /// Group chronologically ordered `(date, count)` pairs into Sunday-first weeks.
    ///
    /// This is the one place where week-start conventions are normalized: whatever grouping
    /// the provider used, every day lands in the slot of its own weekday. Whole weeks missing
    /// from the input become empty columns so geometry stays chronological.
    pub fn from_days<I>(days: I) -> GalaxiaResult<Self>
    where
        I: IntoIterator<Item = (NaiveDate, u32)>,
    {
        let mut weeks = Vec::<Week>::new();
        let mut current_start: Option<NaiveDate> = None;
        let mut prev: Option<NaiveDate> = None;
        let mut total = 0u64;

        for (date, count) in days {
            if let Some(p) = prev
                && date <= p
            {
                return Err(GalaxiaError::calendar(format!(
                    "dates must be strictly increasing ({date} follows {p})"
                )));
            }
            prev = Some(date);

            let slot = date.weekday().num_days_from_sunday() as usize;
            let week_start = date
                .checked_sub_days(Days::new(slot as u64))
                .ok_or_else(|| GalaxiaError::calendar(format!("date out of range: {date}")))?;

            match current_start {
                Some(start) if start == week_start => {}
                Some(start) => {
                    let gap_weeks = (week_start - start).num_days() / DAYS_PER_WEEK as i64;
                    for _ in 1..gap_weeks {
                        weeks.push(Week::default());
                    }
                    weeks.push(Week::default());
                    current_start = Some(week_start);
                }
                None => {
                    weeks.push(Week::default());
                    current_start = Some(week_start);
                }
            }

            let week = weeks
                .last_mut()
                .ok_or_else(|| GalaxiaError::calendar("week grouping lost its column"))?;
            week.days[slot] = Some(Day::new(date, count));
            total += u64::from(count);
        }

        if weeks.is_empty() {
            return Err(GalaxiaError::calendar("calendar contains no days"));
        }
        Ok(Self { weeks, total })
    }

    /// Replace the displayed aggregate with a provider-reported value.
    ///
    /// Per-day counts are untouched; only header text depends on `total`.
    pub fn with_total(mut self, total: u64) -> Self {
        let sum = self.sum_counts();
        if total != sum {
            tracing::warn!(reported = total, summed = sum, "provider total differs from day sum");
        }
        self.total = total;
        self
    }

    pub fn weeks(&self) -> &[Week] {
        &self.weeks
    }

    pub fn week_count(&self) -> usize {
        self.weeks.len()
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn sum_counts(&self) -> u64 {
        self.days().map(|(_, _, d)| u64::from(d.count)).sum()
    }

    /// Every present day as `(week_index, day_index, day)`, week-major.
    pub fn days(&self) -> impl Iterator<Item = (usize, usize, &Day)> {
        self.weeks
            .iter()
            .enumerate()
            .flat_map(|(w, week)| week.days().map(move |(d, day)| (w, d, day)))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/calendar/model.rs"]
mod tests;
