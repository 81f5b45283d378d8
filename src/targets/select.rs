use chrono::NaiveDate;

use crate::{calendar::model::Calendar, foundation::core::Point, layout::grid::GridLayout};

/// A calendar cell the actor strikes once per cycle.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Target {
    pub week_index: usize,
    pub day_index: usize,
    pub date: NaiveDate,
    pub count: u32,
    /// Cell center in canvas pixels.
    pub center: Point,
    /// Launch instant within the cycle, in seconds.
    pub fire_time: f64,
}

/// Pick up to `target_count` representative active cells, in chronological order.
///
/// Active cells (count > 0) are split into `target_count` contiguous bands of
/// `max(1, len / target_count)` cells; the last band also takes the remainder so the most
/// recent activity is never dropped. Each band contributes its busiest cell, earliest first on
/// ties. Triggers are spread evenly over the cycle: `fire_time(i) = cycle * (i + 0.5) / n`.
pub fn select_targets(
    calendar: &Calendar,
    layout: &GridLayout,
    target_count: usize,
    cycle_secs: f64,
) -> Vec<Target> {
    if target_count == 0 {
        return Vec::new();
    }

    let active = calendar
        .days()
        .filter(|(_, _, d)| d.count > 0)
        .collect::<Vec<_>>();
    if active.is_empty() {
        return Vec::new();
    }

    let band = (active.len() / target_count).max(1);
    let mut picks = Vec::with_capacity(target_count);
    for i in 0..target_count {
        let start = i * band;
        if start >= active.len() {
            break;
        }
        let end = if i + 1 == target_count {
            active.len()
        } else {
            (start + band).min(active.len())
        };

        let mut best = &active[start];
        for cell in &active[start + 1..end] {
            if cell.2.count > best.2.count {
                best = cell;
            }
        }
        picks.push(*best);
    }

    let n = picks.len() as f64;
    let targets = picks
        .into_iter()
        .enumerate()
        .map(|(i, (w, d, day))| Target {
            week_index: w,
            day_index: d,
            date: day.date,
            count: day.count,
            center: layout.cell_center(w, d),
            fire_time: cycle_secs * (i as f64 + 0.5) / n,
        })
        .collect::<Vec<_>>();

    tracing::debug!(
        active = active.len(),
        band,
        selected = targets.len(),
        "selected targets"
    );
    targets
}

#[cfg(test)]
#[path = "../../tests/unit/targets/select.rs"]
mod tests;
