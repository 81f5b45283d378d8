use chrono::Datelike;

use crate::{
    calendar::model::{Calendar, DAYS_PER_WEEK},
    foundation::core::{Canvas, Point, Rect},
    foundation::error::{GalaxiaError, GalaxiaResult},
};

/// Horizontal/vertical inflation of the grid border around the cell area.
pub const BORDER_INSET_X: f64 = 4.0;
pub const BORDER_INSET_Y: f64 = 6.0;

const MONTH_LABEL_LIFT: f64 = 12.0;
const HEADER_CLEARANCE: f64 = 24.0;
const WEEKDAY_LABEL_GAP: f64 = 8.0;
const FOOTER_MIN_HEIGHT: u32 = 14;
const MIN_LEFT_PAD: u32 = 36;
const MIN_TOP_PAD: u32 = 64;

/// Padding edges in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Edges {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl Default for Edges {
    fn default() -> Self {
        Self {
            left: 60,
            top: 75,
            right: 20,
            bottom: 80,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Cell edge length.
    pub cell: u32,
    /// Space between adjacent cells.
    pub gap: u32,
    pub padding: Edges,
    /// Height of the band below the grid the actor travels in.
    pub lane_height: u32,
    /// Height of the legend row below the lane.
    pub legend_height: u32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            cell: 12,
            gap: 3,
            padding: Edges::default(),
            lane_height: 36,
            legend_height: 22,
        }
    }
}

impl LayoutConfig {
    pub fn validate(&self) -> GalaxiaResult<()> {
        if self.cell == 0 {
            return Err(GalaxiaError::validation("layout cell size must be > 0"));
        }
        if self.padding.left < MIN_LEFT_PAD {
            return Err(GalaxiaError::validation(format!(
                "left padding must be >= {MIN_LEFT_PAD} to fit weekday labels"
            )));
        }
        if self.padding.top < MIN_TOP_PAD {
            return Err(GalaxiaError::validation(format!(
                "top padding must be >= {MIN_TOP_PAD} to fit the header and month labels"
            )));
        }
        let needed =
            BORDER_INSET_Y as u32 + self.lane_height + self.legend_height + FOOTER_MIN_HEIGHT;
        if self.padding.bottom < needed {
            return Err(GalaxiaError::validation(format!(
                "bottom padding must be >= {needed} (border + lane + legend + footer)"
            )));
        }
        Ok(())
    }

    fn pitch(&self) -> f64 {
        f64::from(self.cell + self.gap)
    }
}

/// Pixel geometry for a calendar of `cols` weeks.
///
/// Every band is derived from the same config, stacked top to bottom: header, month labels,
/// grid (with weekday labels to its left), actor lane, legend, footer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridLayout {
    config: LayoutConfig,
    cols: usize,
}

impl GridLayout {
    pub fn new(config: LayoutConfig, cols: usize) -> Self {
        Self { config, cols }
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn canvas(&self) -> Canvas {
        let p = &self.config.padding;
        let grid_w = self.span(self.cols);
        let grid_h = self.span(DAYS_PER_WEEK);
        Canvas {
            width: p.left + grid_w + p.right,
            height: p.top + grid_h + p.bottom,
        }
    }

    // `n` cells plus the gaps between them.
    fn span(&self, n: usize) -> u32 {
        let n = u32::try_from(n).unwrap_or(u32::MAX);
        n.saturating_mul(self.config.cell + self.config.gap)
            .saturating_sub(self.config.gap)
    }

    pub fn cell_origin(&self, week_index: usize, day_index: usize) -> Point {
        let p = &self.config.padding;
        Point::new(
            f64::from(p.left) + week_index as f64 * self.config.pitch(),
            f64::from(p.top) + day_index as f64 * self.config.pitch(),
        )
    }

    pub fn cell_rect(&self, week_index: usize, day_index: usize) -> Rect {
        let o = self.cell_origin(week_index, day_index);
        let s = f64::from(self.config.cell);
        Rect::new(o.x, o.y, o.x + s, o.y + s)
    }

    pub fn cell_center(&self, week_index: usize, day_index: usize) -> Point {
        self.cell_rect(week_index, day_index).center()
    }

    /// Area covered by cells.
    pub fn grid_rect(&self) -> Rect {
        let p = &self.config.padding;
        let x0 = f64::from(p.left);
        let y0 = f64::from(p.top);
        Rect::new(
            x0,
            y0,
            x0 + f64::from(self.span(self.cols)),
            y0 + f64::from(self.span(DAYS_PER_WEEK)),
        )
    }

    pub fn border_rect(&self) -> Rect {
        self.grid_rect().inflate(BORDER_INSET_X, BORDER_INSET_Y)
    }

    /// Band holding the title and subtitle.
    pub fn header_band(&self) -> Rect {
        let bottom = f64::from(self.config.padding.top) - HEADER_CLEARANCE;
        Rect::new(0.0, 0.0, self.width(), bottom.max(0.0))
    }

    pub fn month_label_baseline(&self) -> f64 {
        f64::from(self.config.padding.top) - MONTH_LABEL_LIFT
    }

    /// Right edge (text anchor) and baseline of a weekday label.
    pub fn weekday_label_anchor(&self, day_index: usize) -> Point {
        let o = self.cell_origin(0, day_index);
        Point::new(
            f64::from(self.config.padding.left) - WEEKDAY_LABEL_GAP,
            o.y + f64::from(self.config.cell) * 0.75,
        )
    }

    /// Band under the grid border the actor flies in.
    pub fn lane_band(&self) -> Rect {
        let b = self.border_rect();
        Rect::new(
            b.x0,
            b.y1,
            b.x1,
            b.y1 + f64::from(self.config.lane_height),
        )
    }

    pub fn legend_band(&self) -> Rect {
        let lane = self.lane_band();
        Rect::new(
            0.0,
            lane.y1,
            self.width(),
            lane.y1 + f64::from(self.config.legend_height),
        )
    }

    pub fn footer_band(&self) -> Rect {
        let legend = self.legend_band();
        Rect::new(0.0, legend.y1, self.width(), self.height())
    }

    /// Swatch for activity level `level` in the legend row.
    pub fn legend_swatch(&self, level: usize) -> Rect {
        let band = self.legend_band();
        let s = f64::from(self.config.cell);
        let x = f64::from(self.config.padding.left) + level as f64 * self.config.pitch();
        let y = band.y0 + (band.height() - s) / 2.0;
        Rect::new(x, y, x + s, y + s)
    }

    /// Week columns that contain the 1st of a month, with the month's short name.
    ///
    /// A marker closer than two columns to the previous one is dropped so labels never
    /// overlap.
    pub fn month_markers(&self, calendar: &Calendar) -> Vec<(f64, String)> {
        let min_dx = 2.0 * self.config.pitch();
        let mut out = Vec::<(f64, String)>::new();
        for (w, week) in calendar.weeks().iter().enumerate() {
            let Some((_, first)) = week.days().find(|(_, d)| d.date.day() == 1) else {
                continue;
            };
            let x = self.cell_origin(w, 0).x;
            if out.last().is_some_and(|(px, _)| x - px < min_dx) {
                continue;
            }
            out.push((x, first.date.format("%b").to_string()));
        }
        out
    }

    fn width(&self) -> f64 {
        f64::from(self.canvas().width)
    }

    fn height(&self) -> f64 {
        f64::from(self.canvas().height)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/grid.rs"]
mod tests;
