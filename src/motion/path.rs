use crate::{
    foundation::core::{Point, Rect},
    foundation::error::{GalaxiaError, GalaxiaResult},
};

const LANE_MARGIN: f64 = 10.0;
const APEX_FRACTION: f64 = 0.3;

/// Closed four-segment loop the actor follows once per cycle.
///
/// Waypoints: left baseline, upper apex, right baseline, lower apex, back to left baseline.
/// Each segment takes a quarter of the cycle.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct MotionPath {
    waypoints: [Point; 5],
    cycle_secs: f64,
}

impl MotionPath {
    pub const SEGMENTS: usize = 4;

    pub fn new(waypoints: [Point; 5], cycle_secs: f64) -> GalaxiaResult<Self> {
        if !(cycle_secs.is_finite() && cycle_secs > 0.0) {
            return Err(GalaxiaError::validation("motion cycle must be > 0"));
        }
        if waypoints[0] != waypoints[Self::SEGMENTS] {
            return Err(GalaxiaError::validation(
                "motion path must end where it starts",
            ));
        }
        Ok(Self {
            waypoints,
            cycle_secs,
        })
    }

    /// Diamond-shaped sweep across `lane`, centered on its vertical middle.
    pub fn for_lane(lane: Rect, cycle_secs: f64) -> GalaxiaResult<Self> {
        let left = lane.x0 + LANE_MARGIN;
        let right = (lane.x1 - LANE_MARGIN).max(left);
        let mid = (left + right) / 2.0;
        let base = lane.center().y;
        let amp = lane.height() * APEX_FRACTION;

        Self::new(
            [
                Point::new(left, base),
                Point::new(mid, base - amp),
                Point::new(right, base),
                Point::new(mid, base + amp),
                Point::new(left, base),
            ],
            cycle_secs,
        )
    }

    pub fn waypoints(&self) -> &[Point; 5] {
        &self.waypoints
    }

    pub fn cycle_secs(&self) -> f64 {
        self.cycle_secs
    }

    pub fn segment_duration(&self) -> f64 {
        self.cycle_secs / Self::SEGMENTS as f64
    }

    /// Cycle fractions at which each waypoint is reached.
    pub fn key_fractions(&self) -> [f64; 5] {
        [0.0, 0.25, 0.5, 0.75, 1.0]
    }

    /// Actor position at time `t` (seconds, any real value; wrapped into one cycle).
    pub fn position(&self, t: f64) -> Point {
        let t = t.rem_euclid(self.cycle_secs);
        let seg = self.segment_duration();
        let k = ((t / seg).floor() as usize).min(Self::SEGMENTS - 1);
        let f = ((t - k as f64 * seg) / seg).clamp(0.0, 1.0);
        self.waypoints[k].lerp(self.waypoints[k + 1], f)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/motion/path.rs"]
mod tests;
