use crate::{
    animation::anim::{Keyframe, Keyframes},
    foundation::core::{Canvas, Point, Rng64},
    foundation::error::{GalaxiaError, GalaxiaResult},
    motion::path::MotionPath,
    targets::select::Target,
};

/// Cell opacity at the bottom of the impact dip.
pub const PULSE_LOW: f64 = 0.25;
/// Cycle fraction the dip takes to bottom out.
pub const PULSE_DIP_SPAN: f64 = 0.01;
/// Cycle fraction after impact by which the cell is fully lit again.
pub const PULSE_RECOVER_SPAN: f64 = 0.25;
/// Cycle fraction the impact burst stays visible.
pub const BURST_SPAN: f64 = 0.08;
pub const BURST_RADIUS_START: f64 = 2.0;
pub const BURST_RADIUS_END: f64 = 14.0;
pub const BURST_PEAK_OPACITY: f64 = 0.9;

/// Salt separating the mote stream from other consumers of the scene seed.
pub const MOTE_STREAM: u64 = 0xA3B1_E17E;

/// The three synchronized effects attached to one target.
///
/// Every track is cycle-relative and shares the scene's cycle duration, so the pulse, the
/// projectile and the burst stay locked together for any number of repetitions.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Strike {
    pub target: Target,
    /// Actor position at `target.fire_time`.
    pub launch: Point,
    /// `fire_time + travel`, in seconds.
    pub impact_time: f64,
    /// Cell opacity.
    pub pulse: Keyframes<f64>,
    /// Projectile position.
    pub projectile_path: Keyframes<Point>,
    pub projectile_opacity: Keyframes<f64>,
    pub burst_radius: Keyframes<f64>,
    pub burst_opacity: Keyframes<f64>,
}

/// Derive the strike effects for every target.
///
/// `travel_secs` must fit inside one cycle. A flight that runs past the end of the cycle
/// wraps to its start.
pub fn compose_strikes(
    targets: &[Target],
    motion: &MotionPath,
    travel_secs: f64,
) -> GalaxiaResult<Vec<Strike>> {
    let cycle = motion.cycle_secs();
    if !(travel_secs.is_finite() && travel_secs > 0.0 && travel_secs < cycle) {
        return Err(GalaxiaError::validation(format!(
            "travel duration {travel_secs} must be in (0, {cycle})"
        )));
    }
    let travel = travel_secs / cycle;

    let pulse = Keyframes::new(vec![
        Keyframe::new(0.0, 1.0),
        Keyframe::new(PULSE_DIP_SPAN, PULSE_LOW),
        Keyframe::new(PULSE_RECOVER_SPAN, 1.0),
        Keyframe::new(1.0, 1.0),
    ])?;
    let projectile_opacity = Keyframes::new(vec![
        Keyframe::new(0.0, 1.0),
        Keyframe::new(travel, 1.0),
        Keyframe::new(travel, 0.0),
        Keyframe::new(1.0, 0.0),
    ])?;
    let burst_radius = Keyframes::new(vec![
        Keyframe::new(0.0, BURST_RADIUS_START),
        Keyframe::new(BURST_SPAN, BURST_RADIUS_END),
        Keyframe::new(1.0, BURST_RADIUS_END),
    ])?;
    let burst_opacity = Keyframes::new(vec![
        Keyframe::new(0.0, BURST_PEAK_OPACITY),
        Keyframe::new(BURST_SPAN, 0.0),
        Keyframe::new(1.0, 0.0),
    ])?;

    targets
        .iter()
        .map(|target| {
            let launch = motion.position(target.fire_time);
            let fire = target.fire_time / cycle;
            let impact = fire + travel;
            let path = Keyframes::new(vec![
                Keyframe::new(0.0, launch),
                Keyframe::new(travel, target.center),
                Keyframe::new(1.0, target.center),
            ])?;

            Ok(Strike {
                target: *target,
                launch,
                impact_time: target.fire_time + travel_secs,
                pulse: pulse.anchored(impact),
                projectile_path: path.anchored(fire),
                projectile_opacity: projectile_opacity.anchored(fire),
                burst_radius: burst_radius.anchored(impact),
                burst_opacity: burst_opacity.anchored(impact),
            })
        })
        .collect()
}

/// Background decoration. Unsynchronized with the strikes.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Mote {
    pub center: Point,
    pub radius: f64,
    pub opacity_low: f64,
    pub opacity_high: f64,
    pub period_secs: f64,
    pub phase_secs: f64,
}

/// Scatter `count` twinkling motes over the canvas from the given stream.
pub fn scatter_motes(canvas: Canvas, count: usize, rng: &mut Rng64) -> Vec<Mote> {
    let w = f64::from(canvas.width);
    let h = f64::from(canvas.height);
    (0..count)
        .map(|_| Mote {
            center: Point::new(
                rng.uniform(10.0, (w - 10.0).max(10.0)),
                rng.uniform(10.0, (h - 10.0).max(10.0)),
            ),
            radius: rng.uniform(0.4, 1.2),
            period_secs: rng.uniform(2.0, 5.0),
            phase_secs: rng.uniform(0.0, 3.0),
            opacity_low: rng.uniform(0.1, 0.3),
            opacity_high: rng.uniform(0.6, 1.0),
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/animation/compose.rs"]
mod tests;
