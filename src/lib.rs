//! Galaxia turns a daily activity calendar into one self-contained, animated SVG.
//!
//! The scene is a grid of activity cells plus a looping animation: an actor sweeps along a
//! closed path under the grid and, a fixed number of times per cycle, fires at a salient cell.
//! Each strike is three effects (cell pulse, projectile, impact burst) that share one fire
//! time and one cycle length, so they never drift apart.
//!
//! # Pipeline overview
//!
//! 1. **Calendar**: provider response or synthetic fallback -> [`Calendar`] (Sunday-first weeks)
//! 2. **Layout**: [`LayoutConfig`] + week count -> [`GridLayout`] (pure geometry)
//! 3. **Targets**: [`select_targets`] picks a bounded, chronological set of busy cells
//! 4. **Motion**: [`MotionPath`] gives the actor position for any time in the cycle
//! 5. **Animation**: [`compose_strikes`] derives cycle-relative [`Keyframes`] per target
//! 6. **Scene**: [`render_scene`] writes every layer, back to front, into one document
//!
//! Everything is synchronous and deterministic: the same calendar, configuration and seed
//! produce byte-identical output.
#![forbid(unsafe_code)]

mod animation;
mod calendar;
mod foundation;
mod layout;
mod motion;
mod render;
mod scene;
mod targets;

pub use animation::anim::{Keyframe, Keyframes, Lerp};
pub use animation::compose::{Mote, Strike, compose_strikes, scatter_motes};
pub use calendar::model::{Calendar, DAYS_PER_WEEK, Day, LEVELS, Week, level_for};
pub use calendar::source::parse_provider_response;
pub use calendar::synthetic::synthetic_calendar;
pub use foundation::core::{Canvas, Point, Rect, Rng64};
pub use foundation::error::{GalaxiaError, GalaxiaResult};
pub use layout::grid::{Edges, GridLayout, LayoutConfig};
pub use motion::path::MotionPath;
pub use render::preview::{PreviewImage, rasterize_scene};
pub use scene::assemble::{Layer, Scene, ScenePlan, render_scene, write_scene};
pub use scene::config::{SceneConfig, Skin};
pub use scene::palette::{DARK, LIGHT, Palette, Scheme};
pub use targets::select::{Target, select_targets};
