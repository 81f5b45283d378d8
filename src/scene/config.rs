use std::path::Path;

use anyhow::Context as _;

use crate::{
    foundation::error::{GalaxiaError, GalaxiaResult},
    layout::grid::LayoutConfig,
};

/// Presentation options layered over the one scene engine.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Skin {
    /// Status line in the footer band.
    pub hud: bool,
    /// Number of ambient motes.
    pub motes: usize,
    /// Wrap each cell in a link; `{date}` is replaced by the cell's ISO date.
    pub cell_links: Option<String>,
    /// Draw the actor's loop as a faint trail.
    pub actor_trail: bool,
}

impl Default for Skin {
    fn default() -> Self {
        Self {
            hud: true,
            motes: 40,
            cell_links: None,
            actor_trail: true,
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Account name shown in labels. Opaque.
    pub login: String,
    pub title: String,
    /// Trailing window covered by the calendar, in days.
    pub window_days: u32,
    /// Upper bound on strike targets per cycle.
    pub target_count: usize,
    /// Seconds after which the whole animation repeats.
    pub cycle_secs: f64,
    /// Projectile flight time, in seconds.
    pub travel_secs: f64,
    /// Period of the scanline sweep, in seconds.
    pub sweep_secs: f64,
    /// Seed for decoration and synthetic data streams.
    pub seed: u64,
    pub layout: LayoutConfig,
    pub skin: Skin,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            login: "octocat".to_string(),
            title: "GALAXIA".to_string(),
            window_days: 365,
            target_count: 10,
            cycle_secs: 14.0,
            travel_secs: 0.7,
            sweep_secs: 8.0,
            seed: 42,
            layout: LayoutConfig::default(),
            skin: Skin::default(),
        }
    }
}

impl SceneConfig {
    pub fn from_json_str(s: &str) -> GalaxiaResult<Self> {
        let cfg: Self = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_path(path: &Path) -> GalaxiaResult<Self> {
        let s = std::fs::read_to_string(path)
            .with_context(|| format!("read scene config '{}'", path.display()))?;
        Self::from_json_str(&s)
    }

    pub fn validate(&self) -> GalaxiaResult<()> {
        fn positive(name: &str, v: f64) -> GalaxiaResult<()> {
            if v.is_finite() && v > 0.0 {
                Ok(())
            } else {
                Err(GalaxiaError::validation(format!("{name} must be > 0")))
            }
        }

        positive("cycle_secs", self.cycle_secs)?;
        positive("travel_secs", self.travel_secs)?;
        positive("sweep_secs", self.sweep_secs)?;
        if self.window_days == 0 {
            return Err(GalaxiaError::validation("window_days must be > 0"));
        }
        if self.travel_secs >= self.cycle_secs {
            return Err(GalaxiaError::validation(format!(
                "travel_secs {} must be shorter than cycle_secs {}",
                self.travel_secs, self.cycle_secs
            )));
        }
        self.layout.validate()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/config.rs"]
mod tests;
