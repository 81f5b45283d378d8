use crate::calendar::model::LEVELS;

/// Color scheme a consuming environment may select.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scheme {
    Dark,
    Light,
}

impl Scheme {
    pub const ALL: [Scheme; 2] = [Scheme::Dark, Scheme::Light];

    pub fn name(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    pub fn palette(self) -> &'static Palette {
        match self {
            Self::Dark => &DARK,
            Self::Light => &LIGHT,
        }
    }
}

/// One color table. Both schemes share the exact same structure.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    /// Cell fill per activity level.
    pub levels: [&'static str; LEVELS],
    pub background: &'static str,
    pub text_muted: &'static str,
    pub border: &'static str,
    pub mote: &'static str,
    pub actor: &'static str,
    pub trail: &'static str,
    pub projectile: &'static str,
    pub burst: &'static str,
    /// Motes are atmospheric; a light background drowns them out.
    pub show_motes: bool,
}

pub const DARK: Palette = Palette {
    levels: ["#161b22", "#0e4429", "#006d32", "#26a641", "#39d353"],
    background: "#0d1117",
    text_muted: "#8b949e",
    border: "#21262d",
    mote: "#8b949e",
    actor: "#a78bfa",
    trail: "#30363d",
    projectile: "#fbbf24",
    burst: "#fde68a",
    show_motes: true,
};

pub const LIGHT: Palette = Palette {
    levels: ["#ebedf0", "#9be9a8", "#40c463", "#30a14e", "#216e39"],
    background: "#ffffff",
    text_muted: "#656d76",
    border: "#d1d9e0",
    mote: "#656d76",
    actor: "#6366f1",
    trail: "#d0d7de",
    projectile: "#d97706",
    burst: "#f59e0b",
    show_motes: false,
};

impl Palette {
    /// CSS rules mapping the document's classes onto this table.
    pub fn css_rules(&self) -> String {
        let mut rules = vec![
            format!(".bg {{ fill: {}; }}", self.background),
            format!(".sub, .lbl, .hud {{ fill: {}; }}", self.text_muted),
            format!(".bdr {{ stroke: {}; }}", self.border),
            format!(".mote {{ fill: {}; }}", self.mote),
            format!(".ship {{ fill: {}; }}", self.actor),
            format!(".trail {{ stroke: {}; }}", self.trail),
            format!(".shot {{ fill: {}; }}", self.projectile),
            format!(".boom {{ stroke: {}; }}", self.burst),
        ];
        if !self.show_motes {
            rules.push(".mote { display: none; }".to_string());
        }
        rules.extend(
            self.levels
                .iter()
                .enumerate()
                .map(|(lvl, color)| format!(".c{lvl} {{ fill: {color}; }}")),
        );
        rules.join("\n")
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/palette.rs"]
mod tests;
