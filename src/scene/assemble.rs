use std::fmt::{self, Write as _};

use crate::{
    animation::anim::{Keyframe, Keyframes},
    animation::compose::{MOTE_STREAM, Mote, Strike, compose_strikes, scatter_motes},
    calendar::model::{Calendar, DAYS_PER_WEEK, LEVELS},
    foundation::core::{Canvas, Rng64},
    foundation::error::{GalaxiaError, GalaxiaResult},
    foundation::math::Fnv1a64,
    layout::grid::GridLayout,
    motion::path::MotionPath,
    scene::config::SceneConfig,
    scene::palette::Scheme,
    scene::svg::{animate, animate_translate, escape, num, point},
    targets::select::{Target, select_targets},
};

const WEEKDAY_LABELS: [&str; DAYS_PER_WEEK] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
const FONT_STACK: &str = "'Segoe UI', system-ui, Helvetica, Arial, sans-serif";
const SHIP_SHAPE: &str = "M0,-7 L6,5 L0,2 L-6,5 Z";
const PROJECTILE_RADIUS: f64 = 2.5;
const SCANLINE_HEIGHT: f64 = 3.0;

/// Scene layers, painted back to front in [`Layer::ORDER`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Layer {
    Background,
    Motes,
    Header,
    AxisLabels,
    GridBorder,
    Cells,
    Sweep,
    Bursts,
    Projectiles,
    Actor,
    Footer,
    Legend,
}

impl Layer {
    pub const ORDER: [Layer; 12] = [
        Layer::Background,
        Layer::Motes,
        Layer::Header,
        Layer::AxisLabels,
        Layer::GridBorder,
        Layer::Cells,
        Layer::Sweep,
        Layer::Bursts,
        Layer::Projectiles,
        Layer::Actor,
        Layer::Footer,
        Layer::Legend,
    ];

    /// Id of the `<g>` element holding this layer.
    pub fn id(self) -> &'static str {
        match self {
            Self::Background => "background",
            Self::Motes => "motes",
            Self::Header => "header",
            Self::AxisLabels => "axis-labels",
            Self::GridBorder => "grid-border",
            Self::Cells => "cells",
            Self::Sweep => "sweep",
            Self::Bursts => "bursts",
            Self::Projectiles => "projectiles",
            Self::Actor => "actor",
            Self::Footer => "footer",
            Self::Legend => "legend",
        }
    }
}

/// Everything derived from a calendar before any markup is written.
#[derive(Clone, Debug, serde::Serialize)]
pub struct ScenePlan {
    pub canvas: Canvas,
    pub motion: MotionPath,
    pub strikes: Vec<Strike>,
    pub motes: Vec<Mote>,
    #[serde(skip)]
    layout: GridLayout,
}

impl ScenePlan {
    #[tracing::instrument(skip(calendar, config), fields(weeks = calendar.week_count()))]
    pub fn derive(calendar: &Calendar, config: &SceneConfig) -> GalaxiaResult<Self> {
        config.validate()?;

        let layout = GridLayout::new(config.layout, calendar.week_count());
        let canvas = layout.canvas();
        let targets = select_targets(calendar, &layout, config.target_count, config.cycle_secs);
        let motion = MotionPath::for_lane(layout.lane_band(), config.cycle_secs)?;
        let strikes = compose_strikes(&targets, &motion, config.travel_secs)?;

        let mut rng = Rng64::stream(config.seed, MOTE_STREAM);
        let motes = scatter_motes(canvas, config.skin.motes, &mut rng);

        tracing::debug!(
            width = canvas.width,
            height = canvas.height,
            strikes = strikes.len(),
            motes = motes.len(),
            "derived scene plan"
        );
        Ok(Self {
            canvas,
            motion,
            strikes,
            motes,
            layout,
        })
    }

    pub fn layout(&self) -> &GridLayout {
        &self.layout
    }

    pub fn targets(&self) -> impl Iterator<Item = &Target> {
        self.strikes.iter().map(|s| &s.target)
    }

    fn strike_at(&self, week_index: usize, day_index: usize) -> Option<&Strike> {
        self.strikes
            .iter()
            .find(|s| s.target.week_index == week_index && s.target.day_index == day_index)
    }
}

/// A finished, self-contained SVG document.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    document: String,
    canvas: Canvas,
    targets: Vec<Target>,
}

impl Scene {
    pub fn document(&self) -> &str {
        &self.document
    }

    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    pub fn targets(&self) -> &[Target] {
        &self.targets
    }

    /// FNV-1a hash of the document bytes.
    pub fn fingerprint(&self) -> u64 {
        let mut h = Fnv1a64::new_default();
        h.write_bytes(self.document.as_bytes());
        h.finish()
    }
}

/// Derive and write the whole scene for `calendar`.
pub fn render_scene(calendar: &Calendar, config: &SceneConfig) -> GalaxiaResult<Scene> {
    let plan = ScenePlan::derive(calendar, config)?;
    write_scene(calendar, config, &plan)
}

/// Write markup for an already derived plan.
pub fn write_scene(
    calendar: &Calendar,
    config: &SceneConfig,
    plan: &ScenePlan,
) -> GalaxiaResult<Scene> {
    let writer = SceneWriter {
        calendar,
        config,
        plan,
    };
    let document = writer
        .write()
        .map_err(|_| GalaxiaError::render("failed to format scene document"))?;
    Ok(Scene {
        document,
        canvas: plan.canvas,
        targets: plan.targets().copied().collect(),
    })
}

struct SceneWriter<'a> {
    calendar: &'a Calendar,
    config: &'a SceneConfig,
    plan: &'a ScenePlan,
}

impl SceneWriter<'_> {
    fn write(&self) -> Result<String, fmt::Error> {
        let mut out = String::with_capacity(96 * 1024);
        self.open(&mut out)?;
        for layer in Layer::ORDER {
            if matches!(layer, Layer::Bursts | Layer::Projectiles) && self.plan.strikes.is_empty()
            {
                continue;
            }
            writeln!(out, r#"<g id="{}">"#, layer.id())?;
            match layer {
                Layer::Background => self.background(&mut out)?,
                Layer::Motes => self.motes(&mut out)?,
                Layer::Header => self.header(&mut out)?,
                Layer::AxisLabels => self.axis_labels(&mut out)?,
                Layer::GridBorder => self.grid_border(&mut out)?,
                Layer::Cells => self.cells(&mut out)?,
                Layer::Sweep => self.sweep(&mut out)?,
                Layer::Bursts => self.bursts(&mut out)?,
                Layer::Projectiles => self.projectiles(&mut out)?,
                Layer::Actor => self.actor(&mut out)?,
                Layer::Footer => self.footer(&mut out)?,
                Layer::Legend => self.legend(&mut out)?,
            }
            out.push_str("</g>\n");
        }
        out.push_str("</svg>\n");
        Ok(out)
    }

    fn cycle(&self) -> f64 {
        self.config.cycle_secs
    }

    fn open(&self, out: &mut String) -> fmt::Result {
        let Canvas { width, height } = self.plan.canvas;
        let title = escape(&self.config.title);
        let login = escape(&self.config.login);
        writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}" role="img" aria-labelledby="galaxia-title galaxia-desc">"#
        )?;
        writeln!(
            out,
            r#"<title id="galaxia-title">{title} · {login} activity</title>"#
        )?;
        writeln!(
            out,
            r#"<desc id="galaxia-desc">Animated activity calendar covering the last {} days.</desc>"#,
            self.config.window_days
        )?;
        out.push_str(concat!(
            "<defs>\n",
            r#"<filter id="glow" x="-50%" y="-50%" width="200%" height="200%">"#,
            r#"<feGaussianBlur stdDeviation="3" result="blur"/>"#,
            r#"<feMerge><feMergeNode in="blur"/><feMergeNode in="SourceGraphic"/></feMerge>"#,
            "</filter>\n",
            r#"<linearGradient id="hdr" x1="0" y1="0" x2="1" y2="0">"#,
            r##"<stop offset="0%" stop-color="#6366f1"/><stop offset="50%" stop-color="#a78bfa"/><stop offset="100%" stop-color="#6366f1"/>"##,
            "</linearGradient>\n",
            r#"<linearGradient id="scan" x1="0" y1="0" x2="1" y2="0">"#,
            r##"<stop offset="0%" stop-color="#6366f1" stop-opacity="0"/><stop offset="50%" stop-color="#a78bfa" stop-opacity="0.6"/><stop offset="100%" stop-color="#6366f1" stop-opacity="0"/>"##,
            "</linearGradient>\n",
            "</defs>\n",
        ));

        writeln!(out, "<style>")?;
        writeln!(
            out,
            ".hdr {{ font: 700 24px {FONT_STACK}; letter-spacing: 3px; }}"
        )?;
        writeln!(out, ".sub {{ font: 12px {FONT_STACK}; }}")?;
        writeln!(out, ".lbl, .hud {{ font: 11px {FONT_STACK}; }}")?;
        out.push_str(".bdr { stroke-width: 1; fill: none; shape-rendering: crispEdges; }\n");
        out.push_str(".trail { fill: none; stroke-width: 1; stroke-dasharray: 3 4; }\n");
        out.push_str(".boom { fill: none; stroke-width: 1.5; }\n");
        // Dark is the base style; light only applies when the viewer asks for it.
        for scheme in Scheme::ALL {
            let rules = scheme.palette().css_rules();
            match scheme {
                Scheme::Dark => writeln!(out, "{rules}")?,
                Scheme::Light => writeln!(
                    out,
                    "@media (prefers-color-scheme: {}) {{\n{rules}\n}}",
                    scheme.name()
                )?,
            }
        }
        out.push_str("</style>\n");
        Ok(())
    }

    fn background(&self, out: &mut String) -> fmt::Result {
        let Canvas { width, height } = self.plan.canvas;
        writeln!(
            out,
            r#"<rect class="bg" width="{width}" height="{height}" rx="12"/>"#
        )?;
        Ok(())
    }

    fn motes(&self, out: &mut String) -> fmt::Result {
        for m in &self.plan.motes {
            writeln!(
                out,
                r#"<circle class="mote" cx="{}" cy="{}" r="{}"><animate attributeName="opacity" values="{lo};{hi};{lo}" dur="{}s" begin="{}s" repeatCount="indefinite"/></circle>"#,
                num(m.center.x),
                num(m.center.y),
                num(m.radius),
                num(m.period_secs),
                num(m.phase_secs),
                lo = num(m.opacity_low),
                hi = num(m.opacity_high),
            )?;
        }
        Ok(())
    }

    fn header(&self, out: &mut String) -> fmt::Result {
        let band = self.plan.layout.header_band();
        let x = self.plan.layout.grid_rect().x0;
        let subtitle = format!(
            "@{} · commit activity · last {} days · {} total",
            self.config.login,
            self.config.window_days,
            self.calendar.total()
        );
        writeln!(
            out,
            r#"<text x="{}" y="{}" class="hdr" fill="url(#hdr)" filter="url(#glow)">{}</text>"#,
            num(x),
            num(band.y1 - 21.0),
            escape(&self.config.title)
        )?;
        writeln!(
            out,
            r#"<text x="{}" y="{}" class="sub">{}</text>"#,
            num(x + 2.0),
            num(band.y1 - 1.0),
            escape(&subtitle)
        )?;
        Ok(())
    }

    fn axis_labels(&self, out: &mut String) -> fmt::Result {
        let layout = &self.plan.layout;
        let y = layout.month_label_baseline();
        for (x, month) in layout.month_markers(self.calendar) {
            writeln!(
                out,
                r#"<text class="lbl" x="{}" y="{}">{month}</text>"#,
                num(x),
                num(y)
            )?;
        }
        for (d, label) in WEEKDAY_LABELS.iter().enumerate() {
            let a = layout.weekday_label_anchor(d);
            writeln!(
                out,
                r#"<text class="lbl" x="{}" y="{}" text-anchor="end">{label}</text>"#,
                num(a.x),
                num(a.y)
            )?;
        }
        Ok(())
    }

    fn grid_border(&self, out: &mut String) -> fmt::Result {
        let b = self.plan.layout.border_rect();
        writeln!(
            out,
            r#"<rect class="bdr" x="{}" y="{}" width="{}" height="{}" rx="6"/>"#,
            num(b.x0),
            num(b.y0),
            num(b.width()),
            num(b.height())
        )?;
        Ok(())
    }

    fn cells(&self, out: &mut String) -> fmt::Result {
        let layout = &self.plan.layout;
        let size = num(f64::from(layout.config().cell));
        for (w, d, day) in self.calendar.days() {
            let o = layout.cell_origin(w, d);
            let plural = if day.count == 1 { "" } else { "s" };
            let tip = format!("{} · {} commit{plural}", day.date, day.count);

            if let Some(template) = &self.config.skin.cell_links {
                let href = template.replace("{date}", &day.date.to_string());
                write!(out, r#"<a href="{}">"#, escape(&href))?;
            }
            write!(
                out,
                r#"<rect x="{}" y="{}" width="{size}" height="{size}" rx="2" ry="2" class="c{}">"#,
                num(o.x),
                num(o.y),
                day.level
            )?;
            if let Some(strike) = self.plan.strike_at(w, d) {
                animate(out, "opacity", &strike.pulse, self.cycle())?;
            }
            write!(out, "<title>{tip}</title></rect>")?;
            if self.config.skin.cell_links.is_some() {
                out.push_str("</a>");
            }
            out.push('\n');
        }
        Ok(())
    }

    fn sweep(&self, out: &mut String) -> fmt::Result {
        let grid = self.plan.layout.grid_rect();
        let border = self.plan.layout.border_rect();
        let y0 = border.y0;
        let y1 = border.y1 - SCANLINE_HEIGHT;
        let dur = num(self.config.sweep_secs);
        writeln!(
            out,
            r#"<rect x="{}" y="{}" width="{}" height="{}" fill="url(#scan)" opacity="0"><animate attributeName="y" values="{};{}" dur="{dur}s" repeatCount="indefinite"/><animate attributeName="opacity" values="0;0.8;0.8;0" keyTimes="0;0.1;0.9;1" dur="{dur}s" repeatCount="indefinite"/></rect>"#,
            num(grid.x0),
            num(y0),
            num(grid.width()),
            num(SCANLINE_HEIGHT),
            num(y0),
            num(y1),
        )?;
        Ok(())
    }

    fn bursts(&self, out: &mut String) -> fmt::Result {
        for s in &self.plan.strikes {
            write!(
                out,
                r#"<circle class="boom" cx="{}" cy="{}" r="{}" opacity="0">"#,
                num(s.target.center.x),
                num(s.target.center.y),
                num(s.burst_radius.sample(0.0))
            )?;
            animate(out, "r", &s.burst_radius, self.cycle())?;
            animate(out, "opacity", &s.burst_opacity, self.cycle())?;
            out.push_str("</circle>\n");
        }
        Ok(())
    }

    fn projectiles(&self, out: &mut String) -> fmt::Result {
        for s in &self.plan.strikes {
            write!(
                out,
                r#"<circle class="shot" r="{}" opacity="0" transform="translate({})">"#,
                num(PROJECTILE_RADIUS),
                point(s.launch)
            )?;
            animate_translate(out, &s.projectile_path, self.cycle())?;
            animate(out, "opacity", &s.projectile_opacity, self.cycle())?;
            out.push_str("</circle>\n");
        }
        Ok(())
    }

    fn actor(&self, out: &mut String) -> fmt::Result {
        let motion = &self.plan.motion;
        let w = motion.waypoints();
        if self.config.skin.actor_trail {
            writeln!(
                out,
                r#"<path class="trail" d="M{} L{} L{} L{} Z"/>"#,
                point(w[0]),
                point(w[1]),
                point(w[2]),
                point(w[3])
            )?;
        }

        let track = Keyframes {
            keys: motion
                .key_fractions()
                .iter()
                .zip(w.iter())
                .map(|(&at, &p)| Keyframe::new(at, p))
                .collect(),
        };
        write!(
            out,
            r#"<g class="ship" transform="translate({})"><path d="{SHIP_SHAPE}"/>"#,
            point(w[0])
        )?;
        animate_translate(out, &track, motion.cycle_secs())?;
        out.push_str("</g>\n");
        Ok(())
    }

    fn footer(&self, out: &mut String) -> fmt::Result {
        if !self.config.skin.hud {
            return Ok(());
        }
        let band = self.plan.layout.footer_band();
        let x = f64::from(self.plan.canvas.width - self.config.layout.padding.right);
        let n = self.plan.strikes.len();
        let status = if n == 0 {
            "no activity in window · standing by".to_string()
        } else {
            format!(
                "{n} target{} locked · {}s loop",
                if n == 1 { "" } else { "s" },
                num(self.cycle())
            )
        };
        writeln!(
            out,
            r#"<text class="hud" x="{}" y="{}" text-anchor="end">{status}</text>"#,
            num(x),
            num(band.y0 + 11.0)
        )?;
        Ok(())
    }

    fn legend(&self, out: &mut String) -> fmt::Result {
        let layout = &self.plan.layout;
        for level in 0..LEVELS {
            let r = layout.legend_swatch(level);
            writeln!(
                out,
                r#"<rect x="{}" y="{}" width="{}" height="{}" rx="2" ry="2" class="c{level}"/>"#,
                num(r.x0),
                num(r.y0),
                num(r.width()),
                num(r.height())
            )?;
        }
        let first = layout.legend_swatch(0);
        let last = layout.legend_swatch(LEVELS - 1);
        writeln!(
            out,
            r#"<text class="lbl" x="{}" y="{}" text-anchor="end">Less</text>"#,
            num(first.x0 - 6.0),
            num(first.y1 - 2.0)
        )?;
        writeln!(
            out,
            r#"<text class="lbl" x="{}" y="{}">More</text>"#,
            num(last.x1 + 6.0),
            num(last.y1 - 2.0)
        )?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/assemble.rs"]
mod tests;
