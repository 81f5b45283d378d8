use std::path::{Path, PathBuf};

use anyhow::Context as _;
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "galaxia", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write the animated SVG document.
    Render(RenderArgs),
    /// Print the derived scene plan (canvas, motion, strikes, motes) as JSON.
    Plan(SourceArgs),
    /// Rasterize the document's static first frame as a PNG.
    Preview(PreviewArgs),
}

#[derive(Args, Debug)]
struct SourceArgs {
    /// Contribution-calendar response JSON. Synthetic sample data is used when omitted.
    #[arg(long)]
    calendar: Option<PathBuf>,

    /// Last day of the synthetic window (YYYY-MM-DD, defaults to today in UTC).
    #[arg(long)]
    end_date: Option<NaiveDate>,

    /// Scene configuration JSON.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the login shown in labels.
    #[arg(long)]
    login: Option<String>,

    /// Override the decoration/synthetic-data seed.
    #[arg(long)]
    seed: Option<u64>,

    /// Override the number of strike targets.
    #[arg(long)]
    targets: Option<usize>,

    /// Override the animation cycle length in seconds.
    #[arg(long)]
    cycle: Option<f64>,
}

#[derive(Args, Debug)]
struct RenderArgs {
    #[command(flatten)]
    source: SourceArgs,

    /// Output SVG path.
    #[arg(long, default_value = "docs/assets/galaxia.svg")]
    out: PathBuf,
}

#[derive(Args, Debug)]
struct PreviewArgs {
    #[command(flatten)]
    source: SourceArgs,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Integer upscale factor.
    #[arg(long, default_value_t = 1)]
    scale: u32,
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Plan(args) => cmd_plan(args),
        Command::Preview(args) => cmd_preview(args),
    }
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("galaxia=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load(args: &SourceArgs) -> anyhow::Result<(galaxia::Calendar, galaxia::SceneConfig)> {
    let mut config = match &args.config {
        Some(path) => galaxia::SceneConfig::from_path(path)?,
        None => galaxia::SceneConfig::default(),
    };
    if let Some(login) = &args.login {
        config.login = login.clone();
    }
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    if let Some(n) = args.targets {
        config.target_count = n;
    }
    if let Some(cycle) = args.cycle {
        config.cycle_secs = cycle;
    }
    config.validate()?;

    let calendar = match &args.calendar {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("read calendar '{}'", path.display()))?;
            galaxia::parse_provider_response(&json)
                .with_context(|| format!("decode calendar '{}'", path.display()))?
        }
        None => {
            let end = args
                .end_date
                .unwrap_or_else(|| chrono::Utc::now().date_naive());
            tracing::warn!(%end, "no calendar given, generating synthetic sample data");
            galaxia::synthetic_calendar(end, config.window_days, config.seed)?
        }
    };
    Ok((calendar, config))
}

fn ensure_parent_dir(path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    Ok(())
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let (calendar, config) = load(&args.source)?;
    let scene = galaxia::render_scene(&calendar, &config)?;

    ensure_parent_dir(&args.out)?;
    std::fs::write(&args.out, scene.document())
        .with_context(|| format!("write svg '{}'", args.out.display()))?;

    let canvas = scene.canvas();
    tracing::info!(
        width = canvas.width,
        height = canvas.height,
        targets = scene.targets().len(),
        total = calendar.total(),
        fingerprint = %format!("{:016x}", scene.fingerprint()),
        "rendered scene"
    );
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_plan(args: SourceArgs) -> anyhow::Result<()> {
    let (calendar, config) = load(&args)?;
    let plan = galaxia::ScenePlan::derive(&calendar, &config)?;
    let json = serde_json::to_string_pretty(&plan).context("serialize scene plan")?;
    println!("{json}");
    Ok(())
}

fn cmd_preview(args: PreviewArgs) -> anyhow::Result<()> {
    let (calendar, config) = load(&args.source)?;
    let scene = galaxia::render_scene(&calendar, &config)?;
    let img = galaxia::rasterize_scene(&scene, args.scale)?;

    ensure_parent_dir(&args.out)?;
    image::save_buffer_with_format(
        &args.out,
        &img.data,
        img.width,
        img.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}
