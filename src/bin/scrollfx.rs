use std::{
    io::Write as _,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use tracing::level_filters::LevelFilter;

#[derive(Parser, Debug)]
#[command(name = "scrollfx", version)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write the default config for a variant.
    Preset(PresetArgs),
    /// Measure a layout once and print the frame for a scroll offset.
    Frame(FrameArgs),
    /// Replay a viewport event timeline and print the report.
    Replay(ReplayArgs),
}

#[derive(Parser, Debug)]
struct PresetArgs {
    #[arg(long, value_enum)]
    variant: VariantChoice,

    /// Output JSON path (stdout when omitted).
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Parallax config JSON.
    #[arg(long)]
    config: PathBuf,

    /// Page layout JSON.
    #[arg(long)]
    layout: PathBuf,

    /// Scroll offset in pixels.
    #[arg(long, allow_negative_numbers = true)]
    scroll: f64,
}

#[derive(Parser, Debug)]
struct ReplayArgs {
    /// Parallax config JSON.
    #[arg(long)]
    config: PathBuf,

    /// Page layout JSON.
    #[arg(long)]
    layout: PathBuf,

    /// Timeline JSON.
    #[arg(long)]
    timeline: PathBuf,

    /// Output JSON path (stdout when omitted).
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum VariantChoice {
    Refined,
    Framed,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Preset(args) => cmd_preset(args),
        Command::Frame(args) => cmd_frame(args),
        Command::Replay(args) => cmd_replay(args),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn cmd_preset(args: PresetArgs) -> anyhow::Result<()> {
    let cfg = match args.variant {
        VariantChoice::Refined => scrollfx::ParallaxConfig::refined(),
        VariantChoice::Framed => scrollfx::ParallaxConfig::framed(),
    };
    write_json(&cfg, args.out.as_deref())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let cfg = read_config(&args.config)?;
    let layout = scrollfx::PageLayout::from_path(&args.layout)?;

    let mut page = scrollfx::InMemoryPage::from_layout(&layout);
    let mut engine = scrollfx::ParallaxEngine::attach(&page, &cfg);
    if engine.is_inert() {
        anyhow::bail!(
            "layout '{}' is missing elements required by the {} variant",
            args.layout.display(),
            cfg.variant.name()
        );
    }
    engine
        .recalculate_geometry(&mut page)
        .with_context(|| format!("measure layout '{}'", args.layout.display()))?;
    let frame = engine
        .apply_frame(&mut page, args.scroll)
        .context("animation distance is zero; no frame to apply")?;

    write_json(&frame, None)
}

fn cmd_replay(args: ReplayArgs) -> anyhow::Result<()> {
    let cfg = read_config(&args.config)?;
    let layout = scrollfx::PageLayout::from_path(&args.layout)?;
    let timeline = scrollfx::Timeline::from_path(&args.timeline)?;

    let report = scrollfx::replay(&cfg, &layout, &timeline)?;
    write_json(&report, args.out.as_deref())
}

fn read_config(path: &Path) -> anyhow::Result<scrollfx::ParallaxConfig> {
    scrollfx::ParallaxConfig::from_path(path)
        .with_context(|| format!("load config '{}'", path.display()))
}

fn write_json<T: serde::Serialize>(value: &T, out: Option<&Path>) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(value).context("encode JSON")?;
    match out {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            std::fs::write(path, json + "\n")
                .with_context(|| format!("write '{}'", path.display()))?;
            eprintln!("wrote {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{json}").context("write stdout")?;
        }
    }
    Ok(())
}
