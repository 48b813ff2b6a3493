use std::{
    path::{Path, PathBuf},
    rc::Rc,
};

use anyhow::Context as _;
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "luxfx", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Validate a page config and print what it sets up.
    Check(CheckArgs),
    /// Run a page for a fixed number of simulated frames and dump the final state as JSON.
    Simulate(SimulateArgs),
    /// Run a page in real time at its configured frame rate.
    Run(RunArgs),
}

#[derive(Parser, Debug)]
struct CheckArgs {
    /// Page config JSON.
    #[arg(long)]
    config: PathBuf,
}

#[derive(Parser, Debug)]
struct SimulateArgs {
    /// Page config JSON.
    #[arg(long)]
    config: PathBuf,

    /// Number of frames to run.
    #[arg(long, default_value_t = 60)]
    frames: u64,

    /// Pointer position as `X,Y` in viewport pixels.
    #[arg(long, value_parser = parse_point)]
    pointer: Option<luxfx::Point>,

    /// Scroll offset in pixels.
    #[arg(long)]
    scroll: Option<f64>,

    /// Wall-clock start of the simulation (RFC 3339). Defaults to now.
    #[arg(long)]
    start: Option<DateTime<Utc>>,

    /// Close the popup before the first frame.
    #[arg(long)]
    close_popup: bool,

    /// Output JSON path. Defaults to stdout.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct RunArgs {
    /// Page config JSON.
    #[arg(long)]
    config: PathBuf,

    /// Stop after this many frames.
    #[arg(long, default_value_t = 600)]
    frames: u64,

    /// Output JSON path for the final snapshot.
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Check(args) => cmd_check(args),
        Command::Simulate(args) => cmd_simulate(args),
        Command::Run(args) => cmd_run(args),
    }
}

fn parse_point(s: &str) -> Result<luxfx::Point, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y, got '{s}'"))?;
    let x: f64 = x.trim().parse().map_err(|e| format!("bad x: {e}"))?;
    let y: f64 = y.trim().parse().map_err(|e| format!("bad y: {e}"))?;
    Ok(luxfx::Point::new(x, y))
}

fn read_config(path: &Path) -> anyhow::Result<luxfx::PageConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("read page config '{}'", path.display()))?;
    let config = luxfx::PageConfig::from_json_str(&text)
        .with_context(|| format!("load page config '{}'", path.display()))?;
    Ok(config)
}

fn write_snapshot(snapshot: &luxfx::PageSnapshot, out: Option<&Path>) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(snapshot).context("serialize snapshot")?;
    match out {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            std::fs::write(path, json)
                .with_context(|| format!("write snapshot '{}'", path.display()))?;
            eprintln!("wrote {}", path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}

fn cmd_check(args: CheckArgs) -> anyhow::Result<()> {
    let config = read_config(&args.config)?;
    println!(
        "ok: {}x{} @ {} fps, touch={}, magnetic={}, reveal={}, nav sections={}, countdown={}, popup={}",
        config.viewport.width,
        config.viewport.height,
        config.fps.as_f64(),
        config.touch,
        config.magnetic.elements.len(),
        config.reveal.elements.len(),
        config.nav.sections.len(),
        config
            .countdown
            .target
            .map_or_else(|| "off".to_owned(), |t| t.to_rfc3339()),
        config.popup.enabled,
    );
    Ok(())
}

fn cmd_simulate(args: SimulateArgs) -> anyhow::Result<()> {
    let config = read_config(&args.config)?;
    let frame_ms = config.fps.frame_ms();
    let start = args.start.unwrap_or_else(Utc::now);

    let clock = luxfx::ManualClock::new(start.timestamp_millis());
    let page = luxfx::Page::build(config, Rc::new(clock.clone()))?;
    if let Some(p) = args.pointer {
        page.pointer_moved(p);
    }
    if let Some(y) = args.scroll {
        page.scrolled(y);
    }
    if args.close_popup {
        page.close_popup();
    }

    let mut frame_loop = page.start(luxfx::ManualFrameSource::new(args.frames))?;
    while frame_loop.pump()?.is_some() {
        clock.advance(frame_ms);
    }
    let stats = frame_loop.stats();
    tracing::info!(ticks = stats.ticks, faults = stats.faults, "simulation done");

    write_snapshot(&page.snapshot(), args.out.as_deref())
}

fn cmd_run(args: RunArgs) -> anyhow::Result<()> {
    let config = read_config(&args.config)?;
    let source = luxfx::IntervalFrameSource::new(config.fps).with_max_frames(args.frames);
    let page = luxfx::Page::build(config, Rc::new(luxfx::SystemClock::new()))?;

    let mut frame_loop = page.start(source)?;
    let stats = frame_loop.run()?;
    eprintln!(
        "ran {} frames ({} rearms, {} faults)",
        stats.ticks, stats.rearms, stats.faults
    );

    if let Some(out) = args.out.as_deref() {
        write_snapshot(&page.snapshot(), Some(out))?;
    }
    Ok(())
}
