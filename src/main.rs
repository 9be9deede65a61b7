use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use minipaint::host::{HeadlessHost, Size};
use minipaint::input::parse_script;
use minipaint::{Config, DrawingSurface};
use std::io::Read;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "minipaint")]
#[command(version, about = "Finger-painting surface with smoothed strokes")]
struct Cli {
    /// Touch script to replay (reads stdin when omitted)
    #[arg(value_name = "SCRIPT")]
    script: Option<PathBuf>,

    /// Configuration file (defaults to ~/.config/minipaint/config.toml)
    #[arg(long, short = 'c', value_name = "PATH")]
    config: Option<PathBuf>,

    /// Initial surface size established before the script runs
    #[arg(
        long,
        short = 's',
        value_name = "WxH",
        default_value = "1080x1920",
        value_parser = parse_size
    )]
    size: Size,

    /// Write the default configuration file and exit
    #[arg(long, action = ArgAction::SetTrue)]
    init_config: bool,
}

fn parse_size(value: &str) -> Result<Size, String> {
    let (width, height) = value
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got '{value}'"))?;
    let width = width
        .trim()
        .parse()
        .map_err(|_| format!("invalid width '{width}'"))?;
    let height = height
        .trim()
        .parse()
        .map_err(|_| format!("invalid height '{height}'"))?;
    Ok(Size::new(width, height))
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    if cli.init_config {
        let path = Config::create_default_file()?;
        println!("Wrote default config to {}", path.display());
        return Ok(());
    }

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    let settings = config.surface_settings();

    let source = match &cli.script {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read script {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read script from stdin")?;
            buf
        }
    };
    let events = parse_script(&source).context("Invalid touch script")?;
    log::info!("Replaying {} scripted events", events.len());

    let mut host = HeadlessHost::new(DrawingSurface::new(settings));
    host.resize(cli.size.width, cli.size.height);
    host.replay(&events);

    let stats = host.stats();
    let surface = host.surface();
    let size = surface.size();
    let frame = surface.frame_rect();
    let inked = match surface.cached_image() {
        Some(image) => image
            .count_pixels_unlike(settings.background)
            .context("Failed to read cached image")?,
        None => 0,
    };

    println!("surface: {}x{}", size.width, size.height);
    println!(
        "frame: ({}, {}) - ({}, {})",
        frame.left, frame.top, frame.right, frame.bottom
    );
    println!("events: {}", stats.events);
    println!("redraw requests: {}", stats.redraw_requests);
    println!("renders: {}", stats.renders);
    println!("committed segments: {}", surface.committed_segments());
    println!("inked pixels: {}", inked);

    Ok(())
}
