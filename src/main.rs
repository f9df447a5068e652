//! logoscroll - Entry Point
//!
//! Scrolls a simulated page described by a layout file and prints the
//! styles applied at each offset.

use clap::{Parser, ValueEnum};
use logoscroll::config::LockReference;
use logoscroll::host::{PageLayout, SimulatedPage};
use logoscroll::integration::{timeline, TimelineRange};
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use tracing::info;

/// Output format for frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One JSON object per line
    Json,
    /// Human-readable CSS declarations
    Css,
}

/// logoscroll - simulate the scroll-driven logo animation of a page
#[derive(Parser, Debug)]
#[command(name = "logoscroll")]
#[command(version)]
#[command(about = "Print the logo transforms, fades and page flags a layout produces while scrolling")]
pub struct Args {
    /// Path to the page layout (TOML, or JSON with a .json extension)
    pub layout: PathBuf,

    /// First scroll offset
    #[arg(long, default_value_t = 0.0)]
    pub from: f64,

    /// Last scroll offset (defaults to the document's maximum scroll)
    #[arg(long)]
    pub to: Option<f64>,

    /// Distance between frames in pixels
    #[arg(long, default_value_t = 100.0)]
    pub step: f64,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Logo scale at the top of the page
    #[arg(long)]
    pub hero_scale: Option<f64>,

    /// Anchor the zoom end is measured from (static-anchor, strength-section)
    #[arg(long)]
    pub lock_reference: Option<LockReference>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = logoscroll::config::load_config_with_precedence(args.config.clone())?;
        let merged = logoscroll::config::merge_config(config_file);
        let with_env = logoscroll::config::apply_env_overrides(merged);
        logoscroll::config::apply_cli_overrides(with_env, args.hero_scale, args.lock_reference)
    };

    logoscroll::logging::init(&config.log_file_path)?;

    info!(config = ?config, "Configuration loaded and resolved");

    let layout = PageLayout::load(&args.layout)?;
    let max_scroll = SimulatedPage::new(&layout)?.max_scroll();
    let range = TimelineRange::new(args.from, args.to.unwrap_or(max_scroll), args.step)?;

    info!(
        layout = %args.layout.display(),
        from = range.start(),
        to = range.end(),
        step = args.step,
        "Simulating timeline"
    );

    let frames = timeline(&layout, &config, range)?;

    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for frame in &frames {
        match args.format {
            OutputFormat::Json => {
                serde_json::to_writer(&mut out, frame)?;
                writeln!(out)?;
            }
            OutputFormat::Css => writeln!(out, "{}", frame.to_css())?,
        }
    }
    out.flush()?;

    Ok(())
}
