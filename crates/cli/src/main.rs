mod config;
mod raw;
mod scan;
mod splice;

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::config::BuildConfig;
use crate::scan::{ScanOptions, build_portfolio};
use crate::splice::splice_payload;

#[derive(Parser)]
#[command(
    name = "folio-build",
    version,
    about = "Scan series image folders and embed the list into index.html"
)]
struct Args {
    /// Project root holding index.html and the images folder
    #[arg(long, env = "FOLIO_ROOT", default_value = ".")]
    root: PathBuf,

    /// Series config (default: <root>/portfolio.config.json)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Page to update (default: <root>/index.html)
    #[arg(long)]
    html: Option<PathBuf>,

    /// Directory payload paths are relative to (default: <root>/images)
    #[arg(long)]
    images: Option<PathBuf>,

    /// Do not convert .CR3 files to JPEG
    #[arg(long)]
    skip_raw: bool,

    /// Print the payload instead of writing index.html
    #[arg(long)]
    dry_run: bool,

    /// More log output (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let config_path = args
        .config
        .clone()
        .unwrap_or_else(|| args.root.join("portfolio.config.json"));
    let html_path = args.html.clone().unwrap_or_else(|| args.root.join("index.html"));
    let options = ScanOptions {
        images_dir: args.images.clone().unwrap_or_else(|| args.root.join("images")),
        root: args.root.clone(),
        convert_raw: !args.skip_raw,
    };

    let config = BuildConfig::load(&config_path)?;
    let data = build_portfolio(&config, &options)?;
    let json = serde_json::to_string_pretty(&data)?;

    let mut stdout = std::io::stdout().lock();
    if args.dry_run {
        writeln!(stdout, "{json}")?;
        return Ok(());
    }

    let html = std::fs::read_to_string(&html_path)
        .with_context(|| format!("reading {}", html_path.display()))?;
    let updated = splice_payload(&html, &json)?;
    std::fs::write(&html_path, updated)
        .with_context(|| format!("writing {}", html_path.display()))?;
    tracing::info!(path = %html_path.display(), "updated portfolio-data");

    for (name, series) in &data.series {
        writeln!(
            stdout,
            "{name}: {} horizontal, {} vertical",
            series.horizontal.len(),
            series.vertical.len()
        )?;
    }
    Ok(())
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
