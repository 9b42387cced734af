use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use serde_json::{Value, json};
use tracing_subscriber::EnvFilter;

use carousel::config::merge_deep;
use carousel::constants::Millis;
use carousel::document::DirectoryDocument;
use carousel::render::LogSink;
use carousel::{Carousel, Hooks};

#[cfg(feature = "viewer")]
mod viewer;

/// Run image directories as carousels, one container per directory.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Image directories; each one becomes a container
    #[arg(required = true)]
    dirs: Vec<PathBuf>,

    /// JSON file with carousel options (camelCase keys)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Viewport width used for breakpoints
    #[arg(short, long, default_value_t = 1280)]
    width: u32,

    /// Simulated run time in ms (headless mode)
    #[arg(short, long, default_value_t = 20_000)]
    duration: Millis,

    /// Clock step in ms (headless mode)
    #[arg(short, long, default_value_t = 16)]
    step: Millis,

    /// Open a window instead of running headless
    #[cfg(feature = "viewer")]
    #[arg(long)]
    window: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let options = load_options(args.config.as_ref())?;

    #[cfg(feature = "viewer")]
    if args.window {
        return viewer::run(options, &args.dirs, args.width);
    }

    run_headless(options, &args)
}

/// Options from the config file, defaulting the locator to every directory.
fn load_options(path: Option<&PathBuf>) -> Result<Value> {
    let from_file = match path {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file {}", path.display()))?;
            serde_json::from_str(&text)
                .with_context(|| format!("Failed to parse config file {}", path.display()))?
        }
        None => json!({}),
    };
    Ok(merge_deep(json!({ "contentClass": ".carousel" }), from_file))
}

fn run_headless(options: Value, args: &Args) -> Result<()> {
    let document = DirectoryDocument::scan(args.dirs.as_slice(), args.width);
    let hooks = Hooks::new().on_slide_change(|container, index| {
        tracing::info!(container = container.0, index, "slide changed");
    });
    let mut carousel = Carousel::from_options(options, document, LogSink, hooks)
        .context("Invalid carousel options")?;

    if carousel.container_count() == 0 {
        anyhow::bail!("No container has any image");
    }

    let step = args.step.max(1);
    while carousel.now() < args.duration {
        carousel.advance(step.min(args.duration - carousel.now()));
    }

    carousel.destroy();
    Ok(())
}
