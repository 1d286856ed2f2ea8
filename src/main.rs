//! control-stairs - an interactive terminal diagram of LLM agent control levels
//!
//! This is the binary entry point. All logic lives in the workspace crates.

use std::path::PathBuf;

use clap::Parser;
use cstairs_core::levels::{LEVELS, WIDGET_DESCRIPTION};
use cstairs_core::prelude::*;

/// Interactive staircase diagram of LLM agent control levels
#[derive(Parser, Debug)]
#[command(name = "cstairs")]
#[command(about = "Interactive staircase diagram of LLM agent control levels", long_about = None)]
struct Args {
    /// Print the diagram description to stdout and exit (no TUI)
    #[arg(long)]
    describe: bool,

    /// Path to an alternate config file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Override the logical canvas height in pixels
    #[arg(long, value_name = "PX")]
    height: Option<f64>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.describe {
        print_description();
        return Ok(());
    }

    // Initialize error handling
    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;

    // Initialize logging (to file, since TUI owns stdout)
    cstairs_core::logging::init()?;

    info!("control-stairs starting");

    let mut settings = cstairs_app::load_settings(args.config.as_deref());
    if let Some(height) = args.height {
        settings.ui.canvas_height = height.max(1.0);
    }

    let result = cstairs_tui::run(settings);

    if let Err(ref e) = result {
        error!("Application error: {:?}", e);
    }

    info!("control-stairs exiting");
    result
}

/// Headless description of the diagram for assistive or scripted use
fn print_description() {
    println!("{}", WIDGET_DESCRIPTION);
    println!();
    for level in &LEVELS {
        println!("{}", level.description);
        println!();
    }
}
