//! Hands-free pointer control application.

use anyhow::Result;
use clap::Parser;
use facepointer::actuator::LogActuator;
use facepointer::app::FacePointerApp;
use facepointer::config::{Config, EXAMPLE_CONFIG};
use facepointer::frame_source::JsonLineSource;
use log::info;
use std::io::BufReader;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to configuration file (YAML format)
    #[arg(short = 'C', long)]
    config: Option<String>,

    /// Smoothing buffer size override (>= 1)
    #[arg(short, long)]
    buffer_size: Option<usize>,

    /// Enable sigmoid cursor acceleration
    #[arg(short, long)]
    acceleration: bool,

    /// Enable debug output
    #[arg(short, long)]
    debug: bool,

    /// Print an example configuration file and exit
    #[arg(long)]
    print_example_config: bool,
}

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Initialize logger
    if args.debug {
        env_logger::init_from_env(env_logger::Env::new().default_filter_or("debug"));
    } else {
        env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    }

    if args.print_example_config {
        print!("{EXAMPLE_CONFIG}");
        return Ok(());
    }

    info!("Facepointer - hands-free pointer control");

    // Load configuration if provided
    let mut config = if let Some(config_path) = &args.config {
        info!("Loading configuration from: {config_path}");
        match Config::from_file(config_path) {
            Ok(cfg) => cfg,
            Err(e) => {
                log::warn!("Failed to load config file: {e}. Using defaults.");
                Config::default()
            }
        }
    } else {
        Config::default()
    };

    // Apply command line overrides
    if let Some(buffer_size) = args.buffer_size {
        config.mouse.buffer_size = buffer_size;
    }
    if args.acceleration {
        config.mouse.acceleration = true;
    }

    // Frames arrive as one JSON object per line on stdin; actuator
    // requests are logged (real input injection lives outside this
    // crate).
    let source = JsonLineSource::new(BufReader::new(std::io::stdin()));
    let mut app = FacePointerApp::new(&config, source, LogActuator)?;
    app.run()?;

    Ok(())
}
