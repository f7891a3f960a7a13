mod app;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use eframe::egui;
use gravsim_core::EngineConfig;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "gravsim")]
#[command(about = "Interactive 2D gravitational N-body simulator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the simulator window
    Run {
        /// YAML engine configuration; defaults apply when omitted
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Validate a configuration file and print the resulting settings
    Check {
        /// Path to the YAML configuration
        config: PathBuf,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("gravsim=info,gravsim_core=info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { config } => {
            let config = match config {
                Some(path) => load_config(&path)?,
                None => EngineConfig::default(),
            };
            run_window(config)
        }
        Commands::Check { config } => {
            let config = load_config(&config)?;
            println!("{config:#?}");
            Ok(())
        }
    }
}

fn load_config(path: &Path) -> Result<EngineConfig> {
    let config = EngineConfig::from_path(path)
        .with_context(|| format!("loading {}", path.display()))?;
    tracing::info!(path = %path.display(), "loaded configuration");
    Ok(config)
}

fn run_window(config: EngineConfig) -> Result<()> {
    // Room for the area plus the side panel and the bars
    let width = config.area.width as f32 + 320.0;
    let height = config.area.height as f32 + 90.0;
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([width, height])
            .with_title("Gravity simulator"),
        ..Default::default()
    };

    eframe::run_native(
        "gravsim",
        options,
        Box::new(move |cc| Ok(Box::new(app::GravApp::new(config, cc)))),
    )
    .map_err(|e| anyhow::anyhow!("window failed: {e}"))
}
