//! Four-in-a-row GUI
//!
//! A graphical 5x5 tic-tac-toe for two players sharing one mouse.

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use four_in_a_row::ui::TicTacToeApp;
use four_in_a_row::{AppConfig, AppError};

#[derive(Debug, Parser)]
#[command(name = "four_in_a_row", about = "5x5 tic-tac-toe, four in a row wins")]
struct Cli {
    /// Optional TOML file with [window] and [layout] settings
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log filter, e.g. "debug" or "four_in_a_row=trace" (defaults to RUST_LOG, then "info")
    #[arg(long)]
    log_level: Option<String>,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.log_level.as_deref());

    if let Err(err) = run(&cli) {
        tracing::error!(%err, "exiting");
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn init_tracing(level: Option<&str>) {
    let filter = match level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn run(cli: &Cli) -> Result<(), AppError> {
    let config = match &cli.config {
        Some(path) => AppConfig::load_or_default(path)?,
        None => AppConfig::default(),
    };
    tracing::info!(?config, "starting");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.layout.window_width(), config.layout.window_height()])
            .with_resizable(false)
            .with_title(config.window.title.clone()),
        ..Default::default()
    };

    let title = config.window.title.clone();
    eframe::run_native(
        &title,
        options,
        Box::new(move |cc| Ok(Box::new(TicTacToeApp::new(cc, config)))),
    )?;
    Ok(())
}
