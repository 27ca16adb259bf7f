#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};

/// Global data directory, set from command line
static DATA_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Get the data directory (set from command line or default)
pub fn get_data_dir() -> PathBuf {
    DATA_DIR.get().cloned().unwrap_or_else(|| {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("portfolio")
    })
}

/// Dual-persona portfolio desktop app
#[derive(Parser, Debug)]
#[command(name = "portfolio-desktop")]
#[command(about = "Dual-persona portfolio - AI Engineer / Cybersecurity")]
struct Args {
    /// Data directory for the preference/chat database
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Profile name (creates data dir: portfolio-<name>)
    #[arg(short, long)]
    name: Option<String>,
}

fn main() {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let data_dir = if let Some(dir) = args.data_dir {
        dir
    } else if let Some(ref name) = args.name {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(format!("portfolio-{}", name))
    } else {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("portfolio")
    };

    // Store data directory globally
    let _ = DATA_DIR.set(data_dir.clone());

    let window_width = 1200.0;
    let window_height = 900.0;

    tracing::info!("Starting portfolio with data dir: {:?}", data_dir);

    // Configure desktop window
    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Portfolio - AI Engineer / Cybersecurity")
            .with_inner_size(dioxus::desktop::LogicalSize::new(window_width, window_height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
