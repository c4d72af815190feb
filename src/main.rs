//! Caro GUI
//!
//! Play five in a row against the AI or another player.
//!
//! Usage: `caro [config.json]`. Without an argument the `CARO_CONFIG`
//! environment variable is checked; with neither, defaults are used.

use std::path::PathBuf;

use caro::ui::CaroApp;
use caro::EngineConfig;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn load_config() -> EngineConfig {
    let path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .or_else(|| std::env::var_os("CARO_CONFIG").map(PathBuf::from));

    let Some(path) = path else {
        return EngineConfig::default();
    };

    match EngineConfig::load(&path) {
        Ok(config) => {
            info!(path = %path.display(), ?config, "loaded config");
            config
        }
        Err(e) => {
            warn!("{e}; using default config");
            EngineConfig::default()
        }
    }
}

fn main() -> Result<(), eframe::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = load_config();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 680.0])
            .with_min_inner_size([700.0, 520.0])
            .with_title("Caro"),
        ..Default::default()
    };

    eframe::run_native(
        "Caro",
        options,
        Box::new(move |cc| Ok(Box::new(CaroApp::new(cc, config)))),
    )
}
