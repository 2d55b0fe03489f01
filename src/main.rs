mod app;
mod color;
mod data;
mod error;
mod state;
mod ui;

use std::path::PathBuf;

use anyhow::Context;
use eframe::egui;

use app::PubFinderApp;
use state::AppState;

/// Checked-in default dataset, resolved relative to the crate directory.
const DEFAULT_DATA_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/data/pub_data.csv");

/// Data path precedence: CLI argument, then `PUB_FINDER_DATA`, then the
/// checked-in default.
fn data_path() -> PathBuf {
    if let Some(arg) = std::env::args().nth(1) {
        return PathBuf::from(arg);
    }
    if let Ok(var) = std::env::var("PUB_FINDER_DATA") {
        return PathBuf::from(var);
    }
    PathBuf::from(DEFAULT_DATA_PATH)
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    // Startup load is fatal: every view depends on the dataset.
    let path = data_path();
    let dataset = data::loader::load_file(&path)
        .with_context(|| format!("loading pub data from {}", path.display()))?;
    if dataset.is_empty() {
        log::warn!("{} contains no pubs", path.display());
    }
    log::info!(
        "Loaded {} pubs across {} local authorities from {}",
        dataset.len(),
        dataset.local_authorities.len(),
        path.display()
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    let state = AppState::new(dataset, path);
    eframe::run_native(
        "Pub Finder App",
        options,
        Box::new(move |cc| {
            // Install image loaders so egui can render the png assets.
            egui_extras::install_image_loaders(&cc.egui_ctx);
            Ok(Box::new(PubFinderApp::new(state)))
        }),
    )
    .map_err(|e| anyhow::anyhow!("running pub finder ui: {e}"))
}
