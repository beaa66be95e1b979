mod app;
mod color;
mod config;
mod data;
mod state;
mod ui;

use std::sync::Arc;

use anyhow::Context;
use app::CatalogDashApp;
use clap::Parser;
use config::Config;
use eframe::egui;

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let config = Config::parse();

    // The catalog is read once, before the window opens; a bad file is fatal.
    let catalog = match data::loader::load_file(&config.data) {
        Ok(catalog) => catalog,
        Err(e) => {
            log::error!("Failed to load {}: {e}", config.data.display());
            return Err(e).with_context(|| format!("loading catalog {}", config.data.display()));
        }
    };
    log::info!(
        "Loaded {} titles from {}",
        catalog.len(),
        config.data.display()
    );
    let catalog = Arc::new(catalog);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1400.0, 900.0])
            .with_min_inner_size([800.0, 500.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Catalog Dashboard",
        options,
        Box::new(move |cc| {
            // Image loaders for the logo (svg over http).
            egui_extras::install_image_loaders(&cc.egui_ctx);
            cc.egui_ctx.set_visuals(egui::Visuals::dark());
            Ok(Box::new(CatalogDashApp::new(catalog, &config)))
        }),
    )
    .map_err(|e| anyhow::anyhow!("UI error: {e}"))
}
