use std::sync::Arc;

use eframe::egui::{self, ScrollArea, Ui};

use crate::config::Config;
use crate::data::model::Catalog;
use crate::state::AppState;
use crate::ui::{charts, panels};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct CatalogDashApp {
    pub state: AppState,
    logo_url: String,
    preview_rows: usize,
}

impl CatalogDashApp {
    pub fn new(catalog: Arc<Catalog>, config: &Config) -> Self {
        Self {
            state: AppState::new(catalog, config.aggregate_options()),
            logo_url: config.logo_url.clone(),
            preview_rows: config.preview_rows,
        }
    }
}

impl eframe::App for CatalogDashApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: header ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &self.state, &self.logo_url);
        });

        // ---- Left side panel: selectors ----
        egui::SidePanel::left("selector_panel")
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: details and charts ----
        egui::CentralPanel::default().show(ctx, |ui| {
            ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui: &mut Ui| {
                    dashboard(ui, &self.state, self.preview_rows);
                });
        });
    }
}

fn dashboard(ui: &mut Ui, state: &AppState, preview_rows: usize) {
    let aggregates = &state.view.aggregates;

    egui::CollapsingHeader::new("Dataset Overview")
        .default_open(true)
        .show(ui, |ui: &mut Ui| {
            panels::overview_table(ui, &state.catalog, preview_rows);
        });
    ui.separator();

    panels::detail_row(ui, state.current_record());
    ui.separator();

    ui.columns(3, |cols: &mut [Ui]| {
        charts::rating_chart(&mut cols[0], &aggregates.ratings);
        charts::releases_chart(&mut cols[1], &aggregates.releases);
        charts::type_treemap(&mut cols[2], &aggregates.type_split);
    });
    ui.separator();

    ui.columns(2, |cols: &mut [Ui]| {
        charts::genres_chart(&mut cols[0], &aggregates.top_genres);
        charts::country_map(&mut cols[1], &aggregates.countries);
    });
}
