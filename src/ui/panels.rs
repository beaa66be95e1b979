use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};
use egui_extras::{Column, TableBuilder};

use crate::color::PRIMARY_RED;
use crate::data::model::{Catalog, TitleRecord};
use crate::state::{AppState, Interaction};

// ---------------------------------------------------------------------------
// Left side panel – cascading selectors
// ---------------------------------------------------------------------------

/// Render the selector panel and apply whatever the user changed.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Selection");
    ui.separator();

    if state.catalog.is_empty() {
        ui.label("The catalog is empty.");
        return;
    }

    // Interactions are collected first and applied once the widgets no
    // longer borrow the view.
    let mut pending: Vec<Interaction> = Vec::new();
    let view = &state.view;

    ui.strong("Select Program Type");
    let type_text = state
        .selected_type
        .map(|k| k.to_string())
        .unwrap_or_default();
    egui::ComboBox::from_id_salt("program_type")
        .selected_text(type_text)
        .width(ui.available_width())
        .show_ui(ui, |ui: &mut Ui| {
            for kind in &view.types {
                if ui
                    .selectable_label(state.selected_type == Some(*kind), kind.label())
                    .clicked()
                {
                    pending.push(Interaction::SelectType(*kind));
                }
            }
        });
    ui.add_space(6.0);

    ui.strong("Search Titles");
    let mut query = state.title_query.clone();
    if ui
        .add(egui::TextEdit::singleline(&mut query).hint_text("type to narrow the list"))
        .changed()
    {
        pending.push(Interaction::Search(query));
    }
    ui.add_space(6.0);

    ui.strong(format!("Select Program ({})", view.titles.len()));
    let title_text = state.selected_title.clone().unwrap_or_default();
    egui::ComboBox::from_id_salt("program_title")
        .selected_text(RichText::new(title_text))
        .width(ui.available_width())
        .height(400.0)
        .show_ui(ui, |ui: &mut Ui| {
            for title in &view.titles {
                let selected = state.selected_title.as_deref() == Some(title.as_str());
                if ui.selectable_label(selected, title.as_str()).clicked() {
                    pending.push(Interaction::SelectTitle(title.clone()));
                }
            }
        });

    // ---- Several records share the selected title ----
    let matches = view.selection.len();
    if matches > 1 {
        ui.add_space(6.0);
        ui.label(RichText::new(format!("{matches} titles share this name")).color(Color32::YELLOW));
        ui.horizontal(|ui: &mut Ui| {
            for i in 0..matches {
                if ui
                    .selectable_label(state.match_cursor == i, format!("#{}", i + 1))
                    .clicked()
                {
                    pending.push(Interaction::PickMatch(i));
                }
            }
        });
    }

    for interaction in pending {
        state.apply(interaction);
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the dashboard header: logo, title, dataset stats and status.
pub fn top_bar(ui: &mut Ui, state: &AppState, logo_url: &str) {
    ui.horizontal(|ui: &mut Ui| {
        ui.add(egui::Image::new(logo_url).max_width(200.0).max_height(56.0));
        ui.heading("📊📈 Catalog Dashboard");
        ui.separator();

        let catalog = &state.catalog;
        ui.label(format!("{} titles loaded", catalog.len()));
        for share in &state.view.aggregates.type_split {
            ui.label(format!("{}: {}", share.kind, share.count));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::YELLOW));
        }
    });
}

// ---------------------------------------------------------------------------
// Dataset overview
// ---------------------------------------------------------------------------

const OVERVIEW_COLUMNS: [&str; 8] = [
    "type",
    "title",
    "rating",
    "duration",
    "release_year",
    "country",
    "listed_in",
    "description",
];

/// First `rows` records as a table.
pub fn overview_table(ui: &mut Ui, catalog: &Catalog, rows: usize) {
    ui.label("Dataset Overview:");
    ScrollArea::horizontal()
        .id_salt("overview_scroll")
        .show(ui, |ui: &mut Ui| {
            TableBuilder::new(ui)
                .striped(true)
                .resizable(true)
                .columns(Column::auto().at_least(60.0).clip(true), OVERVIEW_COLUMNS.len() - 1)
                .column(Column::remainder().at_least(200.0).clip(true))
                .header(20.0, |mut header| {
                    for name in OVERVIEW_COLUMNS {
                        header.col(|ui: &mut Ui| {
                            ui.strong(name);
                        });
                    }
                })
                .body(|mut body| {
                    for record in catalog.records.iter().take(rows) {
                        body.row(18.0, |mut row| {
                            for cell in overview_cells(record) {
                                row.col(|ui: &mut Ui| {
                                    ui.add(egui::Label::new(cell).truncate());
                                });
                            }
                        });
                    }
                });
        });
}

fn overview_cells(record: &TitleRecord) -> [String; 8] {
    let opt = |v: &Option<String>| v.clone().unwrap_or_default();
    [
        record.kind.to_string(),
        record.title.clone(),
        opt(&record.rating),
        opt(&record.duration),
        record.release_year.to_string(),
        opt(&record.country),
        opt(&record.listed_in),
        record.description.clone(),
    ]
}

// ---------------------------------------------------------------------------
// Detail row for the selected title
// ---------------------------------------------------------------------------

fn banner(ui: &mut Ui, title: &str) {
    egui::Frame::default()
        .fill(PRIMARY_RED)
        .inner_margin(4.0)
        .show(ui, |ui: &mut Ui| {
            ui.vertical_centered_justified(|ui: &mut Ui| {
                ui.label(RichText::new(title).heading().color(Color32::WHITE));
            });
        });
}

/// Five blocks describing the selected record, or a placeholder.
pub fn detail_row(ui: &mut Ui, record: Option<&TitleRecord>) {
    let Some(record) = record else {
        ui.vertical_centered(|ui: &mut Ui| {
            ui.add_space(12.0);
            ui.weak("No title selected. Pick a program type and a title on the left.");
            ui.add_space(12.0);
        });
        return;
    };

    let unknown = "Unknown".to_string();
    let blocks: [(&str, String); 5] = [
        ("Description", record.description.clone()),
        ("Genre", record.listed_in.clone().unwrap_or_else(|| unknown.clone())),
        ("Rating", record.rating.clone().unwrap_or_else(|| unknown.clone())),
        ("Duration", record.duration.clone().unwrap_or_else(|| unknown.clone())),
        ("Release Year", format!("Release Year: {}", record.release_year)),
    ];

    ui.vertical_centered(|ui: &mut Ui| {
        ui.heading(&record.title);
    });
    ui.columns(blocks.len(), |cols: &mut [Ui]| {
        for (ui, (title, text)) in cols.iter_mut().zip(blocks) {
            banner(ui, title);
            ui.vertical_centered(|ui: &mut Ui| {
                ui.label(text);
            });
        }
    });
}
