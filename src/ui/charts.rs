use std::collections::BTreeMap;
use std::ops::RangeInclusive;

use eframe::egui::{self, Align2, Color32, RichText, Sense, Stroke, Ui};
use egui_plot::{
    uniform_grid_spacer, Bar, BarChart, GridMark, Legend, Line, Plot, PlotPoint, PlotPoints,
    Points, Polygon, Text,
};

use crate::color::{type_color, ColorScale, MAP_BACKGROUND, PRIMARY_RED};
use crate::data::aggregate::{CategoryCount, TypeShare, YearTypeCount};
use crate::data::model::TitleType;
use crate::ui::geo;
use crate::ui::treemap::{slice_layout, Tile};

const CHART_HEIGHT: f32 = 320.0;

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

fn chart_title(ui: &mut Ui, title: &str) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.strong(title);
    });
}

fn no_data(ui: &mut Ui) {
    ui.allocate_ui(egui::vec2(ui.available_width(), CHART_HEIGHT), |ui: &mut Ui| {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.weak("No data");
        });
    });
}

/// Axis label for a category plotted at integer position `value`.
fn category_label(labels: &[String], value: f64) -> String {
    if (value - value.round()).abs() > 1e-6 || value < -0.5 {
        return String::new();
    }
    labels.get(value.round() as usize).cloned().unwrap_or_default()
}

/// Hover text: the item name when there is one, coordinates otherwise.
fn hover_label(name: &str, value: &PlotPoint) -> String {
    if name.is_empty() {
        format!("{:.0}, {:.0}", value.x, value.y)
    } else {
        name.to_string()
    }
}

fn static_plot(id: &str) -> Plot<'static> {
    Plot::new(id)
        .height(CHART_HEIGHT)
        .allow_zoom(false)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .label_formatter(hover_label)
}

// ---------------------------------------------------------------------------
// Rating distribution – vertical bars
// ---------------------------------------------------------------------------

pub fn rating_chart(ui: &mut Ui, ratings: &[CategoryCount]) {
    chart_title(ui, "Distribution of Age Ratings");
    if ratings.is_empty() {
        no_data(ui);
        return;
    }

    let labels: Vec<String> = ratings.iter().map(|c| c.label.clone()).collect();
    let bars: Vec<Bar> = ratings
        .iter()
        .enumerate()
        .map(|(i, c)| {
            Bar::new(i as f64, c.count as f64)
                .name(&c.label)
                .fill(PRIMARY_RED)
                .width(0.7)
        })
        .collect();

    static_plot("rating_chart")
        .x_axis_label("Age Rating")
        .y_axis_label("Number of Titles")
        .x_grid_spacer(uniform_grid_spacer(|_| [1.0, 5.0, 10.0]))
        .x_axis_formatter(move |mark: GridMark, _range: &RangeInclusive<f64>| {
            category_label(&labels, mark.value)
        })
        .include_y(0.0)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(
                BarChart::new(bars)
                    .color(PRIMARY_RED)
                    .element_formatter(Box::new(|bar: &Bar, _chart: &BarChart| {
                        format!("{}: {}", bar.name, bar.value)
                    })),
            );
            for (i, c) in ratings.iter().enumerate() {
                plot_ui.text(
                    Text::new(PlotPoint::new(i as f64, c.count as f64), c.count.to_string())
                        .anchor(Align2::CENTER_BOTTOM),
                );
            }
        });
}

// ---------------------------------------------------------------------------
// Releases by year and type – stacked area
// ---------------------------------------------------------------------------

/// Per-type cumulative layers: for each type in stacking order, the
/// `(year, lower, upper)` band it occupies.
pub fn stack_layers(releases: &[YearTypeCount]) -> Vec<(TitleType, Vec<(f64, f64, f64)>)> {
    let mut by_year: BTreeMap<i32, BTreeMap<TitleType, usize>> = BTreeMap::new();
    for r in releases {
        *by_year.entry(r.year).or_default().entry(r.kind).or_default() += r.count;
    }

    let kinds: Vec<TitleType> = TitleType::ALL
        .into_iter()
        .filter(|k| releases.iter().any(|r| r.kind == *k))
        .collect();

    let mut layers: Vec<(TitleType, Vec<(f64, f64, f64)>)> =
        kinds.iter().map(|k| (*k, Vec::new())).collect();

    for (year, counts) in &by_year {
        let mut base = 0.0;
        for (kind, band) in layers.iter_mut() {
            let kind = *kind;
            let top = base + counts.get(&kind).copied().unwrap_or(0) as f64;
            band.push((*year as f64, base, top));
            base = top;
        }
    }
    layers
}

/// Convex quads covering one stacked band. A band with a single year gets
/// a narrow column so it stays visible.
pub fn band_quads(band: &[(f64, f64, f64)]) -> Vec<[[f64; 2]; 4]> {
    const SINGLE_YEAR_HALF_WIDTH: f64 = 0.4;
    if let [(x, lo, hi)] = band {
        let (x0, x1) = (x - SINGLE_YEAR_HALF_WIDTH, x + SINGLE_YEAR_HALF_WIDTH);
        return vec![[[x0, *lo], [x1, *lo], [x1, *hi], [x0, *hi]]];
    }
    band.windows(2)
        .map(|pair| {
            let (x0, lo0, hi0) = pair[0];
            let (x1, lo1, hi1) = pair[1];
            [[x0, lo0], [x1, lo1], [x1, hi1], [x0, hi0]]
        })
        .collect()
}

pub fn releases_chart(ui: &mut Ui, releases: &[YearTypeCount]) {
    chart_title(ui, "Programs Released by Year and Type");
    if releases.is_empty() {
        no_data(ui);
        return;
    }

    let layers = stack_layers(releases);

    static_plot("releases_chart")
        .legend(Legend::default())
        .x_axis_label("Release Year")
        .y_axis_label("Programs Released")
        .include_y(0.0)
        .show(ui, |plot_ui| {
            for (kind, band) in &layers {
                let color = type_color(*kind);
                // Polygons must be convex, so each year span is its own quad.
                for quad in band_quads(band) {
                    plot_ui.polygon(
                        Polygon::new(PlotPoints::from(quad.to_vec()))
                            .fill_color(color.gamma_multiply(0.8))
                            .stroke(Stroke::NONE)
                            .name(kind.label()),
                    );
                }
                let upper: PlotPoints = band.iter().map(|&(x, _, hi)| [x, hi]).collect();
                plot_ui.line(Line::new(upper).color(color).width(1.5).name(kind.label()));
            }
        });
}

// ---------------------------------------------------------------------------
// Type split – treemap
// ---------------------------------------------------------------------------

pub fn type_treemap(ui: &mut Ui, split: &[TypeShare]) {
    chart_title(ui, "Distribution of Program Types");
    if split.is_empty() {
        no_data(ui);
        return;
    }

    let values: Vec<f64> = split.iter().map(|s| s.count as f64).collect();
    let tiles = slice_layout(&values, Tile::new([0.0, 0.0], [1.6, 1.0]));

    static_plot("type_treemap")
        .show_axes(false)
        .show_grid(false)
        .include_x(0.0)
        .include_x(1.6)
        .include_y(0.0)
        .include_y(1.0)
        .show(ui, |plot_ui| {
            for (share, tile) in split.iter().zip(&tiles) {
                plot_ui.polygon(
                    Polygon::new(PlotPoints::from(tile.corners()))
                        .fill_color(type_color(share.kind))
                        .stroke(Stroke::new(2.0, Color32::BLACK))
                        .name(share.kind.label()),
                );
                let [cx, cy] = tile.center();
                let text = format!(
                    "{}\nCount: {}\nPercentage: {:.2}%",
                    share.kind, share.count, share.percentage
                );
                plot_ui.text(
                    Text::new(PlotPoint::new(cx, cy), RichText::new(text).color(Color32::WHITE))
                        .anchor(Align2::CENTER_CENTER),
                );
            }
        });
}

// ---------------------------------------------------------------------------
// Top genres – horizontal bars
// ---------------------------------------------------------------------------

pub fn genres_chart(ui: &mut Ui, genres: &[CategoryCount]) {
    chart_title(ui, &format!("Top {} Genres", genres.len()));
    if genres.is_empty() {
        no_data(ui);
        return;
    }

    // Most common genre on top.
    let n = genres.len();
    let position = |i: usize| (n - 1 - i) as f64;
    let labels: Vec<String> = genres.iter().rev().map(|c| c.label.clone()).collect();

    let bars: Vec<Bar> = genres
        .iter()
        .enumerate()
        .map(|(i, c)| {
            Bar::new(position(i), c.count as f64)
                .name(&c.label)
                .fill(PRIMARY_RED)
                .width(0.7)
        })
        .collect();

    static_plot("genres_chart")
        .x_axis_label("Number of Titles")
        .y_grid_spacer(uniform_grid_spacer(|_| [1.0, 5.0, 10.0]))
        .y_axis_formatter(move |mark: GridMark, _range: &RangeInclusive<f64>| {
            category_label(&labels, mark.value)
        })
        .include_x(0.0)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(
                BarChart::new(bars)
                    .color(PRIMARY_RED)
                    .horizontal()
                    .element_formatter(Box::new(|bar: &Bar, _chart: &BarChart| {
                        format!("{}: {}", bar.name, bar.value)
                    })),
            );
            for (i, c) in genres.iter().enumerate() {
                plot_ui.text(
                    Text::new(PlotPoint::new(c.count as f64, position(i)), format!(" {}", c.count))
                        .anchor(Align2::LEFT_CENTER),
                );
            }
        });
}

// ---------------------------------------------------------------------------
// Country distribution – bubble map
// ---------------------------------------------------------------------------

pub fn country_map(ui: &mut Ui, countries: &[CategoryCount]) {
    chart_title(ui, "Distribution of Programs by Country");
    if countries.is_empty() {
        no_data(ui);
        return;
    }

    let scale = ColorScale::countries();
    let max = countries.iter().map(|c| c.count).max().unwrap_or(1) as f64;
    let min = countries.iter().map(|c| c.count).min().unwrap_or(1) as f64;

    let (placed, unplaced): (Vec<_>, Vec<_>) = countries
        .iter()
        .map(|c| (c, geo::locate(&c.label)))
        .partition(|(_, pos)| pos.is_some());

    egui::Frame::default().fill(MAP_BACKGROUND).show(ui, |ui: &mut Ui| {
        Plot::new("country_map")
            .height(CHART_HEIGHT)
            .data_aspect(1.0)
            .include_x(-180.0)
            .include_x(180.0)
            .include_y(-60.0)
            .include_y(85.0)
            .show_axes(false)
            .show_background(false)
            .label_formatter(hover_label)
            .show(ui, |plot_ui| {
                for (c, pos) in &placed {
                    let Some(pos) = pos else { continue };
                    let value = c.count as f64;
                    plot_ui.points(
                        Points::new(PlotPoints::from(vec![*pos]))
                            .radius(3.0 + 12.0 * (value / max).sqrt() as f32)
                            .filled(true)
                            .color(scale.for_value(value, min, max))
                            .name(format!("{}: {}", c.label, c.count)),
                    );
                }
            });
    });

    color_bar(ui, &scale, min, max);

    if !unplaced.is_empty() {
        egui::CollapsingHeader::new(format!("Not on map ({})", unplaced.len()))
            .id_salt("unplaced_countries")
            .default_open(false)
            .show(ui, |ui: &mut Ui| {
                for (c, _) in &unplaced {
                    ui.label(format!("{}: {}", c.label, c.count));
                }
            });
    }
}

/// Horizontal gradient strip with its end values.
fn color_bar(ui: &mut Ui, scale: &ColorScale, min: f64, max: f64) {
    const STEPS: usize = 32;
    ui.horizontal(|ui: &mut Ui| {
        ui.label(format!("{min:.0}"));
        let width = (ui.available_width() - 60.0).max(40.0);
        let (rect, _) = ui.allocate_exact_size(egui::vec2(width, 10.0), Sense::hover());
        let step = rect.width() / STEPS as f32;
        for i in 0..STEPS {
            let segment = egui::Rect::from_min_size(
                egui::pos2(rect.left() + i as f32 * step, rect.top()),
                egui::vec2(step + 0.5, rect.height()),
            );
            let t = i as f32 / (STEPS - 1) as f32;
            ui.painter().rect_filled(segment, 0.0, scale.at(t));
        }
        ui.label(format!("{max:.0}"));
    });
    ui.vertical_centered(|ui: &mut Ui| {
        ui.small("Number of Programs");
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_labels_only_on_integer_marks() {
        let labels = vec!["PG".to_string(), "R".to_string()];
        assert_eq!(category_label(&labels, 0.0), "PG");
        assert_eq!(category_label(&labels, 1.0), "R");
        assert_eq!(category_label(&labels, 0.5), "");
        assert_eq!(category_label(&labels, 2.0), "");
        assert_eq!(category_label(&labels, -1.0), "");
    }

    #[test]
    fn layers_stack_movies_under_shows() {
        let releases = vec![
            YearTypeCount { year: 2001, kind: TitleType::Movie, count: 2 },
            YearTypeCount { year: 2001, kind: TitleType::TvShow, count: 1 },
            YearTypeCount { year: 2002, kind: TitleType::TvShow, count: 4 },
        ];
        let layers = stack_layers(&releases);
        assert_eq!(layers.len(), 2);

        let (kind, movies) = &layers[0];
        assert_eq!(*kind, TitleType::Movie);
        assert_eq!(movies, &vec![(2001.0, 0.0, 2.0), (2002.0, 0.0, 0.0)]);

        let (kind, shows) = &layers[1];
        assert_eq!(*kind, TitleType::TvShow);
        assert_eq!(shows, &vec![(2001.0, 2.0, 3.0), (2002.0, 0.0, 4.0)]);
    }

    #[test]
    fn single_year_band_is_a_visible_column() {
        let quads = band_quads(&[(2020.0, 1.0, 4.0)]);
        assert_eq!(quads.len(), 1);
        let [a, b, c, d] = quads[0];
        assert!(b[0] - a[0] > 0.0);
        assert_eq!((a[1], b[1], c[1], d[1]), (1.0, 1.0, 4.0, 4.0));
        assert!(band_quads(&[]).is_empty());
    }

    #[test]
    fn multi_year_band_has_one_quad_per_span() {
        let band = [(2001.0, 0.0, 2.0), (2002.0, 0.0, 5.0), (2003.0, 1.0, 3.0)];
        let quads = band_quads(&band);
        assert_eq!(quads.len(), 2);
        assert_eq!(quads[1], [[2002.0, 0.0], [2003.0, 1.0], [2003.0, 3.0], [2002.0, 5.0]]);
    }

    #[test]
    fn single_type_gives_single_layer() {
        let releases = vec![YearTypeCount { year: 2010, kind: TitleType::TvShow, count: 3 }];
        let layers = stack_layers(&releases);
        assert_eq!(layers.len(), 1);
        assert_eq!(layers[0].1, vec![(2010.0, 0.0, 3.0)]);
    }
}
