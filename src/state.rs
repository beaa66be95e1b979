use std::sync::Arc;

use crate::data::aggregate::{AggregateOptions, Aggregates};
use crate::data::model::{Catalog, TitleRecord, TitleType};
use crate::data::select::{select, titles_for_type, types, Selection};

// ---------------------------------------------------------------------------
// User interactions
// ---------------------------------------------------------------------------

/// Everything the user can do to the dashboard. Each one triggers a full
/// re-evaluation of the selection and the aggregates.
#[derive(Debug, Clone, PartialEq)]
pub enum Interaction {
    SelectType(TitleType),
    SelectTitle(String),
    /// Narrow the title list to titles containing this text.
    Search(String),
    /// Step to another record when several share the selected title.
    PickMatch(usize),
}

// ---------------------------------------------------------------------------
// Evaluated view
// ---------------------------------------------------------------------------

/// Result of one pipeline run: everything the UI draws.
#[derive(Debug, Clone, Default)]
pub struct DashboardView {
    /// Types offered by the first selector.
    pub types: Vec<TitleType>,
    /// Titles offered by the second selector (after search narrowing).
    pub titles: Vec<String>,
    pub selection: Selection,
    pub aggregates: Aggregates,
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded once at startup, read-only afterwards.
    pub catalog: Arc<Catalog>,

    pub options: AggregateOptions,

    pub selected_type: Option<TitleType>,
    pub selected_title: Option<String>,
    pub title_query: String,

    /// Which of several same-named records is displayed.
    pub match_cursor: usize,

    /// Last evaluated pipeline output.
    pub view: DashboardView,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    /// Build the initial state: first type, first title of that type.
    pub fn new(catalog: Arc<Catalog>, options: AggregateOptions) -> Self {
        let mut state = Self {
            catalog,
            options,
            selected_type: None,
            selected_title: None,
            title_query: String::new(),
            match_cursor: 0,
            view: DashboardView::default(),
            status_message: None,
        };
        state.selected_type = types(&state.catalog).first().copied();
        state.selected_title = state.first_title();
        state.recompute();
        state
    }

    /// Apply one interaction and re-run the pipeline.
    pub fn apply(&mut self, interaction: Interaction) {
        log::debug!("interaction: {interaction:?}");
        match interaction {
            Interaction::SelectType(kind) => {
                if self.selected_type != Some(kind) {
                    self.selected_type = Some(kind);
                    self.title_query.clear();
                    self.selected_title = self.first_title();
                    self.match_cursor = 0;
                }
            }
            Interaction::SelectTitle(title) => {
                self.selected_title = Some(title);
                self.match_cursor = 0;
            }
            Interaction::Search(query) => {
                self.title_query = query;
            }
            Interaction::PickMatch(cursor) => {
                self.match_cursor = cursor;
            }
        }
        self.recompute();
    }

    /// Full pipeline run: selectors, lookup, every aggregate.
    pub fn recompute(&mut self) {
        let catalog = &self.catalog;

        let titles = match self.selected_type {
            Some(kind) => filter_titles(titles_for_type(catalog, kind), &self.title_query),
            None => Vec::new(),
        };

        // The shown title must be one the selector offers; a search that
        // matches nothing leaves nothing selected.
        let offered = self
            .selected_title
            .as_ref()
            .is_some_and(|t| titles.contains(t));
        if !offered {
            self.selected_title = titles.first().cloned();
            self.match_cursor = 0;
        }

        let selection = match (self.selected_type, &self.selected_title) {
            (Some(kind), Some(title)) => select(catalog, kind, title),
            _ => Selection::Empty,
        };
        if self.match_cursor >= selection.len() {
            self.match_cursor = 0;
        }

        self.status_message = match &selection {
            Selection::Empty if !catalog.is_empty() => {
                Some("No title matches the current selection.".to_string())
            }
            Selection::Ambiguous(indices) => {
                Some(format!("{} titles share this name.", indices.len()))
            }
            _ => None,
        };

        self.view = DashboardView {
            types: types(catalog),
            titles,
            selection,
            aggregates: Aggregates::compute(catalog, &self.options),
        };
        log::debug!(
            "pipeline evaluated: {} titles offered, {} match(es)",
            self.view.titles.len(),
            self.view.selection.len()
        );
    }

    /// The record shown in the detail panel, if any.
    pub fn current_record(&self) -> Option<&TitleRecord> {
        let idx = self.view.selection.indices().get(self.match_cursor)?;
        self.catalog.get(*idx)
    }

    fn first_title(&self) -> Option<String> {
        let kind = self.selected_type?;
        titles_for_type(&self.catalog, kind)
            .first()
            .map(|t| t.to_string())
    }
}

/// Case-insensitive substring filter; an empty query keeps everything.
fn filter_titles(titles: Vec<&str>, query: &str) -> Vec<String> {
    let query = query.trim().to_lowercase();
    titles
        .into_iter()
        .filter(|t| query.is_empty() || t.to_lowercase().contains(&query))
        .map(str::to_string)
        .collect()
}
