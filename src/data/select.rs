use std::collections::HashSet;

use super::model::{Catalog, TitleType};

// ---------------------------------------------------------------------------
// Cascading selection: type → title → record
// ---------------------------------------------------------------------------

/// Outcome of looking up a (type, title) pair.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Selection {
    /// No record matches.
    #[default]
    Empty,
    /// Exactly one record, by index into [`Catalog::records`].
    Unique(usize),
    /// Several records share the title; indices in dataset order.
    Ambiguous(Vec<usize>),
}

impl Selection {
    /// All matching record indices, in dataset order.
    pub fn indices(&self) -> &[usize] {
        match self {
            Selection::Empty => &[],
            Selection::Unique(idx) => std::slice::from_ref(idx),
            Selection::Ambiguous(indices) => indices,
        }
    }

    pub fn len(&self) -> usize {
        self.indices().len()
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Selection::Empty)
    }
}

/// Distinct types present in the catalog, in first-appearance order.
pub fn types(catalog: &Catalog) -> Vec<TitleType> {
    let mut seen = Vec::new();
    for r in &catalog.records {
        if !seen.contains(&r.kind) {
            seen.push(r.kind);
            if seen.len() == TitleType::ALL.len() {
                break;
            }
        }
    }
    seen
}

/// Distinct titles of the given type, in first-appearance order.
pub fn titles_for_type(catalog: &Catalog, kind: TitleType) -> Vec<&str> {
    let mut seen = HashSet::new();
    catalog
        .records
        .iter()
        .filter(|r| r.kind == kind)
        .map(|r| r.title.as_str())
        .filter(|t| seen.insert(*t))
        .collect()
}

/// Look up the record(s) matching both `kind` and `title` exactly.
pub fn select(catalog: &Catalog, kind: TitleType, title: &str) -> Selection {
    let mut indices: Vec<usize> = catalog
        .records
        .iter()
        .enumerate()
        .filter(|(_, r)| r.kind == kind && r.title == title)
        .map(|(i, _)| i)
        .collect();

    match indices.len() {
        0 => Selection::Empty,
        1 => Selection::Unique(indices.remove(0)),
        _ => Selection::Ambiguous(indices),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::TitleRecord;

    fn record(kind: TitleType, title: &str) -> TitleRecord {
        TitleRecord {
            title: title.to_string(),
            kind,
            description: String::new(),
            listed_in: None,
            rating: None,
            duration: None,
            release_year: 2020,
            country: None,
        }
    }

    fn catalog() -> Catalog {
        Catalog::new(vec![
            record(TitleType::TvShow, "Dark"),
            record(TitleType::Movie, "Heat"),
            record(TitleType::Movie, "Alien"),
            record(TitleType::Movie, "Heat"),
            record(TitleType::TvShow, "Alien"),
        ])
    }

    #[test]
    fn types_in_first_appearance_order() {
        assert_eq!(types(&catalog()), vec![TitleType::TvShow, TitleType::Movie]);
        assert!(types(&Catalog::default()).is_empty());
    }

    #[test]
    fn titles_only_of_requested_type() {
        let catalog = catalog();
        for kind in TitleType::ALL {
            for title in titles_for_type(&catalog, kind) {
                assert!(catalog
                    .records
                    .iter()
                    .any(|r| r.title == title && r.kind == kind));
            }
        }
        assert_eq!(titles_for_type(&catalog, TitleType::Movie), vec!["Heat", "Alien"]);
        assert_eq!(titles_for_type(&catalog, TitleType::TvShow), vec!["Dark", "Alien"]);
    }

    #[test]
    fn select_distinguishes_empty_unique_and_ambiguous() {
        let catalog = catalog();
        assert_eq!(select(&catalog, TitleType::Movie, "Dark"), Selection::Empty);
        assert_eq!(select(&catalog, TitleType::TvShow, "Alien"), Selection::Unique(4));
        assert_eq!(
            select(&catalog, TitleType::Movie, "Heat"),
            Selection::Ambiguous(vec![1, 3])
        );
        assert_eq!(select(&catalog, TitleType::Movie, "Heat").len(), 2);
        assert!(select(&catalog, TitleType::Movie, "nope").is_empty());
    }
}
