use std::collections::{BTreeMap, HashMap};

use super::model::{Catalog, TitleType};

// ---------------------------------------------------------------------------
// Derived tables
// ---------------------------------------------------------------------------

/// One bucket of a `value_counts`-style aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryCount {
    pub label: String,
    pub count: usize,
}

/// Number of titles of one type released in one year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearTypeCount {
    pub year: i32,
    pub kind: TitleType,
    pub count: usize,
}

/// Share of the catalog held by one title type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TypeShare {
    pub kind: TitleType,
    pub count: usize,
    /// `count / total * 100`.
    pub percentage: f64,
}

/// Knobs for the aggregates that take parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AggregateOptions {
    /// Oldest release year kept by [`releases_by_year_type`].
    pub min_release_year: i32,
    /// Length of the [`top_genres`] list.
    pub top_genres: usize,
}

impl Default for AggregateOptions {
    fn default() -> Self {
        Self {
            min_release_year: 2000,
            top_genres: 10,
        }
    }
}

/// All five dashboard aggregates, evaluated together.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Aggregates {
    pub ratings: Vec<CategoryCount>,
    pub releases: Vec<YearTypeCount>,
    pub type_split: Vec<TypeShare>,
    pub top_genres: Vec<CategoryCount>,
    pub countries: Vec<CategoryCount>,
}

impl Aggregates {
    pub fn compute(catalog: &Catalog, options: &AggregateOptions) -> Self {
        Self {
            ratings: rating_distribution(catalog),
            releases: releases_by_year_type(catalog, options.min_release_year),
            type_split: type_split(catalog),
            top_genres: top_genres(catalog, options.top_genres),
            countries: country_distribution(catalog),
        }
    }
}

// ---------------------------------------------------------------------------
// Aggregators
// ---------------------------------------------------------------------------

/// Count occurrences of each value, most frequent first. Equal counts keep
/// the order in which the values first appeared.
pub fn value_counts<'a, I>(values: I) -> Vec<CategoryCount>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut position: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<CategoryCount> = Vec::new();

    for value in values {
        match position.get(value) {
            Some(&i) => counts[i].count += 1,
            None => {
                position.insert(value, counts.len());
                counts.push(CategoryCount {
                    label: value.to_string(),
                    count: 1,
                });
            }
        }
    }

    // Stable: ties stay in first-appearance order.
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}

/// Titles per age rating. Titles without a rating are left out.
pub fn rating_distribution(catalog: &Catalog) -> Vec<CategoryCount> {
    value_counts(catalog.records.iter().filter_map(|r| r.rating.as_deref()))
}

/// Titles per (release year, type), restricted to `year >= min_year`.
/// Sorted by year, then by type.
pub fn releases_by_year_type(catalog: &Catalog, min_year: i32) -> Vec<YearTypeCount> {
    let mut groups: BTreeMap<(i32, TitleType), usize> = BTreeMap::new();
    for r in catalog.records.iter().filter(|r| r.release_year >= min_year) {
        *groups.entry((r.release_year, r.kind)).or_default() += 1;
    }

    groups
        .into_iter()
        .map(|((year, kind), count)| YearTypeCount { year, kind, count })
        .collect()
}

/// Titles per type with their percentage of the whole catalog.
pub fn type_split(catalog: &Catalog) -> Vec<TypeShare> {
    let total = catalog.len();
    if total == 0 {
        return Vec::new();
    }

    let mut shares: Vec<TypeShare> = crate::data::select::types(catalog)
        .into_iter()
        .map(|kind| {
            let count = catalog.count_of(kind);
            TypeShare {
                kind,
                count,
                percentage: count as f64 / total as f64 * 100.0,
            }
        })
        .collect();

    shares.sort_by(|a, b| b.count.cmp(&a.count));
    shares
}

/// The `limit` most common genres, exploding multi-genre titles.
pub fn top_genres(catalog: &Catalog, limit: usize) -> Vec<CategoryCount> {
    let mut counts = value_counts(catalog.records.iter().flat_map(|r| r.genres()));
    counts.truncate(limit);
    counts
}

/// Titles per production country, exploding co-productions.
/// Titles without a country are left out.
pub fn country_distribution(catalog: &Catalog) -> Vec<CategoryCount> {
    value_counts(catalog.records.iter().flat_map(|r| r.countries()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::TitleRecord;

    fn record(kind: TitleType, year: i32, genres: &str, country: Option<&str>, rating: Option<&str>) -> TitleRecord {
        TitleRecord {
            title: format!("{kind} {year}"),
            kind,
            description: String::new(),
            listed_in: Some(genres.to_string()),
            rating: rating.map(str::to_string),
            duration: None,
            release_year: year,
            country: country.map(str::to_string),
        }
    }

    fn sample() -> Catalog {
        Catalog::new(vec![
            record(TitleType::Movie, 1998, "Drama, Comedy", Some("United States"), Some("R")),
            record(TitleType::Movie, 2005, "Drama", Some("France, United States"), Some("PG")),
            record(TitleType::Movie, 2005, "Action, Drama", None, Some("R")),
            record(TitleType::TvShow, 2019, "Comedy", Some("Japan"), None),
        ])
    }

    fn count_of(counts: &[CategoryCount], label: &str) -> Option<usize> {
        counts.iter().find(|c| c.label == label).map(|c| c.count)
    }

    #[test]
    fn value_counts_orders_by_count_then_first_seen() {
        let counts = value_counts(["b", "a", "a", "c", "b", "d"]);
        let labels: Vec<&str> = counts.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, vec!["b", "a", "c", "d"]);
        assert_eq!(counts[0].count, 2);
        assert!(value_counts(std::iter::empty()).is_empty());
    }

    #[test]
    fn ratings_skip_missing_values() {
        let ratings = rating_distribution(&sample());
        assert_eq!(
            ratings,
            vec![
                CategoryCount { label: "R".into(), count: 2 },
                CategoryCount { label: "PG".into(), count: 1 },
            ]
        );
    }

    #[test]
    fn three_movies_one_show_split_75_25() {
        let split = type_split(&sample());
        assert_eq!(split.len(), 2);
        assert_eq!(split[0].kind, TitleType::Movie);
        assert_eq!(split[0].count, 3);
        assert!((split[0].percentage - 75.0).abs() < 1e-9);
        assert_eq!(split[1].kind, TitleType::TvShow);
        assert!((split[1].percentage - 25.0).abs() < 1e-9);

        let total: f64 = split.iter().map(|s| s.percentage).sum();
        assert!((total - 100.0).abs() < 1e-9);
    }

    #[test]
    fn type_split_of_empty_catalog_is_empty() {
        assert!(type_split(&Catalog::default()).is_empty());
    }

    #[test]
    fn percentages_sum_to_hundred_with_uneven_counts() {
        let mut records = Vec::new();
        for i in 0..7 {
            records.push(record(TitleType::Movie, 2000 + i, "Drama", None, None));
        }
        for i in 0..4 {
            records.push(record(TitleType::TvShow, 2000 + i, "Drama", None, None));
        }
        let total: f64 = type_split(&Catalog::new(records))
            .iter()
            .map(|s| s.percentage)
            .sum();
        assert!((total - 100.0).abs() < 1e-9);
    }

    #[test]
    fn releases_start_at_min_year() {
        let releases = releases_by_year_type(&sample(), 2000);
        assert!(releases.iter().all(|r| r.year >= 2000));
        assert_eq!(
            releases,
            vec![
                YearTypeCount { year: 2005, kind: TitleType::Movie, count: 2 },
                YearTypeCount { year: 2019, kind: TitleType::TvShow, count: 1 },
            ]
        );
        assert_eq!(releases_by_year_type(&sample(), 1990).len(), 3);

        // Within one year, Movie comes before TV Show regardless of input order.
        let same_year = Catalog::new(vec![
            record(TitleType::TvShow, 2010, "Drama", None, None),
            record(TitleType::Movie, 2010, "Drama", None, None),
            record(TitleType::TvShow, 2010, "Drama", None, None),
        ]);
        assert_eq!(
            releases_by_year_type(&same_year, 2000),
            vec![
                YearTypeCount { year: 2010, kind: TitleType::Movie, count: 1 },
                YearTypeCount { year: 2010, kind: TitleType::TvShow, count: 2 },
            ]
        );
    }

    #[test]
    fn genres_are_exploded_per_title() {
        let catalog = Catalog::new(vec![record(TitleType::Movie, 2001, "Drama, Comedy", None, None)]);
        let genres = top_genres(&catalog, 10);
        assert_eq!(count_of(&genres, "Drama"), Some(1));
        assert_eq!(count_of(&genres, "Comedy"), Some(1));
        assert_eq!(genres.len(), 2);
    }

    #[test]
    fn top_genres_limited_and_descending() {
        let records = (0..15)
            .map(|i| {
                let genres: Vec<String> = (0..=i).map(|g| format!("Genre {g}")).collect();
                record(TitleType::Movie, 2010, &genres.join(", "), None, None)
            })
            .collect();
        let genres = top_genres(&Catalog::new(records), 10);
        assert_eq!(genres.len(), 10);
        assert!(genres.windows(2).all(|w| w[0].count >= w[1].count));
        assert_eq!(genres[0].label, "Genre 0");
        assert_eq!(genres[0].count, 15);

        let full = top_genres(&sample(), 10);
        assert_eq!(count_of(&full, "Drama"), Some(3));
        assert_eq!(count_of(&full, "Comedy"), Some(2));
    }

    #[test]
    fn countries_exploded_and_missing_skipped() {
        let countries = country_distribution(&sample());
        assert_eq!(count_of(&countries, "United States"), Some(2));
        assert_eq!(count_of(&countries, "France"), Some(1));
        assert_eq!(count_of(&countries, "Japan"), Some(1));
        assert_eq!(countries.iter().map(|c| c.count).sum::<usize>(), 4);
    }

    #[test]
    fn compute_runs_every_aggregate() {
        let aggregates = Aggregates::compute(&sample(), &AggregateOptions::default());
        assert_eq!(aggregates.ratings.len(), 2);
        assert_eq!(aggregates.releases.len(), 2);
        assert_eq!(aggregates.type_split.len(), 2);
        assert_eq!(aggregates.top_genres.len(), 3);
        assert_eq!(aggregates.countries.len(), 3);
    }
}
