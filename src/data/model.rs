use std::fmt;
use std::str::FromStr;

// ---------------------------------------------------------------------------
// TitleType – the two kinds of catalog entries
// ---------------------------------------------------------------------------

/// Kind of a catalog entry. Ordering puts `Movie` first, which is also the
/// order used for stacking and legends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TitleType {
    Movie,
    TvShow,
}

impl TitleType {
    pub const ALL: [TitleType; 2] = [TitleType::Movie, TitleType::TvShow];

    pub fn label(self) -> &'static str {
        match self {
            TitleType::Movie => "Movie",
            TitleType::TvShow => "TV Show",
        }
    }
}

impl fmt::Display for TitleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TitleType {
    type Err = ();

    /// Accepts the dataset spellings, ignoring case and surrounding blanks.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("movie") {
            Ok(TitleType::Movie)
        } else if s.eq_ignore_ascii_case("tv show") {
            Ok(TitleType::TvShow)
        } else {
            Err(())
        }
    }
}

// ---------------------------------------------------------------------------
// TitleRecord – one row of the catalog
// ---------------------------------------------------------------------------

/// A single catalog entry.
#[derive(Debug, Clone, PartialEq)]
pub struct TitleRecord {
    pub title: String,
    pub kind: TitleType,
    pub description: String,
    /// Raw `listed_in` cell, e.g. `"Dramas, International Movies"`.
    pub listed_in: Option<String>,
    pub rating: Option<String>,
    pub duration: Option<String>,
    pub release_year: i32,
    /// Raw `country` cell, may list several countries.
    pub country: Option<String>,
}

impl TitleRecord {
    /// Genres of this title, one item per listed genre.
    pub fn genres(&self) -> impl Iterator<Item = &str> {
        split_multi(self.listed_in.as_deref())
    }

    /// Production countries of this title, one item per listed country.
    pub fn countries(&self) -> impl Iterator<Item = &str> {
        split_multi(self.country.as_deref())
    }
}

/// Split a comma-delimited multi-value cell. Pieces are trimmed and empty
/// pieces dropped, so `"France, , Belgium,"` yields two values.
pub fn split_multi(cell: Option<&str>) -> impl Iterator<Item = &str> {
    cell.unwrap_or("")
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

// ---------------------------------------------------------------------------
// Catalog – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The loaded dataset. Never mutated after construction.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub records: Vec<TitleRecord>,
}

impl Catalog {
    pub fn new(records: Vec<TitleRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&TitleRecord> {
        self.records.get(index)
    }

    /// Number of records of the given type.
    pub fn count_of(&self, kind: TitleType) -> usize {
        self.records.iter().filter(|r| r.kind == kind).count()
    }
}
