use std::path::PathBuf;

use clap::Parser;

use crate::data::aggregate::AggregateOptions;

pub const DEFAULT_LOGO_URL: &str =
    "https://upload.wikimedia.org/wikipedia/commons/0/08/Netflix_2015_logo.svg";

/// Command line options. Every flag can also come from the environment.
#[derive(Debug, Clone, Parser)]
#[command(name = "catalog-dash")]
#[command(about = "Explore a title catalog: per-title details and aggregate charts")]
pub struct Config {
    /// Catalog file (.xlsx, .xls, .ods, .csv, .json or .parquet)
    #[arg(short, long, env = "CATALOG_DASH_DATA", default_value = "netflix_titles.xlsx")]
    pub data: PathBuf,

    /// Logo shown in the header, fetched over HTTP
    #[arg(long, env = "CATALOG_DASH_LOGO_URL", default_value = DEFAULT_LOGO_URL)]
    pub logo_url: String,

    /// Rows shown in the dataset overview table
    #[arg(long, env = "CATALOG_DASH_PREVIEW_ROWS", default_value_t = 5)]
    pub preview_rows: usize,

    /// Number of genres in the top-genres chart
    #[arg(long, env = "CATALOG_DASH_TOP_GENRES", default_value_t = 10)]
    pub top_genres: usize,

    /// First release year of the releases-over-time chart
    #[arg(long, env = "CATALOG_DASH_SINCE_YEAR", default_value_t = 2000)]
    pub since_year: i32,
}

impl Config {
    pub fn aggregate_options(&self) -> AggregateOptions {
        AggregateOptions {
            min_release_year: self.since_year,
            top_genres: self.top_genres,
        }
    }
}
