use thiserror::Error;

// ---------------------------------------------------------------------------
// Load errors
// ---------------------------------------------------------------------------

/// Everything that can go wrong while turning a file into a [`Catalog`].
///
/// All variants are fatal: the dataset is read once at startup and the
/// dashboard has nothing to show without it.
///
/// [`Catalog`]: super::model::Catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Arrow error: {0}")]
    Arrow(#[from] arrow::error::ArrowError),

    #[error("Parquet error: {0}")]
    Parquet(#[from] parquet::errors::ParquetError),

    #[error("spreadsheet error: {0}")]
    Spreadsheet(#[from] calamine::Error),

    #[error("unsupported file extension: .{0}")]
    UnsupportedExtension(String),

    #[error("workbook has no worksheet")]
    EmptyWorkbook,

    #[error("missing required column '{0}'")]
    MissingColumn(&'static str),

    #[error("row {row}: '{value}' is not a valid release year")]
    InvalidYear { row: usize, value: String },

    #[error("row {row}: unknown title type '{value}' (expected 'Movie' or 'TV Show')")]
    UnknownType { row: usize, value: String },

    #[error("row {row}: empty title")]
    MissingTitle { row: usize },

    #[error("malformed input: {0}")]
    Malformed(String),
}

pub type Result<T> = std::result::Result<T, CatalogError>;
